use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

#[derive(Debug, PartialEq)]
pub struct Config {
    pub workers: usize,
    pub bind: String,
    pub base_url: String,
    pub file: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Result<Config, Box<dyn std::error::Error>> {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut workers: usize = match var("RATES_PAGE_WORKERS") {
            Some(value) => value.trim().parse()?,
            None => 1,
        };
        if workers == 0 {
            workers = 1;
        }

        let bind = var("RATES_PAGE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let base_url = var("RATES_PAGE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let file = var("RATES_PAGE_FILE").map(PathBuf::from);

        Ok(Config {
            workers,
            bind,
            base_url,
            file,
        })
    }
}
