use log::{debug, error, info};
use rates_loader::{FileSource, HttpSource, RatesSource};
use rates_render::HtmlPage;
use serde::Serialize;
use std::process::exit;

use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};

use config::Config;
use page::{PageSource, show_rates};

mod config;
mod page;

#[derive(Serialize)]
struct HealthcheckResponse {
    status: String,
}

async fn index<S: RatesSource + 'static>(source: web::Data<S>) -> impl Responder {
    let mut page = HtmlPage::new();
    if show_rates(source.get_ref(), &mut page, chrono::Local::now())
        .await
        .is_err()
    {
        debug!("index | rendered with load error");
    }
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page.render())
}

#[get("/healthcheck")]
async fn healthcheck() -> impl Responder {
    web::Json(HealthcheckResponse {
        status: "ok".to_string(),
    })
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(HealthcheckResponse {
        status: "not found".to_string(),
    })
}

fn routes<S: RatesSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(healthcheck).route("/", web::get().to(index::<S>));
}

fn page_source(config: &Config) -> Result<PageSource, Box<dyn std::error::Error>> {
    if let Some(path) = &config.file {
        info!("Reading rates from {}", path.display());
        return Ok(PageSource::File(FileSource::new(path)));
    }
    let source = HttpSource::new(&config.base_url)?;
    info!("Fetching rates from {}", source.url());
    Ok(PageSource::Http(source))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Could not create config: {}", e);
            exit(1);
        }
    };

    let source = match page_source(&config) {
        Ok(source) => web::Data::new(source),
        Err(e) => {
            error!("Could not create rates source: {}", e);
            exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .app_data(source.clone())
            .configure(routes::<PageSource>)
            .default_service(web::to(not_found))
            .wrap(Logger::default())
    })
    .bind(config.bind.as_str())?
    .workers(config.workers)
    .run()
    .await
}
