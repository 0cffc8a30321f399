use actix_web::{web, App, HttpServer};
use anyhow::Context;
use backend::config::AppConfig;
use backend::state::AppState;
use backend::{db, render, services};
use env_logger::Env;
use log::info;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()?;
    let database = db::connect(&config.mongo_uri, &config.database)
        .await
        .with_context(|| format!("failed to connect to MongoDB at {}", config.mongo_uri))?;
    let templates = render::build_templates()?;

    let url = format!("http://{}:{}", config.host, config.port);
    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    info!("Server running at {} (database '{}')", url, config.database);

    let state = AppState {
        db: database,
        templates,
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(services::configure_app)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
