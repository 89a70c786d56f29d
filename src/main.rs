use actix_web::{web, App, HttpServer};
use log::info;
use std::fs::OpenOptions;
use std::io;

use wordrelay::config::{relay_command, RelayConfig};
use wordrelay::handlers;
use wordrelay::models::AppState;

// Logs go to the given file when set, otherwise to stderr
fn init_logging(log_file: Option<&str>) -> io::Result<()> {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new().create(true).append(true).open(file)?;

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let matches = relay_command().get_matches();
    let config = RelayConfig::from_matches(&matches);

    init_logging(config.log_file.as_deref())?;

    info!(
        "Relaying to {} with a {} ms timeout",
        config.upstream.base_url,
        config.upstream.timeout.as_millis()
    );

    let shared_state = web::Data::new(AppState::new(config.upstream.clone()));

    info!("Listening on {}", config.listen_host);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .configure(handlers::configure)
    })
    .bind(&config.listen_host)?
    .run()
    .await
}
