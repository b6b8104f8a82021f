//! Main entry point for the lobby rendezvous server.
//!
//! Initializes logging and configuration, starts the lobby server actor,
//! and launches the HTTP server with the `/lobby_id`, `/reset` and `/status` endpoints.

use actix::Actor;
use actix_web::{middleware, web, App, HttpServer};
use log::info;

use config::server::ServerConfig;
use lobby::server::LobbyServer;
use server::status_page::StatusPresenter;

pub mod config;
mod lobby;
mod server;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let presenter = StatusPresenter::new(config.status_layout).map_err(std::io::Error::other)?;
    info!(
        "[Config] Listening on {}:{} with {:?} status layout",
        config.host,
        config.port,
        presenter.layout()
    );

    // Start the LobbyServer actor (owns both slots and the history).
    let lobby_addr = LobbyServer::new().start();

    // Shared application state for HTTP handlers.
    let state = web::Data::new(server::state::AppState::new(lobby_addr, presenter));

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
