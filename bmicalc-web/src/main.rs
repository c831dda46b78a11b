use std::error::Error;

use actix_web::{App, HttpServer};
use log::info;

use bmicalc_web::config::ServerConfig;
use bmicalc_web::handlers;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let config = ServerConfig::from_env();
    let server = HttpServer::new(|| App::new().configure(handlers::configure))
        .bind(("0.0.0.0", config.port))?;

    info!("Server is running at http://localhost:{}", config.port);
    server.run().await?;

    Ok(())
}
