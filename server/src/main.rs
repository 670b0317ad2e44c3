#[macro_use]
extern crate log;

use std::io;

use actix_web::{middleware::Logger, HttpServer};
use dotenv::dotenv;
use env_logger;

mod app;
mod config;
mod handlers;
mod routes;
mod tests;

use crate::app::create_app;
use crate::config::Config;

fn startup_error(error: errors::Error) -> io::Error {
    error!("Failed to start - {}", error);
    io::Error::new(io::ErrorKind::Other, error.to_string())
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(startup_error)?;
    let pool = db::new_pool(&config.database_url).map_err(startup_error)?;
    let bind_address = config.bind_address.clone();

    info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        create_app(pool.clone(), config.clone())
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
    })
    .bind(bind_address)?
    .run()
    .await
}
