use actix_cors::Cors;
use actix_web::{self, App, HttpServer, middleware::Logger, web};
use std::sync::{Arc, LazyLock};

use crate::modules::{
    film::{handle::FilmSvc, repository_memory::FilmRepositoryMemory, service::FilmService},
    user::{repository_memory::UserRepositoryMemory, service::UserService},
};

mod api;
mod constants;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

/// Wires both stores into their services. The film service shares the user
/// store so likes can be mirrored onto users.
pub fn build_services() -> (UserService, FilmSvc) {
    let user_repo = Arc::new(UserRepositoryMemory::new());
    let film_repo = Arc::new(FilmRepositoryMemory::new());

    let user_service = UserService::with_dependencies(user_repo.clone());
    let film_service = FilmService::with_dependencies(film_repo, user_repo);
    (user_service, film_service)
}

/// Loads `ENV` (and with it the logger) before any service logs its startup.
pub fn bootstrap() -> (UserService, FilmSvc) {
    LazyLock::force(&ENV);
    build_services()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(utils::json_config())
        .app_data(utils::path_config())
        .app_data(utils::query_config())
        .service(health_check)
        .configure(modules::user::route::configure)
        .configure(modules::film::route::configure);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let (user_service, film_service) = bootstrap();
    let user_service = web::Data::new(user_service);
    let film_service = web::Data::new(film_service);

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(ENV.frontend_url.as_str())
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(user_service.clone())
            .app_data(film_service.clone())
            .configure(configure)
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(ENV.workers)
    .run()
    .await
}
