use crate::modules::film::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    // `/popular` goes before `/{id}` so it is not captured as an ID.
    cfg.service(
        scope("/films")
            .service(create_film)
            .service(update_film)
            .service(list_films)
            .service(list_popular_films)
            .service(get_film)
            .service(add_like)
            .service(remove_like),
    );
}
