use actix_web::{delete, get, post, put, web};

use crate::{
    ENV,
    api::{error, success},
    modules::{
        film::{
            model::{FilmModel, FilmResponse, PopularQuery},
            repository_memory::FilmRepositoryMemory,
            service::FilmService,
        },
        user::repository_memory::UserRepositoryMemory,
    },
};

pub type FilmSvc = FilmService<FilmRepositoryMemory, UserRepositoryMemory>;

#[post("")]
pub async fn create_film(
    film_service: web::Data<FilmSvc>,
    film_data: web::Json<FilmModel>,
) -> Result<success::Success<FilmResponse>, error::Error> {
    let film = film_service.create_film(film_data.into_inner()).await?;
    Ok(success::Success::created(film, "Film created successfully"))
}

#[put("")]
pub async fn update_film(
    film_service: web::Data<FilmSvc>,
    film_data: web::Json<FilmModel>,
) -> Result<success::Success<FilmResponse>, error::Error> {
    let film = film_service.update_film(film_data.into_inner()).await?;
    Ok(success::Success::ok(film, "Film updated successfully"))
}

#[get("")]
pub async fn list_films(
    film_service: web::Data<FilmSvc>,
) -> Result<success::Success<Vec<FilmResponse>>, error::Error> {
    let films = film_service.get_all().await?;
    Ok(success::Success::ok(films, "Films retrieved successfully"))
}

#[get("/popular")]
pub async fn list_popular_films(
    film_service: web::Data<FilmSvc>,
    query: web::Query<PopularQuery>,
) -> Result<success::Success<Vec<FilmResponse>>, error::Error> {
    let count = query.count_or(ENV.popular_films_count);
    let films = film_service.get_most_popular_films(count).await?;
    Ok(success::Success::ok(films, "Popular films retrieved successfully"))
}

#[get("/{id}")]
pub async fn get_film(
    film_service: web::Data<FilmSvc>,
    film_id: web::Path<i64>,
) -> Result<success::Success<FilmResponse>, error::Error> {
    let film = film_service.get_film_by_id(film_id.into_inner()).await?;
    Ok(success::Success::ok(film, "Film retrieved successfully"))
}

#[put("/{id}/like/{user_id}")]
pub async fn add_like(
    film_service: web::Data<FilmSvc>,
    path: web::Path<(i64, i64)>,
) -> Result<success::Success<()>, error::Error> {
    let (film_id, user_id) = path.into_inner();
    film_service.add_like(film_id, user_id).await?;
    Ok(success::Success::no_content())
}

#[delete("/{id}/like/{user_id}")]
pub async fn remove_like(
    film_service: web::Data<FilmSvc>,
    path: web::Path<(i64, i64)>,
) -> Result<success::Success<()>, error::Error> {
    let (film_id, user_id) = path.into_inner();
    film_service.remove_like(film_id, user_id).await?;
    Ok(success::Success::no_content())
}
