use crate::{
    api::error,
    modules::film::{
        model::{InsertFilm, UpdateFilm},
        schema::FilmEntity,
    },
};

#[async_trait::async_trait]
pub trait FilmRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<FilmEntity>, error::SystemError>;

    async fn find_all(&self) -> Result<Vec<FilmEntity>, error::SystemError>;

    async fn create(&self, film: &InsertFilm) -> Result<FilmEntity, error::SystemError>;

    async fn update(&self, id: i64, film: &UpdateFilm) -> Result<FilmEntity, error::SystemError>;

    async fn add_like(&self, film_id: i64, user_id: i64) -> Result<(), error::SystemError>;

    async fn remove_like(&self, film_id: i64, user_id: i64) -> Result<(), error::SystemError>;
}
