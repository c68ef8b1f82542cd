use std::cmp::Reverse;
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::Mutex;
use validator::Validate;

use crate::{
    api::error,
    modules::{
        film::{
            model::{FilmModel, FilmResponse, InsertFilm, UpdateFilm},
            repository::FilmRepository,
            schema::FilmEntity,
        },
        user::{repository::UserRepository, schema::UserEntity},
    },
};

#[derive(Clone)]
pub struct FilmService<F, U>
where
    F: FilmRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    film_repo: Arc<F>,
    user_repo: Arc<U>,
    // Serialises like changes, which touch both stores.
    likes_guard: Arc<Mutex<()>>,
}

impl<F, U> FilmService<F, U>
where
    F: FilmRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn with_dependencies(film_repo: Arc<F>, user_repo: Arc<U>) -> Self {
        info!("FilmService initialized with dependencies");
        FilmService { film_repo, user_repo, likes_guard: Arc::new(Mutex::new(())) }
    }

    pub async fn create_film(&self, film: FilmModel) -> Result<FilmResponse, error::SystemError> {
        info!("Request to create film '{}'", film.name);
        film.validate()?;

        let created = self.film_repo.create(&InsertFilm::from(film)).await?;
        info!("Film '{}' created with ID {}", created.name, created.id);
        Ok(FilmResponse::from(created))
    }

    pub async fn get_all(&self) -> Result<Vec<FilmResponse>, error::SystemError> {
        let films = self.film_repo.find_all().await?;
        Ok(films.into_iter().map(FilmResponse::from).collect())
    }

    pub async fn update_film(&self, film: FilmModel) -> Result<FilmResponse, error::SystemError> {
        info!("Request to update film '{}'", film.name);
        film.validate()?;
        let id = film.id.ok_or_else(|| error::SystemError::bad_request("Film ID must be set"))?;

        let updated = self.film_repo.update(id, &UpdateFilm::from(film)).await?;
        info!("Film {} updated", updated.id);
        Ok(FilmResponse::from(updated))
    }

    pub async fn get_film_by_id(&self, id: i64) -> Result<FilmResponse, error::SystemError> {
        self.find_film(id).await.map(FilmResponse::from)
    }

    pub async fn add_like(&self, film_id: i64, user_id: i64) -> Result<(), error::SystemError> {
        let _guard = self.likes_guard.lock().await;
        let (film, user) = self.require_film_and_user(film_id, user_id).await?;
        let already_liked = film.likes.contains(&user.id);

        self.film_repo.add_like(film.id, user.id).await?;
        if let Err(err) = self.user_repo.add_liked_film(user.id, film.id).await {
            if !already_liked {
                self.film_repo.remove_like(film.id, user.id).await?;
            }
            return Err(err);
        }

        info!("User '{}' liked film '{}'", user.login, film.name);
        Ok(())
    }

    pub async fn remove_like(&self, film_id: i64, user_id: i64) -> Result<(), error::SystemError> {
        let _guard = self.likes_guard.lock().await;
        let (film, user) = self.require_film_and_user(film_id, user_id).await?;
        let was_liked = film.likes.contains(&user.id);

        self.film_repo.remove_like(film.id, user.id).await?;
        if let Err(err) = self.user_repo.remove_liked_film(user.id, film.id).await {
            if was_liked {
                self.film_repo.add_like(film.id, user.id).await?;
            }
            return Err(err);
        }

        info!("User '{}' removed like from film '{}'", user.login, film.name);
        Ok(())
    }

    /// Films ordered by like count, most liked first; ties keep ID order.
    pub async fn get_most_popular_films(
        &self,
        count: i64,
    ) -> Result<Vec<FilmResponse>, error::SystemError> {
        if count <= 0 {
            warn!("Popular films requested with non-positive count {count}");
            return Ok(Vec::new());
        }

        let mut films = self.film_repo.find_all().await?;
        films.sort_by_key(|film| Reverse(film.likes.len()));
        films.truncate(usize::try_from(count).unwrap_or(usize::MAX));
        Ok(films.into_iter().map(FilmResponse::from).collect())
    }

    async fn find_film(&self, id: i64) -> Result<FilmEntity, error::SystemError> {
        self.film_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found(format!("Film with ID {id} not found")))
    }

    async fn require_film_and_user(
        &self,
        film_id: i64,
        user_id: i64,
    ) -> Result<(FilmEntity, UserEntity), error::SystemError> {
        let film = self.find_film(film_id).await?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found(format!("User with ID {user_id} not found")))?;
        Ok((film, user))
    }
}
