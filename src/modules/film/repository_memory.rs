use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use tokio::sync::RwLock;

use crate::{
    api::error,
    modules::film::{
        model::{InsertFilm, UpdateFilm},
        repository::FilmRepository,
        schema::FilmEntity,
    },
};

#[derive(Default)]
struct FilmTable {
    last_id: i64,
    rows: BTreeMap<i64, FilmEntity>,
}

impl FilmTable {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn row_mut(&mut self, id: i64) -> Result<&mut FilmEntity, error::SystemError> {
        self.rows
            .get_mut(&id)
            .ok_or_else(|| error::SystemError::not_found(format!("Film with ID {id} not found")))
    }
}

/// Process-local film store. IDs start at 1 and are never reused.
#[derive(Default)]
pub struct FilmRepositoryMemory {
    table: RwLock<FilmTable>,
}

impl FilmRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FilmRepository for FilmRepositoryMemory {
    async fn find_by_id(&self, id: i64) -> Result<Option<FilmEntity>, error::SystemError> {
        let table = self.table.read().await;
        debug!("Looking up film {id}");
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<FilmEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, film: &InsertFilm) -> Result<FilmEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let id = table.next_id();
        let entity = FilmEntity {
            id,
            name: film.name.clone(),
            description: film.description.clone(),
            release_date: film.release_date,
            duration: film.duration,
            likes: BTreeSet::new(),
        };
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: i64, film: &UpdateFilm) -> Result<FilmEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let row = table.row_mut(id)?;
        row.name = film.name.clone();
        row.description = film.description.clone();
        row.release_date = film.release_date;
        row.duration = film.duration;
        Ok(row.clone())
    }

    async fn add_like(&self, film_id: i64, user_id: i64) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        table.row_mut(film_id)?.likes.insert(user_id);
        Ok(())
    }

    async fn remove_like(&self, film_id: i64, user_id: i64) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        table.row_mut(film_id)?.likes.remove(&user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn insert(name: &str) -> InsertFilm {
        InsertFilm {
            name: name.to_string(),
            description: format!("{name} description"),
            release_date: NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
            duration: 136,
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = FilmRepositoryMemory::new();
        let first = repo.create(&insert("The Matrix")).await.unwrap();
        let second = repo.create(&insert("Heat")).await.unwrap();

        assert_eq!((first.id, second.id), (1, 2));
        assert!(first.likes.is_empty());
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn update_keeps_likes_and_returns_snapshot() {
        let repo = FilmRepositoryMemory::new();
        let film = repo.create(&insert("The Matrix")).await.unwrap();
        repo.add_like(film.id, 4).await.unwrap();

        let changes = UpdateFilm {
            name: "The Matrix Reloaded".to_string(),
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(2003, 5, 15).unwrap(),
            duration: 138,
        };
        let mut snapshot = repo.update(film.id, &changes).await.unwrap();
        assert_eq!(snapshot.name, "The Matrix Reloaded");
        assert!(snapshot.likes.contains(&4));

        snapshot.likes.clear();
        let stored = repo.find_by_id(film.id).await.unwrap().unwrap();
        assert!(stored.likes.contains(&4));
    }

    #[tokio::test]
    async fn relation_changes_on_missing_film_are_not_found() {
        let repo = FilmRepositoryMemory::new();
        let err = repo.add_like(5, 1).await.unwrap_err();
        assert!(matches!(err, error::SystemError::NotFound(_)));
        let err = repo.remove_like(5, 1).await.unwrap_err();
        assert!(matches!(err, error::SystemError::NotFound(_)));
    }

    #[tokio::test]
    async fn removing_absent_like_is_noop() {
        let repo = FilmRepositoryMemory::new();
        let film = repo.create(&insert("Heat")).await.unwrap();
        repo.remove_like(film.id, 3).await.unwrap();
        assert!(repo.find_by_id(film.id).await.unwrap().unwrap().likes.is_empty());
    }
}
