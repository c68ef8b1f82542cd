use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use tokio::sync::RwLock;

use crate::{
    api::error,
    modules::user::{
        model::{InsertUser, UpdateUser},
        repository::UserRepository,
        schema::UserEntity,
    },
};

#[derive(Default)]
struct UserTable {
    last_id: i64,
    rows: BTreeMap<i64, UserEntity>,
}

impl UserTable {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn row_mut(&mut self, id: i64) -> Result<&mut UserEntity, error::SystemError> {
        self.rows.get_mut(&id).ok_or_else(|| user_not_found(id))
    }

    fn ensure_exists(&self, id: i64) -> Result<(), error::SystemError> {
        if self.rows.contains_key(&id) { Ok(()) } else { Err(user_not_found(id)) }
    }
}

fn user_not_found(id: i64) -> error::SystemError {
    error::SystemError::not_found(format!("User with ID {id} not found"))
}

/// Process-local user store. IDs start at 1 and are never reused.
#[derive(Default)]
pub struct UserRepositoryMemory {
    table: RwLock<UserTable>,
}

impl UserRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryMemory {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        debug!("Looking up user {id}");
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(ids.iter().filter_map(|id| table.rows.get(id).cloned()).collect())
    }

    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let id = table.next_id();
        let entity = UserEntity {
            id,
            email: user.email.clone(),
            login: user.login.clone(),
            name: user.name.clone(),
            birthday: user.birthday,
            friends: BTreeSet::new(),
            liked_films: BTreeSet::new(),
        };
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: i64, user: &UpdateUser) -> Result<UserEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let row = table.row_mut(id)?;
        row.email = user.email.clone();
        row.login = user.login.clone();
        row.name = user.name.clone();
        row.birthday = user.birthday;
        Ok(row.clone())
    }

    async fn add_friendship(
        &self,
        user_id: i64,
        friend_id: i64,
    ) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        table.ensure_exists(user_id)?;
        table.ensure_exists(friend_id)?;
        table.row_mut(user_id)?.friends.insert(friend_id);
        table.row_mut(friend_id)?.friends.insert(user_id);
        Ok(())
    }

    async fn remove_friendship(
        &self,
        user_id: i64,
        friend_id: i64,
    ) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        table.ensure_exists(user_id)?;
        table.ensure_exists(friend_id)?;
        table.row_mut(user_id)?.friends.remove(&friend_id);
        table.row_mut(friend_id)?.friends.remove(&user_id);
        Ok(())
    }

    async fn add_liked_film(&self, user_id: i64, film_id: i64) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        table.row_mut(user_id)?.liked_films.insert(film_id);
        Ok(())
    }

    async fn remove_liked_film(
        &self,
        user_id: i64,
        film_id: i64,
    ) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        table.row_mut(user_id)?.liked_films.remove(&film_id);
        Ok(())
    }
}
