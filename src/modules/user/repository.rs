use crate::{
    api::error,
    modules::user::{
        model::{InsertUser, UpdateUser},
        schema::UserEntity,
    },
};

#[async_trait::async_trait]
pub trait UserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, error::SystemError>;

    /// Resolves `ids` in the given order, skipping any that are not stored.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError>;

    async fn update(&self, id: i64, user: &UpdateUser) -> Result<UserEntity, error::SystemError>;

    /// Links both users in a single step; fails without changes if either is missing.
    async fn add_friendship(&self, user_id: i64, friend_id: i64)
    -> Result<(), error::SystemError>;

    async fn remove_friendship(
        &self,
        user_id: i64,
        friend_id: i64,
    ) -> Result<(), error::SystemError>;

    async fn add_liked_film(&self, user_id: i64, film_id: i64) -> Result<(), error::SystemError>;

    async fn remove_liked_film(&self, user_id: i64, film_id: i64)
    -> Result<(), error::SystemError>;
}
