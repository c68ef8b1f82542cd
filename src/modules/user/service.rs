use log::{info, warn};
use std::sync::Arc;
use validator::Validate;

use crate::api::error;
use crate::modules::user::model::{InsertUser, UpdateUser, UserModel, UserResponse};
use crate::modules::user::repository::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    pub async fn create_user(&self, user: UserModel) -> Result<UserResponse, error::SystemError> {
        info!("Request to create user with login '{}'", user.login);
        user.validate()?;
        if !user.has_name() {
            info!("User '{}' has no name, the login will be displayed instead", user.login);
        }

        let created = self.repo.create(&InsertUser::from(user)).await?;
        info!("User '{}' created with ID {}", created.login, created.id);
        Ok(UserResponse::from(created))
    }

    pub async fn get_all(&self) -> Result<Vec<UserResponse>, error::SystemError> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn update_user(&self, user: UserModel) -> Result<UserResponse, error::SystemError> {
        info!("Request to update user with login '{}'", user.login);
        user.validate()?;
        let id = user.id.ok_or_else(|| error::SystemError::bad_request("User ID must be set"))?;

        let updated = self.repo.update(id, &UpdateUser::from(user)).await?;
        info!("User {} updated", updated.id);
        Ok(UserResponse::from(updated))
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<UserResponse, error::SystemError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| error::SystemError::not_found(format!("User with ID {id} not found")))
    }

    pub async fn add_friend(&self, user_id: i64, friend_id: i64) -> Result<(), error::SystemError> {
        if user_id == friend_id {
            return Err(error::SystemError::bad_request("User cannot add themselves as a friend"));
        }
        let (user, friend) = self.require_pair(user_id, friend_id).await?;

        self.repo.add_friendship(user.id, friend.id).await?;
        info!("Users '{}' and '{}' are now friends", user.login, friend.login);
        Ok(())
    }

    pub async fn remove_friend(
        &self,
        user_id: i64,
        friend_id: i64,
    ) -> Result<(), error::SystemError> {
        let (user, friend) = self.require_pair(user_id, friend_id).await?;

        self.repo.remove_friendship(user.id, friend.id).await?;
        info!("User '{}' removed '{}' from friends", user.login, friend.login);
        Ok(())
    }

    pub async fn get_friends(&self, user_id: i64) -> Result<Vec<UserResponse>, error::SystemError> {
        let user = self.get_user_by_id(user_id).await?;

        let ids: Vec<i64> = user.friends.iter().copied().collect();
        let friends = self.repo.find_by_ids(&ids).await?;
        if friends.len() < ids.len() {
            warn!(
                "User '{}' references {} friend(s) that no longer exist",
                user.login,
                ids.len() - friends.len()
            );
        }

        info!("Listed {} friend(s) of user '{}'", friends.len(), user.login);
        Ok(friends.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_common_friends(
        &self,
        user_id: i64,
        other_id: i64,
    ) -> Result<Vec<UserResponse>, error::SystemError> {
        let (user, other) = self.require_pair(user_id, other_id).await?;

        let common: Vec<i64> = user.friends.intersection(&other.friends).copied().collect();
        let friends = self.repo.find_by_ids(&common).await?;

        info!(
            "Users '{}' and '{}' have {} common friend(s)",
            user.login,
            other.login,
            friends.len()
        );
        Ok(friends.into_iter().map(UserResponse::from).collect())
    }

    async fn require_pair(
        &self,
        user_id: i64,
        other_id: i64,
    ) -> Result<(UserResponse, UserResponse), error::SystemError> {
        let user = self.get_user_by_id(user_id).await?;
        let other = self.get_user_by_id(other_id).await?;
        Ok((user, other))
    }
}
