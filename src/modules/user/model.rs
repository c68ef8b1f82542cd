use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::modules::user::schema::UserEntity;
use crate::utils::{is_blank, rule_failed, today};

/// Payload for creating (`id` ignored) or updating (`id` required) a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

impl UserModel {
    /// The name to persist: the given name, or the login when it is blank.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !is_blank(name) => name.to_string(),
            _ => self.login.clone(),
        }
    }

    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !is_blank(name))
    }
}

impl Validate for UserModel {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.email.is_empty() || !self.email.contains('@') {
            return Err(rule_failed("email", "Email must not be empty and must contain '@'"));
        }
        if self.login.is_empty() || self.login.chars().any(char::is_whitespace) {
            return Err(rule_failed("login", "Login must not be empty or contain spaces"));
        }
        if self.birthday > today() {
            return Err(rule_failed("birthday", "Birthday cannot be in the future"));
        }
        Ok(())
    }
}

pub struct InsertUser {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

impl From<UserModel> for InsertUser {
    fn from(model: UserModel) -> Self {
        InsertUser {
            name: model.display_name(),
            email: model.email,
            login: model.login,
            birthday: model.birthday,
        }
    }
}

/// Replacement values for every scalar field; relation sets are left alone.
pub struct UpdateUser {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

impl From<UserModel> for UpdateUser {
    fn from(model: UserModel) -> Self {
        UpdateUser {
            name: model.display_name(),
            email: model.email,
            login: model.login,
            birthday: model.birthday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friends: BTreeSet<i64>,
    pub liked_films: BTreeSet<i64>,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        UserResponse {
            id: entity.id,
            email: entity.email,
            login: entity.login,
            name: entity.name,
            birthday: entity.birthday,
            friends: entity.friends,
            liked_films: entity.liked_films,
        }
    }
}
