use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constants::{CINEMA_BIRTHDAY, MAX_DESCRIPTION_LENGTH};
use crate::modules::film::schema::FilmEntity;
use crate::utils::rule_failed;

/// Payload for creating (`id` ignored) or updating (`id` required) a film.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
}

pub fn earliest_release_date() -> NaiveDate {
    let (year, month, day) = CINEMA_BIRTHDAY;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

impl Validate for FilmModel {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.name.is_empty() {
            return Err(rule_failed("name", "Film name must not be empty"));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(rule_failed(
                "description",
                "Film description must not be longer than 200 characters",
            ));
        }
        if self.release_date < earliest_release_date() {
            return Err(rule_failed(
                "release_date",
                "Film release date must not be earlier than 1895-12-28",
            ));
        }
        if self.duration < 0 {
            return Err(rule_failed("duration", "Film duration must not be negative"));
        }
        Ok(())
    }
}

pub struct InsertFilm {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
}

impl From<FilmModel> for InsertFilm {
    fn from(model: FilmModel) -> Self {
        InsertFilm {
            name: model.name,
            description: model.description,
            release_date: model.release_date,
            duration: model.duration,
        }
    }
}

/// Replacement values for every scalar field; `likes` is left alone.
pub struct UpdateFilm {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
}

impl From<FilmModel> for UpdateFilm {
    fn from(model: FilmModel) -> Self {
        UpdateFilm {
            name: model.name,
            description: model.description,
            release_date: model.release_date,
            duration: model.duration,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    pub count: Option<i64>,
}

impl PopularQuery {
    pub fn count_or(&self, default: i64) -> i64 {
        self.count.unwrap_or(default)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub likes: BTreeSet<i64>,
}

impl From<FilmEntity> for FilmResponse {
    fn from(entity: FilmEntity) -> Self {
        FilmResponse {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            release_date: entity.release_date,
            duration: entity.duration,
            likes: entity.likes,
        }
    }
}
