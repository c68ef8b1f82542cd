use actix_web::web;
use chrono::NaiveDate;
use validator::{ValidationError, ValidationErrors};

use crate::api::error;

/// A single failed rule, reported under `field`.
pub fn rule_failed(field: &'static str, message: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(field).with_message(message.into()));
    errors
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| error::Error::bad_request(err.to_string()).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| error::Error::bad_request(err.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| error::Error::bad_request(err.to_string()).into())
}
