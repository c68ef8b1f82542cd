use std::collections::BTreeSet;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct FilmEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub likes: BTreeSet<i64>,
}
