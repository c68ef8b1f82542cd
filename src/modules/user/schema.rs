use std::collections::BTreeSet;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friends: BTreeSet<i64>,
    pub liked_films: BTreeSet<i64>,
}
