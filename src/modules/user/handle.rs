use actix_web::{delete, get, post, put, web};

use crate::api::{error, success};
use crate::modules::user::{
    model::{UserModel, UserResponse},
    service::UserService,
};

#[post("")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    user_data: web::Json<UserModel>,
) -> Result<success::Success<UserResponse>, error::Error> {
    let user = user_service.create_user(user_data.into_inner()).await?;
    Ok(success::Success::created(user, "User created successfully"))
}

#[put("")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    user_data: web::Json<UserModel>,
) -> Result<success::Success<UserResponse>, error::Error> {
    let user = user_service.update_user(user_data.into_inner()).await?;
    Ok(success::Success::ok(user, "User updated successfully"))
}

#[get("")]
pub async fn list_users(
    user_service: web::Data<UserService>,
) -> Result<success::Success<Vec<UserResponse>>, error::Error> {
    let users = user_service.get_all().await?;
    Ok(success::Success::ok(users, "Users retrieved successfully"))
}

#[get("/{id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<success::Success<UserResponse>, error::Error> {
    let user = user_service.get_user_by_id(user_id.into_inner()).await?;
    Ok(success::Success::ok(user, "User retrieved successfully"))
}

#[put("/{id}/friends/{friend_id}")]
pub async fn add_friend(
    user_service: web::Data<UserService>,
    path: web::Path<(i64, i64)>,
) -> Result<success::Success<()>, error::Error> {
    let (user_id, friend_id) = path.into_inner();
    user_service.add_friend(user_id, friend_id).await?;
    Ok(success::Success::no_content())
}

#[delete("/{id}/friends/{friend_id}")]
pub async fn remove_friend(
    user_service: web::Data<UserService>,
    path: web::Path<(i64, i64)>,
) -> Result<success::Success<()>, error::Error> {
    let (user_id, friend_id) = path.into_inner();
    user_service.remove_friend(user_id, friend_id).await?;
    Ok(success::Success::no_content())
}

#[get("/{id}/friends")]
pub async fn list_friends(
    user_service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<success::Success<Vec<UserResponse>>, error::Error> {
    let friends = user_service.get_friends(user_id.into_inner()).await?;
    Ok(success::Success::ok(friends, "Friends retrieved successfully"))
}

#[get("/{id}/friends/common/{other_id}")]
pub async fn list_common_friends(
    user_service: web::Data<UserService>,
    path: web::Path<(i64, i64)>,
) -> Result<success::Success<Vec<UserResponse>>, error::Error> {
    let (user_id, other_id) = path.into_inner();
    let friends = user_service.get_common_friends(user_id, other_id).await?;
    Ok(success::Success::ok(friends, "Common friends retrieved successfully"))
}
