use actix_web::{
    App,
    dev::{Service, ServiceResponse},
    http::{Method, StatusCode},
    test, web,
};
use serde_json::{Value, json};

use crate::{bootstrap, build_services, configure};

async fn init_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let (user_service, film_service) = build_services();
    test::init_service(
        App::new()
            .app_data(web::Data::new(user_service))
            .app_data(web::Data::new(film_service))
            .configure(configure),
    )
    .await
}

async fn send<S>(app: &S, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let mut req = test::TestRequest::default().method(method).uri(uri);
    if let Some(body) = body {
        req = req.set_json(body);
    }
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

fn test_film(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Test Description",
        "releaseDate": "2020-01-01",
        "duration": 120
    })
}

fn test_user(login: &str) -> Value {
    json!({
        "login": login,
        "email": format!("{login}@example.com"),
        "birthday": "2000-01-01"
    })
}

#[::core::prelude::v1::test]
fn startup_logging_is_enabled_before_services_start() {
    let _services = bootstrap();
    assert!(log::log_enabled!(log::Level::Info));
}

#[actix_web::test]
async fn health_check_responds() {
    let app = init_app().await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn create_film_assigns_first_id() {
    let app = init_app().await;
    let (status, body) = send(&app, Method::POST, "/films", Some(test_film("Test Film"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["releaseDate"], "2020-01-01");
    assert_eq!(body["data"]["likes"], json!([]));
    assert_eq!(body["message"], "Film created successfully");
}

#[actix_web::test]
async fn invalid_film_is_bad_request() {
    let app = init_app().await;

    let (status, body) = send(&app, Method::POST, "/films", Some(test_film(""))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("Film name"));

    let mut old = test_film("Old");
    old["releaseDate"] = json!("1890-01-01");
    let (status, body) = send(&app, Method::POST, "/films", Some(old)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("1895-12-28"));

    let (_, body) = send(&app, Method::GET, "/films", None).await;
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn malformed_input_is_bad_request() {
    let app = init_app().await;

    let (status, _) =
        send(&app, Method::POST, "/films", Some(json!({ "name": "No date" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn user_without_name_uses_login() {
    let app = init_app().await;
    let (status, body) = send(&app, Method::POST, "/users", Some(test_user("testuser"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "testuser");

    let (status, body) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["login"], "testuser");
    assert_eq!(body["data"]["likedFilms"], json!([]));
}

#[actix_web::test]
async fn update_user_requires_known_id() {
    let app = init_app().await;
    send(&app, Method::POST, "/users", Some(test_user("testuser"))).await;

    let mut update = test_user("renamed");
    update["id"] = json!(1);
    update["name"] = json!("Renamed User");
    let (status, body) = send(&app, Method::PUT, "/users", Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Renamed User");

    update["id"] = json!(9);
    let (status, _) = send(&app, Method::PUT, "/users", Some(update)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn friends_flow() {
    let app = init_app().await;
    for login in ["alice", "bob", "carol"] {
        send(&app, Method::POST, "/users", Some(test_user(login))).await;
    }

    let (status, body) = send(&app, Method::PUT, "/users/1/friends/3", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
    send(&app, Method::PUT, "/users/2/friends/3", None).await;

    let (_, body) = send(&app, Method::GET, "/users/3/friends", None).await;
    let ids: Vec<i64> =
        body["data"].as_array().unwrap().iter().map(|u| u["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2]);

    let (_, body) = send(&app, Method::GET, "/users/1/friends/common/2", None).await;
    assert_eq!(body["data"][0]["login"], "carol");

    send(&app, Method::DELETE, "/users/3/friends/1", None).await;
    let (_, body) = send(&app, Method::GET, "/users/1/friends", None).await;
    assert_eq!(body["data"], json!([]));

    let (status, _) = send(&app, Method::PUT, "/users/1/friends/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn likes_and_popular_films() {
    let app = init_app().await;
    for name in ["First", "Second"] {
        send(&app, Method::POST, "/films", Some(test_film(name))).await;
    }
    send(&app, Method::POST, "/users", Some(test_user("alice"))).await;

    let (status, _) = send(&app, Method::PUT, "/films/2/like/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/films/popular?count=1", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Second");

    let (_, body) = send(&app, Method::GET, "/films/popular", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(body["data"]["likedFilms"], json!([2]));

    send(&app, Method::DELETE, "/films/2/like/1", None).await;
    let (_, body) = send(&app, Method::GET, "/films/2", None).await;
    assert_eq!(body["data"]["likes"], json!([]));

    let (status, body) = send(&app, Method::PUT, "/films/2/like/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("User"));

    let (status, _) = send(&app, Method::GET, "/films/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
