use actix_web::{http::StatusCode, HttpResponse};
use std::borrow::Cow;

#[derive(serde::Serialize)]
pub struct SuccessData<T: serde::Serialize> {
    pub data: T,
    pub message: Cow<'static, str>,
}

/// Entity payloads travel as `{"data": ..., "message": ...}`; relation
/// changes answer with an empty 204.
pub struct Success<T: serde::Serialize> {
    pub status: StatusCode,
    pub body: Option<SuccessData<T>>,
}

impl<T: serde::Serialize> Success<T> {
    pub fn ok(data: T, message: impl Into<Cow<'static, str>>) -> Self {
        Self { status: StatusCode::OK, body: Some(SuccessData { data, message: message.into() }) }
    }

    pub fn created(data: T, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: Some(SuccessData { data, message: message.into() }),
        }
    }
}

impl Success<()> {
    pub fn no_content() -> Self {
        Self { status: StatusCode::NO_CONTENT, body: None }
    }
}

impl<T: serde::Serialize> actix_web::Responder for Success<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        let mut response = HttpResponse::build(self.status);

        match self.body {
            Some(body) => response.json(body),
            None => response.finish(),
        }
    }
}
