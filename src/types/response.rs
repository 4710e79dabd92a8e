use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::types::error::AppError;

/// Success shapes a handler can return. Errors go through [`AppError`].
pub enum ApiResponse<T> {
    /// 200 with a JSON body.
    Ok(T),
    /// 201 with the created record.
    Created(T),
    /// 204, used by deletes and logout.
    NoContent,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::Created(v) => HttpResponse::Created().json(v),
            ApiResponse::NoContent => HttpResponse::NoContent().finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test::TestRequest};

    #[test]
    fn statuses() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(ApiResponse::Ok(1).respond_to(&req).status(), StatusCode::OK);
        assert_eq!(ApiResponse::Created(1).respond_to(&req).status(), StatusCode::CREATED);
        assert_eq!(ApiResponse::<()>::NoContent.respond_to(&req).status(), StatusCode::NO_CONTENT);
    }
}
