use axum::{
    Form, Json,
    extract::{
        FromRequest, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::header,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use std::fmt;

// Request body read as a urlencoded form when the content type says so, JSON otherwise.
pub struct Payload<T>(pub T);

#[derive(Debug)]
pub enum PayloadRejection {
    Json(JsonRejection),
    Form(FormRejection),
}

impl fmt::Display for PayloadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadRejection::Json(rejection) => write!(f, "json body rejected: {rejection}"),
            PayloadRejection::Form(rejection) => write!(f, "form body rejected: {rejection}"),
        }
    }
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        match self {
            PayloadRejection::Json(rejection) => rejection.into_response(),
            PayloadRejection::Form(rejection) => rejection.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(PayloadRejection::Form)?;
            Ok(Payload(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(PayloadRejection::Json)?;
            Ok(Payload(value))
        }
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| {
            content_type
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
}
