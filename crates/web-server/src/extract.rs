use axum::{
    async_trait,
    body::{self, Body},
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use core_types::NewComment;

use crate::error::AppError;

/// Upper bound on the size of a submitted comment body.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// A `NewComment` decoded from either a JSON or a url-encoded form body.
///
/// An empty body decodes to a candidate with every field defaulted.
#[derive(Debug)]
pub struct CommentPayload(pub NewComment);

#[async_trait]
impl<S> FromRequest<S> for CommentPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        if bytes.is_empty() {
            return Ok(Self(NewComment::default()));
        }

        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let req = Request::from_parts(parts, Body::from(bytes));

        if content_type.starts_with("application/json") {
            let Json(candidate) = Json::<NewComment>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::Decode(rejection.body_text()))?;
            Ok(Self(candidate))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(candidate) = Form::<NewComment>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::Decode(rejection.body_text()))?;
            Ok(Self(candidate))
        } else {
            Err(AppError::Decode(format!(
                "unsupported content type '{}'",
                content_type
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::DEFAULT_NAME;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder()
            .method("POST")
            .uri("/api/comments");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn decode(req: Request) -> Result<NewComment, AppError> {
        CommentPayload::from_request(req, &()).await.map(|p| p.0)
    }

    #[tokio::test]
    async fn decodes_json_bodies() {
        let candidate = decode(request(
            Some("application/json"),
            r#"{"name": "job", "text": "hello", "extra": 1}"#,
        ))
        .await
        .unwrap();
        assert_eq!(candidate, NewComment::new(Some("job"), "hello"));
    }

    #[tokio::test]
    async fn decodes_form_bodies() {
        let candidate = decode(request(
            Some("application/x-www-form-urlencoded"),
            "text=%E3%81%93%E3%82%93%E3%81%AB%E3%81%A1%E3%81%AF",
        ))
        .await
        .unwrap();
        assert_eq!(candidate.name, DEFAULT_NAME);
        assert_eq!(candidate.text, "こんにちは");
    }

    #[tokio::test]
    async fn empty_body_defaults_every_field() {
        let candidate = decode(request(None, "")).await.unwrap();
        assert_eq!(candidate, NewComment::default());
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let err = decode(request(Some("application/json"), "{\"text\": ")).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
        assert!(err.to_string().starts_with("Bind: "));
    }

    #[tokio::test]
    async fn unknown_content_type_is_a_decode_error() {
        let err = decode(request(Some("text/plain"), "hello")).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
