use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};

use crate::shared::errors::AuthError;

/// JSON 요청 본문 extractor
/// `Json<T>` whose rejection uses the same `{"error": ...}` shape as every
/// other failure: missing content type, broken JSON and wrong field types
/// all become 400 `Invalid request`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| -> Self::Rejection {
                AuthError::InvalidRequestBody(rejection.body_text()).into()
            })?;

        Ok(JsonBody(value))
    }
}
