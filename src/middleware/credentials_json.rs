use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::PassgateError;
use crate::types::Credentials;

/// Decodes the request body as `Credentials` regardless of `Content-Type`.
///
/// Malformed or mis-shaped JSON is rejected with 400; an oversized body keeps
/// axum's own 413 rejection.
pub struct CredentialsJson(pub Credentials);

impl<S> FromRequest<S> for CredentialsJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(b) => b,
            Err(rejection) => return Err(rejection.into_response()),
        };

        match Credentials::from_json_slice(&body) {
            Ok(creds) => Ok(CredentialsJson(creds)),
            Err(e) => {
                debug!(error = %e, "rejecting undecodable credentials body");
                Err(PassgateError::Decode(e.to_string()).into_response())
            }
        }
    }
}
