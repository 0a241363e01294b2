use axum::{extract::State, http::StatusCode};
use tracing::{info, warn};

use crate::middleware::CredentialsJson;
use crate::{PassgateError, router::PassgateState};

/// POST /signup -> hashes the password and stores a new user. 200 with an empty body.
pub async fn signup_handler(
    State(state): State<PassgateState>,
    CredentialsJson(creds): CredentialsJson,
) -> Result<StatusCode, PassgateError> {
    match state.service.register(&creds.username, &creds.password).await {
        Ok(()) => {
            info!(username = %creds.username, "user registered");
            Ok(StatusCode::OK)
        }
        Err(e) => {
            warn!(username = %creds.username, error = %e, "signup failed");
            Err(e)
        }
    }
}

/// POST /signin -> verifies the password against the stored hash. 200 with an empty body.
pub async fn signin_handler(
    State(state): State<PassgateState>,
    CredentialsJson(creds): CredentialsJson,
) -> Result<StatusCode, PassgateError> {
    match state
        .service
        .authenticate(&creds.username, &creds.password)
        .await
    {
        Ok(()) => {
            info!(username = %creds.username, "user signed in");
            Ok(StatusCode::OK)
        }
        Err(PassgateError::Unauthorized) => {
            info!(username = %creds.username, "signin rejected");
            Err(PassgateError::Unauthorized)
        }
        Err(e) => {
            warn!(username = %creds.username, error = %e, "signin failed");
            Err(e)
        }
    }
}
