use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::handlers::auth::{signin_handler, signup_handler};
use crate::service::CredentialService;

#[derive(Clone)]
pub struct PassgateState {
    pub service: CredentialService,
}

impl PassgateState {
    pub fn new(service: CredentialService) -> Self {
        Self { service }
    }
}

pub fn passgate_router(state: PassgateState, body_limit: usize) -> Router {
    Router::new()
        .route("/signup", post(signup_handler))
        .route("/signin", post(signin_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
