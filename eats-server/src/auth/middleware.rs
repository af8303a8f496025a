//! Auth middleware
//!
//! Decodes the Bearer token when one is present and attaches the resulting
//! [`CurrentUser`] to the request extensions. It never rejects a request:
//! operations that need an identity enforce it at the resolver, so public
//! queries and authenticated mutations share one endpoint.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;

pub async fn attach_user(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Some(header) = header {
        if let Some(token) = JwtService::extract_from_header(header) {
            match state
                .jwt_service
                .validate_token(token)
                .and_then(CurrentUser::try_from)
            {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                }
                Err(e) => {
                    // An unusable token makes the request anonymous, not failed
                    tracing::debug!(error = %e, "ignoring invalid bearer token");
                }
            }
        }
    }

    next.run(req).await
}
