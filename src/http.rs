//! HTTP entry points of the dashboard area.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, State},
    http::{request, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, RequestPartsExt as _, Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    api::Email,
    auth::{AuthState, Identity},
    dashboard::{self, Screen},
    directory::HttpDirectory,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/dashboard/", get(dashboard))
        .route("/dashboard/*view", get(dashboard))
        .with_state(Arc::new(state))
}

async fn dashboard(
    State(state): State<SharedAppState>,
    auth_claims: Option<AuthClaims>,
    uri: Uri,
) -> Screen {
    let auth = AuthState::from(
        auth_claims.map(|claims| Identity::new(claims.email)),
    );
    let resolution =
        dashboard::resolve(&auth, &state.directory, state.lookup_timeout)
            .await;
    let screen = dashboard::screen(&resolution, uri.path());
    debug!(path = uri.path(), ?screen, "routed dashboard request");
    screen
}

impl IntoResponse for Screen {
    fn into_response(self) -> Response {
        match self {
            Self::Loading => StatusCode::SERVICE_UNAVAILABLE.into_response(),
            Self::Redirect(to) => Redirect::to(to).into_response(),
            Self::Render(layout) => Json(layout).into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

pub type SharedAppState = Arc<AppState>;

pub struct AppState {
    pub directory: HttpDirectory,

    pub lookup_timeout: Duration,

    pub jwt_decoding_key: DecodingKey,
}

/// Claims of the bearer token issued by the auth provider.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuthClaims {
    pub email: Email,
    pub exp: i64,
}

#[derive(Debug)]
pub struct InvalidToken;

impl IntoResponse for InvalidToken {
    fn into_response(self) -> Response {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

#[async_trait]
impl FromRequestParts<SharedAppState> for AuthClaims {
    type Rejection = InvalidToken;

    async fn from_request_parts(
        parts: &mut request::Parts,
        state: &SharedAppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| InvalidToken)?;
        let token_data = decode::<Self>(
            bearer.token(),
            &state.jwt_decoding_key,
            &Validation::default(),
        )
        .map_err(|_| InvalidToken)?;

        Ok(token_data.claims)
    }
}
