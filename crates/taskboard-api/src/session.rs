//! Session cookie handling and the authenticated-user extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;
use uuid::Uuid;

use taskboard_security::SessionSigner;
use taskboard_shared::constants::{LOGIN_ROUTE, SESSION_COOKIE_NAME};

use crate::error::ApiError;
use crate::state::{AppState, CookieSettings};

/// The signed-in user. Rejects with `303 See Other` to the login route when
/// the cookie is missing, forged, unknown, or expired.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub session_id: Uuid,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session_id = session_id_from_headers(&parts.headers, &state.signer)
            .ok_or_else(redirect_to_login)?;

        match state.auth.resolve_session(&session_id).await {
            Ok(Some(user_id)) => Ok(CurrentUser { user_id, session_id }),
            Ok(None) => {
                debug!("Session no longer valid");
                Err(redirect_to_login())
            }
            Err(e) => Err(ApiError::from(e).into_response()),
        }
    }
}

fn redirect_to_login() -> Response {
    Redirect::to(LOGIN_ROUTE).into_response()
}

/// Verified session id from the request cookie, if any.
pub fn session_id_from_headers(headers: &HeaderMap, signer: &SessionSigner) -> Option<Uuid> {
    let token = read_cookie(headers, SESSION_COOKIE_NAME)?;
    match signer.verify(token) {
        Ok(id) => Some(id),
        Err(e) => {
            debug!("Rejected session cookie: {}", e);
            None
        }
    }
}

pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

pub fn session_cookie(token: &str, settings: &CookieSettings) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE_NAME, token, settings.max_age_seconds
    );
    if settings.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn clear_session_cookie(settings: &CookieSettings) -> String {
    let mut cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE_NAME
    );
    if settings.secure {
        cookie.push_str("; Secure");
    }
    cookie
}
