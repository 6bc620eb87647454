// ============================================================================
// Taskboard API - Auth Handlers
// File: crates/taskboard-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (register, login, logout)

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use taskboard_shared::constants::LOGIN_ROUTE;

use crate::dto::{LoginForm, RegisterForm, UserDto};
use crate::error::ApiError;
use crate::extract::AppForm;
use crate::response::ApiResponse;
use crate::session::{clear_session_cookie, session_cookie, session_id_from_headers};
use crate::state::AppState;

/// Register handler - POST /register
pub async fn register(
    State(state): State<AppState>,
    AppForm(form): AppForm<RegisterForm>,
) -> Result<impl IntoResponse, ApiError> {
    form.validate()?;

    let user = state
        .auth
        .register(&form.username, &form.password, &form.confirm)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::success_with_message(
                UserDto::from(&user),
                "Registration successful. Please log in.",
            )
            .with_redirect(LOGIN_ROUTE),
        ),
    ))
}

/// Login handler - POST /login
pub async fn login(
    State(state): State<AppState>,
    AppForm(form): AppForm<LoginForm>,
) -> Result<impl IntoResponse, ApiError> {
    form.validate()?;

    let result = state.auth.login(&form.username, &form.password).await?;
    let token = state.signer.sign(&result.session.id);

    Ok((
        [(header::SET_COOKIE, session_cookie(&token, &state.cookie))],
        Json(
            ApiResponse::success_with_message(UserDto::from(&result.user), "Logged in successfully.")
                .with_redirect("/"),
        ),
    ))
}

/// Logout handler - POST /logout. Succeeds with or without a session.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(session_id) = session_id_from_headers(&headers, &state.signer) {
        state.auth.logout(&session_id).await?;
    }

    Ok((
        [(header::SET_COOKIE, clear_session_cookie(&state.cookie))],
        Json(ApiResponse::success_with_message((), "Logged out successfully.").with_redirect(LOGIN_ROUTE)),
    ))
}
