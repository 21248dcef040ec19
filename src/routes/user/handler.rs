use axum::{
    extract::{Extension, Json, State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use super::model::{CredentialsRequest, MessageResponse, ProfileResponse};
use crate::{
    AppState,
    error::AppError,
    models::{SessionUser, User},
};

fn session_cookie(name: &str, value: String, max_age_secs: u64) -> Cookie<'static> {
    Cookie::build((name.to_owned(), value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(max_age_secs as i64))
        .build()
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(req) = payload?;
    User::register(&state.users, req, state.config.bcrypt_cost).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("注册成功"))))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let Json(req) = payload?;
    let user = User::authenticate(&state.users, req).await?;

    let session = state.sessions.create(SessionUser::from(&user)).await;
    let cookie = session_cookie(
        &state.config.session_cookie_name,
        session.session_id,
        state.sessions.ttl().as_secs(),
    );

    tracing::info!("用户登录 {} (id={})", user.username, user.id);
    Ok((jar.add(cookie), Json(MessageResponse::new("登录成功"))))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let name = state.config.session_cookie_name.clone();
    if let Some(cookie) = jar.get(&name) {
        if let Some(session) = state.sessions.remove(cookie.value()).await {
            tracing::info!("用户退出 {} (id={})", session.user.username, session.user.id);
        }
    }

    let jar = jar.remove(Cookie::build((name, "")).path("/"));
    Ok((jar, Json(MessageResponse::new("已成功退出"))))
}

#[axum::debug_handler]
pub async fn profile(Extension(user): Extension<SessionUser>) -> Json<ProfileResponse> {
    Json(ProfileResponse { user })
}
