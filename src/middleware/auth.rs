use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{AppState, error::AppError};

/// 会话守卫：cookie 对应有效会话时把 `SessionUser` 放入请求扩展，否则 401
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(request.headers());
    let session_id = jar
        .get(&state.config.session_cookie_name)
        .map(|c| c.value().to_string())
        .ok_or(AppError::Unauthorized)?;

    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(session.user);
    Ok(next.run(request).await)
}
