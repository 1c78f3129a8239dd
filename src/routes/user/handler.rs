use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    utils::{EmptyResponse, error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{CreateUserRequest, UpdateEmailRequest, User, UserInfo, is_valid_username};

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    match User::find_all(&state.pool).await {
        Ok(users) => (
            StatusCode::OK,
            success_to_api_response(users.iter().map(UserInfo::from).collect::<Vec<_>>()),
        ),
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, e.to_string()),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> impl IntoResponse {
    // 检查用户名格式
    if !is_valid_username(&req.username) {
        return (
            StatusCode::BAD_REQUEST,
            error_to_api_response(
                error_codes::VALIDATION_ERROR,
                "用户名格式无效，只允许使用字母、数字和下划线".to_string(),
            ),
        );
    }

    match User::create(&state.pool, req).await {
        Ok(user) => (
            StatusCode::CREATED,
            success_to_api_response(UserInfo::from(&user)),
        ),
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            // 唯一约束冲突也按服务器错误返回，带上底层错误信息
            let code = if e.to_string().contains("unique constraint") {
                error_codes::USER_EXISTS
            } else {
                error_codes::INTERNAL_ERROR
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(code, e.to_string()),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    match User::find_by_username_cached(&state.pool, &state.redis, &username).await {
        Ok(Some(user)) => (StatusCode::OK, success_to_api_response(user)),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            error_to_api_response(error_codes::NOT_FOUND, "用户不存在".to_string()),
        ),
        Err(e) => {
            tracing::error!("Failed to get user {}: {}", username, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, e.to_string()),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn update_email(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<UpdateEmailRequest>,
) -> impl IntoResponse {
    match User::update_email(&state.pool, &state.redis, &username, &req.email).await {
        Ok(Some(user)) => (StatusCode::OK, success_to_api_response(UserInfo::from(&user))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            error_to_api_response(error_codes::NOT_FOUND, "用户不存在".to_string()),
        ),
        Err(e) => {
            tracing::error!("Failed to update user {}: {}", username, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, e.to_string()),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    match User::delete(&state.pool, &state.redis, &username).await {
        Ok(true) => (StatusCode::OK, success_to_api_response(EmptyResponse {})),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            error_to_api_response(error_codes::NOT_FOUND, "用户不存在".to_string()),
        ),
        Err(e) => {
            tracing::error!("Failed to delete user {}: {}", username, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, e.to_string()),
            )
        }
    }
}
