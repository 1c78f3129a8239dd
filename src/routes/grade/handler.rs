use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    utils::{error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{CreateGradeRequest, Grade, UpdateGradeRequest, is_valid_grade};

#[axum::debug_handler]
pub async fn create_grade(
    State(state): State<AppState>,
    Json(req): Json<CreateGradeRequest>,
) -> impl IntoResponse {
    // 检查绩点范围
    if !is_valid_grade(req.grade) {
        return (
            StatusCode::BAD_REQUEST,
            error_to_api_response(
                error_codes::VALIDATION_ERROR,
                "绩点必须在0.0到4.0之间".to_string(),
            ),
        );
    }

    match Grade::create(&state.pool, req).await {
        Ok(grade) => (StatusCode::CREATED, success_to_api_response(grade)),
        Err(e) => {
            tracing::error!("Failed to create grade: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, e.to_string()),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn update_grade(
    State(state): State<AppState>,
    Path(grade_id): Path<i32>,
    Json(req): Json<UpdateGradeRequest>,
) -> impl IntoResponse {
    if let Some(value) = req.grade {
        if !is_valid_grade(value) {
            return (
                StatusCode::BAD_REQUEST,
                error_to_api_response(
                    error_codes::VALIDATION_ERROR,
                    "绩点必须在0.0到4.0之间".to_string(),
                ),
            );
        }
    }

    match Grade::update(&state.pool, grade_id, req).await {
        Ok(Some(grade)) => (StatusCode::OK, success_to_api_response(grade)),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            error_to_api_response(error_codes::NOT_FOUND, "成绩不存在".to_string()),
        ),
        Err(e) => {
            tracing::error!("Failed to update grade {}: {}", grade_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, e.to_string()),
            )
        }
    }
}
