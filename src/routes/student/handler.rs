use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    utils::{error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{CreateStudentRequest, Student};

#[axum::debug_handler]
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> impl IntoResponse {
    match Student::create(&state.pool, req).await {
        Ok(student) => (StatusCode::CREATED, success_to_api_response(student)),
        Err(e) => {
            tracing::error!("Failed to create student: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, e.to_string()),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> impl IntoResponse {
    match Student::find_by_id(&state.pool, student_id).await {
        Ok(Some(student)) => (StatusCode::OK, success_to_api_response(student)),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            error_to_api_response(error_codes::NOT_FOUND, "学生不存在".to_string()),
        ),
        Err(e) => {
            tracing::error!("Failed to get student {}: {}", student_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, e.to_string()),
            )
        }
    }
}
