use crate::error::{AppError, Result};
use crate::model::{
    CreateSubmissionRequest, CreateSubmissionResponse, DataResponse, SubmissionData, TokenQuery,
};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use slink_core::ExecutionResult;

fn token(query: std::result::Result<Query<TokenQuery>, QueryRejection>) -> Result<String> {
    let Query(TokenQuery { token }) = query?;
    if token.trim().is_empty() {
        return Err(AppError::BadRequest("token cannot be empty".to_string()));
    }
    Ok(token)
}

pub async fn create_submission_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<CreateSubmissionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateSubmissionResponse>)> {
    let Json(request) = request?;
    let record = state.relay().submit(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSubmissionResponse {
            token: record.token,
            language_id: record.language_id,
            source_code: record.source_code,
            stdin: record.stdin,
            message: "Token is created",
        }),
    ))
}

pub async fn get_submission_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<TokenQuery>, QueryRejection>,
) -> Result<Json<DataResponse<SubmissionData>>> {
    let token = token(query)?;
    let record = state.relay().fetch(&token).await?;

    Ok(Json(DataResponse {
        error: false,
        message: "Data retrieved successfully",
        data: record.into(),
    }))
}

pub async fn execution_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<TokenQuery>, QueryRejection>,
) -> Result<Json<DataResponse<ExecutionResult>>> {
    let token = token(query)?;
    let result = state.relay().execution(&token).await?;

    Ok(Json(DataResponse {
        error: false,
        message: "Execution result retrieved successfully",
        data: result,
    }))
}
