use crate::dtos::exam_periods::{
    BulkUpdateRequest, BulkUpdateResponse, ExamPeriodCreate, ExamPeriodResponse, ExamPeriodUpdate,
};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::entities::{colleges, departments, exam_periods, terms};
use database::services::exam_period::{ExamPeriodService, ReconcileInstruction};
use sea_orm::{ActiveValue::Set, EntityTrait};

/// List exam periods, newest first
#[utoipa::path(
    get,
    path = "/api/exam_periods",
    responses(
        (status = 200, description = "List of exam periods", body = [ExamPeriodResponse])
    ),
    tag = "Exam periods"
)]
pub async fn list_exam_periods(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ExamPeriodResponse>>, ApiError> {
    let rows = ExamPeriodService::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(ExamPeriodResponse::from).collect()))
}

/// Create an exam period
#[utoipa::path(
    post,
    path = "/api/exam_periods",
    request_body = ExamPeriodCreate,
    responses(
        (status = 201, description = "Exam period created", body = ExamPeriodResponse),
        (status = 400, description = "Unknown term, department, or college")
    ),
    tag = "Exam periods"
)]
pub async fn create_exam_period(
    State(state): State<SharedState>,
    Json(payload): Json<ExamPeriodCreate>,
) -> Result<(StatusCode, Json<ExamPeriodResponse>), ApiError> {
    terms::Entity::find_by_id(payload.term_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Term not found"))?;
    if let Some(department_id) = &payload.department_id {
        departments::Entity::find_by_id(department_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Department not found"))?;
    }
    if let Some(college_id) = &payload.college_id {
        colleges::Entity::find_by_id(college_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("College not found"))?;
    }

    let row = exam_periods::ActiveModel {
        exam_period_id: sea_orm::ActiveValue::NotSet,
        start_date: Set(payload.start_date),
        end_date: Set(payload.end_date),
        academic_year: Set(payload.academic_year),
        exam_category: Set(payload.exam_category),
        term_id: Set(payload.term_id),
        department_id: Set(payload.department_id),
        college_id: Set(payload.college_id),
    };
    let period = exam_periods::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;

    let hydrated = ExamPeriodService::get(&state.db, period.exam_period_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Exam period not found"))?;
    Ok((StatusCode::CREATED, Json(ExamPeriodResponse::from(hydrated))))
}

/// Apply a batch of add/remove instructions against the calendar
#[utoipa::path(
    put,
    path = "/api/exam_periods/bulk_update",
    request_body = BulkUpdateRequest,
    responses(
        (status = 200, description = "Number of rows affected", body = BulkUpdateResponse),
        (status = 400, description = "Empty updates list")
    ),
    tag = "Exam periods"
)]
pub async fn bulk_update_exam_periods(
    State(state): State<SharedState>,
    Json(payload): Json<BulkUpdateRequest>,
) -> Result<Json<BulkUpdateResponse>, ApiError> {
    if payload.updates.is_empty() {
        return Err(ApiError::bad_request("updates required"));
    }

    let instructions: Vec<ReconcileInstruction> = payload
        .updates
        .into_iter()
        .map(|item| ReconcileInstruction {
            start_date: item.start_date,
            college_name: item.college_name,
            college_to_remove: item.college_to_remove,
        })
        .collect();

    let updated_count = ExamPeriodService::bulk_reconcile(&state.db, &instructions).await?;
    Ok(Json(BulkUpdateResponse { updated_count }))
}

/// Get an exam period by id
#[utoipa::path(
    get,
    path = "/api/exam_periods/{exam_period_id}",
    responses(
        (status = 200, body = ExamPeriodResponse),
        (status = 404, description = "Exam period not found")
    ),
    tag = "Exam periods"
)]
pub async fn get_exam_period(
    State(state): State<SharedState>,
    Path(exam_period_id): Path<i32>,
) -> Result<Json<ExamPeriodResponse>, ApiError> {
    let row = ExamPeriodService::get(&state.db, exam_period_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Exam period not found"))?;
    Ok(Json(ExamPeriodResponse::from(row)))
}

/// Update an exam period
#[utoipa::path(
    put,
    path = "/api/exam_periods/{exam_period_id}",
    request_body = ExamPeriodUpdate,
    responses(
        (status = 200, body = ExamPeriodResponse),
        (status = 404, description = "Exam period not found")
    ),
    tag = "Exam periods"
)]
pub async fn update_exam_period(
    State(state): State<SharedState>,
    Path(exam_period_id): Path<i32>,
    Json(payload): Json<ExamPeriodUpdate>,
) -> Result<Json<ExamPeriodResponse>, ApiError> {
    let period = exam_periods::Entity::find_by_id(exam_period_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Exam period not found"))?;

    let mut active: exam_periods::ActiveModel = period.into();
    if let Some(term_id) = payload.term_id {
        terms::Entity::find_by_id(term_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Term not found"))?;
        active.term_id = Set(term_id);
    }
    if let Some(department_id) = payload.department_id {
        departments::Entity::find_by_id(&department_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Department not found"))?;
        active.department_id = Set(Some(department_id));
    }
    if let Some(college_id) = payload.college_id {
        colleges::Entity::find_by_id(&college_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("College not found"))?;
        active.college_id = Set(Some(college_id));
    }
    if let Some(start_date) = payload.start_date {
        active.start_date = Set(start_date);
    }
    if let Some(end_date) = payload.end_date {
        active.end_date = Set(end_date);
    }
    if let Some(academic_year) = payload.academic_year {
        active.academic_year = Set(academic_year);
    }
    if let Some(exam_category) = payload.exam_category {
        active.exam_category = Set(exam_category);
    }
    let updated = exam_periods::Entity::update(active).exec(&state.db).await?;

    let hydrated = ExamPeriodService::get(&state.db, updated.exam_period_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Exam period not found"))?;
    Ok(Json(ExamPeriodResponse::from(hydrated)))
}

/// Delete an exam period
#[utoipa::path(
    delete,
    path = "/api/exam_periods/{exam_period_id}",
    responses(
        (status = 204, description = "Exam period deleted"),
        (status = 404, description = "Exam period not found")
    ),
    tag = "Exam periods"
)]
pub async fn delete_exam_period(
    State(state): State<SharedState>,
    Path(exam_period_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    exam_periods::Entity::find_by_id(exam_period_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Exam period not found"))?;
    exam_periods::Entity::delete_by_id(exam_period_id)
        .exec(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
