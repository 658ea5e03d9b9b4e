use crate::dtos::exam_schedule::{
    ExamDetailCreate, ExamDetailQuery, ExamDetailResponse, ExamDetailUpdate, ModalityCreate,
    ModalityQuery, ModalityResponse, ModalityUpdate,
};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::entities::{courses, exam_details, exam_periods, modalities, rooms, users};
use database::services::exam_schedule::{
    ExamDetailFilter, ExamDetailService, ModalityFilter, ModalityService,
};
use sea_orm::{ActiveValue::Set, EntityTrait};
use serde_json::json;

/// List exam details, optionally filtered by room or date
#[utoipa::path(
    get,
    path = "/api/exam_details",
    params(ExamDetailQuery),
    responses(
        (status = 200, description = "List of exam details", body = [ExamDetailResponse])
    ),
    tag = "Exam schedule"
)]
pub async fn list_exam_details(
    State(state): State<SharedState>,
    Query(query): Query<ExamDetailQuery>,
) -> Result<Json<Vec<ExamDetailResponse>>, ApiError> {
    let filter = ExamDetailFilter {
        room_id: query.room_id,
        exam_date: query.exam_date,
    };
    let rows = ExamDetailService::list(&state.db, &filter).await?;
    Ok(Json(rows.into_iter().map(ExamDetailResponse::from).collect()))
}

/// Create an exam detail
#[utoipa::path(
    post,
    path = "/api/exam_details",
    request_body = ExamDetailCreate,
    responses(
        (status = 201, description = "Exam detail created", body = ExamDetailResponse),
        (status = 400, description = "Unknown room, modality, proctor, or exam period")
    ),
    tag = "Exam schedule"
)]
pub async fn create_exam_detail(
    State(state): State<SharedState>,
    Json(payload): Json<ExamDetailCreate>,
) -> Result<(StatusCode, Json<ExamDetailResponse>), ApiError> {
    rooms::Entity::find_by_id(&payload.room_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Room not found"))?;
    modalities::Entity::find_by_id(payload.modality_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Modality not found"))?;
    exam_periods::Entity::find_by_id(payload.exam_period_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Exam period not found"))?;
    if let Some(proctor_id) = payload.proctor_id {
        users::Entity::find_by_id(proctor_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Proctor not found"))?;
    }

    let row = exam_details::ActiveModel {
        exam_details_id: sea_orm::ActiveValue::NotSet,
        course_id: Set(payload.course_id),
        program_id: Set(payload.program_id),
        room_id: Set(payload.room_id),
        modality_id: Set(payload.modality_id),
        proctor_id: Set(payload.proctor_id),
        exam_period_id: Set(payload.exam_period_id),
        exam_duration_minutes: Set(payload.exam_duration_minutes),
        exam_start_time: Set(payload.exam_start_time),
        exam_end_time: Set(payload.exam_end_time),
        proctor_time_in: Set(payload.proctor_time_in),
        proctor_time_out: Set(payload.proctor_time_out),
        section_name: Set(payload.section_name),
        academic_year: Set(payload.academic_year),
        semester: Set(payload.semester),
        exam_category: Set(payload.exam_category),
        exam_period_label: Set(payload.exam_period_label),
        exam_date: Set(payload.exam_date),
        college_name: Set(payload.college_name),
        building_name: Set(payload.building_name),
        instructor_id: Set(payload.instructor_id),
    };
    let detail = exam_details::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;

    let hydrated = ExamDetailService::get(&state.db, detail.exam_details_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    Ok((StatusCode::CREATED, Json(ExamDetailResponse::from(hydrated))))
}

/// Get an exam detail by id
#[utoipa::path(
    get,
    path = "/api/exam_details/{id}",
    responses(
        (status = 200, body = ExamDetailResponse),
        (status = 404, description = "Not found")
    ),
    tag = "Exam schedule"
)]
pub async fn get_exam_detail(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ExamDetailResponse>, ApiError> {
    let row = ExamDetailService::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    Ok(Json(ExamDetailResponse::from(row)))
}

/// Update an exam detail
#[utoipa::path(
    put,
    path = "/api/exam_details/{id}",
    request_body = ExamDetailUpdate,
    responses(
        (status = 200, body = ExamDetailResponse),
        (status = 404, description = "Not found")
    ),
    tag = "Exam schedule"
)]
pub async fn update_exam_detail(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<ExamDetailUpdate>,
) -> Result<Json<ExamDetailResponse>, ApiError> {
    let detail = exam_details::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    let mut active: exam_details::ActiveModel = detail.into();
    if let Some(room_id) = payload.room_id {
        rooms::Entity::find_by_id(&room_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Room not found"))?;
        active.room_id = Set(room_id);
    }
    if let Some(modality_id) = payload.modality_id {
        modalities::Entity::find_by_id(modality_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Modality not found"))?;
        active.modality_id = Set(modality_id);
    }
    if let Some(exam_period_id) = payload.exam_period_id {
        exam_periods::Entity::find_by_id(exam_period_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Exam period not found"))?;
        active.exam_period_id = Set(exam_period_id);
    }
    if let Some(proctor_id) = payload.proctor_id {
        users::Entity::find_by_id(proctor_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Proctor not found"))?;
        active.proctor_id = Set(Some(proctor_id));
    }
    if let Some(course_id) = payload.course_id {
        active.course_id = Set(course_id);
    }
    if let Some(program_id) = payload.program_id {
        active.program_id = Set(program_id);
    }
    if let Some(exam_duration_minutes) = payload.exam_duration_minutes {
        active.exam_duration_minutes = Set(Some(exam_duration_minutes));
    }
    if let Some(exam_start_time) = payload.exam_start_time {
        active.exam_start_time = Set(Some(exam_start_time));
    }
    if let Some(exam_end_time) = payload.exam_end_time {
        active.exam_end_time = Set(Some(exam_end_time));
    }
    if let Some(proctor_time_in) = payload.proctor_time_in {
        active.proctor_time_in = Set(Some(proctor_time_in));
    }
    if let Some(proctor_time_out) = payload.proctor_time_out {
        active.proctor_time_out = Set(Some(proctor_time_out));
    }
    if let Some(section_name) = payload.section_name {
        active.section_name = Set(Some(section_name));
    }
    if let Some(academic_year) = payload.academic_year {
        active.academic_year = Set(Some(academic_year));
    }
    if let Some(semester) = payload.semester {
        active.semester = Set(Some(semester));
    }
    if let Some(exam_category) = payload.exam_category {
        active.exam_category = Set(Some(exam_category));
    }
    if let Some(exam_period_label) = payload.exam_period_label {
        active.exam_period_label = Set(Some(exam_period_label));
    }
    if let Some(exam_date) = payload.exam_date {
        active.exam_date = Set(Some(exam_date));
    }
    if let Some(college_name) = payload.college_name {
        active.college_name = Set(Some(college_name));
    }
    if let Some(building_name) = payload.building_name {
        active.building_name = Set(Some(building_name));
    }
    if let Some(instructor_id) = payload.instructor_id {
        active.instructor_id = Set(Some(instructor_id));
    }
    let updated = exam_details::Entity::update(active).exec(&state.db).await?;

    let hydrated = ExamDetailService::get(&state.db, updated.exam_details_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    Ok(Json(ExamDetailResponse::from(hydrated)))
}

/// Delete an exam detail
#[utoipa::path(
    delete,
    path = "/api/exam_details/{id}",
    responses(
        (status = 204, description = "Exam detail deleted"),
        (status = 404, description = "Not found")
    ),
    tag = "Exam schedule"
)]
pub async fn delete_exam_detail(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    exam_details::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    exam_details::Entity::delete_by_id(id).exec(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List modalities with optional exact-match filters
#[utoipa::path(
    get,
    path = "/api/modalities",
    params(ModalityQuery),
    responses(
        (status = 200, description = "List of modalities", body = [ModalityResponse])
    ),
    tag = "Exam schedule"
)]
pub async fn list_modalities(
    State(state): State<SharedState>,
    Query(query): Query<ModalityQuery>,
) -> Result<Json<Vec<ModalityResponse>>, ApiError> {
    let filter = ModalityFilter {
        course_id: query.course_id,
        program_id: query.program_id,
        section_name: query.section_name,
        modality_type: query.modality_type,
        room_type: query.room_type,
    };
    let rows = ModalityService::list(&state.db, &filter).await?;
    Ok(Json(rows.into_iter().map(ModalityResponse::from).collect()))
}

/// Create a modality
#[utoipa::path(
    post,
    path = "/api/modalities",
    request_body = ModalityCreate,
    responses(
        (status = 201, description = "Modality created", body = ModalityResponse),
        (status = 400, description = "Unknown course, room, or user")
    ),
    tag = "Exam schedule"
)]
pub async fn create_modality(
    State(state): State<SharedState>,
    Json(payload): Json<ModalityCreate>,
) -> Result<(StatusCode, Json<ModalityResponse>), ApiError> {
    courses::Entity::find_by_id(&payload.course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Course not found"))?;
    users::Entity::find_by_id(payload.user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("User not found"))?;
    if let Some(room_id) = &payload.room_id {
        rooms::Entity::find_by_id(room_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Room not found"))?;
    }

    let row = modalities::ActiveModel {
        modality_id: sea_orm::ActiveValue::NotSet,
        modality_type: Set(payload.modality_type),
        room_type: Set(payload.room_type),
        remarks: Set(payload.remarks),
        course_id: Set(payload.course_id),
        program_id: Set(payload.program_id),
        room_id: Set(payload.room_id),
        user_id: Set(payload.user_id),
        created_at: Set(payload.created_at),
        section_name: Set(payload.section_name),
        possible_rooms: Set(payload.possible_rooms.map(|rooms| json!(rooms))),
    };
    let modality = modalities::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;

    let hydrated = ModalityService::get(&state.db, modality.modality_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    Ok((StatusCode::CREATED, Json(ModalityResponse::from(hydrated))))
}

/// Get a modality by id
#[utoipa::path(
    get,
    path = "/api/modalities/{id}",
    responses(
        (status = 200, body = ModalityResponse),
        (status = 404, description = "Not found")
    ),
    tag = "Exam schedule"
)]
pub async fn get_modality(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ModalityResponse>, ApiError> {
    let row = ModalityService::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    Ok(Json(ModalityResponse::from(row)))
}

/// Update a modality
#[utoipa::path(
    put,
    path = "/api/modalities/{id}",
    request_body = ModalityUpdate,
    responses(
        (status = 200, body = ModalityResponse),
        (status = 404, description = "Not found")
    ),
    tag = "Exam schedule"
)]
pub async fn update_modality(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<ModalityUpdate>,
) -> Result<Json<ModalityResponse>, ApiError> {
    let modality = modalities::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    let mut active: modalities::ActiveModel = modality.into();
    if let Some(course_id) = payload.course_id {
        courses::Entity::find_by_id(&course_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Course not found"))?;
        active.course_id = Set(course_id);
    }
    if let Some(user_id) = payload.user_id {
        users::Entity::find_by_id(user_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("User not found"))?;
        active.user_id = Set(user_id);
    }
    if let Some(room_id) = payload.room_id {
        rooms::Entity::find_by_id(&room_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Room not found"))?;
        active.room_id = Set(Some(room_id));
    }
    if let Some(modality_type) = payload.modality_type {
        active.modality_type = Set(modality_type);
    }
    if let Some(room_type) = payload.room_type {
        active.room_type = Set(room_type);
    }
    if let Some(remarks) = payload.remarks {
        active.remarks = Set(Some(remarks));
    }
    if let Some(program_id) = payload.program_id {
        active.program_id = Set(program_id);
    }
    if let Some(section_name) = payload.section_name {
        active.section_name = Set(Some(section_name));
    }
    if let Some(possible_rooms) = payload.possible_rooms {
        active.possible_rooms = Set(Some(json!(possible_rooms)));
    }
    let updated = modalities::Entity::update(active).exec(&state.db).await?;

    let hydrated = ModalityService::get(&state.db, updated.modality_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    Ok(Json(ModalityResponse::from(hydrated)))
}

/// Delete a modality
#[utoipa::path(
    delete,
    path = "/api/modalities/{id}",
    responses(
        (status = 204, description = "Modality deleted"),
        (status = 404, description = "Not found")
    ),
    tag = "Exam schedule"
)]
pub async fn delete_modality(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    modalities::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;
    modalities::Entity::delete_by_id(id).exec(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}
