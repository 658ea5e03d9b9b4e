use crate::dtos::courses::{
    CourseResponse, CourseUserResponse, CourseUserWrite, CourseWritePayload,
    SectionCourseCreate, SectionCourseResponse, SectionCourseUpdate,
};
use crate::error::ApiError;
use crate::pagination::{PageParams, fetch_page};
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::entities::{course_users, courses, programs, section_courses, terms, users};
use database::services::course::{CourseService, CourseWrite};
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};
use std::collections::HashMap;

impl From<CourseWritePayload> for CourseWrite {
    fn from(payload: CourseWritePayload) -> Self {
        Self {
            course_id: payload.course_id,
            course_name: payload.course_name,
            term_id: payload.term_id,
            user_ids: payload.user_ids,
            leaders: payload.leaders,
        }
    }
}

/// List courses with terms and assigned users
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "List of courses", body = [CourseResponse])
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<SharedState>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let rows = CourseService::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(CourseResponse::from).collect()))
}

/// Create (or replace) a course and its user assignments
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseWritePayload,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Unknown term or user")
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<SharedState>,
    Json(payload): Json<CourseWritePayload>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let course = CourseService::save(&state.db, payload.into()).await?;
    let row = CourseService::get(&state.db, &course.course_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    Ok((StatusCode::CREATED, Json(CourseResponse::from(row))))
}

/// Get a course by id
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    responses(
        (status = 200, body = CourseResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<SharedState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, ApiError> {
    let row = CourseService::get(&state.db, &course_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    Ok(Json(CourseResponse::from(row)))
}

/// Replace a course and its user assignments
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}",
    request_body = CourseWritePayload,
    responses(
        (status = 200, body = CourseResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<SharedState>,
    Path(course_id): Path<String>,
    Json(mut payload): Json<CourseWritePayload>,
) -> Result<Json<CourseResponse>, ApiError> {
    courses::Entity::find_by_id(&course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    // The path wins over whatever id the body carries.
    payload.course_id = course_id.clone();
    CourseService::save(&state.db, payload.into()).await?;

    let row = CourseService::get(&state.db, &course_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    Ok(Json(CourseResponse::from(row)))
}

/// Delete a course and its user assignments
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<SharedState>,
    Path(course_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if CourseService::delete(&state.db, &course_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Course not found"))
    }
}

/// List course-user assignments
#[utoipa::path(
    get,
    path = "/api/course_users",
    params(PageParams),
    responses(
        (status = 200, description = "List of assignments", body = [CourseUserResponse])
    ),
    tag = "Courses"
)]
pub async fn list_course_users(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<CourseUserResponse>>, ApiError> {
    let rows = fetch_page(&state.db, course_users::Entity::find(), &params).await?;

    let user_ids: Vec<i32> = rows.iter().map(|cu| cu.user_id).collect();
    let users_by_id: HashMap<i32, users::Model> = users::Entity::find()
        .filter(users::Column::UserId.is_in(user_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|u| (u.user_id, u))
        .collect();

    let responses = rows
        .into_iter()
        .map(|row| {
            let user = users_by_id.get(&row.user_id).cloned();
            CourseUserResponse::from_models(row, user)
        })
        .collect();
    Ok(Json(responses))
}

/// Assign a user to a course
#[utoipa::path(
    post,
    path = "/api/course_users",
    request_body = CourseUserWrite,
    responses(
        (status = 201, description = "Assignment created", body = CourseUserResponse),
        (status = 400, description = "Unknown course or user")
    ),
    tag = "Courses"
)]
pub async fn create_course_user(
    State(state): State<SharedState>,
    Json(payload): Json<CourseUserWrite>,
) -> Result<(StatusCode, Json<CourseUserResponse>), ApiError> {
    courses::Entity::find_by_id(&payload.course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Course not found"))?;
    let user = users::Entity::find_by_id(payload.user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("User not found"))?;

    let row = course_users::ActiveModel {
        course_id: Set(payload.course_id.clone()),
        user_id: Set(payload.user_id),
        course_name: Set(payload.course_name.clone()),
        is_leader: Set(payload.is_leader),
    };
    course_users::Entity::insert(row).exec(&state.db).await?;

    let created = course_users::Entity::find_by_id((payload.course_id, payload.user_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;
    Ok((
        StatusCode::CREATED,
        Json(CourseUserResponse::from_models(created, Some(user))),
    ))
}

/// Get one course-user assignment
#[utoipa::path(
    get,
    path = "/api/course_users/{course_id}/{user_id}",
    responses(
        (status = 200, body = CourseUserResponse),
        (status = 404, description = "Record not found")
    ),
    tag = "Courses"
)]
pub async fn get_course_user(
    State(state): State<SharedState>,
    Path((course_id, user_id)): Path<(String, i32)>,
) -> Result<Json<CourseUserResponse>, ApiError> {
    let row = course_users::Entity::find_by_id((course_id, user_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;
    let user = users::Entity::find_by_id(row.user_id).one(&state.db).await?;
    Ok(Json(CourseUserResponse::from_models(row, user)))
}

/// Update a course-user assignment
#[utoipa::path(
    put,
    path = "/api/course_users/{course_id}/{user_id}",
    request_body = CourseUserWrite,
    responses(
        (status = 200, body = CourseUserResponse),
        (status = 404, description = "Record not found")
    ),
    tag = "Courses"
)]
pub async fn update_course_user(
    State(state): State<SharedState>,
    Path((course_id, user_id)): Path<(String, i32)>,
    Json(payload): Json<CourseUserWrite>,
) -> Result<Json<CourseUserResponse>, ApiError> {
    let row = course_users::Entity::find_by_id((course_id, user_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;

    let mut active: course_users::ActiveModel = row.into();
    active.course_name = Set(payload.course_name);
    active.is_leader = Set(payload.is_leader);
    let updated = course_users::Entity::update(active).exec(&state.db).await?;

    let user = users::Entity::find_by_id(updated.user_id)
        .one(&state.db)
        .await?;
    Ok(Json(CourseUserResponse::from_models(updated, user)))
}

/// Remove a course-user assignment
#[utoipa::path(
    delete,
    path = "/api/course_users/{course_id}/{user_id}",
    responses(
        (status = 204, description = "Assignment removed"),
        (status = 404, description = "Record not found")
    ),
    tag = "Courses"
)]
pub async fn delete_course_user(
    State(state): State<SharedState>,
    Path((course_id, user_id)): Path<(String, i32)>,
) -> Result<StatusCode, ApiError> {
    course_users::Entity::find_by_id((course_id.clone(), user_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;
    course_users::Entity::delete_by_id((course_id, user_id))
        .exec(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List section courses
#[utoipa::path(
    get,
    path = "/api/section_courses",
    params(PageParams),
    responses(
        (status = 200, description = "List of sections", body = [SectionCourseResponse])
    ),
    tag = "Courses"
)]
pub async fn list_section_courses(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<SectionCourseResponse>>, ApiError> {
    let rows = fetch_page(&state.db, section_courses::Entity::find(), &params).await?;
    Ok(Json(
        rows.into_iter().map(SectionCourseResponse::from).collect(),
    ))
}

/// Create a section course
#[utoipa::path(
    post,
    path = "/api/section_courses",
    request_body = SectionCourseCreate,
    responses(
        (status = 201, description = "Section created", body = SectionCourseResponse),
        (status = 400, description = "Unknown course, program, term, or user")
    ),
    tag = "Courses"
)]
pub async fn create_section_course(
    State(state): State<SharedState>,
    Json(payload): Json<SectionCourseCreate>,
) -> Result<(StatusCode, Json<SectionCourseResponse>), ApiError> {
    courses::Entity::find_by_id(&payload.course_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Course not found"))?;
    programs::Entity::find_by_id(&payload.program_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Program not found"))?;
    terms::Entity::find_by_id(payload.term_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Term not found"))?;
    if let Some(user_id) = payload.user_id {
        users::Entity::find_by_id(user_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("User not found"))?;
    }

    let row = section_courses::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        course_id: Set(payload.course_id),
        program_id: Set(payload.program_id),
        section_name: Set(payload.section_name),
        number_of_students: Set(payload.number_of_students),
        year_level: Set(payload.year_level),
        term_id: Set(payload.term_id),
        user_id: Set(payload.user_id),
    };
    let section = section_courses::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SectionCourseResponse::from(section)),
    ))
}

/// Get a section course by id
#[utoipa::path(
    get,
    path = "/api/section_courses/{id}",
    responses(
        (status = 200, body = SectionCourseResponse),
        (status = 404, description = "Section not found")
    ),
    tag = "Courses"
)]
pub async fn get_section_course(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<SectionCourseResponse>, ApiError> {
    let section = section_courses::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Section not found"))?;
    Ok(Json(SectionCourseResponse::from(section)))
}

/// Update a section course
#[utoipa::path(
    put,
    path = "/api/section_courses/{id}",
    request_body = SectionCourseUpdate,
    responses(
        (status = 200, body = SectionCourseResponse),
        (status = 404, description = "Section not found")
    ),
    tag = "Courses"
)]
pub async fn update_section_course(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<SectionCourseUpdate>,
) -> Result<Json<SectionCourseResponse>, ApiError> {
    let section = section_courses::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Section not found"))?;

    let mut active: section_courses::ActiveModel = section.into();
    if let Some(course_id) = payload.course_id {
        courses::Entity::find_by_id(&course_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Course not found"))?;
        active.course_id = Set(course_id);
    }
    if let Some(program_id) = payload.program_id {
        programs::Entity::find_by_id(&program_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Program not found"))?;
        active.program_id = Set(program_id);
    }
    if let Some(term_id) = payload.term_id {
        terms::Entity::find_by_id(term_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Term not found"))?;
        active.term_id = Set(term_id);
    }
    if let Some(user_id) = payload.user_id {
        users::Entity::find_by_id(user_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("User not found"))?;
        active.user_id = Set(Some(user_id));
    }
    if let Some(section_name) = payload.section_name {
        active.section_name = Set(section_name);
    }
    if let Some(number_of_students) = payload.number_of_students {
        active.number_of_students = Set(number_of_students);
    }
    if let Some(year_level) = payload.year_level {
        active.year_level = Set(year_level);
    }
    let updated = section_courses::Entity::update(active)
        .exec(&state.db)
        .await?;
    Ok(Json(SectionCourseResponse::from(updated)))
}

/// Delete a section course
#[utoipa::path(
    delete,
    path = "/api/section_courses/{id}",
    responses(
        (status = 204, description = "Section deleted"),
        (status = 404, description = "Section not found")
    ),
    tag = "Courses"
)]
pub async fn delete_section_course(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    section_courses::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Section not found"))?;
    section_courses::Entity::delete_by_id(id)
        .exec(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
