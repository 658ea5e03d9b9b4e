use crate::dtos::org::{
    CollegeCreate, CollegeResponse, CollegeUpdate, DepartmentCreate, DepartmentResponse,
    DepartmentUpdate, ProgramCreate, ProgramResponse, ProgramUpdate,
};
use crate::error::ApiError;
use crate::pagination::{PageParams, fetch_page};
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::entities::{colleges, departments, programs};
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};
use std::collections::HashMap;

/// List colleges
#[utoipa::path(
    get,
    path = "/api/colleges",
    params(PageParams),
    responses(
        (status = 200, description = "List of colleges", body = [CollegeResponse])
    ),
    tag = "Organization"
)]
pub async fn list_colleges(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<CollegeResponse>>, ApiError> {
    let rows = fetch_page(&state.db, colleges::Entity::find(), &params).await?;
    Ok(Json(rows.into_iter().map(CollegeResponse::from).collect()))
}

/// Create a college
#[utoipa::path(
    post,
    path = "/api/colleges",
    request_body = CollegeCreate,
    responses(
        (status = 201, description = "College created", body = CollegeResponse)
    ),
    tag = "Organization"
)]
pub async fn create_college(
    State(state): State<SharedState>,
    Json(payload): Json<CollegeCreate>,
) -> Result<(StatusCode, Json<CollegeResponse>), ApiError> {
    let row = colleges::ActiveModel {
        college_id: Set(payload.college_id.clone()),
        college_name: Set(payload.college_name.clone()),
    };
    colleges::Entity::insert(row).exec(&state.db).await?;
    Ok((
        StatusCode::CREATED,
        Json(CollegeResponse {
            college_id: payload.college_id,
            college_name: payload.college_name,
        }),
    ))
}

/// Get a college by id
#[utoipa::path(
    get,
    path = "/api/colleges/{college_id}",
    responses(
        (status = 200, body = CollegeResponse),
        (status = 404, description = "College not found")
    ),
    tag = "Organization"
)]
pub async fn get_college(
    State(state): State<SharedState>,
    Path(college_id): Path<String>,
) -> Result<Json<CollegeResponse>, ApiError> {
    let college = colleges::Entity::find_by_id(&college_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("College not found"))?;
    Ok(Json(CollegeResponse::from(college)))
}

/// Update a college
#[utoipa::path(
    put,
    path = "/api/colleges/{college_id}",
    request_body = CollegeUpdate,
    responses(
        (status = 200, body = CollegeResponse),
        (status = 404, description = "College not found")
    ),
    tag = "Organization"
)]
pub async fn update_college(
    State(state): State<SharedState>,
    Path(college_id): Path<String>,
    Json(payload): Json<CollegeUpdate>,
) -> Result<Json<CollegeResponse>, ApiError> {
    let college = colleges::Entity::find_by_id(&college_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("College not found"))?;

    let mut active: colleges::ActiveModel = college.into();
    if let Some(college_name) = payload.college_name {
        active.college_name = Set(college_name);
    }
    let updated = colleges::Entity::update(active).exec(&state.db).await?;
    Ok(Json(CollegeResponse::from(updated)))
}

/// Delete a college
#[utoipa::path(
    delete,
    path = "/api/colleges/{college_id}",
    responses(
        (status = 204, description = "College deleted"),
        (status = 404, description = "College not found")
    ),
    tag = "Organization"
)]
pub async fn delete_college(
    State(state): State<SharedState>,
    Path(college_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    colleges::Entity::find_by_id(&college_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("College not found"))?;
    colleges::Entity::delete_by_id(&college_id)
        .exec(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn college_for(
    state: &SharedState,
    college_id: &str,
) -> Result<colleges::Model, ApiError> {
    colleges::Entity::find_by_id(college_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("College not found"))
}

/// List departments with their colleges
#[utoipa::path(
    get,
    path = "/api/departments",
    params(PageParams),
    responses(
        (status = 200, description = "List of departments", body = [DepartmentResponse])
    ),
    tag = "Organization"
)]
pub async fn list_departments(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let rows = fetch_page(&state.db, departments::Entity::find(), &params).await?;

    let college_ids: Vec<String> = rows.iter().filter_map(|d| d.college_id.clone()).collect();
    let colleges_by_id: HashMap<String, colleges::Model> = colleges::Entity::find()
        .filter(colleges::Column::CollegeId.is_in(college_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|c| (c.college_id.clone(), c))
        .collect();

    let responses = rows
        .into_iter()
        .map(|department| {
            let college = department
                .college_id
                .as_ref()
                .and_then(|id| colleges_by_id.get(id).cloned());
            DepartmentResponse::from_models(department, college)
        })
        .collect();
    Ok(Json(responses))
}

/// Create a department
#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = DepartmentCreate,
    responses(
        (status = 201, description = "Department created", body = DepartmentResponse),
        (status = 400, description = "College not found")
    ),
    tag = "Organization"
)]
pub async fn create_department(
    State(state): State<SharedState>,
    Json(payload): Json<DepartmentCreate>,
) -> Result<(StatusCode, Json<DepartmentResponse>), ApiError> {
    let college = college_for(&state, &payload.college_id).await?;

    let row = departments::ActiveModel {
        department_id: Set(payload.department_id.clone()),
        department_name: Set(payload.department_name.clone()),
        college_id: Set(Some(college.college_id.clone())),
    };
    let department = departments::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DepartmentResponse::from_models(department, Some(college))),
    ))
}

/// Get a department by id
#[utoipa::path(
    get,
    path = "/api/departments/{department_id}",
    responses(
        (status = 200, body = DepartmentResponse),
        (status = 404, description = "Department not found")
    ),
    tag = "Organization"
)]
pub async fn get_department(
    State(state): State<SharedState>,
    Path(department_id): Path<String>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let (department, college) = departments::Entity::find_by_id(&department_id)
        .find_also_related(colleges::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Department not found"))?;
    Ok(Json(DepartmentResponse::from_models(department, college)))
}

/// Update a department
#[utoipa::path(
    patch,
    path = "/api/departments/{department_id}",
    request_body = DepartmentUpdate,
    responses(
        (status = 200, body = DepartmentResponse),
        (status = 404, description = "Department not found")
    ),
    tag = "Organization"
)]
pub async fn update_department(
    State(state): State<SharedState>,
    Path(department_id): Path<String>,
    Json(payload): Json<DepartmentUpdate>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let department = departments::Entity::find_by_id(&department_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Department not found"))?;

    let mut active: departments::ActiveModel = department.into();
    if let Some(college_id) = payload.college_id {
        let college = college_for(&state, &college_id).await?;
        active.college_id = Set(Some(college.college_id));
    }
    if let Some(department_name) = payload.department_name {
        active.department_name = Set(Some(department_name));
    }
    let updated = departments::Entity::update(active).exec(&state.db).await?;

    let college = match &updated.college_id {
        Some(id) => colleges::Entity::find_by_id(id).one(&state.db).await?,
        None => None,
    };
    Ok(Json(DepartmentResponse::from_models(updated, college)))
}

/// Delete a department
#[utoipa::path(
    delete,
    path = "/api/departments/{department_id}",
    responses(
        (status = 204, description = "Department deleted"),
        (status = 404, description = "Department not found")
    ),
    tag = "Organization"
)]
pub async fn delete_department(
    State(state): State<SharedState>,
    Path(department_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    departments::Entity::find_by_id(&department_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Department not found"))?;
    departments::Entity::delete_by_id(&department_id)
        .exec(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List programs
#[utoipa::path(
    get,
    path = "/api/programs",
    params(PageParams),
    responses(
        (status = 200, description = "List of programs", body = [ProgramResponse])
    ),
    tag = "Organization"
)]
pub async fn list_programs(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<ProgramResponse>>, ApiError> {
    let rows = fetch_page(&state.db, programs::Entity::find(), &params).await?;

    let department_ids: Vec<String> = rows.iter().map(|p| p.department_id.clone()).collect();
    let departments_by_id: HashMap<String, departments::Model> = departments::Entity::find()
        .filter(departments::Column::DepartmentId.is_in(department_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|d| (d.department_id.clone(), d))
        .collect();

    let responses = rows
        .into_iter()
        .map(|program| {
            let department = departments_by_id.get(&program.department_id).cloned();
            ProgramResponse::from_models(program, department)
        })
        .collect();
    Ok(Json(responses))
}

/// Create a program
#[utoipa::path(
    post,
    path = "/api/programs",
    request_body = ProgramCreate,
    responses(
        (status = 201, description = "Program created", body = ProgramResponse),
        (status = 400, description = "Department not found")
    ),
    tag = "Organization"
)]
pub async fn create_program(
    State(state): State<SharedState>,
    Json(payload): Json<ProgramCreate>,
) -> Result<(StatusCode, Json<ProgramResponse>), ApiError> {
    let department = departments::Entity::find_by_id(&payload.department_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Department not found"))?;

    let row = programs::ActiveModel {
        program_id: Set(payload.program_id.clone()),
        program_name: Set(payload.program_name.clone()),
        department_id: Set(department.department_id.clone()),
    };
    let program = programs::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ProgramResponse::from_models(program, Some(department))),
    ))
}

/// Get a program by id
#[utoipa::path(
    get,
    path = "/api/programs/{program_id}",
    responses(
        (status = 200, body = ProgramResponse),
        (status = 404, description = "Program not found")
    ),
    tag = "Organization"
)]
pub async fn get_program(
    State(state): State<SharedState>,
    Path(program_id): Path<String>,
) -> Result<Json<ProgramResponse>, ApiError> {
    let (program, department) = programs::Entity::find_by_id(&program_id)
        .find_also_related(departments::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Program not found"))?;
    Ok(Json(ProgramResponse::from_models(program, department)))
}

/// Update a program
#[utoipa::path(
    patch,
    path = "/api/programs/{program_id}",
    request_body = ProgramUpdate,
    responses(
        (status = 200, body = ProgramResponse),
        (status = 404, description = "Program not found")
    ),
    tag = "Organization"
)]
pub async fn update_program(
    State(state): State<SharedState>,
    Path(program_id): Path<String>,
    Json(payload): Json<ProgramUpdate>,
) -> Result<Json<ProgramResponse>, ApiError> {
    let program = programs::Entity::find_by_id(&program_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Program not found"))?;

    let mut active: programs::ActiveModel = program.into();
    if let Some(department_id) = payload.department_id {
        let department = departments::Entity::find_by_id(&department_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Department not found"))?;
        active.department_id = Set(department.department_id);
    }
    if let Some(program_name) = payload.program_name {
        active.program_name = Set(program_name);
    }
    let updated = programs::Entity::update(active).exec(&state.db).await?;

    let department = departments::Entity::find_by_id(&updated.department_id)
        .one(&state.db)
        .await?;
    Ok(Json(ProgramResponse::from_models(updated, department)))
}

/// Delete a program
#[utoipa::path(
    delete,
    path = "/api/programs/{program_id}",
    responses(
        (status = 204, description = "Program deleted"),
        (status = 404, description = "Program not found")
    ),
    tag = "Organization"
)]
pub async fn delete_program(
    State(state): State<SharedState>,
    Path(program_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    programs::Entity::find_by_id(&program_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Program not found"))?;
    programs::Entity::delete_by_id(&program_id)
        .exec(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
