use database::entities::{colleges, departments, programs};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CollegeResponse {
    pub college_id: String,
    pub college_name: String,
}

impl From<colleges::Model> for CollegeResponse {
    fn from(college: colleges::Model) -> Self {
        Self {
            college_id: college.college_id,
            college_name: college.college_name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CollegeCreate {
    pub college_id: String,
    pub college_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CollegeUpdate {
    #[serde(default)]
    pub college_name: Option<String>,
}

/// Departments are returned with their college embedded.
#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentResponse {
    pub department_id: String,
    pub department_name: Option<String>,
    pub college: Option<CollegeResponse>,
}

impl DepartmentResponse {
    pub fn from_models(
        department: departments::Model,
        college: Option<colleges::Model>,
    ) -> Self {
        Self {
            department_id: department.department_id,
            department_name: department.department_name,
            college: college.map(CollegeResponse::from),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DepartmentCreate {
    pub department_id: String,
    #[serde(default)]
    pub department_name: Option<String>,
    pub college_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DepartmentUpdate {
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub college_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramResponse {
    pub program_id: String,
    pub program_name: String,
    pub department_id: String,
    pub department_name: Option<String>,
}

impl ProgramResponse {
    pub fn from_models(
        program: programs::Model,
        department: Option<departments::Model>,
    ) -> Self {
        Self {
            program_id: program.program_id,
            program_name: program.program_name,
            department_id: program.department_id,
            department_name: department.and_then(|d| d.department_name),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProgramCreate {
    pub program_id: String,
    pub program_name: String,
    pub department_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProgramUpdate {
    #[serde(default)]
    pub program_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
}
