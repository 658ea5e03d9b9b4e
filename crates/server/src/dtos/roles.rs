use chrono::{DateTime, FixedOffset, NaiveDate};
use database::entities::{roles, user_role_history};
use database::services::user_role::UserRoleRow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleResponse {
    pub role_id: i64,
    pub role_name: String,
}

impl From<roles::Model> for RoleResponse {
    fn from(role: roles::Model) -> Self {
        Self {
            role_id: role.role_id,
            role_name: role.role_name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleCreate {
    pub role_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleUpdate {
    #[serde(default)]
    pub role_name: Option<String>,
}

/// Full assignment shape with role/scope names resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserRoleResponse {
    pub user_role_id: i32,
    pub user_id: i32,
    pub user_full_name: Option<String>,
    pub role_id: Option<i64>,
    pub role_name: Option<String>,
    pub college_id: Option<String>,
    pub college_name: Option<String>,
    pub department_id: Option<String>,
    pub department_name: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub date_start: Option<DateTime<FixedOffset>>,
    pub date_ended: Option<DateTime<FixedOffset>>,
}

impl From<UserRoleRow> for UserRoleResponse {
    fn from(row: UserRoleRow) -> Self {
        Self {
            user_role_id: row.user_role.user_role_id,
            user_id: row.user_role.user_id,
            user_full_name: row
                .user
                .map(|u| format!("{} {}", u.first_name, u.last_name)),
            role_id: row.user_role.role_id,
            role_name: row.role.map(|r| r.role_name),
            college_id: row.user_role.college_id,
            college_name: row.college.map(|c| c.college_name),
            department_id: row.user_role.department_id,
            department_name: row.department.and_then(|d| d.department_name),
            status: row.user_role.status,
            created_at: row.user_role.created_at,
            date_start: row.user_role.date_start,
            date_ended: row.user_role.date_ended,
        }
    }
}

/// Compact shape used when listing the roles of one user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserRoleSummary {
    pub user_role_id: i32,
    pub role_name: Option<String>,
    pub status: Option<String>,
    pub college_id: Option<String>,
    pub department_id: Option<String>,
}

impl From<UserRoleRow> for UserRoleSummary {
    fn from(row: UserRoleRow) -> Self {
        Self {
            user_role_id: row.user_role.user_role_id,
            role_name: row.role.map(|r| r.role_name),
            status: row.user_role.status,
            college_id: row.user_role.college_id,
            department_id: row.user_role.department_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserRoleCreate {
    pub user_id: i32,
    pub role_id: i64,
    #[serde(default)]
    pub college_id: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub date_start: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub date_ended: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserRoleUpdate {
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub role_id: Option<i64>,
    #[serde(default)]
    pub college_id: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date_start: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub date_ended: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct UserRoleQuery {
    pub user_id: Option<i32>,
    pub role_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleHistoryResponse {
    pub history_id: i64,
    pub user_role_id: i64,
    pub user_id: i64,
    pub role_id: Option<i32>,
    pub college_id: Option<String>,
    pub department_id: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_ended: Option<NaiveDate>,
    pub status: Option<String>,
    pub action: Option<String>,
    pub changed_at: Option<DateTime<FixedOffset>>,
}

impl From<user_role_history::Model> for RoleHistoryResponse {
    fn from(row: user_role_history::Model) -> Self {
        Self {
            history_id: row.history_id,
            user_role_id: row.user_role_id,
            user_id: row.user_id,
            role_id: row.role_id,
            college_id: row.college_id,
            department_id: row.department_id,
            date_start: row.date_start,
            date_ended: row.date_ended,
            status: row.status,
            action: row.action,
            changed_at: row.changed_at,
        }
    }
}

/// History rows are append-only; `changed_at` is always stamped server-side.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleHistoryCreate {
    pub user_role_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub role_id: Option<i32>,
    #[serde(default)]
    pub college_id: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub date_start: Option<NaiveDate>,
    #[serde(default)]
    pub date_ended: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct RoleHistoryQuery {
    pub user_role_id: Option<i64>,
}
