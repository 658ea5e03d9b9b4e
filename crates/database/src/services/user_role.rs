use crate::entities::{colleges, departments, roles, user_roles, users};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;

/// A user-role assignment with its role, scope, and user rows resolved.
#[derive(Debug, Clone)]
pub struct UserRoleRow {
    pub user_role: user_roles::Model,
    pub role: Option<roles::Model>,
    pub college: Option<colleges::Model>,
    pub department: Option<departments::Model>,
    pub user: Option<users::Model>,
}

pub struct UserRoleService;

impl UserRoleService {
    pub async fn list(
        db: &DatabaseConnection,
        user_id: Option<i32>,
        role_id: Option<i64>,
    ) -> Result<Vec<UserRoleRow>, DbErr> {
        let mut query = user_roles::Entity::find();
        if let Some(user_id) = user_id {
            query = query.filter(user_roles::Column::UserId.eq(user_id));
        }
        if let Some(role_id) = role_id {
            query = query.filter(user_roles::Column::RoleId.eq(role_id));
        }
        let rows = query.all(db).await?;
        Self::attach_related(db, rows).await
    }

    pub async fn get(
        db: &DatabaseConnection,
        user_role_id: i32,
    ) -> Result<Option<UserRoleRow>, DbErr> {
        let row = match user_roles::Entity::find_by_id(user_role_id).one(db).await? {
            Some(row) => row,
            None => return Ok(None),
        };
        let mut hydrated = Self::attach_related(db, vec![row]).await?;
        Ok(hydrated.pop())
    }

    async fn attach_related(
        db: &DatabaseConnection,
        rows: Vec<user_roles::Model>,
    ) -> Result<Vec<UserRoleRow>, DbErr> {
        if rows.is_empty() {
            return Ok(vec![]);
        }

        let role_ids: Vec<i64> = rows.iter().filter_map(|r| r.role_id).collect();
        let roles_by_id: HashMap<i64, roles::Model> = roles::Entity::find()
            .filter(roles::Column::RoleId.is_in(role_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|r| (r.role_id, r))
            .collect();

        let college_ids: Vec<String> = rows.iter().filter_map(|r| r.college_id.clone()).collect();
        let colleges_by_id: HashMap<String, colleges::Model> = colleges::Entity::find()
            .filter(colleges::Column::CollegeId.is_in(college_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.college_id.clone(), c))
            .collect();

        let department_ids: Vec<String> =
            rows.iter().filter_map(|r| r.department_id.clone()).collect();
        let departments_by_id: HashMap<String, departments::Model> = departments::Entity::find()
            .filter(departments::Column::DepartmentId.is_in(department_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|d| (d.department_id.clone(), d))
            .collect();

        let user_ids: Vec<i32> = rows.iter().map(|r| r.user_id).collect();
        let users_by_id: HashMap<i32, users::Model> = users::Entity::find()
            .filter(users::Column::UserId.is_in(user_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.user_id, u))
            .collect();

        Ok(rows
            .into_iter()
            .map(|user_role| {
                let role = user_role.role_id.and_then(|id| roles_by_id.get(&id).cloned());
                let college = user_role
                    .college_id
                    .as_ref()
                    .and_then(|id| colleges_by_id.get(id).cloned());
                let department = user_role
                    .department_id
                    .as_ref()
                    .and_then(|id| departments_by_id.get(id).cloned());
                let user = users_by_id.get(&user_role.user_id).cloned();
                UserRoleRow {
                    user_role,
                    role,
                    college,
                    department,
                    user,
                }
            })
            .collect())
    }
}
