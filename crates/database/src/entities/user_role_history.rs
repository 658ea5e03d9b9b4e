use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Append-only snapshot log of user-role changes. Columns are plain ids, not
// foreign keys, so history survives deletion of the rows it describes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_role_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub history_id: i64,
    pub user_role_id: i64,
    pub user_id: i64,
    pub role_id: Option<i32>,
    pub college_id: Option<String>,
    pub department_id: Option<String>,
    pub date_start: Option<Date>,
    pub date_ended: Option<Date>,
    pub status: Option<String>,
    pub action: Option<String>,
    pub changed_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
