use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "modalities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub modality_id: i32,
    pub modality_type: String,
    pub room_type: String,
    pub remarks: Option<String>,
    pub course_id: String,
    pub program_id: String,
    pub room_id: Option<String>,
    pub user_id: i32,
    pub created_at: Option<DateTimeWithTimeZone>,
    pub section_name: Option<String>,
    // JSON array of candidate room ids
    #[sea_orm(column_type = "Json", nullable)]
    pub possible_rooms: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::CourseId"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::RoomId"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::UserId"
    )]
    User,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
