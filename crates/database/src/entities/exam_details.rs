use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Carries denormalized college/building names so schedule exports do not need joins.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exam_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub exam_details_id: i32,
    pub course_id: String,
    pub program_id: String,
    pub room_id: String,
    pub modality_id: i32,
    pub proctor_id: Option<i32>,
    pub exam_period_id: i32,
    pub exam_duration_minutes: Option<i32>,
    pub exam_start_time: Option<DateTimeWithTimeZone>,
    pub exam_end_time: Option<DateTimeWithTimeZone>,
    pub proctor_time_in: Option<DateTimeWithTimeZone>,
    pub proctor_time_out: Option<DateTimeWithTimeZone>,
    pub section_name: Option<String>,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub exam_category: Option<String>,
    pub exam_period_label: Option<String>,
    pub exam_date: Option<String>,
    pub college_name: Option<String>,
    pub building_name: Option<String>,
    pub instructor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::RoomId"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::modalities::Entity",
        from = "Column::ModalityId",
        to = "super::modalities::Column::ModalityId"
    )]
    Modality,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ProctorId",
        to = "super::users::Column::UserId"
    )]
    Proctor,
    #[sea_orm(
        belongs_to = "super::exam_periods::Entity",
        from = "Column::ExamPeriodId",
        to = "super::exam_periods::Column::ExamPeriodId"
    )]
    ExamPeriod,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::modalities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Modality.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proctor.def()
    }
}

impl Related<super::exam_periods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamPeriod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
