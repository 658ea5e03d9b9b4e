use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exam_periods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub exam_period_id: i32,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub academic_year: String,
    pub exam_category: String,
    pub term_id: i32,
    pub department_id: Option<String>,
    pub college_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::terms::Entity",
        from = "Column::TermId",
        to = "super::terms::Column::TermId"
    )]
    Term,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::DepartmentId"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::colleges::Entity",
        from = "Column::CollegeId",
        to = "super::colleges::Column::CollegeId"
    )]
    College,
    #[sea_orm(has_many = "super::exam_details::Entity")]
    ExamDetails,
}

impl Related<super::terms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Term.def()
    }
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::colleges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::College.def()
    }
}

impl Related<super::exam_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
