use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    pub course_name: String,
    pub term_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::terms::Entity",
        from = "Column::TermId",
        to = "super::terms::Column::TermId"
    )]
    Term,
    #[sea_orm(has_many = "super::course_users::Entity")]
    CourseUsers,
    #[sea_orm(has_many = "super::modalities::Entity")]
    Modalities,
}

impl Related<super::terms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Term.def()
    }
}

impl Related<super::course_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseUsers.def()
    }
}

impl Related<super::modalities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Modalities.def()
    }
}

// Many-to-many relationship with users through the join table
impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_users::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_users::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
