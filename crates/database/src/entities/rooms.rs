use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_id: String,
    pub room_name: String,
    pub room_type: String,
    pub room_capacity: i32,
    pub building_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::buildings::Entity",
        from = "Column::BuildingId",
        to = "super::buildings::Column::BuildingId"
    )]
    Building,
    #[sea_orm(has_many = "super::exam_details::Entity")]
    ExamDetails,
}

impl Related<super::buildings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Building.def()
    }
}

impl Related<super::exam_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
