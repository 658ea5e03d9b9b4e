use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "replies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reply_id: i64,
    pub message_id: Option<i32>,
    pub sender_id: Option<i32>,
    pub body: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Json", nullable)]
    pub attachments: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inbox_messages::Entity",
        from = "Column::MessageId",
        to = "super::inbox_messages::Column::MessageId"
    )]
    Message,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SenderId",
        to = "super::users::Column::UserId"
    )]
    Sender,
}

impl Related<super::inbox_messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Message.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
