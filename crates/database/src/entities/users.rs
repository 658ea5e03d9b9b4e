use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// User ids are assigned by the identity provider, not the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    #[sea_orm(unique)]
    pub email_address: String,
    pub contact_number: Option<String>,
    pub avatar_url: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
    pub password_hash: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::availabilities::Entity")]
    Availabilities,
    #[sea_orm(has_many = "super::course_users::Entity")]
    CourseUsers,
    #[sea_orm(has_many = "super::user_roles::Entity")]
    UserRoles,
}

impl Related<super::availabilities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Availabilities.def()
    }
}

impl Related<super::course_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseUsers.def()
    }
}

impl Related<super::user_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

// Many-to-many relationship with courses through the join table
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_users::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_users::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Full name as shown in account listings, middle name abbreviated.
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().and_then(|m| m.chars().next()) {
            Some(initial) => format!("{} {}. {}", self.first_name, initial, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}
