//! Shared fixtures for service tests, backed by an in-memory SQLite database.

use crate::entities::{
    availabilities, buildings, colleges, course_users, courses, departments, exam_details,
    exam_periods, inbox_messages, modalities, programs, replies, roles, rooms, section_courses,
    terms, user_role_history, user_roles, users,
};
use crate::services::exam_period::midnight_utc;
use chrono::NaiveDate;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};

pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = vec![
        schema.create_table_from_entity(colleges::Entity),
        schema.create_table_from_entity(departments::Entity),
        schema.create_table_from_entity(programs::Entity),
        schema.create_table_from_entity(terms::Entity),
        schema.create_table_from_entity(courses::Entity),
        schema.create_table_from_entity(course_users::Entity),
        schema.create_table_from_entity(section_courses::Entity),
        schema.create_table_from_entity(buildings::Entity),
        schema.create_table_from_entity(rooms::Entity),
        schema.create_table_from_entity(exam_periods::Entity),
        schema.create_table_from_entity(exam_details::Entity),
        schema.create_table_from_entity(modalities::Entity),
        schema.create_table_from_entity(availabilities::Entity),
        schema.create_table_from_entity(roles::Entity),
        schema.create_table_from_entity(user_roles::Entity),
        schema.create_table_from_entity(user_role_history::Entity),
        schema.create_table_from_entity(inbox_messages::Entity),
        schema.create_table_from_entity(replies::Entity),
        schema.create_table_from_entity(users::Entity),
    ];
    for statement in statements {
        db.execute(backend.build(&statement)).await.unwrap();
    }

    db
}

pub async fn seed_term(db: &DatabaseConnection, name: &str) -> terms::Model {
    let row = terms::ActiveModel {
        term_id: NotSet,
        term_name: Set(name.to_string()),
    };
    let result = terms::Entity::insert(row).exec(db).await.unwrap();
    terms::Entity::find_by_id(result.last_insert_id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
}

pub async fn seed_user(db: &DatabaseConnection, user_id: i32, email: &str) -> users::Model {
    let row = users::ActiveModel {
        user_id: Set(user_id),
        first_name: Set("Test".to_string()),
        last_name: Set("User".to_string()),
        middle_name: Set(None),
        email_address: Set(email.to_string()),
        contact_number: Set(None),
        avatar_url: Set(None),
        status: Set(Some("active".to_string())),
        created_at: Set(None),
        password_hash: Set(None),
    };
    users::Entity::insert(row).exec(db).await.unwrap();
    users::Entity::find_by_id(user_id).one(db).await.unwrap().unwrap()
}

pub async fn seed_college(db: &DatabaseConnection, id: &str, name: &str) -> colleges::Model {
    let row = colleges::ActiveModel {
        college_id: Set(id.to_string()),
        college_name: Set(name.to_string()),
    };
    colleges::Entity::insert(row).exec(db).await.unwrap();
    colleges::Entity::find_by_id(id).one(db).await.unwrap().unwrap()
}

pub async fn seed_building(db: &DatabaseConnection, id: &str, name: &str) -> buildings::Model {
    let row = buildings::ActiveModel {
        building_id: Set(id.to_string()),
        building_name: Set(name.to_string()),
    };
    buildings::Entity::insert(row).exec(db).await.unwrap();
    buildings::Entity::find_by_id(id).one(db).await.unwrap().unwrap()
}

pub async fn seed_room(db: &DatabaseConnection, id: &str, building_id: &str) -> rooms::Model {
    let row = rooms::ActiveModel {
        room_id: Set(id.to_string()),
        room_name: Set(format!("Room {id}")),
        room_type: Set("Lecture".to_string()),
        room_capacity: Set(40),
        building_id: Set(building_id.to_string()),
    };
    rooms::Entity::insert(row).exec(db).await.unwrap();
    rooms::Entity::find_by_id(id).one(db).await.unwrap().unwrap()
}

pub async fn seed_exam_period(
    db: &DatabaseConnection,
    start: &str,
    end: &str,
    academic_year: &str,
    category: &str,
    term_id: i32,
    college_id: &str,
) -> exam_periods::Model {
    let start_day = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    let end_day = NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap();
    let row = exam_periods::ActiveModel {
        exam_period_id: NotSet,
        start_date: Set(midnight_utc(start_day)),
        end_date: Set(midnight_utc(end_day)),
        academic_year: Set(academic_year.to_string()),
        exam_category: Set(category.to_string()),
        term_id: Set(term_id),
        department_id: Set(None),
        college_id: Set(Some(college_id.to_string())),
    };
    let result = exam_periods::Entity::insert(row).exec(db).await.unwrap();
    exam_periods::Entity::find_by_id(result.last_insert_id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
}
