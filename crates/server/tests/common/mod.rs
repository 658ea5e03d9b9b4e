//! Test server backed by an in-memory SQLite database.

use axum_test::TestServer;
use database::entities::{
    availabilities, buildings, colleges, course_users, courses, departments, exam_details,
    exam_periods, inbox_messages, modalities, programs, replies, roles, rooms, section_courses,
    terms, user_role_history, user_roles, users,
};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use server::config::Config;
use server::mail::Mailer;
use server::routes;
use server::state::{AppState, SharedState};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

async fn setup_db() -> DatabaseConnection {
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

pub async fn setup() -> (TestServer, SharedState) {
    let db = setup_db().await;
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        frontend_url: "http://localhost:5173".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        smtp: None,
    };
    let state = AppState::new(db, config, Mailer::Disabled);
    let server = TestServer::new(routes::router(state.clone())).unwrap();
    (server, state)
}
