pub mod auth;
pub mod availability;
pub mod courses;
pub mod exam_periods;
pub mod exam_schedule;
pub mod health;
pub mod inbox;
pub mod org;
pub mod roles;
pub mod rooms;
pub mod terms;
pub mod users;

use crate::state::SharedState;
use axum::Router;
use axum::middleware;
use axum::routing::{get, post, put};

/// Build the application router. Every route permits anonymous access; a
/// presented bearer token is still decoded (and rejected when invalid).
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Authentication and password reset
        .route("/api/auth/login", post(auth::login))
        .route(
            "/api/auth/request-password-change",
            post(auth::request_password_change),
        )
        .route(
            "/api/auth/confirm-password-change",
            post(auth::confirm_password_change),
        )
        // Users and accounts
        .route("/api/users", get(users::list_users))
        .route(
            "/api/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .patch(users::update_user),
        )
        .route("/api/users/{user_id}/roles", get(users::get_user_roles))
        .route(
            "/api/accounts",
            get(users::list_accounts).post(users::create_account),
        )
        .route(
            "/api/accounts/{user_id}",
            get(users::get_account)
                .put(users::update_account)
                .delete(users::delete_account),
        )
        // Organization
        .route(
            "/api/colleges",
            get(org::list_colleges).post(org::create_college),
        )
        .route(
            "/api/colleges/{college_id}",
            get(org::get_college)
                .put(org::update_college)
                .delete(org::delete_college),
        )
        .route(
            "/api/departments",
            get(org::list_departments).post(org::create_department),
        )
        .route(
            "/api/departments/{department_id}",
            get(org::get_department)
                .patch(org::update_department)
                .delete(org::delete_department),
        )
        .route(
            "/api/programs",
            get(org::list_programs).post(org::create_program),
        )
        .route(
            "/api/programs/{program_id}",
            get(org::get_program)
                .patch(org::update_program)
                .delete(org::delete_program),
        )
        // Terms and courses
        .route("/api/terms", get(terms::list_terms).post(terms::create_term))
        .route(
            "/api/terms/{term_id}",
            get(terms::get_term)
                .put(terms::update_term)
                .delete(terms::delete_term),
        )
        .route(
            "/api/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/api/courses/{course_id}",
            get(courses::get_course)
                .put(courses::update_course)
                .patch(courses::update_course)
                .delete(courses::delete_course),
        )
        .route(
            "/api/course_users",
            get(courses::list_course_users).post(courses::create_course_user),
        )
        .route(
            "/api/course_users/{course_id}/{user_id}",
            get(courses::get_course_user)
                .put(courses::update_course_user)
                .delete(courses::delete_course_user),
        )
        .route(
            "/api/section_courses",
            get(courses::list_section_courses).post(courses::create_section_course),
        )
        .route(
            "/api/section_courses/{id}",
            get(courses::get_section_course)
                .put(courses::update_section_course)
                .delete(courses::delete_section_course),
        )
        // Buildings and rooms
        .route(
            "/api/buildings",
            get(rooms::list_buildings).post(rooms::create_building),
        )
        .route(
            "/api/buildings/{building_id}",
            get(rooms::get_building)
                .put(rooms::update_building)
                .delete(rooms::delete_building),
        )
        .route("/api/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/api/rooms/{room_id}",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
        // Exam periods and the bulk calendar update
        .route(
            "/api/exam_periods",
            get(exam_periods::list_exam_periods).post(exam_periods::create_exam_period),
        )
        .route(
            "/api/exam_periods/bulk_update",
            put(exam_periods::bulk_update_exam_periods),
        )
        .route(
            "/api/exam_periods/{exam_period_id}",
            get(exam_periods::get_exam_period)
                .put(exam_periods::update_exam_period)
                .delete(exam_periods::delete_exam_period),
        )
        // Exam details and modalities
        .route(
            "/api/exam_details",
            get(exam_schedule::list_exam_details).post(exam_schedule::create_exam_detail),
        )
        .route(
            "/api/exam_details/{id}",
            get(exam_schedule::get_exam_detail)
                .put(exam_schedule::update_exam_detail)
                .delete(exam_schedule::delete_exam_detail),
        )
        .route(
            "/api/modalities",
            get(exam_schedule::list_modalities).post(exam_schedule::create_modality),
        )
        .route(
            "/api/modalities/{id}",
            get(exam_schedule::get_modality)
                .put(exam_schedule::update_modality)
                .delete(exam_schedule::delete_modality),
        )
        // Availability
        .route(
            "/api/availabilities",
            get(availability::list_availabilities).post(availability::create_availability),
        )
        .route(
            "/api/availabilities/{availability_id}",
            get(availability::get_availability)
                .put(availability::update_availability)
                .delete(availability::delete_availability),
        )
        // Roles, assignments, and history
        .route("/api/roles", get(roles::list_roles).post(roles::create_role))
        .route(
            "/api/roles/{role_id}",
            get(roles::get_role)
                .put(roles::update_role)
                .delete(roles::delete_role),
        )
        .route(
            "/api/user_roles",
            get(roles::list_user_roles).post(roles::create_user_role),
        )
        .route(
            "/api/user_roles/{user_role_id}",
            get(roles::get_user_role)
                .put(roles::update_user_role)
                .delete(roles::delete_user_role),
        )
        .route(
            "/api/role_history",
            get(roles::list_role_history).post(roles::create_role_history),
        )
        // Inbox
        .route("/api/inbox", get(inbox::list_inbox))
        .route(
            "/api/inbox/{message_id}/replies",
            get(inbox::list_replies).post(inbox::create_reply),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::attach_claims,
        ))
        .with_state(state)
}
