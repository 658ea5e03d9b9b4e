use crate::routes::{
    auth, availability, courses, exam_periods, exam_schedule, health, inbox, org, roles, rooms,
    terms, users,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::login,
        auth::request_password_change,
        auth::confirm_password_change,
        users::list_users,
        users::get_user,
        users::update_user,
        users::get_user_roles,
        users::list_accounts,
        users::create_account,
        users::get_account,
        users::update_account,
        users::delete_account,
        org::list_colleges,
        org::create_college,
        org::get_college,
        org::update_college,
        org::delete_college,
        org::list_departments,
        org::create_department,
        org::get_department,
        org::update_department,
        org::delete_department,
        org::list_programs,
        org::create_program,
        org::get_program,
        org::update_program,
        org::delete_program,
        terms::list_terms,
        terms::create_term,
        terms::get_term,
        terms::update_term,
        terms::delete_term,
        courses::list_courses,
        courses::create_course,
        courses::get_course,
        courses::update_course,
        courses::delete_course,
        courses::list_course_users,
        courses::create_course_user,
        courses::get_course_user,
        courses::update_course_user,
        courses::delete_course_user,
        courses::list_section_courses,
        courses::create_section_course,
        courses::get_section_course,
        courses::update_section_course,
        courses::delete_section_course,
        rooms::list_buildings,
        rooms::create_building,
        rooms::get_building,
        rooms::update_building,
        rooms::delete_building,
        rooms::list_rooms,
        rooms::create_room,
        rooms::get_room,
        rooms::update_room,
        rooms::delete_room,
        exam_periods::list_exam_periods,
        exam_periods::create_exam_period,
        exam_periods::bulk_update_exam_periods,
        exam_periods::get_exam_period,
        exam_periods::update_exam_period,
        exam_periods::delete_exam_period,
        exam_schedule::list_exam_details,
        exam_schedule::create_exam_detail,
        exam_schedule::get_exam_detail,
        exam_schedule::update_exam_detail,
        exam_schedule::delete_exam_detail,
        exam_schedule::list_modalities,
        exam_schedule::create_modality,
        exam_schedule::get_modality,
        exam_schedule::update_modality,
        exam_schedule::delete_modality,
        availability::list_availabilities,
        availability::create_availability,
        availability::get_availability,
        availability::update_availability,
        availability::delete_availability,
        roles::list_roles,
        roles::create_role,
        roles::get_role,
        roles::update_role,
        roles::delete_role,
        roles::list_user_roles,
        roles::create_user_role,
        roles::get_user_role,
        roles::update_user_role,
        roles::delete_user_role,
        roles::list_role_history,
        roles::create_role_history,
        inbox::list_inbox,
        inbox::list_replies,
        inbox::create_reply
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and password reset"),
        (name = "Users", description = "User profiles and accounts"),
        (name = "Organization", description = "Colleges, departments, and programs"),
        (name = "Terms", description = "Academic terms"),
        (name = "Courses", description = "Courses, assignments, and sections"),
        (name = "Rooms", description = "Buildings and rooms"),
        (name = "Exam periods", description = "Exam calendar windows"),
        (name = "Exam schedule", description = "Exam details and modalities"),
        (name = "Availability", description = "Proctor availability"),
        (name = "Roles", description = "Roles, user roles, and history"),
        (name = "Inbox", description = "Messages and replies"),
    ),
    info(
        title = "Exam Administration API",
        version = "1.0.0",
        description = "Exam scheduling administration backend",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
