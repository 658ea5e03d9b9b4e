pub mod availabilities;
pub mod buildings;
pub mod colleges;
pub mod course_users;
pub mod courses;
pub mod departments;
pub mod exam_details;
pub mod exam_periods;
pub mod inbox_messages;
pub mod modalities;
pub mod programs;
pub mod replies;
pub mod roles;
pub mod rooms;
pub mod section_courses;
pub mod terms;
pub mod user_role_history;
pub mod user_roles;
pub mod users;
