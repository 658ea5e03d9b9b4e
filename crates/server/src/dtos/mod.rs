pub mod auth;
pub mod availability;
pub mod courses;
pub mod exam_periods;
pub mod exam_schedule;
pub mod inbox;
pub mod org;
pub mod roles;
pub mod rooms;
pub mod terms;
pub mod users;
