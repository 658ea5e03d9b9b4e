pub mod course;
pub mod exam_period;
pub mod exam_schedule;
pub mod user_role;
