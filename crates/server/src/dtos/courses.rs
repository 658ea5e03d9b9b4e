use crate::dtos::users::UserResponse;
use database::entities::{course_users, section_courses, users};
use database::services::course::CourseWithUsers;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Course representation: the row plus the ids, leader ids, and display
/// names of everyone assigned through the join table.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course_id: String,
    pub course_name: String,
    pub term_id: Option<i32>,
    pub term_name: Option<String>,
    pub user_ids: Vec<i32>,
    pub leaders: Vec<i32>,
    pub instructor_names: Vec<String>,
}

impl From<CourseWithUsers> for CourseResponse {
    fn from((course, term, members): CourseWithUsers) -> Self {
        let user_ids = members.iter().map(|(cu, _)| cu.user_id).collect();
        let leaders = members
            .iter()
            .filter(|(cu, _)| cu.is_leader.unwrap_or(false))
            .map(|(cu, _)| cu.user_id)
            .collect();
        let instructor_names = members
            .iter()
            .map(|(_, user)| format!("{} {}", user.first_name, user.last_name))
            .collect();
        Self {
            course_id: course.course_id,
            course_name: course.course_name,
            term_id: term.as_ref().map(|t| t.term_id),
            term_name: term.map(|t| t.term_name),
            user_ids,
            leaders,
            instructor_names,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseWritePayload {
    pub course_id: String,
    pub course_name: String,
    pub term_id: i32,
    #[serde(default)]
    pub user_ids: Vec<i32>,
    #[serde(default)]
    pub leaders: Vec<i32>,
}

/// Join-table row with both sides expanded.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseUserResponse {
    pub course_id: String,
    pub user_id: i32,
    pub course_name: Option<String>,
    pub is_leader: Option<bool>,
    pub user: Option<UserResponse>,
}

impl CourseUserResponse {
    pub fn from_models(row: course_users::Model, user: Option<users::Model>) -> Self {
        Self {
            course_id: row.course_id,
            user_id: row.user_id,
            course_name: row.course_name,
            is_leader: row.is_leader,
            user: user.map(UserResponse::from),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseUserWrite {
    pub course_id: String,
    pub user_id: i32,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub is_leader: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionCourseResponse {
    pub id: i32,
    pub course_id: String,
    pub program_id: String,
    pub term_id: i32,
    pub user_id: Option<i32>,
    pub section_name: String,
    pub number_of_students: i32,
    pub year_level: String,
}

impl From<section_courses::Model> for SectionCourseResponse {
    fn from(section: section_courses::Model) -> Self {
        Self {
            id: section.id,
            course_id: section.course_id,
            program_id: section.program_id,
            term_id: section.term_id,
            user_id: section.user_id,
            section_name: section.section_name,
            number_of_students: section.number_of_students,
            year_level: section.year_level,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SectionCourseCreate {
    pub course_id: String,
    pub program_id: String,
    pub term_id: i32,
    #[serde(default)]
    pub user_id: Option<i32>,
    pub section_name: String,
    pub number_of_students: i32,
    pub year_level: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SectionCourseUpdate {
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub program_id: Option<String>,
    #[serde(default)]
    pub term_id: Option<i32>,
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub number_of_students: Option<i32>,
    #[serde(default)]
    pub year_level: Option<String>,
}
