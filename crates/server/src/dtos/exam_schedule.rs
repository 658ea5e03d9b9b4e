use crate::dtos::rooms::RoomResponse;
use crate::dtos::users::UserResponse;
use chrono::{DateTime, FixedOffset};
use database::entities::modalities;
use database::services::exam_schedule::{ExamDetailRow, ModalityRow};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flat modality fields, used standalone and embedded in exam details.
#[derive(Debug, Serialize, ToSchema)]
pub struct ModalityFields {
    pub modality_id: i32,
    pub modality_type: String,
    pub room_type: String,
    pub remarks: Option<String>,
    pub course_id: String,
    pub program_id: String,
    pub room_id: Option<String>,
    pub user_id: i32,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub section_name: Option<String>,
    pub possible_rooms: Vec<String>,
}

impl From<modalities::Model> for ModalityFields {
    fn from(modality: modalities::Model) -> Self {
        let possible_rooms = modality
            .possible_rooms
            .as_ref()
            .and_then(|value| value.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            modality_id: modality.modality_id,
            modality_type: modality.modality_type,
            room_type: modality.room_type,
            remarks: modality.remarks,
            course_id: modality.course_id,
            program_id: modality.program_id,
            room_id: modality.room_id,
            user_id: modality.user_id,
            created_at: modality.created_at,
            section_name: modality.section_name,
            possible_rooms,
        }
    }
}

/// Course summary embedded in a modality.
#[derive(Debug, Serialize, ToSchema)]
pub struct ModalityCourse {
    pub course_id: String,
    pub course_name: String,
    pub term_id: Option<i32>,
    pub term_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModalityResponse {
    #[serde(flatten)]
    pub modality: ModalityFields,
    pub course: Option<ModalityCourse>,
    pub room: Option<RoomResponse>,
    pub user: Option<UserResponse>,
}

impl From<ModalityRow> for ModalityResponse {
    fn from(row: ModalityRow) -> Self {
        let course = row.course.map(|(course, term)| ModalityCourse {
            course_id: course.course_id,
            course_name: course.course_name,
            term_id: term.as_ref().map(|t| t.term_id),
            term_name: term.map(|t| t.term_name),
        });
        let room = row
            .room
            .map(|(room, building)| RoomResponse::from_models(room, building));
        Self {
            modality: ModalityFields::from(row.modality),
            course,
            room,
            user: row.user.map(UserResponse::from),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModalityCreate {
    pub modality_type: String,
    pub room_type: String,
    #[serde(default)]
    pub remarks: Option<String>,
    pub course_id: String,
    pub program_id: String,
    #[serde(default)]
    pub room_id: Option<String>,
    pub user_id: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub possible_rooms: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModalityUpdate {
    #[serde(default)]
    pub modality_type: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub program_id: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub possible_rooms: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ModalityQuery {
    pub course_id: Option<String>,
    pub program_id: Option<String>,
    pub section_name: Option<String>,
    pub modality_type: Option<String>,
    pub room_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExamDetailResponse {
    pub exam_details_id: i32,
    pub course_id: String,
    pub program_id: String,
    pub room: Option<RoomResponse>,
    pub modality: Option<ModalityFields>,
    pub proctor: Option<UserResponse>,
    pub exam_period_id: i32,
    pub exam_duration_minutes: Option<i32>,
    pub exam_start_time: Option<DateTime<FixedOffset>>,
    pub exam_end_time: Option<DateTime<FixedOffset>>,
    pub proctor_time_in: Option<DateTime<FixedOffset>>,
    pub proctor_time_out: Option<DateTime<FixedOffset>>,
    pub section_name: Option<String>,
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub exam_category: Option<String>,
    pub exam_period_label: Option<String>,
    pub exam_date: Option<String>,
    pub college_name: Option<String>,
    pub building_name: Option<String>,
    pub instructor_id: Option<i32>,
}

impl From<ExamDetailRow> for ExamDetailResponse {
    fn from(row: ExamDetailRow) -> Self {
        let detail = row.detail;
        Self {
            exam_details_id: detail.exam_details_id,
            course_id: detail.course_id,
            program_id: detail.program_id,
            room: row
                .room
                .map(|(room, building)| RoomResponse::from_models(room, building)),
            modality: row.modality.map(ModalityFields::from),
            proctor: row.proctor.map(UserResponse::from),
            exam_period_id: detail.exam_period_id,
            exam_duration_minutes: detail.exam_duration_minutes,
            exam_start_time: detail.exam_start_time,
            exam_end_time: detail.exam_end_time,
            proctor_time_in: detail.proctor_time_in,
            proctor_time_out: detail.proctor_time_out,
            section_name: detail.section_name,
            academic_year: detail.academic_year,
            semester: detail.semester,
            exam_category: detail.exam_category,
            exam_period_label: detail.exam_period_label,
            exam_date: detail.exam_date,
            college_name: detail.college_name,
            building_name: detail.building_name,
            instructor_id: detail.instructor_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExamDetailCreate {
    pub course_id: String,
    pub program_id: String,
    pub room_id: String,
    pub modality_id: i32,
    #[serde(default)]
    pub proctor_id: Option<i32>,
    pub exam_period_id: i32,
    #[serde(default)]
    pub exam_duration_minutes: Option<i32>,
    #[serde(default)]
    pub exam_start_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub exam_end_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub proctor_time_in: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub proctor_time_out: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub exam_category: Option<String>,
    #[serde(default)]
    pub exam_period_label: Option<String>,
    #[serde(default)]
    pub exam_date: Option<String>,
    #[serde(default)]
    pub college_name: Option<String>,
    #[serde(default)]
    pub building_name: Option<String>,
    #[serde(default)]
    pub instructor_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExamDetailUpdate {
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub program_id: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub modality_id: Option<i32>,
    #[serde(default)]
    pub proctor_id: Option<i32>,
    #[serde(default)]
    pub exam_period_id: Option<i32>,
    #[serde(default)]
    pub exam_duration_minutes: Option<i32>,
    #[serde(default)]
    pub exam_start_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub exam_end_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub proctor_time_in: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub proctor_time_out: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub exam_category: Option<String>,
    #[serde(default)]
    pub exam_period_label: Option<String>,
    #[serde(default)]
    pub exam_date: Option<String>,
    #[serde(default)]
    pub college_name: Option<String>,
    #[serde(default)]
    pub building_name: Option<String>,
    #[serde(default)]
    pub instructor_id: Option<i32>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ExamDetailQuery {
    pub room_id: Option<String>,
    pub exam_date: Option<String>,
}
