use chrono::{DateTime, FixedOffset};
use database::services::exam_period::ExamPeriodRow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ExamPeriodResponse {
    pub exam_period_id: i32,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
    pub academic_year: String,
    pub exam_category: String,
    pub term_id: Option<i32>,
    pub term_name: Option<String>,
    pub department_id: Option<String>,
    pub department_name: Option<String>,
    pub college_id: Option<String>,
    pub college_name: Option<String>,
}

impl From<ExamPeriodRow> for ExamPeriodResponse {
    fn from((period, term, department, college): ExamPeriodRow) -> Self {
        Self {
            exam_period_id: period.exam_period_id,
            start_date: period.start_date,
            end_date: period.end_date,
            academic_year: period.academic_year,
            exam_category: period.exam_category,
            term_id: term.as_ref().map(|t| t.term_id),
            term_name: term.map(|t| t.term_name),
            department_id: period.department_id,
            department_name: department.and_then(|d| d.department_name),
            college_id: period.college_id,
            college_name: college.map(|c| c.college_name),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExamPeriodCreate {
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
    pub academic_year: String,
    pub exam_category: String,
    pub term_id: i32,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub college_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExamPeriodUpdate {
    #[serde(default)]
    pub start_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub end_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub exam_category: Option<String>,
    #[serde(default)]
    pub term_id: Option<i32>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub college_id: Option<String>,
}

/// One instruction of the bulk update. `college_name` attaches a college to
/// the date (the field also accepts a college id), `college_to_remove`
/// detaches one.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkUpdateItem {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub college_name: Option<String>,
    #[serde(default)]
    pub college_to_remove: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkUpdateRequest {
    #[serde(default)]
    pub updates: Vec<BulkUpdateItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkUpdateResponse {
    pub updated_count: u64,
}
