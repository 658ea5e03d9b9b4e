use crate::entities::{colleges, departments, exam_periods, terms};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    prelude::DateTimeWithTimeZone,
};
use std::collections::HashMap;

/// An exam period with its related term/department/college rows resolved.
pub type ExamPeriodRow = (
    exam_periods::Model,
    Option<terms::Model>,
    Option<departments::Model>,
    Option<colleges::Model>,
);

/// One instruction of a bulk update: either attach a college to a calendar
/// date or detach one from it.
#[derive(Debug, Clone, Default)]
pub struct ReconcileInstruction {
    pub start_date: Option<String>,
    pub college_name: Option<String>,
    pub college_to_remove: Option<String>,
}

pub struct ExamPeriodService;

impl ExamPeriodService {
    /// Apply a batch of add/remove instructions against the exam-period
    /// calendar and return the number of rows affected.
    ///
    /// Adds copy their metadata (end date, academic year, category, term,
    /// department) from whichever period already exists on the target date;
    /// with no such template row the add is skipped. Each instruction is
    /// applied independently, so a failure mid-batch leaves earlier
    /// instructions in place.
    pub async fn bulk_reconcile(
        db: &DatabaseConnection,
        instructions: &[ReconcileInstruction],
    ) -> Result<u64, DbErr> {
        let mut updated: u64 = 0;

        for item in instructions {
            let Some(raw_date) = item.start_date.as_deref() else {
                continue;
            };
            let Ok(day) = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") else {
                continue;
            };
            let start = midnight_utc(day);

            if let Some(identifier) = item.college_to_remove.as_deref() {
                updated += Self::remove_college(db, start, identifier).await?;
            } else if let Some(identifier) = item.college_name.as_deref() {
                updated += Self::add_college(db, start, identifier).await?;
            }
        }

        Ok(updated)
    }

    async fn remove_college(
        db: &DatabaseConnection,
        start: DateTimeWithTimeZone,
        identifier: &str,
    ) -> Result<u64, DbErr> {
        let deleted = exam_periods::Entity::delete_many()
            .filter(exam_periods::Column::StartDate.eq(start))
            .filter(exam_periods::Column::CollegeId.eq(identifier))
            .exec(db)
            .await?
            .rows_affected;
        if deleted > 0 {
            return Ok(deleted);
        }

        // Fall back to matching the college by display name.
        let ids: Vec<String> = colleges::Entity::find()
            .filter(colleges::Column::CollegeName.eq(identifier))
            .all(db)
            .await?
            .into_iter()
            .map(|c| c.college_id)
            .collect();
        if ids.is_empty() {
            return Ok(0);
        }

        let deleted = exam_periods::Entity::delete_many()
            .filter(exam_periods::Column::StartDate.eq(start))
            .filter(exam_periods::Column::CollegeId.is_in(ids))
            .exec(db)
            .await?
            .rows_affected;
        Ok(deleted)
    }

    async fn add_college(
        db: &DatabaseConnection,
        start: DateTimeWithTimeZone,
        identifier: &str,
    ) -> Result<u64, DbErr> {
        let college = match Self::resolve_college(db, identifier).await? {
            Some(college) => college,
            None => {
                log::warn!("college not found: {identifier}");
                return Ok(0);
            }
        };

        let existing = exam_periods::Entity::find()
            .filter(exam_periods::Column::StartDate.eq(start))
            .filter(exam_periods::Column::CollegeId.eq(&college.college_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Ok(0);
        }

        // First period already on this date acts as the metadata template.
        let template = exam_periods::Entity::find()
            .filter(exam_periods::Column::StartDate.eq(start))
            .one(db)
            .await?;
        let Some(template) = template else {
            log::warn!("no template exam period found for date: {start}");
            return Ok(0);
        };

        let row = exam_periods::ActiveModel {
            exam_period_id: NotSet,
            start_date: Set(template.start_date),
            end_date: Set(template.end_date),
            academic_year: Set(template.academic_year),
            exam_category: Set(template.exam_category),
            term_id: Set(template.term_id),
            department_id: Set(template.department_id),
            college_id: Set(Some(college.college_id)),
        };
        exam_periods::Entity::insert(row).exec(db).await?;
        Ok(1)
    }

    /// Identifier match first, display-name match as fallback.
    async fn resolve_college(
        db: &DatabaseConnection,
        identifier: &str,
    ) -> Result<Option<colleges::Model>, DbErr> {
        if let Some(college) = colleges::Entity::find_by_id(identifier).one(db).await? {
            return Ok(Some(college));
        }
        colleges::Entity::find()
            .filter(colleges::Column::CollegeName.eq(identifier))
            .one(db)
            .await
    }

    /// List exam periods newest-first with related names resolved.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<ExamPeriodRow>, DbErr> {
        let periods = exam_periods::Entity::find()
            .order_by_desc(exam_periods::Column::ExamPeriodId)
            .all(db)
            .await?;
        Self::attach_related(db, periods).await
    }

    pub async fn get(
        db: &DatabaseConnection,
        exam_period_id: i32,
    ) -> Result<Option<ExamPeriodRow>, DbErr> {
        let period = match exam_periods::Entity::find_by_id(exam_period_id).one(db).await? {
            Some(period) => period,
            None => return Ok(None),
        };
        let mut hydrated = Self::attach_related(db, vec![period]).await?;
        Ok(hydrated.pop())
    }

    async fn attach_related(
        db: &DatabaseConnection,
        periods: Vec<exam_periods::Model>,
    ) -> Result<Vec<ExamPeriodRow>, DbErr> {
        if periods.is_empty() {
            return Ok(vec![]);
        }

        let term_ids: Vec<i32> = periods.iter().map(|p| p.term_id).collect();
        let department_ids: Vec<String> =
            periods.iter().filter_map(|p| p.department_id.clone()).collect();
        let college_ids: Vec<String> =
            periods.iter().filter_map(|p| p.college_id.clone()).collect();

        let terms_by_id: HashMap<i32, terms::Model> = terms::Entity::find()
            .filter(terms::Column::TermId.is_in(term_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|t| (t.term_id, t))
            .collect();
        let departments_by_id: HashMap<String, departments::Model> = departments::Entity::find()
            .filter(departments::Column::DepartmentId.is_in(department_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|d| (d.department_id.clone(), d))
            .collect();
        let colleges_by_id: HashMap<String, colleges::Model> = colleges::Entity::find()
            .filter(colleges::Column::CollegeId.is_in(college_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.college_id.clone(), c))
            .collect();

        Ok(periods
            .into_iter()
            .map(|period| {
                let term = terms_by_id.get(&period.term_id).cloned();
                let department = period
                    .department_id
                    .as_ref()
                    .and_then(|id| departments_by_id.get(id).cloned());
                let college = period
                    .college_id
                    .as_ref()
                    .and_then(|id| colleges_by_id.get(id).cloned());
                (period, term, department, college)
            })
            .collect())
    }
}

/// Bulk-update dates arrive as plain `YYYY-MM-DD` strings; periods are stored
/// with a timestamp, so anchor the date at midnight UTC.
pub fn midnight_utc(day: NaiveDate) -> DateTimeWithTimeZone {
    day.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_college, seed_exam_period, seed_term, setup_test_db};

    fn add(date: &str, college: &str) -> ReconcileInstruction {
        ReconcileInstruction {
            start_date: Some(date.to_string()),
            college_name: Some(college.to_string()),
            college_to_remove: None,
        }
    }

    fn remove(date: &str, college: &str) -> ReconcileInstruction {
        ReconcileInstruction {
            start_date: Some(date.to_string()),
            college_name: None,
            college_to_remove: Some(college.to_string()),
        }
    }

    #[tokio::test]
    async fn add_copies_metadata_from_template_row() {
        let db = setup_test_db().await;
        let term = seed_term(&db, "1st Semester").await;
        seed_college(&db, "COE", "College of Engineering").await;
        seed_college(&db, "CAS", "College of Arts and Sciences").await;
        seed_exam_period(&db, "2025-10-20", "2025-10-24", "2025-2026", "Midterm", term.term_id, "COE")
            .await;

        let updated = ExamPeriodService::bulk_reconcile(&db, &[add("2025-10-20", "CAS")])
            .await
            .unwrap();
        assert_eq!(updated, 1);

        let rows = exam_periods::Entity::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 2);
        let copied = rows
            .iter()
            .find(|p| p.college_id.as_deref() == Some("CAS"))
            .unwrap();
        assert_eq!(copied.academic_year, "2025-2026");
        assert_eq!(copied.exam_category, "Midterm");
        assert_eq!(copied.term_id, term.term_id);
    }

    #[tokio::test]
    async fn add_without_template_is_skipped() {
        let db = setup_test_db().await;
        seed_term(&db, "1st Semester").await;
        seed_college(&db, "CAS", "College of Arts and Sciences").await;

        let updated = ExamPeriodService::bulk_reconcile(&db, &[add("2025-12-01", "CAS")])
            .await
            .unwrap();
        assert_eq!(updated, 0);
        assert!(exam_periods::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_resolves_college_by_display_name() {
        let db = setup_test_db().await;
        let term = seed_term(&db, "1st Semester").await;
        seed_college(&db, "COE", "College of Engineering").await;
        seed_college(&db, "CAS", "College of Arts and Sciences").await;
        seed_exam_period(&db, "2025-10-20", "2025-10-24", "2025-2026", "Midterm", term.term_id, "COE")
            .await;

        let updated = ExamPeriodService::bulk_reconcile(
            &db,
            &[add("2025-10-20", "College of Arts and Sciences")],
        )
        .await
        .unwrap();
        assert_eq!(updated, 1);
    }

    #[tokio::test]
    async fn add_for_already_scheduled_college_is_noop() {
        let db = setup_test_db().await;
        let term = seed_term(&db, "1st Semester").await;
        seed_college(&db, "COE", "College of Engineering").await;
        seed_exam_period(&db, "2025-10-20", "2025-10-24", "2025-2026", "Midterm", term.term_id, "COE")
            .await;

        let updated = ExamPeriodService::bulk_reconcile(&db, &[add("2025-10-20", "COE")])
            .await
            .unwrap();
        assert_eq!(updated, 0);
        assert_eq!(exam_periods::Entity::find().all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_matches_id_then_falls_back_to_name() {
        let db = setup_test_db().await;
        let term = seed_term(&db, "1st Semester").await;
        seed_college(&db, "COE", "College of Engineering").await;
        seed_college(&db, "CAS", "College of Arts and Sciences").await;
        seed_exam_period(&db, "2025-10-20", "2025-10-24", "2025-2026", "Midterm", term.term_id, "COE")
            .await;
        seed_exam_period(&db, "2025-10-20", "2025-10-24", "2025-2026", "Midterm", term.term_id, "CAS")
            .await;

        let updated = ExamPeriodService::bulk_reconcile(
            &db,
            &[
                remove("2025-10-20", "COE"),
                remove("2025-10-20", "College of Arts and Sciences"),
            ],
        )
        .await
        .unwrap();
        assert_eq!(updated, 2);
        assert!(exam_periods::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_dates_and_unknown_colleges_are_skipped() {
        let db = setup_test_db().await;
        let term = seed_term(&db, "1st Semester").await;
        seed_college(&db, "COE", "College of Engineering").await;
        seed_exam_period(&db, "2025-10-20", "2025-10-24", "2025-2026", "Midterm", term.term_id, "COE")
            .await;

        let updated = ExamPeriodService::bulk_reconcile(
            &db,
            &[
                add("not-a-date", "COE"),
                add("2025-10-20", "NO-SUCH-COLLEGE"),
                ReconcileInstruction::default(),
                remove("2025-10-20", "NO-SUCH-COLLEGE"),
            ],
        )
        .await
        .unwrap();
        assert_eq!(updated, 0);
    }
}
