use crate::entities::{buildings, courses, exam_details, modalities, rooms, terms, users};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;

/// An exam-detail row with its referenced room (and that room's building),
/// modality, and proctor resolved for the response shape.
#[derive(Debug, Clone)]
pub struct ExamDetailRow {
    pub detail: exam_details::Model,
    pub room: Option<(rooms::Model, Option<buildings::Model>)>,
    pub modality: Option<modalities::Model>,
    pub proctor: Option<users::Model>,
}

/// A modality row with its referenced course, room, and submitting user.
#[derive(Debug, Clone)]
pub struct ModalityRow {
    pub modality: modalities::Model,
    pub course: Option<(courses::Model, Option<terms::Model>)>,
    pub room: Option<(rooms::Model, Option<buildings::Model>)>,
    pub user: Option<users::Model>,
}

#[derive(Debug, Clone, Default)]
pub struct ExamDetailFilter {
    pub room_id: Option<String>,
    pub exam_date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ModalityFilter {
    pub course_id: Option<String>,
    pub program_id: Option<String>,
    pub section_name: Option<String>,
    pub modality_type: Option<String>,
    pub room_type: Option<String>,
}

pub struct ExamDetailService;

impl ExamDetailService {
    pub async fn list(
        db: &DatabaseConnection,
        filter: &ExamDetailFilter,
    ) -> Result<Vec<ExamDetailRow>, DbErr> {
        let mut query = exam_details::Entity::find();
        if let Some(room_id) = &filter.room_id {
            query = query.filter(exam_details::Column::RoomId.eq(room_id));
        }
        if let Some(exam_date) = &filter.exam_date {
            query = query.filter(exam_details::Column::ExamDate.eq(exam_date));
        }
        let details = query.all(db).await?;
        Self::attach_related(db, details).await
    }

    pub async fn get(
        db: &DatabaseConnection,
        exam_details_id: i32,
    ) -> Result<Option<ExamDetailRow>, DbErr> {
        let detail = match exam_details::Entity::find_by_id(exam_details_id).one(db).await? {
            Some(detail) => detail,
            None => return Ok(None),
        };
        let mut hydrated = Self::attach_related(db, vec![detail]).await?;
        Ok(hydrated.pop())
    }

    async fn attach_related(
        db: &DatabaseConnection,
        details: Vec<exam_details::Model>,
    ) -> Result<Vec<ExamDetailRow>, DbErr> {
        if details.is_empty() {
            return Ok(vec![]);
        }

        let room_ids: Vec<String> = details.iter().map(|d| d.room_id.clone()).collect();
        let rooms_by_id = rooms_with_buildings(db, room_ids).await?;

        let modality_ids: Vec<i32> = details.iter().map(|d| d.modality_id).collect();
        let modalities_by_id: HashMap<i32, modalities::Model> = modalities::Entity::find()
            .filter(modalities::Column::ModalityId.is_in(modality_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.modality_id, m))
            .collect();

        let proctor_ids: Vec<i32> = details.iter().filter_map(|d| d.proctor_id).collect();
        let proctors_by_id: HashMap<i32, users::Model> = users::Entity::find()
            .filter(users::Column::UserId.is_in(proctor_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.user_id, u))
            .collect();

        Ok(details
            .into_iter()
            .map(|detail| {
                let room = rooms_by_id.get(&detail.room_id).cloned();
                let modality = modalities_by_id.get(&detail.modality_id).cloned();
                let proctor = detail
                    .proctor_id
                    .and_then(|id| proctors_by_id.get(&id).cloned());
                ExamDetailRow {
                    detail,
                    room,
                    modality,
                    proctor,
                }
            })
            .collect())
    }
}

pub struct ModalityService;

impl ModalityService {
    pub async fn list(
        db: &DatabaseConnection,
        filter: &ModalityFilter,
    ) -> Result<Vec<ModalityRow>, DbErr> {
        let mut query = modalities::Entity::find();
        if let Some(course_id) = &filter.course_id {
            query = query.filter(modalities::Column::CourseId.eq(course_id));
        }
        if let Some(program_id) = &filter.program_id {
            query = query.filter(modalities::Column::ProgramId.eq(program_id));
        }
        if let Some(section_name) = &filter.section_name {
            query = query.filter(modalities::Column::SectionName.eq(section_name));
        }
        if let Some(modality_type) = &filter.modality_type {
            query = query.filter(modalities::Column::ModalityType.eq(modality_type));
        }
        if let Some(room_type) = &filter.room_type {
            query = query.filter(modalities::Column::RoomType.eq(room_type));
        }
        let rows = query.all(db).await?;
        Self::attach_related(db, rows).await
    }

    pub async fn get(
        db: &DatabaseConnection,
        modality_id: i32,
    ) -> Result<Option<ModalityRow>, DbErr> {
        let modality = match modalities::Entity::find_by_id(modality_id).one(db).await? {
            Some(modality) => modality,
            None => return Ok(None),
        };
        let mut hydrated = Self::attach_related(db, vec![modality]).await?;
        Ok(hydrated.pop())
    }

    async fn attach_related(
        db: &DatabaseConnection,
        rows: Vec<modalities::Model>,
    ) -> Result<Vec<ModalityRow>, DbErr> {
        if rows.is_empty() {
            return Ok(vec![]);
        }

        let course_ids: Vec<String> = rows.iter().map(|m| m.course_id.clone()).collect();
        let courses_with_terms: Vec<(courses::Model, Option<terms::Model>)> =
            courses::Entity::find()
                .filter(courses::Column::CourseId.is_in(course_ids))
                .find_also_related(terms::Entity)
                .all(db)
                .await?;
        let courses_by_id: HashMap<String, (courses::Model, Option<terms::Model>)> =
            courses_with_terms
                .into_iter()
                .map(|pair| (pair.0.course_id.clone(), pair))
                .collect();

        let room_ids: Vec<String> = rows.iter().filter_map(|m| m.room_id.clone()).collect();
        let rooms_by_id = rooms_with_buildings(db, room_ids).await?;

        let user_ids: Vec<i32> = rows.iter().map(|m| m.user_id).collect();
        let users_by_id: HashMap<i32, users::Model> = users::Entity::find()
            .filter(users::Column::UserId.is_in(user_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.user_id, u))
            .collect();

        Ok(rows
            .into_iter()
            .map(|modality| {
                let course = courses_by_id.get(&modality.course_id).cloned();
                let room = modality
                    .room_id
                    .as_ref()
                    .and_then(|id| rooms_by_id.get(id).cloned());
                let user = users_by_id.get(&modality.user_id).cloned();
                ModalityRow {
                    modality,
                    course,
                    room,
                    user,
                }
            })
            .collect())
    }
}

/// Batch-fetch rooms with their buildings, keyed by room id.
pub async fn rooms_with_buildings(
    db: &DatabaseConnection,
    room_ids: Vec<String>,
) -> Result<HashMap<String, (rooms::Model, Option<buildings::Model>)>, DbErr> {
    if room_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let pairs: Vec<(rooms::Model, Option<buildings::Model>)> = rooms::Entity::find()
        .filter(rooms::Column::RoomId.is_in(room_ids))
        .find_also_related(buildings::Entity)
        .all(db)
        .await?;
    Ok(pairs
        .into_iter()
        .map(|pair| (pair.0.room_id.clone(), pair))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        seed_building, seed_college, seed_exam_period, seed_room, seed_term, seed_user,
        setup_test_db,
    };
    use sea_orm::ActiveValue::{NotSet, Set};
    use sea_orm::DatabaseConnection;

    async fn seed_schedule(db: &DatabaseConnection) -> (i32, i32) {
        let term = seed_term(db, "1st Semester").await;
        seed_user(db, 10, "ada@example.edu").await;
        seed_college(db, "COE", "College of Engineering").await;
        seed_building(db, "B1", "Engineering Hall").await;
        seed_room(db, "R101", "B1").await;
        seed_room(db, "R102", "B1").await;

        let course = courses::ActiveModel {
            course_id: Set("CS101".to_string()),
            course_name: Set("Intro to Computing".to_string()),
            term_id: Set(term.term_id),
        };
        courses::Entity::insert(course).exec(db).await.unwrap();

        let modality = modalities::ActiveModel {
            modality_id: NotSet,
            modality_type: Set("Written".to_string()),
            room_type: Set("Lecture".to_string()),
            remarks: Set(None),
            course_id: Set("CS101".to_string()),
            program_id: Set("BSCS".to_string()),
            room_id: Set(Some("R101".to_string())),
            user_id: Set(10),
            created_at: Set(None),
            section_name: Set(None),
            possible_rooms: Set(Some(serde_json::json!(["R101", "R102"]))),
        };
        let modality_id = modalities::Entity::insert(modality)
            .exec(db)
            .await
            .unwrap()
            .last_insert_id;

        let period = seed_exam_period(
            db,
            "2025-10-20",
            "2025-10-24",
            "2025-2026",
            "Midterm",
            term.term_id,
            "COE",
        )
        .await;

        (modality_id, period.exam_period_id)
    }

    #[tokio::test]
    async fn list_filters_by_room_exactly() {
        let db = setup_test_db().await;
        let (modality_id, exam_period_id) = seed_schedule(&db).await;

        for room_id in ["R101", "R101", "R102"] {
            let row = exam_details::ActiveModel {
                exam_details_id: NotSet,
                course_id: Set("CS101".into()),
                program_id: Set("BSCS".into()),
                room_id: Set(room_id.into()),
                modality_id: Set(modality_id),
                proctor_id: Set(None),
                exam_period_id: Set(exam_period_id),
                exam_duration_minutes: Set(Some(90)),
                exam_start_time: Set(None),
                exam_end_time: Set(None),
                proctor_time_in: Set(None),
                proctor_time_out: Set(None),
                section_name: Set(None),
                academic_year: Set(None),
                semester: Set(None),
                exam_category: Set(None),
                exam_period_label: Set(None),
                exam_date: Set(Some("2025-10-23".into())),
                college_name: Set(None),
                building_name: Set(None),
                instructor_id: Set(None),
            };
            exam_details::Entity::insert(row).exec(&db).await.unwrap();
        }

        let filter = ExamDetailFilter {
            room_id: Some("R101".into()),
            exam_date: None,
        };
        let rows = ExamDetailService::list(&db, &filter).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.detail.room_id == "R101"));

        // room hydration carries the building name
        let (_, building) = rows[0].room.as_ref().unwrap();
        assert_eq!(
            building.as_ref().map(|b| b.building_name.as_str()),
            Some("Engineering Hall")
        );

        // the embedded modality resolves too
        assert_eq!(
            rows[0].modality.as_ref().map(|m| m.modality_type.as_str()),
            Some("Written")
        );
    }

    #[tokio::test]
    async fn modality_list_filters_and_hydrates() {
        let db = setup_test_db().await;
        seed_schedule(&db).await;

        let filter = ModalityFilter {
            course_id: Some("CS101".into()),
            ..Default::default()
        };
        let rows = ModalityService::list(&db, &filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(
            row.course.as_ref().map(|(c, _)| c.course_name.as_str()),
            Some("Intro to Computing")
        );
        assert_eq!(
            row.user.as_ref().map(|u| u.email_address.as_str()),
            Some("ada@example.edu")
        );

        let filter = ModalityFilter {
            course_id: Some("NOPE".into()),
            ..Default::default()
        };
        assert!(ModalityService::list(&db, &filter).await.unwrap().is_empty());
    }
}
