use crate::entities::{course_users, courses, terms, users};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A course with its term and its join-table rows plus the users behind them.
pub type CourseWithUsers = (
    courses::Model,
    Option<terms::Model>,
    Vec<(course_users::Model, users::Model)>,
);

/// Payload for creating or replacing a course and its instructor assignments.
#[derive(Debug, Clone)]
pub struct CourseWrite {
    pub course_id: String,
    pub course_name: String,
    pub term_id: i32,
    pub user_ids: Vec<i32>,
    pub leaders: Vec<i32>,
}

#[derive(Debug, Error)]
pub enum CourseSaveError {
    #[error("Term not found")]
    TermNotFound(i32),
    #[error("One or more users not found")]
    UserNotFound(i32),
    #[error(transparent)]
    Db(#[from] DbErr),
}

pub struct CourseService;

impl CourseService {
    /// Create or replace a course and re-sync its user assignments.
    ///
    /// Creating with an id that already exists updates the row in place.
    /// The course row and its join rows commit or roll back together.
    pub async fn save(
        db: &DatabaseConnection,
        input: CourseWrite,
    ) -> Result<courses::Model, CourseSaveError> {
        let txn = db.begin().await?;

        if terms::Entity::find_by_id(input.term_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(CourseSaveError::TermNotFound(input.term_id));
        }

        let unique_users: HashSet<i32> = input.user_ids.iter().copied().collect();
        let found: HashSet<i32> = users::Entity::find()
            .filter(users::Column::UserId.is_in(unique_users.iter().copied()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|u| u.user_id)
            .collect();
        if let Some(missing) = unique_users.difference(&found).next() {
            return Err(CourseSaveError::UserNotFound(*missing));
        }

        let course = match courses::Entity::find_by_id(&input.course_id).one(&txn).await? {
            Some(existing) => {
                let mut active: courses::ActiveModel = existing.into();
                active.course_name = Set(input.course_name.clone());
                active.term_id = Set(input.term_id);
                courses::Entity::update(active).exec(&txn).await?
            }
            None => {
                let active = courses::ActiveModel {
                    course_id: Set(input.course_id.clone()),
                    course_name: Set(input.course_name.clone()),
                    term_id: Set(input.term_id),
                };
                courses::Entity::insert(active).exec(&txn).await?;
                courses::Entity::find_by_id(&input.course_id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| DbErr::RecordNotFound("course".into()))?
            }
        };

        // Sync the join table: drop every assignment, then re-insert the
        // current set with leader flags.
        course_users::Entity::delete_many()
            .filter(course_users::Column::CourseId.eq(&input.course_id))
            .exec(&txn)
            .await?;

        let rows: Vec<course_users::ActiveModel> = unique_users
            .iter()
            .map(|&uid| course_users::ActiveModel {
                course_id: Set(input.course_id.clone()),
                user_id: Set(uid),
                course_name: Set(Some(input.course_name.clone())),
                is_leader: Set(Some(input.leaders.contains(&uid))),
            })
            .collect();
        if !rows.is_empty() {
            course_users::Entity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(course)
    }

    /// Get a single course with its term and assigned users.
    pub async fn get(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<Option<CourseWithUsers>, DbErr> {
        let pair = match courses::Entity::find_by_id(course_id)
            .find_also_related(terms::Entity)
            .one(db)
            .await?
        {
            Some(pair) => pair,
            None => return Ok(None),
        };
        let mut hydrated = Self::attach_users(db, vec![pair]).await?;
        Ok(hydrated.pop())
    }

    /// List all courses with their terms and assigned users.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<CourseWithUsers>, DbErr> {
        let pairs = courses::Entity::find()
            .find_also_related(terms::Entity)
            .all(db)
            .await?;
        Self::attach_users(db, pairs).await
    }

    /// Delete a course and its join-table rows. Returns false when the course
    /// does not exist.
    pub async fn delete(db: &DatabaseConnection, course_id: &str) -> Result<bool, DbErr> {
        if courses::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Ok(false);
        }

        let txn = db.begin().await?;
        course_users::Entity::delete_many()
            .filter(course_users::Column::CourseId.eq(course_id))
            .exec(&txn)
            .await?;
        courses::Entity::delete_by_id(course_id).exec(&txn).await?;
        txn.commit().await?;
        Ok(true)
    }

    /// Batch-fetch join rows and users for a set of courses.
    async fn attach_users(
        db: &DatabaseConnection,
        courses: Vec<(courses::Model, Option<terms::Model>)>,
    ) -> Result<Vec<CourseWithUsers>, DbErr> {
        if courses.is_empty() {
            return Ok(vec![]);
        }

        let course_ids: Vec<String> = courses.iter().map(|(c, _)| c.course_id.clone()).collect();
        let join_rows = course_users::Entity::find()
            .filter(course_users::Column::CourseId.is_in(course_ids))
            .all(db)
            .await?;

        let user_ids: Vec<i32> = join_rows.iter().map(|cu| cu.user_id).collect();
        let users_by_id: HashMap<i32, users::Model> = users::Entity::find()
            .filter(users::Column::UserId.is_in(user_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.user_id, u))
            .collect();

        let mut rows_by_course: HashMap<String, Vec<(course_users::Model, users::Model)>> =
            HashMap::new();
        for join_row in join_rows {
            if let Some(user) = users_by_id.get(&join_row.user_id) {
                rows_by_course
                    .entry(join_row.course_id.clone())
                    .or_default()
                    .push((join_row, user.clone()));
            }
        }

        Ok(courses
            .into_iter()
            .map(|(course, term)| {
                let members = rows_by_course.remove(&course.course_id).unwrap_or_default();
                (course, term, members)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_term, seed_user, setup_test_db};

    fn write(course_id: &str, term_id: i32, user_ids: Vec<i32>, leaders: Vec<i32>) -> CourseWrite {
        CourseWrite {
            course_id: course_id.to_string(),
            course_name: "Data Structures".to_string(),
            term_id,
            user_ids,
            leaders,
        }
    }

    #[tokio::test]
    async fn save_creates_course_and_join_rows() {
        let db = setup_test_db().await;
        let term = seed_term(&db, "1st Semester").await;
        seed_user(&db, 10, "ada@example.edu").await;
        seed_user(&db, 11, "grace@example.edu").await;

        let course =
            CourseService::save(&db, write("CS101", term.term_id, vec![10, 11], vec![10]))
                .await
                .unwrap();
        assert_eq!(course.course_id, "CS101");

        let (_, term_row, members) = CourseService::get(&db, "CS101").await.unwrap().unwrap();
        assert_eq!(
            term_row.map(|t| t.term_name),
            Some("1st Semester".to_string())
        );
        assert_eq!(members.len(), 2);
        let leader = members.iter().find(|(cu, _)| cu.user_id == 10).unwrap();
        assert_eq!(leader.0.is_leader, Some(true));
        let non_leader = members.iter().find(|(cu, _)| cu.user_id == 11).unwrap();
        assert_eq!(non_leader.0.is_leader, Some(false));
    }

    #[tokio::test]
    async fn save_on_existing_id_updates_in_place() {
        let db = setup_test_db().await;
        let term = seed_term(&db, "1st Semester").await;
        seed_user(&db, 10, "ada@example.edu").await;

        CourseService::save(&db, write("CS101", term.term_id, vec![10], vec![]))
            .await
            .unwrap();

        let mut second = write("CS101", term.term_id, vec![], vec![]);
        second.course_name = "Algorithms".to_string();
        CourseService::save(&db, second).await.unwrap();

        let (course, _, members) = CourseService::get(&db, "CS101").await.unwrap().unwrap();
        assert_eq!(course.course_name, "Algorithms");
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn save_rejects_unknown_term_and_user() {
        let db = setup_test_db().await;
        let term = seed_term(&db, "1st Semester").await;

        let err = CourseService::save(&db, write("CS101", 999, vec![], vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseSaveError::TermNotFound(999)));

        let err = CourseService::save(&db, write("CS101", term.term_id, vec![42], vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, CourseSaveError::UserNotFound(42)));

        // the failed saves must not leave a course behind
        assert!(CourseService::get(&db, "CS101").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_course_and_join_rows() {
        let db = setup_test_db().await;
        let term = seed_term(&db, "1st Semester").await;
        seed_user(&db, 10, "ada@example.edu").await;

        CourseService::save(&db, write("CS101", term.term_id, vec![10], vec![10]))
            .await
            .unwrap();
        assert!(CourseService::delete(&db, "CS101").await.unwrap());

        assert!(CourseService::get(&db, "CS101").await.unwrap().is_none());
        let leftovers = course_users::Entity::find().all(&db).await.unwrap();
        assert!(leftovers.is_empty());

        // deleting again is a not-found
        assert!(!CourseService::delete(&db, "CS101").await.unwrap());
    }
}
