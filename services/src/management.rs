use crate::error::ServiceError;
use chrono::Utc;
use db::models::{student, teacher};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use validator::Validate;

/// Transfer shape for teacher writes.
///
/// Matches the Teacher record field-for-field. A body `id` is accepted but
/// carries no authority: on update the path id decides which record is
/// targeted, and on create the id is assigned by the database.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeacherInput {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub subject: String,
}

/// Transfer shape for student writes. Same conventions as [`TeacherInput`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudentInput {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub grade: i32,
}

/// The collaborator all management routes delegate to.
///
/// Stateless: every method takes the connection explicitly, so the HTTP
/// layer holds nothing between requests.
pub struct ManagementService;

impl ManagementService {
    // --- Teachers ---

    /// Returns all teachers ordered by id ascending.
    pub async fn get_all_teachers(
        db: &DatabaseConnection,
    ) -> Result<Vec<teacher::Model>, ServiceError> {
        Ok(teacher::Entity::find()
            .order_by_asc(teacher::Column::Id)
            .all(db)
            .await?)
    }

    /// Creates a teacher. Usernames are unique across teachers.
    pub async fn add_teacher(
        db: &DatabaseConnection,
        input: TeacherInput,
    ) -> Result<teacher::Model, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let existing = teacher::Entity::find()
            .filter(teacher::Column::Username.eq(input.username.clone()))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict("Teacher already exists".into()));
        }

        let active = teacher::ActiveModel {
            username: Set(input.username),
            email: Set(input.email),
            subject: Set(input.subject),
            ..Default::default()
        };

        active.insert(db).await.map_err(|e| {
            // A racing insert can still trip the UNIQUE index after the check above.
            if is_unique_violation(&e) {
                ServiceError::Conflict("Teacher already exists".into())
            } else {
                ServiceError::Database(e)
            }
        })
    }

    /// Updates the teacher identified by `id`. A body id is ignored.
    pub async fn update_teacher(
        db: &DatabaseConnection,
        id: i64,
        input: TeacherInput,
    ) -> Result<teacher::Model, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let current = teacher::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Teacher with ID {} not found", id))
            })?;

        if input.username != current.username {
            let taken = teacher::Entity::find()
                .filter(teacher::Column::Username.eq(input.username.clone()))
                .filter(teacher::Column::Id.ne(id))
                .one(db)
                .await?;
            if taken.is_some() {
                return Err(ServiceError::Conflict("Teacher already exists".into()));
            }
        }

        let mut active: teacher::ActiveModel = current.into();
        active.username = Set(input.username);
        active.email = Set(input.email);
        active.subject = Set(input.subject);
        active.updated_at = Set(Utc::now());

        Ok(active.update(db).await?)
    }

    /// Deletes the teacher identified by `id`.
    ///
    /// Deleting an unknown id is a `NotFound` failure, so a second delete of
    /// the same record surfaces an error rather than a silent success.
    pub async fn delete_teacher(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
        let current = teacher::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Teacher with ID {} not found", id))
            })?;

        teacher::Entity::delete_by_id(current.id).exec(db).await?;
        Ok(())
    }

    // --- Students ---

    /// Returns all students ordered by id ascending.
    pub async fn get_all_students(
        db: &DatabaseConnection,
    ) -> Result<Vec<student::Model>, ServiceError> {
        Ok(student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(db)
            .await?)
    }

    /// Creates a student. Names are not unique.
    pub async fn add_student(
        db: &DatabaseConnection,
        input: StudentInput,
    ) -> Result<student::Model, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let active = student::ActiveModel {
            name: Set(input.name),
            email: Set(input.email),
            grade: Set(input.grade),
            ..Default::default()
        };

        Ok(active.insert(db).await?)
    }

    /// Updates the student identified by `id`. A body id is ignored.
    pub async fn update_student(
        db: &DatabaseConnection,
        id: i64,
        input: StudentInput,
    ) -> Result<student::Model, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let current = student::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Student with ID {} not found", id))
            })?;

        let mut active: student::ActiveModel = current.into();
        active.name = Set(input.name);
        active.email = Set(input.email);
        active.grade = Set(input.grade);
        active.updated_at = Set(Utc::now());

        Ok(active.update(db).await?)
    }

    /// Deletes the student identified by `id`.
    pub async fn delete_student(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
        let current = student::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Student with ID {} not found", id))
            })?;

        student::Entity::delete_by_id(current.id).exec(db).await?;
        Ok(())
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::test_utils::setup_test_db;

    fn teacher_input(username: &str) -> TeacherInput {
        TeacherInput {
            id: None,
            username: username.to_string(),
            email: format!("{username}@school.test"),
            subject: "Mathematics".to_string(),
        }
    }

    fn student_input(name: &str) -> StudentInput {
        StudentInput {
            id: None,
            name: name.to_string(),
            email: format!("{name}@school.test"),
            grade: 7,
        }
    }

    #[tokio::test]
    async fn create_then_list_includes_teacher_exactly_once() {
        let db = setup_test_db().await;

        let created = ManagementService::add_teacher(&db, teacher_input("ada"))
            .await
            .unwrap();

        let all = ManagementService::get_all_teachers(&db).await.unwrap();
        let matches: Vec<_> = all.iter().filter(|t| t.username == "ada").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, created.id);
    }

    #[tokio::test]
    async fn teachers_are_listed_in_id_order() {
        let db = setup_test_db().await;

        ManagementService::add_teacher(&db, teacher_input("zoe"))
            .await
            .unwrap();
        ManagementService::add_teacher(&db, teacher_input("ada"))
            .await
            .unwrap();
        ManagementService::add_teacher(&db, teacher_input("mei"))
            .await
            .unwrap();

        let all = ManagementService::get_all_teachers(&db).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn duplicate_teacher_username_is_a_conflict() {
        let db = setup_test_db().await;

        ManagementService::add_teacher(&db, teacher_input("ada"))
            .await
            .unwrap();

        let err = ManagementService::add_teacher(&db, teacher_input("ada"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(err.to_string(), "Teacher already exists");
    }

    #[tokio::test]
    async fn empty_teacher_username_is_rejected() {
        let db = setup_test_db().await;

        let err = ManagementService::add_teacher(&db, teacher_input(""))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(ManagementService::get_all_teachers(&db)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn update_teacher_changes_fields_and_keeps_id() {
        let db = setup_test_db().await;

        let created = ManagementService::add_teacher(&db, teacher_input("ada"))
            .await
            .unwrap();

        let mut input = teacher_input("ada.lovelace");
        input.subject = "Computing".to_string();

        let updated = ManagementService::update_teacher(&db, created.id, input)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.username, "ada.lovelace");
        assert_eq!(updated.subject, "Computing");
    }

    #[tokio::test]
    async fn update_teacher_ignores_body_id() {
        let db = setup_test_db().await;

        let created = ManagementService::add_teacher(&db, teacher_input("ada"))
            .await
            .unwrap();

        let mut input = teacher_input("grace");
        input.id = Some(created.id + 100);

        let updated = ManagementService::update_teacher(&db, created.id, input)
            .await
            .unwrap();

        // The path id wins; the record keeps its identity.
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.username, "grace");
    }

    #[tokio::test]
    async fn update_unknown_teacher_is_not_found() {
        let db = setup_test_db().await;

        let err = ManagementService::update_teacher(&db, 9999, teacher_input("ada"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_teacher_to_taken_username_is_a_conflict() {
        let db = setup_test_db().await;

        ManagementService::add_teacher(&db, teacher_input("ada"))
            .await
            .unwrap();
        let other = ManagementService::add_teacher(&db, teacher_input("grace"))
            .await
            .unwrap();

        let err = ManagementService::update_teacher(&db, other.id, teacher_input("ada"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn second_delete_of_same_teacher_is_not_found() {
        let db = setup_test_db().await;

        let created = ManagementService::add_teacher(&db, teacher_input("ada"))
            .await
            .unwrap();

        ManagementService::delete_teacher(&db, created.id)
            .await
            .unwrap();

        let err = ManagementService::delete_teacher(&db, created.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_then_list_includes_student_exactly_once() {
        let db = setup_test_db().await;

        let created = ManagementService::add_student(&db, student_input("sam"))
            .await
            .unwrap();

        let all = ManagementService::get_all_students(&db).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].name, "sam");
    }

    #[tokio::test]
    async fn duplicate_student_names_are_allowed() {
        let db = setup_test_db().await;

        ManagementService::add_student(&db, student_input("sam"))
            .await
            .unwrap();
        ManagementService::add_student(&db, student_input("sam"))
            .await
            .unwrap();

        let all = ManagementService::get_all_students(&db).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn empty_student_name_is_rejected() {
        let db = setup_test_db().await;

        let err = ManagementService::add_student(&db, student_input(""))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_and_delete_unknown_student_are_not_found() {
        let db = setup_test_db().await;

        let err = ManagementService::update_student(&db, 42, student_input("sam"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = ManagementService::delete_student(&db, 42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
