use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use super::SeaOrmStorage;
use super::submissions::map_insert_error;
use crate::entity::prelude::ClassActiveModel;
use crate::entity::{assignments, students, submissions, users};
use crate::errors::SchoolHubError;
use crate::models::submissions::{entities::SubmissionStatus, requests::GradeSubmissionRequest};
use crate::storage::SubmissionPolicy;

struct Fixture {
    storage: SeaOrmStorage,
    class_id: i64,
    assignment_id: i64,
    student_user_id: i64,
    student_id: i64,
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn setup_storage(policy: SubmissionPolicy) -> SeaOrmStorage {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    SeaOrmStorage::from_connection(db, policy)
}

async fn insert_user(storage: &SeaOrmStorage, username: &str, role: &str) -> i64 {
    users::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{username}@school.test")),
        role: Set(role.to_string()),
        status: Set("active".to_string()),
        display_name: Set(Some(format!("{username} display"))),
        created_at: Set(0),
        updated_at: Set(0),
        ..Default::default()
    }
    .insert(&storage.db)
    .await
    .unwrap()
    .id
}

async fn insert_student(storage: &SeaOrmStorage, username: &str, class_id: i64) -> (i64, i64) {
    let user_id = insert_user(storage, username, "student").await;
    let student = students::ActiveModel {
        user_id: Set(user_id),
        class_id: Set(Some(class_id)),
        student_number: Set(Some(format!("S-{user_id:04}"))),
        created_at: Set(0),
        ..Default::default()
    }
    .insert(&storage.db)
    .await
    .unwrap();
    (user_id, student.id)
}

async fn insert_assignment(
    storage: &SeaOrmStorage,
    class_id: i64,
    due_date: Option<NaiveDate>,
) -> i64 {
    assignments::ActiveModel {
        class_id: Set(class_id),
        title: Set("Essay".to_string()),
        description: Set(None),
        due_date: Set(due_date),
        created_at: Set(0),
        updated_at: Set(0),
        ..Default::default()
    }
    .insert(&storage.db)
    .await
    .unwrap()
    .id
}

async fn set_due_date(storage: &SeaOrmStorage, assignment_id: i64, due_date: Option<NaiveDate>) {
    let model = assignments::Entity::find_by_id(assignment_id)
        .one(&storage.db)
        .await
        .unwrap()
        .unwrap();
    let mut active: assignments::ActiveModel = model.into();
    active.due_date = Set(due_date);
    active.update(&storage.db).await.unwrap();
}

async fn setup_with_policy(policy: SubmissionPolicy, due_date: Option<NaiveDate>) -> Fixture {
    let storage = setup_storage(policy).await;
    let class_id = ClassActiveModel {
        class_name: Set("Class 7A".to_string()),
        created_at: Set(0),
        updated_at: Set(0),
        ..Default::default()
    }
    .insert(&storage.db)
    .await
    .unwrap()
    .id;
    let assignment_id = insert_assignment(&storage, class_id, due_date).await;
    let (student_user_id, student_id) = insert_student(&storage, "alice", class_id).await;

    Fixture {
        storage,
        class_id,
        assignment_id,
        student_user_id,
        student_id,
    }
}

async fn setup(due_date: Option<NaiveDate>) -> Fixture {
    setup_with_policy(SubmissionPolicy::default(), due_date).await
}

async fn count_rows(storage: &SeaOrmStorage, assignment_id: i64) -> u64 {
    submissions::Entity::find()
        .filter(submissions::Column::AssignmentId.eq(assignment_id))
        .count(&storage.db)
        .await
        .unwrap()
}

fn grade(score: Option<f64>, feedback: Option<&str>) -> GradeSubmissionRequest {
    GradeSubmissionRequest {
        score,
        feedback: feedback.map(str::to_string),
    }
}

#[tokio::test]
async fn test_submit_creates_pending_submission() {
    let f = setup(Some(date(2025, 1, 10))).await;
    let now = at(2025, 1, 9, 14);

    let submission = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "uploads/f1.pdf", now)
        .await
        .unwrap();

    assert_eq!(submission.assignment_id, f.assignment_id);
    assert_eq!(submission.student_id, f.student_id);
    assert_eq!(submission.file_url, "uploads/f1.pdf");
    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert!(!submission.late_flag);
    assert_eq!(submission.submitted_at, now);
    assert_eq!(submission.created_at, now);
    assert_eq!(submission.updated_at, now);
    assert_eq!(submission.score, None);
    assert_eq!(submission.teacher_feedback, None);
}

#[tokio::test]
async fn test_submit_without_due_date_is_never_late() {
    let f = setup(None).await;
    let submission = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2099, 1, 1, 0))
        .await
        .unwrap();
    assert!(!submission.late_flag);
}

#[tokio::test]
async fn test_duplicate_submit_conflicts_and_update_overwrites() {
    let f = setup(Some(date(2025, 1, 10))).await;

    f.storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2025, 1, 8, 9))
        .await
        .unwrap();

    let err = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f2.pdf", at(2025, 1, 8, 10))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::SubmissionAlreadyExists(_)));

    let updated = f
        .storage
        .update_submission_impl(f.student_user_id, f.assignment_id, "f2.pdf", at(2025, 1, 8, 11))
        .await
        .unwrap();
    assert_eq!(updated.file_url, "f2.pdf");
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 1);
}

// 测试库只有一个连接，两个事务会先后执行，后者在存在性检查处失败。
// 真正并发时由唯一索引兜底，见 test_unique_index_rejects_duplicate_pair
#[tokio::test]
async fn test_back_to_back_double_submit_inserts_once() {
    let f = setup(None).await;
    let now = at(2025, 3, 1, 8);

    let (a, b) = tokio::join!(
        f.storage
            .submit_assignment_impl(f.student_user_id, f.assignment_id, "a.pdf", now),
        f.storage
            .submit_assignment_impl(f.student_user_id, f.assignment_id, "b.pdf", now),
    );

    let results = [a, b];
    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(SchoolHubError::SubmissionAlreadyExists(_))))
        .count();
    assert_eq!(succeeded, 1);
    assert_eq!(conflicts, 1);
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 1);
}

#[tokio::test]
async fn test_unique_index_rejects_duplicate_pair() {
    let f = setup(None).await;

    let row = || submissions::ActiveModel {
        assignment_id: Set(f.assignment_id),
        student_id: Set(f.student_id),
        file_url: Set("raw.pdf".to_string()),
        submitted_at: Set(0),
        late_flag: Set(false),
        status: Set(SubmissionStatus::PENDING.to_string()),
        score: Set(None),
        teacher_feedback: Set(None),
        created_at: Set(0),
        updated_at: Set(0),
        ..Default::default()
    };

    row().insert(&f.storage.db).await.unwrap();
    let err = row().insert(&f.storage.db).await.unwrap_err();

    let mapped = map_insert_error(err, f.assignment_id, f.student_id);
    assert!(matches!(mapped, SchoolHubError::SubmissionAlreadyExists(_)));
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 1);
}

fn raw_submission(assignment_id: i64, student_id: i64) -> submissions::ActiveModel {
    submissions::ActiveModel {
        assignment_id: Set(assignment_id),
        student_id: Set(student_id),
        file_url: Set("slow.pdf".to_string()),
        submitted_at: Set(0),
        late_flag: Set(false),
        status: Set(SubmissionStatus::PENDING.to_string()),
        score: Set(None),
        teacher_feedback: Set(None),
        created_at: Set(0),
        updated_at: Set(0),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_transaction_timeout_leaves_no_row() {
    let policy = SubmissionPolicy {
        transaction_timeout: Duration::from_millis(20),
        ..SubmissionPolicy::default()
    };
    let f = setup_with_policy(policy, None).await;
    let (assignment_id, student_id) = (f.assignment_id, f.student_id);

    // 写入已在事务内完成，但回调超过时限才返回
    let err = f
        .storage
        .run_in_transaction(move |txn| {
            Box::pin(async move {
                raw_submission(assignment_id, student_id).insert(txn).await?;
                tokio::time::sleep(Duration::from_millis(300)).await;
                Ok::<(), SchoolHubError>(())
            })
        })
        .await
        .unwrap_err();

    assert!(matches!(err, SchoolHubError::TransactionTimeout(_)));
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 0);

    // 唯一的连接已归还连接池，后续事务可以正常提交
    let storage =
        SeaOrmStorage::from_connection(f.storage.db.clone(), SubmissionPolicy::default());
    let submission = storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2025, 1, 1, 0))
        .await
        .unwrap();
    assert_eq!(submission.student_id, f.student_id);
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 1);
}

#[tokio::test]
async fn test_failed_callback_rolls_back_writes() {
    let f = setup(None).await;
    let (assignment_id, student_id) = (f.assignment_id, f.student_id);

    let err = f
        .storage
        .run_in_transaction(move |txn| {
            Box::pin(async move {
                raw_submission(assignment_id, student_id).insert(txn).await?;
                Err::<(), _>(SchoolHubError::validation("abort"))
            })
        })
        .await
        .unwrap_err();

    assert!(matches!(err, SchoolHubError::Validation(_)));
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 0);
}

#[tokio::test]
async fn test_timeout_result_matches_committed_state() {
    let f = setup(None).await;

    for micros in [1, 100, 1_000, 3_000] {
        let policy = SubmissionPolicy {
            transaction_timeout: Duration::from_micros(micros),
            ..SubmissionPolicy::default()
        };
        let storage = SeaOrmStorage::from_connection(f.storage.db.clone(), policy);

        for _ in 0..10 {
            let now = at(2025, 1, 1, 0);
            let result = storage
                .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", now)
                .await;
            match result {
                Ok(_) => {
                    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 1);
                    submissions::Entity::delete_many()
                        .filter(submissions::Column::AssignmentId.eq(f.assignment_id))
                        .exec(&f.storage.db)
                        .await
                        .unwrap();
                }
                Err(SchoolHubError::TransactionTimeout(_)) => {
                    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 0);
                }
                Err(e) => panic!("unexpected error with {micros} us timeout: {e}"),
            }
        }
    }

    f.storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f2.pdf", at(2025, 1, 2, 0))
        .await
        .unwrap();
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 1);
}

#[tokio::test]
async fn test_submit_for_user_without_student_record() {
    let f = setup(None).await;
    let teacher_id = insert_user(&f.storage, "mr_smith", "teacher").await;

    let err = f
        .storage
        .submit_assignment_impl(teacher_id, f.assignment_id, "f1.pdf", at(2025, 1, 1, 0))
        .await
        .unwrap_err();

    assert!(matches!(err, SchoolHubError::StudentNotFound(_)));
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 0);
}

#[tokio::test]
async fn test_submit_to_missing_assignment() {
    let f = setup(None).await;

    let err = f
        .storage
        .submit_assignment_impl(f.student_user_id, 9999, "f1.pdf", at(2025, 1, 1, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::AssignmentNotFound(_)));

    let err = f
        .storage
        .update_submission_impl(f.student_user_id, 9999, "f1.pdf", at(2025, 1, 1, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::AssignmentNotFound(_)));
}

#[tokio::test]
async fn test_update_requires_existing_submission() {
    let f = setup(None).await;

    let err = f
        .storage
        .update_submission_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2025, 1, 1, 0))
        .await
        .unwrap_err();

    assert!(matches!(err, SchoolHubError::SubmissionNotFound(_)));
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 0);
}

#[tokio::test]
async fn test_invalid_file_url_is_rejected_before_writing() {
    let f = setup(None).await;

    for bad in ["", "   ", "uploads/a\nb.pdf"] {
        let err = f
            .storage
            .submit_assignment_impl(f.student_user_id, f.assignment_id, bad, at(2025, 1, 1, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolHubError::Validation(_)));
    }
    assert_eq!(count_rows(&f.storage, f.assignment_id).await, 0);
}

#[tokio::test]
async fn test_late_flag_is_not_recomputed_when_due_date_changes() {
    let f = setup(Some(date(2025, 1, 10))).await;

    let submission = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2025, 1, 9, 12))
        .await
        .unwrap();
    assert!(!submission.late_flag);

    // 截止日期提前到提交日之前，已有标记不变
    set_due_date(&f.storage, f.assignment_id, Some(date(2025, 1, 5))).await;
    let reloaded = f
        .storage
        .get_submission_by_id_impl(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!reloaded.late_flag);

    // 评分也不会触发重算
    let graded = f
        .storage
        .grade_submission_impl(submission.id, grade(Some(80.0), None), at(2025, 1, 12, 9))
        .await
        .unwrap();
    assert!(!graded.late_flag);

    // 只有重新提交才会按新的截止日期计算
    let resubmitted = f
        .storage
        .update_submission_impl(f.student_user_id, f.assignment_id, "f2.pdf", at(2025, 1, 9, 13))
        .await
        .unwrap();
    assert!(resubmitted.late_flag);
}

#[tokio::test]
async fn test_grade_only_changes_grade_fields() {
    let f = setup(Some(date(2025, 1, 10))).await;
    let submitted_at = at(2025, 1, 9, 10);
    let submission = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", submitted_at)
        .await
        .unwrap();

    let graded_at = at(2025, 1, 15, 16);
    let graded = f
        .storage
        .grade_submission_impl(submission.id, grade(Some(90.0), Some("Good job")), graded_at)
        .await
        .unwrap();

    assert_eq!(graded.id, submission.id);
    assert_eq!(graded.status, SubmissionStatus::Graded);
    assert_eq!(graded.score, Some(90.0));
    assert_eq!(graded.teacher_feedback.as_deref(), Some("Good job"));
    assert_eq!(graded.file_url, "f1.pdf");
    assert_eq!(graded.submitted_at, submitted_at);
    assert_eq!(graded.late_flag, submission.late_flag);
    assert_eq!(graded.created_at, submission.created_at);
    assert_eq!(graded.updated_at, graded_at);
}

#[tokio::test]
async fn test_grade_missing_submission() {
    let f = setup(None).await;
    let err = f
        .storage
        .grade_submission_impl(4242, grade(Some(50.0), None), at(2025, 1, 1, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::SubmissionNotFound(_)));
}

#[tokio::test]
async fn test_grade_rejects_non_finite_score() {
    let f = setup(None).await;
    let submission = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2025, 1, 1, 0))
        .await
        .unwrap();

    let err = f
        .storage
        .grade_submission_impl(submission.id, grade(Some(f64::NAN), None), at(2025, 1, 2, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::Validation(_)));

    let unchanged = f
        .storage
        .get_submission_by_id_impl(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.status, SubmissionStatus::Pending);
}

#[tokio::test]
async fn test_resubmit_after_grading_reopens_by_default() {
    let f = setup(None).await;
    let submission = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2025, 1, 1, 0))
        .await
        .unwrap();
    f.storage
        .grade_submission_impl(submission.id, grade(Some(60.0), Some("Redo")), at(2025, 1, 2, 0))
        .await
        .unwrap();

    let reopened = f
        .storage
        .update_submission_impl(f.student_user_id, f.assignment_id, "f2.pdf", at(2025, 1, 3, 0))
        .await
        .unwrap();

    assert_eq!(reopened.status, SubmissionStatus::Pending);
    assert_eq!(reopened.file_url, "f2.pdf");
    // 分数与评语保留，直到重新评分
    assert_eq!(reopened.score, Some(60.0));
    assert_eq!(reopened.teacher_feedback.as_deref(), Some("Redo"));
}

#[tokio::test]
async fn test_resubmit_after_grading_can_be_forbidden() {
    let policy = SubmissionPolicy {
        allow_resubmit_after_grading: false,
        ..SubmissionPolicy::default()
    };
    let f = setup_with_policy(policy, None).await;
    let submission = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2025, 1, 1, 0))
        .await
        .unwrap();

    // 未评分前仍可重新提交
    f.storage
        .update_submission_impl(f.student_user_id, f.assignment_id, "f2.pdf", at(2025, 1, 1, 1))
        .await
        .unwrap();

    f.storage
        .grade_submission_impl(submission.id, grade(Some(70.0), None), at(2025, 1, 2, 0))
        .await
        .unwrap();

    let err = f
        .storage
        .update_submission_impl(f.student_user_id, f.assignment_id, "f3.pdf", at(2025, 1, 3, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::SubmissionAlreadyGraded(_)));

    let unchanged = f
        .storage
        .get_submission_by_id_impl(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.file_url, "f2.pdf");
    assert_eq!(unchanged.status, SubmissionStatus::Graded);
}

#[tokio::test]
async fn test_list_orders_by_submitted_at_then_id() {
    let f = setup(None).await;
    let (bob_user, bob_student) = insert_student(&f.storage, "bob", f.class_id).await;
    let (carol_user, carol_student) = insert_student(&f.storage, "carol", f.class_id).await;

    // carol 最晚，alice 与 bob 同一秒提交
    f.storage
        .submit_assignment_impl(carol_user, f.assignment_id, "c.pdf", at(2025, 2, 3, 0))
        .await
        .unwrap();
    let alice = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "a.pdf", at(2025, 2, 1, 0))
        .await
        .unwrap();
    let bob = f
        .storage
        .submit_assignment_impl(bob_user, f.assignment_id, "b.pdf", at(2025, 2, 1, 0))
        .await
        .unwrap();

    let list = f
        .storage
        .list_submissions_by_assignment_impl(f.assignment_id)
        .await
        .unwrap();

    assert_eq!(list.assignment_id, f.assignment_id);
    let order: Vec<i64> = list.items.iter().map(|i| i.student.student_id).collect();
    assert!(alice.id < bob.id);
    assert_eq!(order, vec![f.student_id, bob_student, carol_student]);

    let first = &list.items[0];
    assert_eq!(first.student.user_id, f.student_user_id);
    assert_eq!(first.student.username, "alice");
    assert_eq!(first.student.display_name.as_deref(), Some("alice display"));
    assert_eq!(
        first.student.student_number,
        Some(format!("S-{:04}", f.student_user_id))
    );
}

#[tokio::test]
async fn test_list_for_assignment_without_submissions_is_empty() {
    let f = setup(None).await;
    let list = f
        .storage
        .list_submissions_by_assignment_impl(12345)
        .await
        .unwrap();
    assert!(list.items.is_empty());
}

#[tokio::test]
async fn test_get_student_submission() {
    let f = setup(None).await;

    let none = f
        .storage
        .get_student_submission_impl(f.student_user_id, f.assignment_id)
        .await
        .unwrap();
    assert!(none.is_none());

    let created = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2025, 1, 1, 0))
        .await
        .unwrap();
    let mine = f
        .storage
        .get_student_submission_impl(f.student_user_id, f.assignment_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(mine.id, created.id);

    let parent_id = insert_user(&f.storage, "parent_p", "parent").await;
    let err = f
        .storage
        .get_student_submission_impl(parent_id, f.assignment_id)
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::StudentNotFound(_)));
}

#[tokio::test]
async fn test_get_user_by_id() {
    let f = setup(None).await;
    let user = f
        .storage
        .get_user_by_id_impl(f.student_user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.role.to_string(), "student");
    assert!(f.storage.get_user_by_id_impl(777).await.unwrap().is_none());
}

#[tokio::test]
async fn test_end_to_end_submission_lifecycle() {
    let f = setup(Some(date(2025, 1, 10))).await;

    // 截止前一天提交
    let first = f
        .storage
        .submit_assignment_impl(f.student_user_id, f.assignment_id, "f1.pdf", at(2025, 1, 9, 15))
        .await
        .unwrap();
    assert!(!first.late_flag);
    assert_eq!(first.status, SubmissionStatus::Pending);

    // 截止后一天重新提交
    let second = f
        .storage
        .update_submission_impl(f.student_user_id, f.assignment_id, "f2.pdf", at(2025, 1, 11, 8))
        .await
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.file_url, "f2.pdf");
    assert!(second.late_flag);
    assert_eq!(second.status, SubmissionStatus::Pending);

    // 教师评分
    let graded = f
        .storage
        .grade_submission_impl(first.id, grade(Some(75.0), None), at(2025, 1, 12, 10))
        .await
        .unwrap();
    assert_eq!(graded.status, SubmissionStatus::Graded);
    assert_eq!(graded.score, Some(75.0));
    assert_eq!(graded.file_url, "f2.pdf");

    let list = f
        .storage
        .list_submissions_by_assignment_impl(f.assignment_id)
        .await
        .unwrap();
    assert_eq!(list.items.len(), 1);
    let item = &list.items[0];
    assert_eq!(item.id, first.id);
    assert_eq!(item.file_url, "f2.pdf");
    assert!(item.late_flag);
    assert_eq!(item.status, SubmissionStatus::Graded);
    assert_eq!(item.score, Some(75.0));
    assert_eq!(item.submitted_at, at(2025, 1, 11, 8).to_rfc3339());
}
