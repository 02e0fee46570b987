//! 提交存储操作
//!
//! 提交与重新提交在同一个事务里完成学生解析、作业读取、存在性检查和写入，
//! 任一步失败整个事务回滚。评分是单条 UPDATE，不需要显式事务。

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait, sea_query::Expr,
};
use tracing::{error, info, warn};

use super::SeaOrmStorage;
use super::roster::{find_assignment, find_student_by_user_id};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions, Model};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, SchoolHubError};
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::GradeSubmissionRequest,
    responses::{SubmissionListItem, SubmissionListResponse, SubmissionStudent},
};
use crate::utils::validate::validate_file_url;

type TxnFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>;

/// 查询某学生在某作业下的提交
async fn find_submission_by_pair<C: ConnectionTrait>(
    conn: &C,
    assignment_id: i64,
    student_id: i64,
) -> Result<Option<Model>> {
    Submissions::find()
        .filter(Column::AssignmentId.eq(assignment_id))
        .filter(Column::StudentId.eq(student_id))
        .one(conn)
        .await
        .map_err(|e| SchoolHubError::database_operation(format!("查询提交失败: {e}")))
}

/// 插入失败时区分唯一约束冲突（并发重复提交）与其他数据库错误
pub(super) fn map_insert_error(err: DbErr, assignment_id: i64, student_id: i64) -> SchoolHubError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            SchoolHubError::submission_already_exists(format!(
                "学生 {student_id} 已提交过作业 {assignment_id}，请使用重新提交"
            ))
        }
        _ => SchoolHubError::database_operation(format!("创建提交失败: {err}")),
    }
}

// 回滚失败时连接会在事务 drop 时由 SeaORM 再次回滚，这里只记录
async fn rollback(txn: DatabaseTransaction) {
    if let Err(e) = txn.rollback().await {
        error!("Failed to roll back transaction: {}", e);
    }
}

impl SeaOrmStorage {
    /// 在事务中执行回调，并施加事务超时
    ///
    /// 超时只约束回调内的读写。回调出错或超时都会显式回滚，
    /// 只有回调在时限内返回 Ok 才会提交，提交本身不受超时约束，
    /// 因此返回 TransactionTimeout 时数据一定没有落库。
    pub(super) async fn run_in_transaction<F, T>(&self, callback: F) -> Result<T>
    where
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, T> + Send,
    {
        let timeout = self.policy.transaction_timeout;
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolHubError::transaction(format!("开启事务失败: {e}")))?;

        let outcome = tokio::time::timeout(timeout, callback(&txn)).await;

        let value = match outcome {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                rollback(txn).await;
                return Err(e);
            }
            Err(_) => {
                warn!("Transaction exceeded {} ms, rolling back", timeout.as_millis());
                rollback(txn).await;
                return Err(SchoolHubError::transaction_timeout(format!(
                    "事务未在 {} ms 内完成，已回滚",
                    timeout.as_millis()
                )));
            }
        };

        txn.commit()
            .await
            .map_err(|e| SchoolHubError::transaction(format!("提交事务失败: {e}")))?;

        Ok(value)
    }

    fn check_file_url(&self, file_url: &str) -> Result<String> {
        validate_file_url(file_url, self.policy.max_file_url_length)
            .map_err(SchoolHubError::validation)?;
        Ok(file_url.trim().to_string())
    }

    /// 首次提交作业
    pub async fn submit_assignment_impl(
        &self,
        student_user_id: i64,
        assignment_id: i64,
        file_url: &str,
        now: DateTime<Utc>,
    ) -> Result<Submission> {
        let file_url = self.check_file_url(file_url)?;

        let result = self
            .run_in_transaction(move |txn| {
                Box::pin(async move {
                    let student = find_student_by_user_id(txn, student_user_id).await?;
                    let assignment = find_assignment(txn, assignment_id).await?;

                    if find_submission_by_pair(txn, assignment_id, student.id)
                        .await?
                        .is_some()
                    {
                        return Err(SchoolHubError::submission_already_exists(format!(
                            "学生 {} 已提交过作业 {assignment_id}，请使用重新提交",
                            student.id
                        )));
                    }

                    let ts = now.timestamp();
                    let model = ActiveModel {
                        assignment_id: Set(assignment_id),
                        student_id: Set(student.id),
                        file_url: Set(file_url),
                        submitted_at: Set(ts),
                        late_flag: Set(assignment.is_late_at(now)),
                        status: Set(SubmissionStatus::Pending.to_string()),
                        score: Set(None),
                        teacher_feedback: Set(None),
                        created_at: Set(ts),
                        updated_at: Set(ts),
                        ..Default::default()
                    };

                    model
                        .insert(txn)
                        .await
                        .map_err(|e| map_insert_error(e, assignment_id, student.id))
                })
            })
            .await;

        match result {
            Ok(model) => {
                info!(
                    "Submission {} created (assignment: {}, student: {}, late: {})",
                    model.id, model.assignment_id, model.student_id, model.late_flag
                );
                Ok(model.into_submission())
            }
            Err(e) => {
                if e.is_conflict() {
                    warn!(
                        "Duplicate submission rejected (assignment: {}, user: {})",
                        assignment_id, student_user_id
                    );
                }
                Err(e)
            }
        }
    }

    /// 重新提交作业：覆盖文件、提交时间和迟交标记，状态重置为待批改
    pub async fn update_submission_impl(
        &self,
        student_user_id: i64,
        assignment_id: i64,
        file_url: &str,
        now: DateTime<Utc>,
    ) -> Result<Submission> {
        let file_url = self.check_file_url(file_url)?;
        let allow_resubmit_after_grading = self.policy.allow_resubmit_after_grading;

        let model = self
            .run_in_transaction(move |txn| {
                Box::pin(async move {
                    let student = find_student_by_user_id(txn, student_user_id).await?;
                    let assignment = find_assignment(txn, assignment_id).await?;

                    let existing = find_submission_by_pair(txn, assignment_id, student.id)
                        .await?
                        .ok_or_else(|| {
                            SchoolHubError::submission_not_found(format!(
                                "学生 {} 尚未提交作业 {assignment_id}",
                                student.id
                            ))
                        })?;

                    if !allow_resubmit_after_grading
                        && existing.status == SubmissionStatus::GRADED
                    {
                        return Err(SchoolHubError::submission_already_graded(format!(
                            "提交 {} 已评分，不允许重新提交",
                            existing.id
                        )));
                    }

                    let ts = now.timestamp();
                    let mut active: ActiveModel = existing.into();
                    active.file_url = Set(file_url);
                    active.submitted_at = Set(ts);
                    active.late_flag = Set(assignment.is_late_at(now));
                    active.status = Set(SubmissionStatus::Pending.to_string());
                    active.updated_at = Set(ts);

                    active
                        .update(txn)
                        .await
                        .map_err(|e| SchoolHubError::database_operation(format!("更新提交失败: {e}")))
                })
            })
            .await?;

        info!(
            "Submission {} resubmitted (assignment: {}, student: {}, late: {})",
            model.id, model.assignment_id, model.student_id, model.late_flag
        );

        Ok(model.into_submission())
    }

    /// 评分（单条语句，只修改评分相关字段）
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        grade: GradeSubmissionRequest,
        now: DateTime<Utc>,
    ) -> Result<Submission> {
        if let Some(score) = grade.score
            && !score.is_finite()
        {
            return Err(SchoolHubError::validation("分数必须是有限数值"));
        }

        let result = Submissions::update_many()
            .col_expr(Column::Score, Expr::value(grade.score))
            .col_expr(Column::TeacherFeedback, Expr::value(grade.feedback))
            .col_expr(
                Column::Status,
                Expr::value(SubmissionStatus::Graded.to_string()),
            )
            .col_expr(Column::UpdatedAt, Expr::value(now.timestamp()))
            .filter(Column::Id.eq(submission_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("评分失败: {e}")))?;

        if result.rows_affected == 0 {
            return Err(SchoolHubError::submission_not_found(format!(
                "提交不存在: {submission_id}"
            )));
        }

        info!("Submission {} graded", submission_id);

        self.get_submission_by_id_impl(submission_id)
            .await?
            .ok_or_else(|| SchoolHubError::submission_not_found(format!("提交不存在: {submission_id}")))
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取学生自己在某作业下的提交
    pub async fn get_student_submission_impl(
        &self,
        student_user_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Submission>> {
        let student = find_student_by_user_id(&self.db, student_user_id).await?;
        let result = find_submission_by_pair(&self.db, assignment_id, student.id).await?;
        Ok(result.map(|m| m.into_submission()))
    }

    /// 列出某作业的全部提交，附带学生身份信息
    ///
    /// 按提交时间升序，同一秒内按 ID 升序。不校验作业是否存在。
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<SubmissionListResponse> {
        let submissions = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::SubmittedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询提交列表失败: {e}")))?;

        if submissions.is_empty() {
            return Ok(SubmissionListResponse {
                assignment_id,
                items: vec![],
            });
        }

        // 批量查询学生信息
        let student_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.student_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let students = Students::find()
            .filter(StudentColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生信息失败: {e}")))?;

        // 批量查询用户信息
        let user_ids: Vec<i64> = students.iter().map(|s| s.user_id).collect();
        let users = Users::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询用户信息失败: {e}")))?;

        let student_map: HashMap<i64, _> = students.into_iter().map(|s| (s.id, s)).collect();
        let user_map: HashMap<i64, _> = users.into_iter().map(|u| (u.id, u)).collect();

        let items = submissions
            .into_iter()
            .map(|s| {
                let student = student_map.get(&s.student_id);
                let user = student.and_then(|st| user_map.get(&st.user_id));
                SubmissionListItem {
                    id: s.id,
                    assignment_id: s.assignment_id,
                    student: SubmissionStudent {
                        student_id: s.student_id,
                        student_number: student.and_then(|st| st.student_number.clone()),
                        user_id: student.map(|st| st.user_id).unwrap_or_default(),
                        username: user
                            .map(|u| u.username.clone())
                            .unwrap_or_else(|| "未知用户".to_string()),
                        display_name: user.and_then(|u| u.display_name.clone()),
                    },
                    file_url: s.file_url,
                    submitted_at: DateTime::from_timestamp(s.submitted_at, 0)
                        .map(|dt| dt.to_rfc3339())
                        .unwrap_or_default(),
                    late_flag: s.late_flag,
                    status: s
                        .status
                        .parse::<SubmissionStatus>()
                        .unwrap_or(SubmissionStatus::Pending),
                    score: s.score,
                    teacher_feedback: s.teacher_feedback,
                }
            })
            .collect();

        Ok(SubmissionListResponse {
            assignment_id,
            items,
        })
    }
}
