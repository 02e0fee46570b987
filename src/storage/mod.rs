use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{
    submissions::{
        entities::Submission, requests::GradeSubmissionRequest, responses::SubmissionListResponse,
    },
    users::entities::User,
};

pub mod sea_orm_storage;

/// 提交流程策略
#[derive(Debug, Clone)]
pub struct SubmissionPolicy {
    // 已评分的提交是否允许重新提交
    pub allow_resubmit_after_grading: bool,
    pub max_file_url_length: usize,
    // 单个事务的最长执行时间，超时后回滚并释放连接
    pub transaction_timeout: Duration,
}

impl SubmissionPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allow_resubmit_after_grading: config.submission.allow_resubmit_after_grading,
            max_file_url_length: config.submission.max_file_url_length,
            transaction_timeout: Duration::from_millis(config.database.transaction_timeout),
        }
    }
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            allow_resubmit_after_grading: true,
            max_file_url_length: 2048,
            transaction_timeout: Duration::from_secs(5),
        }
    }
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户方法
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// 作业提交方法
    // 首次提交作业（同一学生同一作业只能提交一次，之后需走重新提交）
    async fn submit_assignment(
        &self,
        student_user_id: i64,
        assignment_id: i64,
        file_url: &str,
        now: DateTime<Utc>,
    ) -> Result<Submission>;
    // 重新提交作业
    async fn update_submission(
        &self,
        student_user_id: i64,
        assignment_id: i64,
        file_url: &str,
        now: DateTime<Utc>,
    ) -> Result<Submission>;
    // 评分
    async fn grade_submission(
        &self,
        submission_id: i64,
        grade: GradeSubmissionRequest,
        now: DateTime<Utc>,
    ) -> Result<Submission>;
    // 通过 ID 获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 获取学生自己在某作业下的提交
    async fn get_student_submission(
        &self,
        student_user_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Submission>>;
    // 列出某作业的全部提交（按提交时间升序）
    async fn list_submissions_by_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<SubmissionListResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
