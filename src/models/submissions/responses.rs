use serde::Serialize;
use ts_rs::TS;

use crate::models::submissions::entities::SubmissionStatus;

/// 提交者（学生）信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionStudent {
    pub student_id: i64,
    pub student_number: Option<String>,
    pub user_id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

/// 提交列表项（包含学生身份信息）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListItem {
    pub id: i64,
    pub assignment_id: i64,
    pub student: SubmissionStudent,
    pub file_url: String,
    pub submitted_at: String,
    pub late_flag: bool,
    pub status: SubmissionStatus,
    pub score: Option<f64>,
    pub teacher_feedback: Option<String>,
}

/// 作业提交列表响应（按提交时间升序，无分页）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub assignment_id: i64,
    pub items: Vec<SubmissionListItem>,
}
