use serde::Deserialize;
use ts_rs::TS;

/// 提交 / 重新提交作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAssignmentRequest {
    pub file_url: String,
}

/// 评分请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub score: Option<f64>,
    pub feedback: Option<String>,
}
