pub mod detail;
pub mod grade;
pub mod list;
pub mod submit;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode, web};
use std::sync::Arc;
use tracing::{debug, error};

use crate::errors::SchoolHubError;
use crate::models::submissions::requests::{GradeSubmissionRequest, SubmitAssignmentRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        if let Some(storage) = &self.storage {
            return Ok(storage.clone());
        }
        request
            .app_data::<web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| {
                error!("Storage not found in app data");
                actix_web::error::ErrorInternalServerError("storage unavailable")
            })
    }

    /// 提交作业
    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        student_user_id: i64,
        assignment_id: i64,
        req: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, request, student_user_id, assignment_id, req).await
    }

    /// 重新提交作业
    pub async fn update_submission(
        &self,
        request: &HttpRequest,
        student_user_id: i64,
        assignment_id: i64,
        req: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_submission(self, request, student_user_id, assignment_id, req).await
    }

    /// 评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        grader_id: i64,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, grader_id, submission_id, req).await
    }

    /// 列出某作业的全部提交
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, assignment_id).await
    }

    /// 获取提交详情
    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission(self, request, submission_id).await
    }

    /// 获取学生自己的提交
    pub async fn get_my_submission(
        &self,
        request: &HttpRequest,
        student_user_id: i64,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_my_submission(self, request, student_user_id, assignment_id).await
    }
}

/// 业务错误到 HTTP 状态码与错误码的映射
pub(crate) fn error_status(err: &SchoolHubError) -> (StatusCode, ErrorCode) {
    match err {
        SchoolHubError::StudentNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::StudentNotFound),
        SchoolHubError::AssignmentNotFound(_) => {
            (StatusCode::NOT_FOUND, ErrorCode::AssignmentNotFound)
        }
        SchoolHubError::SubmissionNotFound(_) => {
            (StatusCode::NOT_FOUND, ErrorCode::SubmissionNotFound)
        }
        SchoolHubError::SubmissionAlreadyExists(_) => {
            (StatusCode::CONFLICT, ErrorCode::SubmissionAlreadyExists)
        }
        SchoolHubError::SubmissionAlreadyGraded(_) => {
            (StatusCode::CONFLICT, ErrorCode::SubmissionAlreadyGraded)
        }
        SchoolHubError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadRequest),
        SchoolHubError::Authentication(_) => (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized),
        SchoolHubError::TransactionTimeout(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::ServiceUnavailable)
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalServerError,
        ),
    }
}

/// 把存储层错误转换为统一响应；基础设施错误不向客户端暴露细节
pub(crate) fn error_response(err: &SchoolHubError) -> HttpResponse {
    let (status, code) = error_status(err);
    let body = if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
        error!("{}", err.format_simple());
        ApiResponse::error_empty(code, "服务器内部错误")
    } else {
        if err.is_not_found() || err.is_conflict() {
            debug!("{}", err.format_simple());
        }
        ApiResponse::from_error(code, err)
    };
    HttpResponse::build(status).json(body)
}
