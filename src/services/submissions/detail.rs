use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, error_response};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_my_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    student_user_id: i64,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .get_student_submission(student_user_id, assignment_id)
        .await
    {
        Ok(Some(submission)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "查询成功")))
        }
        // 尚未提交时返回 200 + null，而不是 404
        Ok(None) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("暂无提交"))),
        Err(e) => Ok(error_response(&e)),
    }
}
