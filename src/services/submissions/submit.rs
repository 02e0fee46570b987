use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SubmissionService, error_response};
use crate::models::ApiResponse;
use crate::models::submissions::requests::SubmitAssignmentRequest;

pub async fn submit_assignment(
    service: &SubmissionService,
    request: &HttpRequest,
    student_user_id: i64,
    assignment_id: i64,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .submit_assignment(student_user_id, assignment_id, &req.file_url, chrono::Utc::now())
        .await
    {
        Ok(submission) => {
            info!(
                "User {} submitted assignment {} (submission: {})",
                student_user_id, assignment_id, submission.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(submission, "提交成功")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
