use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SubmissionService, error_response};
use crate::models::ApiResponse;
use crate::models::submissions::requests::SubmitAssignmentRequest;

pub async fn update_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    student_user_id: i64,
    assignment_id: i64,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .update_submission(student_user_id, assignment_id, &req.file_url, chrono::Utc::now())
        .await
    {
        Ok(submission) => {
            info!(
                "User {} resubmitted assignment {} (submission: {}, late: {})",
                student_user_id, assignment_id, submission.id, submission.late_flag
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "重新提交成功")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
