use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SubmissionService, error_response};
use crate::models::ApiResponse;
use crate::models::submissions::requests::GradeSubmissionRequest;

pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    grader_id: i64,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .grade_submission(submission_id, req, chrono::Utc::now())
        .await
    {
        Ok(submission) => {
            info!("User {} graded submission {}", grader_id, submission_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "评分成功")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
