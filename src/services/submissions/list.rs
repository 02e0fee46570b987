use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, error_response};
use crate::models::ApiResponse;

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_submissions_by_assignment(assignment_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(error_response(&e)),
    }
}
