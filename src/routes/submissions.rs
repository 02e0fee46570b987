use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::submissions::requests::{GradeSubmissionRequest, SubmitAssignmentRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::SubmissionService;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "无法获取用户信息",
    ))
}

// 提交作业
pub async fn submit_assignment(
    req: HttpRequest,
    path: web::Path<i64>, // assignment_id
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(&req) else {
        return Ok(unauthorized());
    };

    SUBMISSION_SERVICE
        .submit_assignment(&req, user_id, path.into_inner(), body.into_inner())
        .await
}

// 重新提交作业
pub async fn update_submission(
    req: HttpRequest,
    path: web::Path<i64>, // assignment_id
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(&req) else {
        return Ok(unauthorized());
    };

    SUBMISSION_SERVICE
        .update_submission(&req, user_id, path.into_inner(), body.into_inner())
        .await
}

// 获取我的提交
pub async fn get_my_submission(
    req: HttpRequest,
    path: web::Path<i64>, // assignment_id
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(&req) else {
        return Ok(unauthorized());
    };

    SUBMISSION_SERVICE
        .get_my_submission(&req, user_id, path.into_inner())
        .await
}

// 列出某作业的全部提交
pub async fn list_submissions(
    req: HttpRequest,
    path: web::Path<i64>, // assignment_id
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, path.into_inner())
        .await
}

// 获取提交详情
pub async fn get_submission(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission(&req, path.into_inner())
        .await
}

// 评分
pub async fn grade_submission(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(&req) else {
        return Ok(unauthorized());
    };

    SUBMISSION_SERVICE
        .grade_submission(&req, user_id, path.into_inner(), body.into_inner())
        .await
}

// 配置路由
//
// actix 中后注册的 wrap 在外层，RequireJWT 必须最后注册，保证角色校验时用户已加载。
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    // 作业维度：学生提交 / 重新提交 / 查看自己的提交，教师查看列表
    cfg.service(
        web::scope("/api/v1/assignments/{assignment_id}/submissions")
            .service(
                web::resource("/my")
                    .wrap(RequireRole::new_any(UserRole::student_roles()))
                    .route(web::get().to(get_my_submission)),
            )
            .service(
                web::resource("")
                    .guard(guard::Any(guard::Post()).or(guard::Put()))
                    .wrap(RequireRole::new_any(UserRole::student_roles()))
                    .route(web::post().to(submit_assignment))
                    .route(web::put().to(update_submission)),
            )
            .service(
                web::resource("")
                    .guard(guard::Get())
                    .wrap(RequireRole::new_any(UserRole::reviewer_roles()))
                    .route(web::get().to(list_submissions)),
            )
            .wrap(RequireJWT),
    );

    // 提交维度：详情与评分
    cfg.service(
        web::scope("/api/v1/submissions")
            .service(
                web::resource("/{id}/grade")
                    .wrap(RequireRole::new_any(UserRole::grader_roles()))
                    .route(web::put().to(grade_submission)),
            )
            .service(
                web::resource("/{id}")
                    .wrap(RequireRole::new_any(UserRole::reviewer_roles()))
                    .route(web::get().to(get_submission)),
            )
            .wrap(RequireJWT),
    );
}
