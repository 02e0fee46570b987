use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(err: impl std::fmt::Display + std::fmt::Debug + 'static, message: String) -> Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

/// JSON 请求体解析失败时返回统一的 400 响应
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    let message = match &err {
        JsonPayloadError::ContentType => "请求体必须是 application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("请求体格式错误: {e}"),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "请求体过大".to_string()
        }
        _ => format!("请求体无效: {err}"),
    };
    bad_request(err, message)
}

/// 查询参数解析失败时返回统一的 400 响应
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query payload error on {}: {}", req.path(), err);
    let message = format!("查询参数错误: {err}");
    bad_request(err, message)
}

/// 路径参数（如非数字 ID）解析失败时返回统一的 400 响应
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Path parameter error on {}: {}", req.path(), err);
    let message = format!("路径参数错误: {err}");
    bad_request(err, message)
}
