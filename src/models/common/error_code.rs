/// 业务错误码
///
/// 通用错误使用 1xxx，提交流程错误使用 5xxx。
/// 数值一经发布不可更改，前端依赖它们做分支处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    ServiceUnavailable = 1005,

    StudentNotFound = 5001,
    AssignmentNotFound = 5002,
    SubmissionNotFound = 5003,
    SubmissionAlreadyExists = 5004,
    SubmissionAlreadyGraded = 5005,
}
