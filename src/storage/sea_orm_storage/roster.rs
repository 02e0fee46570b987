//! 花名册只读查询
//!
//! 学生与作业由其他服务维护。这里的函数对任意连接泛型，
//! 既可以直接在连接池上执行，也可以在提交流程的事务内执行。

use crate::entity::prelude::{Assignments, StudentModel, Students};
use crate::entity::students::Column as StudentColumn;
use crate::errors::{Result, SchoolHubError};
use crate::models::assignments::entities::Assignment;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

/// 通过用户 ID 解析学生，不存在时返回 StudentNotFound
pub(super) async fn find_student_by_user_id<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<StudentModel> {
    Students::find()
        .filter(StudentColumn::UserId.eq(user_id))
        .one(conn)
        .await
        .map_err(|e| SchoolHubError::database_operation(format!("查询学生信息失败: {e}")))?
        .ok_or_else(|| SchoolHubError::student_not_found(format!("用户 {user_id} 没有对应的学生记录")))
}

/// 获取作业，不存在时返回 AssignmentNotFound
pub(super) async fn find_assignment<C: ConnectionTrait>(
    conn: &C,
    assignment_id: i64,
) -> Result<Assignment> {
    Assignments::find_by_id(assignment_id)
        .one(conn)
        .await
        .map_err(|e| SchoolHubError::database_operation(format!("查询作业失败: {e}")))?
        .map(|m| m.into_assignment())
        .ok_or_else(|| SchoolHubError::assignment_not_found(format!("作业不存在: {assignment_id}")))
}
