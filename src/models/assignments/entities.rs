use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 关联的班级 ID
    pub class_id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: Option<String>,
    // 截止日期（仅日期）
    pub due_date: Option<NaiveDate>,
    // 作业创建时间
    pub created_at: DateTime<Utc>,
    // 作业更新时间
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    /// 判断在 `submitted_at` 时刻提交是否迟交
    pub fn is_late_at(&self, submitted_at: DateTime<Utc>) -> bool {
        is_late(submitted_at, self.due_date)
    }
}

/// 迟交判定：只比较日历日期（UTC），提交日期严格晚于截止日期才算迟交。
/// 没有截止日期的作业永远不算迟交。
pub fn is_late(submitted_at: DateTime<Utc>, due_date: Option<NaiveDate>) -> bool {
    due_date.is_some_and(|due| submitted_at.date_naive() > due)
}
