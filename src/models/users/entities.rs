use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student,    // 学生
    Teacher,    // 教师
    Parent,     // 家长
    Director,   // 校长/主任
    Admin,      // 管理员
    SuperAdmin, // 超级管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const PARENT: &'static str = "parent";
    pub const DIRECTOR: &'static str = "director";
    pub const ADMIN: &'static str = "admin";
    pub const SUPER_ADMIN: &'static str = "super_admin";

    // 可以提交作业的角色
    pub fn student_roles() -> &'static [&'static UserRole] {
        &[&Self::Student]
    }
    // 可以查看作业提交的角色
    pub fn reviewer_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Director, &Self::Admin, &Self::SuperAdmin]
    }
    // 可以评分的角色
    pub fn grader_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Admin, &Self::SuperAdmin]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[
            &Self::Student,
            &Self::Teacher,
            &Self::Parent,
            &Self::Director,
            &Self::Admin,
            &Self::SuperAdmin,
        ]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, teacher, parent, director, admin, super_admin"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Student => UserRole::STUDENT,
            UserRole::Teacher => UserRole::TEACHER,
            UserRole::Parent => UserRole::PARENT,
            UserRole::Director => UserRole::DIRECTOR,
            UserRole::Admin => UserRole::ADMIN,
            UserRole::SuperAdmin => UserRole::SUPER_ADMIN,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::PARENT => Ok(UserRole::Parent),
            UserRole::DIRECTOR => Ok(UserRole::Director),
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::SUPER_ADMIN => Ok(UserRole::SuperAdmin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserStatus {
    Active,    // 活跃
    Inactive,  // 非活跃
    Suspended, // 暂停
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "suspended" => Ok(UserStatus::Suspended),
            _ => Err(format!("Invalid user status: {s}")),
        }
    }
}

// 已认证的用户，由 RequireJWT 中间件放入请求扩展
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub display_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
