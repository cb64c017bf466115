//! 数据模型定义
//!
//! 按业务域划分的请求/响应/实体结构，以及统一的响应包装和错误码。

pub mod common;

pub mod analytics;
pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod enrollments;
pub mod exams;
pub mod files;
pub mod marks;
pub mod notifications;
pub mod profiles;
pub mod reports;
pub mod subjects;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于健康检查与启动耗时统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 响应体中的 code 字段。0 表示成功，4xxx/5xxx 对应通用 HTTP 语义，
/// 1xxxx 起按业务域分段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 4000,
    Unauthorized = 4010,
    AuthFailed = 4011,
    Forbidden = 4030,
    NotFound = 4040,
    Conflict = 4090,
    RateLimitExceeded = 4290,
    InternalServerError = 5000,

    // 用户 / 认证
    UserNotFound = 10001,
    UserAlreadyExists = 10002,
    UserEmailAlreadyExists = 10003,
    UserNameInvalid = 10004,
    UserEmailInvalid = 10005,
    UserPasswordInvalid = 10006,
    UserCreationFailed = 10007,
    UserUpdateFailed = 10008,
    UserDeleteFailed = 10009,
    CanNotDeleteCurrentUser = 10010,
    RegisterFailed = 10011,
    ProfileIncomplete = 10012,
    ProfileAlreadySubmitted = 10013,

    // 班级
    ClassNotFound = 20001,
    ClassAlreadyExists = 20002,
    ClassCreationFailed = 20003,
    ClassDeleteFailed = 20004,
    ClassPermissionDenied = 20005,
    ClassDeleted = 20006,

    // 选课 / 注册
    EnrollmentNotFound = 21001,
    EnrollmentAlreadyExists = 21002,
    EnrollmentFailed = 21003,

    // 科目
    SubjectNotFound = 22001,
    SubjectAlreadyExists = 22002,

    // 考试
    ExamNotFound = 23001,

    // 成绩
    MarkNotFound = 24001,
    MarkOutOfRange = 24002,
    MarkSaveFailed = 24003,

    // 考勤
    AttendanceSaveFailed = 25001,
    AttendanceDateInvalid = 25002,
    AttendanceStatusInvalid = 25003,

    // 公告 / 通知
    AnnouncementNotFound = 26001,
    NotificationNotFound = 27001,

    // 成绩报告
    ReportNotFound = 28001,
    ReportGenerationFailed = 28002,

    // 文件
    FileNotFound = 30001,
    FileUploadFailed = 30002,
    FileTypeNotAllowed = 30003,
    FileSizeExceeded = 30004,
    MultifileUploadNotAllowed = 30005,
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 4010);
        assert_eq!(ErrorCode::Conflict as i32, 4090);
        assert_eq!(ErrorCode::EnrollmentAlreadyExists as i32, 21002);
    }
}
