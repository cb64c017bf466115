use std::sync::Arc;

use crate::models::{
    announcements::{
        entities::Announcement, requests::CreateAnnouncementRequest,
        responses::AnnouncementListResponse,
    },
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceQueryParams, UpsertAttendanceRequest},
        responses::AttendanceSummary,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    enrollments::{
        entities::Enrollment, requests::CreateEnrollmentRequest,
        responses::EnrollmentListResponse,
    },
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, ExamQueryParams, UpdateExamRequest},
    },
    files::entities::File,
    marks::{
        entities::Mark,
        requests::{MarkQueryParams, UpsertMarkRequest},
    },
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationQueryParams},
        responses::NotificationListResponse,
    },
    profiles::{
        entities::{StudentProfile, TeacherProfile},
        requests::{SubmitStudentProfileRequest, SubmitTeacherProfileRequest},
    },
    reports::{
        entities::PerformanceReport,
        requests::{ReportDraft, ReportQueryParams},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectQueryParams, UpdateSubjectRequest},
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 批量获取用户（列表补全用，避免 N+1）
    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 按角色统计用户数量
    async fn count_users_by_role(&self, role: &UserRole) -> Result<u64>;
    // 设置头像地址
    async fn set_avatar_url(&self, user_id: i64, avatar_url: &str) -> Result<bool>;

    /// 档案管理方法
    // 获取学生档案
    async fn get_student_profile(&self, user_id: i64) -> Result<Option<StudentProfile>>;
    // 获取教师档案
    async fn get_teacher_profile(&self, user_id: i64) -> Result<Option<TeacherProfile>>;
    // 提交学生档案并标记 profile_complete
    async fn submit_student_profile(
        &self,
        user_id: i64,
        profile: SubmitStudentProfileRequest,
    ) -> Result<StudentProfile>;
    // 提交教师档案并标记 profile_complete
    async fn submit_teacher_profile(
        &self,
        user_id: i64,
        profile: SubmitTeacherProfileRequest,
    ) -> Result<TeacherProfile>;

    /// 班级管理方法
    // 创建班级（teacher_id 已由服务层解析）
    async fn create_class(&self, teacher_id: i64, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 列出全部未删除班级（分析用）
    async fn list_all_classes(&self) -> Result<Vec<Class>>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 软删除班级
    async fn soft_delete_class(&self, class_id: i64) -> Result<bool>;
    // 恢复软删除的班级
    async fn restore_class(&self, class_id: i64) -> Result<bool>;
    // 统计未删除班级数量
    async fn count_classes(&self) -> Result<u64>;

    /// 选课管理方法
    // 学生加入班级
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    // 获取某学生在某班级的选课记录
    async fn get_enrollment(&self, class_id: i64, student_id: i64) -> Result<Option<Enrollment>>;
    // 分页列出班级学生（带用户信息补全）
    async fn list_enrollments_by_class(
        &self,
        class_id: i64,
        page: u64,
        limit: u64,
    ) -> Result<EnrollmentListResponse>;
    // 某学生所有已加入班级的 ID
    async fn list_student_class_ids(&self, student_id: i64) -> Result<Vec<i64>>;
    // 某班级全部学生 ID（通知扇出、批量考勤用）
    async fn list_enrolled_student_ids(&self, class_id: i64) -> Result<Vec<i64>>;
    // 移除选课记录
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects(&self, query: SubjectQueryParams) -> Result<Vec<Subject>>;
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;
    async fn count_subjects(&self) -> Result<u64>;

    /// 考试管理方法
    async fn create_exam(&self, exam: CreateExamRequest) -> Result<Exam>;
    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>>;
    async fn list_exams(&self, query: ExamQueryParams) -> Result<Vec<Exam>>;
    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 按 (student, exam, subject) 插入或覆盖成绩
    async fn upsert_mark(&self, mark: UpsertMarkRequest) -> Result<Mark>;
    async fn list_marks(&self, query: MarkQueryParams) -> Result<Vec<Mark>>;
    // 批量按学生查成绩（花名册补全用）
    async fn list_marks_by_students(&self, student_ids: &[i64]) -> Result<Vec<Mark>>;
    // 全量成绩及所属考试（班级均分统计用）
    async fn list_marks_with_exams(&self) -> Result<Vec<(Mark, Exam)>>;

    /// 考勤管理方法
    // 按 (class, student, date) 插入或覆盖考勤
    async fn upsert_attendance(
        &self,
        record: UpsertAttendanceRequest,
    ) -> Result<AttendanceRecord>;
    async fn list_attendance(
        &self,
        query: AttendanceQueryParams,
    ) -> Result<Vec<AttendanceRecord>>;
    // 单个学生的出勤汇总
    async fn attendance_summary(&self, student_id: i64) -> Result<AttendanceSummary>;
    // 全校考勤总数与出勤数（到课含迟到）
    async fn attendance_totals(&self) -> Result<(u64, u64)>;

    /// 公告管理方法
    async fn create_announcement(
        &self,
        author_id: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    async fn get_announcement_by_id(&self, id: i64) -> Result<Option<Announcement>>;
    // 列出对指定班级集合可见的公告（含全校公告）
    async fn list_announcements_visible(
        &self,
        class_ids: &[i64],
        page: u64,
        limit: u64,
    ) -> Result<AnnouncementListResponse>;
    async fn delete_announcement(&self, id: i64) -> Result<bool>;

    /// 通知管理方法
    // 批量写入通知（公告扇出）
    async fn create_notifications(
        &self,
        notifications: Vec<CreateNotificationRequest>,
    ) -> Result<u64>;
    async fn list_notifications(
        &self,
        user_id: i64,
        query: NotificationQueryParams,
    ) -> Result<NotificationListResponse>;
    async fn count_unread_notifications(&self, user_id: i64) -> Result<i64>;
    async fn mark_notification_read(&self, user_id: i64, id: i64) -> Result<bool>;
    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64>;
    async fn delete_notification(&self, user_id: i64, id: i64) -> Result<bool>;

    /// 成绩报告方法
    // 按 (student, exam) 覆盖写入一批报告
    async fn upsert_performance_reports(&self, rows: Vec<ReportDraft>) -> Result<u64>;
    async fn list_reports(&self, query: ReportQueryParams) -> Result<Vec<PerformanceReport>>;

    /// 文件管理方法
    async fn create_file(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        uploaded_by: i64,
    ) -> Result<File>;
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
