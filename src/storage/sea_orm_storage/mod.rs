//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod attendance;
mod classes;
mod enrollments;
mod exams;
mod files;
mod marks;
mod notifications;
mod profiles;
mod reports;
mod subjects;
mod users;

use crate::config::AppConfig;
use crate::errors::{CampusError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CampusError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CampusError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CampusError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>> {
        self.get_users_by_ids_impl(ids).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn count_users_by_role(&self, role: &UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    async fn set_avatar_url(&self, user_id: i64, avatar_url: &str) -> Result<bool> {
        self.set_avatar_url_impl(user_id, avatar_url).await
    }

    // 档案模块
    async fn get_student_profile(&self, user_id: i64) -> Result<Option<StudentProfile>> {
        self.get_student_profile_impl(user_id).await
    }

    async fn get_teacher_profile(&self, user_id: i64) -> Result<Option<TeacherProfile>> {
        self.get_teacher_profile_impl(user_id).await
    }

    async fn submit_student_profile(
        &self,
        user_id: i64,
        profile: SubmitStudentProfileRequest,
    ) -> Result<StudentProfile> {
        self.submit_student_profile_impl(user_id, profile).await
    }

    async fn submit_teacher_profile(
        &self,
        user_id: i64,
        profile: SubmitTeacherProfileRequest,
    ) -> Result<TeacherProfile> {
        self.submit_teacher_profile_impl(user_id, profile).await
    }

    // 班级模块
    async fn create_class(&self, teacher_id: i64, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(teacher_id, class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn list_all_classes(&self) -> Result<Vec<Class>> {
        self.list_all_classes_impl().await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn soft_delete_class(&self, class_id: i64) -> Result<bool> {
        self.soft_delete_class_impl(class_id).await
    }

    async fn restore_class(&self, class_id: i64) -> Result<bool> {
        self.restore_class_impl(class_id).await
    }

    async fn count_classes(&self) -> Result<u64> {
        self.count_classes_impl().await
    }

    // 选课模块
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(enrollment).await
    }

    async fn get_enrollment(&self, class_id: i64, student_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(class_id, student_id).await
    }

    async fn list_enrollments_by_class(
        &self,
        class_id: i64,
        page: u64,
        limit: u64,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_by_class_impl(class_id, page, limit)
            .await
    }

    async fn list_student_class_ids(&self, student_id: i64) -> Result<Vec<i64>> {
        self.list_student_class_ids_impl(student_id).await
    }

    async fn list_enrolled_student_ids(&self, class_id: i64) -> Result<Vec<i64>> {
        self.list_enrolled_student_ids_impl(class_id).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects(&self, query: SubjectQueryParams) -> Result<Vec<Subject>> {
        self.list_subjects_impl(query).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn count_subjects(&self) -> Result<u64> {
        self.count_subjects_impl().await
    }

    // 考试模块
    async fn create_exam(&self, exam: CreateExamRequest) -> Result<Exam> {
        self.create_exam_impl(exam).await
    }

    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(id).await
    }

    async fn list_exams(&self, query: ExamQueryParams) -> Result<Vec<Exam>> {
        self.list_exams_impl(query).await
    }

    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    // 成绩模块
    async fn upsert_mark(&self, mark: UpsertMarkRequest) -> Result<Mark> {
        self.upsert_mark_impl(mark).await
    }

    async fn list_marks(&self, query: MarkQueryParams) -> Result<Vec<Mark>> {
        self.list_marks_impl(query).await
    }

    async fn list_marks_by_students(&self, student_ids: &[i64]) -> Result<Vec<Mark>> {
        self.list_marks_by_students_impl(student_ids).await
    }

    async fn list_marks_with_exams(&self) -> Result<Vec<(Mark, Exam)>> {
        self.list_marks_with_exams_impl().await
    }

    // 考勤模块
    async fn upsert_attendance(
        &self,
        record: UpsertAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        self.upsert_attendance_impl(record).await
    }

    async fn list_attendance(
        &self,
        query: AttendanceQueryParams,
    ) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(query).await
    }

    async fn attendance_summary(&self, student_id: i64) -> Result<AttendanceSummary> {
        self.attendance_summary_impl(student_id).await
    }

    async fn attendance_totals(&self) -> Result<(u64, u64)> {
        self.attendance_totals_impl().await
    }

    // 公告模块
    async fn create_announcement(
        &self,
        author_id: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        self.create_announcement_impl(author_id, announcement).await
    }

    async fn get_announcement_by_id(&self, id: i64) -> Result<Option<Announcement>> {
        self.get_announcement_by_id_impl(id).await
    }

    async fn list_announcements_visible(
        &self,
        class_ids: &[i64],
        page: u64,
        limit: u64,
    ) -> Result<AnnouncementListResponse> {
        self.list_announcements_visible_impl(class_ids, page, limit)
            .await
    }

    async fn delete_announcement(&self, id: i64) -> Result<bool> {
        self.delete_announcement_impl(id).await
    }

    // 通知模块
    async fn create_notifications(
        &self,
        notifications: Vec<CreateNotificationRequest>,
    ) -> Result<u64> {
        self.create_notifications_impl(notifications).await
    }

    async fn list_notifications(
        &self,
        user_id: i64,
        query: NotificationQueryParams,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_impl(user_id, query).await
    }

    async fn count_unread_notifications(&self, user_id: i64) -> Result<i64> {
        self.count_unread_notifications_impl(user_id).await
    }

    async fn mark_notification_read(&self, user_id: i64, id: i64) -> Result<bool> {
        self.mark_notification_read_impl(user_id, id).await
    }

    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64> {
        self.mark_all_notifications_read_impl(user_id).await
    }

    async fn delete_notification(&self, user_id: i64, id: i64) -> Result<bool> {
        self.delete_notification_impl(user_id, id).await
    }

    // 成绩报告模块
    async fn upsert_performance_reports(&self, rows: Vec<ReportDraft>) -> Result<u64> {
        self.upsert_performance_reports_impl(rows).await
    }

    async fn list_reports(&self, query: ReportQueryParams) -> Result<Vec<PerformanceReport>> {
        self.list_reports_impl(query).await
    }

    // 文件模块
    async fn create_file(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
        uploaded_by: i64,
    ) -> Result<File> {
        self.create_file_impl(
            download_token,
            original_name,
            stored_name,
            file_size,
            file_type,
            uploaded_by,
        )
        .await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(token).await
    }
}
