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
pub mod profile;
pub mod reports;
pub mod subjects;
pub mod users;

pub use analytics::AnalyticsService;
pub use announcements::AnnouncementService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use enrollments::EnrollmentService;
pub use exams::ExamService;
pub use files::FileService;
pub use marks::MarkService;
pub use notifications::NotificationService;
pub use profile::ProfileService;
pub use reports::ReportService;
pub use subjects::SubjectService;
pub use users::UserService;
