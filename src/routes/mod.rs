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

pub use analytics::configure_analytics_routes;
pub use announcements::configure_announcements_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use enrollments::configure_enrollments_routes;
pub use exams::configure_exams_routes;
pub use files::configure_file_routes;
pub use marks::configure_marks_routes;
pub use notifications::configure_notifications_routes;
pub use profile::configure_profile_routes;
pub use reports::configure_reports_routes;
pub use subjects::configure_subjects_routes;
pub use users::configure_user_routes;
