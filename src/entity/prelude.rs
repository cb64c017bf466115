//! 预导入模块，方便使用

pub use super::announcements::{
    ActiveModel as AnnouncementActiveModel, Entity as Announcements, Model as AnnouncementModel,
};
pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::files::{ActiveModel as FileActiveModel, Entity as Files, Model as FileModel};
pub use super::marks::{ActiveModel as MarkActiveModel, Entity as Marks, Model as MarkModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::performance_reports::{
    ActiveModel as PerformanceReportActiveModel, Entity as PerformanceReports,
    Model as PerformanceReportModel,
};
pub use super::student_profiles::{
    ActiveModel as StudentProfileActiveModel, Entity as StudentProfiles,
    Model as StudentProfileModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teacher_profiles::{
    ActiveModel as TeacherProfileActiveModel, Entity as TeacherProfiles,
    Model as TeacherProfileModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
