use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(
                        ColumnDef::new(Users::ProfileComplete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生档案表
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::AdmissionNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::GuardianName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::GuardianPhone)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentProfiles::DateOfBirth).string().null())
                    .col(ColumnDef::new(StudentProfiles::Address).text().null())
                    .col(
                        ColumnDef::new(StudentProfiles::ClassId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师档案表
        manager
            .create_table(
                Table::create()
                    .table(TeacherProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::EmployeeNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::Qualification)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(TeacherProfiles::Department).string().null())
                    .col(ColumnDef::new(TeacherProfiles::Phone).string().null())
                    .col(
                        ColumnDef::new(TeacherProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherProfiles::Table, TeacherProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::TeacherId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Classes::ClassName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classes::Description).text().null())
                    .col(ColumnDef::new(Classes::DeletedAt).big_integer().null())
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::SubjectName).string().not_null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::ExamName).string().not_null())
                    .col(ColumnDef::new(Exams::ExamDate).string().not_null())
                    .col(ColumnDef::new(Exams::MaxMarks).double().not_null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Marks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Marks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Marks::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Marks::ExamId).big_integer().not_null())
                    .col(ColumnDef::new(Marks::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Marks::Score).double().not_null())
                    .col(ColumnDef::new(Marks::Remarks).text().null())
                    .col(ColumnDef::new(Marks::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Marks::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Marks::Table, Marks::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Marks::Table, Marks::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Marks::Table, Marks::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤表
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::ClassId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Attendance::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendance::Date).string().not_null())
                    .col(ColumnDef::new(Attendance::Status).string().not_null())
                    .col(
                        ColumnDef::new(Attendance::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendance::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建公告表
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Announcements::AuthorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Announcements::ClassId).big_integer().null())
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(ColumnDef::new(Announcements::Content).text().not_null())
                    .col(
                        ColumnDef::new(Announcements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Announcements::Table, Announcements::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Announcements::Table, Announcements::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Notifications::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::NotificationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Content).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::ReferenceType)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::ReferenceId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩报告表
        manager
            .create_table(
                Table::create()
                    .table(PerformanceReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PerformanceReports::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReports::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReports::ExamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReports::AverageScore)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReports::TotalScore)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PerformanceReports::Rank).integer().null())
                    .col(ColumnDef::new(PerformanceReports::Remarks).text().null())
                    .col(
                        ColumnDef::new(PerformanceReports::GeneratedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReports::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PerformanceReports::Table, PerformanceReports::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PerformanceReports::Table, PerformanceReports::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文件表
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Files::DownloadToken)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Files::OriginalName).string().not_null())
                    .col(ColumnDef::new(Files::StoredName).string().not_null())
                    .col(ColumnDef::new(Files::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Files::FileType).string().not_null())
                    .col(ColumnDef::new(Files::UploadedBy).big_integer().not_null())
                    .col(ColumnDef::new(Files::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Files::Table, Files::UploadedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 用户表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // 班级表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_teacher_id")
                    .table(Classes::Table)
                    .col(Classes::TeacherId)
                    .to_owned(),
            )
            .await?;

        // 选课表唯一索引: 同一学生不可重复进入同一班级
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_enrollments_class_student")
                    .table(Enrollments::Table)
                    .col(Enrollments::ClassId)
                    .col(Enrollments::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 科目表唯一索引: 班级内科目名唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_subjects_class_name")
                    .table(Subjects::Table)
                    .col(Subjects::ClassId)
                    .col(Subjects::SubjectName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 成绩表唯一索引: 学生+考试+科目 仅一条记录, upsert 依赖此约束
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_marks_student_exam_subject")
                    .table(Marks::Table)
                    .col(Marks::StudentId)
                    .col(Marks::ExamId)
                    .col(Marks::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 考勤表唯一索引: 班级+学生+日期 仅一条记录, upsert 依赖此约束
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_attendance_class_student_date")
                    .table(Attendance::Table)
                    .col(Attendance::ClassId)
                    .col(Attendance::StudentId)
                    .col(Attendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 成绩报告唯一索引: 学生+考试 仅一份报告, 重新生成时覆盖
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_reports_student_exam")
                    .table(PerformanceReports::Table)
                    .col(PerformanceReports::StudentId)
                    .col(PerformanceReports::ExamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 通知表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_class_date")
                    .table(Attendance::Table)
                    .col(Attendance::ClassId)
                    .col(Attendance::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PerformanceReports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Marks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    AvatarUrl,
    ProfileComplete,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    #[sea_orm(iden = "student_profiles")]
    Table,
    Id,
    UserId,
    AdmissionNo,
    GuardianName,
    GuardianPhone,
    DateOfBirth,
    Address,
    ClassId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TeacherProfiles {
    #[sea_orm(iden = "teacher_profiles")]
    Table,
    Id,
    UserId,
    EmployeeNo,
    Qualification,
    Department,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    TeacherId,
    ClassName,
    Description,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    ClassId,
    StudentId,
    EnrolledAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    ClassId,
    TeacherId,
    SubjectName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    ClassId,
    ExamName,
    ExamDate,
    MaxMarks,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Marks {
    #[sea_orm(iden = "marks")]
    Table,
    Id,
    StudentId,
    ExamId,
    SubjectId,
    Score,
    Remarks,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Attendance {
    #[sea_orm(iden = "attendance")]
    Table,
    Id,
    ClassId,
    StudentId,
    Date,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Announcements {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    AuthorId,
    ClassId,
    Title,
    Content,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    UserId,
    NotificationType,
    Title,
    Content,
    ReferenceType,
    ReferenceId,
    IsRead,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PerformanceReports {
    #[sea_orm(iden = "performance_reports")]
    Table,
    Id,
    StudentId,
    ExamId,
    AverageScore,
    TotalScore,
    Rank,
    Remarks,
    GeneratedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Files {
    #[sea_orm(iden = "files")]
    Table,
    Id,
    DownloadToken,
    OriginalName,
    StoredName,
    FileSize,
    FileType,
    UploadedBy,
    CreatedAt,
}
