use super::SeaOrmStorage;
use crate::entity::prelude::{
    StudentProfileActiveModel, StudentProfiles, TeacherProfileActiveModel, TeacherProfiles,
};
use crate::entity::{student_profiles, teacher_profiles};
use crate::errors::{CampusError, Result};
use crate::models::profiles::{
    entities::{StudentProfile, TeacherProfile},
    requests::{SubmitStudentProfileRequest, SubmitTeacherProfileRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 获取学生档案
    pub async fn get_student_profile_impl(&self, user_id: i64) -> Result<Option<StudentProfile>> {
        let result = StudentProfiles::find()
            .filter(student_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student_profile()))
    }

    /// 获取教师档案
    pub async fn get_teacher_profile_impl(&self, user_id: i64) -> Result<Option<TeacherProfile>> {
        let result = TeacherProfiles::find()
            .filter(teacher_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教师档案失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher_profile()))
    }

    /// 提交学生档案，已存在则更新，成功后标记用户档案完成
    pub async fn submit_student_profile_impl(
        &self,
        user_id: i64,
        profile: SubmitStudentProfileRequest,
    ) -> Result<StudentProfile> {
        let now = chrono::Utc::now().timestamp();

        let existing = StudentProfiles::find()
            .filter(student_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生档案失败: {e}")))?;

        let saved = match existing {
            Some(model) => {
                let mut active: StudentProfileActiveModel = model.into();
                active.admission_no = Set(profile.admission_no);
                active.guardian_name = Set(profile.guardian_name);
                active.guardian_phone = Set(profile.guardian_phone);
                active.date_of_birth = Set(profile.date_of_birth);
                active.address = Set(profile.address);
                active.class_id = Set(profile.class_id);
                active.updated_at = Set(now);
                active.update(&self.db).await.map_err(|e| {
                    CampusError::database_operation(format!("更新学生档案失败: {e}"))
                })?
            }
            None => {
                let active = StudentProfileActiveModel {
                    user_id: Set(user_id),
                    admission_no: Set(profile.admission_no),
                    guardian_name: Set(profile.guardian_name),
                    guardian_phone: Set(profile.guardian_phone),
                    date_of_birth: Set(profile.date_of_birth),
                    address: Set(profile.address),
                    class_id: Set(profile.class_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active.insert(&self.db).await.map_err(|e| {
                    CampusError::database_operation(format!("创建学生档案失败: {e}"))
                })?
            }
        };

        self.set_profile_complete(user_id).await?;

        Ok(saved.into_student_profile())
    }

    /// 提交教师档案，已存在则更新，成功后标记用户档案完成
    pub async fn submit_teacher_profile_impl(
        &self,
        user_id: i64,
        profile: SubmitTeacherProfileRequest,
    ) -> Result<TeacherProfile> {
        let now = chrono::Utc::now().timestamp();

        let existing = TeacherProfiles::find()
            .filter(teacher_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教师档案失败: {e}")))?;

        let saved = match existing {
            Some(model) => {
                let mut active: TeacherProfileActiveModel = model.into();
                active.employee_no = Set(profile.employee_no);
                active.qualification = Set(profile.qualification);
                active.department = Set(profile.department);
                active.phone = Set(profile.phone);
                active.updated_at = Set(now);
                active.update(&self.db).await.map_err(|e| {
                    CampusError::database_operation(format!("更新教师档案失败: {e}"))
                })?
            }
            None => {
                let active = TeacherProfileActiveModel {
                    user_id: Set(user_id),
                    employee_no: Set(profile.employee_no),
                    qualification: Set(profile.qualification),
                    department: Set(profile.department),
                    phone: Set(profile.phone),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active.insert(&self.db).await.map_err(|e| {
                    CampusError::database_operation(format!("创建教师档案失败: {e}"))
                })?
            }
        };

        self.set_profile_complete(user_id).await?;

        Ok(saved.into_teacher_profile())
    }
}
