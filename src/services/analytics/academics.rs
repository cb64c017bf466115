use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use crate::config::AppConfig;
use crate::models::ApiResponse;
use crate::models::analytics::responses::{AcademicsResponse, ClassAcademics, TeacherWorkload};
use crate::models::classes::entities::Class;
use crate::models::subjects::requests::SubjectQueryParams;

use super::AnalyticsService;

/// 学业分析
///
/// 全量成绩在内存中按班级归并（百分比制），均分低于阈值的班级按
/// 升序列为薄弱班级；教师工作量由班级与科目两张表的内存映射拼出。
/// 聚合查询失败时对应段落降级为空，不影响其余段落。
pub async fn handle_academics(
    service: &AnalyticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let threshold = AppConfig::get().analytics.weak_class_threshold;

    let classes: Vec<Class> = match storage.list_all_classes().await {
        Ok(classes) => classes,
        Err(e) => {
            tracing::warn!("Class list aggregate failed: {}", e);
            Vec::new()
        }
    };
    let class_names: HashMap<i64, String> = classes
        .iter()
        .map(|c| (c.id, c.class_name.clone()))
        .collect();

    // 班级 -> (百分比总和, 条数)
    let mut class_tallies: HashMap<i64, (f64, i64)> = HashMap::new();
    match storage.list_marks_with_exams().await {
        Ok(rows) => {
            for (mark, exam) in rows {
                if exam.max_marks <= 0.0 {
                    continue;
                }
                let percentage = mark.score / exam.max_marks * 100.0;
                let entry = class_tallies.entry(exam.class_id).or_insert((0.0, 0));
                entry.0 += percentage;
                entry.1 += 1;
            }
        }
        Err(e) => {
            tracing::warn!("Mark aggregate failed: {}", e);
        }
    }

    let mut class_averages: Vec<ClassAcademics> = class_tallies
        .into_iter()
        .filter_map(|(class_id, (sum, count))| {
            class_names.get(&class_id).map(|name| ClassAcademics {
                class_id,
                class_name: name.clone(),
                average_percentage: (sum / count as f64 * 100.0).round() / 100.0,
                mark_count: count,
            })
        })
        .collect();
    class_averages.sort_by_key(|c| c.class_id);

    // 薄弱班级按均分升序，最差的排最前
    let mut weak_classes: Vec<ClassAcademics> = class_averages
        .iter()
        .filter(|c| c.average_percentage < threshold)
        .cloned()
        .collect();
    weak_classes.sort_by(|a, b| {
        a.average_percentage
            .partial_cmp(&b.average_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // 教师 -> 班级数 / 科目数
    let mut class_counts: HashMap<i64, i64> = HashMap::new();
    for class in &classes {
        *class_counts.entry(class.teacher_id).or_insert(0) += 1;
    }

    let mut subject_counts: HashMap<i64, i64> = HashMap::new();
    match storage
        .list_subjects(SubjectQueryParams {
            class_id: None,
            teacher_id: None,
        })
        .await
    {
        Ok(subjects) => {
            for subject in subjects {
                *subject_counts.entry(subject.teacher_id).or_insert(0) += 1;
            }
        }
        Err(e) => {
            tracing::warn!("Subject aggregate failed: {}", e);
        }
    }

    let teacher_ids: Vec<i64> = class_counts
        .keys()
        .chain(subject_counts.keys())
        .copied()
        .collect::<std::collections::HashSet<_>>()
        .into_iter()
        .collect();

    let mut teacher_workloads: Vec<TeacherWorkload> = match storage
        .get_users_by_ids(&teacher_ids)
        .await
    {
        Ok(teachers) => teachers
            .into_iter()
            .map(|t| TeacherWorkload {
                teacher_id: t.id,
                username: t.username,
                display_name: t.display_name,
                class_count: class_counts.get(&t.id).copied().unwrap_or(0),
                subject_count: subject_counts.get(&t.id).copied().unwrap_or(0),
            })
            .collect(),
        Err(e) => {
            tracing::warn!("Teacher lookup aggregate failed: {}", e);
            Vec::new()
        }
    };
    teacher_workloads.sort_by_key(|t| t.teacher_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AcademicsResponse {
            class_averages,
            weak_classes,
            weak_class_threshold: threshold,
            teacher_workloads,
        },
        "Academics retrieved successfully",
    )))
}
