use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use crate::middlewares::RequireJWT;
use crate::models::marks::requests::MarkQueryParams;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::reports::requests::{GenerateReportsRequest, ReportDraft};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::ReportService;

/// 按 (班级, 考试) 生成成绩报告
///
/// 对每个有成绩的学生汇总该次考试的全部科目分数，按总分降序做
/// 密集名次（同分同名次，名次连续），重复生成时覆盖既有报告行。
pub async fn handle_generate_reports(
    service: &ReportService,
    generate_request: GenerateReportsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let caller = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 班级与考试必须存在且互相对应
    let class = match storage.get_class_by_id(generate_request.class_id).await {
        Ok(Some(class)) if !class.is_deleted() => class,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    };

    if caller.role != UserRole::Admin && class.teacher_id != caller.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有班级教师或管理员可以生成成绩报告",
        )));
    }

    let exam = match storage.get_exam_by_id(generate_request.exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "考试不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考试失败: {e}"),
                )),
            );
        }
    };

    if exam.class_id != class.id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "考试不属于该班级",
        )));
    }

    // 该次考试的全量成绩，按学生聚合
    let marks = match storage
        .list_marks(MarkQueryParams {
            student_id: None,
            exam_id: Some(exam.id),
            subject_id: None,
        })
        .await
    {
        Ok(marks) => marks,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportGenerationFailed,
                    format!("查询成绩失败: {e}"),
                )),
            );
        }
    };

    if marks.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ReportGenerationFailed,
            "该次考试还没有成绩记录",
        )));
    }

    let mut tallies: HashMap<i64, (f64, i64)> = HashMap::new();
    for mark in &marks {
        let entry = tallies.entry(mark.student_id).or_insert((0.0, 0));
        entry.0 += mark.score;
        entry.1 += 1;
    }

    let mut drafts: Vec<ReportDraft> = tallies
        .into_iter()
        .map(|(student_id, (total, count))| ReportDraft {
            student_id,
            exam_id: exam.id,
            average_score: total / count as f64,
            total_score: total,
            rank: None,
            remarks: None,
            generated_by: caller.id,
        })
        .collect();

    // 总分降序的密集名次
    drafts.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut rank = 0i64;
    let mut last_total: Option<f64> = None;
    for draft in drafts.iter_mut() {
        if last_total != Some(draft.total_score) {
            rank += 1;
            last_total = Some(draft.total_score);
        }
        draft.rank = Some(rank);
    }

    let student_ids: Vec<i64> = drafts.iter().map(|d| d.student_id).collect();

    let written = match storage.upsert_performance_reports(drafts).await {
        Ok(written) => written,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportGenerationFailed,
                    format!("写入成绩报告失败: {e}"),
                )),
            );
        }
    };

    // 通知学生报告已生成，失败只记录
    let notifications: Vec<CreateNotificationRequest> = student_ids
        .into_iter()
        .map(|student_id| CreateNotificationRequest {
            user_id: student_id,
            notification_type: "report".to_string(),
            title: format!("{} 成绩报告已发布", exam.exam_name),
            content: format!("{} 的成绩报告已生成，请查看", exam.exam_name),
            reference_type: Some("exam".to_string()),
            reference_id: Some(exam.id),
        })
        .collect();
    if let Err(e) = storage.create_notifications(notifications).await {
        tracing::error!("Report notification fan-out failed for exam {}: {}", exam.id, e);
    }

    tracing::info!(
        "Generated {} performance reports for class {} exam {}",
        written,
        class.id,
        exam.id
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(written, "成绩报告生成成功")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(student_id: i64, total: f64) -> ReportDraft {
        ReportDraft {
            student_id,
            exam_id: 1,
            average_score: total,
            total_score: total,
            rank: None,
            remarks: None,
            generated_by: 1,
        }
    }

    // 与 handler 内相同的密集名次逻辑
    fn dense_rank(drafts: &mut [ReportDraft]) {
        drafts.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut rank = 0i64;
        let mut last_total: Option<f64> = None;
        for d in drafts.iter_mut() {
            if last_total != Some(d.total_score) {
                rank += 1;
                last_total = Some(d.total_score);
            }
            d.rank = Some(rank);
        }
    }

    #[test]
    fn test_dense_rank_with_ties() {
        let mut drafts = vec![draft(1, 90.0), draft(2, 95.0), draft(3, 90.0), draft(4, 80.0)];
        dense_rank(&mut drafts);

        let ranks: Vec<(i64, i64)> = drafts
            .iter()
            .map(|d| (d.student_id, d.rank.unwrap()))
            .collect();
        assert_eq!(ranks[0], (2, 1));
        // 同分共享名次，后续名次不跳号
        assert_eq!(drafts[1].rank, Some(2));
        assert_eq!(drafts[2].rank, Some(2));
        assert_eq!(drafts[3].rank, Some(3));
    }

    #[test]
    fn test_dense_rank_single_student() {
        let mut drafts = vec![draft(7, 42.0)];
        dense_rank(&mut drafts);
        assert_eq!(drafts[0].rank, Some(1));
    }
}
