//! 成绩计算：总评、绩点、等级与 GPA

use crate::models::grades::entities::GradeRecord;
use crate::models::grades::requests::RecordGradeRequest;

pub const PASS_SCORE: f64 = 60.0;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 分数必须是 [0, 100] 内的有限数
pub fn validate_score(name: &str, value: Option<f64>) -> Result<(), String> {
    match value {
        Some(v) if !v.is_finite() || !(0.0..=100.0).contains(&v) => {
            Err(format!("{name} 必须在 0 到 100 之间"))
        }
        _ => Ok(()),
    }
}

/// 总评成绩：显式给出则直接使用，否则由平时与考试成绩按权重计算
pub fn compute_final_score(
    usual: Option<f64>,
    exam: Option<f64>,
    explicit_final: Option<f64>,
    usual_weight: f64,
) -> Option<f64> {
    if let Some(final_score) = explicit_final {
        return Some(round2(final_score));
    }
    match (usual, exam) {
        (Some(u), Some(e)) => Some(round2(u * usual_weight + e * (1.0 - usual_weight))),
        _ => None,
    }
}

/// 五级制字母与绩点
pub fn letter_and_point(final_score: f64) -> (&'static str, f64) {
    match final_score {
        s if s >= 90.0 => ("A", 4.0),
        s if s >= 80.0 => ("B", 3.0),
        s if s >= 70.0 => ("C", 2.0),
        s if s >= PASS_SCORE => ("D", 1.0),
        _ => ("F", 0.0),
    }
}

/// 成绩单等级
pub fn level_label(final_score: Option<f64>) -> &'static str {
    match final_score {
        None => "ungraded",
        Some(s) if s >= 90.0 => "excellent",
        Some(s) if s >= 80.0 => "good",
        Some(s) if s >= 70.0 => "medium",
        Some(s) if s >= PASS_SCORE => "pass",
        Some(_) => "fail",
    }
}

/// 校验录入请求并生成入库记录
pub fn build_grade_record(
    req: &RecordGradeRequest,
    usual_weight: f64,
    recorded_by: i64,
) -> Result<GradeRecord, String> {
    validate_score("平时成绩", req.usual_score)?;
    validate_score("考试成绩", req.exam_score)?;
    validate_score("总评成绩", req.final_score)?;
    if req.usual_score.is_none() && req.exam_score.is_none() && req.final_score.is_none() {
        return Err("至少需要提供一项成绩".to_string());
    }

    let final_score = compute_final_score(
        req.usual_score,
        req.exam_score,
        req.final_score,
        usual_weight,
    );
    let (letter_grade, grade_point) = match final_score {
        Some(score) => {
            let (letter, point) = letter_and_point(score);
            (Some(letter.to_string()), Some(point))
        }
        None => (None, None),
    };

    Ok(GradeRecord {
        usual_score: req.usual_score,
        exam_score: req.exam_score,
        final_score,
        grade_point,
        letter_grade,
        recorded_by: Some(recorded_by),
    })
}

/// 学分绩汇总
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CreditSummary {
    pub gpa: f64,
    pub total_credits: f64,
    pub earned_credits: f64,
    pub graded_courses: u64,
}

/// 输入为 (学分, 总评, 绩点)；未出总评的课程不计入
pub fn summarize_credits<I>(entries: I) -> CreditSummary
where
    I: IntoIterator<Item = (f64, Option<f64>, Option<f64>)>,
{
    let mut weighted = 0.0;
    let mut summary = CreditSummary::default();

    for (credits, final_score, grade_point) in entries {
        let Some(score) = final_score else {
            continue;
        };
        let point = grade_point.unwrap_or_else(|| letter_and_point(score).1);
        summary.graded_courses += 1;
        summary.total_credits += credits;
        weighted += credits * point;
        if score >= PASS_SCORE {
            summary.earned_credits += credits;
        }
    }

    if summary.total_credits > 0.0 {
        summary.gpa = round2(weighted / summary.total_credits);
    }
    summary.total_credits = round2(summary.total_credits);
    summary.earned_credits = round2(summary.earned_credits);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(usual: Option<f64>, exam: Option<f64>, final_score: Option<f64>) -> RecordGradeRequest {
        RecordGradeRequest {
            usual_score: usual,
            exam_score: exam,
            final_score,
        }
    }

    #[test]
    fn test_final_score_weighted() {
        assert_eq!(compute_final_score(Some(80.0), Some(90.0), None, 0.3), Some(87.0));
        assert_eq!(compute_final_score(Some(85.5), Some(77.3), None, 0.3), Some(79.76));
        assert_eq!(compute_final_score(Some(80.0), None, None, 0.3), None);
    }

    #[test]
    fn test_explicit_final_wins() {
        assert_eq!(compute_final_score(Some(10.0), Some(10.0), Some(95.0), 0.3), Some(95.0));
    }

    #[test]
    fn test_letter_bands() {
        assert_eq!(letter_and_point(90.0), ("A", 4.0));
        assert_eq!(letter_and_point(89.99), ("B", 3.0));
        assert_eq!(letter_and_point(70.0), ("C", 2.0));
        assert_eq!(letter_and_point(60.0), ("D", 1.0));
        assert_eq!(letter_and_point(59.9), ("F", 0.0));
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(Some(95.0)), "excellent");
        assert_eq!(level_label(Some(81.0)), "good");
        assert_eq!(level_label(Some(75.0)), "medium");
        assert_eq!(level_label(Some(60.0)), "pass");
        assert_eq!(level_label(Some(12.0)), "fail");
        assert_eq!(level_label(None), "ungraded");
    }

    #[test]
    fn test_build_record_rejects_out_of_range() {
        assert!(build_grade_record(&request(Some(101.0), None, None), 0.3, 1).is_err());
        assert!(build_grade_record(&request(None, Some(-1.0), None), 0.3, 1).is_err());
        assert!(build_grade_record(&request(None, None, Some(f64::NAN)), 0.3, 1).is_err());
        assert!(build_grade_record(&request(None, None, None), 0.3, 1).is_err());
    }

    #[test]
    fn test_build_record_derives_letter() {
        let record = build_grade_record(&request(Some(70.0), Some(60.0), None), 0.3, 7).unwrap();
        assert_eq!(record.final_score, Some(63.0));
        assert_eq!(record.letter_grade.as_deref(), Some("D"));
        assert_eq!(record.grade_point, Some(1.0));
        assert_eq!(record.recorded_by, Some(7));

        let partial = build_grade_record(&request(Some(70.0), None, None), 0.3, 7).unwrap();
        assert_eq!(partial.final_score, None);
        assert_eq!(partial.letter_grade, None);
    }

    #[test]
    fn test_summarize_credits() {
        let summary = summarize_credits(vec![
            (4.0, Some(92.0), Some(4.0)),
            (2.0, Some(55.0), Some(0.0)),
            (3.0, None, None),
        ]);
        assert_eq!(summary.graded_courses, 2);
        assert_eq!(summary.total_credits, 6.0);
        assert_eq!(summary.earned_credits, 4.0);
        assert_eq!(summary.gpa, 2.67);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize_credits(Vec::new());
        assert_eq!(summary, CreditSummary::default());
    }
}
