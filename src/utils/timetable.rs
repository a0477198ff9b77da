//! 排课时间解析与冲突判定
//!
//! 时间段用当天分钟数表示，周次表达式形如 "1-8,10,12-16"。
//! 两个时间段冲突当且仅当：同一天、周次有交集、且 `a.end > b.start && a.start < b.end`。

use std::collections::BTreeSet;
use std::fmt;

/// 一个区间最多跨越的周数（含首尾共 31 周）
pub const MAX_WEEK_SPAN: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    InvalidDay(i32),
    InvalidTime(String),
    StartNotBeforeEnd,
    InvalidWeeks(String),
    EmptyWeeks,
}

impl fmt::Display for TimetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimetableError::InvalidDay(day) => write!(f, "星期取值无效: {day}，应为 1-7"),
            TimetableError::InvalidTime(t) => write!(f, "时间格式错误: '{t}'，应为 HH:MM"),
            TimetableError::StartNotBeforeEnd => write!(f, "开始时间必须早于结束时间"),
            TimetableError::InvalidWeeks(w) => write!(f, "周数格式无效: '{w}'"),
            TimetableError::EmptyWeeks => write!(f, "周数不能为空"),
        }
    }
}

impl std::error::Error for TimetableError {}

/// 解析 "HH:MM" 为当天分钟数
pub fn parse_clock(value: &str) -> Result<u16, TimetableError> {
    let invalid = || TimetableError::InvalidTime(value.to_string());
    let (h, m) = value.trim().split_once(':').ok_or_else(invalid)?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return Err(invalid());
    }
    let hour: u16 = h.parse().map_err(|_| invalid())?;
    let minute: u16 = m.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok(hour * 60 + minute)
}

fn parse_week_number(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

/// 解析一个片段："a" 或 "a-b"；反向区间自动交换
fn parse_week_part(part: &str) -> Option<(u32, u32)> {
    match part.split_once('-') {
        Some((a, b)) => {
            let (a, b) = (parse_week_number(a)?, parse_week_number(b)?);
            Some(if a <= b { (a, b) } else { (b, a) })
        }
        None => parse_week_number(part).map(|n| (n, n)),
    }
}

/// 严格解析周次表达式，用于校验用户输入
pub fn parse_weeks(expr: &str) -> Result<BTreeSet<u32>, TimetableError> {
    if expr.trim().is_empty() {
        return Err(TimetableError::EmptyWeeks);
    }
    let mut weeks = BTreeSet::new();
    for part in expr.split(',') {
        let (start, end) =
            parse_week_part(part).ok_or_else(|| TimetableError::InvalidWeeks(expr.to_string()))?;
        if end > start + MAX_WEEK_SPAN {
            return Err(TimetableError::InvalidWeeks(expr.to_string()));
        }
        weeks.extend(start..=end);
    }
    Ok(weeks)
}

/// 宽松解析：忽略无法识别的片段，超长区间截断
pub fn parse_weeks_lenient(expr: &str) -> BTreeSet<u32> {
    expr.split(',')
        .filter_map(parse_week_part)
        .flat_map(|(start, end)| start..=end.min(start + MAX_WEEK_SPAN))
        .collect()
}

/// 已校验的时间段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub day_of_week: i32,
    pub start: u16,
    pub end: u16,
    pub weeks: BTreeSet<u32>,
}

impl TimeSlot {
    pub fn parse(
        day_of_week: i32,
        start_time: &str,
        end_time: &str,
        weeks: &str,
    ) -> Result<Self, TimetableError> {
        if !(1..=7).contains(&day_of_week) {
            return Err(TimetableError::InvalidDay(day_of_week));
        }
        let start = parse_clock(start_time)?;
        let end = parse_clock(end_time)?;
        if start >= end {
            return Err(TimetableError::StartNotBeforeEnd);
        }
        Ok(Self {
            day_of_week,
            start,
            end,
            weeks: parse_weeks(weeks)?,
        })
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day_of_week == other.day_of_week
            && !self.weeks.is_disjoint(&other.weeks)
            && self.end > other.start
            && self.start < other.end
    }

    /// 与数据库中已存在的排课比较；已存数据无法解析时保守地视为冲突
    pub fn conflicts_with_stored(
        &self,
        day_of_week: i32,
        start_time: &str,
        end_time: &str,
        weeks: &str,
    ) -> bool {
        if day_of_week != self.day_of_week {
            return false;
        }
        let (Ok(start), Ok(end)) = (parse_clock(start_time), parse_clock(end_time)) else {
            return true;
        };
        let stored_weeks = parse_weeks_lenient(weeks);
        if stored_weeks.is_empty() {
            return true;
        }
        !self.weeks.is_disjoint(&stored_weeks) && self.end > start && self.start < end
    }
}

pub fn day_name(day_of_week: i32) -> &'static str {
    match day_of_week {
        1 => "周一",
        2 => "周二",
        3 => "周三",
        4 => "周四",
        5 => "周五",
        6 => "周六",
        7 => "周日",
        _ => "未知",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: i32, start: &str, end: &str, weeks: &str) -> TimeSlot {
        TimeSlot::parse(day, start, end, weeks).unwrap()
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("08:00"), Ok(480));
        assert_eq!(parse_clock("8:05"), Ok(485));
        assert_eq!(parse_clock("23:59"), Ok(1439));
        assert!(parse_clock("24:00").is_err());
        assert!(parse_clock("12:60").is_err());
        assert!(parse_clock("1200").is_err());
        assert!(parse_clock("ab:cd").is_err());
    }

    #[test]
    fn test_parse_weeks_ranges_and_singles() {
        let weeks = parse_weeks("1-3,5,7-8").unwrap();
        assert_eq!(weeks.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 5, 7, 8]);
    }

    #[test]
    fn test_parse_weeks_reversed_range_swapped() {
        let weeks = parse_weeks("5-3").unwrap();
        assert_eq!(weeks.into_iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_parse_weeks_rejects_bad_input() {
        assert_eq!(parse_weeks(""), Err(TimetableError::EmptyWeeks));
        assert!(parse_weeks("1-x").is_err());
        assert!(parse_weeks("0").is_err());
        assert!(parse_weeks("1,,3").is_err());
        assert!(parse_weeks("1-40").is_err());
        assert!(parse_weeks("1-31").is_ok());
    }

    #[test]
    fn test_parse_weeks_lenient() {
        let weeks = parse_weeks_lenient("1-2,abc,4");
        assert_eq!(weeks.into_iter().collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(parse_weeks_lenient("1-100").len(), 31);
        assert!(parse_weeks_lenient("x").is_empty());
    }

    #[test]
    fn test_slot_validation() {
        assert_eq!(
            TimeSlot::parse(0, "08:00", "09:00", "1"),
            Err(TimetableError::InvalidDay(0))
        );
        assert_eq!(
            TimeSlot::parse(1, "10:00", "10:00", "1"),
            Err(TimetableError::StartNotBeforeEnd)
        );
    }

    #[test]
    fn test_overlap_requires_same_day_weeks_and_time() {
        let a = slot(1, "08:00", "09:40", "1-16");
        assert!(a.overlaps(&slot(1, "09:00", "10:00", "16-18")));
        // 首尾相接不算冲突
        assert!(!a.overlaps(&slot(1, "09:40", "11:00", "1-16")));
        assert!(!a.overlaps(&slot(2, "08:00", "09:40", "1-16")));
        assert!(!a.overlaps(&slot(1, "08:00", "09:40", "17-18")));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = slot(3, "13:30", "15:10", "1-8");
        let b = slot(3, "14:00", "14:45", "8,10");
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_conflicts_with_stored_is_conservative() {
        let a = slot(1, "08:00", "09:40", "1-16");
        assert!(a.conflicts_with_stored(1, "8am", "09:00", "1-16"));
        assert!(a.conflicts_with_stored(1, "10:00", "11:00", "???"));
        assert!(!a.conflicts_with_stored(2, "8am", "09:00", "1-16"));
        assert!(!a.conflicts_with_stored(1, "10:00", "11:00", "1-16"));
        assert!(a.conflicts_with_stored(1, "09:00", "11:00", "16"));
    }
}
