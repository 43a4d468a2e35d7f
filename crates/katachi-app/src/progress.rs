use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Accuracy a word needs before it counts as mastered
pub const MASTERY_THRESHOLD: f64 = 0.8;

/// Words need more answers than this before they can rank as weak
pub const WEAK_MIN_SEEN: u32 = 2;

pub const WEAKEST_COUNT: usize = 5;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct WordStats {
    pub seen: u32,
    pub correct: u32,
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl WordStats {
    pub fn rate(&self) -> f64 {
        if self.seen == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.seen)
        }
    }

    pub fn is_mastered(&self) -> bool {
        self.seen > 0 && self.rate() > MASTERY_THRESHOLD
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalStats {
    pub total_answered: u64,
    pub total_correct: u64,
}

/// Learner state kept between runs
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Progress {
    pub daily_streak: u32,
    pub last_login_date: Option<NaiveDate>,
    pub global: GlobalStats,
    pub word_stats: BTreeMap<String, WordStats>,
}

impl Progress {
    /// Count one answer for `word_id`
    pub fn record(&mut self, word_id: &str, correct: bool, now: DateTime<Utc>) {
        self.global.total_answered += 1;
        if correct {
            self.global.total_correct += 1;
        }

        let stats = self.word_stats.entry(word_id.to_string()).or_default();
        stats.seen += 1;
        if correct {
            stats.correct += 1;
        }
        stats.last_reviewed = Some(now);
    }

    /// Extend the streak on the day after the last login, restart it after a gap
    pub fn check_daily_streak(&mut self, today: NaiveDate) {
        if self.last_login_date == Some(today) {
            return;
        }

        let yesterday = today.checked_sub_days(Days::new(1));
        if self.last_login_date.is_some() && self.last_login_date == yesterday {
            self.daily_streak += 1;
        } else {
            self.daily_streak = 1;
        }
        self.last_login_date = Some(today);
    }

    /// Daily streak check against the UTC calendar day of `now`
    pub fn check_in(&mut self, now: DateTime<Utc>) {
        self.check_daily_streak(now.date_naive());
    }

    pub fn report(&self) -> Report {
        let accuracy = if self.global.total_answered > 0 {
            (self.global.total_correct as f64 / self.global.total_answered as f64 * 100.0).round() as u32
        } else {
            0
        };

        let mut weakest: Vec<WeakWord> = self
            .word_stats
            .iter()
            .filter(|(_, s)| s.seen > WEAK_MIN_SEEN)
            .map(|(id, s)| WeakWord {
                id: id.clone(),
                seen: s.seen,
                correct: s.correct,
                rate: s.rate(),
            })
            .collect();
        weakest.sort_by(|a, b| a.rate.total_cmp(&b.rate));
        weakest.truncate(WEAKEST_COUNT);

        Report {
            daily_streak: self.daily_streak,
            total_answered: self.global.total_answered,
            accuracy,
            mastered: self.word_stats.values().filter(|s| s.is_mastered()).count(),
            weakest,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeakWord {
    pub id: String,
    pub seen: u32,
    pub correct: u32,
    pub rate: f64,
}

/// Aggregate view over the whole answer history
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub daily_streak: u32,
    pub total_answered: u64,
    /// Whole percent
    pub accuracy: u32,
    pub mastered: usize,
    pub weakest: Vec<WeakWord>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.total_answered == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_streak() {
        let mut progress = Progress::default();

        progress.check_daily_streak(date(2026, 3, 1));
        assert_eq!(progress.daily_streak, 1);

        progress.check_daily_streak(date(2026, 3, 1));
        assert_eq!(progress.daily_streak, 1);

        progress.check_daily_streak(date(2026, 3, 2));
        assert_eq!(progress.daily_streak, 2);

        progress.check_daily_streak(date(2026, 3, 5));
        assert_eq!(progress.daily_streak, 1);
        assert_eq!(progress.last_login_date, Some(date(2026, 3, 5)));
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let mut progress = Progress {
            daily_streak: 4,
            last_login_date: Some(date(2026, 2, 28)),
            ..Progress::default()
        };
        progress.check_daily_streak(date(2026, 3, 1));
        assert_eq!(progress.daily_streak, 5);
    }

    #[test]
    fn test_check_in_uses_utc_day() {
        let mut progress = Progress {
            daily_streak: 2,
            last_login_date: Some(date(2026, 3, 1)),
            ..Progress::default()
        };
        // 23:30 on the 1st in UTC+9 is still the 1st in UTC
        let late = DateTime::parse_from_rfc3339("2026-03-01T23:30:00+09:00").unwrap();
        progress.check_in(late.with_timezone(&Utc));
        assert_eq!(progress.daily_streak, 2);

        let next = DateTime::parse_from_rfc3339("2026-03-02T00:10:00Z").unwrap();
        progress.check_in(next.with_timezone(&Utc));
        assert_eq!(progress.daily_streak, 3);
        assert_eq!(progress.last_login_date, Some(date(2026, 3, 2)));
    }

    #[test]
    fn test_record_updates_word_and_global() {
        let mut progress = Progress::default();
        let now = Utc::now();
        progress.record("v_kaku", true, now);
        progress.record("v_kaku", false, now);
        progress.record("v_iku", true, now);

        assert_eq!(progress.global, GlobalStats { total_answered: 3, total_correct: 2 });
        let kaku = &progress.word_stats["v_kaku"];
        assert_eq!((kaku.seen, kaku.correct), (2, 1));
        assert_eq!(kaku.last_reviewed, Some(now));
    }

    #[test]
    fn test_report() {
        let mut progress = Progress::default();
        let now = Utc::now();
        let history: &[(&str, &[bool])] = &[
            ("v_kaku", &[true, true, true, true, true]),
            ("v_iku", &[false, false, true]),
            ("v_noru", &[true, false, false, false]),
            ("a_ii", &[false, false]),
            ("v_miru", &[true, true, false]),
        ];
        for (id, answers) in history {
            for correct in *answers {
                progress.record(id, *correct, now);
            }
        }

        let report = progress.report();
        assert_eq!(report.total_answered, 17);
        assert_eq!(report.accuracy, 53);
        assert_eq!(report.mastered, 1);

        // a_ii has only two answers and is left out
        let ids: Vec<_> = report.weakest.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["v_noru", "v_iku", "v_miru", "v_kaku"]);
    }

    #[test]
    fn test_empty_report() {
        let report = Progress::default().report();
        assert!(report.is_empty());
        assert_eq!(report.accuracy, 0);
        assert!(report.weakest.is_empty());
    }

    #[test]
    fn test_partial_json_backfills_defaults() {
        let progress: Progress = serde_json::from_str(r#"{"daily_streak": 3}"#).unwrap();
        assert_eq!(progress.daily_streak, 3);
        assert!(progress.word_stats.is_empty());
    }
}
