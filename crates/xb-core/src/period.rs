use chrono::{Datelike, Duration, NaiveDate};

/// Reporting window selected from the stats keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

/// Inclusive date range plus its display title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub title: &'static str,
}

impl Period {
    /// Unknown tokens fall through to `Year`. A stale or mistyped
    /// callback still yields a summary instead of an error.
    pub fn from_token(token: &str) -> Self {
        match token {
            "day" => Period::Day,
            "week" => Period::Week,
            "month" => Period::Month,
            _ => Period::Year,
        }
    }

    /// Resolve the window against `today`. Pure: no state between calls.
    pub fn resolve(self, today: NaiveDate) -> PeriodRange {
        match self {
            Period::Day => PeriodRange {
                from: today,
                to: today,
                title: "📅 Kunlik",
            },
            Period::Week => PeriodRange {
                from: today - Duration::days(6),
                to: today,
                title: "🗓 Haftalik (7 kun)",
            },
            Period::Month => PeriodRange {
                from: today.with_day(1).unwrap_or(today),
                to: today,
                title: "🗓 Oylik",
            },
            Period::Year => PeriodRange {
                from: NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
                to: today,
                title: "📆 Yillik",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn day_is_a_single_date() {
        let r = Period::Day.resolve(d(2024, 3, 10));
        assert_eq!((r.from, r.to), (d(2024, 3, 10), d(2024, 3, 10)));
    }

    #[test]
    fn week_is_a_trailing_seven_day_window() {
        let r = Period::Week.resolve(d(2024, 3, 10));
        assert_eq!((r.from, r.to), (d(2024, 3, 4), d(2024, 3, 10)));
        assert_eq!(r.title, "🗓 Haftalik (7 kun)");
    }

    #[test]
    fn week_crosses_month_boundaries() {
        let r = Period::Week.resolve(d(2024, 3, 2));
        assert_eq!(r.from, d(2024, 2, 25));
    }

    #[test]
    fn month_starts_on_the_first() {
        let r = Period::Month.resolve(d(2024, 3, 10));
        assert_eq!((r.from, r.to), (d(2024, 3, 1), d(2024, 3, 10)));
    }

    #[test]
    fn year_starts_on_january_first() {
        let r = Period::Year.resolve(d(2024, 3, 10));
        assert_eq!((r.from, r.to), (d(2024, 1, 1), d(2024, 3, 10)));
    }

    #[test]
    fn unknown_tokens_fall_through_to_year() {
        assert_eq!(Period::from_token("year"), Period::Year);
        assert_eq!(Period::from_token("quarter"), Period::Year);
        assert_eq!(Period::from_token(""), Period::Year);
    }

    #[test]
    fn known_tokens_map_directly() {
        assert_eq!(Period::from_token("day"), Period::Day);
        assert_eq!(Period::from_token("week"), Period::Week);
        assert_eq!(Period::from_token("month"), Period::Month);
    }
}
