use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use qbizcal::{calendar::CalendarError, timepoint::parse_date};

// -----------------------------------------------------------------------------
// DateArg
// -----------------------------------------------------------------------------
/// Date given on the command line.
///
/// Timestamps keep their time of day (and offset) so that results are printed
/// in the same form as the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateArg {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Zoned(DateTime<FixedOffset>),
}

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl DateArg {
    pub fn date(&self) -> NaiveDate {
        match self {
            DateArg::Date(d) => *d,
            DateArg::DateTime(d) => d.date(),
            DateArg::Zoned(d) => d.date_naive(),
        }
    }
}

impl FromStr for DateArg {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(d) = DateTime::parse_from_rfc3339(s) {
            return Ok(DateArg::Zoned(d));
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(d) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(DateArg::DateTime(d));
            }
        }
        parse_date(s).map(DateArg::Date)
    }
}

impl Display for DateArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateArg::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DateArg::DateTime(d) => write!(f, "{}", d.format("%Y-%m-%dT%H:%M:%S")),
            DateArg::Zoned(d) => write!(f, "{}", d.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2013-01-01", DateArg::Date(ymd(2013, 1, 1)))]
    #[case(" January 1st, 2013 ", DateArg::Date(ymd(2013, 1, 1)))]
    #[case(
        "2013-01-01T09:30:00",
        DateArg::DateTime(ymd(2013, 1, 1).and_hms_opt(9, 30, 0).unwrap())
    )]
    #[case(
        "2013-01-01 09:30:00",
        DateArg::DateTime(ymd(2013, 1, 1).and_hms_opt(9, 30, 0).unwrap())
    )]
    #[case(
        "2013-01-01T09:30:00+09:00",
        DateArg::Zoned(DateTime::parse_from_rfc3339("2013-01-01T09:30:00+09:00").unwrap())
    )]
    fn test_from_str(#[case] s: &str, #[case] exp: DateArg) {
        assert_eq!(s.parse::<DateArg>(), Ok(exp));
        assert_eq!(exp.date(), ymd(2013, 1, 1));
    }

    #[test]
    fn test_from_str_ng() {
        assert_eq!(
            "2013-13-01".parse::<DateArg>(),
            Err(CalendarError::DateParse {
                token: "2013-13-01".to_owned()
            })
        );
    }

    #[rstest]
    #[case("2013-01-01", "2013-01-01")]
    #[case("20130101", "2013-01-01")]
    #[case("2013-01-01 09:30:00", "2013-01-01T09:30:00")]
    #[case("2013-01-01T09:30:00+09:00", "2013-01-01T09:30:00+09:00")]
    fn test_display(#[case] s: &str, #[case] exp: &str) {
        assert_eq!(s.parse::<DateArg>().unwrap().to_string(), exp);
    }
}
