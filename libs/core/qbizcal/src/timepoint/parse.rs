use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::calendar::CalendarError;

// -----------------------------------------------------------------------------
// DateToken
// -----------------------------------------------------------------------------
/// Values accepted as holidays and extra working dates.
///
/// Strings are parsed by [`parse_date`]. Timestamps are truncated to their date.
pub trait DateToken {
    fn to_date(&self) -> Result<NaiveDate, CalendarError>;
}

impl DateToken for NaiveDate {
    #[inline]
    fn to_date(&self) -> Result<NaiveDate, CalendarError> {
        Ok(*self)
    }
}

impl DateToken for NaiveDateTime {
    #[inline]
    fn to_date(&self) -> Result<NaiveDate, CalendarError> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> DateToken for DateTime<Tz> {
    #[inline]
    fn to_date(&self) -> Result<NaiveDate, CalendarError> {
        Ok(self.date_naive())
    }
}

impl DateToken for str {
    #[inline]
    fn to_date(&self) -> Result<NaiveDate, CalendarError> {
        parse_date(self)
    }
}

impl DateToken for String {
    #[inline]
    fn to_date(&self) -> Result<NaiveDate, CalendarError> {
        parse_date(self)
    }
}

impl<T: DateToken + ?Sized> DateToken for &T {
    #[inline]
    fn to_date(&self) -> Result<NaiveDate, CalendarError> {
        (**self).to_date()
    }
}

// -----------------------------------------------------------------------------
// parse_date
// -----------------------------------------------------------------------------
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%B %d %Y",
    "%A %d %B %Y",
    "%A %B %d %Y",
];

/// Parse a human readable date or timestamp and take its date.
///
/// Accepted forms are ISO dates (`2013-01-01`, `2013/01/01`, `20130101`),
/// ISO / RFC3339 timestamps (`2013-01-01T09:30:00`, `2013-01-01 09:30:00+09:00`)
/// and English dates with full or abbreviated month names and optional weekday
/// and ordinal suffix (`January 1st, 2013`, `1 Jan 2013`, `Tue, 1 January 2013`).
/// Timestamps with an offset are taken at their local date.
///
/// ```
/// use chrono::NaiveDate;
/// use qbizcal::timepoint::parse_date;
///
/// let exp = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
/// assert_eq!(parse_date("2013-01-01"), Ok(exp));
/// assert_eq!(parse_date("January 1st, 2013"), Ok(exp));
/// assert_eq!(parse_date("2013-01-01T23:59:59+09:00"), Ok(exp));
/// assert!(parse_date("01/02/2013").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    let s = s.trim();
    _parse_date(s).ok_or_else(|| CalendarError::DateParse {
        token: s.to_owned(),
    })
}

fn _parse_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        let y = s[..4].parse().ok()?;
        let m = s[4..6].parse().ok()?;
        let d = s[6..].parse().ok()?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }
    if let Ok(tp) = DateTime::parse_from_rfc3339(s) {
        return Some(tp.date_naive());
    }
    if let Ok(tp) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(tp.date_naive());
    }
    if let Some(tp) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(tp.date());
    }

    let words = _normalize_words(s);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&words, fmt).ok())
}

/// Drop commas and ordinal suffixes, collapse whitespace.
/// `Tuesday, January 1st 2013` becomes `Tuesday January 1 2013`.
fn _normalize_words(s: &str) -> String {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let digits = w.bytes().take_while(|b| b.is_ascii_digit()).count();
            let suffix = w[digits..].to_ascii_lowercase();
            if digits > 0 && matches!(suffix.as_str(), "st" | "nd" | "rd" | "th") {
                &w[..digits]
            } else {
                w
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
