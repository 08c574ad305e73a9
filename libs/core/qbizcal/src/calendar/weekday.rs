use chrono::Weekday;

use super::CalendarError;

/// Working days of a calendar when none are given.
pub const DEFAULT_WORKING_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Parse a weekday token.
///
/// Tokens are case-insensitive and either the full English name or
/// its three letter abbreviation.
///
/// ```
/// use chrono::Weekday;
/// use qbizcal::calendar::parse_weekday;
///
/// assert_eq!(parse_weekday("Monday"), Ok(Weekday::Mon));
/// assert_eq!(parse_weekday("TUE"), Ok(Weekday::Tue));
/// assert!(parse_weekday("mond").is_err());
/// ```
pub fn parse_weekday(token: &str) -> Result<Weekday, CalendarError> {
    token
        .parse::<Weekday>()
        .map_err(|_| CalendarError::InvalidDay {
            token: token.to_owned(),
        })
}

/// Canonical token of a weekday, the lowercase three letter abbreviation.
#[inline]
pub fn weekday_token(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}
