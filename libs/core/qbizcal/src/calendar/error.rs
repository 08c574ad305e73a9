use chrono::NaiveDate;

// -----------------------------------------------------------------------------
// CalendarError
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Hash)]
pub enum CalendarError {
    #[error("Invalid day '{token}'. Use a weekday name or its three letter abbreviation")]
    InvalidDay { token: String },
    #[error("Failed to parse '{token}' as a date")]
    DateParse { token: String },
    #[error("Holidays cannot be extra working dates")]
    HolidayOnExtraWorkingDate { date: NaiveDate },
    #[error("Extra working dates cannot be on working days")]
    ExtraWorkingDateOnWorkingDay { date: NaiveDate },
    #[error("No business day can be reached from {date}")]
    NoBizday { date: NaiveDate },
    #[error("Date arithmetic from {date} leaves the supported range of dates")]
    OutOfRange { date: NaiveDate },
}

impl CalendarError {
    /// Whether this error comes from contradicting holidays, extra working dates
    /// and working days given to a calendar.
    #[inline]
    pub fn is_configuration_conflict(&self) -> bool {
        matches!(
            self,
            CalendarError::HolidayOnExtraWorkingDate { .. }
                | CalendarError::ExtraWorkingDateOnWorkingDay { .. }
        )
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
    #[case(
        CalendarError::HolidayOnExtraWorkingDate { date: ymd(2018, 1, 6) },
        "Holidays cannot be extra working dates",
        true
    )]
    #[case(
        CalendarError::ExtraWorkingDateOnWorkingDay { date: ymd(2018, 1, 8) },
        "Extra working dates cannot be on working days",
        true
    )]
    #[case(
        CalendarError::InvalidDay { token: "notaday".to_owned() },
        "Invalid day 'notaday'. Use a weekday name or its three letter abbreviation",
        false
    )]
    #[case(
        CalendarError::DateParse { token: "foo".to_owned() },
        "Failed to parse 'foo' as a date",
        false
    )]
    fn test_display(#[case] err: CalendarError, #[case] msg: &str, #[case] conflict: bool) {
        assert_eq!(err.to_string(), msg);
        assert_eq!(err.is_configuration_conflict(), conflict);
    }
}
