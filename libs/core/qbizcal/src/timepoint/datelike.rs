use chrono::{
    DateTime, Days, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone,
};

// -----------------------------------------------------------------------------
// DateLike
// -----------------------------------------------------------------------------
/// Values which have a calendar date, that is, pure dates and timestamps.
///
/// Business day classification only looks at [`DateLike::to_naive_date`].
/// Arithmetic moves values with [`DateLike::shift_days`] so that the time-of-day
/// of a timestamp survives.
///
/// ```
/// use chrono::{NaiveDate, NaiveDateTime};
/// use qbizcal::timepoint::DateLike;
///
/// let tp: NaiveDateTime = "2013-01-01T09:30:00".parse().unwrap();
/// assert_eq!(tp.to_naive_date(), NaiveDate::from_ymd_opt(2013, 1, 1).unwrap());
///
/// let shifted = tp.shift_days(3).unwrap();
/// assert_eq!(shifted.to_string(), "2013-01-04 09:30:00");
/// ```
pub trait DateLike: Sized {
    /// The date component. Time-of-day is dropped.
    fn to_naive_date(&self) -> NaiveDate;

    /// Move by the given number of days, keeping the time-of-day.
    ///
    /// This returns [None] when the result is not representable.
    fn shift_days(self, days: i64) -> Option<Self>;
}

impl DateLike for NaiveDate {
    #[inline]
    fn to_naive_date(&self) -> NaiveDate {
        *self
    }

    #[inline]
    fn shift_days(self, days: i64) -> Option<Self> {
        if days < 0 {
            self.checked_sub_days(Days::new(days.unsigned_abs()))
        } else {
            self.checked_add_days(Days::new(days as u64))
        }
    }
}

impl DateLike for NaiveDateTime {
    #[inline]
    fn to_naive_date(&self) -> NaiveDate {
        self.date()
    }

    #[inline]
    fn shift_days(self, days: i64) -> Option<Self> {
        if days < 0 {
            self.checked_sub_days(Days::new(days.unsigned_abs()))
        } else {
            self.checked_add_days(Days::new(days as u64))
        }
    }
}

/// Timestamps with a time zone are classified by their local date and
/// move by calendar days of their local time.
///
/// When the local time is repeated on the target date, the earlier one is used.
/// When it is skipped (e.g. 02:30 on a spring-forward date), it is pushed forward
/// by the length of the gap, keeping the target date.
impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    #[inline]
    fn to_naive_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn shift_days(self, days: i64) -> Option<Self> {
        let local = self.naive_local().shift_days(days)?;
        let tz = self.timezone();
        match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => Some(dt),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => {
                // offset in effect before the gap
                let before = local.checked_sub_signed(TimeDelta::try_days(1)?)?;
                let offset = tz.offset_from_local_datetime(&before).earliest()?.fix();
                let offset = TimeDelta::try_seconds(offset.local_minus_utc().into())?;
                let utc = local.checked_sub_signed(offset)?;
                let dt = tz.from_utc_datetime(&utc);
                (dt.date_naive() == local.date()).then_some(dt)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, Utc};
    use rstest::rstest;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(ymd(2013, 1, 1), 0, Some(ymd(2013, 1, 1)))]
    #[case(ymd(2013, 1, 1), 3, Some(ymd(2013, 1, 4)))]
    #[case(ymd(2013, 1, 1), -1, Some(ymd(2012, 12, 31)))]
    #[case(ymd(2012, 2, 28), 1, Some(ymd(2012, 2, 29)))]
    #[case(NaiveDate::MAX, 1, None)]
    #[case(NaiveDate::MIN, -1, None)]
    fn test_shift_naive_date(#[case] d: NaiveDate, #[case] n: i64, #[case] exp: Option<NaiveDate>) {
        assert_eq!(d.shift_days(n), exp);
    }

    #[test]
    fn test_naive_datetime_keeps_time() {
        let t = NaiveTime::from_hms_opt(17, 45, 12).unwrap();
        let tp = ymd(2013, 1, 5).and_time(t);

        let fwd = tp.shift_days(2).unwrap();
        let bwd = tp.shift_days(-5).unwrap();

        assert_eq!(tp.to_naive_date(), ymd(2013, 1, 5));
        assert_eq!(fwd, ymd(2013, 1, 7).and_time(t));
        assert_eq!(bwd, ymd(2012, 12, 31).and_time(t));
    }

    #[test]
    fn test_datetime_uses_local_date() {
        let tp = chrono_tz::Asia::Tokyo
            .with_ymd_and_hms(2013, 1, 7, 8, 0, 0)
            .unwrap();

        // 2013-01-06T23:00:00Z in UTC
        assert_eq!(tp.to_naive_date(), ymd(2013, 1, 7));
        assert_eq!(tp.with_timezone(&Utc).to_naive_date(), ymd(2013, 1, 6));
    }

    #[test]
    fn test_datetime_steps_by_local_days() {
        let tp = Utc.with_ymd_and_hms(2013, 1, 4, 23, 59, 59).unwrap();

        let shifted = tp.shift_days(3).unwrap();

        assert_eq!(shifted, Utc.with_ymd_and_hms(2013, 1, 7, 23, 59, 59).unwrap());
        assert_eq!(shifted.to_naive_date(), ymd(2013, 1, 7));
    }

    #[rstest]
    // fall back on 2013-11-03
    #[case((2013, 11, 1, 0, 30), 3, (2013, 11, 4, 0, 30))]
    #[case((2013, 11, 4, 0, 30), -3, (2013, 11, 1, 0, 30))]
    #[case((2013, 11, 2, 23, 30), 1, (2013, 11, 3, 23, 30))]
    // spring forward on 2013-03-10
    #[case((2013, 3, 8, 0, 30), 3, (2013, 3, 11, 0, 30))]
    #[case((2013, 3, 11, 0, 30), -3, (2013, 3, 8, 0, 30))]
    #[case((2013, 3, 9, 23, 30), 1, (2013, 3, 10, 23, 30))]
    fn test_datetime_keeps_local_time_across_dst(
        #[case] tp: (i32, u32, u32, u32, u32),
        #[case] n: i64,
        #[case] exp: (i32, u32, u32, u32, u32),
    ) {
        let ny = chrono_tz::America::New_York;
        let tp = ny.with_ymd_and_hms(tp.0, tp.1, tp.2, tp.3, tp.4, 0).unwrap();
        let exp = ny
            .with_ymd_and_hms(exp.0, exp.1, exp.2, exp.3, exp.4, 0)
            .unwrap();

        let shifted = tp.shift_days(n).unwrap();

        assert_eq!(shifted, exp);
        assert_eq!(shifted.naive_local().time(), tp.naive_local().time());
    }

    #[test]
    fn test_datetime_repeated_local_time() {
        let ny = chrono_tz::America::New_York;
        let tp = ny.with_ymd_and_hms(2013, 11, 2, 1, 30, 0).unwrap();

        let shifted = tp.shift_days(1).unwrap();

        // 01:30 happens twice on 2013-11-03, the first one is in EDT
        assert_eq!(shifted.to_naive_date(), ymd(2013, 11, 3));
        assert_eq!(shifted.naive_local().time(), tp.naive_local().time());
        assert_eq!(shifted.offset().fix().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_datetime_skipped_local_time() {
        let ny = chrono_tz::America::New_York;
        let tp = ny.with_ymd_and_hms(2013, 3, 9, 2, 30, 0).unwrap();

        let shifted = tp.shift_days(1).unwrap();

        // 02:30 does not exist on 2013-03-10, pushed forward by an hour
        assert_eq!(shifted.to_naive_date(), ymd(2013, 3, 10));
        assert_eq!(shifted.naive_local().time(), NaiveTime::from_hms_opt(3, 30, 0).unwrap());
        assert_eq!(shifted.offset().fix().local_minus_utc(), -4 * 3600);

        let back = shifted.shift_days(-1).unwrap();
        assert_eq!(back.to_naive_date(), ymd(2013, 3, 9));
    }
}
