use chrono::NaiveDate;

use crate::timepoint::DateLike;

use super::{Calendar, CalendarError};

//
// date arithmetic
//
impl Calendar {
    /// Roll the given date forward to the nearest business day.
    ///
    /// The date itself is returned if it is a business day.
    /// Time-of-day of a timestamp is kept.
    ///
    /// # Errors
    /// - [`CalendarError::NoBizday`]: the calendar has no working days and no later extra working date
    /// - [`CalendarError::OutOfRange`]: the walk leaves the supported range of dates
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use qbizcal::calendar::Calendar;
    ///
    /// let ymd = |y: i32, m: u32, d: u32| {
    ///     NaiveDate::from_ymd_opt(y, m, d).unwrap()
    /// };
    ///
    /// let cal = Calendar::builder().with_holidays(["2013-01-01"]).build().unwrap();
    ///
    /// assert_eq!(cal.roll_forward(ymd(2013, 1, 1)), Ok(ymd(2013, 1, 2)));
    /// assert_eq!(cal.roll_forward(ymd(2013, 1, 5)), Ok(ymd(2013, 1, 7)));
    /// assert_eq!(cal.roll_forward(ymd(2013, 1, 7)), Ok(ymd(2013, 1, 7)));
    /// ```
    pub fn roll_forward<D: DateLike>(&self, date: D) -> Result<D, CalendarError> {
        let from = date.to_naive_date();
        let to = self._find_bizday(from, true)?;
        _shift(date, from, to)
    }

    /// Roll the given date backward to the nearest business day.
    ///
    /// The date itself is returned if it is a business day.
    /// Time-of-day of a timestamp is kept.
    ///
    /// # Errors
    /// - [`CalendarError::NoBizday`]: the calendar has no working days and no earlier extra working date
    /// - [`CalendarError::OutOfRange`]: the walk leaves the supported range of dates
    pub fn roll_backward<D: DateLike>(&self, date: D) -> Result<D, CalendarError> {
        let from = date.to_naive_date();
        let to = self._find_bizday(from, false)?;
        _shift(date, from, to)
    }

    /// The first business day strictly after the given date.
    ///
    /// Same as rolling forward from the next calendar day.
    pub fn next_bizday<D: DateLike>(&self, date: D) -> Result<D, CalendarError> {
        self._move_bizdays(date, 1, true)
    }

    /// The last business day strictly before the given date.
    ///
    /// Same as rolling backward from the previous calendar day.
    pub fn prev_bizday<D: DateLike>(&self, date: D) -> Result<D, CalendarError> {
        self._move_bizdays(date, 1, false)
    }

    /// Move forward by `n` business days.
    ///
    /// The given date itself is never counted, even if it is a business day.
    /// So the result is the `n`-th business day after the given date, or the date
    /// itself when `n == 0`. Negative `n` is the same as [`Calendar::sub_bizdays`] with `-n`.
    ///
    /// # Example
    /// ```
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use qbizcal::calendar::Calendar;
    ///
    /// let ymd = |y: i32, m: u32, d: u32| {
    ///     NaiveDate::from_ymd_opt(y, m, d).unwrap()
    /// };
    ///
    /// let cal = Calendar::builder().with_holidays(["2013-01-01"]).build().unwrap();
    ///
    /// assert_eq!(cal.add_bizdays(ymd(2012, 12, 31), 2), Ok(ymd(2013, 1, 3)));
    /// assert_eq!(cal.add_bizdays(ymd(2013, 1, 4), 1), Ok(ymd(2013, 1, 7)));
    /// assert_eq!(cal.add_bizdays(ymd(2013, 1, 2), -1), Ok(ymd(2012, 12, 31)));
    ///
    /// let tp: NaiveDateTime = "2013-01-04T16:00:00".parse().unwrap();
    /// let exp: NaiveDateTime = "2013-01-07T16:00:00".parse().unwrap();
    /// assert_eq!(cal.add_bizdays(tp, 1), Ok(exp));
    /// ```
    pub fn add_bizdays<D: DateLike>(&self, date: D, n: i64) -> Result<D, CalendarError> {
        self._move_bizdays(date, n.unsigned_abs(), n >= 0)
    }

    /// Move backward by `n` business days.
    ///
    /// The given date itself is never counted, even if it is a business day.
    /// Negative `n` is the same as [`Calendar::add_bizdays`] with `-n`.
    pub fn sub_bizdays<D: DateLike>(&self, date: D, n: i64) -> Result<D, CalendarError> {
        self._move_bizdays(date, n.unsigned_abs(), n < 0)
    }

    fn _move_bizdays<D: DateLike>(
        &self,
        date: D,
        n: u64,
        forward: bool,
    ) -> Result<D, CalendarError> {
        let from = date.to_naive_date();
        let step = if forward { 1 } else { -1 };
        let mut cur = from;
        for _ in 0..n {
            let start = cur
                .shift_days(step)
                .ok_or(CalendarError::OutOfRange { date: cur })?;
            cur = self._find_bizday(start, forward)?;
        }
        _shift(date, from, cur)
    }

    /// The nearest business day from `start` (inclusive) in the given direction.
    fn _find_bizday(&self, start: NaiveDate, forward: bool) -> Result<NaiveDate, CalendarError> {
        if self.working_days().is_empty() {
            // only extra working dates can be business days
            let extras = self.extra_working_dates();
            let found = if forward {
                extras.get(extras.partition_point(|d| *d < start)).copied()
            } else {
                let pos = extras.partition_point(|d| *d <= start);
                pos.checked_sub(1).map(|i| extras[i])
            };
            return found.ok_or(CalendarError::NoBizday { date: start });
        }

        let mut iter = self.iter_bizdays(start);
        let found = if forward {
            iter.next()
        } else {
            iter.next_back()
        };
        found.ok_or(CalendarError::OutOfRange { date: start })
    }
}

/// Move `date` by the distance between `from` and `to`.
#[inline]
fn _shift<D: DateLike>(date: D, from: NaiveDate, to: NaiveDate) -> Result<D, CalendarError> {
    date.shift_days((to - from).num_days())
        .ok_or(CalendarError::OutOfRange { date: from })
}
