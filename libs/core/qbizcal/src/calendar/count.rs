use chrono::{Datelike, NaiveDate};

use crate::timepoint::DateLike;

use super::Calendar;

//
// counting
//
impl Calendar {
    /// Count the business days between two dates.
    ///
    /// When `to` is after `from`, this counts the business days in `(from, to]`,
    /// that is, `from` is never counted and `to` is counted if it is a business day.
    /// When `to` is before `from`, the result is `-self.num_bizdays_between(to, from)`,
    /// and it is `0` for the same dates. Only the date components are compared.
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
    /// let cal = Calendar::default();
    ///
    /// let from = ymd(2014, 6, 2); // Mon
    /// let to = ymd(2014, 6, 5); // Thu
    ///
    /// assert_eq!(cal.num_bizdays_between(from, to), 3); // Tue, Wed, Thu
    /// assert_eq!(cal.num_bizdays_between(to, from), -3);
    /// assert_eq!(cal.num_bizdays_between(from, from), 0);
    /// ```
    pub fn num_bizdays_between<D1, D2>(&self, from: D1, to: D2) -> i64
    where
        D1: DateLike,
        D2: DateLike,
    {
        let from = from.to_naive_date();
        let to = to.to_naive_date();
        if from <= to {
            self._num_bizdays_after(from, to)
        } else {
            -self._num_bizdays_after(to, from)
        }
    }

    /// Business days in `(from, to]` where `from <= to`.
    fn _num_bizdays_after(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        // [from, to) moved by one day, without stepping over `to`
        self._num_bizdays_in(from, to) - self.is_bizday(from) as i64 + self.is_bizday(to) as i64
    }

    /// Business days in `[start, end)` where `start <= end`.
    fn _num_bizdays_in(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let working_days = self.working_days();

        let mut sub_wds = 0;
        let mut cur_wd = start.weekday();
        while cur_wd != end.weekday() {
            if working_days.contains(&cur_wd) {
                sub_wds += 1;
            }
            cur_wd = cur_wd.succ();
        }
        let num_wds_in_week = working_days.len() as i64;
        let naive_count = (end - start).num_days() / 7 * num_wds_in_week + sub_wds;

        // holidays on non-working days do not change the count
        let hols = {
            let hols = self.holidays();
            let stt = hols.partition_point(|d| *d < start);
            let end = hols.partition_point(|d| *d < end);
            hols[stt..end]
                .iter()
                .filter(|d| self.is_working_day(**d))
                .count() as i64
        };
        // extra working dates are never working days nor holidays
        let extras = {
            let extras = self.extra_working_dates();
            let stt = extras.partition_point(|d| *d < start);
            let end = extras.partition_point(|d| *d < end);
            (end - stt) as i64
        };

        naive_count - hols + extras
    }
}
