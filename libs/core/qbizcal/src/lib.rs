//! Business-day calendars.
//!
//! A [`Calendar`](calendar::Calendar) is built from a weekly working-day pattern,
//! holidays and extra working dates, and answers business-day questions:
//! classification of a date, rolling to the nearest business day,
//! business-day offsets and business-day counts.
//!
//! ```
//! use chrono::NaiveDate;
//! use qbizcal::calendar::Calendar;
//!
//! let ymd = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//!
//! let cal = Calendar::builder()
//!     .with_name("bacs")
//!     .with_holidays(["2013-01-01"])
//!     .build()
//!     .unwrap();
//!
//! assert!(!cal.is_bizday(ymd(2013, 1, 1)));
//! assert_eq!(cal.roll_forward(ymd(2013, 1, 1)), Ok(ymd(2013, 1, 2)));
//! assert_eq!(cal.add_bizdays(ymd(2013, 1, 1), 2), Ok(ymd(2013, 1, 3)));
//! // the start date is not counted, so roll it first to count from the next business day
//! let rolled = cal.roll_forward(ymd(2013, 1, 1)).unwrap();
//! assert_eq!(cal.add_bizdays(rolled, 2), Ok(ymd(2013, 1, 4)));
//! assert_eq!(cal.num_bizdays_between(ymd(2013, 1, 1), ymd(2013, 1, 7)), 4);
//! ```
pub mod calendar;
pub mod timepoint;

#[cfg(test)]
use rstest_reuse;
