use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::timepoint::{DateLike, DateToken};

use super::{
    parse_weekday, weekday_token, CalendarDefinition, CalendarError, DEFAULT_WORKING_DAYS,
};

// -----------------------------------------------------------------------------
// _CalendarData
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct _CalendarData {
    name: Option<String>,

    /// Weekdays which are business days unless they are holidays.
    /// Sorted from Monday.
    working_days: Vec<Weekday>,

    /// Sorted, without duplicates.
    holidays: Vec<NaiveDate>,

    /// Business days which are not working days. Sorted, without duplicates.
    /// Disjoint with `holidays` and never on `working_days`.
    extra_working_dates: Vec<NaiveDate>,
}

//
// ctor
//
impl _CalendarData {
    fn new(
        name: Option<String>,
        mut working_days: Vec<Weekday>,
        mut holidays: Vec<NaiveDate>,
        mut extra_working_dates: Vec<NaiveDate>,
    ) -> Result<Self, CalendarError> {
        working_days.sort_by_key(|wd| wd.number_from_monday());
        working_days.dedup();
        holidays.sort();
        holidays.dedup();
        extra_working_dates.sort();
        extra_working_dates.dedup();

        if let Some(&date) = extra_working_dates
            .iter()
            .find(|d| holidays.binary_search(d).is_ok())
        {
            return Err(CalendarError::HolidayOnExtraWorkingDate { date });
        }
        if let Some(&date) = extra_working_dates
            .iter()
            .find(|d| working_days.contains(&d.weekday()))
        {
            return Err(CalendarError::ExtraWorkingDateOnWorkingDay { date });
        }

        Ok(Self {
            name,
            working_days,
            holidays,
            extra_working_dates,
        })
    }
}

// -----------------------------------------------------------------------------
// Calendar
// -----------------------------------------------------------------------------
/// Business day calendar of a jurisdiction
///
/// # Overview
/// A calendar consists of the following data.
/// - working days: weekdays which are business days as default. Typically, Monday to Friday.
/// - holidays: dates which are not business days.
/// - extra working dates: dates which are business days although they are not working days.
///
/// A date is a business day if it is a working day and not a holiday,
/// or if it is an extra working date.
///
/// ```
/// use chrono::NaiveDate;
/// use qbizcal::calendar::Calendar;
///
/// let ymd = |y: i32, m: u32, d: u32| {
///     NaiveDate::from_ymd_opt(y, m, d).unwrap()
/// };
///
/// let cal = Calendar::builder()
///     .with_working_days(["mon", "tue", "wed", "thu", "fri"])
///     .with_holidays(["2013-01-01"])
///     .with_extra_working_dates(["2013-01-05"])
///     .build()
///     .unwrap();
///
/// assert!(!cal.is_bizday(ymd(2013, 1, 1)));  // holiday
/// assert!(cal.is_bizday(ymd(2013, 1, 2)));   // Wednesday
/// assert!(cal.is_bizday(ymd(2013, 1, 5)));   // extra working Saturday
/// assert!(!cal.is_bizday(ymd(2013, 1, 6)));  // Sunday
/// ```
///
/// # Immutability
/// Calendars never change after construction. All inputs are normalized and
/// cross-checked at once by [`CalendarBuilder::build`] or [`Calendar::new`]:
/// - holidays and extra working dates must be disjoint
/// - extra working dates must not fall on working days
///
/// # Lightweight
/// [`Calendar`] contains some vectors, it is rarely to modify them and we need clone them frequently.
/// So, the internal data is wrapped by immutable [`Arc`] and the object is lightweight.
/// It is also safe to share a calendar among threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Calendar(Arc<_CalendarData>);

//
// ser/de
//
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct _SerdeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    working_days: Option<Vec<String>>,
    #[serde(default)]
    holidays: Vec<String>,
    #[serde(default)]
    extra_working_dates: Vec<String>,
}

impl serde::Serialize for Calendar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let def = self.to_definition();
        let data = _SerdeData {
            name: self.0.name.clone(),
            working_days: def.working_days,
            holidays: def.holidays,
            extra_working_dates: def.extra_working_dates,
        };
        serde::Serialize::serialize(&data, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Calendar {
    fn deserialize<D>(deserializer: D) -> Result<Calendar, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <_SerdeData as serde::Deserialize>::deserialize(deserializer)?;
        let def = CalendarDefinition {
            working_days: data.working_days,
            holidays: data.holidays,
            extra_working_dates: data.extra_working_dates,
        };
        Calendar::from_definition(data.name.as_deref(), &def).map_err(serde::de::Error::custom)
    }
}

//
// construction
//
impl Default for Calendar {
    /// Unnamed calendar with Monday to Friday as working days.
    fn default() -> Self {
        Self::new(None, DEFAULT_WORKING_DAYS.to_vec(), vec![], vec![])
            .expect("calendar without holidays and extra working dates is always valid")
    }
}

impl Calendar {
    /// Create a calendar from normalized values.
    ///
    /// Duplicates and order of the given values do not matter.
    ///
    /// # Errors
    /// - [`CalendarError::HolidayOnExtraWorkingDate`]: a date is both a holiday and an extra working date
    /// - [`CalendarError::ExtraWorkingDateOnWorkingDay`]: an extra working date falls on a working day
    pub fn new(
        name: Option<String>,
        working_days: Vec<Weekday>,
        holidays: Vec<NaiveDate>,
        extra_working_dates: Vec<NaiveDate>,
    ) -> Result<Self, CalendarError> {
        _CalendarData::new(name, working_days, holidays, extra_working_dates)
            .map(Arc::new)
            .map(Self)
    }

    /// Get [CalendarBuilder] instance.
    #[inline]
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::new()
    }

    /// Create a calendar from raw data of a calendar source.
    pub fn from_definition(
        name: Option<&str>,
        def: &CalendarDefinition,
    ) -> Result<Self, CalendarError> {
        let builder = CalendarBuilder {
            name: name.map(str::to_owned),
            ..Default::default()
        };
        let builder = match &def.working_days {
            Some(wds) => builder.with_working_days(wds),
            None => builder,
        };
        builder
            .with_holidays(&def.holidays)
            .with_extra_working_dates(&def.extra_working_dates)
            .build()
    }

    /// Raw data of this calendar with canonical tokens.
    ///
    /// Working days are always written out, dates are ISO 8601 strings.
    pub fn to_definition(&self) -> CalendarDefinition {
        CalendarDefinition {
            working_days: Some(
                self.working_days()
                    .iter()
                    .map(|wd| weekday_token(*wd).to_owned())
                    .collect(),
            ),
            holidays: self.holidays().iter().map(ToString::to_string).collect(),
            extra_working_dates: self
                .extra_working_dates()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

//
// accessors
//
impl Calendar {
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Weekdays treated as business days as default. Sorted from Monday.
    #[inline]
    pub fn working_days(&self) -> &[Weekday] {
        &self.0.working_days
    }

    /// Sorted holidays.
    #[inline]
    pub fn holidays(&self) -> &[NaiveDate] {
        &self.0.holidays
    }

    /// Sorted extra working dates.
    #[inline]
    pub fn extra_working_dates(&self) -> &[NaiveDate] {
        &self.0.extra_working_dates
    }
}

//
// classification
//
impl Calendar {
    /// Check if the weekday of the given date is a working day.
    ///
    /// Holidays and extra working dates are not taken into account.
    #[inline]
    pub fn is_working_day<D: DateLike>(&self, date: D) -> bool {
        self.0
            .working_days
            .contains(&date.to_naive_date().weekday())
    }

    /// Check if the given date is a holiday.
    #[inline]
    pub fn is_holiday<D: DateLike>(&self, date: D) -> bool {
        self.0
            .holidays
            .binary_search(&date.to_naive_date())
            .is_ok()
    }

    /// Check if the given date is an extra working date.
    #[inline]
    pub fn is_extra_working_date<D: DateLike>(&self, date: D) -> bool {
        self.0
            .extra_working_dates
            .binary_search(&date.to_naive_date())
            .is_ok()
    }

    /// Check if the given date is a business day.
    ///
    /// Time-of-day of timestamps is ignored.
    #[inline]
    pub fn is_bizday<D: DateLike>(&self, date: D) -> bool {
        let date = date.to_naive_date();
        (self.is_working_day(date) && !self.is_holiday(date)) || self.is_extra_working_date(date)
    }

    /// Iterator over the business days from the given date.
    ///
    /// The first date of the iterator is the given date if it is a business day.
    /// Iterating with `next` walks forward and with `next_back` walks backward from `start`.
    /// Both share one cursor, so use an iterator in one direction only:
    /// after `next` returned `start`, `next_back` returns `start` + 1 day if it is a business day.
    /// This iterator ends when iterated date is out of the supported range of [`NaiveDate`].
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use qbizcal::calendar::Calendar;
    ///
    /// let ymd = |y: i32, m: u32, d: u32| {
    ///    NaiveDate::from_ymd_opt(y, m, d).unwrap()
    /// };
    ///
    /// let cal = Calendar::builder()
    ///     .with_holidays(["2013-01-01"])
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut iter = cal.iter_bizdays(ymd(2012, 12, 31));
    /// assert_eq!(iter.next(), Some(ymd(2012, 12, 31)));
    /// assert_eq!(iter.next(), Some(ymd(2013, 1, 2)));
    /// assert_eq!(iter.next(), Some(ymd(2013, 1, 3)));
    ///
    /// let mut iter = cal.iter_bizdays(ymd(2013, 1, 6)).rev();
    /// assert_eq!(iter.next(), Some(ymd(2013, 1, 4)));
    /// assert_eq!(iter.next(), Some(ymd(2013, 1, 3)));
    /// ```
    #[inline]
    pub fn iter_bizdays(
        &self,
        start: NaiveDate,
    ) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        DateIterator { cur: Some(start) }.filter(move |d| self.is_bizday(*d))
    }
}

// -----------------------------------------------------------------------------
// DateIterator
// -----------------------------------------------------------------------------
struct DateIterator {
    cur: Option<NaiveDate>,
}

impl Iterator for DateIterator {
    type Item = NaiveDate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let ret = self.cur?;
        self.cur = ret.succ_opt();
        Some(ret)
    }
}
impl DoubleEndedIterator for DateIterator {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let ret = self.cur?;
        self.cur = ret.pred_opt();
        Some(ret)
    }
}

// -----------------------------------------------------------------------------
// CalendarBuilder
// -----------------------------------------------------------------------------
/// Builder of a calendar
///
/// All fields are optional.
/// - name: no name
/// - working days: Monday to Friday
/// - holidays: none
/// - extra working dates: none
///
/// Weekday tokens are case-insensitive full names or three letter abbreviations.
/// Dates are anything implementing [`DateToken`], e.g. [`NaiveDate`] or a string like `2013-01-01`.
///
/// Tokens are normalized when they are given, but errors are reported by
/// [`CalendarBuilder::build`] in the order of working days, holidays and extra working dates,
/// followed by the consistency checks between them.
///
/// # Example
/// ```
/// use chrono::Weekday;
/// use qbizcal::calendar::{Calendar, CalendarError};
///
/// let cal = Calendar::builder()
///     .with_name("target")
///     .with_working_days(["Monday", "tue", "WED", "thursday", "fri"])
///     .with_holidays(["2018-01-01", "March 30th, 2018"])
///     .build()
///     .unwrap();
/// assert_eq!(cal.working_days().len(), 5);
///
/// let res = Calendar::builder()
///     .with_holidays(["2018-01-06"])
///     .with_extra_working_dates(["2018-01-06"])
///     .build();
/// assert!(res.unwrap_err().is_configuration_conflict());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarBuilder {
    name: Option<String>,
    working_days: Option<Result<Vec<Weekday>, CalendarError>>,
    holidays: Option<Result<Vec<NaiveDate>, CalendarError>>,
    extra_working_dates: Option<Result<Vec<NaiveDate>, CalendarError>>,
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the calendar.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Set the working days from weekday tokens like `mon` or `Monday`.
    pub fn with_working_days<I, S>(self, working_days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let working_days = working_days
            .into_iter()
            .map(|s| parse_weekday(s.as_ref()))
            .collect();
        Self {
            working_days: Some(working_days),
            ..self
        }
    }

    /// Set the working days from [`Weekday`] values.
    pub fn with_working_weekdays<I>(self, working_days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        Self {
            working_days: Some(Ok(working_days.into_iter().collect())),
            ..self
        }
    }

    /// Set the holidays. Time-of-day of timestamps is dropped.
    pub fn with_holidays<I, T>(self, holidays: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: DateToken,
    {
        let holidays = holidays.into_iter().map(|t| t.to_date()).collect();
        Self {
            holidays: Some(holidays),
            ..self
        }
    }

    /// Set the extra working dates. Time-of-day of timestamps is dropped.
    pub fn with_extra_working_dates<I, T>(self, extra_working_dates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: DateToken,
    {
        let extra_working_dates = extra_working_dates
            .into_iter()
            .map(|t| t.to_date())
            .collect();
        Self {
            extra_working_dates: Some(extra_working_dates),
            ..self
        }
    }

    /// Build a new calendar from the given data.
    ///
    /// # Errors
    /// - [`CalendarError::InvalidDay`]: a weekday token is not recognized
    /// - [`CalendarError::DateParse`]: a date token can not be parsed
    /// - [`CalendarError::HolidayOnExtraWorkingDate`]: a date is both a holiday and an extra working date
    /// - [`CalendarError::ExtraWorkingDateOnWorkingDay`]: an extra working date falls on a working day
    pub fn build(self) -> Result<Calendar, CalendarError> {
        let working_days = self
            .working_days
            .unwrap_or_else(|| Ok(DEFAULT_WORKING_DAYS.to_vec()))?;
        let holidays = self.holidays.unwrap_or_else(|| Ok(vec![]))?;
        let extra_working_dates = self.extra_working_dates.unwrap_or_else(|| Ok(vec![]))?;
        Calendar::new(self.name, working_days, holidays, extra_working_dates)
    }
}
