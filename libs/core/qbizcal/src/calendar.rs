mod calendar_impl;
mod count;
mod definition;
mod error;
mod roll;
mod weekday;

pub use calendar_impl::{Calendar, CalendarBuilder};
pub use definition::CalendarDefinition;
pub use error::CalendarError;
pub use weekday::{parse_weekday, weekday_token, DEFAULT_WORKING_DAYS};
