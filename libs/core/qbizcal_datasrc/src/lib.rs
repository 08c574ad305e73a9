//! Sources of named business-day calendars.
//!
//! [`CalendarDefSrc`] resolves a name to a raw [`CalendarDefinition`](qbizcal::calendar::CalendarDefinition)
//! and every such source is also a [`CalendarSrc`] which builds the validated
//! [`Calendar`](qbizcal::calendar::Calendar).
//!
//! ```no_run
//! use qbizcal_datasrc::{CachedSrc, CalendarSrc, DirSrc, SrcChain};
//!
//! let src = CachedSrc::new(
//!     SrcChain::new()
//!         .with_src(DirSrc::new("./overrides"))
//!         .with_src(DirSrc::new("./calendars")),
//! );
//! let bacs = src.get_calendar("bacs").unwrap();
//! ```
mod cache;
mod chain;
mod data_src;
mod dir;
mod in_memory;

pub use cache::CachedSrc;
pub use chain::SrcChain;
pub use data_src::{CalendarDefSrc, CalendarSrc};
pub use dir::DirSrc;
pub use in_memory::InMemorySrc;
