use std::path::PathBuf;

use qbizcal::calendar::Calendar;
use qbizcal_datasrc::{CalendarSrc, DirSrc, SrcChain};

// -----------------------------------------------------------------------------
// SrcArgs
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, clap::Args)]
pub struct SrcArgs {
    /// Directories of calendar files, searched in the given order
    #[arg(
        long = "calendar-dir",
        env = "BIZCAL_CALENDAR_DIR",
        value_delimiter = ',',
        required = true
    )]
    pub calendar_dirs: Vec<PathBuf>,
}

impl SrcArgs {
    pub fn dirs(&self) -> impl Iterator<Item = DirSrc> + '_ {
        self.calendar_dirs.iter().map(DirSrc::new)
    }

    pub fn src(&self) -> SrcChain {
        self.dirs().fold(SrcChain::new(), SrcChain::with_src)
    }

    pub fn calendar(&self, name: &str) -> anyhow::Result<Calendar> {
        log::debug!("Looking up '{name}' in {:?}", self.calendar_dirs);
        self.src().get_calendar(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testdata() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../libs/core/qbizcal_datasrc/testdata")
    }

    #[test]
    fn test_calendar() {
        let args = SrcArgs {
            calendar_dirs: vec![testdata().join("overrides"), testdata().join("calendars")],
        };

        assert_eq!(args.calendar("bacs").unwrap().holidays().len(), 1);
        assert_eq!(args.calendar("weekdays").unwrap().name(), Some("weekdays"));
        assert_eq!(
            args.calendar("xxx").unwrap_err().to_string(),
            "No such calendar 'xxx'"
        );
    }
}
