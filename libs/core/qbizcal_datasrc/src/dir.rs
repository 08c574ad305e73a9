use std::path::{Path, PathBuf};

use anyhow::Context;
use qbizcal::calendar::CalendarDefinition;

use crate::CalendarDefSrc;

// -----------------------------------------------------------------------------
// DirSrc
// -----------------------------------------------------------------------------
/// Calendar definitions stored as `<name>.yml`, `<name>.yaml` or `<name>.json`
/// files directly under a directory.
///
/// When files with the same name and different extensions exist,
/// the first one in the order above is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirSrc {
    root: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Yaml,
    Json,
}

const EXTENSIONS: [(&str, FileFormat); 3] = [
    ("yml", FileFormat::Yaml),
    ("yaml", FileFormat::Yaml),
    ("json", FileFormat::Json),
];

impl DirSrc {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the calendars found in the directory, sorted and deduplicated.
    pub fn names(&self) -> anyhow::Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.root)
            .with_context(|| format!("Reading calendar directory {:?}", self.root))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let (Some(stem), Some(ext)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            if _is_valid_name(stem) && EXTENSIONS.iter().any(|(e, _)| *e == ext) {
                names.push(stem.to_owned());
            }
        }
        names.sort_unstable();
        names.dedup();
        Ok(names)
    }

    fn _find_file(&self, name: &str) -> Option<(PathBuf, FileFormat)> {
        EXTENSIONS.iter().find_map(|(ext, fmt)| {
            let path = self.root.join(format!("{name}.{ext}"));
            path.is_file().then_some((path, *fmt))
        })
    }
}

impl CalendarDefSrc for DirSrc {
    fn get_definition(&self, name: &str) -> anyhow::Result<Option<CalendarDefinition>> {
        anyhow::ensure!(
            _is_valid_name(name),
            "Invalid calendar name '{name}'. Use ASCII letters, digits, '_' or '-'"
        );
        let Some((path, fmt)) = self._find_file(name) else {
            log::debug!("Calendar '{name}' is not found in {:?}", self.root);
            return Ok(None);
        };
        log::debug!("Loading calendar '{name}' from {:?}", path);
        let def = _load(&path, fmt).with_context(|| format!("Loading calendar file {path:?}"))?;
        Ok(Some(def))
    }
}

fn _is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn _load(path: &Path, fmt: FileFormat) -> anyhow::Result<CalendarDefinition> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let def = match fmt {
        FileFormat::Yaml => serde_yaml::from_reader(reader)?,
        FileFormat::Json => serde_json::from_reader(reader)?,
    };
    Ok(def)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};
    use rstest::rstest;

    use crate::CalendarSrc;

    use super::*;

    fn testdata() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
    }

    fn src() -> DirSrc {
        DirSrc::new(testdata().join("calendars"))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_names() {
        let names = src().names().unwrap();

        assert_eq!(
            names,
            vec!["bacs", "conflict", "saturday_shift", "unknown_key", "weekdays"]
        );
    }

    #[test]
    fn test_names_missing_dir() {
        let src = DirSrc::new(testdata().join("missing"));

        assert!(src.names().is_err());
        assert_eq!(src.get_definition("bacs").unwrap(), None);
    }

    #[test]
    fn test_get_yaml() {
        let cal = src().get_calendar("bacs").unwrap();

        assert_eq!(cal.name(), Some("bacs"));
        assert_eq!(cal.holidays().len(), 8);
        assert!(cal.is_holiday(ymd(2013, 1, 1)));
        assert!(cal.is_holiday(ymd(2013, 12, 26)));
        assert_eq!(cal.roll_forward(ymd(2013, 1, 1)), Ok(ymd(2013, 1, 2)));
    }

    #[test]
    fn test_get_yaml_long_extension() {
        let cal = src().get_calendar("saturday_shift").unwrap();

        assert_eq!(
            cal.working_days(),
            &[
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Sun
            ]
        );
        assert!(cal.is_bizday(ymd(2013, 1, 5)));
        assert!(!cal.is_bizday(ymd(2013, 1, 4)));
    }

    #[test]
    fn test_get_json() {
        let cal = src().get_calendar("weekdays").unwrap();

        assert_eq!(cal.working_days().len(), 5);
        assert!(cal.holidays().is_empty());
    }

    #[test]
    fn test_get_missing() {
        assert_eq!(src().get_definition("xxx").unwrap(), None);
        assert_eq!(
            src().get_calendar("xxx").unwrap_err().to_string(),
            "No such calendar 'xxx'"
        );
    }

    #[test]
    fn test_get_unknown_key() {
        let err = src().get_definition("unknown_key").unwrap_err();

        assert!(err.to_string().starts_with("Loading calendar file"), "{err}");
        let cause = format!("{:#}", err);
        assert!(cause.contains("unknown field `holiday`"), "{cause}");
    }

    #[test]
    fn test_get_conflict() {
        let def = src().get_definition("conflict").unwrap();
        assert!(def.is_some());

        let err = src().get_calendar("conflict").unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Building calendar 'conflict': Holidays cannot be extra working dates"
        );
    }

    #[rstest]
    #[case("")]
    #[case("../calendars/bacs")]
    #[case("bacs.yml")]
    #[case("ba cs")]
    #[case("/etc/passwd")]
    fn test_invalid_name(#[case] name: &str) {
        let err = src().get_definition(name).unwrap_err();

        assert!(err.to_string().starts_with("Invalid calendar name"), "{err}");
    }
}
