use std::collections::HashMap;

use qbizcal::calendar::CalendarDefinition;

use crate::CalendarDefSrc;

// -----------------------------------------------------------------------------
// InMemorySrc
// -----------------------------------------------------------------------------
/// Registry of calendar definitions held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySrc {
    defs: HashMap<String, CalendarDefinition>,
}

impl InMemorySrc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, returning the one previously registered under the name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        def: CalendarDefinition,
    ) -> Option<CalendarDefinition> {
        self.defs.insert(name.into(), def)
    }

    pub fn remove(&mut self, name: &str) -> Option<CalendarDefinition> {
        self.defs.remove(name)
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.defs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<K: Into<String>> FromIterator<(K, CalendarDefinition)> for InMemorySrc {
    fn from_iter<I: IntoIterator<Item = (K, CalendarDefinition)>>(iter: I) -> Self {
        Self {
            defs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl CalendarDefSrc for InMemorySrc {
    fn get_definition(&self, name: &str) -> anyhow::Result<Option<CalendarDefinition>> {
        let res = self.defs.get(name).cloned();
        log::debug!(
            "In-memory lookup of '{name}': {}",
            if res.is_some() { "found" } else { "missing" }
        );
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;

    use crate::CalendarSrc;

    use super::*;

    fn def(holidays: &[&str]) -> CalendarDefinition {
        CalendarDefinition {
            holidays: holidays.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_iter() {
        let src: InMemorySrc = hashmap! {
            "bacs" => def(&["2013-01-01"]),
            "target" => def(&["2013-05-01"]),
        }
        .into_iter()
        .collect();

        assert_eq!(src.names(), vec!["bacs", "target"]);
        assert_eq!(
            src.get_definition("bacs").unwrap(),
            Some(def(&["2013-01-01"]))
        );
        assert_eq!(src.get_definition("xxx").unwrap(), None);
    }

    #[test]
    fn test_insert_remove() {
        let mut src = InMemorySrc::new();

        assert_eq!(src.insert("bacs", def(&["2013-01-01"])), None);
        assert_eq!(
            src.insert("bacs", def(&["2013-12-25"])),
            Some(def(&["2013-01-01"]))
        );
        assert_eq!(
            src.get_definition("bacs").unwrap(),
            Some(def(&["2013-12-25"]))
        );

        assert_eq!(src.remove("bacs"), Some(def(&["2013-12-25"])));
        assert!(src.names().is_empty());
    }

    #[test]
    fn test_get_calendar() {
        let src = InMemorySrc::from_iter([("bacs", def(&["2013-01-01"]))]);

        let cal = src.get_calendar("bacs").unwrap();

        assert_eq!(cal.name(), Some("bacs"));
        assert_eq!(cal.holidays().len(), 1);
        assert_eq!(
            src.get_calendar("xxx").unwrap_err().to_string(),
            "No such calendar 'xxx'"
        );
    }
}
