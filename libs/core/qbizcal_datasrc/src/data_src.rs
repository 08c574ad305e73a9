use anyhow::Context;
use qbizcal::calendar::{Calendar, CalendarDefinition};

// -----------------------------------------------------------------------------
// CalendarDefSrc
// CalendarSrc
// -----------------------------------------------------------------------------
/// Source of raw calendar definitions looked up by name.
///
/// `Ok(None)` means the source does not know the name, which lets
/// several sources be tried in order.
/// `Err` is reserved for sources which know the name but fail to read it.
pub trait CalendarDefSrc {
    fn get_definition(&self, name: &str) -> anyhow::Result<Option<CalendarDefinition>>;
}

/// Source of validated calendars looked up by name.
pub trait CalendarSrc {
    fn get_calendar(&self, name: &str) -> anyhow::Result<Calendar>;
}

impl<S: CalendarDefSrc> CalendarSrc for S {
    fn get_calendar(&self, name: &str) -> anyhow::Result<Calendar> {
        let def = self
            .get_definition(name)?
            .ok_or_else(|| anyhow::anyhow!("No such calendar '{name}'"))?;
        let cal = Calendar::from_definition(Some(name), &def)
            .with_context(|| format!("Building calendar '{name}'"))?;
        Ok(cal)
    }
}

impl<S: CalendarDefSrc + ?Sized> CalendarDefSrc for Box<S> {
    #[inline]
    fn get_definition(&self, name: &str) -> anyhow::Result<Option<CalendarDefinition>> {
        (**self).get_definition(name)
    }
}

impl<S: CalendarDefSrc + ?Sized> CalendarDefSrc for std::sync::Arc<S> {
    #[inline]
    fn get_definition(&self, name: &str) -> anyhow::Result<Option<CalendarDefinition>> {
        (**self).get_definition(name)
    }
}
