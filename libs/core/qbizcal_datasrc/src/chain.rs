use qbizcal::calendar::CalendarDefinition;

use crate::CalendarDefSrc;

// -----------------------------------------------------------------------------
// SrcChain
// -----------------------------------------------------------------------------
/// Sources tried in order. The first one which knows the name wins.
///
/// An error from a source stops the lookup.
#[derive(Default)]
pub struct SrcChain {
    srcs: Vec<Box<dyn CalendarDefSrc + Send + Sync>>,
}

impl SrcChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_src<S>(mut self, src: S) -> Self
    where
        S: CalendarDefSrc + Send + Sync + 'static,
    {
        self.push(src);
        self
    }

    pub fn push<S>(&mut self, src: S)
    where
        S: CalendarDefSrc + Send + Sync + 'static,
    {
        self.srcs.push(Box::new(src));
    }

    pub fn len(&self) -> usize {
        self.srcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.srcs.is_empty()
    }
}

impl std::fmt::Debug for SrcChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SrcChain")
            .field("len", &self.srcs.len())
            .finish()
    }
}

impl CalendarDefSrc for SrcChain {
    fn get_definition(&self, name: &str) -> anyhow::Result<Option<CalendarDefinition>> {
        for (i, src) in self.srcs.iter().enumerate() {
            if let Some(def) = src.get_definition(name)? {
                log::debug!("Calendar '{name}' is resolved by source #{i}");
                return Ok(Some(def));
            }
        }
        Ok(None)
    }
}
