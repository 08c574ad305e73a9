use std::{
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard, PoisonError},
};

use lru::LruCache;
use qbizcal::calendar::Calendar;

use crate::CalendarSrc;

// -----------------------------------------------------------------------------
// CachedSrc
// -----------------------------------------------------------------------------
/// Wrapper which keeps the most recently used calendars built by the inner source.
///
/// Failed lookups are not cached, so a calendar file fixed after an error
/// is picked up by the next lookup.
#[derive(Debug)]
pub struct CachedSrc<S> {
    src: S,
    cache: Mutex<LruCache<String, Calendar>>,
}

impl<S> CachedSrc<S> {
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
        Some(n) => n,
        None => unreachable!(),
    };

    pub fn new(src: S) -> Self {
        Self::with_capacity(src, Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(src: S, capacity: NonZeroUsize) -> Self {
        Self {
            src,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    #[inline]
    pub fn inner(&self) -> &S {
        &self.src
    }

    pub fn len(&self) -> usize {
        self._lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self._lock().is_empty()
    }

    /// Drop every cached calendar.
    pub fn clear(&self) {
        log::trace!("Clearing calendar cache");
        self._lock().clear();
    }

    // the cache holds no invariant which a panic could break
    fn _lock(&self) -> MutexGuard<'_, LruCache<String, Calendar>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: CalendarSrc> CalendarSrc for CachedSrc<S> {
    fn get_calendar(&self, name: &str) -> anyhow::Result<Calendar> {
        if let Some(cal) = self._lock().get(name) {
            log::trace!("Cache hit for calendar '{name}'");
            return Ok(cal.clone());
        }
        log::trace!("Cache miss for calendar '{name}'");

        // the lock is not held while loading
        let cal = self.src.get_calendar(name)?;
        self._lock().put(name.to_owned(), cal.clone());
        Ok(cal)
    }
}
