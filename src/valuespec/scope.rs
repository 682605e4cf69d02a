//! Specification scope: a per-pass serialization session.
//!
//! A scope brackets one serialization pass. Context-relative type reference
//! tokens are memoized in the active scope, so every reference to the same
//! type within the pass resolves to the same token. A scope is disposed
//! exactly once: either explicitly through [`SpecificationScope::dispose`] or
//! through `Drop` when it goes out of scope, including on panic unwind.

use log::trace;
use std::collections::HashMap;

use crate::valuespec::types::TypeTag;

/// A serialization session with an explicit start/dispose lifecycle.
///
/// Scopes may be nested; each is independent. Dropping an undisposed scope
/// performs the same teardown as [`dispose`](SpecificationScope::dispose),
/// so disposal happens on every path out of the bracketed region.
#[derive(Debug, Default)]
pub struct SpecificationScope {
    ref_cache: HashMap<TypeTag, String>,
    disposed: bool,
}

impl SpecificationScope {
    /// Open a new specification scope.
    pub fn enter() -> Self {
        trace!("Specification scope opened");
        SpecificationScope {
            ref_cache: HashMap::new(),
            disposed: false,
        }
    }

    /// The memoized context-relative reference token for a type, computing
    /// and caching it on first use within this scope.
    pub(crate) fn ref_for(&mut self, tag: TypeTag, id: &'static str) -> String {
        self.ref_cache
            .entry(tag)
            .or_insert_with(|| id.to_string())
            .clone()
    }

    /// Number of distinct type references resolved in this scope so far.
    pub fn resolved_refs(&self) -> usize {
        self.ref_cache.len()
    }

    /// Dispose the scope, ending the session.
    pub fn dispose(mut self) {
        self.release();
        // Drop runs next but release() is now a no-op
    }

    fn release(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.ref_cache.clear();
            trace!("Specification scope disposed");
        }
    }
}

impl Drop for SpecificationScope {
    fn drop(&mut self) {
        self.release();
    }
}
