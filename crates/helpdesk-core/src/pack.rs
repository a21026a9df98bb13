//! Port for obtaining the FAQ pack artifact.
//!
//! The engine is built from a pack exactly once at startup; where that pack
//! comes from (a file on disk, a compiled-in default, a test fixture) is an
//! infrastructure decision behind this trait.

use helpdesk_types::error::PackError;
use helpdesk_types::faq::FaqPack;

/// Source of the serialized knowledge pack.
pub trait PackSource {
    /// Load the pack. Called once, before the engine is built.
    async fn load(&self) -> Result<FaqPack, PackError>;
}

/// Pack source wrapping an already-materialized pack; the in-memory test
/// double for components built over [`PackSource`].
pub struct StaticPackSource {
    pack: FaqPack,
}

impl StaticPackSource {
    pub fn new(pack: FaqPack) -> Self {
        Self { pack }
    }
}

impl PackSource for StaticPackSource {
    async fn load(&self) -> Result<FaqPack, PackError> {
        if self.pack.is_empty() {
            return Err(PackError::Empty);
        }
        Ok(self.pack.clone())
    }
}
