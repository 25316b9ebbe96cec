use crate::compliance::domain::{SbomDocument, VexDocument, VulnerabilityFeed};
use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for loading parsed documents
///
/// This port abstracts where documents come from (file system, test
/// fixtures, etc.). Validators never perform I/O themselves; everything
/// is resolved into an in-memory structure before evaluation starts.
pub trait DocumentReader {
    /// Reads and parses an SBOM document
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or not valid
    /// JSON in the expected shape
    fn read_sbom(&self, path: &Path) -> Result<SbomDocument>;

    /// Reads and parses a VEX document
    fn read_vex(&self, path: &Path) -> Result<VexDocument>;

    /// Reads and parses a raw vulnerability feed (VEX generation input)
    fn read_feed(&self, path: &Path) -> Result<VulnerabilityFeed>;
}
