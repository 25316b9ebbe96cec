pub mod component;
pub mod feed;
pub mod mode;
pub mod report;
pub mod sbom;
pub mod severity;
pub mod verdict;
pub mod vex;

pub use component::{Component, ComponentType, Purl, PurlReference, Supplier};
pub use feed::{FeedEntry, VulnerabilityFeed};
pub use mode::EnforcementMode;
pub use report::{MissingFields, NtiaReport, VexReport};
pub use sbom::{SbomDocument, SbomMetadata, Tool};
pub use severity::Severity;
pub use verdict::{PolicyVerdict, SeveritySummary};
pub use vex::{
    Affect, Analysis, Rating, VexDocument, VexMetadata, VexState, VulnerabilityEntry,
    VulnerabilitySource,
};
