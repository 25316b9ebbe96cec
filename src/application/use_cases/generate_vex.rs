use crate::application::dto::{GenerateVexRequest, GenerateVexResponse};
use crate::compliance::domain::{
    Affect, Analysis, FeedEntry, Rating, Tool, VexDocument, VexMetadata, VulnerabilitySource,
    VulnerabilityEntry,
};
use crate::ports::outbound::DocumentReader;
use crate::shared::Result;
use chrono::Utc;
use uuid::Uuid;

/// GenerateVexUseCase - Builds a CycloneDX VEX document from a raw
/// vulnerability feed
///
/// One feed record becomes one vulnerability entry: `cve` maps to `id`,
/// `status` to `analysis.state`, and the affected component is referenced
/// as `pkg:<ecosystem>/<package>@<installed_version>`. Severity literals
/// are uppercased so the policy evaluator can rank them.
///
/// # Type Parameters
/// * `R` - DocumentReader implementation
pub struct GenerateVexUseCase<R> {
    document_reader: R,
}

impl<R: DocumentReader> GenerateVexUseCase<R> {
    /// Creates a new GenerateVexUseCase with injected reader
    pub fn new(document_reader: R) -> Self {
        Self { document_reader }
    }

    /// Executes the VEX generation use case
    ///
    /// # Errors
    /// Returns an error if the feed cannot be read or parsed
    pub fn execute(&self, request: GenerateVexRequest) -> Result<GenerateVexResponse> {
        let feed = self.document_reader.read_feed(&request.feed_path)?;

        let vulnerabilities = feed
            .vulnerabilities
            .into_iter()
            .map(|entry| Self::build_entry(entry, &request.ecosystem))
            .collect();

        let document = VexDocument {
            bom_format: Some("CycloneDX".to_string()),
            spec_version: Some("1.4".to_string()),
            version: Some(1),
            serial_number: Some(format!("urn:uuid:{}", Uuid::new_v4())),
            schema: Some("http://cyclonedx.org/schema/bom-1.4.schema.json".to_string()),
            metadata: Some(VexMetadata {
                timestamp: Some(Utc::now().to_rfc3339()),
                tools: vec![Tool {
                    vendor: Some("CycloneDX".to_string()),
                    name: Some("sbom-gate".to_string()),
                    version: Some(env!("CARGO_PKG_VERSION").to_string()),
                }],
            }),
            vulnerabilities: Some(vulnerabilities),
        };

        Ok(GenerateVexResponse::new(document))
    }

    fn build_entry(entry: FeedEntry, ecosystem: &str) -> VulnerabilityEntry {
        VulnerabilityEntry {
            id: Some(entry.cve),
            source: Some(VulnerabilitySource {
                name: Some("NVD".to_string()),
                url: Some("https://nvd.nist.gov".to_string()),
            }),
            ratings: vec![Rating {
                severity: Some(entry.severity.to_uppercase()),
                method: Some("CVSSv3".to_string()),
            }],
            affects: Some(vec![Affect {
                bom_ref: Some(format!(
                    "pkg:{}/{}@{}",
                    ecosystem, entry.package, entry.installed_version
                )),
            }]),
            analysis: Some(Analysis {
                state: Some(entry.status),
                justification: Some(entry.justification),
                detail: entry
                    .fixed_version
                    .map(|version| format!("Fixed in version {}", version)),
            }),
        }
    }
}
