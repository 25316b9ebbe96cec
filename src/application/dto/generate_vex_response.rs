use crate::compliance::domain::VexDocument;

/// GenerateVexResponse - Result of VEX generation
#[derive(Debug, Clone)]
pub struct GenerateVexResponse {
    /// The generated document, ready for serialization
    pub document: VexDocument,
}

impl GenerateVexResponse {
    pub fn new(document: VexDocument) -> Self {
        Self { document }
    }

    pub fn entry_count(&self) -> usize {
        self.document.entries().len()
    }
}
