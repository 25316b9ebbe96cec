/// Compliance core - Pure domain models and validation services
///
/// This module holds the document data model (SBOM, VEX, vulnerability feed)
/// and the three validators/evaluators that make up the gate. Everything in
/// here is a pure function of its inputs; rendering and I/O live in the
/// adapters layer.
pub mod domain;
pub mod services;
