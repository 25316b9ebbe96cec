/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod compliance_gate_port;

pub use compliance_gate_port::ComplianceGatePort;
