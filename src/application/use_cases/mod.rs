/// Use cases module containing application business logic orchestration
mod check_compliance;
mod generate_vex;

pub use check_compliance::CheckComplianceUseCase;
pub use generate_vex::GenerateVexUseCase;
