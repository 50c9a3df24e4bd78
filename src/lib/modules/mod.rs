pub mod functions;
pub mod moisture;
pub mod simulation;
pub mod spread;
