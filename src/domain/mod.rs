pub mod activity;
pub mod impact_factors;
pub mod metrics;
pub mod preset;
pub mod scenario;
pub mod simulation;
