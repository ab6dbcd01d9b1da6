// Domain layer - Engine data models and collection invariants
pub mod alert;
pub mod classifier;
pub mod component;
pub mod maintenance;
pub mod notification;
pub mod telemetry;
