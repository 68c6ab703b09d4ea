pub mod aggregate;
pub mod body_metrics;
pub mod energy;
pub mod error;
pub mod goal;
