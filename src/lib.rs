pub mod cli;
pub mod config;
pub mod legacy;
pub mod models;
pub mod reconcile;
pub mod scanner;
pub mod utils;

pub use config::{ReconcileConfig, ReconcileConfigBuilder};
pub use models::{ReconcileReport, ReconcileStatus, ServiceRecord};
pub use reconcile::check_removed_services;
