//! Configuration loading and management for the Hotel Operations Engine.
//!
//! This module loads the hotel inventory, statutory pension rates and the
//! versioned PAYE schedules from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hotel_ops_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded config for: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, EngineMetadata, PayrollRules, StatutoryRates, TaxBand, TaxSchedule,
};
