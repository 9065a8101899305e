//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::HotelCapacityConfig;

use super::types::{EngineConfig, EngineMetadata, PayrollRules, StatutoryRates, TaxSchedule};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── engine.yaml          # Deployment metadata
/// ├── hotel.yaml           # Room inventory
/// ├── statutory.yaml       # SSNIT / Tier 2 / Tier 3 rates
/// └── tax_schedules/
///     └── 2024-01-01.yaml  # PAYE bands effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use hotel_ops_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Rooms: {}", loader.hotel().total_rooms);
///
/// let pay_date = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
/// let schedule = loader.get_tax_schedule(pay_date).unwrap();
/// println!("PAYE schedule: {}", schedule.version);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if any required file is missing, contains invalid YAML, or if a
    /// tax schedule's band table is malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let hotel = Self::load_yaml::<HotelCapacityConfig>(&path.join("hotel.yaml"))?;
        let statutory = Self::load_yaml::<StatutoryRates>(&path.join("statutory.yaml"))?;
        let tax_schedules = Self::load_tax_schedules(&path.join("tax_schedules"))?;

        tracing::debug!(
            config_dir = %path.display(),
            schedules = tax_schedules.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, hotel, statutory, tax_schedules),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every schedule file from the tax schedules directory.
    fn load_tax_schedules(dir: &Path) -> EngineResult<Vec<TaxSchedule>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut schedules = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let schedule = Self::load_yaml::<TaxSchedule>(&path)?;
                schedule
                    .check()
                    .map_err(|message| EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message,
                    })?;
                schedules.push(schedule);
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax schedule files found)", dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the deployment metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the hotel inventory.
    pub fn hotel(&self) -> &HotelCapacityConfig {
        self.config.hotel()
    }

    /// Gets the PAYE schedule in force on `pay_date`.
    ///
    /// The most recent schedule whose effective date is on or before the
    /// pay date wins.
    pub fn get_tax_schedule(&self, pay_date: NaiveDate) -> EngineResult<&TaxSchedule> {
        self.config
            .tax_schedules()
            .iter()
            .rev()
            .find(|s| s.effective_date <= pay_date)
            .ok_or(EngineError::TaxScheduleNotFound { date: pay_date })
    }

    /// Assembles the payroll rules for `pay_date`.
    pub fn payroll_rules(&self, pay_date: NaiveDate) -> EngineResult<PayrollRules> {
        Ok(PayrollRules {
            statutory: self.config.statutory().clone(),
            tax_schedule: self.get_tax_schedule(pay_date)?.clone(),
        })
    }
}
