//! Configuration types for the Hotel Operations Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, along with the built-in
//! Ghana monthly PAYE schedule used when no configuration is supplied.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::HotelCapacityConfig;

/// Metadata about the deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Property or company name.
    pub name: String,
    /// ISO currency code payroll amounts are expressed in (e.g., "GHS").
    pub currency: String,
    /// ISO country code whose statutory rules apply (e.g., "GH").
    pub country: String,
}

/// Statutory pension contribution rates, as fractions of basic salary.
///
/// # Example
///
/// ```
/// use hotel_ops_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::default();
/// assert_eq!(rates.employee_ssnit, Decimal::new(55, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Employee SSNIT first-tier contribution.
    pub employee_ssnit: Decimal,
    /// Tier 2 occupational pension contribution.
    pub tier2: Decimal,
    /// Tier 3 voluntary provident fund contribution.
    pub tier3: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            employee_ssnit: Decimal::new(55, 3),
            tier2: Decimal::new(5, 2),
            tier3: Decimal::new(2, 2),
        }
    }
}

/// One marginal band of a PAYE schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Amount of income taxed in this band; `None` for the open top band.
    #[serde(default)]
    pub width: Option<Decimal>,
    /// Marginal rate as a fraction (0.175 for 17.5%).
    pub rate: Decimal,
}

impl TaxBand {
    /// A band of fixed width.
    pub fn bounded(width: Decimal, rate: Decimal) -> Self {
        Self {
            width: Some(width),
            rate,
        }
    }

    /// The open top band taking whatever income remains.
    pub fn remainder(rate: Decimal) -> Self {
        Self { width: None, rate }
    }
}

/// A dated, versioned PAYE band table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    /// Version label (e.g., "GH-PAYE-2024-MONTHLY").
    pub version: String,
    /// First pay date the schedule applies to.
    pub effective_date: NaiveDate,
    /// Bands in application order; only the last may be open.
    pub bands: Vec<TaxBand>,
}

impl TaxSchedule {
    /// The monthly Ghana PAYE schedule in force from 1 January 2024.
    pub fn ghana_monthly_2024() -> Self {
        Self {
            version: "GH-PAYE-2024-MONTHLY".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            bands: vec![
                TaxBand::bounded(Decimal::new(49000, 2), Decimal::ZERO),
                TaxBand::bounded(Decimal::new(11000, 2), Decimal::new(5, 2)),
                TaxBand::bounded(Decimal::new(13000, 2), Decimal::new(10, 2)),
                TaxBand::bounded(Decimal::new(316667, 2), Decimal::new(175, 3)),
                TaxBand::bounded(Decimal::new(1600000, 2), Decimal::new(25, 2)),
                TaxBand::bounded(Decimal::new(3052000, 2), Decimal::new(30, 2)),
                TaxBand::remainder(Decimal::new(35, 2)),
            ],
        }
    }

    /// Checks the band table is usable.
    ///
    /// Returns a description of the first problem found.
    pub fn check(&self) -> Result<(), String> {
        let Some((last, rest)) = self.bands.split_last() else {
            return Err("schedule has no bands".to_string());
        };
        if last.width.is_some() {
            return Err("last band must be open (no width)".to_string());
        }
        for (i, band) in rest.iter().enumerate() {
            match band.width {
                None => return Err(format!("band {} is open but is not the last band", i + 1)),
                Some(w) if w <= Decimal::ZERO => {
                    return Err(format!("band {} has non-positive width {}", i + 1, w));
                }
                Some(_) => {}
            }
        }
        if let Some(band) = self
            .bands
            .iter()
            .find(|b| b.rate < Decimal::ZERO || b.rate > Decimal::ONE)
        {
            return Err(format!("rate {} is outside 0..=1", band.rate));
        }
        Ok(())
    }
}

/// Everything the payroll calculator needs besides the staff record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PayrollRules {
    /// Pension contribution rates.
    pub statutory: StatutoryRates,
    /// PAYE band table.
    pub tax_schedule: TaxSchedule,
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::ghana_monthly_2024()
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    hotel: HotelCapacityConfig,
    statutory: StatutoryRates,
    /// Tax schedules by effective date (sorted oldest first).
    tax_schedules: Vec<TaxSchedule>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        hotel: HotelCapacityConfig,
        statutory: StatutoryRates,
        tax_schedules: Vec<TaxSchedule>,
    ) -> Self {
        let mut sorted = tax_schedules;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            hotel,
            statutory,
            tax_schedules: sorted,
        }
    }

    /// Returns the deployment metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the hotel inventory.
    pub fn hotel(&self) -> &HotelCapacityConfig {
        &self.hotel
    }

    /// Returns the statutory rates.
    pub fn statutory(&self) -> &StatutoryRates {
        &self.statutory
    }

    /// Returns all tax schedules, oldest first.
    pub fn tax_schedules(&self) -> &[TaxSchedule] {
        &self.tax_schedules
    }
}
