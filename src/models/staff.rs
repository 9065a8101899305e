//! Staff record model.
//!
//! A [`StaffRecord`] is the per-employee input to the payroll calculator:
//! the gross-pay breakdown and the statutory scheme enrolments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A named benefit paid on top of salary and allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherBenefit {
    /// Benefit label (e.g. "Transport", "Rent").
    pub name: String,
    /// Amount for the period.
    pub amount: Decimal,
}

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Basic salary for the period.
    pub basic_salary: Decimal,
    /// Fixed allowance for the period.
    #[serde(default)]
    pub allowance: Decimal,
    /// Additional named benefits.
    #[serde(default)]
    pub other_benefits: Vec<OtherBenefit>,
    /// Enrolled in the SSNIT first-tier scheme.
    #[serde(default)]
    pub enrolled_ssnit: bool,
    /// Enrolled in a Tier 2 occupational scheme.
    #[serde(default)]
    pub enrolled_tier2: bool,
    /// Enrolled in a Tier 3 provident fund.
    #[serde(default)]
    pub enrolled_tier3: bool,
}

impl StaffRecord {
    /// Sum of all other-benefit amounts.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel_ops_engine::models::{OtherBenefit, StaffRecord};
    /// use rust_decimal::Decimal;
    ///
    /// let staff = StaffRecord {
    ///     id: "stf_001".to_string(),
    ///     name: "Ama Mensah".to_string(),
    ///     basic_salary: Decimal::new(300000, 2),
    ///     allowance: Decimal::ZERO,
    ///     other_benefits: vec![
    ///         OtherBenefit { name: "Transport".to_string(), amount: Decimal::new(15000, 2) },
    ///         OtherBenefit { name: "Meals".to_string(), amount: Decimal::new(5000, 2) },
    ///     ],
    ///     enrolled_ssnit: true,
    ///     enrolled_tier2: true,
    ///     enrolled_tier3: false,
    /// };
    /// assert_eq!(staff.other_benefits_total(), Decimal::new(20000, 2));
    /// ```
    pub fn other_benefits_total(&self) -> Decimal {
        self.other_benefits.iter().map(|b| b.amount).sum()
    }

    /// Basic salary plus allowance plus other benefits, or `None` when the
    /// sum does not fit in a `Decimal`.
    pub fn checked_gross_income(&self) -> Option<Decimal> {
        self.other_benefits
            .iter()
            .try_fold(self.basic_salary.checked_add(self.allowance)?, |total, b| {
                total.checked_add(b.amount)
            })
    }

    /// Rejects records the payroll office would never key in.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidStaff {
                field: "id".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.basic_salary < Decimal::ZERO {
            return Err(EngineError::InvalidStaff {
                field: "basic_salary".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if self.allowance < Decimal::ZERO {
            return Err(EngineError::InvalidStaff {
                field: "allowance".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if let Some(benefit) = self.other_benefits.iter().find(|b| b.amount < Decimal::ZERO) {
            return Err(EngineError::InvalidStaff {
                field: "other_benefits".to_string(),
                message: format!("'{}' cannot be negative", benefit.name),
            });
        }
        if self.checked_gross_income().is_none() {
            return Err(EngineError::InvalidStaff {
                field: "gross_income".to_string(),
                message: "salary, allowance and benefits total is out of range".to_string(),
            });
        }
        Ok(())
    }
}
