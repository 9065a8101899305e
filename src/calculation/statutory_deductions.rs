//! Pension contributions and taxable income.
//!
//! Each pension scheme is charged on basic salary only, and only when the
//! staff member is enrolled. SSNIT and Tier 2 are relieved from PAYE;
//! Tier 3 is deducted from pay but not from taxable income.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{AuditStep, StaffRecord};

/// Employee pension contributions for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatutoryDeductions {
    /// SSNIT first-tier contribution.
    pub employee_ssnit: Decimal,
    /// Tier 2 contribution.
    pub tier2: Decimal,
    /// Tier 3 contribution.
    pub tier3: Decimal,
}

impl StatutoryDeductions {
    /// Sum of all three contributions.
    pub fn total(&self) -> Decimal {
        self.employee_ssnit + self.tier2 + self.tier3
    }
}

/// The result of computing statutory deductions, including one audit step per scheme.
#[derive(Debug, Clone)]
pub struct StatutoryDeductionsResult {
    /// The contributions.
    pub deductions: StatutoryDeductions,
    /// Audit steps for SSNIT, Tier 2 and Tier 3 in that order.
    pub audit_steps: Vec<AuditStep>,
}

/// The result of computing taxable income, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxableIncomeResult {
    /// Income subject to PAYE.
    pub taxable_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes each contribution from basic salary and enrolment.
pub fn statutory_deductions(staff: &StaffRecord, rates: &StatutoryRates) -> StatutoryDeductions {
    StatutoryDeductions {
        employee_ssnit: contribution(
            staff.enrolled_ssnit,
            staff.basic_salary,
            rates.employee_ssnit,
        ),
        tier2: contribution(staff.enrolled_tier2, staff.basic_salary, rates.tier2),
        tier3: contribution(staff.enrolled_tier3, staff.basic_salary, rates.tier3),
    }
}

/// Gross income less SSNIT and Tier 2, floored at zero.
///
/// # Examples
///
/// ```
/// use hotel_ops_engine::calculation::{StatutoryDeductions, taxable_income};
/// use rust_decimal::Decimal;
///
/// let deductions = StatutoryDeductions {
///     employee_ssnit: Decimal::new(55, 0),
///     tier2: Decimal::new(50, 0),
///     tier3: Decimal::new(20, 0),
/// };
/// assert_eq!(taxable_income(Decimal::new(1000, 0), &deductions), Decimal::new(895, 0));
/// ```
pub fn taxable_income(gross_income: Decimal, deductions: &StatutoryDeductions) -> Decimal {
    (gross_income - deductions.employee_ssnit - deductions.tier2).max(Decimal::ZERO)
}

fn contribution(enrolled: bool, basic_salary: Decimal, rate: Decimal) -> Decimal {
    if enrolled {
        basic_salary * rate
    } else {
        Decimal::ZERO
    }
}

/// Computes the contributions and records one audit step per scheme.
///
/// Steps are numbered from `first_step` onwards.
pub fn calculate_statutory_deductions(
    staff: &StaffRecord,
    rates: &StatutoryRates,
    first_step: u32,
) -> StatutoryDeductionsResult {
    let deductions = statutory_deductions(staff, rates);

    let schemes = [
        (
            "employee_ssnit",
            "Employee SSNIT",
            staff.enrolled_ssnit,
            rates.employee_ssnit,
            deductions.employee_ssnit,
        ),
        ("tier2", "Tier 2 Pension", staff.enrolled_tier2, rates.tier2, deductions.tier2),
        ("tier3", "Tier 3 Provident Fund", staff.enrolled_tier3, rates.tier3, deductions.tier3),
    ];

    let audit_steps = schemes
        .into_iter()
        .zip(first_step..)
        .map(|((rule_id, rule_name, enrolled, rate, amount), step_number)| {
            let reasoning = if enrolled {
                format!(
                    "{} basic x {} = {}",
                    staff.basic_salary.normalize(),
                    rate.normalize(),
                    amount.normalize()
                )
            } else {
                format!("Not enrolled in {} - no contribution", rule_name)
            };

            AuditStep {
                step_number,
                rule_id: rule_id.to_string(),
                rule_name: rule_name.to_string(),
                input: serde_json::json!({
                    "basic_salary": staff.basic_salary.normalize().to_string(),
                    "enrolled": enrolled,
                    "rate": rate.normalize().to_string()
                }),
                output: serde_json::json!({
                    "contribution": amount.normalize().to_string()
                }),
                reasoning,
            }
        })
        .collect();

    StatutoryDeductionsResult {
        deductions,
        audit_steps,
    }
}

/// Computes taxable income and records the relief applied.
pub fn calculate_taxable_income(
    gross_income: Decimal,
    deductions: &StatutoryDeductions,
    step_number: u32,
) -> TaxableIncomeResult {
    let taxable = taxable_income(gross_income, deductions);
    let floored = gross_income - deductions.employee_ssnit - deductions.tier2 < Decimal::ZERO;

    let reasoning = if floored {
        format!(
            "{} gross - {} SSNIT - {} Tier 2 is negative; taxable income floored at 0",
            gross_income.normalize(),
            deductions.employee_ssnit.normalize(),
            deductions.tier2.normalize()
        )
    } else {
        format!(
            "{} gross - {} SSNIT - {} Tier 2 = {} (Tier 3 not relieved)",
            gross_income.normalize(),
            deductions.employee_ssnit.normalize(),
            deductions.tier2.normalize(),
            taxable.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "taxable_income".to_string(),
        rule_name: "Taxable Income".to_string(),
        input: serde_json::json!({
            "gross_income": gross_income.normalize().to_string(),
            "employee_ssnit": deductions.employee_ssnit.normalize().to_string(),
            "tier2": deductions.tier2.normalize().to_string(),
            "tier3": deductions.tier3.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxable_income": taxable.normalize().to_string(),
            "floored": floored
        }),
        reasoning,
    };

    TaxableIncomeResult {
        taxable_income: taxable,
        audit_step,
    }
}
