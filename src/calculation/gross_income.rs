//! Gross income calculation.

use rust_decimal::Decimal;

use crate::models::{AuditStep, StaffRecord};

/// The result of totalling gross income, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossIncomeResult {
    /// Basic salary plus allowance plus other benefits.
    pub gross_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Basic salary plus allowance plus every other benefit.
///
/// Panics if the sum overflows; [`StaffRecord::validate`] rejects such records.
pub fn gross_income(staff: &StaffRecord) -> Decimal {
    staff.basic_salary + staff.allowance + staff.other_benefits_total()
}

/// Totals gross income and records how it was built up.
///
/// # Examples
///
/// ```
/// use hotel_ops_engine::calculation::calculate_gross_income;
/// use hotel_ops_engine::models::{OtherBenefit, StaffRecord};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let staff = StaffRecord {
///     id: "stf_001".to_string(),
///     name: "Kojo Asante".to_string(),
///     basic_salary: Decimal::from_str("2500").unwrap(),
///     allowance: Decimal::from_str("300").unwrap(),
///     other_benefits: vec![OtherBenefit {
///         name: "Transport".to_string(),
///         amount: Decimal::from_str("200").unwrap(),
///     }],
///     enrolled_ssnit: true,
///     enrolled_tier2: true,
///     enrolled_tier3: false,
/// };
///
/// let result = calculate_gross_income(&staff, 1);
/// assert_eq!(result.gross_income, Decimal::from_str("3000").unwrap());
/// ```
pub fn calculate_gross_income(staff: &StaffRecord, step_number: u32) -> GrossIncomeResult {
    let benefits = staff.other_benefits_total();
    let gross = gross_income(staff);

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_income".to_string(),
        rule_name: "Gross Income".to_string(),
        input: serde_json::json!({
            "basic_salary": staff.basic_salary.normalize().to_string(),
            "allowance": staff.allowance.normalize().to_string(),
            "other_benefits": staff
                .other_benefits
                .iter()
                .map(|b| serde_json::json!({
                    "name": b.name,
                    "amount": b.amount.normalize().to_string()
                }))
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "gross_income": gross.normalize().to_string()
        }),
        reasoning: format!(
            "{} basic + {} allowance + {} other benefits = {}",
            staff.basic_salary.normalize(),
            staff.allowance.normalize(),
            benefits.normalize(),
            gross.normalize()
        ),
    };

    GrossIncomeResult {
        gross_income: gross,
        audit_step,
    }
}
