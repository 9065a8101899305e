//! Payroll line computation.
//!
//! Brings gross income, pension contributions, taxable income and PAYE
//! together into a [`PayrollLine`], optionally wrapped with an audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::PayrollRules;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, PayrollCalculation, PayrollLine, PayrollTotals,
    StaffRecord,
};

use super::gross_income::{calculate_gross_income, gross_income};
use super::income_tax::{calculate_income_tax, income_tax};
use super::statutory_deductions::{
    calculate_statutory_deductions, calculate_taxable_income, statutory_deductions,
    taxable_income,
};

/// Computes the payroll line under the built-in monthly rules.
///
/// # Examples
///
/// ```
/// use hotel_ops_engine::calculation::compute_payroll;
/// use hotel_ops_engine::models::StaffRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let staff = StaffRecord {
///     id: "stf_001".to_string(),
///     name: "Efua Addo".to_string(),
///     basic_salary: Decimal::from_str("1000").unwrap(),
///     allowance: Decimal::ZERO,
///     other_benefits: vec![],
///     enrolled_ssnit: true,
///     enrolled_tier2: true,
///     enrolled_tier3: true,
/// };
///
/// let line = compute_payroll(&staff);
/// assert_eq!(line.taxable_income, Decimal::from_str("895").unwrap());
/// assert_eq!(line.income_tax, Decimal::from_str("47.375").unwrap());
/// assert_eq!(line.net_pay, Decimal::from_str("827.625").unwrap());
/// ```
pub fn compute_payroll(staff: &StaffRecord) -> PayrollLine {
    compute_payroll_with(staff, &PayrollRules::default())
}

/// Computes the payroll line under the given rates and schedule.
pub fn compute_payroll_with(staff: &StaffRecord, rules: &PayrollRules) -> PayrollLine {
    let gross = gross_income(staff);
    let deductions = statutory_deductions(staff, &rules.statutory);
    let taxable = taxable_income(gross, &deductions);
    let tax = income_tax(taxable, &rules.tax_schedule);

    build_line(
        staff,
        gross,
        deductions.employee_ssnit,
        deductions.tier2,
        deductions.tier3,
        taxable,
        tax,
    )
}

/// Computes the payroll line with a step-by-step audit trace.
///
/// Adds a `NEGATIVE_NET_PAY` warning when deductions exceed gross income.
pub fn calculate_payroll(staff: &StaffRecord, rules: &PayrollRules) -> PayrollCalculation {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let gross_result = calculate_gross_income(staff, step_number);
    let gross = gross_result.gross_income;
    steps.push(gross_result.audit_step);
    step_number += 1;

    let deductions_result = calculate_statutory_deductions(staff, &rules.statutory, step_number);
    let deductions = deductions_result.deductions;
    step_number += deductions_result.audit_steps.len() as u32;
    steps.extend(deductions_result.audit_steps);

    let taxable_result = calculate_taxable_income(gross, &deductions, step_number);
    let taxable = taxable_result.taxable_income;
    steps.push(taxable_result.audit_step);
    step_number += 1;

    let tax_result = calculate_income_tax(taxable, &rules.tax_schedule, step_number);
    let tax = tax_result.income_tax;
    steps.push(tax_result.audit_step);
    step_number += 1;

    let line = build_line(
        staff,
        gross,
        deductions.employee_ssnit,
        deductions.tier2,
        deductions.tier3,
        taxable,
        tax,
    );

    steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_income": line.gross_income.normalize().to_string(),
            "total_deductions": line.total_deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_pay": line.net_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} gross - {} deductions = {}",
            line.gross_income.normalize(),
            line.total_deductions.normalize(),
            line.net_pay.normalize()
        ),
    });

    if line.net_pay < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_PAY".to_string(),
            message: format!(
                "Deductions of {} exceed gross income of {} for staff {}",
                line.total_deductions.normalize(),
                line.gross_income.normalize(),
                staff.id
            ),
            severity: "high".to_string(),
        });
    }

    let duration_us = start_time.elapsed().as_micros() as u64;

    PayrollCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_schedule_version: rules.tax_schedule.version.clone(),
        line,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

/// Sums a set of payroll lines into run totals.
pub fn summarize_payroll(lines: &[PayrollLine]) -> PayrollTotals {
    lines.iter().fold(PayrollTotals::default(), |mut totals, line| {
        totals.headcount += 1;
        totals.gross_income += line.gross_income;
        totals.employee_ssnit += line.employee_ssnit;
        totals.tier2 += line.tier2;
        totals.tier3 += line.tier3;
        totals.income_tax += line.income_tax;
        totals.total_deductions += line.total_deductions;
        totals.net_pay += line.net_pay;
        totals
    })
}

fn build_line(
    staff: &StaffRecord,
    gross_income: Decimal,
    employee_ssnit: Decimal,
    tier2: Decimal,
    tier3: Decimal,
    taxable_income: Decimal,
    income_tax: Decimal,
) -> PayrollLine {
    let total_deductions = employee_ssnit + tier2 + tier3 + income_tax;

    PayrollLine {
        staff_id: staff.id.clone(),
        gross_income,
        employee_ssnit,
        tier2,
        tier3,
        taxable_income,
        income_tax,
        total_deductions,
        net_pay: gross_income - total_deductions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StatutoryRates, TaxBand, TaxSchedule};
    use crate::models::OtherBenefit;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_staff(id: &str, basic: &str, ssnit: bool, tier2: bool, tier3: bool) -> StaffRecord {
        StaffRecord {
            id: id.to_string(),
            name: "Kwame Osei".to_string(),
            basic_salary: dec(basic),
            allowance: Decimal::ZERO,
            other_benefits: vec![],
            enrolled_ssnit: ssnit,
            enrolled_tier2: tier2,
            enrolled_tier3: tier3,
        }
    }

    /// PR-001: basic 1000 with every scheme
    #[test]
    fn test_pr_001_all_schemes() {
        let line = compute_payroll(&create_staff("stf_001", "1000", true, true, true));

        assert_eq!(line.gross_income, dec("1000"));
        assert_eq!(line.employee_ssnit, dec("55"));
        assert_eq!(line.tier2, dec("50"));
        assert_eq!(line.tier3, dec("20"));
        assert_eq!(line.taxable_income, dec("895"));
        assert_eq!(line.income_tax, dec("47.375"));
        assert_eq!(line.total_deductions, dec("172.375"));
        assert_eq!(line.net_pay, dec("827.625"));
    }

    /// PR-002: Tier 3 is withheld but not relieved from PAYE
    #[test]
    fn test_pr_002_tier3_asymmetry() {
        let line = compute_payroll(&create_staff("stf_002", "1000", true, true, true));
        assert_eq!(line.taxable_income, line.gross_income - dec("55") - dec("50"));
        assert!(line.total_deductions > line.employee_ssnit + line.tier2 + line.income_tax);
    }

    /// PR-003: salary with allowance and benefits
    #[test]
    fn test_pr_003_with_benefits() {
        let mut staff = create_staff("stf_003", "2500", true, true, false);
        staff.allowance = dec("300");
        staff.other_benefits = vec![OtherBenefit {
            name: "Transport".to_string(),
            amount: dec("200"),
        }];

        let line = compute_payroll(&staff);

        // 3000 - 137.5 - 125
        assert_eq!(line.gross_income, dec("3000"));
        assert_eq!(line.taxable_income, dec("2737.5"));
        // 5.50 + 13 + (2737.5 - 730) x 0.175
        assert_eq!(line.income_tax, dec("369.8125"));
        assert_eq!(line.net_pay + line.total_deductions, line.gross_income);
    }

    /// PR-004: nobody below the tax-free band pays PAYE
    #[test]
    fn test_pr_004_below_threshold() {
        let line = compute_payroll(&create_staff("stf_004", "450", false, false, false));
        assert_eq!(line.income_tax, Decimal::ZERO);
        assert_eq!(line.net_pay, dec("450"));
    }

    #[test]
    fn test_compute_payroll_with_custom_rules() {
        let rules = PayrollRules {
            statutory: StatutoryRates {
                employee_ssnit: dec("0.10"),
                tier2: Decimal::ZERO,
                tier3: Decimal::ZERO,
            },
            tax_schedule: TaxSchedule {
                version: "TEST-FLAT-10".to_string(),
                effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                bands: vec![TaxBand::remainder(dec("0.10"))],
            },
        };

        let staff = create_staff("stf_005", "1000", true, false, false);
        let line = compute_payroll_with(&staff, &rules);

        assert_eq!(line.employee_ssnit, dec("100"));
        assert_eq!(line.income_tax, dec("90"));
        assert_eq!(line.net_pay, dec("810"));
    }

    #[test]
    fn test_calculate_payroll_matches_compute() {
        let staff = create_staff("stf_006", "4200", true, true, true);
        let rules = PayrollRules::default();

        let calculation = calculate_payroll(&staff, &rules);

        assert_eq!(calculation.line, compute_payroll_with(&staff, &rules));
        assert_eq!(calculation.tax_schedule_version, "GH-PAYE-2024-MONTHLY");
        assert_eq!(calculation.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_calculate_payroll_audit_steps() {
        let calculation = calculate_payroll(
            &create_staff("stf_007", "1000", true, true, true),
            &PayrollRules::default(),
        );

        let ids: Vec<&str> = calculation
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "gross_income",
                "employee_ssnit",
                "tier2",
                "tier3",
                "taxable_income",
                "income_tax",
                "net_pay"
            ]
        );

        let numbers: Vec<u32> = calculation
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, (1..=7).collect::<Vec<u32>>());
        assert!(calculation.audit_trace.warnings.is_empty());
    }

    /// PR-005: negative net pay is flagged, not rejected
    #[test]
    fn test_pr_005_negative_net_pay_warning() {
        let rules = PayrollRules {
            statutory: StatutoryRates {
                employee_ssnit: dec("0.60"),
                tier2: dec("0.30"),
                tier3: dec("0.20"),
            },
            tax_schedule: TaxSchedule::default(),
        };

        let staff = create_staff("stf_008", "1000", true, true, true);
        let calculation = calculate_payroll(&staff, &rules);

        assert_eq!(calculation.line.net_pay, dec("-100"));
        assert_eq!(calculation.audit_trace.warnings.len(), 1);
        assert_eq!(calculation.audit_trace.warnings[0].code, "NEGATIVE_NET_PAY");
    }

    #[test]
    fn test_summarize_payroll() {
        let lines = vec![
            compute_payroll(&create_staff("stf_001", "1000", true, true, true)),
            compute_payroll(&create_staff("stf_002", "450", false, false, false)),
        ];

        let totals = summarize_payroll(&lines);

        assert_eq!(totals.headcount, 2);
        assert_eq!(totals.gross_income, dec("1450"));
        assert_eq!(totals.income_tax, dec("47.375"));
        assert_eq!(totals.net_pay, dec("1277.625"));
        assert_eq!(totals.net_pay + totals.total_deductions, totals.gross_income);
    }

    #[test]
    fn test_summarize_empty_run() {
        assert_eq!(summarize_payroll(&[]), PayrollTotals::default());
    }

    proptest! {
        #[test]
        fn prop_net_pay_identity(
            basic in 0i64..5_000_000,
            allowance in 0i64..1_000_000,
            benefits in prop::collection::vec(0i64..500_000, 0..4),
            ssnit in any::<bool>(),
            tier2 in any::<bool>(),
            tier3 in any::<bool>(),
        ) {
            let staff = StaffRecord {
                id: "stf_prop".to_string(),
                name: String::new(),
                basic_salary: Decimal::new(basic, 2),
                allowance: Decimal::new(allowance, 2),
                other_benefits: benefits
                    .into_iter()
                    .map(|amount| OtherBenefit {
                        name: "Benefit".to_string(),
                        amount: Decimal::new(amount, 2),
                    })
                    .collect(),
                enrolled_ssnit: ssnit,
                enrolled_tier2: tier2,
                enrolled_tier3: tier3,
            };

            let line = compute_payroll(&staff);

            prop_assert_eq!(line.net_pay + line.total_deductions, line.gross_income);
            prop_assert!(line.taxable_income >= Decimal::ZERO);
            prop_assert_eq!(
                line.total_deductions,
                line.employee_ssnit + line.tier2 + line.tier3 + line.income_tax
            );
        }
    }
}
