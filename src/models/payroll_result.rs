//! Payroll result models.
//!
//! This module contains the [`PayrollLine`] computed for each staff member,
//! the [`PayrollTotals`] of a payroll run, and the [`PayrollCalculation`]
//! envelope that pairs a line with its audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The computed pay for one staff member for one period.
///
/// All amounts are full precision; rounding for display is left to callers.
///
/// # Example
///
/// ```
/// use hotel_ops_engine::models::PayrollLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = PayrollLine {
///     staff_id: "stf_001".to_string(),
///     gross_income: Decimal::from_str("1000").unwrap(),
///     employee_ssnit: Decimal::from_str("55").unwrap(),
///     tier2: Decimal::from_str("50").unwrap(),
///     tier3: Decimal::from_str("20").unwrap(),
///     taxable_income: Decimal::from_str("895").unwrap(),
///     income_tax: Decimal::from_str("47.375").unwrap(),
///     total_deductions: Decimal::from_str("172.375").unwrap(),
///     net_pay: Decimal::from_str("827.625").unwrap(),
/// };
/// assert_eq!(line.net_pay + line.total_deductions, line.gross_income);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The staff member this line is for.
    pub staff_id: String,
    /// Basic salary plus allowance plus other benefits.
    pub gross_income: Decimal,
    /// Employee SSNIT contribution.
    pub employee_ssnit: Decimal,
    /// Tier 2 contribution.
    pub tier2: Decimal,
    /// Tier 3 contribution.
    pub tier3: Decimal,
    /// Income subject to PAYE.
    pub taxable_income: Decimal,
    /// PAYE withheld.
    pub income_tax: Decimal,
    /// SSNIT, Tier 2, Tier 3 and PAYE together.
    pub total_deductions: Decimal,
    /// Gross income less total deductions.
    pub net_pay: Decimal,
}

/// Column totals for a payroll run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of lines summed.
    pub headcount: u32,
    /// Total gross income.
    pub gross_income: Decimal,
    /// Total employee SSNIT.
    pub employee_ssnit: Decimal,
    /// Total Tier 2.
    pub tier2: Decimal,
    /// Total Tier 3.
    pub tier3: Decimal,
    /// Total PAYE.
    pub income_tax: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Total net pay.
    pub net_pay: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag results that are arithmetically valid but need a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A payroll line together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The version of the PAYE schedule applied.
    pub tax_schedule_version: String,
    /// The computed pay.
    pub line: PayrollLine,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_line() -> PayrollLine {
        PayrollLine {
            staff_id: "stf_001".to_string(),
            gross_income: dec("1000"),
            employee_ssnit: dec("55.000"),
            tier2: dec("50.00"),
            tier3: dec("20.00"),
            taxable_income: dec("895.000"),
            income_tax: dec("47.375"),
            total_deductions: dec("172.375"),
            net_pay: dec("827.625"),
        }
    }

    #[test]
    fn test_payroll_line_serializes_decimals_as_strings() {
        let json = serde_json::to_string(&create_sample_line()).unwrap();
        assert!(json.contains("\"staff_id\":\"stf_001\""));
        assert!(json.contains("\"gross_income\":\"1000\""));
        assert!(json.contains("\"tier2\":\"50.00\""));
    }

    #[test]
    fn test_payroll_line_deserialization() {
        let json = r#"{
            "staff_id": "stf_009",
            "gross_income": "3000.00",
            "employee_ssnit": "165.00",
            "tier2": "150.00",
            "tier3": "0",
            "taxable_income": "2685.00",
            "income_tax": "360.625",
            "total_deductions": "675.625",
            "net_pay": "2324.375"
        }"#;

        let line: PayrollLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.staff_id, "stf_009");
        assert_eq!(line.net_pay + line.total_deductions, line.gross_income);
    }

    #[test]
    fn test_payroll_totals_default_is_zero() {
        let totals = PayrollTotals::default();
        assert_eq!(totals.headcount, 0);
        assert_eq!(totals.net_pay, Decimal::ZERO);
    }

    #[test]
    fn test_audit_trace_serialization() {
        let trace = AuditTrace {
            steps: vec![AuditStep {
                step_number: 1,
                rule_id: "gross_income".to_string(),
                rule_name: "Gross Income".to_string(),
                input: serde_json::json!({}),
                output: serde_json::json!({}),
                reasoning: "Test reasoning".to_string(),
            }],
            warnings: vec![AuditWarning {
                code: "NEGATIVE_NET_PAY".to_string(),
                message: "Test warning".to_string(),
                severity: "high".to_string(),
            }],
            duration_us: 1234,
        };

        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"duration_us\":1234"));
        assert!(json.contains("\"steps\":["));
        assert!(json.contains("\"warnings\":["));
    }

    #[test]
    fn test_payroll_calculation_serialization() {
        let calculation = PayrollCalculation {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2024-08-31T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            tax_schedule_version: "GH-PAYE-2024".to_string(),
            line: create_sample_line(),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        };

        let json = serde_json::to_string(&calculation).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"tax_schedule_version\":\"GH-PAYE-2024\""));
        assert!(json.contains("\"line\":{"));
        assert!(json.contains("\"audit_trace\":{"));
    }
}
