//! Progressive PAYE income tax.
//!
//! Taxable income is consumed band by band in schedule order. Each band
//! taxes at most its width at its marginal rate; the open top band takes
//! whatever remains.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::AuditStep;

/// How much of the income fell into one band and the tax charged on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandApplication {
    /// Position of the band in the schedule, starting at 1.
    pub band: usize,
    /// Marginal rate of the band.
    pub rate: Decimal,
    /// Income taxed in the band.
    pub taxed_amount: Decimal,
    /// Tax charged in the band.
    pub tax: Decimal,
}

/// The result of computing PAYE, including the audit step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// PAYE for the period.
    pub income_tax: Decimal,
    /// Bands that received income, in order.
    pub bands: Vec<BandApplication>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Splits `taxable_income` across the bands of `schedule`.
///
/// Bands after the one that exhausts the income are not listed. Zero or
/// negative income produces no applications.
pub fn apply_tax_bands(taxable_income: Decimal, schedule: &TaxSchedule) -> Vec<BandApplication> {
    let mut applications = Vec::new();
    let mut remaining = taxable_income;

    for (i, band) in schedule.bands.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }
        let taxed_amount = match band.width {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        applications.push(BandApplication {
            band: i + 1,
            rate: band.rate,
            taxed_amount,
            tax: taxed_amount * band.rate,
        });
        remaining -= taxed_amount;
    }

    applications
}

/// PAYE on `taxable_income` under `schedule`.
///
/// # Examples
///
/// ```
/// use hotel_ops_engine::calculation::income_tax;
/// use hotel_ops_engine::config::TaxSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = TaxSchedule::ghana_monthly_2024();
/// assert_eq!(income_tax(Decimal::from_str("490").unwrap(), &schedule), Decimal::ZERO);
/// assert_eq!(
///     income_tax(Decimal::from_str("600").unwrap(), &schedule),
///     Decimal::from_str("5.50").unwrap()
/// );
/// ```
pub fn income_tax(taxable_income: Decimal, schedule: &TaxSchedule) -> Decimal {
    apply_tax_bands(taxable_income, schedule)
        .iter()
        .map(|a| a.tax)
        .sum()
}

/// Computes PAYE and records the per-band breakdown.
pub fn calculate_income_tax(
    taxable_income: Decimal,
    schedule: &TaxSchedule,
    step_number: u32,
) -> IncomeTaxResult {
    let bands = apply_tax_bands(taxable_income, schedule);
    let tax: Decimal = bands.iter().map(|a| a.tax).sum();

    let breakdown: Vec<String> = bands
        .iter()
        .map(|a| {
            format!(
                "{} @ {}% = {}",
                a.taxed_amount.normalize(),
                (a.rate * Decimal::ONE_HUNDRED).normalize(),
                a.tax.normalize()
            )
        })
        .collect();

    let reasoning = if breakdown.is_empty() {
        "No taxable income - no PAYE".to_string()
    } else {
        format!("{}; total PAYE {}", breakdown.join(", "), tax.normalize())
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "PAYE Income Tax".to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
            "schedule_version": schedule.version
        }),
        output: serde_json::json!({
            "income_tax": tax.normalize().to_string(),
            "bands": bands
                .iter()
                .map(|a| serde_json::json!({
                    "band": a.band,
                    "rate": a.rate.normalize().to_string(),
                    "taxed_amount": a.taxed_amount.normalize().to_string(),
                    "tax": a.tax.normalize().to_string()
                }))
                .collect::<Vec<_>>()
        }),
        reasoning,
    };

    IncomeTaxResult {
        income_tax: tax,
        bands,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxBand;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ghana() -> TaxSchedule {
        TaxSchedule::ghana_monthly_2024()
    }

    /// IT-001: the tax-free band
    #[test]
    fn test_tax_free_threshold() {
        assert_eq!(income_tax(dec("490"), &ghana()), Decimal::ZERO);
        assert_eq!(income_tax(dec("100"), &ghana()), Decimal::ZERO);
    }

    /// IT-002: zero income pays nothing
    #[test]
    fn test_zero_income() {
        assert_eq!(income_tax(Decimal::ZERO, &ghana()), Decimal::ZERO);
        assert!(apply_tax_bands(Decimal::ZERO, &ghana()).is_empty());
    }

    /// IT-003: into the 5% band
    #[test]
    fn test_second_band() {
        assert_eq!(income_tax(dec("600"), &ghana()), dec("5.50"));
    }

    /// IT-004: partially into the 17.5% band
    #[test]
    fn test_fourth_band() {
        // 0 + 5.50 + 13 + (895 - 730) x 0.175
        assert_eq!(income_tax(dec("895"), &ghana()), dec("47.375"));
    }

    /// IT-005: top band
    #[test]
    fn test_top_band() {
        // 490 + 110 + 130 + 3166.67 + 16000 + 30520 = 50416.67
        let below_top =
            dec("0") + dec("5.50") + dec("13") + dec("554.16725") + dec("4000") + dec("9156");
        assert_eq!(income_tax(dec("50416.67"), &ghana()), below_top);
        assert_eq!(
            income_tax(dec("60416.67"), &ghana()),
            below_top + dec("3500")
        );
    }

    #[test]
    fn test_negative_income_pays_nothing() {
        assert_eq!(income_tax(dec("-50"), &ghana()), Decimal::ZERO);
    }

    #[test]
    fn test_band_applications() {
        let bands = apply_tax_bands(dec("700"), &ghana());

        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].taxed_amount, dec("490"));
        assert_eq!(bands[1].taxed_amount, dec("110"));
        assert_eq!(bands[2].band, 3);
        assert_eq!(bands[2].taxed_amount, dec("100"));
        assert_eq!(bands[2].tax, dec("10"));
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = TaxSchedule {
            version: "TEST-FLAT".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            bands: vec![
                TaxBand::bounded(dec("100"), Decimal::ZERO),
                TaxBand::remainder(dec("0.10")),
            ],
        };

        assert_eq!(income_tax(dec("1100"), &schedule), dec("100"));
    }

    #[test]
    fn test_audit_step_lists_bands() {
        let result = calculate_income_tax(dec("600"), &ghana(), 6);

        assert_eq!(result.income_tax, dec("5.50"));
        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.input["schedule_version"], "GH-PAYE-2024-MONTHLY");
        assert_eq!(result.audit_step.output["income_tax"], "5.5");
        assert_eq!(result.audit_step.output["bands"][1]["rate"], "0.05");
        assert!(result.audit_step.reasoning.contains("110 @ 5% = 5.5"));
    }

    #[test]
    fn test_audit_step_no_income() {
        let result = calculate_income_tax(Decimal::ZERO, &ghana(), 6);
        assert_eq!(result.audit_step.reasoning, "No taxable income - no PAYE");
    }

    proptest! {
        #[test]
        fn prop_tax_is_monotonic_and_below_top_rate(a in 0u64..10_000_000, b in 0u64..10_000_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low = Decimal::new(low as i64, 2);
            let high = Decimal::new(high as i64, 2);
            let schedule = ghana();

            let tax_low = income_tax(low, &schedule);
            let tax_high = income_tax(high, &schedule);

            prop_assert!(tax_low <= tax_high);
            prop_assert!(tax_high >= Decimal::ZERO);
            prop_assert!(tax_high <= high * dec("0.35"));
        }
    }
}
