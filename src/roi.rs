// Pure ROI engine for the landing page calculator. No DOM access in this
// module so the formulas can be tested without a browser.

const RECOVERY_DELTA: f64 = 0.40;
const COLLECTION_UPLIFT: f64 = 0.85;
const RENTALS_PER_VEHICLE_MONTH: f64 = 4.0;
const MONTHS_PER_YEAR: f64 = 12.0;

pub mod defaults {
    pub const FLEET: f64 = 50.0;
    pub const VEHICLE_VALUE: f64 = 25_000.0;
    pub const STAFF_RATE: f64 = 20.0;
    pub const MONTHLY_REVENUE: f64 = 1_200.0;
    pub const THEFT_RATE: f64 = 1.0;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Segment {
    Rental,
    Gig,
    Corporate,
}

impl Segment {
    // Unknown or empty tags fall back to Gig rather than failing.
    pub fn from_tag(tag: &str) -> Segment {
        match tag {
            "rental" => Segment::Rental,
            "gig" => Segment::Gig,
            "corporate" => Segment::Corporate,
            _ => Segment::Gig,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Segment::Rental => "rental",
            Segment::Gig => "gig",
            Segment::Corporate => "corporate",
        }
    }

    pub fn profile(self) -> &'static SegmentProfile {
        match self {
            Segment::Rental => &RENTAL_PROFILE,
            Segment::Gig => &GIG_PROFILE,
            Segment::Corporate => &CORPORATE_PROFILE,
        }
    }
}

pub struct SegmentProfile {
    pub staff_label: &'static str,
    pub staff_hint: &'static str,
    pub bonus_label: &'static str,
    pub bonus_hint: &'static str,
    pub staff_result_label: &'static str,
    pub bonus_result_label: &'static str,
    pub staff_default: f64,
    pub bonus_default: f64,
    pub uses_revenue: bool,
}

static RENTAL_PROFILE: SegmentProfile = SegmentProfile {
    staff_label: "Minutes saved per rental",
    staff_hint: "Key handover, walkaround and paperwork time recovered per rental",
    bonus_label: "Revenue uplift (%)",
    bonus_hint: "Extra bookings from faster turnaround and live availability",
    staff_result_label: "Staff Time Savings",
    bonus_result_label: "Utilization Uplift",
    staff_default: 20.0,
    bonus_default: 6.0,
    uses_revenue: true,
};

static GIG_PROFILE: SegmentProfile = SegmentProfile {
    staff_label: "Admin hours saved per vehicle / month",
    staff_hint: "Chasing drivers, mileage logs and dispute handling",
    bonus_label: "Unpaid earnings (% of revenue)",
    bonus_hint: "Driver debt you could recover with verified trip data",
    staff_result_label: "Admin Time Savings",
    bonus_result_label: "Recovered Earnings",
    staff_default: 1.5,
    bonus_default: 7.0,
    uses_revenue: true,
};

static CORPORATE_PROFILE: SegmentProfile = SegmentProfile {
    staff_label: "Minutes saved per vehicle / month",
    staff_hint: "Trip logging and mileage reporting done automatically",
    bonus_label: "Fleet right-sizing (%)",
    bonus_hint: "Share of vehicles you could retire with utilization data",
    staff_result_label: "Staff Time Savings",
    bonus_result_label: "Right-sizing Value",
    staff_default: 15.0,
    bonus_default: 5.0,
    uses_revenue: false,
};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CalculationInput {
    pub fleet: f64,
    pub vehicle_value: f64,
    pub staff_rate: f64,
    pub monthly_revenue: f64,
    pub theft_rate: f64,
    pub staff_metric: f64,
    pub bonus_metric: f64,
}

impl Default for CalculationInput {
    fn default() -> Self {
        CalculationInput {
            fleet: defaults::FLEET,
            vehicle_value: defaults::VEHICLE_VALUE,
            staff_rate: defaults::STAFF_RATE,
            monthly_revenue: defaults::MONTHLY_REVENUE,
            theft_rate: defaults::THEFT_RATE,
            staff_metric: GIG_PROFILE.staff_default,
            bonus_metric: GIG_PROFILE.bonus_default,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CalculationResult {
    pub asset_savings: f64,
    pub staff_savings: f64,
    pub bonus_savings: f64,
    pub total: f64,
}

/// Parse a form field, falling back to `default` when the field is empty or
/// not a number. An explicit `"0"` stays zero.
pub fn resolve(raw: &str, default: f64) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

pub fn calculate(segment: Segment, input: &CalculationInput) -> CalculationResult {
    // Asset protection is the same for every segment.
    let theft_risk = input.fleet * (input.theft_rate / 100.0);
    let asset_savings = theft_risk * input.vehicle_value * RECOVERY_DELTA;

    let (staff_savings, bonus_savings) = match segment {
        Segment::Rental => (
            ((input.fleet * RENTALS_PER_VEHICLE_MONTH) * input.staff_metric / 60.0)
                * input.staff_rate
                * MONTHS_PER_YEAR,
            input.fleet * input.monthly_revenue * (input.bonus_metric / 100.0) * MONTHS_PER_YEAR,
        ),
        Segment::Gig => (
            input.fleet * input.staff_metric * input.staff_rate * MONTHS_PER_YEAR,
            input.fleet
                * (input.bonus_metric / 100.0)
                * input.monthly_revenue
                * COLLECTION_UPLIFT
                * MONTHS_PER_YEAR,
        ),
        Segment::Corporate => (
            (input.staff_metric * input.fleet / 60.0) * input.staff_rate * MONTHS_PER_YEAR,
            (input.fleet * (input.bonus_metric / 100.0)) * input.vehicle_value,
        ),
    };

    CalculationResult {
        asset_savings,
        staff_savings,
        bonus_savings,
        total: asset_savings + staff_savings + bonus_savings,
    }
}

/// `1234.6` renders as `"$1,235"`. Rounding happens here and only here.
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("$-{grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_input() -> CalculationInput {
        CalculationInput {
            fleet: 50.0,
            vehicle_value: 25_000.0,
            staff_rate: 20.0,
            monthly_revenue: 1_200.0,
            theft_rate: 1.0,
            staff_metric: 1.5,
            bonus_metric: 7.0,
        }
    }

    #[test]
    fn resolve_empty_and_garbage_fall_back() {
        assert_eq!(resolve("", 50.0), 50.0);
        assert_eq!(resolve("   ", 50.0), 50.0);
        assert_eq!(resolve("abc", 50.0), 50.0);
        assert_eq!(resolve("12abc", 50.0), 50.0);
        assert_eq!(resolve("NaN", 50.0), 50.0);
        assert_eq!(resolve("inf", 50.0), 50.0);
    }

    #[test]
    fn resolve_keeps_explicit_values() {
        assert_eq!(resolve("0", 50.0), 0.0);
        assert_eq!(resolve("-3", 50.0), -3.0);
        assert_eq!(resolve("2.5", 50.0), 2.5);
        assert_eq!(resolve(" 120 ", 50.0), 120.0);
    }

    #[test]
    fn empty_field_matches_explicit_default() {
        let defaulted = CalculationInput {
            fleet: resolve("", defaults::FLEET),
            ..sample_input()
        };
        let explicit = CalculationInput {
            fleet: resolve("50", defaults::FLEET),
            ..sample_input()
        };
        assert_eq!(
            calculate(Segment::Gig, &defaulted),
            calculate(Segment::Gig, &explicit)
        );
    }

    #[test]
    fn explicit_zero_is_not_defaulted() {
        let zeroed = CalculationInput {
            fleet: resolve("0", defaults::FLEET),
            ..sample_input()
        };
        let result = calculate(Segment::Gig, &zeroed);
        assert_approx(result.total, 0.0);
    }

    #[test]
    fn gig_default_scenario() {
        let result = calculate(Segment::Gig, &sample_input());
        assert_approx(result.asset_savings, 5_000.0);
        assert_approx(result.staff_savings, 18_000.0);
        assert_approx(result.bonus_savings, 42_840.0);
        assert_approx(result.total, 65_840.0);
    }

    #[test]
    fn rental_default_scenario() {
        let input = CalculationInput {
            staff_metric: 20.0,
            bonus_metric: 6.0,
            ..sample_input()
        };
        let result = calculate(Segment::Rental, &input);
        assert_approx(result.asset_savings, 5_000.0);
        // ((50 * 4) * 20 / 60) * 20 * 12
        assert_approx(result.staff_savings, 16_000.0);
        // 50 * 1200 * 0.06 * 12
        assert_approx(result.bonus_savings, 43_200.0);
        assert_approx(result.total, 64_200.0);
    }

    #[test]
    fn corporate_ignores_monthly_revenue() {
        let base = CalculationInput {
            staff_metric: 15.0,
            bonus_metric: 5.0,
            ..sample_input()
        };
        let doubled = CalculationInput {
            monthly_revenue: base.monthly_revenue * 2.0,
            ..base
        };
        assert_eq!(
            calculate(Segment::Corporate, &base),
            calculate(Segment::Corporate, &doubled)
        );
        assert!(!Segment::Corporate.profile().uses_revenue);
        assert!(Segment::Rental.profile().uses_revenue);
        assert!(Segment::Gig.profile().uses_revenue);
    }

    #[test]
    fn corporate_default_scenario() {
        let input = CalculationInput {
            staff_metric: 15.0,
            bonus_metric: 5.0,
            ..sample_input()
        };
        let result = calculate(Segment::Corporate, &input);
        // (15 * 50 / 60) * 20 * 12
        assert_approx(result.staff_savings, 3_000.0);
        // (50 * 0.05) * 25000
        assert_approx(result.bonus_savings, 62_500.0);
        assert_approx(result.total, 70_500.0);
    }

    #[test]
    fn unknown_tag_falls_back_to_gig() {
        assert_eq!(Segment::from_tag("rental"), Segment::Rental);
        assert_eq!(Segment::from_tag("gig"), Segment::Gig);
        assert_eq!(Segment::from_tag("corporate"), Segment::Corporate);
        assert_eq!(Segment::from_tag(""), Segment::Gig);
        assert_eq!(Segment::from_tag("enterprise"), Segment::Gig);
        assert_eq!(Segment::from_tag("Rental"), Segment::Gig);
    }

    #[test]
    fn profiles_carry_segment_defaults() {
        assert_eq!(Segment::Rental.profile().staff_default, 20.0);
        assert_eq!(Segment::Rental.profile().bonus_default, 6.0);
        assert_eq!(Segment::Gig.profile().staff_default, 1.5);
        assert_eq!(Segment::Gig.profile().bonus_default, 7.0);
    }

    #[test]
    fn calculation_is_deterministic() {
        let input = sample_input();
        assert_eq!(
            calculate(Segment::Rental, &input),
            calculate(Segment::Rental, &input)
        );
    }

    #[test]
    fn format_money_rounds_and_groups() {
        assert_eq!(format_money(1234.4), "$1,234");
        assert_eq!(format_money(1234.6), "$1,235");
        assert_eq!(format_money(1234.5), "$1,235");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(999.0), "$999");
        assert_eq!(format_money(1_000.0), "$1,000");
        assert_eq!(format_money(1_234_567.0), "$1,234,567");
        assert_eq!(format_money(-1234.6), "$-1,235");
    }

    proptest! {
        #[test]
        fn total_is_sum_of_parts(
            fleet in 0.0..10_000.0f64,
            vehicle_value in 0.0..500_000.0f64,
            staff_rate in 0.0..500.0f64,
            monthly_revenue in 0.0..100_000.0f64,
            theft_rate in 0.0..100.0f64,
            staff_metric in 0.0..1_000.0f64,
            bonus_metric in 0.0..100.0f64,
        ) {
            let input = CalculationInput {
                fleet,
                vehicle_value,
                staff_rate,
                monthly_revenue,
                theft_rate,
                staff_metric,
                bonus_metric,
            };
            for segment in [Segment::Rental, Segment::Gig, Segment::Corporate] {
                let r = calculate(segment, &input);
                prop_assert!(
                    r.total == r.asset_savings + r.staff_savings + r.bonus_savings
                );
                prop_assert!(r.total.is_finite());
            }
        }

        #[test]
        fn corporate_revenue_never_matters(
            monthly_revenue in 0.0..100_000.0f64,
        ) {
            let base = CalculationInput::default();
            let varied = CalculationInput { monthly_revenue, ..base };
            prop_assert!(
                calculate(Segment::Corporate, &base)
                    == calculate(Segment::Corporate, &varied)
            );
        }
    }
}
