//! Cross-model consistency tests for the closed-form and lattice pricers.
//!
//! # Test Categories
//!
//! 1. **Put-call parity** of the closed form (property test)
//! 2. **Convergence**: lattice European value approaches the closed form
//! 3. **Early exercise**: American values dominate their European counterparts

use approx::assert_abs_diff_eq;
use pricer_core::{Contract, ExerciseStyle, Measure, OptionPricer, OptionType};
use pricer_models::{AnalyticPricer, LatticePricer};
use proptest::prelude::*;

fn european(option_type: OptionType, spot: f64, rate: f64, steps: usize) -> Contract {
    Contract::new(
        option_type,
        ExerciseStyle::European,
        spot,
        100.0,
        1.0,
        rate,
        0.2,
        steps,
    )
    .unwrap()
}

fn analytic_value(contract: &Contract) -> f64 {
    AnalyticPricer.price(contract).unwrap().value().unwrap()
}

fn lattice_value(contract: &Contract) -> f64 {
    LatticePricer.price(contract).unwrap().value().unwrap()
}

// ============================================================================
// Closed form
// ============================================================================

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 10.0f64..300.0,
        strike in 10.0f64..300.0,
        maturity in 0.01f64..5.0,
        rate in -0.05f64..0.15,
        volatility in 0.05f64..1.0,
    ) {
        let call = Contract::new(
            OptionType::Call, ExerciseStyle::European, spot, strike, maturity, rate, volatility, 1,
        ).unwrap();
        let put = Contract::new(
            OptionType::Put, ExerciseStyle::European, spot, strike, maturity, rate, volatility, 1,
        ).unwrap();

        let c = analytic_value(&call);
        let p = analytic_value(&put);
        let forward = spot - strike * (-rate * maturity).exp();
        prop_assert!((c - p - forward).abs() < 1e-9, "C - P = {}, S - K·df = {}", c - p, forward);
    }

    #[test]
    fn prop_american_at_least_european(
        spot in 50.0f64..150.0,
        rate in 0.0f64..0.1,
        put in any::<bool>(),
    ) {
        let option_type = if put { OptionType::Put } else { OptionType::Call };
        let e = european(option_type, spot, rate, 200);
        let a = e.with_style(ExerciseStyle::American);
        // lattice discretisation error at 200 steps is well below this margin
        prop_assert!(lattice_value(&a) >= analytic_value(&e) - 0.05);
    }
}

#[test]
fn test_textbook_atm_call() {
    let m = AnalyticPricer.price(&european(OptionType::Call, 100.0, 0.05, 1)).unwrap();
    assert_abs_diff_eq!(m.value().unwrap(), 10.4506, epsilon = 1e-3);
    assert_abs_diff_eq!(m.get(Measure::Delta).unwrap(), 0.6368, epsilon = 1e-3);
}

// ============================================================================
// Lattice convergence
// ============================================================================

#[test]
fn test_lattice_european_converges_to_analytic() {
    for option_type in [OptionType::Call, OptionType::Put] {
        let reference = analytic_value(&european(option_type, 100.0, 0.05, 1));
        let coarse = (lattice_value(&european(option_type, 100.0, 0.05, 25)) - reference).abs();
        let fine = (lattice_value(&european(option_type, 100.0, 0.05, 1000)) - reference).abs();

        assert!(fine < 0.01, "{} error at 1000 steps: {}", option_type, fine);
        assert!(fine < coarse, "{}: {} !< {}", option_type, fine, coarse);
    }
}

#[test]
fn test_american_call_matches_european_without_dividends() {
    let e = european(OptionType::Call, 100.0, 0.05, 1000);
    let a = e.with_style(ExerciseStyle::American);
    assert_abs_diff_eq!(lattice_value(&a), analytic_value(&e), epsilon = 0.02);
}

#[test]
fn test_zero_rate_american_put_matches_european() {
    let e = european(OptionType::Put, 100.0, 0.0, 1000);
    let a = e.with_style(ExerciseStyle::American);
    assert_abs_diff_eq!(lattice_value(&a), analytic_value(&e), epsilon = 0.02);
}

#[test]
fn test_deep_itm_american_put_exceeds_european() {
    let e = european(OptionType::Put, 70.0, 0.08, 500);
    let a = e.with_style(ExerciseStyle::American);
    assert!(lattice_value(&a) > lattice_value(&e) + 0.5);
    assert!(lattice_value(&a) > analytic_value(&e) + 0.5);
}

#[test]
fn test_short_maturity_tends_to_intrinsic() {
    for (option_type, spot) in [(OptionType::Call, 120.0), (OptionType::Put, 80.0)] {
        for style in [ExerciseStyle::European, ExerciseStyle::American] {
            let c = Contract::new(option_type, style, spot, 100.0, 1e-10, 0.05, 0.2, 10).unwrap();
            assert_abs_diff_eq!(lattice_value(&c), 20.0, epsilon = 1e-6);
            if style == ExerciseStyle::European {
                assert_abs_diff_eq!(analytic_value(&c), 20.0, epsilon = 1e-6);
            }
        }
    }
}
