//! Dispatcher and cache behaviour of `PricingEngine`.
//!
//! # Test Categories
//!
//! 1. **Legal model matrix**: every (style, model) pair
//! 2. **Cache idempotence**: repeated requests never reach the pricer twice
//! 3. **Pricer registration**: instrumented pricers swapped in per model

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pricer_core::{
    Contract, ExerciseStyle, Measure, MeasureSet, OptionPricer, OptionType, PricingError,
    PricingModel,
};
use pricer_models::AnalyticPricer;
use pricer_pricing::{EngineConfig, PricingEngine};

/// Forwards to an inner pricer and counts invocations.
struct CountingPricer<P> {
    inner: P,
    calls: Arc<AtomicUsize>,
}

impl<P: OptionPricer> OptionPricer for CountingPricer<P> {
    fn model(&self) -> PricingModel {
        self.inner.model()
    }

    fn price(&self, contract: &Contract) -> Result<MeasureSet, PricingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.price(contract)
    }
}

/// Routes engine events to the test output; `RUST_LOG=debug` shows cache traffic.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn seeded_engine() -> PricingEngine {
    init_tracing();
    PricingEngine::with_config(
        EngineConfig::builder()
            .path_count(500)
            .seed(42)
            .build()
            .unwrap(),
    )
}

fn contract(style: ExerciseStyle) -> Contract {
    Contract::new(OptionType::Call, style, 100.0, 100.0, 1.0, 0.05, 0.2, 20).unwrap()
}

// ============================================================================
// Legal model matrix
// ============================================================================

#[test]
fn test_exhaustive_dispatch_matrix() {
    let mut engine = seeded_engine();

    for style in [ExerciseStyle::European, ExerciseStyle::American] {
        for model in PricingModel::ALL {
            let result = engine.price(&contract(style), model);
            let legal = style.legal_models().contains(&model);

            match result {
                Ok(measures) => {
                    assert!(legal, "{} / {} should be rejected", style, model);
                    assert!(measures.value().is_some());
                }
                Err(PricingError::UnsupportedModel { model: m, style: s }) => {
                    assert!(!legal, "{} / {} should be priced", style, model);
                    assert_eq!((m, s), (model, style));
                }
                Err(other) => panic!("{} / {}: unexpected error {}", style, model, other),
            }
        }
    }

    // four legal pairs, two illegal ones never reach the cache
    assert_eq!(engine.cache_len(), 4);
}

#[test]
fn test_measures_per_model() {
    let mut engine = seeded_engine();

    let analytic = engine
        .price(&contract(ExerciseStyle::European), PricingModel::Analytic)
        .unwrap();
    let lattice = engine
        .price(&contract(ExerciseStyle::American), PricingModel::Lattice)
        .unwrap();
    let simulation = engine
        .price(&contract(ExerciseStyle::American), PricingModel::Simulation)
        .unwrap();

    assert_eq!(analytic.len(), 6);
    assert_eq!(lattice.len(), 1);
    assert_eq!(simulation.len(), 6);
    assert!(!lattice.contains(Measure::Delta));
}

// ============================================================================
// Cache
// ============================================================================

#[test]
fn test_cache_idempotence_skips_pricer() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut engine = PricingEngine::new();
    engine.register(CountingPricer {
        inner: AnalyticPricer::new(),
        calls: Arc::clone(&calls),
    });

    let built = Contract::builder(OptionType::Call, ExerciseStyle::European)
        .volatility(0.2)
        .steps(20)
        .rate(0.05)
        .maturity(1.0)
        .strike(100.0)
        .spot(100.0)
        .build()
        .unwrap();
    let constructed = contract(ExerciseStyle::European);
    assert_eq!(built.stable_hash(), constructed.stable_hash());

    let first = engine.price(&built, PricingModel::Analytic).unwrap();
    let second = engine.price(&constructed, PricingModel::Analytic).unwrap();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(engine.stats().hits, 1);
    assert_eq!(engine.stats().misses, 1);
    assert_eq!(engine.cache_len(), 1);
}

#[test]
fn test_cache_distinguishes_models_and_fields() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut engine = PricingEngine::new();
    engine.register(CountingPricer {
        inner: AnalyticPricer::new(),
        calls: Arc::clone(&calls),
    });

    let base = contract(ExerciseStyle::European);
    engine.price(&base, PricingModel::Analytic).unwrap();
    engine
        .price(&base.with_spot(100.5).unwrap(), PricingModel::Analytic)
        .unwrap();
    engine.price(&base, PricingModel::Simulation).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(engine.cache_len(), 3);
}

#[test]
fn test_unseeded_simulation_is_cached() {
    let mut engine = PricingEngine::new();
    let c = contract(ExerciseStyle::European);

    let first = engine.price(&c, PricingModel::Simulation).unwrap();
    let second = engine.price(&c, PricingModel::Simulation).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_clear_cache_forces_repricing() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut engine = PricingEngine::new();
    engine.register(CountingPricer {
        inner: AnalyticPricer::new(),
        calls: Arc::clone(&calls),
    });

    let c = contract(ExerciseStyle::European);
    engine.price_default(&c).unwrap();
    engine.clear_cache();
    engine.price_default(&c).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_zero_rate_simulation_error_is_not_cached() {
    let mut engine = seeded_engine();
    let c = Contract::new(
        OptionType::Put,
        ExerciseStyle::European,
        100.0,
        100.0,
        1.0,
        0.0,
        0.2,
        5,
    )
    .unwrap();

    assert!(matches!(
        engine.price(&c, PricingModel::Simulation),
        Err(PricingError::NumericalInstability(_))
    ));
    assert_eq!(engine.cache_len(), 0);

    // the closed form has no such restriction
    assert!(engine.price(&c, PricingModel::Analytic).is_ok());
}
