//! The unit algebra: products and quotients of measures of any dimension

use gauge_core::{Dimension, GaugeError, Op};
use crate::{AlgebraConfig, DerivedUnitCache, Measurable, Measure, NamedResults, Unit};

/// Engine that multiplies and divides measures across dimensions.
///
/// Owns the derived-unit cache and the named-result table, so independent
/// engines share nothing. Most programs build one and pass it by reference
/// to every task; the engine is `Send + Sync`.
///
/// ```
/// use gauge_units::{Measurable, UnitAlgebra};
/// use gauge_units::units::{METERS, SECONDS, METERS_PER_SECOND};
///
/// let algebra = UnitAlgebra::new();
/// let speed = algebra.divide(&METERS.of(10.0), &SECONDS.of(2.0));
/// assert_eq!(speed.unit(), &*METERS_PER_SECOND);
/// assert_eq!(speed.magnitude(), 5.0);
/// ```
#[derive(Debug)]
pub struct UnitAlgebra {
    cache: DerivedUnitCache,
    rules: NamedResults,
    config: AlgebraConfig,
}

impl UnitAlgebra {
    pub fn new() -> Self {
        Self::with_config(AlgebraConfig::default())
    }

    pub fn with_config(config: AlgebraConfig) -> Self {
        let rules = if config.named_results {
            NamedResults::standard()
        } else {
            NamedResults::empty()
        };
        Self {
            cache: DerivedUnitCache::with_warn_threshold(config.cache_warn_threshold),
            rules,
            config,
        }
    }

    /// Engine with a custom named-result table
    pub fn with_rules(rules: NamedResults) -> Self {
        let config = AlgebraConfig::default();
        Self {
            cache: DerivedUnitCache::with_warn_threshold(config.cache_warn_threshold),
            rules,
            config,
        }
    }

    /// Engine configured from the file named by `GAUGE_CONFIG`
    pub fn from_env() -> Result<Self, GaugeError> {
        Ok(Self::with_config(AlgebraConfig::from_env()?))
    }

    pub fn config(&self) -> &AlgebraConfig {
        &self.config
    }

    pub fn cache(&self) -> &DerivedUnitCache {
        &self.cache
    }

    pub fn rules(&self) -> &NamedResults {
        &self.rules
    }

    /// Add a named result; see [`NamedResults::register`]
    pub fn register_rule(&mut self, op: Op, left: Dimension, right: Dimension, result: &Unit) -> Result<(), GaugeError> {
        self.rules.register(op, left, right, result)
    }

    /// The unit of `left op right`: a named result if one applies,
    /// otherwise the cached derived unit
    pub fn combine(&self, op: Op, left: &Unit, right: &Unit) -> Unit {
        match self.rules.lookup(op, left, right) {
            Some(unit) => unit,
            None => self.cache.combine(op, left, right),
        }
    }

    pub fn times<L, R>(&self, left: &L, right: &R) -> Measure
    where
        L: Measurable + ?Sized,
        R: Measurable + ?Sized,
    {
        self.apply(Op::Mult, left, right)
    }

    /// Quotient of two measures; a zero divisor yields an infinite or NaN magnitude
    pub fn divide<L, R>(&self, left: &L, right: &R) -> Measure
    where
        L: Measurable + ?Sized,
        R: Measurable + ?Sized,
    {
        self.apply(Op::Per, left, right)
    }

    /// `measure` per one `period`, same as dividing by `period.one()`
    pub fn per<M: Measurable + ?Sized>(&self, measure: &M, period: &Unit) -> Measure {
        self.divide(measure, &period.one())
    }

    fn apply<L, R>(&self, op: Op, left: &L, right: &R) -> Measure
    where
        L: Measurable + ?Sized,
        R: Measurable + ?Sized,
    {
        let unit = self.combine(op, left.unit(), right.unit());
        let base_magnitude = op.apply(left.base_unit_magnitude(), right.base_unit_magnitude());
        Measure::of_base_units(base_magnitude, &unit)
    }
}

impl Default for UnitAlgebra {
    fn default() -> Self {
        Self::new()
    }
}
