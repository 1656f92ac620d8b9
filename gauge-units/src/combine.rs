//! Synthesis of derived (Mult / Per) units

use gauge_core::{ConversionLaw, Op};
use crate::unit::{Unit, UnitKind};

/// Build a fresh derived unit, bypassing any cache.
///
/// Repeated calls return equal but distinct units. Use
/// [`DerivedUnitCache::combine`](crate::DerivedUnitCache::combine) when the
/// result must be identity-stable.
pub fn synthesize(op: Op, left: &Unit, right: &Unit) -> Unit {
    let base = if left.is_base() && right.is_base() {
        None
    } else {
        Some(synthesize(op, &left.base_unit(), &right.base_unit()))
    };
    synthesize_with_base(op, left, right, base)
}

/// Build a derived unit whose base has already been resolved.
///
/// The law scales by the operands' base values at 1, so combining the
/// operands' base magnitudes with `op` yields the result's base magnitude.
pub(crate) fn synthesize_with_base(op: Op, left: &Unit, right: &Unit, base: Option<Unit>) -> Unit {
    let factor = op.apply(left.to_base(1.0), right.to_base(1.0));
    let (name, symbol) = match op {
        Op::Mult => (
            format!("{}-{}", left.name(), right.name()),
            format!("{}*{}", left.symbol(), right.symbol()),
        ),
        Op::Per => (
            format!("{} per {}", left.name(), right.name()),
            format!("{}/{}", left.symbol(), right.symbol()),
        ),
    };

    Unit::from_parts(
        name,
        symbol,
        op.combine_dimensions(&left.dimension(), &right.dimension()),
        ConversionLaw::linear(factor),
        base,
        UnitKind::Derived {
            op,
            left: left.clone(),
            right: right.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gauge_core::Dimension;

    fn meter() -> Unit {
        Unit::base(Dimension::LENGTH, "Meter", "m")
    }

    fn second() -> Unit {
        Unit::base(Dimension::TIME, "Second", "s")
    }

    #[test]
    fn test_per_of_base_units_is_own_base() {
        let mps = synthesize(Op::Per, &meter(), &second());
        assert!(mps.is_base());
        assert!(mps.is_derived());
        assert_eq!(mps.dimension(), Dimension::VELOCITY);
        assert!(mps.law().is_identity());
        assert_eq!(mps.symbol(), "m/s");
        assert_eq!(mps.name(), "Meter per Second");
    }

    #[test]
    fn test_mult_names() {
        let ms = synthesize(Op::Mult, &meter(), &second());
        assert_eq!(ms.symbol(), "m*s");
        assert_eq!(ms.name(), "Meter-Second");
        assert_eq!(ms.dimension(), Dimension::LENGTH.multiply(&Dimension::TIME));
    }

    #[test]
    fn test_scaled_operands() {
        let ft = meter().scaled("Foot", "ft", 0.3048);
        let min = second().scaled("Minute", "min", 60.0);
        let fpm = synthesize(Op::Per, &ft, &min);

        assert!(!fpm.is_base());
        assert_eq!(fpm.base_unit(), synthesize(Op::Per, &meter(), &second()));
        assert_relative_eq!(fpm.to_base(1.0), 0.3048 / 60.0, max_relative = 1e-12);
        assert_relative_eq!(fpm.from_base(0.3048 / 60.0), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_fresh_instances_are_equal_not_identical() {
        let a = synthesize(Op::Per, &meter(), &second());
        let b = synthesize(Op::Per, &meter(), &second());
        assert_eq!(a, b);
        assert!(!Unit::ptr_eq(&a, &b));
    }

    #[test]
    fn test_operator_and_order_matter() {
        let per = synthesize(Op::Per, &meter(), &second());
        let mult = synthesize(Op::Mult, &meter(), &second());
        let flipped = synthesize(Op::Per, &second(), &meter());
        assert_ne!(per, mult);
        assert_ne!(per, flipped);
    }

    #[test]
    fn test_nested() {
        let mps = synthesize(Op::Per, &meter(), &second());
        let mpss = synthesize(Op::Per, &mps, &second());
        assert_eq!(mpss.dimension(), Dimension::ACCELERATION);
        assert_eq!(mpss.symbol(), "m/s/s");
        assert!(mpss.is_base());
    }
}
