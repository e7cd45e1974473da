use golden_core::constants::PHI;
use golden_core::{weight_suppression, HierarchicalYukawa, ModularWeights};
use proptest::prelude::*;

proptest! {
    #[test]
    fn suppression_steps_by_inverse_sqrt_phi(w in -20.0f64..40.0) {
        let ratio = weight_suppression(w + 1.0) / weight_suppression(w);
        prop_assert!((ratio - PHI.powf(-0.5)).abs() < 1e-12);
    }

    #[test]
    fn suppression_is_positive_and_finite(w in -100.0f64..100.0) {
        let s = weight_suppression(w);
        prop_assert!(s > 0.0);
        prop_assert!(s.is_finite());
    }

    #[test]
    fn couplings_are_linear_in_the_overall_coupling(
        k in prop::array::uniform3(-4i32..12),
        g in 0.01f64..100.0,
    ) {
        let h = HierarchicalYukawa::default();
        let weights = ModularWeights::from(k);
        let unit = h.suppressed_couplings(weights, 1.0);
        let scaled = h.suppressed_couplings(weights, g);
        for (u, s) in unit.iter().zip(scaled) {
            prop_assert!((g * u - s).abs() <= 1e-12 * s.abs().max(1.0));
        }
    }

    #[test]
    fn masses_are_sorted_and_non_negative(k in prop::array::uniform3(0i32..12)) {
        let masses = HierarchicalYukawa::default()
            .mass_hierarchy(ModularWeights::from(k), 1.0)
            .unwrap();
        prop_assert!(masses.iter().all(|&m| m >= 0.0));
        prop_assert!(masses[0] >= masses[1] && masses[1] >= masses[2]);
    }
}
