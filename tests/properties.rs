//! Properties of the transition models and the stability extractor.

use adaptive_play::analysis::Stable;
use adaptive_play::analysis::Stationary;
use adaptive_play::dynamics::Matrix;
use adaptive_play::dynamics::Perturbed;
use adaptive_play::dynamics::Transition;
use adaptive_play::dynamics::Unperturbed;
use adaptive_play::game::Payoffs;
use adaptive_play::history::Space;
use adaptive_play::*;
use proptest::prelude::*;

fn payoffs() -> impl Strategy<Value = Payoffs> {
    (2usize..=3, any::<u64>()).prop_map(|(n, seed)| Payoffs::random(n, seed))
}

fn setup() -> impl Strategy<Value = (Payoffs, usize, usize)> {
    payoffs().prop_flat_map(|payoffs| {
        let m = match payoffs.num_act() {
            2 => 1usize..=3,
            _ => 1usize..=2,
        };
        m.prop_flat_map(move |m| (Just(payoffs.clone()), Just(m), 1..=m))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn rows_are_stochastic((payoffs, m, k) in setup(), epsilon in 0.0..=1.0f64) {
        let space = Space::new(m, payoffs.num_act()).unwrap();
        let unperturbed = Matrix::unperturbed(&space, k, &payoffs).unwrap();
        let perturbed = Matrix::perturbed(&space, k, epsilon, &payoffs).unwrap();
        for matrix in [unperturbed, perturbed] {
            for row in matrix.rows() {
                prop_assert!(row.iter().all(|p| (0. ..=1.).contains(p)));
                prop_assert!((row.iter().sum::<Probability>() - 1.).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn infeasible_pairs_are_zero((payoffs, m, k) in setup(), i in any::<prop::sample::Index>(), j in any::<prop::sample::Index>()) {
        let space = Space::new(m, payoffs.num_act()).unwrap();
        let pre = &space.states()[i.index(space.len())];
        let suc = &space.states()[j.index(space.len())];
        let unperturbed = Unperturbed::new(k, payoffs.clone());
        let perturbed = Perturbed::new(unperturbed.clone(), 0.3).unwrap();
        if pre.periods()[1..] != suc.periods()[..m - 1] {
            prop_assert_eq!(unperturbed.probability(pre, suc), 0.);
            prop_assert_eq!(perturbed.probability(pre, suc), 0.);
        }
    }

    #[test]
    fn small_epsilon_recovers_unperturbed((payoffs, m, k) in setup(), i in any::<prop::sample::Index>(), a1 in 0usize..3, a2 in 0usize..3) {
        let space = Space::new(m, payoffs.num_act()).unwrap();
        let n = payoffs.num_act();
        let pre = &space.states()[i.index(space.len())];
        let suc = pre.push(game::Profile::new(a1 % n, a2 % n));
        let unperturbed = Unperturbed::new(k, payoffs.clone());
        let perturbed = Perturbed::new(unperturbed.clone(), 1e-6).unwrap();
        prop_assert!((perturbed.probability(pre, &suc) - unperturbed.probability(pre, &suc)).abs() < 1e-5);
    }

    #[test]
    fn cases_decompose_the_total((payoffs, m, k) in setup(), epsilon in 0.0..=1.0f64, i in any::<prop::sample::Index>(), a1 in 0usize..3, a2 in 0usize..3) {
        let space = Space::new(m, payoffs.num_act()).unwrap();
        let n = payoffs.num_act();
        let pre = &space.states()[i.index(space.len())];
        let suc = pre.push(game::Profile::new(a1 % n, a2 % n));
        let model = Perturbed::new(Unperturbed::new(k, payoffs.clone()), epsilon).unwrap();
        let cases = model.cases(pre, &suc).expect("pushed histories are feasible");
        prop_assert!(cases.all().iter().all(|&p| p >= 0.));
        prop_assert_eq!(cases.all().iter().sum::<Probability>(), model.probability(pre, &suc));
    }

    #[test]
    fn built_matrices_are_stochastic_or_rejected(m in 1usize..=2, k in 0usize..=3, n in 1usize..=3, payoffs in payoffs()) {
        let space = Space::new(m, n).unwrap();
        match Matrix::unperturbed(&space, k, &payoffs) {
            Ok(matrix) => {
                prop_assert!(k >= 1 && k <= m && payoffs.num_act() == n);
                prop_assert!(matrix.is_stochastic());
            }
            Err(Error::Configuration(_)) => prop_assert!(k == 0 || k > m),
            Err(Error::ShapeMismatch { .. }) => prop_assert!(payoffs.num_act() != n),
            Err(e) => prop_assert!(false, "unexpected {}", e),
        }
    }

    #[test]
    fn threshold_is_strict_and_complete(weights in prop::collection::vec(0.0..1.0f64, 1..64)) {
        let total = weights.iter().sum::<f64>();
        prop_assume!(total > 0.);
        let mass = weights.iter().map(|w| w / total).collect::<Vec<_>>();
        let stationary = Stationary::try_from(mass.clone()).unwrap();
        let stable = Stable::from(&stationary);
        prop_assert!(stable.masses().iter().all(|m| m.probability > STABILITY_THRESHOLD));
        prop_assert!(stable.masses().windows(2).all(|w| w[0].state < w[1].state));
        let expected = mass.iter().enumerate().filter(|(_, p)| **p > STABILITY_THRESHOLD).map(|(i, _)| i).collect::<Vec<_>>();
        prop_assert_eq!(stable.indices(), expected);
    }

    #[test]
    fn index_mapping_round_trips(m in 1usize..=3, n in 1usize..=3, picks in prop::collection::vec(any::<prop::sample::Index>(), 1..16)) {
        let space = Space::new(m, n).unwrap();
        let indices = picks.iter().map(|p| p.index(space.len())).collect::<Vec<_>>();
        let states = space.index_to_state(indices.clone()).unwrap();
        let back = states.iter().map(|s| space.position(s).unwrap()).collect::<Vec<_>>();
        prop_assert_eq!(back, indices);
    }
}
