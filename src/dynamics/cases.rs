use crate::Probability;

/// the four disjoint ways a feasible successor can be reached under
/// experimentation, one field per combination of player behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Cases {
    /// `(1-ε)² · BR₁ · BR₂`
    pub both_br: Probability,
    /// `(ε/n)²`
    pub both_exp: Probability,
    /// `(1-ε) · BR₁ · ε/n`, P2 experiments
    pub first_br: Probability,
    /// `(1-ε) · BR₂ · ε/n`, P1 experiments
    pub second_br: Probability,
}

impl Cases {
    /// `br1`, `br2`: unperturbed best-response probabilities of the
    /// recorded actions. `epsilon`: per-player experimentation rate.
    /// `num_act`: size of the uniform experimentation support.
    pub fn new(br1: Probability, br2: Probability, epsilon: Probability, num_act: usize) -> Self {
        let uniform = epsilon / num_act as Probability;
        Self {
            both_br: (1. - epsilon).powi(2) * br1 * br2,
            both_exp: uniform.powi(2),
            first_br: (1. - epsilon) * br1 * uniform,
            second_br: (1. - epsilon) * br2 * uniform,
        }
    }
    pub fn total(&self) -> Probability {
        self.both_br + self.both_exp + self.first_br + self.second_br
    }
    pub fn all(&self) -> [Probability; 4] {
        [self.both_br, self.both_exp, self.first_br, self.second_br]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_experimentation_is_pure_best_response() {
        let cases = Cases::new(0.5, 0.25, 0., 3);
        assert_eq!(cases.total(), 0.125);
        assert_eq!(cases.both_exp, 0.);
        assert_eq!(cases.first_br, 0.);
        assert_eq!(cases.second_br, 0.);
    }

    #[test]
    fn full_experimentation_is_uniform() {
        let cases = Cases::new(1., 1., 1., 2);
        assert_eq!(cases.total(), 0.25);
        assert_eq!(cases.both_br, 0.);
    }

    #[test]
    fn unreachable_by_best_response_needs_two_mistakes() {
        let cases = Cases::new(0., 0., 0.1, 2);
        assert!((cases.total() - 0.0025).abs() < 1e-15);
    }
}
