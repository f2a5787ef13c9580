use super::Player;
use crate::Action;
use crate::Error;
use crate::Utility;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// payoff structure of a two-player stage game, shaped
/// `num_act × num_act × 2`. entry `[a1][a2]` holds `(u1, u2)`
/// when P1 plays `a1` and P2 plays `a2`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vec<(Utility, Utility)>>", into = "Vec<Vec<(Utility, Utility)>>")]
pub struct Payoffs(Vec<Vec<(Utility, Utility)>>);

impl Payoffs {
    /// Young's 2×2 pure coordination game.
    pub fn coordination() -> Self {
        Self(vec![
            vec![(1., 1.), (0., 0.)], //
            vec![(0., 0.), (1., 1.)],
        ])
    }
    /// Young's 3×3 example with three strict equilibria.
    pub fn young() -> Self {
        Self(vec![
            vec![(6., 6.), (0., 5.), (0., 0.)],
            vec![(5., 0.), (7., 7.), (5., 5.)],
            vec![(0., 0.), (5., 5.), (8., 8.)],
        ])
    }
    /// symmetric game with payoffs drawn uniformly from `[0, 1)`.
    /// P1 receives `u[a1][a2]`, P2 receives `u[a2][a1]`.
    pub fn random(num_act: usize, seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let u = (0..num_act)
            .map(|_| (0..num_act).map(|_| rng.random::<Utility>()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        Self(
            (0..num_act)
                .map(|a1| (0..num_act).map(|a2| (u[a1][a2], u[a2][a1])).collect())
                .collect(),
        )
    }

    pub fn num_act(&self) -> usize {
        self.0.len()
    }
    /// payoff to `player` for playing `own` against `other`
    pub fn utility(&self, player: Player, own: Action, other: Action) -> Utility {
        match player {
            Player::P1 => self.0[own][other].0,
            Player::P2 => self.0[other][own].1,
        }
    }
}

impl TryFrom<Vec<Vec<(Utility, Utility)>>> for Payoffs {
    type Error = Error;
    fn try_from(table: Vec<Vec<(Utility, Utility)>>) -> Result<Self, Self::Error> {
        let n = table.len();
        if n == 0 {
            return Err(Error::configuration("payoffs must be non-empty"));
        }
        if let Some(row) = table.iter().find(|row| row.len() != n) {
            return Err(Error::configuration(format!(
                "payoffs must be {n}×{n}, found a row of length {}",
                row.len()
            )));
        }
        if table.iter().flatten().any(|(u1, u2)| !u1.is_finite() || !u2.is_finite()) {
            return Err(Error::configuration("payoffs must be finite"));
        }
        Ok(Self(table))
    }
}

impl From<Payoffs> for Vec<Vec<(Utility, Utility)>> {
    fn from(payoffs: Payoffs) -> Self {
        payoffs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utility_reads_row_and_column() {
        let payoffs = Payoffs::young();
        assert_eq!(payoffs.utility(Player::P1, 0, 1), 0.);
        assert_eq!(payoffs.utility(Player::P2, 0, 1), 0.);
        assert_eq!(payoffs.utility(Player::P1, 1, 0), 5.);
        assert_eq!(payoffs.utility(Player::P2, 1, 0), 5.);
        assert_eq!(payoffs.utility(Player::P2, 2, 2), 8.);
    }

    #[test]
    fn random_is_seeded_and_symmetric() {
        let a = Payoffs::random(3, crate::SEED);
        let b = Payoffs::random(3, crate::SEED);
        assert_eq!(a, b);
        for own in 0..3 {
            for other in 0..3 {
                assert_eq!(
                    a.utility(Player::P1, own, other),
                    a.utility(Player::P2, own, other)
                );
            }
        }
    }

    #[test]
    fn rejects_ragged_tables() {
        let ragged = vec![vec![(1., 1.), (0., 0.)], vec![(0., 0.)]];
        assert!(matches!(Payoffs::try_from(ragged), Err(Error::Configuration(_))));
        assert!(Payoffs::try_from(vec![]).is_err());
    }

    #[test]
    fn json_shape_is_nested_pairs() {
        let json = serde_json::to_string(&Payoffs::coordination()).unwrap();
        assert_eq!(json, "[[[1.0,1.0],[0.0,0.0]],[[0.0,0.0],[1.0,1.0]]]");
        let back = serde_json::from_str::<Payoffs>(&json).unwrap();
        assert_eq!(back, Payoffs::coordination());
        assert!(serde_json::from_str::<Payoffs>("[[[1,1]],[[0,0]]]").is_err());
    }
}
