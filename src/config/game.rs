use crate::game::Payoffs;

/// stage games shipped with the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Game {
    /// 2×2 pure coordination
    Coordination,
    /// Young's 3×3 example
    #[default]
    Young,
    /// seeded symmetric game with uniform payoffs
    Random,
}

impl Game {
    /// `num_act` only matters for random games
    pub fn payoffs(&self, num_act: usize, seed: u64) -> Payoffs {
        match self {
            Self::Coordination => Payoffs::coordination(),
            Self::Young => Payoffs::young(),
            Self::Random => Payoffs::random(num_act, seed),
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coordination => write!(f, "coordination"),
            Self::Young => write!(f, "young"),
            Self::Random => write!(f, "random"),
        }
    }
}
