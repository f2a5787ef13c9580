use crate::DEFAULT_ACTIONS;
use crate::DEFAULT_EPSILON;
use crate::DEFAULT_MEMORY;
use crate::DEFAULT_SAMPLE;
use crate::Error;
use crate::MAX_MEMORY;
use crate::PLAYERS;
use crate::Probability;
use crate::game::Payoffs;

/// everything the dynamics need, as loaded from JSON.
/// every field is required when deserializing.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    /// memory length
    pub m: usize,
    /// sample size
    pub k: usize,
    /// per-player experimentation probability
    pub epsilon: Probability,
    /// actions per player
    pub num_act: usize,
    /// always 2
    pub num_players: usize,
    /// `num_act × num_act` table of payoff pairs
    pub payoffs: Payoffs,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            m: DEFAULT_MEMORY,
            k: DEFAULT_SAMPLE,
            epsilon: DEFAULT_EPSILON,
            num_act: DEFAULT_ACTIONS,
            num_players: PLAYERS,
            payoffs: Payoffs::young(),
        }
    }
}

impl Parameters {
    /// parse and validate
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let this = serde_json::from_str::<Self>(json)?;
        this.validate()?;
        Ok(this)
    }
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("reading {}: {}", path.display(), e)))
            .and_then(|json| Self::from_json(&json))
    }

    /// eager range checks; nothing is coerced
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("m", self.m),
            ("k", self.k),
            ("num_act", self.num_act),
            ("num_players", self.num_players),
        ] {
            if value == 0 {
                return Err(Error::configuration(format!("{} must be positive", name)));
            }
        }
        if self.num_players != PLAYERS {
            return Err(Error::configuration(format!(
                "num_players must be {}, found {}",
                PLAYERS, self.num_players
            )));
        }
        if self.m > MAX_MEMORY {
            return Err(Error::configuration(format!(
                "m must be at most {}, found {}",
                MAX_MEMORY, self.m
            )));
        }
        if self.k > self.m {
            return Err(Error::configuration(format!(
                "k must not exceed m, found k={} m={}",
                self.k, self.m
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0. || self.epsilon > 1. {
            return Err(Error::configuration(format!(
                "epsilon must lie in (0, 1], found {}",
                self.epsilon
            )));
        }
        if self.payoffs.num_act() != self.num_act {
            return Err(Error::configuration(format!(
                "payoffs must be {n}×{n}×{}, found {m}×{m}×{}",
                PLAYERS,
                PLAYERS,
                n = self.num_act,
                m = self.payoffs.num_act(),
            )));
        }
        if 2 * self.k > self.m {
            log::warn!(
                "k={} is large relative to m={}; conventions may fail to be absorbing",
                self.k,
                self.m
            );
        }
        Ok(())
    }
}
