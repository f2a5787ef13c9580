use crate::Error;
use crate::game::Player;
use crate::game::Profile;

/// the last `m` periods of joint play, oldest first.
/// this is the state of the adaptive-play Markov chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Profile>")]
pub struct History(Vec<Profile>);

impl History {
    pub fn memory(&self) -> usize {
        self.0.len()
    }
    pub fn periods(&self) -> &[Profile] {
        &self.0
    }
    /// the most recent period
    pub fn newest(&self) -> &Profile {
        self.0.last().expect("histories hold at least one period")
    }
    /// everything `player`'s opponent did, oldest first
    pub fn opponent(&self, player: Player) -> impl Iterator<Item = crate::Action> + '_ {
        self.0.iter().map(move |p| p.action(player.opponent()))
    }

    /// true iff dropping our oldest period and appending one new
    /// profile yields `suc`, i.e. `suc[..m-1] == self[1..]`.
    pub fn precedes(&self, suc: &Self) -> bool {
        self.0.len() == suc.0.len() && !self.0.is_empty() && self.0[1..] == suc.0[..suc.0.len() - 1]
    }
    /// the history one period later, after `profile` is played
    pub fn push(&self, profile: Profile) -> Self {
        Self(self.0[1..].iter().copied().chain(std::iter::once(profile)).collect())
    }

    /// `m` periods, every action in `[0, num_act)`
    pub fn check(&self, m: usize, num_act: usize) -> Result<(), Error> {
        if self.0.len() != m {
            return Err(Error::shape(
                format!("{} periods", m),
                format!("{} periods", self.0.len()),
            ));
        }
        self.0.iter().try_for_each(|p| p.check(num_act))
    }
}

impl TryFrom<Vec<Profile>> for History {
    type Error = Error;
    fn try_from(periods: Vec<Profile>) -> Result<Self, Self::Error> {
        match periods.is_empty() {
            true => Err(Error::shape("at least 1 period", "0 periods")),
            false => Ok(Self(periods)),
        }
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let periods = self.0.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", periods.join(" "))
    }
}
