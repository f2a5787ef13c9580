use super::Player;
use crate::Action;
use crate::Error;
use crate::PLAYERS;

/// one period of joint play: the action each player took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Profile([Action; PLAYERS]);

impl Profile {
    pub const fn new(a1: Action, a2: Action) -> Self {
        Self([a1, a2])
    }
    pub fn action(&self, player: Player) -> Action {
        self.0[player.index()]
    }
    pub fn actions(&self) -> &[Action; PLAYERS] {
        &self.0
    }
    /// every profile of a game with `num_act` actions per player,
    /// P1's action most significant.
    pub fn all(num_act: usize) -> impl Iterator<Item = Self> {
        (0..num_act).flat_map(move |a1| (0..num_act).map(move |a2| Self::new(a1, a2)))
    }
    /// position of this profile in `Profile::all(num_act)`
    pub fn index(&self, num_act: usize) -> usize {
        self.0[0] * num_act + self.0[1]
    }
    /// both actions lie in `[0, num_act)`
    pub fn check(&self, num_act: usize) -> Result<(), Error> {
        match self.0.iter().all(|&a| a < num_act) {
            true => Ok(()),
            false => Err(Error::shape(
                format!("actions in [0, {})", num_act),
                self,
            )),
        }
    }
}

impl From<(Action, Action)> for Profile {
    fn from((a1, a2): (Action, Action)) -> Self {
        Self::new(a1, a2)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0[0], self.0[1])
    }
}
