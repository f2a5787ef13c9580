use crate::PLAYERS;

/// one of the two players of the stage game.
/// P1 picks the row of the payoff table, P2 picks the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub const fn all() -> [Self; PLAYERS] {
        [Self::P1, Self::P2]
    }
    pub const fn index(&self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
        }
    }
    pub const fn opponent(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

impl From<usize> for Player {
    fn from(player: usize) -> Self {
        match player {
            0 => Self::P1,
            1 => Self::P2,
            _ => panic!("only 2 players are modelled"),
        }
    }
}

impl From<Player> for usize {
    fn from(player: Player) -> Self {
        player.index()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "P1"),
            Self::P2 => write!(f, "P2"),
        }
    }
}
