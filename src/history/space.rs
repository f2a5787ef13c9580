use super::History;
use crate::Error;
use crate::game::Profile;

/// one index or an ordered list of them, for state lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indices {
    One(usize),
    Many(Vec<usize>),
}

impl Indices {
    pub fn as_slice(&self) -> &[usize] {
        match self {
            Self::One(i) => std::slice::from_ref(i),
            Self::Many(v) => v.as_slice(),
        }
    }
}

impl From<usize> for Indices {
    fn from(i: usize) -> Self {
        Self::One(i)
    }
}
impl From<Vec<usize>> for Indices {
    fn from(v: Vec<usize>) -> Self {
        Self::Many(v)
    }
}
impl From<&[usize]> for Indices {
    fn from(v: &[usize]) -> Self {
        Self::Many(v.to_vec())
    }
}

/// every play history of memory `m` in a game with `num_act` actions
/// per player, in a fixed order. the position of a history in this
/// order is its state index.
///
/// histories are ordered lexicographically with the oldest period most
/// significant; periods are ordered as in [`Profile::all`]. so index `i`
/// written in base `num_act²` spells out the profile indices, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    m: usize,
    num_act: usize,
    states: Vec<History>,
}

impl Space {
    pub fn new(m: usize, num_act: usize) -> Result<Self, Error> {
        if m == 0 {
            return Err(Error::configuration("m must be positive"));
        }
        if num_act == 0 {
            return Err(Error::configuration("num_act must be positive"));
        }
        let n = Self::size(m, num_act).ok_or_else(|| {
            Error::configuration(format!("state space for m={} num_act={} overflows", m, num_act))
        })?;
        let profiles = Profile::all(num_act).collect::<Vec<_>>();
        let radix = profiles.len();
        let states = (0..n)
            .map(|i| {
                (0..m)
                    .rev()
                    .map(|digit| profiles[(i / radix.pow(digit as u32)) % radix])
                    .collect::<Vec<_>>()
            })
            .map(History::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("{:<32}{:<16}", "enumerated histories", states.len());
        Ok(Self { m, num_act, states })
    }

    /// `(num_act²)^m`, or None if that overflows
    pub fn size(m: usize, num_act: usize) -> Option<usize> {
        num_act
            .checked_mul(num_act)
            .and_then(|radix| radix.checked_pow(u32::try_from(m).ok()?))
    }

    pub fn m(&self) -> usize {
        self.m
    }
    pub fn num_act(&self) -> usize {
        self.num_act
    }
    pub fn len(&self) -> usize {
        self.states.len()
    }
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
    pub fn states(&self) -> &[History] {
        &self.states
    }

    pub fn get(&self, index: usize) -> Result<&History, Error> {
        self.states.get(index).ok_or(Error::InvalidIndex {
            index,
            len: self.len(),
        })
    }
    /// the histories at the requested indices, in request order
    pub fn index_to_state(&self, indices: impl Into<Indices>) -> Result<Vec<History>, Error> {
        indices
            .into()
            .as_slice()
            .iter()
            .map(|&i| self.get(i).cloned())
            .collect()
    }
    /// inverse of [`Space::get`]
    pub fn position(&self, history: &History) -> Result<usize, Error> {
        history.check(self.m, self.num_act)?;
        let radix = self.num_act * self.num_act;
        Ok(history
            .periods()
            .iter()
            .fold(0, |acc, p| acc * radix + p.index(self.num_act)))
    }
    /// shape check for caller-supplied histories
    pub fn check(&self, history: &History) -> Result<(), Error> {
        history.check(self.m, self.num_act)
    }
}
