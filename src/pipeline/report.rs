use crate::Probability;
use crate::config::Parameters;
use crate::history::History;

/// a state index with its history, and its mass where one applies
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Entry {
    pub state: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<Probability>,
    pub history: History,
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.probability {
            Some(p) => write!(f, "{:>6}  {:.6}  {}", self.state, p, self.history),
            None => write!(f, "{:>6}  {:>8}  {}", self.state, "", self.history),
        }
    }
}

/// what an experiment persists: one representative per recurrent class
/// of the unperturbed process and the stochastically stable states of
/// the perturbed one.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    pub parameters: Parameters,
    pub states: usize,
    pub recurrent: Vec<Entry>,
    pub stable: Vec<Entry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated: Option<Vec<Entry>>,
}

impl Report {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("reports serialize")
    }
}
