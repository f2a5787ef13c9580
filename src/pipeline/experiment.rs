use super::Entry;
use super::Report;
use crate::Error;
use crate::STABILITY_THRESHOLD;
use crate::analysis::Analyzer;
use crate::analysis::Density;
use crate::analysis::Stable;
use crate::config::Parameters;
use crate::dynamics::Matrix;
use crate::dynamics::Perturbed;
use crate::dynamics::Unperturbed;
use crate::history::Space;
use crate::simulation::Walk;

/// one run of the pipeline: validated parameters and their state space.
#[derive(Debug, Clone)]
pub struct Experiment {
    parameters: Parameters,
    space: Space,
}

impl Experiment {
    pub fn new(parameters: Parameters) -> Result<Self, Error> {
        parameters.validate()?;
        let space = Space::new(parameters.m, parameters.num_act)?;
        log::info!("{:<32}{:<16}", "state space", space.len());
        Ok(Self { parameters, space })
    }
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
    pub fn space(&self) -> &Space {
        &self.space
    }

    pub fn model(&self) -> Unperturbed {
        Unperturbed::new(self.parameters.k, self.parameters.payoffs.clone())
    }
    pub fn unperturbed(&self) -> Result<Matrix, Error> {
        log::info!("{:<32}{:<16}", "building unperturbed", self.space.len());
        Matrix::build(&self.space, &self.model())
    }
    pub fn perturbed(&self) -> Result<Matrix, Error> {
        log::info!("{:<32}{:<16}", "building perturbed", self.space.len());
        Perturbed::new(self.model(), self.parameters.epsilon)
            .and_then(|model| Matrix::build(&self.space, &model))
    }

    /// attach histories to state indices
    pub fn entries(
        &self,
        states: impl IntoIterator<Item = (usize, Option<crate::Probability>)>,
    ) -> Result<Vec<Entry>, Error> {
        states
            .into_iter()
            .map(|(state, probability)| {
                self.space.get(state).map(|history| Entry {
                    state,
                    probability,
                    history: history.clone(),
                })
            })
            .collect()
    }

    /// build both matrices and analyze them
    pub fn run<A>(&self, analyzer: &A) -> Result<Report, Error>
    where
        A: Analyzer,
    {
        self.analyze(analyzer, &self.unperturbed()?, &self.perturbed()?)
    }

    /// classify the unperturbed chain and extract the stochastically
    /// stable states of the perturbed one
    pub fn analyze<A>(
        &self,
        analyzer: &A,
        unperturbed: &Matrix,
        perturbed: &Matrix,
    ) -> Result<Report, Error>
    where
        A: Analyzer,
    {
        for matrix in [unperturbed, perturbed] {
            if matrix.len() != self.space.len() {
                return Err(Error::shape(
                    format!("{} states", self.space.len()),
                    format!("{} states", matrix.len()),
                ));
            }
        }
        let recurrent = analyzer.recurrent_indices(unperturbed);
        log::info!("{:<32}{:<16}", "recurrent classes", recurrent.len());
        let stable = analyzer.stable_states(perturbed);
        log::info!("{:<32}{:<16}", "stochastically stable", stable.len());
        Ok(Report {
            parameters: self.parameters.clone(),
            states: self.space.len(),
            recurrent: self.entries(recurrent.into_iter().map(|i| (i, None)))?,
            stable: self.entries(stable.masses().iter().map(|m| (m.state, Some(m.probability))))?,
            simulated: None,
        })
    }

    /// states visited more often than the stability threshold along a
    /// seeded sample path of `matrix` from state 0
    pub fn simulate(&self, matrix: &Matrix, periods: usize, seed: u64) -> Result<Vec<Entry>, Error> {
        let visits = Walk::new(matrix, 0, seed)?.visits(periods);
        log::debug!(
            "{:<32}{:<16}{}",
            "simulated periods",
            periods,
            visits.above(STABILITY_THRESHOLD).len()
        );
        let frequent = Stable::from(&visits);
        self.entries(frequent.masses().iter().map(|m| (m.state, Some(m.probability))))
    }
}
