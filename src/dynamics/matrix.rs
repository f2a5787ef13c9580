use super::Perturbed;
use super::Transition;
use super::Unperturbed;
use crate::Error;
use crate::Probability;
use crate::TOLERANCE;
use crate::game::Payoffs;
use crate::history::Space;
use rayon::prelude::*;

/// dense row-stochastic matrix over state indices.
/// row `i`, column `j` is the one-step probability of moving from
/// state `i` to state `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    cells: Vec<Probability>,
}

impl Matrix {
    /// evaluate `model` on every ordered pair of states.
    /// the model is checked against `space` before any cell is computed;
    /// rows are independent and computed in parallel.
    pub fn build<T>(space: &Space, model: &T) -> Result<Self, Error>
    where
        T: Transition,
    {
        model.check(space)?;
        let n = space.len();
        let start = std::time::Instant::now();
        let cells = space
            .states()
            .par_iter()
            .map(|pre| {
                space
                    .states()
                    .iter()
                    .map(|suc| model.probability(pre, suc))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .concat();
        log::debug!(
            "{:<32}{:<16}{:?}",
            "built transition matrix",
            format!("{}x{}", n, n),
            start.elapsed()
        );
        Ok(Self { n, cells })
    }
    /// mistake-free adaptive play with k-sample best response
    pub fn unperturbed(space: &Space, k: usize, payoffs: &Payoffs) -> Result<Self, Error> {
        Self::build(space, &Unperturbed::new(k, payoffs.clone()))
    }
    /// adaptive play with uniform experimentation at rate `epsilon`
    pub fn perturbed(
        space: &Space,
        k: usize,
        epsilon: Probability,
        payoffs: &Payoffs,
    ) -> Result<Self, Error> {
        Perturbed::new(Unperturbed::new(k, payoffs.clone()), epsilon)
            .and_then(|model| Self::build(space, &model))
    }

    pub fn len(&self) -> usize {
        self.n
    }
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    pub fn get(&self, i: usize, j: usize) -> Probability {
        self.cells[i * self.n + j]
    }
    pub fn row(&self, i: usize) -> &[Probability] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Probability]> {
        self.cells.chunks(self.n.max(1))
    }
    /// `(j, p)` for every positive entry of row `i`
    pub fn successors(&self, i: usize) -> impl Iterator<Item = (usize, Probability)> + '_ {
        self.row(i)
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, p)| *p > 0.)
    }

    /// every entry in `[0, 1]` and every row summing to 1 within tolerance
    pub fn check(&self) -> Result<(), Error> {
        for (i, row) in self.rows().enumerate() {
            if let Some(p) = row.iter().find(|p| !(0. ..=1.).contains(*p)) {
                return Err(Error::configuration(format!(
                    "row {} holds {} outside [0, 1]",
                    i, p
                )));
            }
            let sum = row.iter().sum::<Probability>();
            if (sum - 1.).abs() > TOLERANCE {
                return Err(Error::configuration(format!("row {} sums to {}", i, sum)));
            }
        }
        Ok(())
    }
    pub fn is_stochastic(&self) -> bool {
        self.check().is_ok()
    }
}

/// caller-supplied matrices must be square and row-stochastic
impl TryFrom<Vec<Vec<Probability>>> for Matrix {
    type Error = Error;
    fn try_from(rows: Vec<Vec<Probability>>) -> Result<Self, Self::Error> {
        let n = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(Error::shape(
                format!("{} columns", n),
                format!("{} columns", row.len()),
            ));
        }
        let this = Self {
            n,
            cells: rows.concat(),
        };
        this.check()?;
        Ok(this)
    }
}

impl serde::Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unperturbed_coordination_m1() {
        let space = Space::new(1, 2).unwrap();
        let matrix = Matrix::unperturbed(&space, 1, &Payoffs::coordination()).unwrap();
        assert!(matrix.is_stochastic());
        assert_eq!(matrix.get(0, 0), 1.);
        assert_eq!(matrix.get(3, 3), 1.);
        assert_eq!(matrix.get(1, 2), 1.);
        assert_eq!(matrix.get(2, 1), 1.);
    }

    #[test]
    fn perturbed_rows_sum_to_one() {
        let space = Space::new(2, 3).unwrap();
        let matrix = Matrix::perturbed(&space, 1, 0.05, &Payoffs::young()).unwrap();
        assert_eq!(matrix.len(), 81);
        assert!(matrix.check().is_ok());
    }

    #[test]
    fn perturbed_has_full_support_on_successors() {
        let space = Space::new(2, 2).unwrap();
        let matrix = Matrix::perturbed(&space, 1, 0.01, &Payoffs::coordination()).unwrap();
        for i in 0..matrix.len() {
            assert_eq!(matrix.successors(i).count(), 4);
        }
    }

    #[test]
    fn rejects_sample_sizes_outside_memory() {
        let space = Space::new(2, 2).unwrap();
        let payoffs = Payoffs::coordination();
        assert!(matches!(
            Matrix::unperturbed(&space, 0, &payoffs),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Matrix::unperturbed(&space, 3, &payoffs),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Matrix::perturbed(&space, 3, 0.01, &payoffs),
            Err(Error::Configuration(_))
        ));
        assert!(Matrix::unperturbed(&space, 2, &payoffs).unwrap().is_stochastic());
    }

    #[test]
    fn rejects_payoffs_of_the_wrong_size() {
        let space = Space::new(1, 3).unwrap();
        assert!(matches!(
            Matrix::unperturbed(&space, 1, &Payoffs::coordination()),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(matches!(
            Matrix::perturbed(&space, 1, 0.01, &Payoffs::coordination()),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_memory_beyond_mask_width() {
        let space = Space::new(crate::MAX_MEMORY + 1, 1).unwrap();
        let payoffs = Payoffs::try_from(vec![vec![(1., 1.)]]).unwrap();
        assert!(matches!(
            Matrix::unperturbed(&space, 1, &payoffs),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn rejects_malformed_matrices() {
        assert!(matches!(
            Matrix::try_from(vec![vec![1.], vec![0., 1.]]),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(matches!(
            Matrix::try_from(vec![vec![0.5, 0.4], vec![0., 1.]]),
            Err(Error::Configuration(_))
        ));
        assert!(Matrix::try_from(vec![vec![0.5, 0.5], vec![0., 1.]]).is_ok());
    }

    #[test]
    fn serializes_as_rows() {
        let matrix = Matrix::try_from(vec![vec![0.5, 0.5], vec![0., 1.]]).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, "[[0.5,0.5],[0.0,1.0]]");
    }
}
