use super::Density;
use crate::Error;
use crate::Probability;
use crate::TOLERANCE;

/// long-run probability of each state index under some transition
/// matrix. entries are non-negative and sum to 1.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Stationary(Vec<Probability>);

impl Stationary {
    /// rescale solver output to unit mass
    pub(crate) fn normalized(mut mass: Vec<Probability>) -> Self {
        let sum = mass.iter().sum::<Probability>();
        if sum > 0. {
            mass.iter_mut().for_each(|p| *p /= sum);
        }
        Self(mass)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn values(&self) -> &[Probability] {
        &self.0
    }
}

impl Density for Stationary {
    fn density(&self, x: usize) -> Probability {
        self.0.get(x).copied().unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = usize> {
        0..self.0.len()
    }
}

/// caller-supplied distributions must be non-negative and sum to 1
impl TryFrom<Vec<Probability>> for Stationary {
    type Error = Error;
    fn try_from(mass: Vec<Probability>) -> Result<Self, Self::Error> {
        if mass.iter().any(|p| !(0. ..=1.).contains(p)) {
            return Err(Error::configuration("distribution entries must lie in [0, 1]"));
        }
        let sum = mass.iter().sum::<Probability>();
        if (sum - 1.).abs() > TOLERANCE {
            return Err(Error::configuration(format!("distribution sums to {}", sum)));
        }
        Ok(Self(mass))
    }
}

impl From<Stationary> for Vec<Probability> {
    fn from(s: Stationary) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_mass() {
        assert!(Stationary::try_from(vec![0.25, 0.75]).is_ok());
        assert!(Stationary::try_from(vec![0.5, 0.6]).is_err());
        assert!(Stationary::try_from(vec![-0.5, 1.5]).is_err());
    }

    #[test]
    fn density_over_indices() {
        let s = Stationary::try_from(vec![0.1, 0., 0.9]).unwrap();
        assert_eq!(s.density(2), 0.9);
        assert_eq!(s.density(7), 0.);
        assert_eq!(s.support().count(), 3);
        assert_eq!(s.above(0.), vec![(0, 0.1), (2, 0.9)]);
    }
}
