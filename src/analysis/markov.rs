use super::Analyzer;
use super::Stationary;
use crate::Probability;
use crate::dynamics::Matrix;
use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// exact analysis of a dense transition matrix.
///
/// recurrent classes are the closed strongly connected components of
/// the graph of positive transitions. each class gets the stationary
/// distribution of the chain restricted to it, computed by GTH
/// elimination (Grassmann, Taksar & Heyman 1985), which avoids
/// subtractions and stays accurate for nearly decomposable chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markov;

impl Markov {
    fn graph(matrix: &Matrix) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(matrix.len(), matrix.len());
        (0..matrix.len()).for_each(|_| {
            graph.add_node(());
        });
        for i in 0..matrix.len() {
            for (j, _) in matrix.successors(i) {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
            }
        }
        graph
    }

    /// every communication class, members ascending, classes ordered
    /// by smallest member
    pub fn communication_classes(matrix: &Matrix) -> Vec<Vec<usize>> {
        let mut classes = tarjan_scc(&Self::graph(matrix))
            .into_iter()
            .map(|scc| {
                let mut class = scc.into_iter().map(|n| n.index()).collect::<Vec<_>>();
                class.sort_unstable();
                class
            })
            .collect::<Vec<_>>();
        classes.sort_unstable_by_key(|class| class[0]);
        classes
    }

    /// a class is closed if no positive transition leaves it
    fn is_closed(matrix: &Matrix, class: &[usize]) -> bool {
        class.iter().all(|&i| {
            matrix
                .successors(i)
                .all(|(j, _)| class.binary_search(&j).is_ok())
        })
    }

    /// stationary law of the chain restricted to the closed `class`,
    /// indexed by position within the class
    pub fn gth(matrix: &Matrix, class: &[usize]) -> Vec<Probability> {
        let n = class.len();
        let mut a = class
            .iter()
            .map(|&i| class.iter().map(|&j| matrix.get(i, j)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let mut size = n;
        for k in 0..n.saturating_sub(1) {
            let scale = a[k][k + 1..n].iter().sum::<Probability>();
            if scale <= 0. {
                size = k + 1;
                break;
            }
            for i in k + 1..n {
                a[i][k] /= scale;
            }
            let pivot = a[k].clone();
            for i in k + 1..n {
                let aik = a[i][k];
                for j in k + 1..n {
                    a[i][j] += aik * pivot[j];
                }
            }
        }
        let mut x = vec![0.; n];
        if size == 0 {
            return x;
        }
        x[size - 1] = 1.;
        for k in (0..size - 1).rev() {
            x[k] = (k + 1..size).map(|i| x[i] * a[i][k]).sum();
        }
        let total = x.iter().sum::<Probability>();
        x.iter_mut().for_each(|p| *p /= total);
        x
    }
}

impl Analyzer for Markov {
    fn recurrent_classes(&self, matrix: &Matrix) -> Vec<Vec<usize>> {
        let classes = Self::communication_classes(matrix)
            .into_iter()
            .filter(|class| Self::is_closed(matrix, class))
            .collect::<Vec<_>>();
        log::debug!("{:<32}{:<16}", "recurrent classes", classes.len());
        classes
    }

    fn stationary_distributions(&self, matrix: &Matrix) -> Vec<Stationary> {
        self.recurrent_classes(matrix)
            .into_iter()
            .map(|class| {
                let mut mass = vec![0.; matrix.len()];
                class
                    .iter()
                    .zip(Self::gth(matrix, &class))
                    .for_each(|(&i, p)| mass[i] = p);
                Stationary::normalized(mass)
            })
            .collect()
    }
}
