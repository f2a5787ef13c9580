use crate::Action;
use crate::Probability;
use crate::game::Payoffs;
use crate::game::Player;
use crate::history::History;

/// probability that `player` plays `action` next period, given the
/// play `history`, a sample size `k`, and the stage game `payoffs`
/// (which also fixes the number of actions).
///
/// implementations must be pure: the transition models call this from
/// many threads at once and rely on identical answers for identical
/// arguments.
pub trait BestResponse: Sync {
    fn probability(
        &self,
        history: &History,
        action: Action,
        player: Player,
        k: usize,
        payoffs: &Payoffs,
    ) -> Probability;

    /// the full mixed response over `[0, num_act)`
    fn distribution(
        &self,
        history: &History,
        player: Player,
        k: usize,
        payoffs: &Payoffs,
    ) -> Vec<Probability> {
        (0..payoffs.num_act())
            .map(|a| self.probability(history, a, player, k, payoffs))
            .collect()
    }
}
