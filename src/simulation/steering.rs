//! Pairwise avoidance steering.
//!
//! Each neighbor pushes the agent's velocity away from itself, and the
//! velocity is re-normalized after every single push. The outcome therefore
//! depends on the order neighbors are visited in; it is a fold, not a sum.

use ndarray::Array1;
use tracing::trace;

use super::agent::{Agent, Dna};
use super::geometric_utils::try_normalize;

/// Applies one neighbor's push to `velocity` and re-normalizes it.
///
/// # Arguments
///
/// * `velocity` - Velocity to adjust in place
/// * `pos` - Position of the steering agent
/// * `dna` - Traits of the steering agent
/// * `threat` - Position of the neighbor to avoid
///
/// # Returns
///
/// `false` when the neighbor sits exactly on `pos` and was skipped.
pub fn avoid(
    velocity: &mut Array1<f32>,
    pos: &Array1<f32>,
    dna: &Dna,
    threat: &Array1<f32>,
) -> bool {
    let Some(away) = try_normalize(&(pos - threat)) else {
        return false;
    };

    *velocity += &(away * (dna.metabolism * dna.fear));

    // a push that cancels the velocity leaves it at zero
    if let Some(unit) = try_normalize(velocity) {
        *velocity = unit;
    }
    true
}

/// Folds [`avoid`] over `neighbors` in order and returns the new velocity.
///
/// The agent itself is not modified, so this can run while `neighbors`
/// borrows the same population.
pub fn steer<'a, I>(agent: &Agent, neighbors: I) -> Array1<f32>
where
    I: IntoIterator<Item = &'a Agent>,
{
    let mut velocity = agent.velocity.clone();
    for neighbor in neighbors {
        if !avoid(&mut velocity, &agent.pos, &agent.dna, &neighbor.pos) {
            trace!(pos = ?agent.xy(), "skipped neighbor at zero distance");
        }
    }
    velocity
}
