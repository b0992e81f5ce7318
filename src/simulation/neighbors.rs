//! Neighbor lookup.
//!
//! The spatial index may return more candidates than asked for, so every
//! candidate is checked again against an exact square of width `radius`
//! centered on the querying agent. The square fits inside the index's query
//! circle of radius `radius`, so no true match can be missed.

use super::agent::AgentId;
use super::geometric_utils::{contains_inclusive, square_around};
use super::population::{Neighbors, Population};
use super::spatial::SpatialQuery;

/// Collects the agents near `id` that it should react to.
///
/// A candidate is dropped when its id does not resolve in `population`, when
/// it is the querying agent itself, when it lies outside the exact square, or
/// when it is marked for pruning. Survivors keep the index's order.
///
/// # Arguments
///
/// * `population` - Collection the ids refer to
/// * `id` - The querying agent
/// * `index` - Spatial index over `population`
/// * `radius` - Width of the exact square, and radius of the index query
///
/// # Returns
///
/// A borrowing collection. Returns an empty one if `id` is unknown.
pub fn find_nearby<'a, Q>(
    population: &'a Population,
    id: AgentId,
    index: &Q,
    radius: f32,
) -> Neighbors<'a>
where
    Q: SpatialQuery + ?Sized,
{
    let mut nearby = Neighbors::new();
    let Some(agent) = population.get(id) else {
        return nearby;
    };

    let bounds = square_around(&agent.pos, radius);

    for candidate_id in index.query(&agent.pos, radius) {
        if candidate_id == id {
            continue;
        }
        let Some(candidate) = population.get(candidate_id) else {
            continue;
        };
        if !contains_inclusive(&bounds, &candidate.pos) || candidate.is_pruned() {
            continue;
        }
        nearby.insert(candidate);
    }

    nearby
}
