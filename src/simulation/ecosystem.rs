//! Per-tick update pipeline.
//!
//! Every tick walks the population in order. For each living agent it:
//! - looks up neighbors and steers away from them, if the steering schedule
//!   admits the agent this tick
//! - moves the agent along its velocity, scaled by metabolism
//! - negates any coordinate that left the world bounds
//! - burns energy and marks the agent dead once energy falls below the threshold
//!
//! Dead and pruned agents are skipped entirely and stay frozen in place.
//! Agents are updated in place, so agents later in the order see the
//! positions earlier agents already reached this tick.

use rand::Rng;
use tracing::debug;

use super::agent::{Agent, AgentId, AgentState};
use super::error::Result;
use super::factory::AgentFactory;
use super::geometric_utils::reflect_out_of_bounds_mut;
use super::neighbors::find_nearby;
use super::params::Params;
use super::population::Population;
use super::spatial::{SpatialIndex, SpatialQuery};
use super::steering::steer;

/// Runs one tick of the pipeline over `population`.
///
/// # Arguments
///
/// * `population` - Agents to update, in place
/// * `index` - Spatial index over `population`, read-only for the tick
/// * `params` - Simulation parameters
/// * `tick` - Tick number, consulted by the steering schedule
pub fn update_agents<Q>(population: &mut Population, index: &Q, params: &Params, tick: u64)
where
    Q: SpatialQuery + ?Sized,
{
    for id in population.ids() {
        if !population[id].is_living() {
            continue;
        }

        if params.steering.admits(id.index(), tick) {
            let velocity = {
                let neighbors = find_nearby(population, id, index, params.avoid_radius);
                steer(&population[id], neighbors.iter().copied())
            };
            population[id].velocity = velocity;
        }

        let agent = &mut population[id];
        advance(agent, params);
        burn_energy(agent, params);
        if !agent.is_living() {
            debug!(agent = %id, energy = agent.energy, "agent died");
        }
    }
}

/// Moves an agent along its velocity and applies boundary reflection.
pub fn advance(agent: &mut Agent, params: &Params) {
    let amount = params.move_amount(agent.dna.metabolism);
    agent.pos.scaled_add(amount, &agent.velocity);
    reflect_out_of_bounds_mut(&mut agent.pos, params.world_min, params.world_max);
}

/// Burns one tick of energy and kills the agent below the death threshold.
pub fn burn_energy(agent: &mut Agent, params: &Params) {
    agent.energy -= params.energy_cost(agent.dna.metabolism);
    if agent.energy < params.energy_dead {
        agent.state = AgentState::Dead;
    }
}

/// The population together with the tick counter that drives it.
#[derive(Debug, Clone, Default)]
pub struct Ecosystem {
    /// All agents, in insertion order.
    pub population: Population,
    /// Number of completed ticks.
    pub tick: u64,
}

impl Ecosystem {
    /// Creates an ecosystem with `count` random agents.
    pub fn new<R: Rng>(params: &Params, count: usize, rng: &mut R) -> Result<Self> {
        let factory = AgentFactory::new(params)?;
        Ok(Self::from_population(factory.populate(count, rng)))
    }

    /// Wraps an existing population, starting at tick zero.
    pub fn from_population(population: Population) -> Self {
        Self {
            population,
            tick: 0,
        }
    }

    /// Advances the simulation by one tick against a freshly built kd-tree.
    pub fn step(&mut self, params: &Params) -> Result<()> {
        let index = SpatialIndex::build(self.population.as_slice())?;
        self.step_with(params, &index);
        Ok(())
    }

    /// Advances the simulation by one tick against a caller-maintained index.
    pub fn step_with<Q>(&mut self, params: &Params, index: &Q)
    where
        Q: SpatialQuery + ?Sized,
    {
        update_agents(&mut self.population, index, params, self.tick);
        self.tick += 1;
        debug!(
            tick = self.tick,
            living = self.living_count(),
            "ecosystem step"
        );
    }

    /// Number of agents still taking part in the pipeline.
    pub fn living_count(&self) -> usize {
        self.population.count_in(AgentState::Living)
    }

    /// Number of agents that ran out of energy.
    pub fn dead_count(&self) -> usize {
        self.population.count_in(AgentState::Dead)
    }

    /// Looks up an agent by id.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.population.get(id)
    }
}
