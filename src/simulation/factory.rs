//! Random agent construction.

use rand::Rng;

use super::agent::{Agent, Dna};
use super::error::Result;
use super::params::Params;
use super::population::Population;

/// Builds agents with random traits, positions and velocities drawn from
/// validated parameter ranges.
#[derive(Debug, Clone, Copy)]
pub struct AgentFactory<'p> {
    params: &'p Params,
}

impl<'p> AgentFactory<'p> {
    /// Creates a factory after checking that every range in `params` is usable.
    pub fn new(params: &'p Params) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Creates a living agent with uniformly drawn traits, position and velocity.
    ///
    /// Color is derived from the drawn traits and energy starts at the
    /// configured default.
    pub fn create_random<R: Rng>(&self, rng: &mut R) -> Agent {
        let p = self.params;
        let dna = Dna {
            metabolism: rng.random_range(p.metabolism_min..=p.metabolism_max),
            fear: rng.random_range(p.fear_min..=p.fear_max),
        };
        let pos = [
            rng.random_range(p.world_min..=p.world_max),
            rng.random_range(p.world_min..=p.world_max),
        ];
        let velocity = [
            rng.random_range(p.velocity_min..=p.velocity_max),
            rng.random_range(p.velocity_min..=p.velocity_max),
        ];

        Agent::new(pos, velocity, dna, p.default_energy)
    }

    /// Creates a population of `count` random agents.
    pub fn populate<R: Rng>(&self, count: usize, rng: &mut R) -> Population {
        (0..count).map(|_| self.create_random(rng)).collect()
    }
}
