#![allow(dead_code)]

use ndarray::Array1;
use swarm::simulation::agent::{Agent, AgentId, Dna};
use swarm::simulation::params::{Params, Scaling, SteeringSchedule};
use swarm::simulation::spatial::SpatialQuery;

pub fn create_test_params() -> Params {
    Params {
        world_min: -10.0,
        world_max: 10.0,
        metabolism_min: 0.1,
        metabolism_max: 0.5,
        fear_min: 0.5,
        fear_max: 1.0,
        velocity_min: -1.0,
        velocity_max: 1.0,
        default_energy: 1.0,
        energy_dead: 0.0,
        max_speed: 1.0,
        energy_scale: Scaling::Linear {
            factor: 1.0,
            offset: 0.0,
        },
        size_scale: Scaling::Linear {
            factor: 4.0,
            offset: 1.0,
        },
        time_factor: 0.5,
        avoid_radius: 0.1,
        steering: SteeringSchedule::OddIndices,
        rgb_alpha: 0.8,
    }
}

pub fn agent_at(x: f32, y: f32) -> Agent {
    Agent::new(
        [x, y],
        [0.0, 1.0],
        Dna {
            metabolism: 0.5,
            fear: 1.0,
        },
        1.0,
    )
}

/// Returns a fixed list of ids regardless of the query.
pub struct FixedIndex(pub Vec<AgentId>);

impl SpatialQuery for FixedIndex {
    fn query(&self, _center: &Array1<f32>, _radius: f32) -> Vec<AgentId> {
        self.0.clone()
    }
}

/// Never returns anything.
pub struct EmptyIndex;

impl SpatialQuery for EmptyIndex {
    fn query(&self, _center: &Array1<f32>, _radius: f32) -> Vec<AgentId> {
        Vec::new()
    }
}

pub fn norm(v: &Array1<f32>) -> f32 {
    v.dot(v).sqrt()
}
