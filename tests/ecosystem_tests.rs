#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{EmptyIndex, FixedIndex, agent_at, create_test_params, norm};
use ndarray::array;
use rand::SeedableRng;
use rand::rngs::StdRng;
use swarm::simulation::agent::{Agent, AgentId, AgentState, Dna};
use swarm::simulation::ecosystem::{Ecosystem, advance, burn_energy, update_agents};
use swarm::simulation::params::{Params, SteeringSchedule};
use swarm::simulation::population::Population;

fn still_params() -> Params {
    Params {
        max_speed: 0.0,
        time_factor: 0.0,
        ..create_test_params()
    }
}

#[test]
fn test_ecosystem_creation() {
    let params = create_test_params();
    let mut rng = StdRng::seed_from_u64(7);
    let ecosystem = Ecosystem::new(&params, 50, &mut rng).unwrap();

    assert_eq!(ecosystem.population.len(), 50);
    assert_eq!(ecosystem.tick, 0);
    assert_eq!(ecosystem.living_count(), 50);
    assert_eq!(ecosystem.dead_count(), 0);
}

#[test]
fn test_ecosystem_rejects_invalid_params() {
    let params = Params {
        fear_min: 2.0,
        fear_max: 1.0,
        ..create_test_params()
    };
    let mut rng = StdRng::seed_from_u64(7);

    assert!(Ecosystem::new(&params, 10, &mut rng).is_err());
}

#[test]
fn test_simulation_step_advances_tick() {
    let params = create_test_params();
    let mut rng = StdRng::seed_from_u64(11);
    let mut ecosystem = Ecosystem::new(&params, 30, &mut rng).unwrap();

    for _ in 0..3 {
        ecosystem.step(&params).unwrap();
    }

    assert_eq!(ecosystem.tick, 3);
    for agent in &ecosystem.population {
        assert!(agent.pos.iter().all(|c| c.is_finite()));
        assert!(agent.velocity.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn test_locomotion_scales_with_metabolism() {
    let params = Params {
        max_speed: 0.5,
        ..create_test_params()
    };
    let mut agent = Agent::new(
        [1.0, 2.0],
        [1.0, -2.0],
        Dna {
            metabolism: 0.5,
            fear: 1.0,
        },
        1.0,
    );

    advance(&mut agent, &params);

    assert_eq!(agent.pos, array![1.25, 1.5]);
}

#[test]
fn test_boundary_reflection_negates() {
    let params = create_test_params();
    let mut agent = Agent::new(
        [10.0, -9.75],
        [1.0, -1.0],
        Dna {
            metabolism: 0.5,
            fear: 1.0,
        },
        1.0,
    );

    advance(&mut agent, &params);

    // x: 10.5 -> -10.5, y: -10.25 -> 10.25
    assert_eq!(agent.pos, array![-10.5, 10.25]);
}

#[test]
fn test_large_overshoot_stays_outside() {
    let params = create_test_params();
    let mut agent = agent_at(0.0, 0.0);
    agent.pos = array![25.0, 0.0];

    advance(&mut agent, &params);

    assert_eq!(agent.pos[0], -25.0);
}

#[test]
fn test_energy_decays_and_agent_dies() {
    // metabolism 0.5 * factor 1.0 * time_factor 0.5 = 0.25 per tick
    let params = create_test_params();
    let mut population = Population::new();
    population.insert(agent_at(0.0, 0.0));

    let expected = [0.75, 0.5, 0.25, 0.0];
    for energy in expected {
        update_agents(&mut population, &EmptyIndex, &params, 0);
        assert_eq!(population[AgentId(0)].energy, energy);
        assert_eq!(population[AgentId(0)].state, AgentState::Living);
    }

    update_agents(&mut population, &EmptyIndex, &params, 0);
    assert_eq!(population[AgentId(0)].energy, -0.25);
    assert_eq!(population[AgentId(0)].state, AgentState::Dead);
}

#[test]
fn test_dead_agents_are_frozen() {
    let params = create_test_params();
    let mut population = Population::new();
    population.insert(agent_at(0.0, 0.0));
    population.insert(agent_at(0.01, 0.0));

    for _ in 0..5 {
        update_agents(&mut population, &EmptyIndex, &params, 0);
    }
    let dead = population[AgentId(0)].clone();
    assert_eq!(dead.state, AgentState::Dead);

    let index = FixedIndex(vec![AgentId(0), AgentId(1)]);
    for tick in 0..10 {
        update_agents(&mut population, &index, &params, tick);
    }

    let after = &population[AgentId(0)];
    assert_eq!(after.pos, dead.pos);
    assert_eq!(after.velocity, dead.velocity);
    assert_eq!(after.energy, dead.energy);
    assert_eq!(after.state, AgentState::Dead);
}

#[test]
fn test_pruned_agents_are_frozen() {
    let params = create_test_params();
    let mut population = Population::new();
    let mut agent = agent_at(1.0, 1.0);
    agent.mark_for_pruning();
    population.insert(agent);

    update_agents(&mut population, &EmptyIndex, &params, 0);

    let agent = &population[AgentId(0)];
    assert_eq!(agent.pos, array![1.0, 1.0]);
    assert_eq!(agent.energy, 1.0);
    assert_eq!(agent.state, AgentState::Prune);
}

#[test]
fn test_burn_energy_threshold_is_strict() {
    let params = Params {
        energy_dead: 0.5,
        ..create_test_params()
    };
    let mut agent = agent_at(0.0, 0.0);
    agent.energy = 0.75;

    burn_energy(&mut agent, &params);
    assert_eq!(agent.energy, 0.5);
    assert!(agent.is_living());

    burn_energy(&mut agent, &params);
    assert!(!agent.is_living());
}

#[test]
fn test_only_odd_indices_steer() {
    let params = still_params();
    let mut population = Population::new();
    population.insert(agent_at(0.0, 0.0));
    population.insert(agent_at(0.02, 0.0));
    let index = FixedIndex(vec![AgentId(0), AgentId(1)]);

    update_agents(&mut population, &index, &params, 0);

    assert_eq!(population[AgentId(0)].velocity, array![0.0, 1.0]);
    let steered = &population[AgentId(1)].velocity;
    assert!((norm(steered) - 1.0).abs() < 1e-5);
    assert!(steered[0] > 0.0);
}

#[test]
fn test_all_agents_steer() {
    let params = Params {
        steering: SteeringSchedule::AllAgents,
        ..still_params()
    };
    let mut population = Population::new();
    population.insert(agent_at(0.0, 0.0));
    population.insert(agent_at(0.02, 0.0));
    let index = FixedIndex(vec![AgentId(0), AgentId(1)]);

    update_agents(&mut population, &index, &params, 0);

    assert!(population[AgentId(0)].velocity[0] < 0.0);
    assert!(population[AgentId(1)].velocity[0] > 0.0);
}

#[test]
fn test_interleaved_schedule() {
    let schedule = SteeringSchedule::Interleaved { period: 3 };

    assert!(schedule.admits(0, 0));
    assert!(!schedule.admits(1, 0));
    assert!(schedule.admits(2, 1));
    assert!(schedule.admits(1, 5));
    assert!(!SteeringSchedule::Interleaved { period: 0 }.admits(0, 0));
    assert!(SteeringSchedule::OddIndices.admits(3, 0));
    assert!(!SteeringSchedule::OddIndices.admits(4, 1));
}

#[test]
fn test_step_with_external_index() {
    let params = still_params();
    let population: Population = [agent_at(0.0, 0.0), agent_at(0.02, 0.0)]
        .into_iter()
        .collect();
    let mut ecosystem = Ecosystem::from_population(population);

    ecosystem.step_with(&params, &FixedIndex(vec![AgentId(0)]));

    assert_eq!(ecosystem.tick, 1);
    let steered = &ecosystem.agent(AgentId(1)).unwrap().velocity;
    assert!(steered[0] > 0.0);
}
