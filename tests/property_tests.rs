#![allow(missing_docs)]

mod common;

use common::norm;
use proptest::prelude::*;
use swarm::simulation::agent::{Agent, Dna};
use swarm::simulation::population::AgentArray;
use swarm::simulation::steering::steer;

fn expected_capacity(len: usize) -> usize {
    let mut capacity = 16;
    while capacity <= len {
        capacity *= 2;
    }
    capacity
}

proptest! {
    #[test]
    fn insertion_order_and_growth(values in prop::collection::vec(any::<u32>(), 0..300)) {
        let mut array = AgentArray::new();
        for &v in &values {
            array.insert(v);
        }

        prop_assert_eq!(array.len(), values.len());
        prop_assert_eq!(array.as_slice(), values.as_slice());
        prop_assert!(array.capacity() > array.len());
        prop_assert_eq!(array.capacity(), expected_capacity(values.len()));
    }

    #[test]
    fn steering_yields_unit_velocity(
        angle in 0.0f32..std::f32::consts::TAU,
        speed in 0.6f32..2.0,
        metabolism in 0.1f32..0.5,
        fear in 0.5f32..1.0,
        offsets in prop::collection::vec((-0.05f32..0.05, -0.05f32..0.05), 1..8),
    ) {
        let agent = Agent::new(
            [0.0, 0.0],
            [angle.cos() * speed, angle.sin() * speed],
            Dna { metabolism, fear },
            1.0,
        );
        let neighbors: Vec<Agent> = offsets
            .iter()
            .filter(|(x, y)| x.abs() > 1e-6 || y.abs() > 1e-6)
            .map(|&(x, y)| Agent::new([x, y], [0.0, 0.0], Dna { metabolism, fear }, 1.0))
            .collect();
        prop_assume!(!neighbors.is_empty());

        let velocity = steer(&agent, &neighbors);

        prop_assert!((norm(&velocity) - 1.0).abs() < 1e-5);
    }
}
