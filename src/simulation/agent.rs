//! Agent record, heritable traits and lifecycle state.
//!
//! Agents are plain data. They are built by the
//! [`AgentFactory`](super::factory::AgentFactory), mutated by the update
//! pipeline and read by the vertex projector.

use std::fmt;

use ndarray::Array1;

use super::locatable::Locatable;

/// Handle of an agent inside a [`Population`](super::population::Population).
///
/// This is the value a spatial index stores and returns. An id that does not
/// resolve in the population is treated as an absent entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgentId(pub usize);

impl AgentId {
    /// Position of the agent in its population.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Heritable traits, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dna {
    /// Scales movement speed, avoidance strength and energy burn.
    pub metabolism: f32,
    /// Scales avoidance strength.
    pub fear: f32,
}

/// Agent color. Components are not clamped and may exceed `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Derives the display color from an agent's traits.
    ///
    /// Red falls with fear, blue grows with metabolism, green is always zero.
    pub fn from_dna(dna: &Dna) -> Self {
        Self {
            r: 1.0 - dna.fear + 0.5,
            g: 0.0,
            b: dna.metabolism * 2.0,
        }
    }
}

/// Lifecycle state of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentState {
    /// Moving, steering and burning energy.
    #[default]
    Living,
    /// Ran out of energy. Frozen for the rest of the simulation.
    Dead,
    /// Marked for removal by external logic. Frozen, hidden from neighbor
    /// queries and rendered fully transparent.
    Prune,
}

/// A simulated point-agent.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Heading and speed multiplier. Unit length right after steering only.
    pub velocity: Array1<f32>,
    /// Heritable traits.
    pub dna: Dna,
    /// Display color derived from `dna`.
    pub rgb: Rgb,
    /// Remaining energy.
    pub energy: f32,
    /// Lifecycle state.
    pub state: AgentState,
}

impl Agent {
    /// Creates a living agent with its color derived from `dna`.
    pub fn new(pos: [f32; 2], velocity: [f32; 2], dna: Dna, energy: f32) -> Self {
        Self {
            pos: Array1::from_vec(pos.to_vec()),
            velocity: Array1::from_vec(velocity.to_vec()),
            rgb: Rgb::from_dna(&dna),
            dna,
            energy,
            state: AgentState::Living,
        }
    }

    /// Checks if the agent takes part in the update pipeline.
    pub fn is_living(&self) -> bool {
        self.state == AgentState::Living
    }

    /// Checks if the agent has been marked for removal.
    pub fn is_pruned(&self) -> bool {
        self.state == AgentState::Prune
    }

    /// Marks the agent for removal by whatever owns the removal policy.
    pub fn mark_for_pruning(&mut self) {
        self.state = AgentState::Prune;
    }

    /// Position as a plain pair.
    pub fn xy(&self) -> [f32; 2] {
        [self.pos[0], self.pos[1]]
    }
}

impl Locatable for Agent {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}
