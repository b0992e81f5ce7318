//! Projection of agents into flat vertex buffers.
//!
//! Two parallel buffers hold four floats per agent, in population order:
//! - positions: `[x, y, 0, size]`
//! - colors: `[r, g, b, alpha]`
//!
//! The buffers are rebuilt from scratch on every projection but keep their
//! storage, so capacity only ever grows.

use super::agent::AgentState;
use super::params::Params;
use super::population::Population;

/// Floats written per agent into each buffer.
pub const FLOATS_PER_AGENT: usize = 4;

/// Position and color buffers for the rendering backend.
#[derive(Debug, Clone)]
pub struct AgentVerts {
    positions: Vec<f32>,
    colors: Vec<f32>,
    agent_count: usize,
}

impl Default for AgentVerts {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentVerts {
    /// Creates buffers with room for a single agent.
    pub fn new() -> Self {
        Self {
            positions: Vec::with_capacity(FLOATS_PER_AGENT),
            colors: Vec::with_capacity(FLOATS_PER_AGENT),
            agent_count: 0,
        }
    }

    /// Rewrites both buffers from `population`.
    ///
    /// Every agent is projected whatever its state. Only agents marked for
    /// pruning get a zero alpha; dead agents look exactly like living ones.
    pub fn project(&mut self, population: &Population, params: &Params) {
        let required = FLOATS_PER_AGENT * population.len();
        self.positions.clear();
        self.colors.clear();
        self.agent_count = 0;

        // clear() keeps capacity, so this only allocates when the population outgrew it
        self.positions.reserve_exact(required);
        self.colors.reserve_exact(required);

        for agent in population {
            let alpha = match agent.state {
                AgentState::Prune => 0.0,
                AgentState::Living | AgentState::Dead => params.rgb_alpha,
            };

            let size = params.size_scale.apply(agent.energy);
            self.positions.extend_from_slice(&[
                agent.pos[0],
                agent.pos[1],
                0.0,
                if size.is_finite() { size } else { 0.0 },
            ]);
            self.colors
                .extend_from_slice(&[agent.rgb.r, agent.rgb.g, agent.rgb.b, alpha]);
            self.agent_count += 1;
        }
    }

    /// Position quads, `[x, y, 0, size]` per agent.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Color quads, `[r, g, b, alpha]` per agent.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Number of agents written by the last projection.
    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    /// Floats each buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.positions.capacity().min(self.colors.capacity())
    }

    /// Iterates `(position, color)` quads in population order.
    pub fn quads(&self) -> impl Iterator<Item = (&[f32], &[f32])> {
        self.positions
            .chunks_exact(FLOATS_PER_AGENT)
            .zip(self.colors.chunks_exact(FLOATS_PER_AGENT))
    }
}
