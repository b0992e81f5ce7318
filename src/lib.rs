//! # Swarm - Autonomous Point-Agent Simulation
//!
//! A 2D population of point-agents that move, avoid their neighbors, burn
//! energy and die. The agent state is projected into flat vertex buffers for
//! a rendering backend.
//!
//! ## Features
//!
//! - Heritable traits (metabolism and fear) drawn per agent
//! - Owning and borrowing agent collections with compile-time ownership
//! - Kd-tree backed neighbor queries with an exact square filter
//! - Order-sensitive avoidance steering with re-normalization
//! - Energy decay and an irreversible living to dead transition
//! - Position and color vertex buffers that reuse their storage
//!
//! ## Core Modules
//!
//! - [`simulation::agent`] - Agent record and lifecycle state
//! - [`simulation::population`] - Agent collections
//! - [`simulation::ecosystem`] - Per-tick update pipeline
//! - [`simulation::steering`] - Pairwise avoidance
//! - [`simulation::verts`] - Vertex projection for rendering

/// Core simulation logic and data structures.
pub mod simulation {
    /// Agent record, traits and lifecycle state.
    pub mod agent;
    /// Per-tick update pipeline and the tick driver.
    pub mod ecosystem;
    /// Error type shared by the simulation.
    pub mod error;
    /// Random agent construction.
    pub mod factory;
    /// Geometric helpers for filtering and boundary handling.
    pub mod geometric_utils;
    /// Trait for entities that have a position in 2D space.
    ///
    /// The [`locatable::Locatable`] trait is implemented by [`agent::Agent`] and
    /// is what the spatial index and the boundary handling operate on.
    pub mod locatable;
    /// Neighbor lookup on top of a spatial index.
    pub mod neighbors;
    /// Simulation parameters.
    pub mod params;
    /// Owning and borrowing agent collections.
    pub mod population;
    /// Spatial index contract and the kd-tree implementation.
    pub mod spatial;
    /// Avoidance steering.
    pub mod steering;
    /// Projection of agents into vertex buffers.
    pub mod verts;
}
