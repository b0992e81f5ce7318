//! Spatial indexing for neighbor queries.
//!
//! The update pipeline only relies on the [`SpatialQuery`] contract, so the
//! index can be maintained elsewhere with its own update cadence. The
//! kd-tree backed [`SpatialIndex`] is the implementation the
//! [`Ecosystem`](super::ecosystem::Ecosystem) rebuilds every tick.

use kdtree::KdTree;
use kdtree::distance::squared_euclidean;
use ndarray::Array1;

use super::agent::AgentId;
use super::error::Result;
use super::locatable::Locatable;

/// Type alias for the 2D kd-tree used for neighbor queries.
pub type Tree2D = KdTree<f32, AgentId, [f32; 2]>;

/// Proximity queries over agent positions.
///
/// `radius` is a Euclidean radius around `center`. Implementations may return
/// ids outside of it, but must not omit any id within it. For a given index
/// state the order of the returned ids must be stable.
pub trait SpatialQuery {
    /// Ids of the agents near `center`.
    fn query(&self, center: &Array1<f32>, radius: f32) -> Vec<AgentId>;
}

/// Kd-tree over the positions of a collection at build time.
pub struct SpatialIndex {
    tree: Tree2D,
}

impl SpatialIndex {
    /// Builds an index over `items`, keyed by their position in the slice.
    ///
    /// # Arguments
    ///
    /// * `items` - Entities to index, usually a population's agents
    ///
    /// # Returns
    ///
    /// A spatial index or an error if a position cannot be inserted (for
    /// example a non-finite coordinate).
    pub fn build<T: Locatable>(items: &[T]) -> Result<Self> {
        let mut tree = KdTree::with_capacity(2, items.len().max(1));
        for (i, item) in items.iter().enumerate() {
            let pos = item.pos();
            tree.add([pos[0], pos[1]], AgentId(i))?;
        }
        Ok(Self { tree })
    }

    /// Number of indexed entities.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Checks if the index holds no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SpatialQuery for SpatialIndex {
    /// Returns ids within `radius`, nearest first.
    fn query(&self, center: &Array1<f32>, radius: f32) -> Vec<AgentId> {
        self.tree
            .within(&[center[0], center[1]], radius.powi(2), &squared_euclidean)
            .unwrap_or_default()
            .into_iter()
            .map(|(_, &id)| id)
            .collect()
    }
}
