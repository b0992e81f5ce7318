//! Trait for entities that have a position in the simulated plane.
//!
//! The spatial index is built from anything `Locatable`, and boundary
//! handling operates on the mutable position it exposes.

use ndarray::Array1;

/// Trait for entities with a 2D position.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    ///
    /// # Returns
    ///
    /// A reference to the 2D position vector.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    ///
    /// # Returns
    ///
    /// A mutable reference to the 2D position vector.
    fn pos_mut(&mut self) -> &mut Array1<f32>;
}
