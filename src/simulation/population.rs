//! Ordered agent collections.
//!
//! [`AgentArray`] is a single insertion-ordered container with a fixed growth
//! policy: it starts with room for [`DEFAULT_CAPACITY`] entries and doubles
//! whenever `len + 1 >= capacity`. It never shrinks and has no removal path.
//!
//! Ownership is carried by the element type:
//! - [`Population`] stores `Agent`s and owns them. Dropping it drops every agent.
//! - [`Neighbors`] stores `&Agent`s borrowed from a population. Dropping it only
//!   releases its own storage, and it cannot outlive the population it borrows.

use std::ops::{Index, IndexMut};
use std::slice;

use super::agent::{Agent, AgentId, AgentState};

/// Capacity of a freshly created collection.
pub const DEFAULT_CAPACITY: usize = 16;

/// Insertion-ordered collection with geometric growth.
#[derive(Debug, Clone)]
pub struct AgentArray<T> {
    items: Vec<T>,
    capacity: usize,
}

/// Owning collection of agents.
pub type Population = AgentArray<Agent>;

/// Borrowing collection of agents, typically the result of a neighbor query.
pub type Neighbors<'a> = AgentArray<&'a Agent>;

impl<T> AgentArray<T> {
    /// Creates an empty collection with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Appends an item, doubling the capacity first if this insert would fill it.
    pub fn insert(&mut self, item: T) {
        if self.items.len() + 1 >= self.capacity {
            self.capacity *= 2;
            self.items.reserve_exact(self.capacity - self.items.len());
        }
        self.items.push(item);
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity, always `DEFAULT_CAPACITY * 2^k` and greater than [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Items in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for AgentArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AgentArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> FromIterator<T> for AgentArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a AgentArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Population {
    /// Looks up an agent. Returns `None` for ids this population never issued.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.items.get(id.index())
    }

    /// Ids of all agents, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (0..self.items.len()).map(AgentId)
    }

    /// Number of agents in the given state.
    pub fn count_in(&self, state: AgentState) -> usize {
        self.items.iter().filter(|agent| agent.state == state).count()
    }
}

impl Index<AgentId> for Population {
    type Output = Agent;

    fn index(&self, id: AgentId) -> &Agent {
        &self.items[id.index()]
    }
}

impl IndexMut<AgentId> for Population {
    fn index_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.items[id.index()]
    }
}
