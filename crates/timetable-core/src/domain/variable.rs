//! Typed access to basic planning variables.

use std::fmt;

use super::PlanningSolution;

/// A planning variable whose value is an index into a value range.
///
/// Stores typed function pointers so moves and placers can read and write
/// the variable without knowing the concrete entity type.
pub struct BasicVariable<S> {
    /// Variable name, used in logs and move descriptions.
    pub name: &'static str,
    /// Reads the value of the variable on the entity at an index.
    pub getter: fn(&S, usize) -> Option<usize>,
    /// Writes the value of the variable on the entity at an index.
    pub setter: fn(&mut S, usize, Option<usize>),
    /// Size of the value range.
    pub value_count: fn(&S) -> usize,
}

impl<S> BasicVariable<S> {
    #[inline]
    pub fn get(&self, solution: &S, entity_index: usize) -> Option<usize> {
        (self.getter)(solution, entity_index)
    }

    #[inline]
    pub fn set(&self, solution: &mut S, entity_index: usize, value: Option<usize>) {
        (self.setter)(solution, entity_index, value)
    }

    #[inline]
    pub fn value_count(&self, solution: &S) -> usize {
        (self.value_count)(solution)
    }
}

impl<S> Clone for BasicVariable<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for BasicVariable<S> {}

impl<S> fmt::Debug for BasicVariable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicVariable")
            .field("name", &self.name)
            .finish()
    }
}

/// A solution with a single entity collection whose planning variables
/// are all basic index variables.
pub trait BasicVariableSolution: PlanningSolution {
    /// Number of planning entities.
    fn entity_count(&self) -> usize;

    /// The entity's planning variables, in assignment order.
    fn variables() -> &'static [BasicVariable<Self>];

    /// A stable difficulty weight used by decreasing construction
    /// heuristics. Harder entities are placed first.
    fn entity_difficulty(&self, _entity_index: usize) -> usize {
        0
    }
}
