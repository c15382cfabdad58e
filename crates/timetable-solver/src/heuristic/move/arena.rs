//! Reusable per-step move buffer.

use std::fmt::Debug;

/// Holds the candidate moves of one step.
///
/// `reset` clears the moves but keeps the allocation, so a long search
/// does not allocate a fresh buffer every step.
///
/// # Example
///
/// ```
/// use timetable_solver::heuristic::MoveArena;
///
/// let mut arena: MoveArena<i32> = MoveArena::new();
/// arena.push(1);
/// arena.push(2);
/// assert_eq!(arena.len(), 2);
///
/// arena.reset();
/// assert!(arena.is_empty());
///
/// arena.extend([10, 20]);
/// assert_eq!(arena.take(1), 20);
/// ```
pub struct MoveArena<M> {
    moves: Vec<M>,
}

impl<M> MoveArena<M> {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.moves.clear();
    }

    #[inline]
    pub fn push(&mut self, m: M) {
        self.moves.push(m);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&M> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.moves.iter()
    }

    /// Removes and returns the move at `index`.
    ///
    /// The last move takes its slot, so other indices are invalid
    /// afterwards. Meant to be called once per step, right before `reset`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn take(&mut self, index: usize) -> M {
        self.moves.swap_remove(index)
    }

    pub fn capacity(&self) -> usize {
        self.moves.capacity()
    }
}

impl<M> Extend<M> for MoveArena<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl<M> Default for MoveArena<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Debug for MoveArena<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveArena")
            .field("len", &self.moves.len())
            .field("capacity", &self.moves.capacity())
            .finish()
    }
}
