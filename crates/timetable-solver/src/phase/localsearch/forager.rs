//! Foragers collect the accepted moves of a step and pick one.
//!
//! Moves stay in the step's arena; a forager only sees their indices and
//! scores, and the phase takes the picked move out of the arena.

use std::fmt::Debug;
use std::marker::PhantomData;

use timetable_core::domain::PlanningSolution;

/// Collects accepted move indices during a step.
pub trait LocalSearchForager<S: PlanningSolution>: Send + Debug {
    /// Forgets the previous step's moves.
    fn step_started(&mut self);

    fn add_move_index(&mut self, index: usize, score: S::Score);

    /// True once enough moves were accepted to stop evaluating.
    fn is_quit_early(&self) -> bool;

    /// The best accepted move, or `None` if nothing was accepted.
    fn pick_move_index(&mut self) -> Option<(usize, S::Score)>;
}

/// Stops after `accepted_count_limit` accepted moves and picks the best of
/// them. Ties go to the move accepted first, which keeps seeded runs
/// reproducible.
///
/// # Example
///
/// ```
/// use timetable_core::{HardSoftScore, Timetable};
/// use timetable_solver::phase::localsearch::{AcceptedCountForager, LocalSearchForager};
///
/// let mut forager = AcceptedCountForager::<Timetable>::new(2);
/// forager.step_started();
/// forager.add_move_index(4, HardSoftScore::of(0, -3));
/// forager.add_move_index(7, HardSoftScore::of(0, -1));
/// assert!(forager.is_quit_early());
/// assert_eq!(forager.pick_move_index(), Some((7, HardSoftScore::of(0, -1))));
/// ```
pub struct AcceptedCountForager<S: PlanningSolution> {
    accepted_count_limit: usize,
    accepted_moves: Vec<(usize, S::Score)>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S: PlanningSolution> AcceptedCountForager<S> {
    /// # Panics
    /// Panics if `accepted_count_limit` is zero.
    pub fn new(accepted_count_limit: usize) -> Self {
        assert!(accepted_count_limit > 0, "accepted_count_limit must be > 0");
        Self {
            accepted_count_limit,
            accepted_moves: Vec::new(),
            _phantom: PhantomData,
        }
    }

    pub fn accepted_count_limit(&self) -> usize {
        self.accepted_count_limit
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted_moves.len()
    }
}

impl<S: PlanningSolution> Debug for AcceptedCountForager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcceptedCountForager")
            .field("accepted_count_limit", &self.accepted_count_limit)
            .field("accepted_count", &self.accepted_moves.len())
            .finish()
    }
}

impl<S: PlanningSolution> LocalSearchForager<S> for AcceptedCountForager<S> {
    fn step_started(&mut self) {
        self.accepted_moves.clear();
    }

    fn add_move_index(&mut self, index: usize, score: S::Score) {
        self.accepted_moves.push((index, score));
    }

    fn is_quit_early(&self) -> bool {
        self.accepted_moves.len() >= self.accepted_count_limit
    }

    fn pick_move_index(&mut self) -> Option<(usize, S::Score)> {
        let mut best: Option<(usize, S::Score)> = None;
        for &(index, score) in &self.accepted_moves {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }
        self.accepted_moves.clear();
        best
    }
}
