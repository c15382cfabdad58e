//! Score analysis types.
//!
//! A `ScoreExplanation` breaks a score down per constraint, and each
//! `ConstraintAnalysis` lists the entity pairs that produced it. An
//! `Indictment` aggregates the same matches per entity.

use std::collections::BTreeMap;

use timetable_core::score::Score;
use timetable_core::ConstraintRef;

/// A single constraint match with the entities that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintMatch<Sc: Score> {
    pub constraint_ref: ConstraintRef,
    /// Signed score impact of this match.
    pub score: Sc,
    /// Indices of the involved entities, in ascending order.
    pub entity_indices: Vec<usize>,
}

impl<Sc: Score> ConstraintMatch<Sc> {
    pub fn new(constraint_ref: ConstraintRef, score: Sc, entity_indices: Vec<usize>) -> Self {
        Self {
            constraint_ref,
            score,
            entity_indices,
        }
    }
}

/// Per-constraint breakdown.
#[derive(Debug, Clone)]
pub struct ConstraintAnalysis<Sc: Score> {
    pub constraint_ref: ConstraintRef,
    pub weight: Sc,
    pub score: Sc,
    pub matches: Vec<ConstraintMatch<Sc>>,
    pub is_hard: bool,
}

impl<Sc: Score> ConstraintAnalysis<Sc> {
    pub fn new(
        constraint_ref: ConstraintRef,
        weight: Sc,
        score: Sc,
        matches: Vec<ConstraintMatch<Sc>>,
        is_hard: bool,
    ) -> Self {
        Self {
            constraint_ref,
            weight,
            score,
            matches,
            is_hard,
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn name(&self) -> &str {
        &self.constraint_ref.name
    }
}

/// Full score breakdown of a solution.
#[derive(Debug, Clone)]
pub struct ScoreExplanation<Sc: Score> {
    pub score: Sc,
    pub constraint_analyses: Vec<ConstraintAnalysis<Sc>>,
}

impl<Sc: Score> ScoreExplanation<Sc> {
    pub fn new(score: Sc, constraint_analyses: Vec<ConstraintAnalysis<Sc>>) -> Self {
        Self {
            score,
            constraint_analyses,
        }
    }

    pub fn total_match_count(&self) -> usize {
        self.constraint_analyses
            .iter()
            .map(ConstraintAnalysis::match_count)
            .sum()
    }

    /// Constraints that contribute a non-zero score.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis<Sc>> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.score != Sc::zero())
            .collect()
    }

    pub fn analysis(&self, name: &str) -> Option<&ConstraintAnalysis<Sc>> {
        self.constraint_analyses.iter().find(|a| a.name() == name)
    }

    pub fn all_matches(&self) -> impl Iterator<Item = &ConstraintMatch<Sc>> {
        self.constraint_analyses.iter().flat_map(|a| a.matches.iter())
    }

    /// Groups every match by the entities it involves, worst entity first.
    pub fn indictments(&self) -> Vec<Indictment<Sc>> {
        let mut by_entity: BTreeMap<usize, Indictment<Sc>> = BTreeMap::new();
        for m in self.all_matches() {
            for &entity_index in &m.entity_indices {
                by_entity
                    .entry(entity_index)
                    .or_insert_with(|| Indictment::new(entity_index))
                    .add_match(m.clone());
            }
        }
        let mut indictments: Vec<_> = by_entity.into_values().collect();
        // Stable sort keeps entity order among equal scores.
        indictments.sort_by(|a, b| a.score.cmp(&b.score));
        indictments
    }
}

/// All matches that involve one entity.
#[derive(Debug, Clone)]
pub struct Indictment<Sc: Score> {
    pub entity_index: usize,
    pub score: Sc,
    pub matches: Vec<ConstraintMatch<Sc>>,
}

impl<Sc: Score> Indictment<Sc> {
    pub fn new(entity_index: usize) -> Self {
        Self {
            entity_index,
            score: Sc::zero(),
            matches: Vec::new(),
        }
    }

    pub fn add_match(&mut self, constraint_match: ConstraintMatch<Sc>) {
        self.score = self.score + constraint_match.score;
        self.matches.push(constraint_match);
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Distinct constraints this entity takes part in.
    pub fn violated_constraints(&self) -> Vec<&ConstraintRef> {
        let mut refs: Vec<&ConstraintRef> = Vec::new();
        for m in &self.matches {
            if !refs.contains(&&m.constraint_ref) {
                refs.push(&m.constraint_ref);
            }
        }
        refs
    }
}
