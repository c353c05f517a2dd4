//! Path reconstruction and step costs.

use std::collections::HashMap;

use crate::contract::SearchStateV1;

/// Label of one path step: the start sentinel or the action taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepLabelV1<A> {
    Start,
    Move(A),
}

impl<A: std::fmt::Display> std::fmt::Display for StepLabelV1<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.pad("start"),
            Self::Move(action) => f.pad(&action.to_string()),
        }
    }
}

/// One `(action, state)` element of a solution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStepV1<S, A> {
    pub label: StepLabelV1<A>,
    pub state: S,
}

/// Cost of the transition `from → to`.
///
/// The square of the tile that, in `to`, occupies the cell the blank held
/// in `from`: the tile that moved. This reads the puzzle grid through the
/// state contract, so the engine is coupled to tile semantics here.
#[must_use]
pub fn step_cost<S: SearchStateV1>(from: &S, to: &S) -> u64 {
    let tile = to.tile_at(from.blank_index()).map_or(0, u64::from);
    tile * tile
}

/// Walk the back-pointer maps from `goal` to the start.
///
/// The walk stops at the first state with no parent entry; that state is
/// the start and is labelled [`StepLabelV1::Start`]. The result runs start
/// to goal.
#[must_use]
pub fn reconstruct_path<S: SearchStateV1>(
    parents: &HashMap<S, S>,
    actions: &HashMap<S, S::Action>,
    goal: &S,
) -> Vec<PathStepV1<S, S::Action>> {
    let mut steps = Vec::new();
    let mut current = goal.clone();

    while let (Some(parent), Some(action)) = (parents.get(&current), actions.get(&current)) {
        let parent = parent.clone();
        steps.push(PathStepV1 {
            label: StepLabelV1::Move(action.clone()),
            state: current,
        });
        current = parent;
    }
    steps.push(PathStepV1 {
        label: StepLabelV1::Start,
        state: current,
    });

    steps.reverse();
    steps
}

/// Sum of [`step_cost`] over consecutive states of `path`.
#[must_use]
pub fn path_cost<S: SearchStateV1>(path: &[PathStepV1<S, S::Action>]) -> u64 {
    path.windows(2)
        .map(|pair| step_cost(&pair[0].state, &pair[1].state))
        .sum()
}
