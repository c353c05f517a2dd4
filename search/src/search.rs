//! Search entry points and expansion loops.
//!
//! All four strategies share one skeleton: pop the lowest-priority frontier
//! state, count it as expanded, test it against the goal, then push or relax
//! its unexplored successors. They differ only in the frontier priority and
//! in when the goal test happens:
//!
//! | strategy | priority | goal test |
//! |---|---|---|
//! | `bfs` | 0 (FIFO by insertion) | on each new successor, before insertion |
//! | `ucost` | g | on pop |
//! | `greedy-h*` | h | on pop |
//! | `astar-h*` | g + h | on pop |

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::contract::SearchStateV1;
use crate::error::{FrontierError, SearchError};
use crate::frontier::UpdatablePriorityQueue;
use crate::path::{path_cost, reconstruct_path, step_cost, PathStepV1, StepLabelV1};
use crate::policy::SearchPolicyV1;
use crate::strategy::StrategyV1;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The goal was found; the result carries a solution.
    GoalReached,
    /// The frontier emptied without reaching the goal.
    FrontierExhausted,
    /// `max_expansions` was reached before the search concluded.
    ExpansionBudgetExceeded,
}

/// A solution path and its accumulated step cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionV1<S, A> {
    /// `(label, state)` pairs from start to goal inclusive.
    pub path: Vec<PathStepV1<S, A>>,
    /// Sum of step costs along `path`.
    pub path_cost: u64,
}

/// Outcome of one search invocation.
///
/// `solution` is present iff `termination` is
/// [`TerminationReasonV1::GoalReached`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultV1<S, A> {
    /// The strategy that produced this result.
    pub strategy: StrategyV1,
    /// Path and cost, on success only.
    pub solution: Option<SolutionV1<S, A>>,
    /// Distinct states ever inserted into the frontier.
    pub frontier_count: u64,
    /// States popped from the frontier and expanded.
    pub expanded_count: u64,
    /// Why the search stopped.
    pub termination: TerminationReasonV1,
}

impl<S, A> SearchResultV1<S, A> {
    /// Returns `true` if the goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReasonV1::GoalReached
    }

    /// The solution path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&[PathStepV1<S, A>]> {
        self.solution.as_ref().map(|s| s.path.as_slice())
    }

    /// The solution cost, if any.
    #[must_use]
    pub fn path_cost(&self) -> Option<u64> {
        self.solution.as_ref().map(|s| s.path_cost)
    }
}

/// Parse `strategy_name` and search from `start` to `goal`.
///
/// # Errors
///
/// Returns [`SearchError::UnknownStrategy`] for an unrecognized name, plus
/// everything [`search`] can return.
pub fn solve<S: SearchStateV1>(
    start: S,
    goal: &S,
    strategy_name: &str,
    policy: &SearchPolicyV1,
) -> Result<SearchResultV1<S, S::Action>, SearchError> {
    let strategy = StrategyV1::parse(strategy_name)?;
    search(start, goal, strategy, policy)
}

/// Run `strategy` from `start` to `goal`.
///
/// Exhaustion and budget overrun are normal outcomes and return `Ok`; see
/// [`SearchResultV1::termination`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] before any step is taken, or
/// [`SearchError::Frontier`] if the frontier bookkeeping is inconsistent.
pub fn search<S: SearchStateV1>(
    start: S,
    goal: &S,
    strategy: StrategyV1,
    policy: &SearchPolicyV1,
) -> Result<SearchResultV1<S, S::Action>, SearchError> {
    policy.validate()?;

    if start == *goal {
        debug!(%strategy, "start is already the goal");
        return Ok(SearchResultV1 {
            strategy,
            solution: Some(SolutionV1 {
                path: vec![PathStepV1 {
                    label: StepLabelV1::Start,
                    state: start,
                }],
                path_cost: 0,
            }),
            frontier_count: 0,
            expanded_count: 0,
            termination: TerminationReasonV1::GoalReached,
        });
    }

    let result = match strategy {
        StrategyV1::BreadthFirst => breadth_first(start, goal, policy)?,
        StrategyV1::UniformCost => best_first(start, goal, strategy, policy, |g, _| g)?,
        StrategyV1::Greedy(h) => best_first(start, goal, strategy, policy, |_, s: &S| {
            h.evaluate(s, goal)
        })?,
        StrategyV1::AStar(h) => best_first(start, goal, strategy, policy, |g, s: &S| {
            g.saturating_add(h.evaluate(s, goal))
        })?,
    };

    debug!(
        %strategy,
        termination = ?result.termination,
        frontier_count = result.frontier_count,
        expanded_count = result.expanded_count,
        path_cost = ?result.path_cost(),
        "search finished"
    );
    Ok(result)
}

/// Per-run bookkeeping shared by every strategy.
struct Ledger<S: SearchStateV1> {
    explored: HashSet<S>,
    parents: HashMap<S, S>,
    actions: HashMap<S, S::Action>,
    frontier_count: u64,
    expanded_count: u64,
}

impl<S: SearchStateV1> Ledger<S> {
    fn new() -> Self {
        Self {
            explored: HashSet::new(),
            parents: HashMap::new(),
            actions: HashMap::new(),
            frontier_count: 0,
            expanded_count: 0,
        }
    }

    fn record_parent(&mut self, child: S, parent: S, action: S::Action) {
        self.parents.insert(child.clone(), parent);
        self.actions.insert(child, action);
    }

    fn over_budget(&self, policy: &SearchPolicyV1) -> bool {
        self.expanded_count >= policy.max_expansions
    }

    fn solved(
        self,
        strategy: StrategyV1,
        goal: &S,
        cost: impl FnOnce(&[PathStepV1<S, S::Action>]) -> u64,
    ) -> SearchResultV1<S, S::Action> {
        let path = reconstruct_path(&self.parents, &self.actions, goal);
        let path_cost = cost(&path);
        SearchResultV1 {
            strategy,
            solution: Some(SolutionV1 { path, path_cost }),
            frontier_count: self.frontier_count,
            expanded_count: self.expanded_count,
            termination: TerminationReasonV1::GoalReached,
        }
    }

    fn unsolved(
        self,
        strategy: StrategyV1,
        termination: TerminationReasonV1,
    ) -> SearchResultV1<S, S::Action> {
        SearchResultV1 {
            strategy,
            solution: None,
            frontier_count: self.frontier_count,
            expanded_count: self.expanded_count,
            termination,
        }
    }
}

/// Breadth-first search.
///
/// Every frontier entry has priority 0, so the queue's insertion-order
/// tie-break makes it FIFO. A successor is considered only if it is wholly
/// new; the goal is recognized as a successor and never enters the
/// frontier. The reported cost is the tile-squared cost of the path found.
fn breadth_first<S: SearchStateV1>(
    start: S,
    goal: &S,
    policy: &SearchPolicyV1,
) -> Result<SearchResultV1<S, S::Action>, SearchError> {
    let strategy = StrategyV1::BreadthFirst;
    let mut frontier: UpdatablePriorityQueue<S, u64> = UpdatablePriorityQueue::new();
    let mut ledger = Ledger::new();

    frontier.add(start, 0);
    ledger.frontier_count += 1;

    while !frontier.is_empty() {
        if ledger.over_budget(policy) {
            return Ok(ledger.unsolved(strategy, TerminationReasonV1::ExpansionBudgetExceeded));
        }
        let (node, _) = frontier.pop()?;
        ledger.expanded_count += 1;
        ledger.explored.insert(node.clone());

        for (action, child) in node.successors() {
            if frontier.contains(&child) || ledger.explored.contains(&child) {
                continue;
            }
            ledger.record_parent(child.clone(), node.clone(), action);
            if child == *goal {
                return Ok(ledger.solved(strategy, goal, path_cost));
            }
            frontier.add(child, 0);
            ledger.frontier_count += 1;
        }
    }

    Ok(ledger.unsolved(strategy, TerminationReasonV1::FrontierExhausted))
}

/// Uniform-cost, greedy and A* search.
///
/// `priority(g, state)` maps a path cost and a state to its frontier
/// priority. A frontier member is relaxed only when the new priority is
/// strictly lower than its current one. Explored states are never
/// re-opened. The reported cost is the tracked `g` of the goal.
fn best_first<S, F>(
    start: S,
    goal: &S,
    strategy: StrategyV1,
    policy: &SearchPolicyV1,
    priority: F,
) -> Result<SearchResultV1<S, S::Action>, SearchError>
where
    S: SearchStateV1,
    F: Fn(u64, &S) -> u64,
{
    let mut frontier: UpdatablePriorityQueue<S, u64> = UpdatablePriorityQueue::new();
    let mut costs: HashMap<S, u64> = HashMap::new();
    let mut ledger = Ledger::new();

    frontier.add(start.clone(), priority(0, &start));
    costs.insert(start, 0);
    ledger.frontier_count += 1;

    while !frontier.is_empty() {
        if ledger.over_budget(policy) {
            return Ok(ledger.unsolved(strategy, TerminationReasonV1::ExpansionBudgetExceeded));
        }
        let (node, _) = frontier.pop()?;
        let g = costs.get(&node).copied().ok_or(FrontierError::NotFound)?;
        ledger.expanded_count += 1;
        ledger.explored.insert(node.clone());

        if node == *goal {
            return Ok(ledger.solved(strategy, goal, |_| g));
        }

        for (action, child) in node.successors() {
            if ledger.explored.contains(&child) {
                continue;
            }
            let child_g = g.saturating_add(step_cost(&node, &child));
            let child_priority = priority(child_g, &child);

            if frontier.contains(&child) {
                let current = frontier.get(&child)?;
                if child_priority >= current {
                    continue;
                }
                trace!(
                    state = %child,
                    old = current,
                    new = child_priority,
                    "relaxed frontier entry"
                );
            } else {
                ledger.frontier_count += 1;
            }
            frontier.add(child.clone(), child_priority);
            costs.insert(child.clone(), child_g);
            ledger.record_parent(child, node.clone(), action);
        }
    }

    Ok(ledger.unsolved(strategy, TerminationReasonV1::FrontierExhausted))
}
