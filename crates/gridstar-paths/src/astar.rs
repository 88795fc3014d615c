use gridstar_core::Position;
use log::{debug, trace};

use crate::Pathfinder;
use crate::distance::Manhattan;
use crate::error::{Endpoint, SearchError};
use crate::frontier::Push;
use crate::path::{Path, reconstruct};
use crate::traits::{Environment, Heuristic};

/// Result of a search whose endpoints were valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached; the path is cost-optimal.
    Found(Path),
    /// Every position reachable from the start was expanded without
    /// reaching the goal.
    Exhausted,
    /// The expansion cap was hit before the goal was reached.
    Aborted { expanded: usize },
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Driver loop state. Everything but `Running` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Running,
    Found { cost: i32 },
    Exhausted,
    Aborted,
}

impl Pathfinder {
    /// Compute a shortest path from `from` to `to` with the Manhattan
    /// heuristic.
    ///
    /// Both endpoints must be in bounds and traversable; otherwise an error
    /// is returned before any search work is done. An unreachable goal is
    /// reported as [`SearchOutcome::Exhausted`].
    pub fn astar_path<E: Environment>(
        &mut self,
        env: &E,
        from: Position,
        to: Position,
    ) -> Result<SearchOutcome, SearchError> {
        self.astar_path_with(env, &Manhattan, from, to)
    }

    /// Like [`astar_path`](Self::astar_path) with a caller-supplied
    /// heuristic. The result is optimal as long as `heuristic` is admissible
    /// and consistent.
    pub fn astar_path_with<E: Environment, H: Heuristic>(
        &mut self,
        env: &E,
        heuristic: &H,
        from: Position,
        to: Position,
    ) -> Result<SearchOutcome, SearchError> {
        validate(env, from, to)?;

        self.prepare(env.bounds());
        self.frontier
            .push_or_improve(from, 0, heuristic.estimate(from, to), None);
        self.stats.pushed = 1;
        self.stats.peak_frontier = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let state = loop {
            match self.step(env, heuristic, to, &mut nbuf) {
                SearchState::Running => {}
                terminal => break terminal,
            }
        };
        self.nbuf = nbuf;

        let stats = self.stats;
        let outcome = match state {
            SearchState::Found { cost } => {
                let path = reconstruct(to, |p| self.frontier.predecessor(p));
                debug_assert_eq!(path.steps(), cost as usize);
                debug!(
                    "astar {from} -> {to}: found, cost {cost}, expanded {}, pushed {}",
                    stats.expanded, stats.pushed
                );
                SearchOutcome::Found(path)
            }
            SearchState::Exhausted => {
                debug!(
                    "astar {from} -> {to}: no path, expanded {}",
                    stats.expanded
                );
                SearchOutcome::Exhausted
            }
            SearchState::Aborted => {
                debug!(
                    "astar {from} -> {to}: aborted after {} expansions",
                    stats.expanded
                );
                SearchOutcome::Aborted {
                    expanded: stats.expanded,
                }
            }
            SearchState::Running => unreachable!("search loop exits on a terminal state"),
        };
        Ok(outcome)
    }

    /// Advance the search by one pop.
    fn step<E: Environment, H: Heuristic>(
        &mut self,
        env: &E,
        heuristic: &H,
        goal: Position,
        nbuf: &mut Vec<Position>,
    ) -> SearchState {
        let Some(current) = self.frontier.pop_min() else {
            return SearchState::Exhausted;
        };

        if current.pos == goal {
            return SearchState::Found { cost: current.g };
        }

        if self
            .config
            .max_expansions
            .is_some_and(|max| self.stats.expanded >= max)
        {
            return SearchState::Aborted;
        }

        let newly = self.visited.mark(current.pos);
        debug_assert!(newly, "{} expanded twice", current.pos);
        self.stats.expanded += 1;
        trace!(
            "expand {} g={} h={} open={}",
            current.pos,
            current.g,
            current.h,
            self.frontier.len()
        );

        nbuf.clear();
        env.neighbors(current.pos, nbuf);

        for &np in nbuf.iter() {
            if !env.is_traversable(np) || self.visited.contains(np) {
                continue;
            }
            let g = current.g + 1;
            let h = heuristic.estimate(np, goal);
            match self.frontier.push_or_improve(np, g, h, Some(current.pos)) {
                Push::Inserted => self.stats.pushed += 1,
                Push::Improved => self.stats.improved += 1,
                Push::Unchanged => {}
            }
        }

        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        SearchState::Running
    }
}

/// Check both endpoints before any search work happens.
fn validate<E: Environment>(env: &E, from: Position, to: Position) -> Result<(), SearchError> {
    for (endpoint, pos) in [(Endpoint::Start, from), (Endpoint::Goal, to)] {
        if !env.in_bounds(pos) {
            return Err(SearchError::OutOfBounds { endpoint, pos });
        }
    }
    for (endpoint, pos) in [(Endpoint::Start, from), (Endpoint::Goal, to)] {
        if !env.is_traversable(pos) {
            return Err(SearchError::UntraversableEndpoint { endpoint, pos });
        }
    }
    Ok(())
}

/// One-shot search with a fresh [`Pathfinder`] and the Manhattan heuristic.
///
/// Returns `Ok(None)` when the goal is unreachable.
pub fn find_path<E: Environment>(
    env: &E,
    from: Position,
    to: Position,
) -> Result<Option<Path>, SearchError> {
    Ok(Pathfinder::new().astar_path(env, from, to)?.into_path())
}
