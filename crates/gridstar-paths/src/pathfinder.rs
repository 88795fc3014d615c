use gridstar_core::{Bounds, Position};

use crate::frontier::Frontier;
use crate::visited::VisitedSet;

/// Tuning knobs for a [`Pathfinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Stop with [`SearchOutcome::Aborted`](crate::SearchOutcome::Aborted)
    /// once this many positions have been expanded. `None` searches until
    /// the goal is found or the frontier runs dry.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Cap the number of expanded positions per search.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}

/// Counters describing the last search run by a [`Pathfinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Positions popped from the frontier and expanded (the visited set size).
    pub expanded: usize,
    /// Positions inserted into the frontier, the start included.
    pub pushed: usize,
    /// Frontier members whose cost was lowered.
    pub improved: usize,
    /// Largest number of open frontier members at any time.
    pub peak_frontier: usize,
}

/// A* search driver.
///
/// `Pathfinder` owns the frontier and visited set so that repeated queries
/// reuse their storage. Every query starts from a clean state: records left
/// by earlier queries are invalidated, never read. Queries take `&mut self`,
/// so one `Pathfinder` runs one search at a time; use one per thread for
/// concurrent searches over a shared environment.
pub struct Pathfinder {
    pub(crate) config: SearchConfig,
    pub(crate) frontier: Frontier,
    pub(crate) visited: VisitedSet,
    pub(crate) stats: SearchStats,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Position>,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder {
    /// Create a pathfinder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create a pathfinder with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            frontier: Frontier::new(Bounds::default()),
            visited: VisitedSet::new(Bounds::default()),
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Statistics of the most recent search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Clear all per-search state for a search over `bounds`.
    pub(crate) fn prepare(&mut self, bounds: Bounds) {
        self.frontier.reset(bounds);
        self.visited.reset(bounds);
        self.stats = SearchStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let c = SearchConfig::default();
        assert_eq!(c.max_expansions, None);
        assert_eq!(c.with_max_expansions(10).max_expansions, Some(10));

        let mut pf = Pathfinder::with_config(c.with_max_expansions(3));
        assert_eq!(pf.config().max_expansions, Some(3));
        pf.set_config(SearchConfig::default());
        assert_eq!(pf.config(), SearchConfig::default());
    }

    #[test]
    fn prepare_resets_state() {
        let mut pf = Pathfinder::new();
        pf.prepare(Bounds::new(4, 4));
        pf.visited.mark(Position::new(1, 1));
        pf.frontier.push_or_improve(Position::new(2, 2), 1, 1, None);
        pf.stats.expanded = 7;

        pf.prepare(Bounds::new(4, 4));
        assert!(pf.visited.is_empty());
        assert!(pf.frontier.is_empty());
        assert_eq!(pf.frontier.cost(Position::new(2, 2)), None);
        assert_eq!(pf.stats(), SearchStats::default());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_defaults_missing_fields() {
        let c: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, SearchConfig::default());
        let c: SearchConfig = serde_json::from_str(r#"{"max_expansions":50}"#).unwrap();
        assert_eq!(c.max_expansions, Some(50));
    }
}
