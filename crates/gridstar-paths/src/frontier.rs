use std::collections::BinaryHeap;

use gridstar_core::{Bounds, Position};

/// Sentinel parent index meaning "no predecessor".
const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Dense per-position record
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Record {
    g: i32,
    h: i32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f` first, then the smallest `h`, then the earliest `seq`.
///
/// `g` is kept so entries superseded by an improvement can be recognised.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: i32,
    h: i32,
    seq: u64,
    g: i32,
    idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A member removed from the [`Frontier`] by [`pop_min`](Frontier::pop_min).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub pos: Position,
    pub g: i32,
    pub h: i32,
    pub predecessor: Option<Position>,
}

impl FrontierEntry {
    /// Total estimated cost `g + h`.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Effect of a [`push_or_improve`](Frontier::push_or_improve) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    /// The position was not a member and has been added.
    Inserted,
    /// The position was a member with a higher `g`, now replaced.
    Improved,
    /// Nothing changed.
    Unchanged,
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Open set of an A* search.
///
/// Holds every position seen during the current search in a dense table
/// keyed by position, and the open members in a binary heap keyed by
/// `(f, h, insertion order)`. Improving a member pushes a fresh heap entry
/// and leaves the old one behind; stale entries are dropped when they reach
/// the top of the heap.
///
/// Popped positions keep their record (final `g` and predecessor) until the
/// next [`reset`](Self::reset), which is what path reconstruction reads.
pub struct Frontier {
    bounds: Bounds,
    heap: BinaryHeap<OpenEntry>,
    records: Vec<Record>,
    generation: u32,
    seq: u64,
    len: usize,
}

impl Frontier {
    /// Create an empty frontier for positions inside `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            heap: BinaryHeap::new(),
            records: vec![Record::default(); bounds.len()],
            generation: 1,
            seq: 0,
            len: 0,
        }
    }

    /// Empty the frontier and forget every record, switching to `bounds`.
    ///
    /// If the new bounds fit the existing table, records are invalidated by
    /// bumping the generation instead of being cleared.
    pub fn reset(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.heap.clear();
        self.seq = 0;
        self.len = 0;

        let len = bounds.len();
        if len <= self.records.len() {
            self.generation = self.generation.wrapping_add(1);
            if self.generation == 0 {
                // Wrapped: stamps from 2^32 searches ago would look current.
                self.records.fill(Record::default());
                self.generation = 1;
            }
            return;
        }

        self.records.clear();
        self.records.resize(len, Record::default());
        self.generation = 1;
    }

    /// The bounds this frontier currently covers.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of open members.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no position is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `pos`, or lower its cost if `g` beats the member's current `g`.
    ///
    /// Positions outside the bounds, and positions already popped during
    /// this search, are left untouched.
    pub fn push_or_improve(
        &mut self,
        pos: Position,
        g: i32,
        h: i32,
        predecessor: Option<Position>,
    ) -> Push {
        let Some(idx) = self.bounds.index(pos) else {
            return Push::Unchanged;
        };
        let parent = predecessor
            .and_then(|p| self.bounds.index(p))
            .unwrap_or(NO_PARENT);
        let cur_gen = self.generation;

        let rec = &mut self.records[idx];
        let result = if rec.generation != cur_gen {
            Push::Inserted
        } else if !rec.open || g >= rec.g {
            return Push::Unchanged;
        } else {
            Push::Improved
        };

        rec.g = g;
        rec.h = h;
        rec.parent = parent;
        rec.generation = cur_gen;
        rec.open = true;

        if result == Push::Inserted {
            self.len += 1;
        }
        self.heap.push(OpenEntry {
            f: g + h,
            h,
            seq: self.seq,
            g,
            idx,
        });
        self.seq += 1;
        result
    }

    /// Remove and return the open member with the smallest `f`.
    ///
    /// Ties go to the smaller `h`, then to the member inserted (or last
    /// improved) earliest.
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.heap.pop() {
            let rec = &mut self.records[entry.idx];
            if rec.generation != self.generation || !rec.open || rec.g != entry.g {
                continue;
            }
            rec.open = false;
            self.len -= 1;
            let predecessor = (rec.parent != NO_PARENT).then(|| self.bounds.position(rec.parent));
            return Some(FrontierEntry {
                pos: self.bounds.position(entry.idx),
                g: rec.g,
                h: rec.h,
                predecessor,
            });
        }
        None
    }

    /// Whether `pos` is an open member.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.best_g(pos).is_some()
    }

    /// Best known `g` of `pos` if it is an open member.
    #[inline]
    pub fn best_g(&self, pos: Position) -> Option<i32> {
        let rec = self.current(pos)?;
        rec.open.then_some(rec.g)
    }

    /// Recorded `g` of `pos`, whether still open or already popped.
    #[inline]
    pub fn cost(&self, pos: Position) -> Option<i32> {
        self.current(pos).map(|rec| rec.g)
    }

    /// Recorded predecessor of `pos`, whether still open or already popped.
    #[inline]
    pub fn predecessor(&self, pos: Position) -> Option<Position> {
        let rec = self.current(pos)?;
        (rec.parent != NO_PARENT).then(|| self.bounds.position(rec.parent))
    }

    #[inline]
    fn current(&self, pos: Position) -> Option<&Record> {
        let rec = &self.records[self.bounds.index(pos)?];
        (rec.generation == self.generation).then_some(rec)
    }
}
