//! The A* open set: a coordinate-keyed priority frontier.
//!
//! The frontier maps each discovered-but-unexpanded coordinate to its
//! current best [`SearchNode`] and hands nodes back in minimum-`f` order.
//! Among equal-`f` candidates, extraction prefers the node closest to a
//! caller-supplied reference point (typically the goal); naive FIFO
//! tie-breaking makes equal-cost searches wander, while goal-proximity
//! tie-breaking keeps them visibly greedy. Remaining ties fall back to
//! first-inserted order, so extraction is fully deterministic.

#![warn(missing_docs)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use kestrel_grid::GridPoint;

use crate::error::PlanError;

/// A visited or frontier grid cell during search.
///
/// Equality and hashing are by coordinate only, never by cost fields, so a
/// node stays a valid set/map key while `g`, `f` and `parent` mutate during
/// relaxation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    /// The grid cell this node stands for; its identity.
    pub coordinate: GridPoint,
    /// Best known cost from the start to this node.
    pub g: f64,
    /// Heuristic estimate from this node to the goal; stationary per
    /// coordinate.
    pub h: f64,
    /// Total estimated cost `g + h`; the priority key.
    pub f: f64,
    /// Coordinate of the node this one was best reached from, or `None`
    /// for the start node. A key into the engine's node table, not an
    /// owning reference.
    pub parent: Option<GridPoint>,
}

impl SearchNode {
    /// Creates a node with `f` derived from `g + h`.
    pub fn new(coordinate: GridPoint, g: f64, h: f64, parent: Option<GridPoint>) -> Self {
        SearchNode {
            coordinate,
            g,
            h,
            f: g + h,
            parent,
        }
    }

    /// Creates the start node: zero accumulated cost, no parent.
    pub fn start(coordinate: GridPoint, h: f64) -> Self {
        SearchNode::new(coordinate, 0.0, h, None)
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}

/// A frontier entry: the node plus its insertion rank for FIFO tie-breaks.
#[derive(Debug, Clone)]
struct Entry {
    node: SearchNode,
    seq: u64,
}

/// The open set of an A* search.
///
/// Each coordinate appears at most once; its stored cost is the best `f`
/// known at insertion or last update.
#[derive(Debug, Default)]
pub struct Frontier {
    entries: HashMap<GridPoint, Entry>,
    next_seq: u64,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Frontier::default()
    }

    /// Adds a newly discovered node.
    ///
    /// # Returns
    /// * `Result<(), PlanError>` - `DuplicateInsert` if the node's
    ///   coordinate is already present; callers must relax existing entries
    ///   through [`Frontier::update`] instead
    pub fn insert(&mut self, node: SearchNode) -> Result<(), PlanError> {
        if self.entries.contains_key(&node.coordinate) {
            return Err(PlanError::DuplicateInsert(node.coordinate));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(node.coordinate, Entry { node, seq });
        Ok(())
    }

    /// Returns true iff the coordinate has been discovered but not yet
    /// expanded.
    pub fn contains(&self, point: &GridPoint) -> bool {
        self.entries.contains_key(point)
    }

    /// The current `f` cost stored for a coordinate.
    ///
    /// # Returns
    /// * `Result<f64, PlanError>` - `NotFound` if the coordinate is absent
    pub fn peek_cost(&self, point: &GridPoint) -> Result<f64, PlanError> {
        self.entries
            .get(point)
            .map(|entry| entry.node.f)
            .ok_or(PlanError::NotFound(*point))
    }

    /// Relaxes the stored node for a coordinate in place.
    ///
    /// Takes the strictly better of the stored and proposed costs: when
    /// `new_g + new_h` is not lower than the stored `f` the call is a
    /// no-op, so redundant relaxations are always safe.
    ///
    /// # Returns
    /// * `Result<(), PlanError>` - `NotFound` if the coordinate is absent
    pub fn update(
        &mut self,
        point: &GridPoint,
        new_g: f64,
        new_h: f64,
        new_parent: Option<GridPoint>,
    ) -> Result<(), PlanError> {
        let entry = self
            .entries
            .get_mut(point)
            .ok_or(PlanError::NotFound(*point))?;

        let new_f = new_g + new_h;
        if new_f < entry.node.f {
            entry.node.g = new_g;
            entry.node.h = new_h;
            entry.node.f = new_f;
            entry.node.parent = new_parent;
        }
        Ok(())
    }

    /// Removes and returns the node of minimum `f`.
    ///
    /// # Arguments
    /// * `tie_break` - Among nodes sharing the minimum `f`, prefer the one
    ///   Euclidean-closest to this point; with `None` (or on equal
    ///   distances) ties fall back to first-inserted order
    ///
    /// # Returns
    /// * `Result<SearchNode, PlanError>` - `EmptyFrontier` when nothing is
    ///   left to extract
    pub fn extract_min(&mut self, tie_break: Option<GridPoint>) -> Result<SearchNode, PlanError> {
        let mut best: Option<&Entry> = None;
        for entry in self.entries.values() {
            best = match best {
                None => Some(entry),
                Some(incumbent) => {
                    if Self::beats(entry, incumbent, tie_break.as_ref()) {
                        Some(entry)
                    } else {
                        Some(incumbent)
                    }
                }
            };
        }

        let key = match best {
            Some(entry) => entry.node.coordinate,
            None => return Err(PlanError::EmptyFrontier),
        };
        self.entries
            .remove(&key)
            .map(|entry| entry.node)
            .ok_or(PlanError::EmptyFrontier)
    }

    /// Number of nodes currently in the frontier.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true iff the frontier holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strict extraction order: lower `f` first, then closer to the
    /// reference, then earlier insertion. `seq` is unique per entry, so
    /// this is a total order and extraction never depends on map iteration
    /// order.
    fn beats(candidate: &Entry, incumbent: &Entry, reference: Option<&GridPoint>) -> bool {
        match candidate.node.f.total_cmp(&incumbent.node.f) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => match reference {
                Some(target) => {
                    let candidate_d2 = candidate.node.coordinate.distance2(target);
                    let incumbent_d2 = incumbent.node.coordinate.distance2(target);
                    match candidate_d2.total_cmp(&incumbent_d2) {
                        Ordering::Less => true,
                        Ordering::Greater => false,
                        Ordering::Equal => candidate.seq < incumbent.seq,
                    }
                }
                None => candidate.seq < incumbent.seq,
            },
        }
    }
}
