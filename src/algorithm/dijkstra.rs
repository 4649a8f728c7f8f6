use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{PrimInt, Unsigned};

use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::{BinaryHeapWrapper, MarkingTable};
use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// How the next vertex to finalize is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// O(V) scan over all markings per step
    #[default]
    LinearScan,

    /// Min-heap keyed by `(distance, vertex)` with lazy deletion.
    /// Selects exactly the same vertices as the linear scan.
    BinaryHeap,
}

/// State of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// A just-explored vertex still has to be expanded
    Running,
    /// The frontier is empty; the marking table is final
    Done,
}

/// Classic label-setting Dijkstra's algorithm
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    selection: Selection,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using linear-scan selection
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Creates a new Dijkstra algorithm instance with the given selection strategy
    pub fn with_selection(selection: Selection) -> Self {
        Dijkstra { selection }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Initializes the markings and returns a run positioned on the source.
    /// Fails with `NotFound` if the source label is not in the graph.
    pub fn start<'g, W, G>(&self, graph: &'g G, source_label: &str) -> Result<DijkstraRun<'g, W, G>>
    where
        W: PrimInt + Unsigned + Debug,
        G: Graph<W>,
    {
        let table = MarkingTable::initialize(graph, source_label)?;
        let source = table.source();

        debug!(
            "Starting Dijkstra ({:?}) from {} on {} vertices and {} edges",
            self.selection,
            source_label,
            graph.vertex_count(),
            graph.edge_count()
        );

        let queue = match self.selection {
            Selection::LinearScan => BinaryHeapWrapper::new(),
            Selection::BinaryHeap => BinaryHeapWrapper::with_capacity(graph.vertex_count()),
        };

        Ok(DijkstraRun {
            graph,
            table,
            selection: self.selection,
            queue,
            current: Some(source),
            overflowed: Vec::new(),
            steps: 0,
        })
    }

    /// Runs to completion and returns the final marking table
    pub fn compute<W, G>(&self, graph: &G, source_label: &str) -> Result<MarkingTable<W>>
    where
        W: PrimInt + Unsigned + Debug,
        G: Graph<W>,
    {
        self.start(graph, source_label)?.finish()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        match self.selection {
            Selection::LinearScan => "Dijkstra (linear scan)",
            Selection::BinaryHeap => "Dijkstra (binary heap)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source_label: &str) -> Result<MarkingTable<W>> {
        self.compute(graph, source_label)
    }
}

/// One in-progress run of the selection/relaxation loop.
///
/// The run owns its marking table exclusively until [`DijkstraRun::finish`]
/// hands it back to the caller.
#[derive(Debug)]
pub struct DijkstraRun<'g, W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    graph: &'g G,
    table: MarkingTable<W>,
    selection: Selection,
    /// Frontier entries, only filled for heap selection
    queue: BinaryHeapWrapper<VertexId, W>,
    /// Vertex explored last, whose outgoing edges are relaxed on the next step
    current: Option<VertexId>,
    /// Vertices that were offered a distance too large for `W`
    overflowed: Vec<VertexId>,
    steps: usize,
}

impl<'g, W, G> DijkstraRun<'g, W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    pub fn state(&self) -> RunState {
        if self.current.is_some() {
            RunState::Running
        } else {
            RunState::Done
        }
    }

    /// Number of vertices finalized after the source
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Read-only view of the markings as they stand
    pub fn table(&self) -> &MarkingTable<W> {
        &self.table
    }

    /// Relaxes the edges of the last explored vertex, then finalizes the
    /// closest unexplored vertex. Returns it, or `None` once the run is done.
    pub fn step(&mut self) -> Result<Option<VertexId>> {
        let Some(u) = self.current else {
            return Ok(None);
        };

        self.relax_from(u)?;

        let next = match self.selection {
            Selection::LinearScan => self.table.closest_unexplored(),
            Selection::BinaryHeap => self.pop_closest()?,
        };

        match next {
            Some(v) => {
                self.table.mark_explored(v)?;
                self.steps += 1;
                trace!(
                    "Explored {} at distance {:?}",
                    self.table.get_by_id(v)?.label,
                    self.table.get_by_id(v)?.distance
                );
            }
            None => {
                self.check_overflow()?;
                debug!(
                    "Run finished after {} steps: {} of {} vertices reachable",
                    self.steps,
                    self.table.reachable_count(),
                    self.table.len()
                );
            }
        }

        self.current = next;
        Ok(next)
    }

    /// Steps until done and returns the final marking table
    pub fn finish(mut self) -> Result<MarkingTable<W>> {
        while self.step()?.is_some() {}
        Ok(self.table)
    }

    fn relax_from(&mut self, u: VertexId) -> Result<()> {
        let graph = self.graph;
        let from = self.table.get_by_id(u)?;
        let Some(base) = from.distance else {
            return Err(Error::Unreachable(from.label.clone()));
        };

        for (v, weight) in graph.outgoing_edges(u) {
            // Explored vertices are final
            if self.table.get_by_id(v)?.explored {
                continue;
            }

            // An overflowing candidate can never beat a representable distance
            let Some(candidate) = base.checked_add(&weight) else {
                trace!("Candidate {} -> {} overflows", u, v);
                if !self.overflowed.contains(&v) {
                    self.overflowed.push(v);
                }
                continue;
            };

            if self.table.relax(v, u, candidate)? {
                trace!("Relaxed {} -> {} to {:?}", u, v, candidate);
                if self.selection == Selection::BinaryHeap {
                    self.queue.push(v, candidate);
                }
            }
        }

        Ok(())
    }

    fn pop_closest(&mut self) -> Result<Option<VertexId>> {
        while let Some((v, distance)) = self.queue.pop() {
            let marking = self.table.get_by_id(v)?;
            // Skip stale entries left behind by later improvements
            if !marking.explored && marking.distance == Some(distance) {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }

    /// Fails if a vertex was only ever offered overflowing distances
    fn check_overflow(&self) -> Result<()> {
        for &v in &self.overflowed {
            let marking = self.table.get_by_id(v)?;
            if marking.distance.is_none() {
                return Err(Error::DistanceOverflow(marking.label.clone()));
            }
        }
        Ok(())
    }
}
