use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Per-vertex state of one shortest-path run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marking<W> {
    /// Label of the vertex this marking belongs to
    pub label: String,

    /// Best known distance from the source, `None` while unreached
    pub distance: Option<W>,

    /// True once the distance is final
    pub explored: bool,

    /// Marking this vertex was reached from in the shortest-path tree
    pub predecessor: Option<VertexId>,
}

impl<W> Marking<W> {
    /// Returns true if the vertex has been reached from the source
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// The markings of every vertex, laid out in graph vertex order.
///
/// A table is created fresh for each run and only the engine mutates it;
/// callers receive it read-only once the run is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkingTable<W> {
    markings: Vec<Marking<W>>,
    source: VertexId,
}

impl<W> MarkingTable<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates one unexplored, unreached marking per vertex, except for the
    /// source which starts explored at distance zero.
    pub fn initialize<G: Graph<W>>(graph: &G, source_label: &str) -> Result<Self> {
        let source = graph.resolve(source_label)?;

        let markings = (0..graph.vertex_count())
            .map(|i| -> Result<Marking<W>> {
                let id = VertexId(i);
                let is_source = id == source;
                Ok(Marking {
                    label: graph.label(id)?.to_string(),
                    distance: is_source.then(W::zero),
                    explored: is_source,
                    predecessor: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MarkingTable { markings, source })
    }

    /// Number of markings, equal to the graph's vertex count
    pub fn len(&self) -> usize {
        self.markings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markings.is_empty()
    }

    /// Handle of the source vertex
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Looks up a marking by exact label match
    pub fn get(&self, label: &str) -> Result<&Marking<W>> {
        self.markings
            .iter()
            .find(|m| m.label == label)
            .ok_or_else(|| Error::NotFound(label.to_string()))
    }

    /// Looks up a marking by vertex handle
    pub fn get_by_id(&self, vertex: VertexId) -> Result<&Marking<W>> {
        self.markings
            .get(vertex.index())
            .ok_or(Error::InvalidVertex(vertex.index()))
    }

    /// Position of the marking with the given label
    pub fn id_of(&self, label: &str) -> Result<VertexId> {
        self.markings
            .iter()
            .position(|m| m.label == label)
            .map(VertexId)
            .ok_or_else(|| Error::NotFound(label.to_string()))
    }

    /// Iterates over handles and markings in graph vertex order
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Marking<W>)> + '_ {
        self.markings
            .iter()
            .enumerate()
            .map(|(i, m)| (VertexId(i), m))
    }

    /// Label of the predecessor of a vertex, if any
    pub fn predecessor_label(&self, vertex: VertexId) -> Result<Option<&str>> {
        match self.get_by_id(vertex)?.predecessor {
            Some(pred) => Ok(Some(self.get_by_id(pred)?.label.as_str())),
            None => Ok(None),
        }
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.markings.iter().filter(|m| m.is_reachable()).count()
    }

    /// Number of finalized vertices
    pub fn explored_count(&self) -> usize {
        self.markings.iter().filter(|m| m.explored).count()
    }

    /// Lowers the tentative distance of `vertex` to `distance` via `from`.
    ///
    /// Returns false and leaves the marking untouched when the vertex is
    /// already explored or the candidate is not strictly better.
    pub(crate) fn relax(&mut self, vertex: VertexId, from: VertexId, distance: W) -> Result<bool> {
        let marking = self
            .markings
            .get_mut(vertex.index())
            .ok_or(Error::InvalidVertex(vertex.index()))?;

        if marking.explored {
            return Ok(false);
        }

        let improves = match marking.distance {
            None => true,
            Some(current) => distance < current,
        };
        if improves {
            marking.distance = Some(distance);
            marking.predecessor = Some(from);
        }
        Ok(improves)
    }

    pub(crate) fn mark_explored(&mut self, vertex: VertexId) -> Result<()> {
        let marking = self
            .markings
            .get_mut(vertex.index())
            .ok_or(Error::InvalidVertex(vertex.index()))?;
        debug_assert!(marking.distance.is_some(), "only reached vertices are finalized");
        marking.explored = true;
        Ok(())
    }

    /// Linear scan for the unexplored, reached vertex with the smallest
    /// distance. Ties go to the earliest vertex in graph order.
    pub(crate) fn closest_unexplored(&self) -> Option<VertexId> {
        let mut closest: Option<(VertexId, W)> = None;

        for (id, marking) in self.iter() {
            if marking.explored {
                continue;
            }
            let Some(distance) = marking.distance else {
                continue;
            };
            match closest {
                Some((_, best)) if distance >= best => {}
                _ => closest = Some((id, distance)),
            }
        }

        closest.map(|(id, _)| id)
    }
}
