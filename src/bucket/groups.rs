//! Greedy partitioning of one topology into 16-bit addressable groups
//!
//! A group is filled until the next addition would push it past its vertex
//! capacity; then a new group is opened. Groups are never revisited, merged
//! or split.

use serde::Serialize;

use crate::backend::PrimitiveKind;

/// A contiguous run of vertices and elements drawn with one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Group {
    /// Vertices consumed so far.
    pub vertex_length: usize,
    /// Segments or triangles consumed so far.
    pub elements_length: usize,
}

pub type LineGroup = Group;
pub type TriangleGroup = Group;

/// The ordered groups of one topology.
#[derive(Debug, Clone)]
pub(crate) struct GroupSequence {
    kind: PrimitiveKind,
    max_vertices: usize,
    groups: Vec<Group>,
}

impl GroupSequence {
    pub(crate) fn new(kind: PrimitiveKind, max_vertices: usize) -> Self {
        GroupSequence { kind, max_vertices, groups: Vec::new() }
    }

    /// The group that will receive `vertices` more vertices.
    ///
    /// Opens a new group when there is none yet or the active one can't take
    /// them. `vertices` must not exceed the group capacity.
    pub(crate) fn reserve(&mut self, vertices: usize) -> &mut Group {
        debug_assert!(vertices <= self.max_vertices);

        let needs_new = match self.groups.last() {
            Some(group) => group.vertex_length + vertices > self.max_vertices,
            None => true,
        };
        if needs_new {
            if let Some(full) = self.groups.last() {
                log::debug!(
                    "{:?} group {} closed at {} vertices, opening group {}",
                    self.kind,
                    self.groups.len() - 1,
                    full.vertex_length,
                    self.groups.len()
                );
            }
            self.groups.push(Group::default());
        }

        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    pub(crate) fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn into_groups(self) -> Vec<Group> {
        self.groups
    }
}
