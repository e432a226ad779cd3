use serde::Serialize;
use std::fmt;

/// The node-based standard containers whose node overhead is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    ForwardList,
    List,
    Set,
    Multiset,
    UnorderedSet,
    UnorderedMultiset,
    Map,
    Multimap,
    UnorderedMap,
    UnorderedMultimap,
}

/// How a container links its nodes together. Containers with the same shape share a node layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// One successor pointer.
    SinglyLinked,
    /// Successor and predecessor pointers.
    DoublyLinked,
    /// Red-black tree node: color, parent, left and right.
    RedBlackTree,
    /// Bucket chain link followed by the cached hash code.
    Hashed,
}

impl ContainerKind {
    /// Every container kind, in the order results are reported.
    pub const ALL: [ContainerKind; 10] = [
        ContainerKind::ForwardList,
        ContainerKind::List,
        ContainerKind::Set,
        ContainerKind::Multiset,
        ContainerKind::UnorderedSet,
        ContainerKind::UnorderedMultiset,
        ContainerKind::Map,
        ContainerKind::Multimap,
        ContainerKind::UnorderedMap,
        ContainerKind::UnorderedMultimap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::ForwardList => "forward_list",
            ContainerKind::List => "list",
            ContainerKind::Set => "set",
            ContainerKind::Multiset => "multiset",
            ContainerKind::UnorderedSet => "unordered_set",
            ContainerKind::UnorderedMultiset => "unordered_multiset",
            ContainerKind::Map => "map",
            ContainerKind::Multimap => "multimap",
            ContainerKind::UnorderedMap => "unordered_map",
            ContainerKind::UnorderedMultimap => "unordered_multimap",
        }
    }

    pub fn shape(self) -> NodeShape {
        match self {
            ContainerKind::ForwardList => NodeShape::SinglyLinked,
            ContainerKind::List => NodeShape::DoublyLinked,
            ContainerKind::Set | ContainerKind::Multiset | ContainerKind::Map | ContainerKind::Multimap => {
                NodeShape::RedBlackTree
            }
            ContainerKind::UnorderedSet
            | ContainerKind::UnorderedMultiset
            | ContainerKind::UnorderedMap
            | ContainerKind::UnorderedMultimap => NodeShape::Hashed,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base node size of a container for one alignment of the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeSizeEntry {
    pub alignment: u64,
    /// Node size minus the storage of the value itself.
    pub base_node_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasurementResult {
    pub container_name: &'static str,
    /// One entry per alignment, ascending.
    pub node_sizes: Vec<NodeSizeEntry>,
}

impl NodeSizeEntry {
    pub fn new(alignment: u64, base_node_size: u64) -> Self {
        Self { alignment, base_node_size }
    }
}

impl MeasurementResult {
    pub fn new(container_name: &'static str) -> Self {
        Self { container_name, node_sizes: Vec::new() }
    }

    pub fn with_entry(mut self, alignment: u64, base_node_size: u64) -> Self {
        self.node_sizes.push(NodeSizeEntry::new(alignment, base_node_size));
        self
    }
}
