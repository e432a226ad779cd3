//! Node size computation from a model of the standard library's node structs.

use super::NodeSizeProbe;
use crate::platform::Platform;
use crate::types::{ContainerKind, NodeShape};

/// Size of the `int`-backed color enum in a red-black tree node.
const RB_COLOR_SIZE: u64 = 4;

/// Align value up to alignment boundary.
/// Returns value unchanged if alignment <= 1, and u64::MAX if rounding would overflow.
pub fn align_up(value: u64, alignment: u64) -> u64 {
    if alignment <= 1 {
        return value;
    }
    match value.checked_add(alignment - 1) {
        Some(sum) => (sum / alignment) * alignment,
        None => u64::MAX,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeField {
    pub size: u64,
    pub alignment: u64,
}

impl NodeField {
    pub fn new(size: u64, alignment: u64) -> Self {
        Self { size, alignment }
    }

    fn pointer(platform: &Platform) -> Self {
        Self::new(platform.pointer_size(), platform.pointer_size())
    }
}

/// Fields of one node in declaration order, laid out with C struct rules.
#[derive(Debug, Clone)]
pub struct NodeLayout {
    fields: Vec<NodeField>,
}

impl NodeLayout {
    pub fn new(fields: Vec<NodeField>) -> Self {
        Self { fields }
    }

    /// Node of the given shape storing a value whose size equals its alignment.
    pub fn for_shape(shape: NodeShape, platform: &Platform, value_alignment: u64) -> Self {
        let value = NodeField::new(value_alignment, value_alignment);
        let fields = match shape {
            NodeShape::SinglyLinked => vec![NodeField::pointer(platform), value],
            NodeShape::DoublyLinked => {
                vec![NodeField::pointer(platform), NodeField::pointer(platform), value]
            }
            NodeShape::RedBlackTree => vec![
                NodeField::new(RB_COLOR_SIZE, RB_COLOR_SIZE),
                NodeField::pointer(platform),
                NodeField::pointer(platform),
                NodeField::pointer(platform),
                value,
            ],
            // size_t has pointer width on every supported target.
            NodeShape::Hashed => vec![
                NodeField::pointer(platform),
                value,
                NodeField::new(platform.pointer_size(), platform.pointer_size()),
            ],
        };
        Self::new(fields)
    }

    pub fn alignment(&self) -> u64 {
        self.fields.iter().map(|f| f.alignment).max().unwrap_or(1)
    }

    /// Offset of each field, in declaration order.
    pub fn offsets(&self) -> Vec<u64> {
        let mut offset = 0u64;
        self.fields
            .iter()
            .map(|field| {
                let start = align_up(offset, field.alignment);
                offset = start.saturating_add(field.size);
                start
            })
            .collect()
    }

    /// Total size including tail padding.
    pub fn size(&self) -> u64 {
        let end = self
            .offsets()
            .iter()
            .zip(&self.fields)
            .map(|(offset, field)| offset.saturating_add(field.size))
            .max()
            .unwrap_or(0);
        align_up(end, self.alignment())
    }
}

/// Probe computing node sizes from the node layout model for a given platform.
#[derive(Debug, Clone)]
pub struct LayoutProbe {
    platform: Platform,
}

impl LayoutProbe {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }
}

impl NodeSizeProbe for LayoutProbe {
    fn base_node_size(&self, kind: ContainerKind, alignment: u64) -> u64 {
        let layout = NodeLayout::for_shape(kind.shape(), &self.platform, alignment);
        layout.size() - alignment
    }
}
