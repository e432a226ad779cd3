mod layout;

pub use layout::{LayoutProbe, NodeField, NodeLayout, align_up};

use crate::types::ContainerKind;

/// Source of base node sizes.
///
/// Implementations must be total over every `ContainerKind` and every alignment of the
/// platform they were built for, and must return the same value for repeated calls.
pub trait NodeSizeProbe {
    fn base_node_size(&self, kind: ContainerKind, alignment: u64) -> u64;
}

impl<P: NodeSizeProbe + ?Sized> NodeSizeProbe for &P {
    fn base_node_size(&self, kind: ContainerKind, alignment: u64) -> u64 {
        (**self).base_node_size(kind, alignment)
    }
}
