use crate::probe::NodeSizeProbe;
use crate::types::{ContainerKind, MeasurementResult, NodeSizeEntry};

/// Probes `kind` once per alignment, keeping the order of `alignments`.
pub fn measure<P: NodeSizeProbe + ?Sized>(
    probe: &P,
    kind: ContainerKind,
    alignments: &[u64],
) -> MeasurementResult {
    let node_sizes = alignments
        .iter()
        .map(|&alignment| NodeSizeEntry::new(alignment, probe.base_node_size(kind, alignment)))
        .collect();

    let result = MeasurementResult { container_name: kind.name(), node_sizes };
    tracing::debug!(container = kind.name(), entries = result.node_sizes.len(), "measured container");
    result
}

/// Measures every container kind, in report order.
pub fn measure_all<P: NodeSizeProbe + ?Sized>(probe: &P, alignments: &[u64]) -> Vec<MeasurementResult> {
    ContainerKind::ALL.iter().map(|&kind| measure(probe, kind, alignments)).collect()
}
