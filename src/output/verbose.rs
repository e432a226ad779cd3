use super::Serializer;
use crate::types::MeasurementResult;

pub struct VerboseSerializer;

impl Serializer for VerboseSerializer {
    fn emit(&mut self, out: &mut String, result: &MeasurementResult) {
        out.push_str(&format!("For container '{}':\n", result.container_name));
        for entry in &result.node_sizes {
            out.push_str(&format!(
                "\tWith an alignment of {:>2} is the base node size {:>2}.\n",
                entry.alignment, entry.base_node_size
            ));
        }
    }
}
