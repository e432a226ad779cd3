use super::Serializer;
use crate::types::MeasurementResult;

/// `name:` followed by one tab-indented `alignment=size` line per entry.
pub struct SimpleSerializer;

impl Serializer for SimpleSerializer {
    fn emit(&mut self, out: &mut String, result: &MeasurementResult) {
        out.push_str(&format!("{}:\n", result.container_name));
        for entry in &result.node_sizes {
            out.push_str(&format!("\t{}={}\n", entry.alignment, entry.base_node_size));
        }
    }
}
