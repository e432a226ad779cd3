use super::Serializer;
use crate::types::MeasurementResult;
use serde::Serialize;

#[derive(Serialize)]
struct Output<'a> {
    version: &'static str,
    pointer_size: u64,
    containers: &'a [MeasurementResult],
}

/// Buffers every result and writes one JSON document in `suffix`.
pub struct JsonSerializer {
    pretty: bool,
    pointer_size: u64,
    containers: Vec<MeasurementResult>,
}

impl JsonSerializer {
    /// `pointer_size` is that of the platform the results were measured for.
    pub fn new(pretty: bool, pointer_size: u64) -> Self {
        Self { pretty, pointer_size, containers: Vec::new() }
    }
}

impl Serializer for JsonSerializer {
    fn emit(&mut self, _out: &mut String, result: &MeasurementResult) {
        self.containers.push(result.clone());
    }

    fn suffix(&mut self, out: &mut String) {
        let output = Output {
            version: env!("CARGO_PKG_VERSION"),
            pointer_size: self.pointer_size,
            containers: &self.containers,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        };
        out.push_str(&rendered.unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)));
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::serialize;

    fn results() -> Vec<MeasurementResult> {
        vec![MeasurementResult::new("list").with_entry(4, 12).with_entry(8, 16)]
    }

    #[test]
    fn json_serializer_compact() {
        let out = serialize(&mut JsonSerializer::new(false, 8), &results());
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("\"containers\""));
    }

    #[test]
    fn json_serializer_structure() {
        let out = serialize(&mut JsonSerializer::new(true, 8), &results());
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(parsed["pointer_size"], 8);
        let list = &parsed["containers"][0];
        assert_eq!(list["container_name"], "list");
        assert_eq!(list["node_sizes"][1]["alignment"], 8);
        assert_eq!(list["node_sizes"][1]["base_node_size"], 16);
    }

    #[test]
    fn json_serializer_empty() {
        let out = serialize(&mut JsonSerializer::new(false, 8), &[]);
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert!(parsed["containers"].as_array().is_some_and(|c| c.is_empty()));
    }
}
