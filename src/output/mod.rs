mod code;
mod destination;
mod json;
mod simple;
mod verbose;

pub use code::{CodeSerializer, Indent};
pub use destination::Destination;
pub use json::JsonSerializer;
pub use simple::SimpleSerializer;
pub use verbose::VerboseSerializer;

use crate::platform::Platform;
use crate::types::MeasurementResult;

/// Renders measurement results as text.
///
/// `prefix` runs once before any result, `emit` once per result in report order and `suffix`
/// once after the last result. [`serialize`] is the only caller and guarantees that order.
pub trait Serializer {
    fn prefix(&mut self, _out: &mut String) {}

    fn emit(&mut self, out: &mut String, result: &MeasurementResult);

    fn suffix(&mut self, _out: &mut String) {}
}

/// Output format chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Verbose,
    /// Generated C++ with the given tab width; 0 indents with a tab character.
    Code { tab_width: u8 },
    Json { pretty: bool },
}

impl OutputFormat {
    /// Builds the serializer for results measured on `platform`. `tool_name` goes into the
    /// generated-code banner.
    pub fn serializer(self, tool_name: &str, platform: &Platform) -> Box<dyn Serializer> {
        match self {
            OutputFormat::Simple => Box::new(SimpleSerializer),
            OutputFormat::Verbose => Box::new(VerboseSerializer),
            OutputFormat::Code { tab_width } => {
                Box::new(CodeSerializer::new(Indent::from_tab_width(tab_width), tool_name))
            }
            OutputFormat::Json { pretty } => Box::new(JsonSerializer::new(pretty, platform.pointer_size())),
        }
    }
}

/// Runs `serializer` over `results`: prefix, one emit per result, suffix.
pub fn serialize<S: Serializer + ?Sized>(serializer: &mut S, results: &[MeasurementResult]) -> String {
    let mut output = String::new();
    serializer.prefix(&mut output);
    for result in results {
        serializer.emit(&mut output, result);
    }
    serializer.suffix(&mut output);
    output
}
