pub mod cli;
pub mod error;
pub mod measure;
pub mod output;
pub mod platform;
pub mod probe;
pub mod types;

pub use cli::{Invocation, Mode, TOOL_NAME, ToolIdentity, VERSION};
pub use error::{Error, Result};
pub use measure::{measure, measure_all};
pub use output::{
    CodeSerializer, Destination, Indent, JsonSerializer, OutputFormat, Serializer, SimpleSerializer,
    VerboseSerializer, serialize,
};
pub use platform::Platform;
pub use probe::{LayoutProbe, NodeSizeProbe};
pub use types::{ContainerKind, MeasurementResult, NodeShape, NodeSizeEntry};
