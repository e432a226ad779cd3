use anyhow::{Context, Result};
use node_size_debugger::{
    Error, Invocation, LayoutProbe, OutputFormat, Platform, TOOL_NAME, ToolIdentity, measure_all, serialize,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let identity = ToolIdentity::new(TOOL_NAME);

    let invocation = match Invocation::parse_from(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprint!("{}", identity.usage_error(&err));
            return ExitCode::from(err.exit_code());
        }
    };

    match run(invocation, &identity) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", identity.name(), err);
            ExitCode::from(err.downcast_ref::<Error>().map_or(1, Error::exit_code))
        }
    }
}

/// Diagnostics go to stderr and stay off unless `RUST_LOG` asks for them.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(invocation: Invocation, identity: &ToolIdentity) -> Result<()> {
    match invocation {
        Invocation::Help => print!("{}", identity.help()),
        Invocation::Version => print!("{}", identity.version()),
        Invocation::Report { format, mut destination } => {
            let text = render(format, identity);
            tracing::debug!(destination = %destination.describe(), bytes = text.len(), "writing report");
            destination
                .write_all(&text)
                .with_context(|| format!("Failed to write output to {}", destination.describe()))?;
        }
    }

    Ok(())
}

fn render(format: OutputFormat, identity: &ToolIdentity) -> String {
    tracing::debug!(?format, "selected output format");

    let platform = Platform::host();
    let probe = LayoutProbe::new(platform.clone());
    let results = measure_all(&probe, platform.alignments());

    let mut serializer = format.serializer(identity.name(), &platform);
    serialize(serializer.as_mut(), &results)
}
