use crate::error::{Error, Result};
use crate::output::{Destination, OutputFormat};
use clap::ValueEnum;
use std::ffi::{OsStr, OsString};
use std::path::Path;

pub const TOOL_NAME: &str = "node_size_debugger";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The first command line token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    #[value(name = "--simple")]
    Simple,
    #[value(name = "--verbose")]
    Verbose,
    #[value(name = "--code")]
    Code,
    #[value(name = "--json")]
    Json,
    #[value(name = "--help")]
    Help,
    #[value(name = "--version")]
    Version,
}

impl Mode {
    /// Exact, case-sensitive match. Tokens that are not valid UTF-8 never match.
    pub fn from_token(token: &OsStr) -> Option<Self> {
        Mode::from_str(token.to_str()?, false).ok()
    }
}

/// What a single run of the tool does.
#[derive(Debug)]
pub enum Invocation {
    Report { format: OutputFormat, destination: Destination },
    Help,
    Version,
}

impl Invocation {
    /// Parses a full argv, program name first. Every token after the program name reaches the
    /// mode parsers unchanged, `--` included.
    pub fn parse_from<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = argv.into_iter().skip(1).map(Into::into).collect();
        Self::from_args(&args)
    }

    /// Parses the tokens that follow the program name.
    pub fn from_args(args: &[OsString]) -> Result<Self> {
        let Some((token, rest)) = args.split_first() else {
            return Ok(Self::report(OutputFormat::Simple));
        };
        let mode = Mode::from_token(token)
            .ok_or_else(|| Error::InvalidOption(token.to_string_lossy().into_owned()))?;

        match mode {
            Mode::Simple => Ok(Self::report(OutputFormat::Simple)),
            Mode::Verbose => Ok(Self::report(OutputFormat::Verbose)),
            Mode::Code => parse_code_args(rest),
            Mode::Json => parse_json_args(rest),
            // Trailing tokens are ignored.
            Mode::Help => Ok(Invocation::Help),
            Mode::Version => Ok(Invocation::Version),
        }
    }

    fn report(format: OutputFormat) -> Self {
        Invocation::Report { format, destination: Destination::Stdout }
    }
}

/// `[-t digit] [outputfile]`, scanned left to right. The output file is created as soon as it
/// is seen, so a later bad token leaves an empty file behind.
fn parse_code_args(args: &[OsString]) -> Result<Invocation> {
    let mut tab_width: u8 = 4;
    let mut destination = Destination::Stdout;

    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        if token == "-t" {
            tab_width = tokens
                .next()
                .and_then(|value| parse_digit(value))
                .ok_or(Error::InvalidArgument("-t"))?;
        } else if matches!(destination, Destination::Stdout) {
            destination = Destination::create(Path::new(token))
                .map_err(|_| Error::InvalidArgument("outputfile"))?;
        } else {
            return Err(Error::InvalidArgument("--code"));
        }
    }

    Ok(Invocation::Report { format: OutputFormat::Code { tab_width }, destination })
}

fn parse_json_args(args: &[OsString]) -> Result<Invocation> {
    let pretty = match args {
        [] => false,
        [flag] if flag == "--pretty" => true,
        _ => return Err(Error::InvalidArgument("--json")),
    };
    Ok(Invocation::report(OutputFormat::Json { pretty }))
}

/// A single ASCII digit, nothing more.
fn parse_digit(value: &OsStr) -> Option<u8> {
    match value.as_encoded_bytes() {
        [b] if b.is_ascii_digit() => Some(b - b'0'),
        _ => None,
    }
}

/// Tool name plus a blank string of the same width, used to align continuation lines of the
/// usage text.
#[derive(Debug, Clone)]
pub struct ToolIdentity {
    name: &'static str,
    padding: String,
}

impl ToolIdentity {
    pub fn new(name: &'static str) -> Self {
        Self { name, padding: " ".repeat(name.len()) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn help(&self) -> String {
        let name = self.name;
        let pad = &self.padding;
        let mut out = String::new();
        out.push_str(&format!("Usage: {name} [--version][--help]\n"));
        out.push_str(&format!("       {pad} [--simple][--verbose][--json [--pretty]]\n"));
        out.push_str(&format!("       {pad} [--code [-t digit] [outputfile]]\n"));
        out.push_str("Reports the per-node overhead of the node-based standard containers.\n");
        out.push('\n');
        out.push_str("   --simple\tprint node sizes as 'alignment=base-node-size' (default)\n");
        out.push_str("   --verbose\tprint node sizes as sentences\n");
        out.push_str("   --code\tgenerate C++ declarations exposing the node sizes\n");
        out.push_str("   --json\tprint node sizes as JSON\n");
        out.push_str("   --help\tdisplay this help and exit\n");
        out.push_str("   --version\toutput version information and exit\n");
        out.push('\n');
        out.push_str("Options for code generation:\n");
        out.push_str("   -t\tsingle digit tab width, 0 indents with '\\t' (default 4)\n");
        out.push_str("   outputfile\twrite the generated code to this file instead of stdout\n");
        out.push('\n');
        out.push_str("Options for JSON output:\n");
        out.push_str("   --pretty\tpretty-print the JSON document\n");
        out.push('\n');
        out.push_str("The base node size excludes the storage of the value itself.\n");
        out.push_str("Add 'sizeof(value_type)' to the entry for its alignment to get the full node size.\n");
        out
    }

    pub fn version(&self) -> String {
        format!("{} version {}\n", self.name, VERSION)
    }

    /// Two-line report for usage errors, ending with a pointer to `--help`.
    pub fn usage_error(&self, err: &Error) -> String {
        format!("{}: {}\nTry '{} --help' for more information.\n", self.name, err, self.name)
    }
}
