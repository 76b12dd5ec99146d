use std::env;
use std::time::Duration;

use crate::severity::Decoration;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorArg {
    Symbolic,
    Plain,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelsArg {
    Auto,
    Short,
    Long,
}

#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Component decoration: symbolic|plain
    #[arg(long, value_enum, default_value_t = DecorArg::Symbolic, env = "PACELINE_DECOR")]
    pub decor: DecorArg,

    /// Label verbosity: auto|short|long (auto follows terminal width)
    #[arg(long, value_enum, default_value_t = LabelsArg::Auto, env = "PACELINE_LABELS")]
    pub labels: LabelsArg,

    /// Timeout in seconds for git queries
    #[arg(long, default_value_t = 1, env = "PACELINE_VCS_TIMEOUT")]
    pub vcs_timeout: u64,

    /// Debug mode: calculation details on stderr
    #[arg(long, env = "PACELINE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}

/// Configuration resolved once at startup and handed into the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub decoration: Decoration,
    pub long_labels: bool,
    pub vcs_timeout: Duration,
    pub debug: bool,
}

/// Terminals narrower than this get short labels under `--labels auto`.
const WIDE_TERMINAL_COLS: u16 = 100;

impl RenderConfig {
    pub fn resolve(args: &Args) -> Self {
        // NO_COLOR always wins over the decoration flag
        let decoration = if env::var_os("NO_COLOR").is_some() {
            Decoration::Plain
        } else {
            match args.decor {
                DecorArg::Symbolic => Decoration::Symbolic,
                DecorArg::Plain => Decoration::Plain,
            }
        };

        let long_labels = match args.labels {
            LabelsArg::Short => false,
            LabelsArg::Long => true,
            LabelsArg::Auto => terminal_size::terminal_size()
                .map(|(terminal_size::Width(w), _)| w >= WIDE_TERMINAL_COLS)
                .unwrap_or(false),
        };

        RenderConfig {
            decoration,
            long_labels,
            vcs_timeout: Duration::from_secs(args.vcs_timeout.max(1)),
            debug: args.debug,
        }
    }
}
