use std::path::PathBuf;

use clap::Parser;

/// mkcomp CLI entrypoint.
#[derive(Parser, Debug)]
#[command(name = "mkcomp", version, about = "Scaffold front-end component files")]
pub struct Cli {
    /// Component name, used verbatim as directory, file name, and identifier.
    pub name: Option<String>,

    /// Language variant: js or ts (case-insensitive).
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Parent directory for generated components.
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Generate a stylesheet module: true or false (case-insensitive).
    #[arg(short = 's', long = "scss-module", value_name = "BOOL")]
    pub scss_module: Option<String>,
}
