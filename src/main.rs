mod cli;
mod config;
mod format;
mod generate;
mod plan;
mod template;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::format::Formatter;
use crate::generate::Outcome;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Missing name is a user mistake, not a crash: message and a clean exit.
    let Some(name) = cli.name.as_deref().filter(|n| !n.is_empty()) else {
        eprintln!("missing component name; usage: mkcomp <ComponentName> [options]");
        return Ok(());
    };

    let discovered = config::discover()?;
    let (options, format) = config::resolve(&cli, discovered)?;
    let formatter = Formatter::new(format);
    let plan = plan::file_plan(name, &options);

    match generate::run(name, &options, &plan, &formatter)? {
        Outcome::Created => {}
        Outcome::AlreadyExists => {
            eprintln!(
                "component {name} already exists in {}; nothing written",
                options.target_dir.display()
            );
        }
    }

    Ok(())
}
