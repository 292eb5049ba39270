use std::fs;

use anyhow::{Context, Result};

use crate::config::Options;
use crate::format::Formatter;
use crate::plan::FilePlan;
use crate::template;

/// Result of one scaffolding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    /// The component directory was already there; nothing was written.
    AlreadyExists,
}

/// Scaffold one component: an ordered sequence of fallible steps, each gated
/// on the previous. Failures mid-sequence leave earlier writes on disk.
pub fn run(
    name: &str,
    options: &Options,
    plan: &FilePlan,
    formatter: &Formatter,
) -> Result<Outcome> {
    if !options.target_dir.exists() {
        fs::create_dir_all(&options.target_dir)
            .with_context(|| format!("creating directory {}", options.target_dir.display()))?;
    }

    // Collision check must come before any write into the component dir.
    if plan.component_dir.exists() {
        return Ok(Outcome::AlreadyExists);
    }

    fs::create_dir(&plan.component_dir)
        .with_context(|| format!("creating directory {}", plan.component_dir.display()))?;
    println!("Created {}", plan.component_dir.display());

    let component = template::render_component(options.language, name, options.scss_module, formatter);
    fs::write(&plan.component_file, component)
        .with_context(|| format!("writing {}", plan.component_file.display()))?;
    println!("Built {}", plan.component_file.display());

    if options.scss_module {
        // The stylesheet starts empty on purpose; only the file is scaffolded.
        fs::write(&plan.stylesheet_file, "")
            .with_context(|| format!("writing {}", plan.stylesheet_file.display()))?;
        println!("Added {}", plan.stylesheet_file.display());
    }

    let index = template::render_index(name, formatter);
    fs::write(&plan.index_file, index)
        .with_context(|| format!("writing {}", plan.index_file.display()))?;
    println!("Wrote {}", plan.index_file.display());

    println!("Component {name} is ready");
    Ok(Outcome::Created)
}
