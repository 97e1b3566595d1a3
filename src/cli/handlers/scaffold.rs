use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;

use crate::cli::ui;
use crate::config::DashgenConfig;
use crate::core::hash::{compute_string_hash, short_hash};
use crate::core::{manifest, ScaffoldEmitter, WriteOutcome};
use crate::error::Result;

/// Handle scaffold generation (the default command).
///
/// One linear pass: directory skeleton in manifest order, then every file in
/// manifest order. The first I/O failure propagates and aborts the run.
pub fn handle_generate(config: &DashgenConfig, root: &Path, verbose: bool) -> Result<()> {
    let emitter = ScaffoldEmitter::new(root);

    ui::print_generate_header(root);

    let spinner = (config.ui.progress_bars && !verbose)
        .then(|| ui::create_progress_bar("Creating directory skeleton"));
    for dir in manifest::DIRECTORIES {
        emitter.ensure_dir_tree(dir)?;
        if verbose {
            println!("  📁 {}", dir.dimmed());
        }
    }
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    ui::print_info("Directory structure created");
    println!();
    ui::print_info("Generating files...");

    for spec in manifest::FILES {
        // Previous content is only needed for the verbose diff.
        let previous = if verbose {
            fs::read_to_string(emitter.root().join(spec.path)).ok()
        } else {
            None
        };

        let outcome = emitter.write_file(&spec)?;
        ui::print_success(&format!("{} ({})", spec.path, outcome.label()));

        if outcome == WriteOutcome::Updated {
            if let Some(old) = previous {
                ui::print_overwrite_diff(spec.path, &old, spec.contents);
            }
        }
    }

    println!();
    ui::print_success("Generated core files");
    ui::print_next_steps();

    Ok(())
}

/// Handle the plan command: list the manifest without writing anything
pub fn handle_plan(root: &Path) -> Result<()> {
    println!(
        "{} scaffold plan for {}",
        "dashgen".magenta(),
        root.display().to_string().cyan()
    );
    println!();

    println!("{} ({} entries)", "Directories".blue(), manifest::DIRECTORIES.len());
    for dir in manifest::DIRECTORIES {
        println!("  📁 {}", dir);
    }

    println!();
    println!("{} ({} entries)", "Files".blue(), manifest::FILES.len());
    for spec in manifest::FILES {
        println!(
            "  📝 {}  {} bytes  {}",
            spec.path,
            spec.contents.len(),
            short_hash(&compute_string_hash(spec.contents)).dimmed()
        );
    }

    Ok(())
}

/// Handle banner display
pub fn handle_banner(config: &DashgenConfig) -> Result<()> {
    ui::print_ascii_banner(config.ui.animations);
    Ok(())
}
