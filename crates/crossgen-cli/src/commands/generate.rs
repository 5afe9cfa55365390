use crate::cli::GenerateArgs;
use crate::config::builder::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crossgen::{
    core::io::word_list::read_word_list,
    engine::progress::ProgressReporter,
    workflows::{self, generate::GenerationResult},
};
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: GenerateArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app_config = build_config(&args)?;

    info!("Loading word list from {:?}", &app_config.input_path);
    let words =
        read_word_list(&app_config.input_path).map_err(|e| CliError::FileParsing {
            path: app_config.input_path.clone(),
            source: e.into(),
        })?;
    info!("Loaded {} word(s).", words.len());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let grid = &app_config.core_config.grid;
    println!(
        "Placing {} word(s) on a {}x{} grid...",
        words.len(),
        grid.width,
        grid.height
    );
    info!("Invoking the core generation workflow...");

    let result = workflows::generate::run(&words, &app_config.core_config, &reporter)?;

    let stdout = std::io::stdout();
    print_result(&result, &mut stdout.lock())?;

    if !result.is_complete() {
        warn!(
            "Layout is incomplete: {} word(s) could not be placed.",
            result.unplaced.len()
        );
        if result.timed_out {
            println!("Warning: the time limit was reached before every word was placed.");
        } else {
            println!("Warning: not every word could be placed on the grid.");
        }
    }

    if let Some(output_path) = &app_config.output_path {
        info!("Writing layout to {:?}", output_path);
        result.layout().write_json_to_path(output_path)?;
        println!("✓ Layout written to: {}", output_path.display());
    }

    Ok(())
}

fn print_result(result: &GenerationResult, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", result.grid)?;
    writeln!(out)?;
    for placement in &result.placements {
        writeln!(out, "{}", placement)?;
    }
    if !result.unplaced.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unplaced: {}", result.unplaced.join(", "))?;
    }
    writeln!(
        out,
        "\n{} of {} word(s) placed (seed {}, {} attempt(s)).",
        result.placements.len(),
        result.placements.len() + result.unplaced.len(),
        result.seed,
        result.attempts
    )
}
