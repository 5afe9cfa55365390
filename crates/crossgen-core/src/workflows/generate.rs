use crate::core::io::layout::Layout;
use crate::core::models::grid::Grid;
use crate::core::models::placement::Placement;
use crate::engine::board::Board;
use crate::engine::config::{ConfigError, GenerationConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search::Searcher;
use crate::engine::state::SearchStats;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    /// The search of the kept attempt reached the end of its word list before the deadline.
    pub finished: bool,
    pub timed_out: bool,
    /// Distinct input words that do not appear on the grid, in input order.
    pub unplaced: Vec<String>,
    pub attempts: usize,
    pub seed: u64,
    pub stats: SearchStats,
}

impl GenerationResult {
    /// Every distinct input word was seated.
    pub fn is_complete(&self) -> bool {
        self.finished && self.unplaced.is_empty()
    }

    pub fn layout(&self) -> Layout {
        Layout::new(&self.grid, &self.placements, self.is_complete())
    }
}

struct AttemptOutcome {
    grid: Grid,
    placements: Vec<Placement>,
    finished: bool,
    timed_out: bool,
}

#[instrument(skip_all, name = "generation_workflow", fields(words = words.len()))]
pub fn run(
    words: &[String],
    config: &GenerationConfig,
    reporter: &ProgressReporter,
) -> Result<GenerationResult, EngineError> {
    // === Phase 0: Validation and preparation ===
    reporter.report(Progress::PhaseStart {
        name: "Preparing word list",
    });
    config.validate().map_err(|e| match e {
        ConfigError::InvalidParameter {
            name: "width" | "height",
            ..
        } => EngineError::InvalidDimensions {
            width: config.grid.width,
            height: config.grid.height,
        },
        other => other.into(),
    })?;

    let words = prepare_words(words);
    let distinct = distinct_in_order(&words);
    let seed = config.search.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(
        words = words.len(),
        distinct = distinct.len(),
        width = config.grid.width,
        height = config.grid.height,
        seed,
        "Starting layout generation."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Placement attempts ===
    reporter.report(Progress::PhaseStart {
        name: "Generating layout",
    });
    reporter.report(Progress::AttemptsStart {
        total: config.search.attempts as u64,
    });

    let mut best: Option<AttemptOutcome> = None;
    let mut stats = SearchStats::default();
    let mut attempts = 0;
    for attempt in 1..=config.search.attempts {
        attempts = attempt;
        let (outcome, attempt_stats) = run_attempt(&words, config, &mut rng);
        stats += attempt_stats;

        let placed = outcome.placements.len();
        debug!(
            attempt,
            placed,
            finished = outcome.finished,
            timed_out = outcome.timed_out,
            "Attempt finished."
        );
        if outcome.timed_out {
            reporter.report(Progress::Message(format!(
                "Attempt {attempt} reached the time limit with {placed} word(s) placed."
            )));
        }
        reporter.report(Progress::AttemptFinish {
            attempt,
            placed,
            total_words: distinct.len(),
        });

        let seated_everything = outcome.finished && placed == distinct.len();
        if best.as_ref().is_none_or(|b| placed > b.placements.len()) {
            best = Some(outcome);
        }
        if seated_everything {
            break;
        }
    }

    reporter.report(Progress::AttemptsFinish);
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Assemble the result ===
    let Some(best) = best else {
        return Err(EngineError::Internal(
            "no placement attempt was executed".to_string(),
        ));
    };

    let placed: HashSet<&str> = best.placements.iter().map(|p| p.word.as_str()).collect();
    let unplaced: Vec<String> = distinct
        .iter()
        .filter(|word| !placed.contains(word.as_str()))
        .cloned()
        .collect();

    if !unplaced.is_empty() {
        warn!(
            unplaced = unplaced.len(),
            "Some words could not be placed on the grid."
        );
    }
    info!(
        placed = best.placements.len(),
        letters = best.grid.letter_count(),
        attempts,
        nodes = stats.nodes,
        "Layout generation complete."
    );

    Ok(GenerationResult {
        grid: best.grid,
        placements: best.placements,
        finished: best.finished,
        timed_out: best.timed_out,
        unplaced,
        attempts,
        seed,
        stats,
    })
}

fn run_attempt(
    words: &[String],
    config: &GenerationConfig,
    rng: &mut StdRng,
) -> (AttemptOutcome, SearchStats) {
    let mut ordering = words.to_vec();
    if config.search.shuffle {
        ordering.shuffle(rng);
    }

    let mut board = Board::new(config.grid.width, config.grid.height);
    let mut searcher = Searcher::new(&mut board, rng, config.search.time_budget);
    let finished = searcher.generate(&ordering);
    let timed_out = searcher.timed_out();
    let stats = searcher.stats();

    let (grid, placements) = board.into_parts();
    (
        AttemptOutcome {
            grid,
            placements,
            finished,
            timed_out,
        },
        stats,
    )
}

fn prepare_words(words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter_map(|word| {
            let trimmed = word.trim();
            if trimmed.is_empty() {
                warn!("Ignoring blank entry in word list.");
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn distinct_in_order(words: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .filter(|word| seen.insert(word.as_str()))
        .cloned()
        .collect()
}
