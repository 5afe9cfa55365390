use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use crossgen::engine::config as core_config;
use std::str::FromStr;
use std::time::Duration;

pub fn build_config(args: &GenerateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let (size_width, size_height) = match &args.size {
        Some(size) => {
            let (w, h) =
                parser::parse_dimensions(size).map_err(|e| CliError::Argument(e.to_string()))?;
            (Some(w), Some(h))
        }
        None => (None, None),
    };

    let grid_file = file_config.grid.take().unwrap_or_default();
    let width = args
        .width
        .or(size_width)
        .or(grid_file.width)
        .unwrap_or(defaults.width);
    let height = args
        .height
        .or(size_height)
        .or(grid_file.height)
        .unwrap_or(defaults.height);

    let search_file = file_config.search.take().unwrap_or_default();
    let time_limit = args
        .time_limit
        .or(search_file.time_limit)
        .unwrap_or(defaults.time_limit_secs);
    let time_budget = Duration::try_from_secs_f64(time_limit).map_err(|_| {
        CliError::Config(format!(
            "Time limit must be a non-negative number of seconds, got {}",
            time_limit
        ))
    })?;
    let seed = args.seed.or(search_file.seed);
    let attempts = args
        .attempts
        .or(search_file.attempts)
        .unwrap_or(defaults.attempts);
    let shuffle = if args.no_shuffle {
        false
    } else {
        search_file.shuffle.unwrap_or(defaults.shuffle)
    };

    let core_config = core_config::GenerationConfigBuilder::new()
        .width(width)
        .height(height)
        .time_budget(time_budget)
        .seed(seed)
        .attempts(attempts)
        .shuffle(shuffle)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "grid.width" => {
                config.grid.get_or_insert_with(Default::default).width =
                    Some(parse_value(key, value, "integer")?);
            }
            "grid.height" => {
                config.grid.get_or_insert_with(Default::default).height =
                    Some(parse_value(key, value, "integer")?);
            }
            "search.time-limit" => {
                config.search.get_or_insert_with(Default::default).time_limit =
                    Some(parse_value(key, value, "float")?);
            }
            "search.seed" => {
                config.search.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value, "integer")?);
            }
            "search.attempts" => {
                config.search.get_or_insert_with(Default::default).attempts =
                    Some(parse_value(key, value, "integer")?);
            }
            "search.shuffle" => {
                config.search.get_or_insert_with(Default::default).shuffle =
                    Some(parse_value(key, value, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
