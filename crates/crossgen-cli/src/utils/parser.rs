use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid grid size '{0}'. Expected 'WIDTHxHEIGHT' (e.g., '15x10').")]
    InvalidDimensions(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// Parses a `WIDTHxHEIGHT` size such as `15x10` (the separator is case-insensitive).
pub fn parse_dimensions(input: &str) -> Result<(usize, usize), ParseError> {
    let (width, height) = input
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| ParseError::InvalidDimensions(input.to_string()))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidDimensions(input.to_string()))
    };
    Ok((parse(width)?, parse(height)?))
}

pub fn parse_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(input.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            input: input.to_string(),
        });
    }
    Ok((key, value.trim()))
}
