//! Duration validation errors

/// The entered duration is not a positive whole number of seconds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDurationInput {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    #[error("{0} is not a positive number of seconds")]
    NotPositive(i64),
}

/// Parse the text of the seconds field
pub fn parse_duration(input: &str) -> Result<u64, InvalidDurationInput> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InvalidDurationInput::NotAnInteger(trimmed.to_string()))?;

    if value <= 0 {
        return Err(InvalidDurationInput::NotPositive(value));
    }
    Ok(value as u64)
}
