use metronome_model::{ConfigSource, Millis};

use crate::config::error::{ConfigError, ConfigResult};

/// Looks up `key` and parses it as milliseconds.
///
/// Blank values count as absent. Anything else must be plain ASCII digits that
/// fit in [`Millis`]; signs, separators and surrounding whitespace are rejected.
pub(crate) fn lookup_millis<S>(source: &S, key: &str) -> ConfigResult<Option<Millis>>
where
    S: ConfigSource + ?Sized,
{
    match source.get(key) {
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_millis(key, &raw).map(Some),
        None => Ok(None),
    }
}

pub(crate) fn parse_millis(key: &str, raw: &str) -> ConfigResult<Millis> {
    let invalid = || ConfigError::InvalidFormat {
        key: key.to_string(),
        value: raw.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<Millis>().map_err(|_| invalid())
}
