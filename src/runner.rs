//! Resolving a run request and printing its history.

use std::io::{self, Write};

use log::debug;

use crate::engine::iterate;
use crate::error::UsageError;
use crate::generation::Generation;
use crate::patterns::{pattern, pattern_names};
use crate::render::RenderConfig;

pub const USAGE: &str = "Usage: sparse-life rpentomino 50";

/// Usage line followed by the catalog's pattern names.
pub fn usage() -> String {
    format!(
        "{USAGE}\nPatterns: {}",
        pattern_names().collect::<Vec<_>>().join(", ")
    )
}

/// Validates a pattern name and iteration count.
pub fn resolve(pattern_name: &str, iterations: &str) -> Result<(Generation, u64), UsageError> {
    let seed = pattern(pattern_name)
        .cloned()
        .ok_or_else(|| UsageError::UnknownPattern(pattern_name.to_owned()))?;
    let iterations = iterations
        .trim()
        .parse::<u64>()
        .map_err(|_| UsageError::InvalidIterations(iterations.to_owned()))?;
    Ok((seed, iterations))
}

/// Writes every generation of the run to `out`, each grid followed by a blank
/// line.
pub fn run<W: Write>(
    seed: Generation,
    iterations: u64,
    config: &RenderConfig,
    out: &mut W,
) -> io::Result<()> {
    let history = iterate(seed, iterations);
    debug!("rendering {} generations", history.len());
    for generation in &history {
        out.write_all(config.render(generation).as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{resolve, usage};
    use crate::error::UsageError;

    #[test]
    fn rejects_negative_and_garbage_counts() {
        for text in ["-1", "abc", "", "5x", "1.5"] {
            assert_eq!(
                resolve("square", text),
                Err(UsageError::InvalidIterations(text.to_owned()))
            );
        }
    }

    #[test]
    fn unknown_pattern_is_reported_before_count() {
        assert_eq!(
            resolve("blinker", "nope"),
            Err(UsageError::UnknownPattern("blinker".to_owned()))
        );
    }

    #[test]
    fn usage_lists_patterns() {
        assert_eq!(
            usage(),
            "Usage: sparse-life rpentomino 50\nPatterns: rpentomino, glider, square"
        );
    }
}
