#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, Write};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use sparse_life::{resolve, run, usage, RenderConfig, ALIVE_GLYPH, DEAD_GLYPH};

/// Runs Conway's Game of Life from a named starting pattern and prints every
/// generation.
#[derive(Parser, Debug)]
#[command(name = "sparse-life", version, about)]
struct Cli {
    /// Starting pattern: rpentomino, glider or square.
    pattern: String,

    /// Number of generations to compute after the seed.
    iterations: String,

    /// Log more (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Glyph for alive cells.
    #[arg(long, default_value_t = ALIVE_GLYPH)]
    alive: char,

    /// Glyph for dead cells.
    #[arg(long, default_value_t = DEAD_GLYPH)]
    dead: char,
}

fn init_logging(verbose: u8) -> Result<()> {
    let logger = match verbose {
        0 => SimpleLogger::new().with_level(LevelFilter::Warn).env(),
        1 => SimpleLogger::new().with_level(LevelFilter::Info),
        2 => SimpleLogger::new().with_level(LevelFilter::Debug),
        _ => SimpleLogger::new().with_level(LevelFilter::Trace),
    };
    logger.init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("{}", usage());
            return Ok(());
        }
    };

    init_logging(cli.verbose)?;
    info!("Starting sparse-life v{} ...", env!("CARGO_PKG_VERSION"));

    let (seed, iterations) = match resolve(&cli.pattern, &cli.iterations) {
        Ok(request) => request,
        Err(err) => {
            warn!("{err}");
            println!("{}", usage());
            return Ok(());
        }
    };
    info!(
        "running {:?} for {iterations} iterations from {} cells",
        cli.pattern,
        seed.len()
    );

    let config = RenderConfig::default()
        .alive_glyph(cli.alive)
        .dead_glyph(cli.dead);
    let mut out = io::BufWriter::new(io::stdout().lock());
    run(seed, iterations, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positionals_and_flags() {
        let cli = Cli::try_parse_from(["sparse-life", "glider", "12", "-vv", "--alive", "#"])
            .expect("arguments should parse");
        assert_eq!(cli.pattern, "glider");
        assert_eq!(cli.iterations, "12");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.alive, '#');
        assert_eq!(cli.dead, '\u{25A2}');
    }

    #[test]
    fn missing_iterations_is_a_parse_error() {
        assert!(Cli::try_parse_from(["sparse-life", "glider"]).is_err());
    }
}
