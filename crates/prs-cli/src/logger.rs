//! Log output for the library crates.

use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Install the logger on stderr.
///
/// prs crates log at `warn` by default, `info` with `-v` and `debug` with
/// `-vv`; everything else stays at `warn`.
pub fn init(verbosity: u8) -> Result<()> {
    let level = level_for(verbosity);

    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level("prs_core", level)
        .with_module_level("prs_github", level)
        .init()?;

    Ok(())
}

const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Debug);
    }
}
