//! Reading CIDR blocks from files and stdin.

use crate::config::Config;
use crate::models::{AddressError, NetworkBlock};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// An invalid block, with where it was read from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source_name}:{line}: {error}")]
pub struct LineError {
    pub source_name: String,
    pub line: usize,
    #[source]
    pub error: AddressError,
}

/// Strip a `#` comment and surrounding whitespace. `None` for blank lines.
pub fn strip_comment(line: &str) -> Option<&str> {
    let content = line.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

/// Parse every non-blank, non-comment line into a block.
///
/// With `skip_invalid` bad lines are logged and skipped; otherwise the first
/// bad line is returned as an error.
pub fn parse_lines<I, S>(
    source_name: &str,
    lines: I,
    skip_invalid: bool,
) -> Result<Vec<NetworkBlock>, LineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut blocks = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
        let Some(token) = strip_comment(line.as_ref()) else {
            continue;
        };
        match NetworkBlock::parse(token) {
            Ok(block) => blocks.push(block),
            Err(error) => {
                let error = LineError {
                    source_name: source_name.to_string(),
                    line: i + 1,
                    error,
                };
                if !skip_invalid {
                    return Err(error);
                }
                log::warn!("Skipping {error}");
            }
        }
    }
    Ok(blocks)
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, io::Error> {
    reader.lines().collect()
}

/// Read blocks from one source; `-` is stdin.
pub fn read_source(path: &Path, skip_invalid: bool) -> Result<Vec<NetworkBlock>, Box<dyn Error>> {
    let source_name = path.display().to_string();
    let lines = if source_name == "-" {
        log::info!("Reading from stdin");
        read_lines(io::stdin().lock())?
    } else {
        let file = File::open(path)
            .map_err(|e| format!("Error opening input file {source_name}: {e}"))?;
        log::info!("Reading from file: {source_name}");
        read_lines(BufReader::new(file))
            .map_err(|e| format!("Error reading input file {source_name}: {e}"))?
    };

    let blocks = parse_lines(&source_name, lines, skip_invalid)?;
    log::debug!("{source_name}: {} block(s)", blocks.len());
    Ok(blocks)
}

/// Read blocks from every input in command-line order.
pub fn read_blocks(config: &Config) -> Result<Vec<NetworkBlock>, Box<dyn Error>> {
    let mut blocks = Vec::new();
    for path in &config.inputs {
        blocks.extend(read_source(path, config.skip_invalid)?);
    }
    log::info!(
        "Read {} block(s) from {} input(s)",
        blocks.len(),
        config.inputs.len()
    );
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("10.0.0.0/8 # private"), Some("10.0.0.0/8"));
        assert_eq!(strip_comment("# only a comment"), None);
        assert_eq!(strip_comment("   \t"), None);
        assert_eq!(strip_comment(""), None);
        assert_eq!(strip_comment("  ::1  "), Some("::1"));
    }

    #[test]
    fn test_parse_lines() {
        let lines = ["# header", "", "10.0.0.0/24", "  ::1 # loopback", "192.168.1.1"];
        let blocks = parse_lines("test", lines, false).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].to_string(), "::1/128");
    }

    #[test]
    fn test_parse_lines_error_location() {
        let lines = ["10.0.0.0/24", "", "10.0.0.1/24"];
        let err = parse_lines("blocks.txt", lines, false).unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.source_name, "blocks.txt");
        assert!(matches!(
            err.error,
            AddressError::InvalidNetworkAddress { prefix: 24, .. }
        ));
        assert!(err.to_string().starts_with("blocks.txt:3: "));
    }

    #[test]
    fn test_parse_lines_skip_invalid() {
        let lines = ["10.0.0.0/24", "bogus", "10.0.0.0/40", "10.0.1.0/24"];
        let blocks = parse_lines("test", lines, true).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_read_source() {
        let blocks = read_source(Path::new("src/tests/test_data/blocks_01.txt"), false)
            .expect("Error reading test data");
        assert_eq!(blocks.len(), 8);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("src/tests/test_data/missing.txt"), false).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_blocks_multiple() {
        let config = Config::for_inputs(vec![
            PathBuf::from("src/tests/test_data/blocks_01.txt"),
            PathBuf::from("src/tests/test_data/blocks_02.txt"),
        ]);
        let blocks = read_blocks(&config).expect("Error reading test data");
        assert_eq!(blocks.len(), 8 + 7);
    }
}
