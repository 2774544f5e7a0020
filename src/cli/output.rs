//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordforgeArgs};
use crate::error::Result;
use crate::resolver::ConflictReport;

/// Result structure for wordlist builds.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResult {
    pub language: String,
    pub words_written: usize,
    pub output_file: String,
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub records_rejected: usize,
    pub records_offered: usize,
    pub conflicts: usize,
    pub report: ConflictReport,
}

/// Result structure for wordlist checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub wordlist_file: String,
    pub words: usize,
    pub valid: bool,
    pub violation: Option<String>,
}

/// Result structure for word pair scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub word0: String,
    pub word1: String,
    pub score: f64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordforgeArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordforgeArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    // Convert to JSON value for uniform field traversal.
    let value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object() {
        for (field, field_value) in obj {
            match field_value {
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    // Nested structures (the conflict report) are only shown
                    // in verbose runs.
                    if args.verbosity() > 1 {
                        println!("{field}:");
                        println!("{}", serde_json::to_string_pretty(field_value)?);
                    }
                }
                other => {
                    if args.verbosity() > 0 {
                        println!("  {field}: {other}");
                    }
                }
            }
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordforgeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
