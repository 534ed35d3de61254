//! Parameter file loading.
//!
//! ERT writes the sampled parameters of a realization to `parameters.txt`,
//! one `key value` pair per line:
//!
//! ```text
//! GLOBVAR:INTERP_WO 0.3412
//! GLOBVAR:INTERP_GO -0.5
//! LOG10_GLOBVAR:PERMX 2.1
//! ```
//!
//! Lines are split into words the way a POSIX shell does, so quoted keys or
//! values may contain whitespace. Blank lines are ignored. Any other line
//! must produce exactly two words.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

/// Raw parameter values keyed by name, in file order.
pub type ParameterTable = IndexMap<String, String>;

/// Errors that can occur while loading a parameter file.
#[derive(Debug, Error)]
pub enum ParameterFileError {
    /// The parameter file does not exist.
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The parameter file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be interpreted as a `key value` pair.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Reads and parses the parameter file at `path`.
pub fn load_parameters_file(path: &Path) -> Result<ParameterTable, ParameterFileError> {
    if !path.exists() {
        return Err(ParameterFileError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| ParameterFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_parameters(&text)
}

/// Parses `key value` lines into a [`ParameterTable`].
///
/// A repeated key replaces the earlier value.
pub fn parse_parameters(text: &str) -> Result<ParameterTable, ParameterFileError> {
    let mut table = ParameterTable::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let words = split_words(raw).map_err(|message| ParameterFileError::Syntax {
            line,
            message: message.to_string(),
        })?;
        match <[String; 2]>::try_from(words) {
            Ok([key, value]) => {
                table.insert(key, value);
            }
            Err(words) if words.is_empty() => {}
            Err(words) => {
                return Err(ParameterFileError::Syntax {
                    line,
                    message: format!("expected `key value`, found {} words", words.len()),
                });
            }
        }
    }
    Ok(table)
}

#[derive(Clone, Copy, PartialEq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Shell-style word splitting of a single line.
fn split_words(line: &str) -> Result<Vec<String>, &'static str> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => match c {
                '\'' => quote = Quote::None,
                _ => current.push(c),
            },
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.next() {
                    Some(escaped @ ('"' | '\\')) => current.push(escaped),
                    Some(other) => {
                        current.push('\\');
                        current.push(other);
                    }
                    None => return Err("unterminated double quote"),
                },
                _ => current.push(c),
            },
            Quote::None => match c {
                '\'' => {
                    quote = Quote::Single;
                    in_word = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_word = true;
                }
                '\\' => {
                    in_word = true;
                    match chars.next() {
                        Some(escaped) => current.push(escaped),
                        None => return Err("trailing escape character"),
                    }
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    match quote {
        Quote::Single => Err("unterminated single quote"),
        Quote::Double => Err("unterminated double quote"),
        Quote::None => {
            if in_word {
                words.push(current);
            }
            Ok(words)
        }
    }
}
