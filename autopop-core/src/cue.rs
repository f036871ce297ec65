//! Cue sheet token extraction.
//!
//! Only the first line of a cue sheet is consulted. It is expected to look
//! like `FILE "Game (Disc 1).bin" BINARY`. This is deliberately not a cue
//! sheet parser: track layout, additional FILE lines and INDEX entries are
//! never read.
//!
//! Limitations:
//! - the leading `FILE`/`BINARY` word and a trailing `BINARY` word are the
//!   only tokens removed, and only as whole words;
//! - every quote character is dropped, so names containing `"` cannot be
//!   referenced;
//! - the reference must sit next to its cue sheet; paths are not followed.

use crate::config::BIN_EXTENSION;
use crate::error::CoreResult;

use log::{debug, info, warn};

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Words stripped from the front of the reference line.
const LEADING_TOKENS: [&str; 2] = ["FILE", "BINARY"];

/// File-type word stripped from the end of the reference line.
const TRAILING_TOKEN: &str = "BINARY";

/// A validated bin image named by a cue sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImageReference {
    /// Image file name as listed in the source directory
    pub file_name: String,
    /// File name without the `.bin` extension; names every derived artifact
    pub base_name: String,
}

/// Outcome of resolving a cue sheet's first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The reference is a bin image present in the source directory.
    Resolved(BinaryImageReference),
    /// The reference does not end in `.bin`.
    Unsupported(String),
    /// The reference is a bin image but no such file exists.
    Missing(String),
    /// The cue sheet itself could not be opened or read; holds the reason.
    Unreadable(String),
}

/// Extracts the referenced file name from a cue sheet line.
///
/// # Examples
///
/// ```
/// use autopop_core::cue::extract_reference_token;
///
/// assert_eq!(extract_reference_token("FILE \"game1.bin\" BINARY\r\n"), "game1.bin");
/// ```
pub fn extract_reference_token(line: &str) -> String {
    let mut rest = line.trim_start_matches('\u{feff}').trim();

    for token in LEADING_TOKENS {
        if let Some(stripped) = strip_leading_word(rest, token) {
            rest = stripped.trim_start();
            break;
        }
    }

    if let Some(stripped) = strip_trailing_word(rest, TRAILING_TOKEN) {
        rest = stripped.trim_end();
    }

    rest.replace('"', "").trim().to_string()
}

fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || c == '"'
}

fn strip_leading_word<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(word)?;
    match rest.chars().next() {
        Some(c) if is_word_boundary(c) => Some(rest),
        _ => None,
    }
}

fn strip_trailing_word<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let rest = s.strip_suffix(word)?;
    match rest.chars().next_back() {
        Some(c) if is_word_boundary(c) => Some(rest),
        _ => None,
    }
}

/// Returns the base name of `token` if it names a bin image.
///
/// The extension comparison ignores ASCII case; a bare `.bin` has no base
/// name and is rejected.
pub fn bin_base_name(token: &str) -> Option<&str> {
    let split_at = token.len().checked_sub(BIN_EXTENSION.len())?;
    if split_at == 0 || !token.is_char_boundary(split_at) {
        return None;
    }
    let (base, ext) = token.split_at(split_at);
    if ext.eq_ignore_ascii_case(BIN_EXTENSION) {
        Some(base)
    } else {
        None
    }
}

/// Reads the first line of a cue sheet; the file is closed before returning.
fn read_first_line(cue_path: &Path) -> CoreResult<String> {
    let mut reader = BufReader::new(File::open(cue_path)?);
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn dir_contains(dir: &Path, file_name: &str) -> CoreResult<bool> {
    for entry in fs::read_dir(dir)? {
        if entry?.file_name().to_str() == Some(file_name) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Resolves the bin image referenced by `cue_name` inside `source_dir`.
///
/// Unsupported, missing and unreadable references are returned as values so
/// the caller can skip the title. Failing to list the source directory is an
/// error.
pub fn resolve_binary_reference(cue_name: &str, source_dir: &Path) -> CoreResult<Resolution> {
    let cue_path = source_dir.join(cue_name);
    let line = match read_first_line(&cue_path) {
        Ok(line) => line,
        Err(e) => {
            warn!("Cannot read cue sheet {}: {}! ignoring...", cue_name, e);
            return Ok(Resolution::Unreadable(e.to_string()));
        }
    };
    debug!("First line of {}: {:?}", cue_name, line.trim_end());

    let token = extract_reference_token(&line);
    info!("Found {} in cue sheet", token);

    let Some(base_name) = bin_base_name(&token) else {
        warn!("Unsupported image file {} found! ignoring...", token);
        return Ok(Resolution::Unsupported(token));
    };

    if !dir_contains(source_dir, &token)? {
        warn!("Bin {} does not exist in {}! ignoring...", token, source_dir.display());
        return Ok(Resolution::Missing(token));
    }

    Ok(Resolution::Resolved(BinaryImageReference {
        base_name: base_name.trim().to_string(),
        file_name: token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_quoted_reference() {
        assert_eq!(extract_reference_token("FILE \"game1.bin\" BINARY"), "game1.bin");
    }

    #[test]
    fn keeps_spaces_inside_the_name() {
        assert_eq!(
            extract_reference_token("FILE \"Final Fantasy VII (Disc 1).bin\" BINARY\r\n"),
            "Final Fantasy VII (Disc 1).bin"
        );
    }

    #[test]
    fn extracts_unquoted_reference() {
        assert_eq!(extract_reference_token("FILE game.bin BINARY"), "game.bin");
        assert_eq!(extract_reference_token("BINARY game.bin"), "game.bin");
    }

    #[test]
    fn token_words_inside_names_survive() {
        assert_eq!(extract_reference_token("FILE \"PROFILE.bin\" BINARY"), "PROFILE.bin");
        assert_eq!(extract_reference_token("FILE BINARY.bin"), "BINARY.bin");
    }

    #[test]
    fn ignores_byte_order_mark() {
        assert_eq!(extract_reference_token("\u{feff}FILE \"a.bin\" BINARY"), "a.bin");
    }

    #[test]
    fn non_bin_reference_has_no_base_name() {
        let token = extract_reference_token("FILE \"game2.iso\" BINARY");
        assert_eq!(token, "game2.iso");
        assert_eq!(bin_base_name(&token), None);
    }

    #[test]
    fn base_name_strips_extension_ignoring_case() {
        assert_eq!(bin_base_name("game1.bin"), Some("game1"));
        assert_eq!(bin_base_name("GAME1.BIN"), Some("GAME1"));
        assert_eq!(bin_base_name(".bin"), None);
        assert_eq!(bin_base_name("bin"), None);
        assert_eq!(bin_base_name("game.bin.iso"), None);
    }
}
