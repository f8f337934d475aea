//! Input discovery.
//!
//! Turns the command-line inputs into the ordered list of source files to
//! parse, and derives the default document title.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use classdoc::config::ParserConfig;

/// Title used when none can be derived from the inputs.
pub const FALLBACK_TITLE: &str = "Documentation";

/// Expand `inputs` into source files.
///
/// A directory contributes its immediate files whose extension is accepted
/// by `parser`, sorted by path. Any other input is used as given.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn collect_sources<S: AsRef<str>>(
    inputs: &[S],
    parser: &ParserConfig,
) -> io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for input in inputs {
        let path = Path::new(input.as_ref());
        if !path.is_dir() {
            sources.push(path.to_path_buf());
            continue;
        }

        let mut files: Vec<_> = fs::read_dir(path)?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<io::Result<_>>()?;
        files.retain(|file| {
            file.is_file()
                && file
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| parser.accepts_extension(ext))
        });
        files.sort();

        if files.is_empty() {
            warn!(path = path.display().to_string(); "Input directory has no source files");
        }
        debug!(path = path.display().to_string(), files = files.len(); "Scanned input directory");
        sources.extend(files);
    }

    Ok(sources)
}

/// Default title: base name of the first input directory, or of the
/// directory containing the first input file.
pub fn default_title<S: AsRef<str>>(inputs: &[S]) -> String {
    inputs
        .first()
        .and_then(|input| {
            let path = Path::new(input.as_ref());
            let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
            let dir = if path.is_dir() {
                Some(path.as_path())
            } else {
                path.parent()
            };
            dir.and_then(Path::file_name)
                .map(|name| name.to_string_lossy().into_owned())
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}
