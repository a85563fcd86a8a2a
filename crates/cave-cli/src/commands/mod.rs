pub mod check;
pub mod play;

use std::path::Path;

use cave_core::Content;

/// Load the dataset at `path`, or the built-in cave when no path is given.
fn load_content(path: Option<&Path>) -> Result<Content, String> {
    match path {
        Some(path) => Content::load(path),
        None => Content::builtin(),
    }
    .map_err(|e| e.to_string())
}
