use std::{fs, path::Path};

use anyhow::Context as _;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::ShadergenResult;

/// Extensions picked up by [`annotate_tree`].
pub const ANNOTATED_EXTENSIONS: [&str; 3] = ["h", "hlsl", "glsl"];

const ANNOTATION_PREFIX: &str = "/// File: ";

fn annotation_line(path: &Path) -> String {
    let basename = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    format!("{ANNOTATION_PREFIX}{basename}")
}

/// Prepend the provenance line `/// File: <basename>` to `path`.
///
/// Missing files are skipped rather than reported (the artifact may not have
/// been produced). Files whose first line already equals the expected
/// annotation are left untouched, so re-running a pass never doubles the
/// line. Returns `true` when the file was rewritten.
pub fn annotate_file(path: &Path) -> ShadergenResult<bool> {
    if !path.is_file() {
        return Ok(false);
    }

    let line = annotation_line(path);
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    if content.lines().next() == Some(line.as_str()) {
        debug!(path = %path.display(), "already annotated");
        return Ok(false);
    }

    fs::write(path, format!("{line}\n{content}"))
        .with_context(|| format!("failed to rewrite '{}'", path.display()))?;
    Ok(true)
}

/// Apply [`annotate_file`] to every header/shader/generated file under
/// `root`.
///
/// Standalone maintenance pass over a source tree; not part of the
/// generation run. Returns the number of files rewritten.
pub fn annotate_tree(root: &Path) -> ShadergenResult<usize> {
    let mut annotated = 0;
    for entry in WalkDir::new(root).contents_first(true) {
        let entry = entry.with_context(|| format!("failed to walk '{}'", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ANNOTATED_EXTENSIONS.contains(&ext));
        if !matches {
            continue;
        }
        if annotate_file(entry.path())? {
            annotated += 1;
        }
    }
    Ok(annotated)
}
