//! # Project Module
//!
//! Classifies the project by marker files at the workspace root.

use std::path::Path;

/// Marker files in priority order; the first hit wins.
const MARKERS: &[(&str, &str)] = &[
    ("Cargo.toml", "rs"),
    ("go.mod", "go"),
    ("package.json", "js"),
    ("pyproject.toml", "py"),
    ("Gemfile", "rb"),
    ("pom.xml", "java"),
    ("mix.exs", "ex"),
    ("CMakeLists.txt", "c"),
];

pub fn classify(dir: &Path) -> Option<&'static str> {
    MARKERS
        .iter()
        .find(|(marker, _)| dir.join(marker).is_file())
        .map(|(_, tag)| *tag)
}

/// Short project name: the directory's final component.
pub fn project_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string_lossy().into_owned())
}
