//! Logical asset path splitting.
//!
//! Asset names in a manifest double as relative output paths. Both `/` and
//! `\` act as separators so manifests written on Windows and Unix build the
//! same tree.

/// Split a logical asset name into its path segments.
///
/// Empty and whitespace-only segments are dropped; kept segments keep their
/// exact text. Never fails.
pub fn split_segments(name: &str) -> Vec<&str> {
    name.split(['/', '\\'])
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}
