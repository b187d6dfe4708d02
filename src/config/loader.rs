//! Content loader
//!
//! This module implements the data loading pipeline:
//! 1. Candidate resolution (literal path, then `contents/`-prefixed path)
//! 2. Raw read with UTF-8 BOM stripping
//! 3. Front matter extraction (when the file opens with a `---` fence)
//! 4. YAML parsing
//! 5. Record list lookup (top-level list, component key, or `items`)
//!
//! Loading never fails outward. Any failure becomes a single [`LoadWarning`]
//! and an empty record list, so a bad data file cannot abort a page build.

use crate::config::settings::Settings;
use crate::error::LoadError;

use serde_yaml::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// ============================================================================
// Public API
// ============================================================================

/// Result of loading a data file.
#[derive(Debug, Default)]
pub struct LoadResult {
    /// Candidate path that was read, if any.
    pub source: Option<PathBuf>,

    /// Raw record mappings in source order.
    pub records: Vec<Value>,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during data loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location where the warning occurred.
    pub location: Option<String>,
}

impl LoadWarning {
    fn from_error(err: &LoadError, location: &Path) -> Self {
        Self {
            message: err.to_string(),
            location: Some(location.display().to_string()),
        }
    }
}

/// Content loader.
///
/// Resolves data paths against the configured content directory and parses
/// the record list out of YAML or front matter.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    content_dir: PathBuf,
}

impl ContentLoader {
    /// Creates a loader for the given settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            content_dir: settings.content_dir.clone(),
        }
    }

    /// Candidate paths for a requested path, in the order they are tried.
    ///
    /// Absolute paths and paths already under the content directory have a
    /// single candidate.
    #[must_use]
    pub fn candidates(&self, path: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![path.to_path_buf()];
        if !path.is_absolute() && !path.starts_with(&self.content_dir) {
            candidates.push(self.content_dir.join(path));
        }
        candidates
    }

    /// Loads the record list from `path`.
    ///
    /// `key` names the component and is used when the document is a mapping
    /// rather than a bare list.
    #[must_use]
    pub fn load(&self, path: &Path, key: &str) -> LoadResult {
        match self.try_load(path, key) {
            Ok((source, records)) => {
                tracing::debug!(
                    path = %source.display(),
                    records = records.len(),
                    "loaded data file"
                );
                LoadResult {
                    source: Some(source),
                    records,
                    warnings: Vec::new(),
                }
            }
            Err(err) => LoadResult {
                source: None,
                records: Vec::new(),
                warnings: vec![LoadWarning::from_error(&err, path)],
            },
        }
    }

    /// Resolves the first readable candidate and returns its path and text.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotFound` if no candidate exists, or
    /// `LoadError::Read` if a candidate exists but cannot be read.
    pub fn resolve(&self, path: &Path) -> Result<(PathBuf, String), LoadError> {
        let candidates = self.candidates(path);
        let mut first_failure = None;

        for candidate in &candidates {
            match std::fs::read_to_string(candidate) {
                Ok(text) => {
                    tracing::debug!(path = %candidate.display(), "resolved data file");
                    return Ok((candidate.clone(), text));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    first_failure.get_or_insert(LoadError::Read {
                        path: candidate.clone(),
                        source: e,
                    });
                }
            }
        }

        Err(first_failure.unwrap_or(LoadError::NotFound { tried: candidates }))
    }

    fn try_load(&self, path: &Path, key: &str) -> Result<(PathBuf, Vec<Value>), LoadError> {
        let (source, raw) = self.resolve(path)?;
        let records = parse_records(&raw, key, &source)?;
        Ok((source, records))
    }
}

/// Parses the record list out of raw file text.
///
/// `source` is only used for error reporting.
///
/// # Errors
///
/// Returns `LoadError::Parse` for malformed YAML, `LoadError::Empty` for an
/// empty document, and `LoadError::NoRecords` when no list is found.
pub fn parse_records(raw: &str, key: &str, source: &Path) -> Result<Vec<Value>, LoadError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    // Stage 3: front matter; the opening fence shifts parser lines by one
    let (yaml, line_offset) = extract_front_matter(raw).map_or((raw, 0), |block| (block, 1));

    // Stage 4: YAML parsing
    let root: Value = serde_yaml::from_str(yaml).map_err(|e| LoadError::Parse {
        path: source.to_path_buf(),
        line: e.location().map(|l| l.line() + line_offset),
        message: e.to_string(),
    })?;

    if root.is_null() {
        return Err(LoadError::Empty {
            path: source.to_path_buf(),
        });
    }

    // Stage 5: record list
    let Some(items) = record_list(root, key) else {
        return Err(LoadError::NoRecords {
            path: source.to_path_buf(),
            key: key.to_string(),
        });
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            if item.is_mapping() {
                Some(item)
            } else {
                tracing::debug!(index = i + 1, "skipping non-mapping record");
                None
            }
        })
        .collect())
}

// ============================================================================
// Parsing helpers
// ============================================================================

/// Returns the YAML between an opening `---` line and the next `---` or
/// `...` line.
///
/// Returns `None` when the text does not open with a fence or the fence is
/// never closed; in that case the whole text is treated as plain YAML.
#[must_use]
pub fn extract_front_matter(text: &str) -> Option<&str> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some(&text[start..offset]);
        }
        offset += line.len();
    }
    None
}

/// Finds the record list in a parsed document.
fn record_list(root: Value, key: &str) -> Option<Vec<Value>> {
    match root {
        Value::Sequence(items) => Some(items),
        Value::Mapping(mut map) => [key, "items"].into_iter().find_map(|k| {
            match map.remove(Value::String(k.to_string())) {
                Some(Value::Sequence(items)) => Some(items),
                _ => None,
            }
        }),
        Value::Tagged(tagged) => record_list(tagged.value, key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn loader_in(dir: &Path) -> ContentLoader {
        ContentLoader::new(&Settings::with_content_dir(dir.join("contents")))
    }

    #[test]
    fn test_candidates_relative() {
        let loader = ContentLoader::new(&Settings::with_content_dir("contents"));
        assert_eq!(
            loader.candidates(Path::new("data/trajectory.yml")),
            vec![
                PathBuf::from("data/trajectory.yml"),
                PathBuf::from("contents/data/trajectory.yml"),
            ]
        );
    }

    #[test]
    fn test_candidates_already_prefixed() {
        let loader = ContentLoader::new(&Settings::with_content_dir("contents"));
        assert_eq!(
            loader.candidates(Path::new("contents/data/trajectory.yml")),
            vec![PathBuf::from("contents/data/trajectory.yml")]
        );
    }

    #[test]
    fn test_candidates_absolute() {
        let loader = ContentLoader::new(&Settings::with_content_dir("contents"));
        let abs = std::env::temp_dir().join("research.yml");
        assert_eq!(loader.candidates(&abs), vec![abs.clone()]);
    }

    #[test]
    fn test_front_matter_extracted() {
        let text = "---\n- label: A\n---\n# Body\n";
        assert_eq!(extract_front_matter(text), Some("- label: A\n"));
    }

    #[test]
    fn test_front_matter_dot_terminator() {
        let text = "---\nitems: []\n...\n";
        assert_eq!(extract_front_matter(text), Some("items: []\n"));
    }

    #[test]
    fn test_front_matter_absent_or_unclosed() {
        assert_eq!(extract_front_matter("- label: A\n"), None);
        assert_eq!(extract_front_matter("---\n- label: A\n"), None);
    }

    #[test]
    fn test_load_falls_back_to_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("contents/data")).unwrap();
        fs::write(
            dir.path().join("contents/data/trajectory.yml"),
            "- label: A\n- label: B\n",
        )
        .unwrap();

        let result = loader_in(dir.path()).load(Path::new("data/trajectory.yml"), "trajectory");
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(result.records.len(), 2);
        assert_eq!(
            result.source,
            Some(dir.path().join("contents/data/trajectory.yml"))
        );
    }

    #[test]
    fn test_load_prefers_literal_path() {
        let dir = tempfile::tempdir().unwrap();
        let literal = dir.path().join("research.yml");
        fs::write(&literal, "- title: Literal\n").unwrap();

        let result = loader_in(dir.path()).load(&literal, "research");
        assert_eq!(result.source, Some(literal));
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_load_missing_file_single_warning() {
        let dir = tempfile::tempdir().unwrap();
        let result = loader_in(dir.path()).load(Path::new("data/missing.yml"), "trajectory");
        assert!(result.records.is_empty());
        assert!(result.source.is_none());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("not found"));
    }

    #[test]
    fn test_load_malformed_yaml_single_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "- label: [unclosed\n").unwrap();

        let result = loader_in(dir.path()).load(&path, "trajectory");
        assert!(result.records.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("parse error"));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yml");
        fs::write(&path, "").unwrap();

        let result = loader_in(dir.path()).load(&path, "trajectory");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("empty"));
    }

    #[test]
    fn test_load_mapping_with_component_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yml");
        fs::write(&path, "title: Site\nresearch:\n  - title: One\n  - title: Two\n").unwrap();

        let result = loader_in(dir.path()).load(&path, "research");
        assert!(result.warnings.is_empty());
        assert_eq!(result.records.len(), 2);
    }

    #[test]
    fn test_load_mapping_with_items_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yml");
        fs::write(&path, "items:\n  - label: One\n").unwrap();

        let result = loader_in(dir.path()).load(&path, "trajectory");
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_load_mapping_without_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yml");
        fs::write(&path, "title: Site\n").unwrap();

        let result = loader_in(dir.path()).load(&path, "trajectory");
        assert!(result.records.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("no list of records"));
    }

    #[test]
    fn test_load_front_matter_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectory.md");
        fs::write(
            &path,
            "\u{feff}---\ntrajectory:\n  - label: A\n---\n\nSome *prose* here.\n",
        )
        .unwrap();

        let result = loader_in(dir.path()).load(&path, "trajectory");
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_parse_error_line_is_file_line() {
        let plain = parse_records("title: Site\nresearch: a: b\n", "research", Path::new("a.yml"));
        assert!(
            matches!(plain, Err(LoadError::Parse { line: Some(2), .. })),
            "{plain:?}"
        );

        let fenced = parse_records(
            "---\ntitle: Site\nresearch: a: b\n---\n\nBody\n",
            "research",
            Path::new("a.md"),
        );
        assert!(
            matches!(fenced, Err(LoadError::Parse { line: Some(3), .. })),
            "{fenced:?}"
        );
    }

    #[test]
    fn test_load_skips_non_mapping_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.yml");
        fs::write(&path, "- label: A\n- just text\n- 42\n- label: B\n").unwrap();

        let result = loader_in(dir.path()).load(&path, "trajectory");
        assert!(result.warnings.is_empty());
        assert_eq!(result.records.len(), 2);
    }
}
