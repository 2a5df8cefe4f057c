//! In-place rewriting of generated documents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ansicolor_core::{Error, Result, TargetSettings};
use ansicolor_translator::{count_sequences, translate};

/// Result of processing a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back (or would be, in dry-run mode)
    Rewritten {
        /// Number of escape sequences replaced
        sequences: usize,
    },
    /// Translation produced identical text; file left alone
    Unchanged,
}

/// Summary of one run over an output directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteReport {
    /// Number of documents discovered
    pub scanned: usize,
    /// Documents whose content changed
    pub rewritten: Vec<PathBuf>,
    /// Number of documents left as they were
    pub unchanged: usize,
    /// Total escape sequences replaced across all documents
    pub sequences: usize,
    /// Whether files were left untouched on disk
    pub dry_run: bool,
}

impl RewriteReport {
    /// Record the outcome for one document.
    pub fn record(&mut self, path: &Path, outcome: FileOutcome) {
        self.scanned += 1;
        match outcome {
            FileOutcome::Rewritten { sequences } => {
                self.rewritten.push(path.to_path_buf());
                self.sequences += sequences;
            }
            FileOutcome::Unchanged => self.unchanged += 1,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Finds documents of one extension and rewrites their escape sequences.
#[derive(Debug, Clone)]
pub struct DocumentRewriter {
    settings: TargetSettings,
}

impl DocumentRewriter {
    /// Create a new rewriter.
    pub fn new(settings: TargetSettings) -> Self {
        Self { settings }
    }

    /// Get the target settings.
    pub fn settings(&self) -> &TargetSettings {
        &self.settings
    }

    /// List documents under `output_dir` with the configured extension.
    ///
    /// Only direct children are returned unless `recursive` is set. Hidden
    /// files and directories are skipped. The result is sorted by path.
    pub fn discover(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        if !output_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("output directory not found: {}", output_dir.display()),
            )
            .into());
        }

        let dir = output_dir.to_str().ok_or_else(|| {
            Error::InvalidInput(format!(
                "output directory is not valid UTF-8: {}",
                output_dir.display()
            ))
        })?;
        let pattern = self.pattern(dir);
        debug!("Discovering documents: pattern={}", pattern);

        let options = glob::MatchOptions {
            require_literal_leading_dot: true,
            ..glob::MatchOptions::new()
        };
        let entries = glob::glob_with(&pattern, options)
            .map_err(|e| Error::Config(format!("invalid document pattern '{pattern}': {e}")))?;

        let mut documents = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::Io(e.into()))?;
            if path.is_file() {
                documents.push(path);
            }
        }

        documents.sort();
        Ok(documents)
    }

    /// Glob pattern matching the documents under `dir`.
    fn pattern(&self, dir: &str) -> String {
        let dir = glob::Pattern::escape(dir);
        let extension = glob::Pattern::escape(&self.settings.extension);
        if self.settings.recursive {
            format!("{dir}/**/*.{extension}")
        } else {
            format!("{dir}/*.{extension}")
        }
    }

    /// Translate one document and write it back if its content changed.
    ///
    /// Errors carry the document path. A document that fails to translate
    /// is never written.
    pub fn rewrite_file(&self, path: &Path) -> Result<FileOutcome> {
        self.try_rewrite_file(path).map_err(|e| e.in_document(path))
    }

    fn try_rewrite_file(&self, path: &Path) -> Result<FileOutcome> {
        let original = fs::read_to_string(path)?;
        let translated = translate(&original)?;

        if translated == original {
            debug!("Unchanged: {}", path.display());
            return Ok(FileOutcome::Unchanged);
        }

        let sequences = count_sequences(&original);
        if self.settings.dry_run {
            info!(
                "Would rewrite {} ({} escape sequences)",
                path.display(),
                sequences
            );
        } else {
            fs::write(path, translated)?;
            debug!(
                "Rewrote {} ({} escape sequences)",
                path.display(),
                sequences
            );
        }

        Ok(FileOutcome::Rewritten { sequences })
    }

    /// Discover and rewrite every document under `output_dir`.
    ///
    /// Documents are processed in path order. The first failure stops the
    /// run; documents already rewritten stay rewritten.
    pub fn rewrite_dir(&self, output_dir: &Path) -> Result<RewriteReport> {
        let documents = self.discover(output_dir)?;
        let mut report = RewriteReport {
            dry_run: self.settings.dry_run,
            ..Default::default()
        };

        for path in &documents {
            let outcome = self.rewrite_file(path)?;
            report.record(path, outcome);
        }

        info!(
            "Processed {} documents in {}: {} rewritten, {} unchanged",
            report.scanned,
            output_dir.display(),
            report.rewritten.len(),
            report.unchanged
        );

        Ok(report)
    }
}

impl Default for DocumentRewriter {
    fn default() -> Self {
        Self::new(TargetSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_report_record() {
        let mut report = RewriteReport::default();
        report.record(Path::new("a.html"), FileOutcome::Rewritten { sequences: 3 });
        report.record(Path::new("b.html"), FileOutcome::Unchanged);

        assert_eq!(report.scanned, 2);
        assert_eq!(report.rewritten, vec![PathBuf::from("a.html")]);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.sequences, 3);
    }

    #[test]
    fn test_report_json() {
        let mut report = RewriteReport::default();
        report.record(Path::new("index.html"), FileOutcome::Rewritten { sequences: 2 });

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scanned"], 1);
        assert_eq!(value["rewritten"][0], "index.html");
        assert_eq!(value["sequences"], 2);
        assert_eq!(value["dry_run"], false);
    }

    #[test]
    fn test_discover_flat() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.html", "");
        write(dir.path(), "a.html", "");
        write(dir.path(), "notes.txt", "");
        write(dir.path(), "sub/deep.html", "");

        let rewriter = DocumentRewriter::default();
        let found = rewriter.discover(dir.path()).unwrap();

        assert_eq!(
            found,
            vec![dir.path().join("a.html"), dir.path().join("b.html")]
        );
    }

    #[test]
    fn test_discover_recursive() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.html", "");
        write(dir.path(), "sub/deep.html", "");
        write(dir.path(), "sub/style.css", "");

        let rewriter = DocumentRewriter::new(TargetSettings {
            recursive: true,
            ..Default::default()
        });
        let found = rewriter.discover(dir.path()).unwrap();

        assert_eq!(
            found,
            vec![dir.path().join("a.html"), dir.path().join("sub/deep.html")]
        );
    }

    #[test]
    fn test_discover_skips_hidden() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.html", "");
        write(dir.path(), ".buildinfo.html", "");
        write(dir.path(), ".doctrees/cached.html", "");

        let flat = DocumentRewriter::default().discover(dir.path()).unwrap();
        assert_eq!(flat, vec![dir.path().join("a.html")]);

        let rewriter = DocumentRewriter::new(TargetSettings {
            recursive: true,
            ..Default::default()
        });
        let deep = rewriter.discover(dir.path()).unwrap();
        assert_eq!(deep, vec![dir.path().join("a.html")]);
    }

    #[test]
    fn test_discover_custom_extension() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.html", "");
        write(dir.path(), "b.htm", "");

        let rewriter = DocumentRewriter::new(TargetSettings {
            extension: "htm".to_string(),
            ..Default::default()
        });
        let found = rewriter.discover(dir.path()).unwrap();

        assert_eq!(found, vec![dir.path().join("b.htm")]);
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let result = DocumentRewriter::default().discover(&missing);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_rewrite_file_changed() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "out.html", "<pre>\x1b[31mfail\x1b[0m</pre>");

        let outcome = DocumentRewriter::default().rewrite_file(&path).unwrap();

        assert_eq!(outcome, FileOutcome::Rewritten { sequences: 2 });
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<pre><span style=\"color: red\">fail</span></pre>"
        );
    }

    #[test]
    fn test_rewrite_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "plain.html", "<p>nothing here</p>");

        let outcome = DocumentRewriter::default().rewrite_file(&path).unwrap();

        assert_eq!(outcome, FileOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>nothing here</p>");
    }

    #[test]
    fn test_rewrite_file_dry_run() {
        let dir = TempDir::new().unwrap();
        let content = "\x1b[1mbold\x1b[0m";
        let path = write(dir.path(), "out.html", content);

        let rewriter = DocumentRewriter::new(TargetSettings {
            dry_run: true,
            ..Default::default()
        });
        let outcome = rewriter.rewrite_file(&path).unwrap();

        assert_eq!(outcome, FileOutcome::Rewritten { sequences: 2 });
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_rewrite_file_malformed() {
        let dir = TempDir::new().unwrap();
        let content = "\x1b[31mok\x1b[0m \x1b[abcm";
        let path = write(dir.path(), "bad.html", content);

        let err = DocumentRewriter::default().rewrite_file(&path).unwrap_err();

        assert!(err.is_malformed_sequence());
        assert!(matches!(err, Error::Document { ref path, .. } if path.ends_with("bad.html")));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_rewrite_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = DocumentRewriter::default()
            .rewrite_file(&dir.path().join("gone.html"))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Document { ref source, .. } if matches!(**source, Error::Io(_))
        ));
    }

    #[test]
    fn test_rewrite_file_not_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.html");
        let bytes = b"<p>caf\xe9 \x1b[31mred\x1b[0m</p>";
        fs::write(&path, bytes).unwrap();

        let err = DocumentRewriter::default().rewrite_file(&path).unwrap_err();

        assert!(matches!(
            err,
            Error::Document { ref source, .. }
                if matches!(**source, Error::Io(ref e) if e.kind() == io::ErrorKind::InvalidData)
        ));
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }
}
