//! Ingestion coordinator
//!
//! Fans out one task per input file, tokenizes each file's bytes into
//! accepted words, and merges the per-file results in argument order. A file
//! that cannot be read fails only its own task; the run is still reported as
//! failed afterwards.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::config::RefineConfig;
use crate::error::RefineError;
use crate::finalize::finalize;
use crate::io;
use crate::progress::{create_files_progress_bar, print_error, RunStats};
use crate::tokenize::tokenize_file;

/// Per-file counters carried back from a successful task.
#[derive(Debug, Clone, Copy)]
pub struct FileStats {
    pub bytes: u64,
    pub lines: u64,
    pub candidates: u64,
    pub accepted: u64,
}

/// What happened to one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileStats, RefineError>,
}

/// The merged result of ingesting every input file.
///
/// `words` holds the accepted words of the files that could be read, in
/// file-argument order and within-file order. `outcomes` is index-aligned
/// with the input path list.
#[derive(Debug)]
pub struct IngestReport {
    pub words: Vec<Vec<u8>>,
    pub total_accepted: u64,
    pub outcomes: Vec<FileOutcome>,
}

impl IngestReport {
    pub fn failed_files(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Summary of a complete run, for the caller to report.
#[derive(Debug)]
pub struct RunSummary {
    /// Words accepted across all readable inputs, before dedup.
    pub total_accepted: u64,
    /// Words in the final written collection.
    pub written: u64,
    /// Inputs that could not be read.
    pub failed_files: Vec<PathBuf>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed_files.is_empty()
    }
}

/// The refinery: configuration plus shared run counters.
pub struct Refinery {
    config: RefineConfig,
    stats: Arc<RunStats>,
    quiet: bool,
}

impl Refinery {
    pub fn new(config: RefineConfig) -> Self {
        Self {
            config,
            stats: Arc::new(RunStats::new()),
            quiet: false,
        }
    }

    /// Suppress the progress bar (errors still go to stderr).
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn config(&self) -> &RefineConfig {
        &self.config
    }

    pub fn stats(&self) -> Arc<RunStats> {
        Arc::clone(&self.stats)
    }

    /// Ingest every input file, one parallel task per file.
    ///
    /// The merge is keyed by argument index, never by completion order, so
    /// the output collection is deterministic.
    pub fn ingest(&self, inputs: &[PathBuf]) -> IngestReport {
        let pb = if self.quiet {
            ProgressBar::hidden()
        } else {
            create_files_progress_bar(inputs.len() as u64, "Refining...")
        };

        let per_file: Vec<(Vec<Vec<u8>>, FileOutcome)> = inputs
            .par_iter()
            .map(|path| {
                let result = self.refine_file(path);
                pb.inc(1);
                result
            })
            .collect();

        pb.finish_and_clear();

        let mut words = Vec::new();
        let mut outcomes = Vec::with_capacity(per_file.len());
        let mut total_accepted = 0u64;

        for (file_words, outcome) in per_file {
            if let Ok(stats) = &outcome.result {
                total_accepted += stats.accepted;
            }
            words.extend(file_words);
            outcomes.push(outcome);
        }

        IngestReport {
            words,
            total_accepted,
            outcomes,
        }
    }

    fn refine_file(&self, path: &Path) -> (Vec<Vec<u8>>, FileOutcome) {
        let bytes = match io::read_whole_file(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.stats.record_failed_file();
                return (
                    Vec::new(),
                    FileOutcome {
                        path: path.to_path_buf(),
                        result: Err(e),
                    },
                );
            }
        };

        let mut iter = tokenize_file(&bytes, &self.config);
        let words: Vec<Vec<u8>> = iter.by_ref().collect();

        let stats = FileStats {
            bytes: bytes.len() as u64,
            lines: iter.lines(),
            candidates: iter.candidates(),
            accepted: words.len() as u64,
        };
        self.stats
            .record_file(stats.bytes, stats.lines, stats.candidates, stats.accepted);

        log::debug!(
            "{}: {} lines, {} candidates, {} accepted",
            path.display(),
            stats.lines,
            stats.candidates,
            stats.accepted
        );

        (
            words,
            FileOutcome {
                path: path.to_path_buf(),
                result: Ok(stats),
            },
        )
    }

    /// Ingest, finalize, and write. Read failures are reported per file and
    /// reflected in the summary; the surviving files' output is still
    /// written. Write failures abort.
    pub fn run(&self, inputs: &[PathBuf], output: &Path) -> Result<RunSummary, RefineError> {
        let report = self.ingest(inputs);

        for outcome in report.failed_files() {
            if let Err(e) = &outcome.result {
                print_error(&format!("{}", e));
            }
        }

        let words = finalize(report.words, &self.config);
        let written = io::write_lines(output, &words)?;

        Ok(RunSummary {
            total_accepted: report.total_accepted,
            written,
            failed_files: report
                .outcomes
                .iter()
                .filter(|o| o.result.is_err())
                .map(|o| o.path.clone())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_merge_preserves_argument_order() {
        let dir = TempDir::new().unwrap();
        let a = write_input(&dir, "a.txt", b"zeta\nyankee\n");
        let b = write_input(&dir, "b.txt", b"alpha\n");

        let refinery = Refinery::new(RefineConfig::default()).quiet(true);
        let report = refinery.ingest(&[a, b]);

        assert!(report.is_success());
        assert_eq!(
            report.words,
            vec![b"zeta".to_vec(), b"yankee".to_vec(), b"alpha".to_vec()]
        );
        assert_eq!(report.total_accepted, 3);
    }

    #[test]
    fn test_unreadable_file_keeps_siblings() {
        let dir = TempDir::new().unwrap();
        let good = write_input(&dir, "good.txt", b"word\n");
        let missing = dir.path().join("missing.txt");

        let refinery = Refinery::new(RefineConfig::default()).quiet(true);
        let report = refinery.ingest(&[good, missing.clone()]);

        assert!(!report.is_success());
        assert_eq!(report.words, vec![b"word".to_vec()]);
        assert_eq!(report.total_accepted, 1);
        assert_eq!(report.failed_files().count(), 1);
        assert_eq!(report.outcomes[1].path, missing);
        assert!(matches!(
            report.outcomes[1].result,
            Err(RefineError::Read { .. })
        ));
    }

    #[test]
    fn test_run_sort_dedup_across_files() {
        let dir = TempDir::new().unwrap();
        let a = write_input(&dir, "a.txt", b"aaa\n");
        let b = write_input(&dir, "b.txt", b"bbb\naaa\n");
        let out = dir.path().join("out.txt");

        let config = RefineConfig {
            sort: true,
            deduplicate: true,
            ..Default::default()
        };
        let refinery = Refinery::new(config).quiet(true);
        let summary = refinery.run(&[a, b], &out).unwrap();

        assert!(summary.is_success());
        assert_eq!(summary.total_accepted, 3);
        assert_eq!(summary.written, 2);
        assert_eq!(fs::read(&out).unwrap(), b"aaa\nbbb\n");
    }

    #[test]
    fn test_run_with_failed_file_still_writes_partial() {
        let dir = TempDir::new().unwrap();
        let good = write_input(&dir, "good.txt", b"word\n");
        let missing = dir.path().join("missing.txt");
        let out = dir.path().join("out.txt");

        let refinery = Refinery::new(RefineConfig::default()).quiet(true);
        let summary = refinery.run(&[good, missing.clone()], &out).unwrap();

        assert!(!summary.is_success());
        assert_eq!(summary.failed_files, vec![missing]);
        assert_eq!(summary.written, 1);
        assert_eq!(fs::read(&out).unwrap(), b"word\n");
    }

    #[test]
    fn test_run_accepted_at_least_written_under_dedup() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "in.txt", b"one\ntwo\none\nthree\ntwo\n");
        let out = dir.path().join("out.txt");

        let config = RefineConfig {
            deduplicate: true,
            ..Default::default()
        };
        let refinery = Refinery::new(config).quiet(true);
        let summary = refinery.run(&[input], &out).unwrap();

        assert!(summary.total_accepted >= summary.written);
        assert_eq!(summary.total_accepted, 5);
        assert_eq!(summary.written, 3);
    }

    #[test]
    fn test_run_write_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "in.txt", b"word\n");
        let bad_out = dir.path().join("no-such-dir").join("out.txt");

        let refinery = Refinery::new(RefineConfig::default()).quiet(true);
        let err = refinery.run(&[input], &bad_out).unwrap_err();
        assert!(matches!(err, RefineError::Write { .. }));
    }

    #[test]
    fn test_stats_counter_sums_per_file_counts() {
        let dir = TempDir::new().unwrap();
        let a = write_input(&dir, "a.txt", b"one two\n");
        let b = write_input(&dir, "b.txt", b"three four five\n");

        let config = RefineConfig {
            wordify: true,
            ..Default::default()
        };
        let refinery = Refinery::new(config).quiet(true);
        let stats = refinery.stats();
        let report = refinery.ingest(&[a, b]);

        assert_eq!(report.total_accepted, 5);
        assert_eq!(stats.get_accepted(), 5);
    }
}
