//! Console output and run statistics
//!
//! Styled terminal output plus the atomic counters shared by the parallel
//! ingestion tasks.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔════════════════════════════════════════════════════════════════════╗
║                                                                    ║
║   ██████╗ ███████╗███████╗██╗███╗   ██╗███████╗██████╗ ██╗   ██╗   ║
║   ██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝██╔══██╗╚██╗ ██╔╝   ║
║   ██████╔╝█████╗  █████╗  ██║██╔██╗ ██║█████╗  ██████╔╝ ╚████╔╝    ║
║   ██╔══██╗██╔══╝  ██╔══╝  ██║██║╚██╗██║██╔══╝  ██╔══██╗  ╚██╔╝     ║
║   ██║  ██║███████╗██║     ██║██║ ╚████║███████╗██║  ██║   ██║      ║
║   ╚═╝  ╚═╝╚══════╝╚═╝     ╚═╝╚═╝  ╚═══╝╚══════╝╚═╝  ╚═╝   ╚═╝      ║
║                                                                    ║
║                  Wordlist Normalization & Curation                 ║
║                      For Penetration Testing                       ║
║                                                     v0.1.0         ║
╚════════════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create the per-file progress bar for ingestion.
pub fn create_files_progress_bar(total_files: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_files);

    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} files {msg}",
            )
            .unwrap()
            .progress_chars("█▓░"),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters shared across the parallel file tasks.
///
/// Every field is atomic; tasks bump them with relaxed adds and the summary
/// reads them only after all tasks have joined.
#[derive(Debug)]
pub struct RunStats {
    pub files_total: AtomicU64,
    pub files_failed: AtomicU64,
    pub bytes_read: AtomicU64,
    pub lines: AtomicU64,
    pub candidates: AtomicU64,
    pub accepted: AtomicU64,
    pub start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            files_total: AtomicU64::new(0),
            files_failed: AtomicU64::new(0),
            bytes_read: AtomicU64::new(0),
            lines: AtomicU64::new(0),
            candidates: AtomicU64::new(0),
            accepted: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record one successfully processed file's contribution.
    pub fn record_file(&self, bytes: u64, lines: u64, candidates: u64, accepted: u64) {
        self.files_total.fetch_add(1, Ordering::Relaxed);
        self.bytes_read.fetch_add(bytes, Ordering::Relaxed);
        self.lines.fetch_add(lines, Ordering::Relaxed);
        self.candidates.fetch_add(candidates, Ordering::Relaxed);
        self.accepted.fetch_add(accepted, Ordering::Relaxed);
    }

    /// Record a file whose bytes could not be read.
    pub fn record_failed_file(&self) {
        self.files_total.fetch_add(1, Ordering::Relaxed);
        self.files_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    fn words_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.candidates.load(Ordering::Relaxed) as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print the final run summary.
    pub fn print_summary(&self, written: u64) {
        let files_total = self.files_total.load(Ordering::Relaxed);
        let files_failed = self.files_failed.load(Ordering::Relaxed);

        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                    REFINING COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!(
            "  {} {}",
            "Files processed:".green(),
            format!("{}/{}", files_total - files_failed, files_total)
        );
        println!(
            "  {} {}",
            "Data read:      ".green(),
            ByteSize(self.bytes_read.load(Ordering::Relaxed))
        );
        println!();

        println!(
            "  {} {}",
            "Lines scanned:  ".green(),
            format_number(self.lines.load(Ordering::Relaxed))
        );
        println!(
            "  {} {}",
            "Candidates:     ".green(),
            format_number(self.candidates.load(Ordering::Relaxed))
        );
        println!(
            "  {} {}",
            "Accepted words: ".green(),
            format_number(self.get_accepted())
        );
        println!(
            "  {} {}",
            "Written output: ".green().bold(),
            format_number(written).green().bold()
        );

        if files_failed > 0 {
            println!(
                "  {} {}",
                "Failed files:   ".red(),
                format_number(files_failed).red()
            );
        }

        println!();
        println!("  {} {:?}", "Duration:       ".green(), self.elapsed());
        println!(
            "  {} {:.2} words/sec",
            "Throughput:     ".green(),
            self.words_per_second()
        );
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_stats_accumulate() {
        let stats = RunStats::new();

        stats.record_file(100, 10, 12, 8);
        stats.record_file(50, 5, 5, 5);
        stats.record_failed_file();

        assert_eq!(stats.files_total.load(Ordering::Relaxed), 3);
        assert_eq!(stats.files_failed.load(Ordering::Relaxed), 1);
        assert_eq!(stats.bytes_read.load(Ordering::Relaxed), 150);
        assert_eq!(stats.lines.load(Ordering::Relaxed), 15);
        assert_eq!(stats.candidates.load(Ordering::Relaxed), 17);
        assert_eq!(stats.get_accepted(), 13);
    }
}
