//! Command-line interface definition for wordlist-refinery
//!
//! Provides argument parsing for the wordlist refining tool. Semantic
//! validation (percentage ranges, `--email-split` format) happens when the
//! run configuration is built, not here.

use clap::Parser;
use std::path::PathBuf;

/// Wordlist refinery for penetration testing
///
/// Normalize, filter, sort and deduplicate noisy wordlists from raw sources
/// such as scraped web pages, leaked credential dumps, or subdomain scans.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-refinery",
    author = "m0h1nd4",
    version,
    about = "Wordlist refinery for penetration testing",
    long_about = r#"
Normalize, filter, sort and deduplicate noisy wordlists. Input files are
processed in parallel; the output preserves input order unless --sort is
given.

EXAMPLES:
    # Merge two wordlists, sorted and deduplicated
    wordlist-refinery -o clean.txt raw1.txt raw2.txt --sort --deduplicate

    # Pull words out of scraped HTML
    wordlist-refinery -o words.txt dump.html --dewebify --wordify --lower

    # Curate password candidates: strip digit edges, drop hashes and
    # low-entropy junk, keep 8-16 character words
    wordlist-refinery -o candidates.txt leak.txt \
        --digit-trim --hash-remove --dup-sense 60 --minlen 8 --maxlen 16

    # Turn an email dump into "user domain" pairs
    wordlist-refinery -o pairs.txt emails.txt --lower --email-sort
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/wordlist-refinery"
)]
pub struct Args {
    /// Input wordlist files
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Output file path
    #[arg(short, long, required = true, value_name = "FILE")]
    pub output: PathBuf,

    /// Filter out words over a certain max length (0 = disabled)
    #[arg(long, value_name = "LEN", default_value_t = 0)]
    pub maxlen: usize,

    /// Trim words over a certain max length down to it (0 = disabled)
    #[arg(long, value_name = "LEN", default_value_t = 0)]
    pub maxtrim: usize,

    /// Filter out words below a certain min length (0 = disabled)
    #[arg(long, value_name = "LEN", default_value_t = 0)]
    pub minlen: usize,

    /// Trim all digits from beginning and end of words
    #[arg(long, default_value_t = false)]
    pub digit_trim: bool,

    /// Trim all special characters from beginning and end of words
    #[arg(long, default_value_t = false)]
    pub special_trim: bool,

    /// Remove consecutive duplicate characters within words
    #[arg(long, default_value_t = false)]
    pub dup_remove: bool,

    /// Accepted for compatibility; has no effect
    #[arg(long, default_value_t = false)]
    pub no_sentence: bool,

    /// Change words to all lower case
    #[arg(long, default_value_t = false)]
    pub lower: bool,

    /// Split input lines into separate whitespace-delimited words
    #[arg(long, default_value_t = false)]
    pub wordify: bool,

    /// Drop words that are all numeric
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    /// Remove tabs and spaces from the beginning of words
    #[arg(long, default_value_t = false)]
    pub detab: bool,

    /// Drop a word if a single character exceeds this percentage of it (0-100)
    #[arg(long, value_name = "PCT", default_value_t = 0)]
    pub dup_sense: i64,

    /// Drop word candidates that are actually hex digests
    #[arg(long, default_value_t = false)]
    pub hash_remove: bool,

    /// Convert email addresses to "username domain" pairs
    #[arg(long, default_value_t = false)]
    pub email_sort: bool,

    /// Validate a user:domain split spec; the split wordlist files themselves
    /// are not emitted
    #[arg(long, value_name = "USER:DOMAIN")]
    pub email_split: Option<String>,

    /// Extract words from HTML input
    #[arg(long, default_value_t = false)]
    pub dewebify: bool,

    /// With --dewebify: drop non-ASCII bytes from each line
    #[arg(long, default_value_t = false)]
    pub no_utf8: bool,

    /// Sort the output words
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Remove duplicate words from the output (implies a sorted collection)
    #[arg(long, default_value_t = false)]
    pub deduplicate: bool,

    /// Number of threads (default: auto-detect)
    #[arg(short = 't', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
impl Args {
    /// Baseline arguments for tests: one input, one output, everything off.
    pub(crate) fn for_tests() -> Self {
        Self::parse_from(["wordlist-refinery", "-o", "out.txt", "in.txt"])
    }
}
