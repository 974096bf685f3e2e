//! Run configuration
//!
//! Built once from the parsed command line before any file is touched,
//! read-only afterwards.

use crate::cli::Args;
use crate::error::ConfigError;

/// Parsed `user:domain` value of `--email-split`.
///
/// Validated at configuration build but intentionally not wired to any
/// output: the auxiliary user/domain wordlist files are out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSplit {
    pub user: String,
    pub domain: String,
}

impl EmailSplit {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let (user, domain) = raw
            .split_once(':')
            .ok_or_else(|| ConfigError::EmailSplitFormat(raw.to_string()))?;

        if user.is_empty() || domain.is_empty() {
            return Err(ConfigError::EmailSplitEmptyPart(raw.to_string()));
        }

        Ok(Self {
            user: user.to_string(),
            domain: domain.to_string(),
        })
    }
}

/// Immutable configuration for one refinery run.
///
/// Length fields use 0 to mean "disabled". `dup_sense` is a percentage and
/// must be within 0..=100; out-of-range values are rejected, never clamped.
#[derive(Debug, Clone, Default)]
pub struct RefineConfig {
    /// Drop processed words longer than this (0 = disabled).
    pub maxlen: usize,
    /// Truncate processed words to this length (0 = disabled).
    pub maxtrim: usize,
    /// Drop processed words shorter than this (0 = disabled).
    pub minlen: usize,
    /// Strip leading/trailing digit runs.
    pub digit_trim: bool,
    /// Strip leading/trailing non-alphanumeric runs.
    pub special_trim: bool,
    /// Collapse runs of identical adjacent characters.
    pub dup_remove: bool,
    /// Accepted for CLI compatibility; not referenced by any step.
    pub no_sentence: bool,
    /// ASCII-lowercase each word.
    pub lower: bool,
    /// Split lines into whitespace-delimited sub-words.
    pub wordify: bool,
    /// Drop words consisting only of digits.
    pub no_numbers: bool,
    /// Strip leading spaces and tabs.
    pub detab: bool,
    /// Drop words where one character exceeds this percentage (0 = disabled).
    pub dup_sense: u32,
    /// Drop words that look like hex digests.
    pub hash_remove: bool,
    /// Rewrite valid emails to "user domain".
    pub email_sort: bool,
    /// Validated but unwired; see module docs.
    pub email_split: Option<EmailSplit>,
    /// Strip HTML tags from lines and words.
    pub dewebify: bool,
    /// With `dewebify`: drop bytes above 127 from each line.
    pub no_utf8: bool,
    /// Sort the final collection.
    pub sort: bool,
    /// Remove duplicate words from the final collection (forces a sort).
    pub deduplicate: bool,
}

impl RefineConfig {
    /// Build and validate the configuration from parsed arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if !(0..=100).contains(&args.dup_sense) {
            return Err(ConfigError::DupSenseRange(args.dup_sense));
        }

        let email_split = args
            .email_split
            .as_deref()
            .map(EmailSplit::parse)
            .transpose()?;

        Ok(Self {
            maxlen: args.maxlen,
            maxtrim: args.maxtrim,
            minlen: args.minlen,
            digit_trim: args.digit_trim,
            special_trim: args.special_trim,
            dup_remove: args.dup_remove,
            no_sentence: args.no_sentence,
            lower: args.lower,
            wordify: args.wordify,
            no_numbers: args.no_numbers,
            detab: args.detab,
            dup_sense: args.dup_sense as u32,
            hash_remove: args.hash_remove,
            email_sort: args.email_sort,
            email_split,
            dewebify: args.dewebify,
            no_utf8: args.no_utf8,
            sort: args.sort,
            deduplicate: args.deduplicate,
        })
    }

    /// True if a processed word passes the length gate.
    #[inline]
    pub fn length_ok(&self, len: usize) -> bool {
        (self.minlen == 0 || len >= self.minlen) && (self.maxlen == 0 || len <= self.maxlen)
    }
}
