//! Per-word processing pipeline
//!
//! The normalization/filtering chain is an explicit ordered table of named
//! steps. Each step is gated on the configuration, takes the current word by
//! value and either hands back a (possibly rewritten) word or rejects it,
//! which short-circuits the rest of the chain.

use bstr::BStr;

use crate::config::RefineConfig;
use crate::filters;

/// Outcome of one pipeline step.
pub enum Verdict {
    /// Continue with this (possibly transformed) word.
    Keep(Vec<u8>),
    /// Discard the word; remaining steps are skipped.
    Reject,
}

/// A single named step of the word pipeline.
pub struct Step {
    name: &'static str,
    enabled: fn(&RefineConfig) -> bool,
    apply: fn(Vec<u8>, &RefineConfig) -> Verdict,
}

impl Step {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_enabled(&self, config: &RefineConfig) -> bool {
        (self.enabled)(config)
    }

    pub fn apply(&self, word: Vec<u8>, config: &RefineConfig) -> Verdict {
        (self.apply)(word, config)
    }
}

/// The fixed processing order. Transforms run first, predicates after, the
/// email rewrite last.
pub const STEPS: &[Step] = &[
    Step {
        name: "strip-html",
        enabled: |c| c.dewebify,
        apply: |w, _| Verdict::Keep(filters::strip_html_tags(&w)),
    },
    Step {
        name: "lowercase",
        enabled: |c| c.lower,
        apply: |mut w, _| {
            w.make_ascii_lowercase();
            Verdict::Keep(w)
        },
    },
    Step {
        name: "trim-digits",
        enabled: |c| c.digit_trim,
        apply: |w, _| Verdict::Keep(filters::trim_digits(&w)),
    },
    Step {
        name: "trim-special",
        enabled: |c| c.special_trim,
        apply: |w, _| Verdict::Keep(filters::trim_special(&w)),
    },
    Step {
        name: "detab",
        enabled: |c| c.detab,
        apply: |w, _| Verdict::Keep(filters::strip_leading_whitespace(&w)),
    },
    Step {
        name: "truncate",
        enabled: |c| c.maxtrim > 0,
        apply: |mut w, c| {
            if w.len() > c.maxtrim {
                w.truncate(c.maxtrim);
            }
            Verdict::Keep(w)
        },
    },
    Step {
        name: "collapse-runs",
        enabled: |c| c.dup_remove,
        apply: |w, _| Verdict::Keep(filters::collapse_runs(&w)),
    },
    Step {
        name: "drop-numeric",
        enabled: |c| c.no_numbers,
        apply: |w, _| {
            if filters::is_all_digits(&w) {
                Verdict::Reject
            } else {
                Verdict::Keep(w)
            }
        },
    },
    Step {
        name: "drop-hashes",
        enabled: |c| c.hash_remove,
        apply: |w, _| {
            if filters::is_probable_hash(&w) {
                Verdict::Reject
            } else {
                Verdict::Keep(w)
            }
        },
    },
    Step {
        name: "dominance",
        enabled: |c| c.dup_sense > 0,
        apply: |w, c| {
            if filters::exceeds_char_dominance(&w, c.dup_sense) {
                Verdict::Reject
            } else {
                Verdict::Keep(w)
            }
        },
    },
    Step {
        name: "email-rewrite",
        enabled: |c| c.email_sort,
        apply: |w, _| {
            if !filters::is_valid_email(&w) {
                return Verdict::Keep(w);
            }
            let (user, domain) = filters::split_email(&w);
            let mut rewritten = Vec::with_capacity(w.len());
            rewritten.extend_from_slice(user);
            rewritten.push(b' ');
            rewritten.extend_from_slice(domain);
            Verdict::Keep(rewritten)
        },
    },
];

/// Run a candidate word through every enabled step, in table order.
///
/// Returns `None` as soon as a step rejects. A `Some` result may still be
/// empty; the length gate in the tokenizer handles that.
pub fn process_word(word: &[u8], config: &RefineConfig) -> Option<Vec<u8>> {
    let mut current = word.to_vec();

    for step in STEPS {
        if !step.is_enabled(config) {
            continue;
        }
        match step.apply(current, config) {
            Verdict::Keep(next) => current = next,
            Verdict::Reject => {
                log::trace!("{} rejected {:?}", step.name, BStr::new(word));
                return None;
            }
        }
    }

    Some(current)
}
