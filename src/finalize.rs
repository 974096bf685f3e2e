//! Finalization of the merged word collection
//!
//! Sorting is byte-wise lexicographic and stable. Deduplication collapses
//! adjacent equals and therefore requires sorted input; when `--deduplicate`
//! is requested without `--sort`, the sort is forced here as an explicit
//! precondition rather than left as a silent ordering assumption.

use crate::config::RefineConfig;

/// Apply the configured sort/dedup passes and hand the collection back.
pub fn finalize(mut words: Vec<Vec<u8>>, config: &RefineConfig) -> Vec<Vec<u8>> {
    if config.sort {
        words.sort();
    }

    if config.deduplicate {
        if !config.sort {
            log::debug!("deduplicate without sort: forcing a sort first");
            words.sort();
        }
        words.dedup();
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&[u8]]) -> Vec<Vec<u8>> {
        items.iter().map(|w| w.to_vec()).collect()
    }

    #[test]
    fn test_passthrough_keeps_order() {
        let config = RefineConfig::default();
        let input = words(&[b"bbb", b"aaa", b"bbb"]);
        assert_eq!(finalize(input.clone(), &config), input);
    }

    #[test]
    fn test_sort_only_keeps_duplicates() {
        let config = RefineConfig {
            sort: true,
            ..Default::default()
        };
        let out = finalize(words(&[b"bbb", b"aaa", b"bbb"]), &config);
        assert_eq!(out, words(&[b"aaa", b"bbb", b"bbb"]));
    }

    #[test]
    fn test_deduplicate_forces_sort() {
        // Without the forced sort, the two "aaa" entries would not be
        // adjacent and would both survive.
        let config = RefineConfig {
            deduplicate: true,
            ..Default::default()
        };
        let out = finalize(words(&[b"aaa", b"bbb", b"aaa"]), &config);
        assert_eq!(out, words(&[b"aaa", b"bbb"]));
    }

    #[test]
    fn test_sort_and_deduplicate() {
        let config = RefineConfig {
            sort: true,
            deduplicate: true,
            ..Default::default()
        };
        let out = finalize(words(&[b"ccc", b"aaa", b"ccc", b"bbb", b"aaa"]), &config);
        assert_eq!(out, words(&[b"aaa", b"bbb", b"ccc"]));

        // sorted, no two adjacent equal
        for pair in out.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_sort_is_bytewise() {
        let config = RefineConfig {
            sort: true,
            ..Default::default()
        };
        // Uppercase sorts before lowercase in byte order.
        let out = finalize(words(&[b"apple", b"Zebra"]), &config);
        assert_eq!(out, words(&[b"Zebra", b"apple"]));
    }
}
