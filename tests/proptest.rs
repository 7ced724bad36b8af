//! Property-based tests for chatdump.
//!
//! These tests generate random inputs to find edge cases in selection
//! and block formatting.

use std::collections::HashSet;

use proptest::prelude::*;

use chatdump::archive::MessageEntry;
use chatdump::config::DumpConfig;
use chatdump::dump::format_block;
use chatdump::select::{ChannelBlock, Membership, SelectionPolicy};

/// Generate a random timestamp using fast strategies (no regex!)
fn arb_timestamp() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "2020-01-01 10:00:00".to_string(),
        "2020-12-31 23:59:59".to_string(),
        "2021-05-01 08:30:00".to_string(),
        "2019-07-14".to_string(),
        "1999".to_string(),
        "yesterday".to_string(),
        String::new(),
        "-0001-01-01".to_string(),
    ])
}

fn arb_entry() -> impl Strategy<Value = MessageEntry> {
    (any::<i64>(), arb_timestamp()).prop_map(|(id, ts)| MessageEntry::new(id, ts))
}

fn arb_entries(max_len: usize) -> impl Strategy<Value = Vec<MessageEntry>> {
    prop::collection::vec(arb_entry(), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // SELECTION PROPERTIES
    // ============================================

    /// All mode never drops or reorders IDs
    #[test]
    fn all_mode_never_drops_or_reorders(messages in arb_entries(30)) {
        let block = SelectionPolicy::All
            .select("c", &messages)
            .expect("all mode always yields a block");
        let expected: Vec<i64> = messages.iter().map(|m| m.id).collect();
        prop_assert_eq!(block.message_ids, expected);
        prop_assert_eq!(block.channel_id, "c");
    }

    /// Year mode selects exactly the entries whose year segment matches,
    /// and suppresses the block only when nothing matches
    #[test]
    fn year_filter_matches_exactly(
        messages in arb_entries(30),
        year in prop::sample::select(vec!["2020", "2021", "1999", ""]),
    ) {
        let policy = SelectionPolicy::ByYear(year.to_string());
        let expected: Vec<i64> = messages
            .iter()
            .filter(|m| m.year() == year)
            .map(|m| m.id)
            .collect();

        match policy.select("c", &messages) {
            Some(block) => prop_assert_eq!(block.message_ids, expected),
            None => prop_assert!(expected.is_empty()),
        }
    }

    /// For any channel, exclude and include are exact opposites
    #[test]
    fn exclude_include_partition(listed in any::<bool>(), messages in arb_entries(10)) {
        let channel = if listed { "in-set" } else { "out-of-set" };
        let set: HashSet<String> = std::iter::once("in-set".to_string()).collect();

        let exclude = SelectionPolicy::ByChannels {
            channels: set.clone(),
            membership: Membership::Exclude,
        };
        let include = SelectionPolicy::ByChannels {
            channels: set,
            membership: Membership::Include,
        };

        prop_assert_eq!(exclude.select(channel, &messages).is_some(), !listed);
        prop_assert_eq!(include.select(channel, &messages).is_some(), listed);
    }

    /// Selection never panics on any input
    #[test]
    fn selection_never_panics(messages in arb_entries(50)) {
        let _ = SelectionPolicy::All.select("c", &messages);
        let _ = SelectionPolicy::ByYear("2020".to_string()).select("c", &messages);
    }

    // ============================================
    // FORMATTING PROPERTIES
    // ============================================

    /// A block always opens with its header line; IDs are separated by
    /// exactly n-1 separators and closed by a blank line
    #[test]
    fn format_block_shape(ids in prop::collection::vec(any::<i64>(), 0..40)) {
        let rendered = format_block(&ChannelBlock::new("chan", ids.clone()));
        prop_assert!(rendered.starts_with("chan:\n"));

        if ids.is_empty() {
            prop_assert_eq!(rendered, "chan:\n");
        } else {
            // Decimal IDs never contain the separator themselves
            prop_assert_eq!(rendered.matches(", ").count(), ids.len() - 1);
            prop_assert!(rendered.ends_with("\n\n"));
        }
    }

    /// The rendered ID line parses back to the same IDs
    #[test]
    fn format_block_roundtrip(ids in prop::collection::vec(any::<i64>(), 1..50)) {
        let rendered = format_block(&ChannelBlock::new("c", ids.clone()));
        let body = rendered.strip_prefix("c:\n").expect("header line");
        let body = body.strip_suffix("\n\n").expect("closing blank line");
        let parsed: Vec<i64> = body
            .split(", ")
            .map(|s| s.parse().expect("decimal id"))
            .collect();
        prop_assert_eq!(parsed, ids);
    }

    // ============================================
    // CONFIG RESOLUTION PROPERTIES
    // ============================================

    /// A non-empty year always wins over a channel list
    #[test]
    fn year_always_wins_over_channels(
        year in prop::sample::select(vec!["2019", "2020", "1970"]),
        list in prop::sample::select(vec!["A", "A,B", ",A,"]),
    ) {
        let config = DumpConfig::default()
            .with_year(year)
            .with_channels(list)
            .with_exclude(true);
        prop_assert_eq!(config.selection(), SelectionPolicy::ByYear(year.to_string()));
    }

    /// Every comma-separated segment ends up in the channel set
    #[test]
    fn channel_list_segments_are_respected(
        ids in prop::collection::vec(prop::sample::select(vec!["A", "B", "C", "D"]), 1..5),
    ) {
        let config = DumpConfig::default()
            .with_channels(ids.join(","))
            .with_include(true);

        match config.selection() {
            SelectionPolicy::ByChannels { channels, .. } => {
                for id in &ids {
                    prop_assert!(channels.contains(*id));
                }
            }
            other => prop_assert!(false, "expected channel mode, got {:?}", other),
        }
    }
}

// ============================================
// NON-PROPTEST EDGE CASE TESTS
// ============================================

#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn duplicate_ids_are_kept() {
        let messages = vec![
            MessageEntry::new(7, "2020-01-01"),
            MessageEntry::new(7, "2020-01-02"),
        ];
        let block = SelectionPolicy::All
            .select("c", &messages)
            .expect("all mode yields a block");
        assert_eq!(block.message_ids, vec![7, 7]);
    }

    #[test]
    fn year_segment_at_separator_boundary() {
        // A timestamp ending right at the separator still has a year
        // segment of everything before it.
        let messages = vec![MessageEntry::new(1, "2020-")];
        let block = SelectionPolicy::ByYear("2020".to_string())
            .select("c", &messages)
            .expect("segment matches");
        assert_eq!(block.message_ids, vec![1]);
    }

    #[test]
    fn non_numeric_year_segment_compares_verbatim() {
        let messages = vec![MessageEntry::new(1, "yesterday")];
        let block = SelectionPolicy::ByYear("yesterday".to_string())
            .select("c", &messages)
            .expect("verbatim match");
        assert_eq!(block.message_ids, vec![1]);
    }

    #[test]
    fn empty_year_matches_empty_segment() {
        let messages = vec![
            MessageEntry::new(1, ""),
            MessageEntry::new(2, "-2020-01-01"),
            MessageEntry::new(3, "2020-01-01"),
        ];
        let block = SelectionPolicy::ByYear(String::new())
            .select("c", &messages)
            .expect("two empty segments match");
        assert_eq!(block.message_ids, vec![1, 2]);
    }
}
