//! Property-based tests for multi_sink_logger using proptest

use multi_sink_logger::{Category, LogEntry, LogFilter, Priority};
use proptest::prelude::*;

fn any_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Debug),
        Just(Priority::Info),
        Just(Priority::Warning),
        Just(Priority::Alert),
    ]
}

fn any_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::NONE),
        Just(Category::TERRAIN),
        Just(Category::NETWORK),
        Just(Category::SOUND),
        Just(Category::RENDER),
        Just(Category::INPUT),
        Just(Category::RESOURCE),
        Just(Category::ALL),
    ]
}

// ============================================================================
// Filter predicate
// ============================================================================

proptest! {
    /// should_log holds exactly when the priority reaches Info, or the
    /// category intersects the mask and the priority reaches the
    /// threshold; checked over the full enumeration cross-product.
    #[test]
    fn test_should_log_definition(
        mask in any_category(),
        threshold in any_priority(),
        category in any_category(),
        priority in any_priority(),
    ) {
        let filter = LogFilter::new(mask, threshold);
        let expected = priority >= Priority::Info
            || (category.intersects(mask) && priority >= threshold);
        prop_assert_eq!(filter.should_log(category, priority), expected);
    }

    /// Info and above pass every filter, however narrow.
    #[test]
    fn test_escape_valve_always_passes(
        mask in any_category(),
        threshold in any_priority(),
        category in any_category(),
    ) {
        let filter = LogFilter::new(mask, threshold);
        prop_assert!(filter.should_log(category, Priority::Info));
        prop_assert!(filter.should_log(category, Priority::Warning));
        prop_assert!(filter.should_log(category, Priority::Alert));
    }

    /// Below Info, the NONE category never passes any filter.
    #[test]
    fn test_none_category_below_info_never_passes(
        mask in any_category(),
        threshold in any_priority(),
    ) {
        let filter = LogFilter::new(mask, threshold);
        prop_assert!(!filter.should_log(Category::NONE, Priority::Debug));
    }
}

// ============================================================================
// Priority
// ============================================================================

proptest! {
    /// Priority string conversions roundtrip
    #[test]
    fn test_priority_str_roundtrip(priority in any_priority()) {
        let as_str = priority.to_str();
        let parsed: Priority = as_str.parse().unwrap();
        prop_assert_eq!(priority, parsed);
    }

    /// Priority ordering is consistent with the numeric encoding
    #[test]
    fn test_priority_ordering(p1 in any_priority(), p2 in any_priority()) {
        prop_assert_eq!(p1 <= p2, p1.as_num() <= p2.as_num());
        prop_assert_eq!(p1 < p2, p1.as_num() < p2.as_num());
    }

    /// Display matches to_str
    #[test]
    fn test_priority_display(priority in any_priority()) {
        prop_assert_eq!(format!("{}", priority), priority.to_str());
    }
}

// ============================================================================
// Category labels
// ============================================================================

proptest! {
    /// label() is total: any bit pattern yields a fixed literal, and only
    /// enumerated values yield something other than "unknown".
    #[test]
    fn test_category_label_total(c1 in any_category(), c2 in any_category()) {
        let combined = c1 | c2;
        let label = combined.label();
        prop_assert!(!label.is_empty());
        if combined != c1 && combined != c2 {
            prop_assert_eq!(label, "unknown");
        }
    }

    /// Enumerated categories have distinct, stable labels
    #[test]
    fn test_category_label_stable(category in any_category()) {
        prop_assert_eq!(category.label(), category.label());
        prop_assert_ne!(category.label(), "unknown");
    }
}

// ============================================================================
// LogEntry message sanitization
// ============================================================================

proptest! {
    /// Newlines are escaped so one entry renders as one line
    #[test]
    fn test_message_sanitization_newlines(message in ".*") {
        let entry = LogEntry::new(Category::NETWORK, Priority::Info, "conn.c", 1, message.clone());

        prop_assert!(!entry.message.contains('\n'),
                "LogEntry contains unsanitized newline: {:?}", entry.message);

        if message.contains('\n') {
            prop_assert!(entry.message.contains("\\n"),
                    "Newlines not properly escaped: {:?}", entry.message);
        }
    }

    /// Carriage returns are escaped
    #[test]
    fn test_message_sanitization_carriage_return(message in ".*") {
        let entry = LogEntry::new(Category::NETWORK, Priority::Info, "conn.c", 1, message.clone());

        prop_assert!(!entry.message.contains('\r'),
                "LogEntry contains unsanitized carriage return: {:?}", entry.message);
    }

    /// Tabs are escaped
    #[test]
    fn test_message_sanitization_tabs(message in ".*") {
        let entry = LogEntry::new(Category::NETWORK, Priority::Info, "conn.c", 1, message.clone());
        prop_assert!(!entry.message.contains('\t'));
    }

    /// Classification fields pass through construction untouched
    #[test]
    fn test_entry_preserves_classification(
        category in any_category(),
        priority in any_priority(),
        line in any::<u32>(),
    ) {
        let entry = LogEntry::new(category, priority, "origin.rs", line, "msg");
        prop_assert_eq!(entry.category, category);
        prop_assert_eq!(entry.priority, priority);
        prop_assert_eq!(entry.line, line);
    }
}
