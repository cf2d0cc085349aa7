use proptest::prelude::*;

use vws_types::{EvidenceHash, TargetId, Timestamp};

proptest! {
    /// EvidenceHash::is_zero is true only for all-zero bytes.
    #[test]
    fn evidence_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = EvidenceHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// Hex display is always 64 lowercase characters.
    #[test]
    fn evidence_hash_display_is_64_hex(bytes in prop::array::uniform32(0u8..)) {
        let shown = EvidenceHash::new(bytes).to_string();
        prop_assert_eq!(shown.len(), 64);
        prop_assert!(shown.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// Any id with a non-blank core survives padding with whitespace.
    #[test]
    fn target_id_ignores_padding(core in "[a-z0-9-]{1,24}", left in " {0,3}", right in " {0,3}") {
        let id = TargetId::new(format!("{left}{core}{right}")).unwrap();
        prop_assert_eq!(id.as_str(), core.as_str());
    }

    /// Timestamp ordering matches millisecond ordering.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX / 2, b in 0u64..u64::MAX / 2) {
        let ta = Timestamp::from_millis(a);
        let tb = Timestamp::from_millis(b);
        prop_assert_eq!(ta < tb, a < b);
    }
}
