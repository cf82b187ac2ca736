//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, ordering,
//! and serde representation.

use core_kernel::{CampaignId, ContractId, ContractTargetId, TargetId};
use proptest::prelude::*;
use std::collections::HashSet;

mod construction_tests {
    use super::*;

    #[test]
    fn test_value_round_trips_through_i64() {
        let id = CampaignId::new(17);
        let raw: i64 = id.into();
        assert_eq!(raw, 17);
        assert_eq!(CampaignId::from(raw), id);
    }

    #[test]
    fn test_prefixes_are_distinct() {
        let prefixes: HashSet<&str> = [
            TargetId::prefix(),
            CampaignId::prefix(),
            ContractId::prefix(),
            ContractTargetId::prefix(),
        ]
        .into_iter()
        .collect();
        assert_eq!(prefixes.len(), 4);
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        let mut ids = vec![ContractId::new(3), ContractId::new(1), ContractId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![ContractId::new(1), ContractId::new(2), ContractId::new(3)]);
    }
}

mod display_and_parse_tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(TargetId::new(1).to_string(), "TGT-1");
        assert_eq!(CampaignId::new(2).to_string(), "CMP-2");
        assert_eq!(ContractId::new(3).to_string(), "CTR-3");
        assert_eq!(ContractTargetId::new(4).to_string(), "CTT-4");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("CMP-abc".parse::<CampaignId>().is_err());
        assert!("".parse::<CampaignId>().is_err());
    }

    #[test]
    fn test_parse_error_names_the_input() {
        let err = "CMP-x1".parse::<CampaignId>().unwrap_err();
        assert!(err.to_string().contains("CMP-x1"));
    }

    proptest! {
        #[test]
        fn prop_non_positive_keys_are_rejected(raw in i64::MIN..=0i64) {
            prop_assert!(raw.to_string().parse::<ContractId>().is_err());
            let prefixed = format!("CTR-{}", raw);
            prop_assert!(prefixed.parse::<ContractId>().is_err());
        }

        #[test]
        fn prop_display_then_parse_is_identity(raw in 1i64..i64::MAX) {
            let id = ContractTargetId::new(raw);
            let parsed: ContractTargetId = id.to_string().parse().unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_deserializes_from_json_integer() {
        let id: CampaignId = serde_json::from_str("9").unwrap();
        assert_eq!(id, CampaignId::new(9));
    }

    #[test]
    fn test_rejects_json_string() {
        assert!(serde_json::from_str::<CampaignId>("\"CMP-9\"").is_err());
    }
}
