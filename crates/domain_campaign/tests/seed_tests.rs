//! Tests for sample data planning and target selection

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use domain_campaign::{sample_targets, CampaignError, SeedPlan, DEFAULT_TARGET_NAMES};

// ============================================================================
// Selection Tests
// ============================================================================

mod selection_tests {
    use super::*;

    #[test]
    fn test_selection_from_default_names_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..200 {
            let picked = sample_targets(&DEFAULT_TARGET_NAMES, 3..=5, &mut rng);
            assert!((3..=5).contains(&picked.len()));
        }
    }

    #[test]
    fn test_every_length_in_range_is_reachable() {
        let pool: Vec<u8> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let lengths: HashSet<usize> = (0..500)
            .map(|_| sample_targets(&pool, 3..=5, &mut rng).len())
            .collect();

        assert_eq!(lengths, HashSet::from([3, 4, 5]));
    }

    #[test]
    fn test_every_candidate_is_eventually_picked() {
        let pool: Vec<u8> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.extend(sample_targets(&pool, 3..=3, &mut rng));
        }

        assert_eq!(seen.len(), pool.len());
    }

    #[test]
    fn test_oversized_draw_returns_whole_pool() {
        let pool = vec!["서울", "부산"];
        let picked = sample_targets(&pool, 5..=5, &mut StdRng::seed_from_u64(3));
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_fixed_length_zero_selects_nothing() {
        let pool = vec![1, 2, 3];
        assert!(sample_targets(&pool, 0..=0, &mut StdRng::seed_from_u64(3)).is_empty());
    }

    proptest! {
        #[test]
        fn prop_selection_is_distinct_and_bounded(
            pool_size in 1usize..30,
            min in 0usize..10,
            extra in 0usize..10,
            seed in any::<u64>(),
        ) {
            let max = (min + extra).min(pool_size);
            let min = min.min(max);
            let pool: Vec<usize> = (0..pool_size).collect();

            let picked = sample_targets(&pool, min..=max, &mut StdRng::seed_from_u64(seed));

            prop_assert!(picked.len() >= min && picked.len() <= max);
            let unique: HashSet<_> = picked.iter().collect();
            prop_assert_eq!(unique.len(), picked.len());
            prop_assert!(picked.iter().all(|p| pool.contains(p)));
        }
    }
}

// ============================================================================
// Plan Tests
// ============================================================================

mod plan_tests {
    use super::*;

    #[test]
    fn test_empty_target_list_rejected() {
        let plan = SeedPlan {
            target_names: Vec::new(),
            ..SeedPlan::default()
        };

        match plan.validate() {
            Err(CampaignError::InvalidSeedPlan(msg)) => assert!(msg.contains("target")),
            other => panic!("Expected InvalidSeedPlan, got {:?}", other),
        }
    }

    #[test]
    fn test_range_equal_to_pool_is_allowed() {
        let plan = SeedPlan {
            target_names: vec!["서울".to_string(), "대전".to_string()],
            targets_per_contract: 2..=2,
            ..SeedPlan::default()
        };
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_small_plan_bounds() {
        let plan = SeedPlan {
            campaign_count: 2,
            contracts_per_campaign: 3,
            targets_per_contract: 1..=2,
            ..SeedPlan::default()
        };
        assert_eq!(plan.contract_count(), 6);
        assert_eq!(plan.contract_target_bounds(), (6, 12));
    }

    #[test]
    fn test_campaign_names_are_unique_per_index() {
        let plan = SeedPlan::default();
        let names: HashSet<String> = (0..plan.campaign_count).map(|i| plan.campaign_name(i)).collect();
        assert_eq!(names.len(), plan.campaign_count);
        assert!(names.contains("캠페인 0"));
        assert!(names.contains("캠페인 9"));
    }
}
