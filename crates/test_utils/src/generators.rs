//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating campaign data and seed plans
//! that respect domain invariants.

use proptest::prelude::*;

use core_kernel::CampaignId;
use domain_campaign::{Campaign, SeedPlan};

/// Strategy for non-blank names, Hangul or ASCII
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[가-힣]{1,8}( [0-9]{1,3})?",
        "[A-Za-z][A-Za-z0-9 ]{0,15}",
    ]
}

/// Strategy for a list of campaigns with unique ascending ids
pub fn campaigns_strategy(max_len: usize) -> impl Strategy<Value = Vec<Campaign>> {
    prop::collection::vec(name_strategy(), 0..=max_len).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Campaign {
                id: CampaignId::new(index as i64 + 1),
                name,
            })
            .collect()
    })
}

/// Strategy for seed plans that pass `SeedPlan::validate`
pub fn valid_seed_plan_strategy() -> impl Strategy<Value = SeedPlan> {
    (1usize..=10, 0usize..=4, 0usize..=4)
        .prop_flat_map(|(target_count, campaign_count, contracts_per_campaign)| {
            (0..=target_count, Just((target_count, campaign_count, contracts_per_campaign)))
        })
        .prop_flat_map(|(max, shape)| (0..=max, Just(max), Just(shape)))
        .prop_map(|(min, max, (target_count, campaign_count, contracts_per_campaign))| SeedPlan {
            target_names: (0..target_count).map(|i| format!("target {}", i)).collect(),
            campaign_count,
            contracts_per_campaign,
            targets_per_contract: min..=max,
        })
}
