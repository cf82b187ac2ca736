//! Custom Test Assertions
//!
//! Assertion helpers that check stored campaign data against the ownership
//! and selection rules, with messages that name the offending rows.

use std::collections::{HashMap, HashSet};

use core_kernel::{CampaignId, ContractId, TargetId};
use domain_campaign::{Campaign, Contract, ContractTarget, SeedPlan};

/// Asserts that every contract's links fall inside the plan's range and
/// never repeat a target
pub fn assert_contract_links_match_plan(
    contracts: &[Contract],
    links: &[ContractTarget],
    plan: &SeedPlan,
) {
    let mut by_contract: HashMap<ContractId, Vec<TargetId>> = HashMap::new();
    for link in links {
        by_contract.entry(link.contract_id).or_default().push(link.target_id);
    }

    for contract in contracts {
        let targets = by_contract.get(&contract.id).map(Vec::as_slice).unwrap_or(&[]);
        assert!(
            plan.targets_per_contract.contains(&targets.len()),
            "{} has {} targets, expected {:?}",
            contract.id,
            targets.len(),
            plan.targets_per_contract
        );

        let distinct: HashSet<&TargetId> = targets.iter().collect();
        assert_eq!(
            distinct.len(),
            targets.len(),
            "{} links the same target more than once: {:?}",
            contract.id,
            targets
        );
    }
}

/// Asserts that each campaign owns exactly the contracts titled with its index
///
/// Campaigns must be in creation order.
pub fn assert_contracts_under_their_campaign(
    campaigns: &[Campaign],
    contracts: &[Contract],
    plan: &SeedPlan,
) {
    for (campaign_index, campaign) in campaigns.iter().enumerate() {
        let owned: Vec<&Contract> = contracts
            .iter()
            .filter(|c| c.campaign_id == campaign.id)
            .collect();
        assert_eq!(
            owned.len(),
            plan.contracts_per_campaign,
            "{} owns {} contracts",
            campaign.id,
            owned.len()
        );

        for (contract_index, contract) in owned.iter().enumerate() {
            assert_eq!(
                contract.title,
                plan.contract_title(campaign_index, contract_index),
                "{} under {} has an unexpected title",
                contract.id,
                campaign.id
            );
        }
    }
}

/// Asserts that no contract references a campaign outside `campaigns`
pub fn assert_no_orphan_contracts(campaigns: &[Campaign], contracts: &[Contract]) {
    let known: HashSet<CampaignId> = campaigns.iter().map(|c| c.id).collect();
    for contract in contracts {
        assert!(
            known.contains(&contract.campaign_id),
            "{} references missing {}",
            contract.id,
            contract.campaign_id
        );
    }
}
