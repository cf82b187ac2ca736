//! Sample data planning
//!
//! The service starts with a fixed-shape sample dataset: a list of targets,
//! a number of campaigns, a number of contracts per campaign, and for each
//! contract a random selection of distinct targets. This module holds the
//! plan and the random selection; `infra_db` persists it.
//!
//! # Selection
//!
//! For every contract the candidate targets are shuffled into a uniformly
//! random permutation, a length is drawn uniformly from the inclusive range,
//! and the prefix of that length is kept. The result never repeats a target.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CampaignError;

/// Place names used for the sample targets
pub const DEFAULT_TARGET_NAMES: [&str; 10] = [
    "서울", "대전", "대구", "부산", "인천", "부천", "세종", "광주", "제주도", "여수",
];

/// Number of sample campaigns
pub const DEFAULT_CAMPAIGN_COUNT: usize = 10;

/// Number of contracts created under each sample campaign
pub const DEFAULT_CONTRACTS_PER_CAMPAIGN: usize = 10;

/// Inclusive bounds on the targets linked to each sample contract
pub const DEFAULT_TARGETS_PER_CONTRACT: RangeInclusive<usize> = 3..=5;

/// Shape of the sample dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub target_names: Vec<String>,
    pub campaign_count: usize,
    pub contracts_per_campaign: usize,
    pub targets_per_contract: RangeInclusive<usize>,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            target_names: DEFAULT_TARGET_NAMES.iter().map(|name| name.to_string()).collect(),
            campaign_count: DEFAULT_CAMPAIGN_COUNT,
            contracts_per_campaign: DEFAULT_CONTRACTS_PER_CAMPAIGN,
            targets_per_contract: DEFAULT_TARGETS_PER_CONTRACT,
        }
    }
}

impl SeedPlan {
    /// Checks that every contract can draw its targets without repeats
    ///
    /// Blank target names are not checked here; they are rejected when the
    /// target draft is built, inside the seeding transaction.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::InvalidSeedPlan` if there are no targets, the
    /// range is reversed, or the range asks for more targets than exist
    pub fn validate(&self) -> Result<(), CampaignError> {
        if self.target_names.is_empty() {
            return Err(CampaignError::InvalidSeedPlan(
                "at least one target name is required".to_string(),
            ));
        }

        let (min, max) = (*self.targets_per_contract.start(), *self.targets_per_contract.end());
        if min > max {
            return Err(CampaignError::InvalidSeedPlan(format!(
                "targets per contract range {}..={} is empty",
                min, max
            )));
        }
        if max > self.target_names.len() {
            return Err(CampaignError::InvalidSeedPlan(format!(
                "cannot pick {} distinct targets from {}",
                max,
                self.target_names.len()
            )));
        }

        Ok(())
    }

    /// Name of the campaign created at `campaign_index`
    pub fn campaign_name(&self, campaign_index: usize) -> String {
        format!("캠페인 {}", campaign_index)
    }

    /// Title of the contract created at `contract_index` under `campaign_index`
    pub fn contract_title(&self, campaign_index: usize, contract_index: usize) -> String {
        format!("캠페인 {} - 청약 {}", campaign_index, contract_index)
    }

    /// Total number of contracts the plan produces
    pub fn contract_count(&self) -> usize {
        self.campaign_count * self.contracts_per_campaign
    }

    /// Lowest and highest possible number of contract-target links
    pub fn contract_target_bounds(&self) -> (usize, usize) {
        let contracts = self.contract_count();
        (
            contracts * self.targets_per_contract.start(),
            contracts * self.targets_per_contract.end(),
        )
    }

    /// Draws the target selection for every contract in the plan
    ///
    /// `links[campaign_index][contract_index]` holds indices into
    /// `target_names`, without repeats. Call `validate` first.
    ///
    /// # Panics
    ///
    /// Panics if `targets_per_contract` is empty
    pub fn draw_links<R>(&self, rng: &mut R) -> Vec<Vec<Vec<usize>>>
    where
        R: Rng + ?Sized,
    {
        let candidates: Vec<usize> = (0..self.target_names.len()).collect();

        let mut links = Vec::with_capacity(self.campaign_count);
        for _ in 0..self.campaign_count {
            let mut contracts = Vec::with_capacity(self.contracts_per_campaign);
            for _ in 0..self.contracts_per_campaign {
                contracts.push(sample_targets(
                    &candidates,
                    self.targets_per_contract.clone(),
                    &mut *rng,
                ));
            }
            links.push(contracts);
        }
        links
    }
}

/// Draws a random selection of distinct candidates
///
/// Shuffles a copy of `candidates`, draws a length uniformly from `size`, and
/// returns that many leading elements. If the drawn length exceeds the number
/// of candidates, every candidate is returned.
///
/// # Arguments
///
/// * `candidates` - The pool to choose from
/// * `size` - Inclusive bounds on the selection length
/// * `rng` - Source of randomness
///
/// # Panics
///
/// Panics if `size` is empty (`start > end`); `SeedPlan::validate` rules that out.
pub fn sample_targets<T, R>(candidates: &[T], size: RangeInclusive<usize>, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = candidates.to_vec();
    shuffled.shuffle(rng);
    let count = rng.gen_range(size);
    shuffled.truncate(count);
    shuffled
}

/// Row counts after seeding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedReport {
    pub campaigns: i64,
    pub targets: i64,
    pub contracts: i64,
    pub contract_targets: i64,
}
