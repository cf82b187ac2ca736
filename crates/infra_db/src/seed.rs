//! Sample data seeding
//!
//! `TestDataInitializer` writes the dataset described by a `SeedPlan` in a
//! single transaction. Either every row is committed or none is: any error
//! drops the transaction, which rolls it back and leaves the previous data
//! in place.
//!
//! # Procedure
//!
//! 1. Draw the target selection for every contract
//! 2. Empty all four tables, restarting ids at 1
//! 3. Insert one target per plan name
//! 4. For each campaign index, insert the campaign
//! 5. Under it, insert each contract and link its selected targets
//! 6. Save the campaign again
//! 7. Count every table and log the totals
//!
//! Each run replaces the dataset, so restarting the service leaves exactly
//! one copy of it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use domain_campaign::{
    NewCampaign, NewContract, NewContractTarget, NewTarget, SeedPlan, SeedReport,
};

use crate::error::DatabaseError;
use crate::repositories::{
    clear_all, CampaignRepository, ContractRepository, ContractTargetRepository, TargetRepository,
};

/// One-shot writer for the startup sample dataset
#[derive(Debug, Clone)]
pub struct TestDataInitializer {
    pool: PgPool,
    plan: SeedPlan,
    targets: TargetRepository,
    campaigns: CampaignRepository,
    contracts: ContractRepository,
    contract_targets: ContractTargetRepository,
}

impl TestDataInitializer {
    /// Creates an initializer for the default plan
    pub fn new(pool: PgPool) -> Self {
        Self {
            targets: TargetRepository::new(pool.clone()),
            campaigns: CampaignRepository::new(pool.clone()),
            contracts: ContractRepository::new(pool.clone()),
            contract_targets: ContractTargetRepository::new(pool.clone()),
            plan: SeedPlan::default(),
            pool,
        }
    }

    /// Replaces the plan
    pub fn with_plan(mut self, plan: SeedPlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn plan(&self) -> &SeedPlan {
        &self.plan
    }

    /// Seeds the database using an entropy-seeded random generator
    ///
    /// # Errors
    ///
    /// Returns the first error hit; nothing has been committed in that case
    pub async fn run(&self) -> Result<SeedReport, DatabaseError> {
        let mut rng = StdRng::from_entropy();
        self.run_with_rng(&mut rng).await
    }

    /// Replaces the stored dataset using the supplied random generator
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Domain` for an invalid plan or a blank name,
    /// or any storage error. Nothing has been committed in either case.
    #[instrument(skip(self, rng), fields(campaigns = self.plan.campaign_count))]
    pub async fn run_with_rng<R>(&self, rng: &mut R) -> Result<SeedReport, DatabaseError>
    where
        R: Rng + Send,
    {
        self.plan.validate()?;
        let links = self.plan.draw_links(rng);

        let mut tx = self.pool.begin().await?;

        clear_all(&mut tx).await?;
        debug!("Existing data cleared");

        let mut targets = Vec::with_capacity(self.plan.target_names.len());
        for name in &self.plan.target_names {
            let target = self.targets.insert(&mut tx, &NewTarget::new(name.as_str())?).await?;
            targets.push(target);
        }
        debug!(count = targets.len(), "Targets created");

        for (campaign_index, contract_links) in links.iter().enumerate() {
            let campaign = self
                .campaigns
                .insert(&mut tx, &NewCampaign::new(self.plan.campaign_name(campaign_index))?)
                .await?;

            for (contract_index, picks) in contract_links.iter().enumerate() {
                let title = self.plan.contract_title(campaign_index, contract_index);
                let contract = self
                    .contracts
                    .insert(&mut tx, &NewContract::new(campaign.id, title)?)
                    .await?;

                for &pick in picks {
                    self.contract_targets
                        .insert(&mut tx, &NewContractTarget::new(contract.id, targets[pick].id))
                        .await?;
                }
            }

            self.campaigns.save(&mut tx, &campaign).await?;
            debug!(campaign_id = %campaign.id, "Campaign seeded");
        }

        let report = SeedReport {
            campaigns: self.campaigns.count_in(&mut tx).await?,
            targets: self.targets.count_in(&mut tx).await?,
            contracts: self.contracts.count_in(&mut tx).await?,
            contract_targets: self.contract_targets.count_in(&mut tx).await?,
        };

        tx.commit().await?;

        info!(
            campaigns = report.campaigns,
            targets = report.targets,
            contracts = report.contracts,
            contract_targets = report.contract_targets,
            "Test data created"
        );
        Ok(report)
    }
}
