//! Repository tests against a real PostgreSQL container
//!
//! Each test starts its own container, so Docker must be running.

use core_kernel::{CampaignId, ContractId, HealthCheckable};
use domain_campaign::{NewCampaign, NewContract, NewContractTarget, NewTarget};
use infra_db::repositories::{
    CampaignRepository, ContractRepository, ContractTargetRepository, TargetRepository,
};
use infra_db::{CascadeSummary, DatabaseError, PostgresCampaignAdapter, TestDataInitializer};
use test_utils::{db_test, small_seed_plan};

db_test!(test_insert_assigns_ids, |db| {
    let targets = TargetRepository::new(db.pool.clone());
    let mut conn = db.pool.acquire().await.unwrap();

    let first = targets.insert(&mut conn, &NewTarget::new("서울").unwrap()).await.unwrap();
    let second = targets.insert(&mut conn, &NewTarget::new("대전").unwrap()).await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(targets.find_by_id(first.id).await.unwrap().name, "서울");
    assert_eq!(targets.count().await.unwrap(), 2);
});

db_test!(test_duplicate_links_are_allowed, |db| {
    let mut conn = db.pool.acquire().await.unwrap();
    let target = TargetRepository::new(db.pool.clone())
        .insert(&mut conn, &NewTarget::new("부산").unwrap())
        .await
        .unwrap();
    let campaign = CampaignRepository::new(db.pool.clone())
        .insert(&mut conn, &NewCampaign::new("캠페인 0").unwrap())
        .await
        .unwrap();
    let contract = ContractRepository::new(db.pool.clone())
        .insert(&mut conn, &NewContract::new(campaign.id, "캠페인 0 - 청약 0").unwrap())
        .await
        .unwrap();

    let links = ContractTargetRepository::new(db.pool.clone());
    let link = NewContractTarget::new(contract.id, target.id);
    links.insert(&mut conn, &link).await.unwrap();
    links.insert(&mut conn, &link).await.unwrap();

    assert_eq!(links.find_by_contract(contract.id).await.unwrap().len(), 2);
});

db_test!(test_contract_requires_existing_campaign, |db| {
    let mut conn = db.pool.acquire().await.unwrap();

    let err = ContractRepository::new(db.pool.clone())
        .insert(&mut conn, &NewContract::new(CampaignId::new(404), "고아 청약").unwrap())
        .await
        .unwrap_err()
        .classify();

    assert!(matches!(err, DatabaseError::ForeignKeyViolation(_)));
});

db_test!(test_save_rewrites_campaign_row, |db| {
    let campaigns = CampaignRepository::new(db.pool.clone());
    let mut conn = db.pool.acquire().await.unwrap();
    let mut campaign = campaigns
        .insert(&mut conn, &NewCampaign::new("캠페인 0").unwrap())
        .await
        .unwrap();

    let unchanged = campaigns.save(&mut conn, &campaign).await.unwrap();
    assert_eq!(unchanged, campaign);

    campaign.name = "캠페인 영".to_string();
    campaigns.save(&mut conn, &campaign).await.unwrap();
    assert_eq!(campaigns.find_by_id(campaign.id).await.unwrap().name, "캠페인 영");
});

db_test!(test_delete_campaign_cascades_but_keeps_targets, |db| {
    TestDataInitializer::new(db.pool.clone())
        .with_plan(small_seed_plan())
        .run()
        .await
        .unwrap();

    let campaigns = CampaignRepository::new(db.pool.clone());
    let contracts = ContractRepository::new(db.pool.clone());
    let links = ContractTargetRepository::new(db.pool.clone());
    let targets = TargetRepository::new(db.pool.clone());

    let victim = campaigns.find_all().await.unwrap()[0].clone();
    let owned = contracts.find_by_campaign(victim.id).await.unwrap();
    let mut owned_links = 0;
    for contract in &owned {
        owned_links += links.find_by_contract(contract.id).await.unwrap().len() as u64;
    }
    let links_before = links.count().await.unwrap();

    let summary = campaigns.delete(victim.id).await.unwrap();

    assert_eq!(
        summary,
        CascadeSummary {
            campaigns: 1,
            contracts: owned.len() as u64,
            contract_targets: owned_links,
        }
    );
    assert!(campaigns.find_by_id(victim.id).await.unwrap_err().is_not_found());
    assert!(contracts.find_by_campaign(victim.id).await.unwrap().is_empty());
    assert_eq!(links.count().await.unwrap(), links_before - owned_links as i64);
    assert_eq!(targets.count().await.unwrap(), 4);
    assert_eq!(campaigns.count().await.unwrap(), 1);
});

db_test!(test_delete_contract_removes_only_its_links, |db| {
    TestDataInitializer::new(db.pool.clone())
        .with_plan(small_seed_plan())
        .run()
        .await
        .unwrap();

    let contracts = ContractRepository::new(db.pool.clone());
    let links = ContractTargetRepository::new(db.pool.clone());
    let all = contracts.find_all().await.unwrap();
    let (victim, survivor) = (&all[0], &all[1]);
    let survivor_links = links.find_by_contract(survivor.id).await.unwrap();

    let summary = contracts.delete(victim.id).await.unwrap();

    assert_eq!(summary.contracts, 1);
    assert_eq!(summary.campaigns, 0);
    assert!(links.find_by_contract(victim.id).await.unwrap().is_empty());
    assert_eq!(links.find_by_contract(survivor.id).await.unwrap(), survivor_links);
    assert_eq!(TargetRepository::new(db.pool.clone()).count().await.unwrap(), 4);
});

db_test!(test_delete_missing_rows_is_not_found, |db| {
    let campaign_err = CampaignRepository::new(db.pool.clone())
        .delete(CampaignId::new(77))
        .await
        .unwrap_err();
    let contract_err = ContractRepository::new(db.pool.clone())
        .delete(ContractId::new(77))
        .await
        .unwrap_err();

    assert!(campaign_err.is_not_found());
    assert!(contract_err.is_not_found());
});

db_test!(test_linked_target_cannot_be_deleted, |db| {
    TestDataInitializer::new(db.pool.clone())
        .with_plan(small_seed_plan())
        .run()
        .await
        .unwrap();
    let link = ContractTargetRepository::new(db.pool.clone())
        .find_all()
        .await
        .unwrap()[0];

    let result = sqlx::query("DELETE FROM target WHERE id = $1")
        .bind(link.target_id.value())
        .execute(&db.pool)
        .await;

    let err = DatabaseError::from(&result.unwrap_err());
    assert!(matches!(err, DatabaseError::ForeignKeyViolation(_)));
});

db_test!(test_blank_name_rejected_by_schema, |db| {
    let result = sqlx::query("INSERT INTO campaign (name) VALUES ('  ')")
        .execute(&db.pool)
        .await;

    let err = DatabaseError::from(&result.unwrap_err());
    assert!(err.is_constraint_violation());
});

db_test!(test_adapter_health_check, |db| {
    let adapter = PostgresCampaignAdapter::new(db.pool.clone());
    assert!(adapter.health_check().await.is_healthy());
});
