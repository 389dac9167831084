use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{
    Campaign, CampaignId, CrowdfundError, DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT,
};

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn get_token(env: &Env) -> Result<Address, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn set_config(env: &Env, owner: &Address, token: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    env.storage().instance().set(&DataKey::Token, token);
    env.storage().instance().set(&DataKey::NextCampaignId, &0u64);
}

/// Next ID to hand out. IDs are dense and zero-based, so this is also the
/// number of campaigns created so far.
pub fn get_next_campaign_id(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(0)
}

pub fn set_next_campaign_id(env: &Env, next_id: CampaignId) {
    env.storage().instance().set(&DataKey::NextCampaignId, &next_id);
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundError::NotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Outstanding ledger balance; an absent entry reads as zero.
pub fn get_contribution(env: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, campaign_id: CampaignId, contributor: &Address, amount: i128) {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn get_contributors(env: &Env, campaign_id: CampaignId) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contributors(campaign_id))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_contributors(env: &Env, campaign_id: CampaignId, contributors: &Vec<Address>) {
    let key = PersistentKey::Contributors(campaign_id);
    env.storage().persistent().set(&key, contributors);
    extend_persistent(env, &key);
}

/// Keep a campaign record and its contributor list live. Only valid once the
/// campaign has at least one contributor.
pub fn extend_campaign(env: &Env, campaign_id: CampaignId) {
    extend_persistent(env, &PersistentKey::Campaign(campaign_id));
    extend_persistent(env, &PersistentKey::Contributors(campaign_id));
}
