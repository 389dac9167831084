use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub goal_amount: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMadeEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub raised_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignSuccessfulEvent {
    pub campaign_id: CampaignId,
    pub raised_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundProcessedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub creator_amount: i128,
    pub platform_fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawEvent {
    pub owner: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_contribution_made(env: &Env, event: ContributionMadeEvent) {
    env.events().publish(
        (Symbol::new(env, "contribution_made"),),
        event,
    );
}

pub fn emit_campaign_successful(env: &Env, event: CampaignSuccessfulEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_successful"),),
        event,
    );
}

pub fn emit_refund_processed(env: &Env, event: RefundProcessedEvent) {
    env.events().publish(
        (Symbol::new(env, "refund_processed"),),
        event,
    );
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "funds_withdrawn"),),
        event,
    );
}

pub fn emit_emergency_withdraw(env: &Env, event: EmergencyWithdrawEvent) {
    env.events().publish(
        (Symbol::new(env, "emergency_withdraw"),),
        event,
    );
}
