use soroban_sdk::{log, token, Address, Env};

use crate::events;
use crate::storage;
use crate::storage_types::{Campaign, CampaignStatus, CrowdfundError, FEE_DENOMINATOR, FEE_RATE_BPS};

/// How a successful campaign's raised amount is divided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PayoutSplit {
    pub creator_amount: i128,
    pub platform_fee: i128,
}

/// Platform fee on `raised_amount`, truncated toward zero.
pub fn calculate_fee(raised_amount: i128) -> Result<i128, CrowdfundError> {
    raised_amount
        .checked_mul(FEE_RATE_BPS as i128)
        .map(|scaled| scaled / FEE_DENOMINATOR as i128)
        .ok_or(CrowdfundError::ArithmeticOverflow)
}

/// Split proceeds so that `creator_amount + platform_fee == raised_amount`.
/// The truncation remainder stays with the creator.
pub fn split_proceeds(raised_amount: i128) -> Result<PayoutSplit, CrowdfundError> {
    let platform_fee = calculate_fee(raised_amount)?;
    Ok(PayoutSplit {
        creator_amount: raised_amount - platform_fee,
        platform_fee,
    })
}

/// Pull a pledge from the contributor into the contract.
pub fn collect_contribution(env: &Env, token_address: &Address, from: &Address, amount: i128) {
    let token_client = token::Client::new(env, token_address);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

fn transfer_out(env: &Env, token_address: &Address, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let token_client = token::Client::new(env, token_address);
    token_client.transfer(&env.current_contract_address(), recipient, &amount);
}

/// Success branch of settlement: pay the creator and the platform exactly once.
pub fn withdraw_funds(env: &Env, mut campaign: Campaign, caller: &Address) -> Result<(), CrowdfundError> {
    if *caller != campaign.creator {
        return Err(CrowdfundError::Unauthorized);
    }
    if campaign.status != CampaignStatus::Successful {
        return Err(CrowdfundError::NotSuccessful);
    }

    let token_address = storage::get_token(env)?;
    let owner = storage::get_owner(env)?;
    let split = split_proceeds(campaign.raised_amount)?;

    // Persisted before any transfer so a re-entrant settle sees Withdrawn.
    campaign.status = CampaignStatus::Withdrawn;
    storage::save_campaign(env, &campaign);

    transfer_out(env, &token_address, &campaign.creator, split.creator_amount);
    transfer_out(env, &token_address, &owner, split.platform_fee);

    log!(
        env,
        "campaign withdrawn",
        campaign.id,
        split.creator_amount,
        split.platform_fee
    );

    events::emit_funds_withdrawn(
        env,
        events::FundsWithdrawnEvent {
            campaign_id: campaign.id,
            creator: campaign.creator,
            creator_amount: split.creator_amount,
            platform_fee: split.platform_fee,
        },
    );

    Ok(())
}

/// Refund branch of settlement. Pull-based: only the caller's own balance moves.
///
/// A withdrawn campaign owes nothing to anyone, so its contributors are
/// rejected even though their historical balances are still on record.
pub fn refund_contribution(env: &Env, mut campaign: Campaign, caller: &Address) -> Result<(), CrowdfundError> {
    if campaign.status == CampaignStatus::Withdrawn {
        return Err(CrowdfundError::NoContributionFound);
    }

    let amount = storage::get_contribution(env, campaign.id, caller);
    if amount <= 0 {
        return Err(CrowdfundError::NoContributionFound);
    }

    let token_address = storage::get_token(env)?;

    if campaign.status == CampaignStatus::Active {
        campaign.status = CampaignStatus::Failed;
        storage::save_campaign(env, &campaign);
    }
    storage::extend_campaign(env, campaign.id);

    // Balance is zeroed before the transfer, same ordering as withdraw_funds.
    storage::set_contribution(env, campaign.id, caller, 0);
    transfer_out(env, &token_address, caller, amount);

    log!(env, "refund processed", campaign.id, amount);

    events::emit_refund_processed(
        env,
        events::RefundProcessedEvent {
            campaign_id: campaign.id,
            contributor: caller.clone(),
            amount,
        },
    );

    Ok(())
}

/// Move the contract's whole token balance to the owner. Returns the amount swept.
pub fn sweep_balance(env: &Env, token_address: &Address, owner: &Address) -> i128 {
    let balance = contract_balance(env, token_address);
    transfer_out(env, token_address, owner, balance);
    balance
}

/// Current token balance held by the contract.
pub fn contract_balance(env: &Env, token_address: &Address) -> i128 {
    token::Client::new(env, token_address).balance(&env.current_contract_address())
}
