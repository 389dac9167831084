#![no_std]

mod events;
mod settlement;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use settlement::{calculate_fee, split_proceeds, PayoutSplit};
pub use storage_types::{
    Campaign, CampaignDetails, CampaignId, CampaignStatus, CrowdfundError, FEE_DENOMINATOR,
    FEE_RATE_BPS, MAX_DURATION_DAYS, MIN_DURATION_DAYS,
};
pub use utils::*;

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Initialize the contract with the platform owner and the funding token
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), CrowdfundError> {
        if storage::is_initialized(&env) {
            return Err(CrowdfundError::AlreadyInitialized);
        }

        owner.require_auth();

        storage::set_config(&env, &owner, &token);
        storage::extend_instance(&env);

        Ok(())
    }

    /// Open a new campaign. Returns its sequential, zero-based ID.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal_amount: i128,
        duration_days: u32,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();

        if !storage::is_initialized(&env) {
            return Err(CrowdfundError::NotInitialized);
        }
        utils::validate_campaign_input(&title, &description, goal_amount, duration_days)?;

        let campaign_id = storage::get_next_campaign_id(&env);
        let created_at = env.ledger().timestamp();
        let deadline = utils::compute_deadline(created_at, duration_days)?;

        let campaign = Campaign {
            id: campaign_id,
            creator: creator.clone(),
            title: title.clone(),
            description,
            goal_amount,
            raised_amount: 0,
            deadline,
            status: CampaignStatus::Active,
            created_at,
        };

        storage::save_campaign(&env, &campaign);
        storage::set_next_campaign_id(&env, campaign_id + 1);
        storage::extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                creator,
                title,
                goal_amount,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    /// Pledge `amount` to an active campaign before its deadline.
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();

        let mut campaign = storage::load_campaign(&env, campaign_id)?;

        if campaign.status != CampaignStatus::Active {
            return Err(CrowdfundError::CampaignNotActive);
        }
        if env.ledger().timestamp() >= campaign.deadline {
            return Err(CrowdfundError::DeadlinePassed);
        }
        if amount <= 0 {
            return Err(CrowdfundError::ZeroAmount);
        }
        if contributor == campaign.creator {
            return Err(CrowdfundError::CreatorSelfContribution);
        }

        let token_address = storage::get_token(&env)?;
        let balance = storage::get_contribution(&env, campaign_id, &contributor);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;
        let raised_amount = campaign
            .raised_amount
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;

        // A balance only drops back to zero through a refund, which needs the
        // deadline to have passed, so zero here means a first contribution.
        if balance == 0 {
            let mut contributors = storage::get_contributors(&env, campaign_id);
            contributors.push_back(contributor.clone());
            storage::save_contributors(&env, campaign_id, &contributors);
        } else {
            storage::extend_campaign(&env, campaign_id);
        }

        storage::set_contribution(&env, campaign_id, &contributor, new_balance);
        campaign.raised_amount = raised_amount;

        let goal_reached = raised_amount >= campaign.goal_amount;
        if goal_reached {
            campaign.status = CampaignStatus::Successful;
        }
        storage::save_campaign(&env, &campaign);
        storage::extend_instance(&env);

        settlement::collect_contribution(&env, &token_address, &contributor, amount);

        if goal_reached {
            events::emit_campaign_successful(
                &env,
                events::CampaignSuccessfulEvent {
                    campaign_id,
                    raised_amount,
                },
            );
        }

        events::emit_contribution_made(
            &env,
            events::ContributionMadeEvent {
                campaign_id,
                contributor,
                amount,
                raised_amount,
            },
        );

        Ok(())
    }

    /// Resolve a campaign after its deadline.
    ///
    /// If the goal was met and proceeds have not been withdrawn yet, the creator
    /// receives `raised_amount` minus the platform fee. Otherwise the caller is
    /// refunded their own outstanding balance.
    pub fn settle(env: Env, campaign_id: CampaignId, caller: Address) -> Result<(), CrowdfundError> {
        caller.require_auth();

        let campaign = storage::load_campaign(&env, campaign_id)?;

        if env.ledger().timestamp() < campaign.deadline {
            return Err(CrowdfundError::DeadlineNotReached);
        }
        storage::extend_instance(&env);

        if campaign.raised_amount >= campaign.goal_amount
            && campaign.status != CampaignStatus::Withdrawn
        {
            settlement::withdraw_funds(&env, campaign, &caller)
        } else {
            settlement::refund_contribution(&env, campaign, &caller)
        }
    }

    /// Emergency sweep of the whole contract balance (owner only)
    pub fn emergency_withdraw(env: Env, caller: Address) -> Result<(), CrowdfundError> {
        caller.require_auth();

        let owner = storage::get_owner(&env).map_err(|_| CrowdfundError::Unauthorized)?;
        if caller != owner {
            return Err(CrowdfundError::Unauthorized);
        }

        let token_address = storage::get_token(&env)?;
        let amount = settlement::sweep_balance(&env, &token_address, &owner);

        log!(&env, "emergency withdraw", amount);

        events::emit_emergency_withdraw(&env, events::EmergencyWithdrawEvent { owner, amount });

        Ok(())
    }

    /// View functions
    pub fn get_campaign_details(env: Env, campaign_id: CampaignId) -> Result<CampaignDetails, CrowdfundError> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        let contributor_count = storage::get_contributors(&env, campaign_id).len();
        Ok(CampaignDetails::from_campaign(campaign, contributor_count))
    }

    pub fn get_contribution(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CrowdfundError> {
        storage::load_campaign(&env, campaign_id)?;
        Ok(storage::get_contribution(&env, campaign_id, &contributor))
    }

    pub fn get_total_campaigns(env: Env) -> u64 {
        storage::get_next_campaign_id(&env)
    }

    pub fn get_campaign_contributors(env: Env, campaign_id: CampaignId) -> Result<Vec<Address>, CrowdfundError> {
        storage::load_campaign(&env, campaign_id)?;
        Ok(storage::get_contributors(&env, campaign_id))
    }

    pub fn get_owner(env: Env) -> Result<Address, CrowdfundError> {
        storage::get_owner(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, CrowdfundError> {
        storage::get_token(&env)
    }

    pub fn get_platform_fee_bps() -> u32 {
        FEE_RATE_BPS
    }

    pub fn get_contract_balance(env: Env) -> Result<i128, CrowdfundError> {
        let token_address = storage::get_token(&env)?;
        Ok(settlement::contract_balance(&env, &token_address))
    }
}
