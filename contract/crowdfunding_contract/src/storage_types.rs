use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address), // (CampaignId, Contributor) -> i128
    Contributors(CampaignId),          // CampaignId -> Vec<Address>, first-contribution order
}

pub type CampaignId = u64;

/// Lifecycle of a campaign. Transitions only move forward:
/// `Active -> Successful -> Withdrawn` or `Active -> Failed`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Successful,
    Failed,
    Withdrawn,
}

// Campaign record. The contribution ledger and contributor list live under
// their own persistent keys so the record stays a fixed size.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub goal_amount: i128,
    pub raised_amount: i128,
    pub deadline: u64,
    pub status: CampaignStatus,
    pub created_at: u64,
}

/// Read-only view returned by `get_campaign_details`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignDetails {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub goal_amount: i128,
    pub raised_amount: i128,
    pub deadline: u64,
    pub status: CampaignStatus,
    pub created_at: u64,
    pub contributor_count: u32,
}

impl CampaignDetails {
    pub fn from_campaign(campaign: Campaign, contributor_count: u32) -> Self {
        CampaignDetails {
            id: campaign.id,
            creator: campaign.creator,
            title: campaign.title,
            description: campaign.description,
            goal_amount: campaign.goal_amount,
            raised_amount: campaign.raised_amount,
            deadline: campaign.deadline,
            status: campaign.status,
            created_at: campaign.created_at,
            contributor_count,
        }
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidInput = 3,
    NotFound = 4,
    CampaignNotActive = 5,
    DeadlinePassed = 6,
    DeadlineNotReached = 7,
    ZeroAmount = 8,
    CreatorSelfContribution = 9,
    Unauthorized = 10,
    NotSuccessful = 11,
    NoContributionFound = 12,
    ArithmeticOverflow = 13,
}

// Constants
pub const FEE_RATE_BPS: u32 = 25; // 0.25%
pub const FEE_DENOMINATOR: u32 = 10000; // 100% in basis points
pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 365;
pub const SECONDS_PER_DAY: u64 = 86400;
pub const LEDGERS_PER_DAY: u32 = 17280;
pub const TTL_INSTANCE: u32 = LEDGERS_PER_DAY * 30; // 30 days
// Long enough for the longest campaign; every write and settlement re-extends.
pub const TTL_PERSISTENT: u32 = LEDGERS_PER_DAY * MAX_DURATION_DAYS;
