use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    PayToken,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(u32),
    Contribution(u32, Address),
}

// One funding round. All gating state lives here; status is derived
// from these fields and the ledger time, never stored.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub owner: Address,
    pub goal: i128,
    pub deadline: u64,
    pub drawdown_interval: u64,
    pub amount_collected: i128,
    pub drawn_down: i128,
    pub last_drawdown: u64,
    pub cancelled: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Open,
    GoalMet,
    Expired,
    Cancelled,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidAmount = 4,
    CampaignCancelled = 5,
    DeadlineReached = 6,
    GoalAlreadyMet = 7,
    NotOwner = 8,
    AlreadyCancelled = 9,
    NoContribution = 10,
    StillOpen = 11,
    GoalNotMet = 12,
    InsufficientFunds = 13,
}

// Constants
pub const DRAWDOWN_TRANCHES: i128 = 10;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
