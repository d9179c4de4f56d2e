#![no_std]

mod campaign;
mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env};
use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

pub use campaign::{drawdown_allowance, status};
pub use storage_types::{Campaign, CampaignStatus, Error};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the registry with the payment token.
    pub fn initialize(e: Env, token: Address) {
        if e.storage().instance().has(&DataKey::PayToken) {
            panic_with_error!(&e, Error::AlreadyInitialized);
        }

        e.storage().instance().set(&DataKey::PayToken, &token);
        e.storage().instance().set(&DataKey::CampaignCount, &0u32);
        extend_instance(&e);
    }

    /// Launch a new campaign and return its id.
    ///
    /// Ids are assigned densely in creation order starting at zero.
    /// The contribution deadline is fixed at launch time plus
    /// `contribution_window` seconds; a zero `drawdown_interval`
    /// disables release throttling for this campaign.
    pub fn launch_campaign(
        e: Env,
        creator: Address,
        goal: i128,
        contribution_window: u64,
        drawdown_interval: u64,
    ) -> u32 {
        creator.require_auth();

        let campaign_id = campaign_count(&e);
        let now = e.ledger().timestamp();

        let campaign = Campaign {
            owner: creator.clone(),
            goal,
            deadline: now.saturating_add(contribution_window),
            drawdown_interval,
            amount_collected: 0,
            drawn_down: 0,
            last_drawdown: now,
            cancelled: false,
        };

        save_campaign(&e, campaign_id, &campaign);
        e.storage()
            .instance()
            .set(&DataKey::CampaignCount, &(campaign_id + 1));
        extend_instance(&e);

        events::emit_campaign_launched(
            &e,
            events::CampaignLaunchedEvent {
                campaign_id,
                owner: creator,
                goal,
                deadline: campaign.deadline,
                drawdown_interval,
            },
        );

        campaign_id
    }

    /// Escrow `amount` from `contributor` toward the campaign goal.
    ///
    /// A contribution that carries the total past the goal is accepted
    /// in full; over-funding is not capped.
    pub fn contribute(e: Env, campaign_id: u32, contributor: Address, amount: i128) {
        contributor.require_auth();

        if amount <= 0 {
            panic_with_error!(&e, Error::InvalidAmount);
        }

        let mut campaign = load_campaign(&e, campaign_id);
        let now = e.ledger().timestamp();

        // Cancellation wins over the deadline, the deadline over the goal.
        if campaign.cancelled {
            panic_with_error!(&e, Error::CampaignCancelled);
        }
        if now > campaign.deadline {
            panic_with_error!(&e, Error::DeadlineReached);
        }
        if campaign.amount_collected >= campaign.goal {
            panic_with_error!(&e, Error::GoalAlreadyMet);
        }

        token_client(&e).transfer(&contributor, &e.current_contract_address(), &amount);

        let key = PersistentKey::Contribution(campaign_id, contributor.clone());
        let escrowed: i128 = e.storage().persistent().get(&key).unwrap_or(0);
        e.storage().persistent().set(&key, &(escrowed + amount));
        extend_persistent(&e, &key);

        campaign.amount_collected += amount;
        save_campaign(&e, campaign_id, &campaign);

        events::emit_contribution_made(
            &e,
            events::ContributionMadeEvent {
                campaign_id,
                contributor,
                amount,
                amount_collected: campaign.amount_collected,
            },
        );
    }

    /// Cancel the campaign, making all pledges refundable.
    ///
    /// Irreversible. Moves no funds by itself; contributors reclaim
    /// theirs through `withdraw_contribution`.
    pub fn cancel(e: Env, campaign_id: u32, caller: Address) {
        caller.require_auth();

        let mut campaign = load_campaign(&e, campaign_id);
        if caller != campaign.owner {
            panic_with_error!(&e, Error::NotOwner);
        }
        if campaign.cancelled {
            panic_with_error!(&e, Error::AlreadyCancelled);
        }

        campaign.cancelled = true;
        save_campaign(&e, campaign_id, &campaign);

        events::emit_campaign_cancelled(
            &e,
            events::CampaignCancelledEvent {
                campaign_id,
                owner: campaign.owner,
            },
        );
    }

    /// Refund the caller's escrowed contribution in full.
    ///
    /// Only available once the campaign is cancelled or has expired
    /// short of its goal. A campaign that met its goal never refunds,
    /// even past its deadline.
    pub fn withdraw_contribution(e: Env, campaign_id: u32, contributor: Address) {
        contributor.require_auth();

        let mut campaign = load_campaign(&e, campaign_id);
        let key = PersistentKey::Contribution(campaign_id, contributor.clone());
        let escrowed: i128 = e.storage().persistent().get(&key).unwrap_or(0);
        if escrowed == 0 {
            panic_with_error!(&e, Error::NoContribution);
        }

        match campaign::status(&campaign, e.ledger().timestamp()) {
            CampaignStatus::Cancelled | CampaignStatus::Expired => {}
            _ => panic_with_error!(&e, Error::StillOpen),
        }

        // Ledger entry goes before the payout.
        e.storage().persistent().remove(&key);
        campaign.amount_collected -= escrowed;
        save_campaign(&e, campaign_id, &campaign);

        token_client(&e).transfer(&e.current_contract_address(), &contributor, &escrowed);

        events::emit_contribution_refunded(
            &e,
            events::ContributionRefundedEvent {
                campaign_id,
                contributor,
                amount: escrowed,
            },
        );
    }

    /// Pay `amount` of collected funds out to the owner, subject to
    /// the release schedule.
    pub fn draw_down_funds(e: Env, campaign_id: u32, caller: Address, amount: i128) {
        caller.require_auth();

        let mut campaign = load_campaign(&e, campaign_id);
        if caller != campaign.owner {
            panic_with_error!(&e, Error::NotOwner);
        }
        if amount <= 0 {
            panic_with_error!(&e, Error::InvalidAmount);
        }

        let now = e.ledger().timestamp();
        if campaign::status(&campaign, now) != CampaignStatus::GoalMet {
            panic_with_error!(&e, Error::GoalNotMet);
        }
        if amount > campaign::drawdown_allowance(&campaign, now) {
            panic_with_error!(&e, Error::InsufficientFunds);
        }

        // The schedule clock advances only on success.
        campaign.drawn_down += amount;
        campaign.last_drawdown = now;
        save_campaign(&e, campaign_id, &campaign);

        token_client(&e).transfer(&e.current_contract_address(), &campaign.owner, &amount);

        events::emit_funds_drawn_down(
            &e,
            events::FundsDrawnDownEvent {
                campaign_id,
                owner: campaign.owner,
                amount,
                drawn_down: campaign.drawn_down,
            },
        );
    }

    /// Campaign record for `campaign_id`.
    pub fn get_campaign(e: Env, campaign_id: u32) -> Campaign {
        load_campaign(&e, campaign_id)
    }

    /// Number of campaigns launched so far.
    pub fn campaign_count(e: Env) -> u32 {
        campaign_count(&e)
    }

    /// Amount currently escrowed for `contributor`; zero if none.
    pub fn get_contribution(e: Env, campaign_id: u32, contributor: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&PersistentKey::Contribution(campaign_id, contributor))
            .unwrap_or(0)
    }

    /// Derived status at the current ledger time.
    pub fn get_status(e: Env, campaign_id: u32) -> CampaignStatus {
        let campaign = load_campaign(&e, campaign_id);
        campaign::status(&campaign, e.ledger().timestamp())
    }

    /// The configured payment token.
    pub fn pay_token(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::PayToken)
            .unwrap_or_else(|| panic_with_error!(&e, Error::NotInitialized))
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn campaign_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or_else(|| panic_with_error!(e, Error::NotInitialized))
}

fn load_campaign(e: &Env, campaign_id: u32) -> Campaign {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(e, Error::CampaignNotFound))
}

fn save_campaign(e: &Env, campaign_id: u32, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign_id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

fn token_client<'a>(e: &'a Env) -> token::Client<'a> {
    let token: Address = e
        .storage()
        .instance()
        .get(&DataKey::PayToken)
        .unwrap_or_else(|| panic_with_error!(e, Error::NotInitialized));
    token::Client::new(e, &token)
}
