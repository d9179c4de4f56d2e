use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignLaunchedEvent {
    pub campaign_id: u32,
    pub owner: Address,
    pub goal: i128,
    pub deadline: u64,
    pub drawdown_interval: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionMadeEvent {
    pub campaign_id: u32,
    pub contributor: Address,
    pub amount: i128,
    pub amount_collected: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignCancelledEvent {
    pub campaign_id: u32,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionRefundedEvent {
    pub campaign_id: u32,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsDrawnDownEvent {
    pub campaign_id: u32,
    pub owner: Address,
    pub amount: i128,
    pub drawn_down: i128,
}

pub fn emit_campaign_launched(env: &soroban_sdk::Env, event: CampaignLaunchedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_launched"),),
        event,
    );
}

pub fn emit_contribution_made(env: &soroban_sdk::Env, event: ContributionMadeEvent) {
    env.events().publish(
        (Symbol::new(env, "contribution_made"),),
        event,
    );
}

pub fn emit_campaign_cancelled(env: &soroban_sdk::Env, event: CampaignCancelledEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_cancelled"),),
        event,
    );
}

pub fn emit_contribution_refunded(env: &soroban_sdk::Env, event: ContributionRefundedEvent) {
    env.events().publish(
        (Symbol::new(env, "contribution_refunded"),),
        event,
    );
}

pub fn emit_funds_drawn_down(env: &soroban_sdk::Env, event: FundsDrawnDownEvent) {
    env.events().publish(
        (Symbol::new(env, "funds_drawn_down"),),
        event,
    );
}
