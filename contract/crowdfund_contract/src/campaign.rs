use crate::storage_types::{Campaign, CampaignStatus, DRAWDOWN_TRANCHES};

/// Derive the campaign status from its stored fields and the current
/// ledger time.
///
/// Cancellation absorbs everything else. A campaign that reached its
/// goal stays `GoalMet` no matter how far past the deadline the clock
/// moves; only an underfunded campaign expires.
pub fn status(campaign: &Campaign, now: u64) -> CampaignStatus {
    if campaign.cancelled {
        CampaignStatus::Cancelled
    } else if campaign.amount_collected >= campaign.goal {
        CampaignStatus::GoalMet
    } else if now > campaign.deadline {
        CampaignStatus::Expired
    } else {
        CampaignStatus::Open
    }
}

/// Amount the owner may draw down at `now`.
///
/// With no interval configured the full undrawn balance is available
/// at once. Otherwise funds release in tranches of one tenth of the
/// collected total: the first tranche unlocks with the goal itself,
/// one more per whole interval elapsed since the last successful
/// drawdown. Partial intervals grant nothing.
pub fn drawdown_allowance(campaign: &Campaign, now: u64) -> i128 {
    let undrawn = campaign.amount_collected - campaign.drawn_down;
    if campaign.drawdown_interval == 0 {
        return undrawn;
    }

    let tranche = campaign.amount_collected / DRAWDOWN_TRANCHES;
    let elapsed = now.saturating_sub(campaign.last_drawdown);
    let mut unlocked = elapsed / campaign.drawdown_interval;
    if campaign.drawn_down == 0 {
        unlocked = unlocked.saturating_add(1);
    }

    let released = tranche.checked_mul(unlocked as i128).unwrap_or(undrawn);
    undrawn.min(released)
}
