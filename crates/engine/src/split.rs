//! Allocation strategies for a calculation pass.
//!
//! Two strategies behind one enum: an even split of the grand total, and an
//! itemized split where each item's cost is divided among its assignees and
//! tax/tip follow each participant's share of the subtotal. Amounts at rest
//! are integer cents; the pass accumulates in fractional cents (`f64`) and
//! rounds once per presented amount, half away from zero.

use serde::{Deserialize, Serialize};

use crate::{Item, MoneyCents, Participant, Rate};

/// How the bill is divided among participants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Grand total divided equally, regardless of consumption.
    #[default]
    Even,
    /// Per-item shares for assignees, tax/tip proportional to subtotal share.
    Itemized,
}

impl SplitMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SplitMode::Even => "even",
            SplitMode::Itemized => "itemized",
        }
    }
}

/// Unrounded bill-level totals, in fractional cents.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RawTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub tip_amount: f64,
    pub grand_total: f64,
}

/// Computes tax, tip, and grand total from the effective subtotal.
///
/// The tip is applied to the tax-inclusive amount, not the bare subtotal
/// (tip-on-tax). Both modes share these totals.
pub(crate) fn bill_totals(subtotal: MoneyCents, tax_rate: Rate, tip_rate: Rate) -> RawTotals {
    let subtotal = subtotal.cents() as f64;
    let tax_amount = subtotal * tax_rate.as_fraction();
    let bill_plus_tax = subtotal + tax_amount;
    let tip_amount = bill_plus_tax * tip_rate.as_fraction();

    RawTotals {
        subtotal,
        tax_amount,
        tip_amount,
        grand_total: bill_plus_tax + tip_amount,
    }
}

/// Rounds fractional cents to a whole-cent amount, half away from zero.
pub(crate) fn round_cents(raw: f64) -> MoneyCents {
    MoneyCents::new(raw.round() as i64)
}

/// Divides the grand total equally among all participants.
///
/// Sub-shares are zeroed and left unused. Returns the uniform per-person
/// amount.
pub(crate) fn even_split(participants: &mut [Participant], totals: &RawTotals) -> MoneyCents {
    let per_person = round_cents(totals.grand_total / participants.len() as f64);
    for participant in participants.iter_mut() {
        participant.reset_shares();
        participant.amount_owed = per_person;
    }
    per_person
}

/// Splits each item among its assignees, then allocates tax and tip in
/// proportion to each participant's share of the subtotal.
///
/// Items with zero assignees contribute to the subtotal (and so to the
/// tax/tip base) but to nobody's share. Assignee ids with no matching
/// participant are skipped. A participant with no assigned items owes
/// nothing.
///
/// Each sub-share is rounded independently and `amount_owed` is their sum,
/// so the per-participant breakdown always adds up exactly.
pub(crate) fn itemized_split(
    participants: &mut [Participant],
    items: &[Item],
    totals: &RawTotals,
) {
    let mut raw_shares = vec![0.0_f64; participants.len()];

    for item in items {
        let assignee_count = item.assignees.len();
        if assignee_count == 0 {
            continue;
        }
        let per_assignee = item.cost.cents() as f64 / assignee_count as f64;
        for assignee_id in &item.assignees {
            if let Some(position) = participants.iter().position(|p| p.id == *assignee_id) {
                raw_shares[position] += per_assignee;
            }
        }
    }

    for (participant, raw_share) in participants.iter_mut().zip(raw_shares) {
        participant.reset_shares();
        if raw_share > 0.0 {
            let weight = raw_share / totals.subtotal;
            participant.subtotal_share = round_cents(raw_share);
            participant.tax_share = round_cents(totals.tax_amount * weight);
            participant.tip_share = round_cents(totals.tip_amount * weight);
            participant.amount_owed =
                participant.subtotal_share + participant.tax_share + participant.tip_share;
        }
    }
}
