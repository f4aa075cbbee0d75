//! The module contains the `Participant` struct and its implementation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::MoneyCents;

/// A person splitting the bill.
///
/// The three sub-share fields and `amount_owed` are outputs of the
/// calculation pass: they are zeroed and recomputed from scratch on every
/// pass, never accumulated across passes. In itemized mode `amount_owed`
/// always equals `subtotal_share + tax_share + tip_share`; in even mode it
/// carries the uniform grand-total share and the sub-shares stay zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identifier for this participant.
    ///
    /// Generated once per session, so the participant can be renamed without
    /// breaking item assignments.
    pub id: Uuid,
    pub name: String,
    pub subtotal_share: MoneyCents,
    pub tax_share: MoneyCents,
    pub tip_share: MoneyCents,
    pub amount_owed: MoneyCents,
}

impl Participant {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            subtotal_share: MoneyCents::ZERO,
            tax_share: MoneyCents::ZERO,
            tip_share: MoneyCents::ZERO,
            amount_owed: MoneyCents::ZERO,
        }
    }

    /// Zeroes every computed share ahead of a calculation pass.
    pub fn reset_shares(&mut self) {
        self.subtotal_share = MoneyCents::ZERO;
        self.tax_share = MoneyCents::ZERO;
        self.tip_share = MoneyCents::ZERO;
        self.amount_owed = MoneyCents::ZERO;
    }
}
