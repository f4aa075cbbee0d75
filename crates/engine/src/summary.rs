//! View types handed to the presentation layer after a calculation pass.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{MoneyCents, Participant, SplitMode};

/// One participant's row in the summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareView {
    pub participant_id: Uuid,
    pub name: String,
    pub subtotal_share: MoneyCents,
    pub tax_share: MoneyCents,
    pub tip_share: MoneyCents,
    pub amount_owed: MoneyCents,
}

impl From<&Participant> for ShareView {
    fn from(participant: &Participant) -> Self {
        Self {
            participant_id: participant.id,
            name: participant.name.clone(),
            subtotal_share: participant.subtotal_share,
            tax_share: participant.tax_share,
            tip_share: participant.tip_share,
            amount_owed: participant.amount_owed,
        }
    }
}

/// Bill-level totals plus per-participant rows.
///
/// `subtotal` is the amount the pass actually used: the user-entered value in
/// even mode, the item-derived sum in itemized mode. Callers that mirror the
/// subtotal field on screen display this value; the engine never writes it
/// back into the session config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSummary {
    pub mode: SplitMode,
    pub subtotal: MoneyCents,
    pub tax_amount: MoneyCents,
    pub tip_amount: MoneyCents,
    pub grand_total: MoneyCents,
    /// Uniform per-person amount; present in even mode only.
    pub per_person: Option<MoneyCents>,
    pub shares: Vec<ShareView>,
}
