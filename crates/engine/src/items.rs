//! The module contains the representation of a bill item.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::MoneyCents;

/// A priced line on the bill.
///
/// An item starts with no assignees. Assignment is a set relation kept in
/// insertion order: toggling membership is idempotent, and the session purges
/// an id from every item when the participant is removed.
///
/// An item with zero assignees still counts toward the derived subtotal (and
/// therefore the tax/tip base) while crediting no individual share, the
/// "orphaned cost" case.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub cost: MoneyCents,
    pub assignees: Vec<Uuid>,
}

impl Item {
    pub fn new(name: String, cost: MoneyCents) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            cost,
            assignees: Vec::new(),
        }
    }

    /// Adds or removes a participant from the assignee set.
    ///
    /// Idempotent: re-adding a present id or removing an absent one changes
    /// nothing. Returns `true` when the set changed.
    pub fn set_assignee(&mut self, participant_id: Uuid, included: bool) -> bool {
        if included {
            if self.assignees.contains(&participant_id) {
                return false;
            }
            self.assignees.push(participant_id);
            true
        } else {
            match self.assignees.iter().position(|id| *id == participant_id) {
                Some(index) => {
                    self.assignees.remove(index);
                    true
                }
                None => false,
            }
        }
    }

    /// Removes a participant id if present (referential-integrity purge).
    pub fn purge_assignee(&mut self, participant_id: Uuid) {
        self.assignees.retain(|id| *id != participant_id);
    }

    #[must_use]
    pub fn is_assigned(&self, participant_id: Uuid) -> bool {
        self.assignees.contains(&participant_id)
    }
}
