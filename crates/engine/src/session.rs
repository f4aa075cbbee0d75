//! The `BillSession` owns the participants, items, and rates of one bill.

use tracing::debug;
use uuid::Uuid;

use crate::{
    Item, MoneyCents, Participant, Rate, SplitMode, input, split,
    summary::{BillSummary, ShareView},
};

/// User-controlled bill parameters.
///
/// `subtotal` is only consulted in even mode; itemized mode derives the
/// subtotal from the item costs and leaves this value untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct BillConfig {
    pub subtotal: MoneyCents,
    pub tax_rate: Rate,
    pub tip_rate: Rate,
}

/// One bill being split: the owned aggregate behind every engine operation.
///
/// Mutating commands (`add_*`, `remove_*`, `set_*`) keep the registries
/// consistent; [`compute_shares`] is the explicit query that produces a
/// summary. Callers decide when to recompute; the session never recomputes
/// on its own.
///
/// [`compute_shares`]: BillSession::compute_shares
#[derive(Clone, Debug, Default)]
pub struct BillSession {
    participants: Vec<Participant>,
    items: Vec<Item>,
    config: BillConfig,
    mode: SplitMode,
}

impl BillSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything back to a pristine session ("new bill").
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::default();
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    #[must_use]
    pub fn config(&self) -> &BillConfig {
        &self.config
    }

    pub fn participant(&self, id: Uuid) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Adds a participant with zeroed shares.
    ///
    /// The name is trimmed and inner whitespace collapsed; a blank name is a
    /// no-op and returns `None`.
    pub fn add_participant(&mut self, name: &str) -> Option<Uuid> {
        let name = input::normalize_name(name);
        if name.is_empty() {
            return None;
        }

        let participant = Participant::new(name);
        let id = participant.id;
        debug!(participant_id = %id, name = %participant.name, "participant added");
        self.participants.push(participant);
        Some(id)
    }

    /// Removes a participant and purges its id from every item's assignees.
    ///
    /// Returns `false` (no-op) for an unknown id.
    pub fn remove_participant(&mut self, id: Uuid) -> bool {
        match self.participants.iter().position(|p| p.id == id) {
            Some(index) => {
                self.participants.remove(index);
                for item in &mut self.items {
                    item.purge_assignee(id);
                }
                debug!(participant_id = %id, "participant removed");
                true
            }
            None => false,
        }
    }

    /// Adds an item with no assignees.
    ///
    /// A blank name or non-positive cost is a no-op and returns `None`.
    pub fn add_item(&mut self, name: &str, cost: MoneyCents) -> Option<Uuid> {
        let name = input::normalize_name(name);
        if name.is_empty() || !cost.is_positive() {
            return None;
        }

        let item = Item::new(name, cost);
        let id = item.id;
        debug!(item_id = %id, name = %item.name, cost = %item.cost, "item added");
        self.items.push(item);
        Some(id)
    }

    /// Removes an item. Returns `false` (no-op) for an unknown id.
    pub fn remove_item(&mut self, id: Uuid) -> bool {
        match self.items.iter().position(|i| i.id == id) {
            Some(index) => {
                self.items.remove(index);
                debug!(item_id = %id, "item removed");
                true
            }
            None => false,
        }
    }

    /// Adds or removes a participant from an item's assignee set.
    ///
    /// Idempotent. Only links ids that exist in both registries; unassigning
    /// works regardless of whether the participant still exists. Returns
    /// whether the set changed.
    pub fn set_assignee(&mut self, item_id: Uuid, participant_id: Uuid, included: bool) -> bool {
        if included && self.participant(participant_id).is_none() {
            return false;
        }
        match self.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                let changed = item.set_assignee(participant_id, included);
                if changed {
                    debug!(item_id = %item_id, participant_id = %participant_id, included, "assignment toggled");
                }
                changed
            }
            None => false,
        }
    }

    pub fn set_mode(&mut self, mode: SplitMode) {
        debug!(mode = mode.as_str(), "split mode set");
        self.mode = mode;
    }

    pub fn set_subtotal(&mut self, subtotal: MoneyCents) {
        self.config.subtotal = subtotal;
    }

    pub fn set_tax_rate(&mut self, rate: Rate) {
        self.config.tax_rate = rate;
    }

    pub fn set_tip_rate(&mut self, rate: Rate) {
        self.config.tip_rate = rate;
    }

    /// Raw-text setters for presentation-layer input; invalid or negative
    /// values coerce to zero (see [`input`]).
    pub fn set_subtotal_input(&mut self, raw: &str) {
        self.config.subtotal = input::parse_money_input(raw);
    }

    pub fn set_tax_rate_input(&mut self, raw: &str) {
        self.config.tax_rate = input::parse_rate_input(raw);
    }

    pub fn set_tip_rate_input(&mut self, raw: &str) {
        self.config.tip_rate = input::parse_rate_input(raw);
    }

    /// Sum of all item costs: the subtotal itemized mode works from, and the
    /// value a front end shows in the subtotal field while itemized.
    #[must_use]
    pub fn derived_subtotal(&self) -> MoneyCents {
        self.items.iter().map(|item| item.cost).sum()
    }

    /// The subtotal the next calculation pass will use for the current mode.
    #[must_use]
    pub fn effective_subtotal(&self) -> MoneyCents {
        match self.mode {
            SplitMode::Even => self.config.subtotal,
            SplitMode::Itemized => self.derived_subtotal(),
        }
    }

    /// Runs a full calculation pass for the current mode.
    ///
    /// Recomputes every participant's shares from scratch and returns the
    /// bill-level totals. With no participants or a non-positive effective
    /// subtotal there is nothing to compute: participant fields are left
    /// untouched and `None` ("no summary") is returned.
    pub fn compute_shares(&mut self) -> Option<BillSummary> {
        let subtotal = self.effective_subtotal();
        if !subtotal.is_positive() || self.participants.is_empty() {
            debug!(
                subtotal = %subtotal,
                participants = self.participants.len(),
                "nothing to compute"
            );
            return None;
        }

        let totals = split::bill_totals(subtotal, self.config.tax_rate, self.config.tip_rate);
        let per_person = match self.mode {
            SplitMode::Even => Some(split::even_split(&mut self.participants, &totals)),
            SplitMode::Itemized => {
                split::itemized_split(&mut self.participants, &self.items, &totals);
                None
            }
        };

        let summary = BillSummary {
            mode: self.mode,
            subtotal,
            tax_amount: split::round_cents(totals.tax_amount),
            tip_amount: split::round_cents(totals.tip_amount),
            grand_total: split::round_cents(totals.grand_total),
            per_person,
            shares: self.participants.iter().map(ShareView::from).collect(),
        };
        debug!(
            mode = self.mode.as_str(),
            subtotal = %summary.subtotal,
            grand_total = %summary.grand_total,
            "shares computed"
        );
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_two() -> (BillSession, Uuid, Uuid) {
        let mut session = BillSession::new();
        let ada = session.add_participant("Ada").unwrap();
        let ben = session.add_participant("Ben").unwrap();
        (session, ada, ben)
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut session = BillSession::new();

        assert!(session.add_participant("   ").is_none());
        assert!(session.add_item("  ", MoneyCents::new(100)).is_none());
        assert!(session.participants().is_empty());
        assert!(session.items().is_empty());
    }

    #[test]
    fn names_are_normalized_on_add() {
        let mut session = BillSession::new();
        let id = session.add_participant("  Ada   Lovelace ").unwrap();

        assert_eq!(session.participant(id).unwrap().name, "Ada Lovelace");
    }

    #[test]
    fn non_positive_item_cost_is_rejected() {
        let mut session = BillSession::new();

        assert!(session.add_item("Pizza", MoneyCents::ZERO).is_none());
        assert!(session.add_item("Pizza", MoneyCents::new(-100)).is_none());
        assert!(session.add_item("Pizza", MoneyCents::new(100)).is_some());
    }

    #[test]
    fn removing_a_participant_purges_assignments() {
        let (mut session, ada, ben) = session_with_two();
        let pizza = session.add_item("Pizza", MoneyCents::new(10_00)).unwrap();
        session.set_assignee(pizza, ada, true);
        session.set_assignee(pizza, ben, true);

        assert!(session.remove_participant(ada));

        let item = session.item(pizza).unwrap();
        assert!(!item.is_assigned(ada));
        assert!(item.is_assigned(ben));
    }

    #[test]
    fn assigning_unknown_ids_is_a_no_op() {
        let (mut session, ada, _) = session_with_two();
        let pizza = session.add_item("Pizza", MoneyCents::new(10_00)).unwrap();

        assert!(!session.set_assignee(Uuid::new_v4(), ada, true));
        assert!(!session.set_assignee(pizza, Uuid::new_v4(), true));
        assert!(session.item(pizza).unwrap().assignees.is_empty());
    }

    #[test]
    fn derived_subtotal_sums_item_costs() {
        let mut session = BillSession::new();
        session.add_item("Pizza", MoneyCents::new(10_00));
        session.add_item("Wine", MoneyCents::new(24_50));

        assert_eq!(session.derived_subtotal(), MoneyCents::new(34_50));
    }

    #[test]
    fn itemized_mode_ignores_the_entered_subtotal() {
        let (mut session, ada, _) = session_with_two();
        session.set_subtotal(MoneyCents::new(999_99));
        session.set_mode(SplitMode::Itemized);
        let pizza = session.add_item("Pizza", MoneyCents::new(10_00)).unwrap();
        session.set_assignee(pizza, ada, true);

        let summary = session.compute_shares().unwrap();

        assert_eq!(summary.subtotal, MoneyCents::new(10_00));
        // The entered value is left as the user typed it.
        assert_eq!(session.config().subtotal, MoneyCents::new(999_99));
    }

    #[test]
    fn no_summary_without_participants_or_subtotal() {
        let mut session = BillSession::new();
        session.set_subtotal(MoneyCents::new(50_00));
        assert!(session.compute_shares().is_none());

        let mut session = BillSession::new();
        session.add_participant("Ada");
        assert!(session.compute_shares().is_none());
    }

    #[test]
    fn raw_input_setters_coerce_to_zero() {
        let mut session = BillSession::new();
        session.set_subtotal_input("not a number");
        session.set_tax_rate_input("-8");
        session.set_tip_rate_input("18");

        assert_eq!(session.config().subtotal, MoneyCents::ZERO);
        assert_eq!(session.config().tax_rate, Rate::ZERO);
        assert_eq!(session.config().tip_rate, Rate::from_percent(18));
    }

    #[test]
    fn reset_restores_a_pristine_session() {
        let (mut session, _, _) = session_with_two();
        session.add_item("Pizza", MoneyCents::new(10_00));
        session.set_mode(SplitMode::Itemized);
        session.set_tip_rate(Rate::from_percent(20));

        session.reset();

        assert!(session.participants().is_empty());
        assert!(session.items().is_empty());
        assert_eq!(session.mode(), SplitMode::Even);
        assert_eq!(session.config().tip_rate, Rate::ZERO);
    }
}
