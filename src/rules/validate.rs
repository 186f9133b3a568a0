//! Action validation.
//!
//! `validate` checks a proposed action against the table and the acting
//! player's hand without touching either. Checks run in a fixed order, so
//! an action that breaks several rules always reports the same reason:
//!
//! 1. The card must be in hand.
//! 2. A trail is legal unless the player controls a build.
//! 3. Every referenced handle must exist and appear exactly once.
//! 4. A face card takes single cards of its own rank, one per set, and
//!    never builds.
//! 5. A numeric card's target is its value plus every `add` pile; each set
//!    must sum to the target. Compound builds and face cards cannot be added
//!    to, and face cards never count toward a sum.
//! 6. A build must leave the player another card that can capture it.

use rustc_hash::FxHashSet;

use super::error::RuleError;
use crate::core::{Action, Card, PileId, PlayerId};
use crate::table::{Pile, TableView};

/// Check `action` for `player` holding `hand`.
///
/// Never mutates; validating the same action against the same state always
/// gives the same answer.
pub fn validate<T>(
    table: &T,
    player: PlayerId,
    hand: &[Card],
    action: &Action,
) -> Result<(), RuleError>
where
    T: TableView + ?Sized,
{
    let card = action.card();
    if !hand.contains(&card) {
        return Err(RuleError::InvalidCard { card });
    }

    match action {
        Action::Trail { .. } => {
            return if table.controls_build(player) {
                Err(RuleError::TrailWhileBuilding)
            } else {
                Ok(())
            };
        }
        Action::Build { add, sets, .. } if add.is_empty() && sets.is_empty() => {
            return Err(RuleError::NoPiles);
        }
        Action::Capture { sets, .. } if sets.is_empty() => {
            return Err(RuleError::NoPiles);
        }
        _ => {}
    }

    check_handles(table, action)?;

    if card.is_face() {
        return check_face(table, action);
    }

    let target = check_sums(table, action)?;

    if action.is_build() && !can_capture_later(hand, card, target) {
        return Err(RuleError::UncapturableBuild { target });
    }

    Ok(())
}

/// Value of the build an action would create: the card plus its `add` piles.
///
/// Unknown handles contribute nothing; call only on validated actions.
pub fn build_target<T>(table: &T, action: &Action) -> u32
where
    T: TableView + ?Sized,
{
    let added: u32 = action
        .add()
        .iter()
        .filter_map(|&id| table.pile(id))
        .map(|pile| u32::from(pile.value()))
        .sum();
    u32::from(action.card().value()) + added
}

fn lookup<T>(table: &T, id: PileId) -> Result<&Pile, RuleError>
where
    T: TableView + ?Sized,
{
    table.pile(id).ok_or(RuleError::UnknownPileHandle { id })
}

fn check_handles<T>(table: &T, action: &Action) -> Result<(), RuleError>
where
    T: TableView + ?Sized,
{
    let mut seen = FxHashSet::default();
    for id in action.handles() {
        lookup(table, id)?;
        if !seen.insert(id) {
            return Err(RuleError::DuplicatePileHandle { id });
        }
    }
    Ok(())
}

fn check_face<T>(table: &T, action: &Action) -> Result<(), RuleError>
where
    T: TableView + ?Sized,
{
    let card = action.card();
    if action.is_build() {
        return Err(RuleError::IllegalFaceCapture { card });
    }

    for group in action.sets() {
        let [id] = group.as_slice() else {
            return Err(RuleError::IllegalFaceCapture { card });
        };
        match lookup(table, *id)?.single_card() {
            Some(other) if other.rank() == card.rank() => {}
            _ => return Err(RuleError::IllegalFaceCapture { card }),
        }
    }
    Ok(())
}

/// Returns the target every set was checked against.
fn check_sums<T>(table: &T, action: &Action) -> Result<u32, RuleError>
where
    T: TableView + ?Sized,
{
    let mut target = u32::from(action.card().value());
    for &id in action.add() {
        let pile = lookup(table, id)?;
        if pile.is_compound() || pile.value() == 0 {
            return Err(RuleError::IllegalAddTarget { id });
        }
        target += u32::from(pile.value());
    }

    for group in action.sets() {
        let mut sum = 0;
        for &id in group {
            let pile = lookup(table, id)?;
            if pile.value() == 0 {
                return Err(RuleError::ValuelessPile { id });
            }
            sum += u32::from(pile.value());
        }
        if sum != target {
            return Err(RuleError::SumMismatch {
                expected: target,
                found: sum,
            });
        }
    }

    Ok(target)
}

/// Some card other than the one being played captures `target`.
fn can_capture_later(hand: &[Card], played: Card, target: u32) -> bool {
    hand.iter()
        .any(|&c| c != played && !c.is_face() && u32::from(c.value()) == target)
}
