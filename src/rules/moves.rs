//! Candidate action enumeration.
//!
//! Listing every legal action means enumerating partitions of the table
//! into equal-sum groups, which nobody needs for ordinary play. This module
//! produces the common moves instead, all of them legal:
//!
//! - capturing every pile that matches the card (value for a numeric card,
//!   rank for a face card), one pile per set
//! - adding the card to a single open pile
//! - fusing the card with every pile of its value into a compound build
//! - fusing the card with each pair of piles summing to its value
//! - trailing the card

use super::validate::validate;
use crate::core::{Action, Card, PileId, PlayerId};
use crate::table::{Pile, TableView};

const NO_ADD: [PileId; 0] = [];
const NO_SETS: [[PileId; 0]; 0] = [];

/// Legal moves for `player` holding `hand`, card by card in hand order:
/// the capture first, then builds, then the trail.
pub fn candidate_actions<T>(table: &T, player: PlayerId, hand: &[Card]) -> Vec<Action>
where
    T: TableView + ?Sized,
{
    let mut actions = Vec::new();

    for &card in hand {
        let matching: Vec<PileId> = table
            .piles()
            .filter(|(_, pile)| matches_card(pile, card))
            .map(|(id, _)| id)
            .collect();
        if !matching.is_empty() {
            actions.push(Action::capture(card, matching.iter().map(|&id| [id])));
        }

        if !card.is_face() {
            for (id, pile) in table.piles() {
                if !pile.is_compound() && pile.value() > 0 {
                    actions.push(Action::build(card, [id], NO_SETS));
                }
            }

            if !matching.is_empty() {
                actions.push(Action::build(card, NO_ADD, matching.iter().map(|&id| [id])));
            }

            let numeric: Vec<(PileId, u8)> = table
                .piles()
                .filter(|(_, pile)| pile.value() > 0)
                .map(|(id, pile)| (id, pile.value()))
                .collect();
            for (i, &(a, a_value)) in numeric.iter().enumerate() {
                for &(b, b_value) in &numeric[i + 1..] {
                    if a_value + b_value == card.value() {
                        actions.push(Action::build(card, NO_ADD, [[a, b]]));
                    }
                }
            }
        }

        actions.push(Action::trail(card));
    }

    actions.retain(|action| validate(table, player, hand, action).is_ok());
    actions
}

fn matches_card(pile: &Pile, card: Card) -> bool {
    if card.is_face() {
        pile.single_card()
            .is_some_and(|other| other.rank() == card.rank())
    } else {
        pile.value() == card.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Hand};
    use crate::rules::{apply, Resolution};
    use crate::table::Table;

    const P0: PlayerId = PlayerId(0);
    const P1: PlayerId = PlayerId(1);

    fn cards(indices: &[u8]) -> Vec<Card> {
        indices.iter().map(|&i| Card::new(i)).collect()
    }

    #[test]
    fn test_empty_table_only_trails() {
        let hand = cards(&[0, 20, 44]);
        let actions = candidate_actions(&Table::new(), P0, &hand);

        assert_eq!(actions, hand.iter().map(|&c| Action::trail(c)).collect::<Vec<_>>());
    }

    #[test]
    fn test_capture_takes_every_match() {
        let table = Table::from_cards(cards(&[1, 2, 20]));
        let hand = cards(&[0]);
        let actions = candidate_actions(&table, P0, &hand);

        assert_eq!(
            actions[0],
            Action::capture(Card::new(0), [[PileId(0)], [PileId(1)]])
        );
    }

    #[test]
    fn test_face_capture_matches_rank() {
        let table = Table::from_cards(cards(&[41, 45, 42]));
        let hand = cards(&[40]);
        let actions = candidate_actions(&table, P0, &hand);

        assert_eq!(
            actions,
            vec![
                Action::capture(Card::new(40), [[PileId(0)], [PileId(2)]]),
                Action::trail(Card::new(40)),
            ]
        );
    }

    #[test]
    fn test_builds_need_a_capturing_card() {
        let table = Table::from_cards(cards(&[32]));

        let with_ten = candidate_actions(&table, P0, &cards(&[0, 36]));
        assert!(with_ten.contains(&Action::build(Card::new(0), [PileId(0)], NO_SETS)));

        let without_ten = candidate_actions(&table, P0, &cards(&[0, 20]));
        assert!(without_ten.iter().all(|a| !a.is_build()));
    }

    #[test]
    fn test_fusing_builds() {
        // Table: 5, 2, 3. Hand: 5, 5.
        let table = Table::from_cards(cards(&[16, 4, 9]));
        let hand = cards(&[17, 18]);
        let actions = candidate_actions(&table, P0, &hand);

        let same_value = Action::build(Card::new(17), NO_ADD, [[PileId(0)]]);
        let pair = Action::build(Card::new(17), NO_ADD, [[PileId(1), PileId(2)]]);
        assert!(actions.contains(&same_value));
        assert!(actions.contains(&pair));

        let mut state = GameState::new(Vec::new());
        state.table = table;
        state.hands[P0] = hand.into_iter().collect::<Hand>();
        let resolution = apply(&mut state, P0, &pair);
        assert!(matches!(
            resolution,
            Resolution::Built { value: 5, compound: true, .. }
        ));
    }

    #[test]
    fn test_fusing_needs_a_second_card() {
        let table = Table::from_cards(cards(&[16, 4, 9]));
        let actions = candidate_actions(&table, P0, &cards(&[17]));

        assert!(actions.iter().all(|a| !a.is_build()));
    }

    #[test]
    fn test_no_trail_while_building() {
        let table = Table::from_piles([Pile::build(cards(&[0, 20]), 7, P1, false)]);
        let hand = cards(&[24, 5]);

        let actions = candidate_actions(&table, P1, &hand);
        assert!(actions.iter().all(|a| !a.is_trail()));
        assert!(actions.contains(&Action::capture(Card::new(24), [[PileId(0)]])));
    }

    #[test]
    fn test_all_candidates_validate() {
        let table = Table::from_piles([
            Pile::single(Card::new(4)),
            Pile::single(Card::new(13)),
            Pile::single(Card::new(41)),
            Pile::build(cards(&[0, 8]), 4, P1, true),
        ]);
        let hand = cards(&[14, 40, 12, 27]);

        let actions = candidate_actions(&table, P0, &hand);
        assert!(!actions.is_empty());
        for action in &actions {
            assert_eq!(validate(&table, P0, &hand, action), Ok(()), "{}", action);
        }
    }
}
