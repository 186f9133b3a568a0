//! Action representation: a played card plus the piles it acts on.
//!
//! Every turn a player plays exactly one card from their hand, in one of
//! three ways:
//! - **Trail**: lay the card on the table as a new single-card pile.
//! - **Build**: combine the card with existing piles into a new build that
//!   the player will capture later.
//! - **Capture**: take one or more groups of piles whose values each sum to
//!   the card's value (or, for a face card, piles holding the same rank).
//!
//! The kinds are distinct variants, so a trail can never carry handles.
//! `Action::from_parts` classifies the flat `{card, add, sets, build}` form
//! that participants may find easier to assemble.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::pile_id::PileId;
use super::player::PlayerId;

/// Pile handles that are summed together.
/// SmallVec covers the usual one to four piles without heap allocation.
pub type PileGroup = SmallVec<[PileId; 4]>;

/// A complete turn action.
///
/// ## Example
///
/// ```
/// use cassino::core::{Action, Card, PileId};
///
/// // Capture piles 0 and 1 together with a ten (e.g. a 3 and a 7)
/// let capture = Action::capture(Card::new(36), [[PileId(0), PileId(1)]]);
/// assert!(!capture.is_build());
///
/// // Add an ace to pile 2, announcing its new total
/// let build = Action::build(Card::new(0), [PileId(2)], Vec::<Vec<PileId>>::new());
/// assert!(build.is_build());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Lay the card on the table.
    Trail { card: Card },

    /// Combine the card with existing piles.
    ///
    /// `add` piles are summed with the card to form the build's value; each
    /// `sets` group must already sum to that value.
    Build {
        card: Card,
        add: PileGroup,
        sets: Vec<PileGroup>,
    },

    /// Take every `sets` group.
    Capture { card: Card, sets: Vec<PileGroup> },
}

fn groups<S, G>(sets: S) -> Vec<PileGroup>
where
    S: IntoIterator<Item = G>,
    G: IntoIterator<Item = PileId>,
{
    sets.into_iter().map(|g| g.into_iter().collect()).collect()
}

impl Action {
    #[must_use]
    pub fn trail(card: Card) -> Self {
        Action::Trail { card }
    }

    /// Capture the given groups of piles.
    pub fn capture<S, G>(card: Card, sets: S) -> Self
    where
        S: IntoIterator<Item = G>,
        G: IntoIterator<Item = PileId>,
    {
        Action::Capture {
            card,
            sets: groups(sets),
        }
    }

    /// Build from `add` piles plus fused `sets` groups.
    pub fn build<A, S, G>(card: Card, add: A, sets: S) -> Self
    where
        A: IntoIterator<Item = PileId>,
        S: IntoIterator<Item = G>,
        G: IntoIterator<Item = PileId>,
    {
        Action::Build {
            card,
            add: add.into_iter().collect(),
            sets: groups(sets),
        }
    }

    /// Classify the flat form of an action.
    ///
    /// A non-empty `add` or a set `build` flag makes a build; otherwise
    /// non-empty `sets` make a capture and anything else is a trail.
    pub fn from_parts<A, S, G>(card: Card, add: A, sets: S, build: bool) -> Self
    where
        A: IntoIterator<Item = PileId>,
        S: IntoIterator<Item = G>,
        G: IntoIterator<Item = PileId>,
    {
        let add: PileGroup = add.into_iter().collect();
        let sets = groups(sets);

        if build || !add.is_empty() {
            Action::Build { card, add, sets }
        } else if !sets.is_empty() {
            Action::Capture { card, sets }
        } else {
            Action::Trail { card }
        }
    }

    /// The card played from hand.
    #[must_use]
    pub fn card(&self) -> Card {
        match self {
            Action::Trail { card } | Action::Build { card, .. } | Action::Capture { card, .. } => {
                *card
            }
        }
    }

    /// Piles summed with the card. Empty unless this is a build.
    #[must_use]
    pub fn add(&self) -> &[PileId] {
        match self {
            Action::Build { add, .. } => add,
            _ => &[],
        }
    }

    /// Groups fused (build) or taken (capture). Empty for a trail.
    #[must_use]
    pub fn sets(&self) -> &[PileGroup] {
        match self {
            Action::Build { sets, .. } | Action::Capture { sets, .. } => sets,
            Action::Trail { .. } => &[],
        }
    }

    #[must_use]
    pub fn is_trail(&self) -> bool {
        matches!(self, Action::Trail { .. })
    }

    #[must_use]
    pub fn is_build(&self) -> bool {
        matches!(self, Action::Build { .. })
    }

    /// Every handle referenced, `add` first, then each group in order.
    pub fn handles(&self) -> impl Iterator<Item = PileId> + '_ {
        self.add()
            .iter()
            .chain(self.sets().iter().flatten())
            .copied()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt_sets = |sets: &[PileGroup]| {
            sets.iter()
                .map(|g| format!("{:?}", g.iter().map(|id| id.0).collect::<Vec<_>>()))
                .collect::<Vec<_>>()
                .join(" ")
        };
        match self {
            Action::Trail { card } => write!(f, "trail {}", card),
            Action::Build { card, add, sets } => write!(
                f,
                "build {} add {:?} sets {}",
                card,
                add.iter().map(|id| id.0).collect::<Vec<_>>(),
                fmt_sets(sets)
            ),
            Action::Capture { card, sets } => write!(f, "capture {} sets {}", card, fmt_sets(sets)),
        }
    }
}

/// An applied action with the seat that took it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number, counted from 1 across the whole game.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
