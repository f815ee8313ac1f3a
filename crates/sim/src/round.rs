// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A single simulated deal.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use holdem_cards::{Card, Deck, HoleCards};
use holdem_eval::{EvalError, HandValue};

use crate::error::{SimError, check_opponents};

/// Number of cards on the board.
pub const BOARD_SIZE: usize = 5;

/// The hero result at showdown, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The best opponent hand beats the hero hand.
    Loss,
    /// The hero hand ties with the best opponent hand.
    Tie,
    /// The hero hand beats every opponent hand.
    Win,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Loss => "Loss",
            Outcome::Tie => "Tie",
            Outcome::Win => "Win",
        };

        write!(f, "{s}")
    }
}

/// The state of one deal: hole cards, board, and folded players.
///
/// A round is dealt from its own freshly shuffled deck, so rounds never share
/// state and can be played on any thread.
#[derive(Debug, Clone)]
pub struct Round {
    hero: Option<HoleCards>,
    players: Vec<HoleCards>,
    folded: Vec<bool>,
    board: [Card; BOARD_SIZE],
}

impl Round {
    /// Deals a round with `n_players` players plus an optional hero.
    ///
    /// The hero cards are removed from the deck before dealing two cards to
    /// each player and then the board, burning one card before the flop, the
    /// turn, and the river.
    ///
    /// Panics if there are not enough cards for all players.
    pub fn deal<R: Rng + ?Sized>(hero: Option<HoleCards>, n_players: usize, rng: &mut R) -> Self {
        let mut deck = Deck::new_and_shuffled(rng);
        if let Some(hero) = hero {
            for card in hero.cards() {
                deck.remove(card);
            }
        }

        let players = deal_hole_cards(&mut deck, n_players);

        deck.burn();
        let flop = deck.deal(3);
        deck.burn();
        let turn = deck.deal_one();
        deck.burn();
        let river = deck.deal_one();

        let board = [flop[0], flop[1], flop[2], turn, river];

        Self {
            hero,
            folded: vec![false; players.len()],
            players,
            board,
        }
    }

    /// Creates a round from known cards.
    pub fn with_cards(
        hero: Option<HoleCards>,
        players: Vec<HoleCards>,
        board: [Card; BOARD_SIZE],
    ) -> Self {
        Self {
            hero,
            folded: vec![false; players.len()],
            players,
            board,
        }
    }

    /// Folds up to `n_folding` random players.
    ///
    /// Folding players are drawn with replacement from the indices 1..n, so
    /// the first player never folds and fewer than `n_folding` players fold
    /// when the same index is drawn twice. Does nothing unless
    /// `0 < n_folding < n`.
    pub fn fold<R: Rng + ?Sized>(&mut self, n_folding: usize, rng: &mut R) {
        let n = self.players.len();
        if n_folding == 0 || n_folding >= n {
            return;
        }

        for _ in 0..n_folding {
            let idx = rng.random_range(1..n);
            self.folded[idx] = true;
        }
    }

    /// The hero hole cards.
    pub fn hero(&self) -> Option<HoleCards> {
        self.hero
    }

    /// All the players hole cards, including folded players.
    pub fn players(&self) -> &[HoleCards] {
        &self.players
    }

    /// The board cards.
    pub fn board(&self) -> &[Card; BOARD_SIZE] {
        &self.board
    }

    /// Checks if the player at `idx` has folded.
    pub fn has_folded(&self, idx: usize) -> bool {
        self.folded[idx]
    }

    /// Number of players that didn't fold.
    pub fn active_count(&self) -> usize {
        self.folded.iter().filter(|f| !**f).count()
    }

    /// Evaluates hole cards with the board.
    pub fn hand_value(&self, hole: &HoleCards) -> Result<HandValue, EvalError> {
        let [c1, c2] = hole.cards();
        let [b1, b2, b3, b4, b5] = self.board;
        HandValue::eval(&[c1, c2, b1, b2, b3, b4, b5])
    }

    /// Returns the index and value of the best hand among the active players.
    ///
    /// On a full tie the earlier player stays the best.
    pub fn best_player(&self) -> Result<Option<(usize, HandValue)>, EvalError> {
        let mut best: Option<(usize, HandValue)> = None;
        for (idx, hole) in self.players.iter().enumerate() {
            if self.folded[idx] {
                continue;
            }

            let value = self.hand_value(hole)?;
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((idx, value)),
            }
        }

        Ok(best)
    }

    /// Compares the hero hand with the best active player hand.
    ///
    /// A round without hero is a loss, a round without active players is a win.
    pub fn showdown(&self) -> Result<Outcome, EvalError> {
        let Some(hero) = self.hero else {
            return Ok(Outcome::Loss);
        };

        let hero_value = self.hand_value(&hero)?;
        let outcome = match self.best_player()? {
            None => Outcome::Win,
            Some((_, best)) => match hero_value.cmp(&best) {
                Ordering::Greater => Outcome::Win,
                Ordering::Equal => Outcome::Tie,
                Ordering::Less => Outcome::Loss,
            },
        };

        Ok(outcome)
    }
}

/// Deals two cards to each player from the front of the deck.
pub(crate) fn deal_hole_cards(deck: &mut Deck, n_players: usize) -> Vec<HoleCards> {
    (0..n_players)
        .map(|_| {
            let c1 = deck.deal_one();
            let c2 = deck.deal_one();
            HoleCards::new(c1, c2)
        })
        .collect()
}

/// Plays one round for the hero against `n_opponents` opponents.
///
/// The outcome depends only on the arguments and the rng state, so rounds can
/// run on independent threads with independent rngs.
pub fn simulate_round<R: Rng + ?Sized>(
    hero: HoleCards,
    n_opponents: usize,
    n_folding: usize,
    rng: &mut R,
) -> Result<Outcome, SimError> {
    check_opponents(n_opponents)?;

    let mut round = Round::deal(Some(hero), n_opponents, rng);
    round.fold(n_folding, rng);
    Ok(round.showdown()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use holdem_cards::parse_cards;
    use holdem_eval::HandCategory;

    fn hole(s: &str) -> HoleCards {
        let cards = parse_cards(s).unwrap();
        HoleCards::new(cards[0], cards[1])
    }

    fn board(s: &str) -> [Card; BOARD_SIZE] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn deal_unique_cards() {
        let mut rng = StdRng::seed_from_u64(1);
        let hero = hole("AS AH");

        for n in 1..=9 {
            let round = Round::deal(Some(hero), n, &mut rng);
            assert_eq!(round.players().len(), n);
            assert_eq!(round.active_count(), n);

            let mut cards = HashSet::<Card>::default();
            cards.extend(hero.cards());
            cards.extend(round.players().iter().flat_map(|h| h.cards()));
            cards.extend(round.board());
            assert_eq!(cards.len(), 2 + 2 * n + BOARD_SIZE);
        }
    }

    #[test]
    fn deal_with_burn_cards() {
        // Replay the deal on a deck shuffled with the same seed.
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(5));
        let round = Round::deal(None, 2, &mut StdRng::seed_from_u64(5));

        let cards = deck.deal(4 + 4 + 2 + 2);
        assert_eq!(round.players()[0], HoleCards::new(cards[0], cards[1]));
        assert_eq!(round.players()[1], HoleCards::new(cards[2], cards[3]));
        // cards[4], cards[8], and cards[10] are burnt.
        assert_eq!(round.board(), &[cards[5], cards[6], cards[7], cards[9], cards[11]]);
    }

    #[test]
    fn fold_never_folds_first_player() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let mut round = Round::deal(None, 5, &mut rng);
            round.fold(3, &mut rng);
            assert!(!round.has_folded(0));
            assert!(round.active_count() >= 2 && round.active_count() < 5);
        }
    }

    #[test]
    fn degenerate_fold_is_noop() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = Round::deal(None, 3, &mut rng);

        round.fold(0, &mut rng);
        assert_eq!(round.active_count(), 3);
        round.fold(3, &mut rng);
        assert_eq!(round.active_count(), 3);
        round.fold(10, &mut rng);
        assert_eq!(round.active_count(), 3);
    }

    #[test]
    fn showdown_outcomes() {
        // Pocket aces on a dry board beat king-queen.
        let b = board("2C 7D 9H JS KC");
        let round = Round::with_cards(Some(hole("AS AH")), vec![hole("KD QD")], b);
        assert_eq!(round.showdown(), Ok(Outcome::Win));

        // Same hands tie on a board that plays.
        let b = board("TC JD QH KS AC");
        let round = Round::with_cards(Some(hole("2S 3H")), vec![hole("2D 3C")], b);
        assert_eq!(round.showdown(), Ok(Outcome::Tie));

        // The hero loses against the best of many opponents.
        let b = board("2C 7D 9H JS KC");
        let opponents = vec![hole("3D 4D"), hole("KH KS"), hole("5C 6C")];
        let round = Round::with_cards(Some(hole("AS AH")), opponents, b);
        assert_eq!(round.showdown(), Ok(Outcome::Loss));
    }

    #[test]
    fn best_player_keeps_first_on_tie() {
        let b = board("TC JD QH KS AC");
        let players = vec![hole("2D 3C"), hole("2S 3H"), hole("4S 5H")];
        let round = Round::with_cards(None, players, b);

        let (idx, value) = round.best_player().unwrap().unwrap();
        assert_eq!(idx, 0);
        assert_eq!(value.category(), HandCategory::Straight);
    }

    #[test]
    fn folding_never_hurts_hero() {
        let mut rng = StdRng::seed_from_u64(4);
        let hero = hole("7S 8S");

        for _ in 0..2_000 {
            let round = Round::deal(Some(hero), 6, &mut rng);
            let mut folded = round.clone();
            folded.fold(3, &mut rng);

            assert!(folded.active_count() <= round.active_count());
            assert!(folded.showdown().unwrap() >= round.showdown().unwrap());
        }
    }

    #[test]
    fn round_checks_opponents() {
        let mut rng = StdRng::seed_from_u64(4);
        let hero = hole("7S 8S");
        assert_eq!(
            simulate_round(hero, 0, 0, &mut rng),
            Err(SimError::InvalidOpponents(0))
        );
        assert_eq!(
            simulate_round(hero, 10, 0, &mut rng),
            Err(SimError::InvalidOpponents(10))
        );
        assert!(simulate_round(hero, 9, 8, &mut rng).is_ok());
    }
}
