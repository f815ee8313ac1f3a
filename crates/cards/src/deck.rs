// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck.
///
/// Cards are dealt from the front of the deck, once the deck has been shuffled
/// dealing from the front is the same as dealing random cards. A deck is a
/// working copy owned by one deal, create a new one with [Deck::default] for
/// each deal instead of sharing it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck in generation order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deck with the given cards in the given order.
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `n` cards from the front of the deck.
    ///
    /// Panics if the deck has less than `n` cards.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        assert!(
            n <= self.cards.len(),
            "deal {n} cards from a deck with {} cards",
            self.cards.len()
        );

        self.cards.drain(..n).collect()
    }

    /// Deals a card from the front of the deck.
    ///
    /// Panics if the deck is empty.
    pub fn deal_one(&mut self) -> Card {
        assert!(!self.cards.is_empty(), "deal from an empty deck");
        self.cards.remove(0)
    }

    /// Discards the card at the front of the deck.
    ///
    /// Panics if the deck is empty.
    pub fn burn(&mut self) {
        self.deal_one();
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck, does nothing if the card is not in the deck.
    pub fn remove(&mut self, card: Card) {
        if let Some(pos) = self.cards.iter().position(|c| c == &card) {
            self.cards.remove(pos);
        }
    }

    /// Returns the cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        // Indices of the current combination, advanced like an odometer where
        // each position stays strictly greater than the previous one.
        let n = self.cards.len();
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            let mut pos = k;
            while pos > 0 && idx[pos - 1] == n - k + pos - 1 {
                pos -= 1;
            }

            if pos == 0 {
                break;
            }

            idx[pos - 1] += 1;
            for p in pos..k {
                idx[p] = idx[p - 1] + 1;
            }

            for p in (pos - 1)..k {
                hand[p] = self.cards[idx[p]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
