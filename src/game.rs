//! The game aggregate and state machine.
//!
//! `Game` composes the board, deck, both players, the shared star pool and
//! the discard pile, and owns the only mutation paths for all of them. Two
//! conservation laws hold at every observable point as long as mutation goes
//! through game operations:
//!
//! - `players[0].stars + players[1].stars + total_stars == 34`
//! - `deck + hand1 + hand2 + board + discard == 64` cards
//!
//! The lifecycle is a one-way state machine: `Playing` → `Finished`. Once
//! finished, only read accessors succeed, with two deliberate exceptions:
//! [`Game::discard_from_board`] stays a no-op and [`Game::claim_combo`]
//! returns `false` instead of failing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::combo::{Combo, ComboType};
use crate::core::{Card, GameError, GameRng, Position};
use crate::deck::Deck;
use crate::player::{Player, PlayerId};

/// Stars in the shared pool at game start.
pub const INITIAL_STARS: u32 = 34;

/// Cards dealt to each player at game start.
pub const INITIAL_HAND_SIZE: usize = 13;

/// Lifecycle state. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Finished,
}

/// The game aggregate.
///
/// Constructed only through [`Game::new`] / [`Game::with_rng`]; mutated only
/// through its own operations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    deck: Deck,
    players: [Player; 2],
    current_player_index: usize,
    total_stars: u32,
    discard_pile: Vec<Card>,
    state: GameState,
    last_auto_drawn_player: Option<PlayerId>,
}

impl Game {
    /// Create a new game from a seed.
    ///
    /// Builds a fresh shuffled 64-card deck, deals 13 cards alternately to
    /// each player (38 remain), sets the star pool to 34 and the state to
    /// `Playing` with player 1 to move.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a new game from an explicit RNG.
    #[must_use]
    pub fn with_rng(mut rng: GameRng) -> Self {
        let mut deck = Deck::create_initial_deck();
        deck.shuffle(&mut rng);

        let mut players = [Player::new(PlayerId::new(0)), Player::new(PlayerId::new(1))];

        for _ in 0..INITIAL_HAND_SIZE {
            for player in players.iter_mut() {
                if let Some(card) = deck.draw() {
                    player.draw_to_hand(card);
                }
            }
        }

        debug!(deck = deck.count(), stars = INITIAL_STARS, "new game dealt");

        Self {
            board: Board::new(),
            deck,
            players,
            current_player_index: 0,
            total_stars: INITIAL_STARS,
            discard_pile: Vec::new(),
            state: GameState::Playing,
            last_auto_drawn_player: None,
        }
    }

    // === Turn and player access ===

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Mutable access to the current player.
    ///
    /// Callers use this to remove a card from the hand before
    /// [`Game::place_card`], which by contract never touches hands.
    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player_index]
    }

    /// The player waiting for their turn.
    #[must_use]
    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.current_player_index]
    }

    /// Both players, player 1 first.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Mutable access to a player by id.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    // === Board operations ===

    /// Place a card on an empty cell.
    ///
    /// Fails with [`GameError::InvalidState`] after the game finished and
    /// [`GameError::OccupiedPosition`] if the cell is taken. Does not touch
    /// any hand; the caller must already own the card.
    pub fn place_card(&mut self, card: Card, position: Position) -> Result<(), GameError> {
        if self.state == GameState::Finished {
            return Err(GameError::InvalidState);
        }
        self.board.place_card(card, position)?;
        debug!(%card, %position, "card placed");
        Ok(())
    }

    /// Move the card at `position` (if any) to the discard pile.
    ///
    /// A no-op on an empty cell, and still allowed once the game finished.
    pub fn discard_from_board(&mut self, position: Position) {
        if let Some(card) = self.board.remove_card(position) {
            self.discard_pile.push(card);
        }
    }

    /// Discard a card from the current player's hand.
    ///
    /// Fails with [`GameError::InvalidState`] after the game finished;
    /// propagates [`GameError::NotFound`] if the card is not held.
    pub fn discard_from_hand(&mut self, card: Card) -> Result<(), GameError> {
        if self.state == GameState::Finished {
            return Err(GameError::InvalidState);
        }
        let card = self.current_player_mut().play_card(card)?;
        self.discard_pile.push(card);
        Ok(())
    }

    /// Draw the top deck card and place it straight onto the board,
    /// bypassing any hand. Models a player with no hand cards left.
    ///
    /// Fails with [`GameError::InvalidState`] after the game finished,
    /// [`GameError::OccupiedPosition`] on a taken cell, and
    /// [`GameError::EmptyResource`] when the deck is empty.
    pub fn draw_and_place_card(&mut self, position: Position) -> Result<Card, GameError> {
        if self.state == GameState::Finished {
            return Err(GameError::InvalidState);
        }
        if !self.board.is_empty(position) {
            return Err(GameError::OccupiedPosition);
        }
        let card = self.deck.draw().ok_or(GameError::EmptyResource)?;
        self.board.place_card(card, position)?;
        debug!(%card, %position, "card drawn and placed");
        Ok(card)
    }

    /// Lift the card at `position` back into the current player's hand —
    /// the single modeled undo of a placement made this turn.
    ///
    /// A no-op on an empty cell. Fails with [`GameError::InvalidState`]
    /// after the game finished.
    pub fn cancel_placement(&mut self, position: Position) -> Result<(), GameError> {
        if self.state == GameState::Finished {
            return Err(GameError::InvalidState);
        }
        if let Some(card) = self.board.remove_card(position) {
            self.current_player_mut().draw_to_hand(card);
        }
        Ok(())
    }

    // === Combos ===

    /// Claim a combo for the current player.
    ///
    /// Returns `false` (not an error) once the game finished. For a
    /// [`ComboType::Clearing`] combo, discards whatever sits on all nine
    /// cells regardless of the combo's positions — no draw, no stars.
    /// For a scoring combo: discards the cards at the combo's positions,
    /// draws up to `card_count` replacement cards into the current player's
    /// hand (stopping silently if the deck empties), and awards
    /// `min(card_count, total_stars)` stars from the pool.
    ///
    /// Never flips the turn; that is [`Game::end_turn`]'s job alone.
    pub fn claim_combo(&mut self, combo: &Combo) -> bool {
        if self.state == GameState::Finished {
            return false;
        }

        if combo.combo_type() == ComboType::Clearing {
            for position in Position::all() {
                self.discard_from_board(position);
            }
            debug!(combo = %combo.combo_type(), "board cleared");
            return true;
        }

        for &position in combo.positions() {
            self.discard_from_board(position);
        }

        let card_count = combo.card_count();
        for _ in 0..card_count {
            match self.deck.draw() {
                Some(card) => self.current_player_mut().draw_to_hand(card),
                None => break,
            }
        }

        let stars = (card_count as u32).min(self.total_stars);
        self.current_player_mut().add_stars(stars);
        self.total_stars -= stars;

        debug!(
            combo = %combo.combo_type(),
            stars,
            pool = self.total_stars,
            "combo claimed"
        );
        true
    }

    // === Turn flow ===

    /// End the current turn.
    ///
    /// First evaluates termination: the game finishes when the star pool is
    /// empty, the deck is empty, or the board is full while both hands are
    /// empty (no legal move remains). The current player then flips
    /// unconditionally. If the game is still running and the new current
    /// player has an empty hand while the deck is not empty, exactly one
    /// card is auto-drawn into that hand and the player is recorded in the
    /// auto-draw flag, which persists until [`Game::clear_auto_draw_flag`].
    pub fn end_turn(&mut self) {
        if self.state == GameState::Playing {
            let no_moves_left = self.board.is_full()
                && !self.players[0].hand().has_cards()
                && !self.players[1].hand().has_cards();

            if self.total_stars == 0 || self.deck.is_empty() || no_moves_left {
                self.state = GameState::Finished;
                debug!("game finished");
            }
        }

        self.current_player_index = 1 - self.current_player_index;

        if self.state == GameState::Playing
            && !self.current_player().hand().has_cards()
            && !self.deck.is_empty()
        {
            if let Some(card) = self.deck.draw() {
                let id = self.current_player().id();
                self.current_player_mut().draw_to_hand(card);
                self.last_auto_drawn_player = Some(id);
                debug!(player = %id, "auto-drew for empty hand");
            }
        }
    }

    /// Whether the game has finished.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == GameState::Finished
    }

    /// The player with strictly more stars, once finished.
    ///
    /// Ties and unfinished games have no winner.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if !self.is_game_over() {
            return None;
        }
        let [p1, p2] = &self.players;
        match p1.stars().cmp(&p2.stars()) {
            std::cmp::Ordering::Greater => Some(p1),
            std::cmp::Ordering::Less => Some(p2),
            std::cmp::Ordering::Equal => None,
        }
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Mutable access to the deck, for drivers that need to manipulate the
    /// draw pile directly (e.g. forcing an end-of-deck state in tests).
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Stars left in the shared pool.
    #[must_use]
    pub fn total_stars(&self) -> u32 {
        self.total_stars
    }

    /// Number of discarded cards.
    #[must_use]
    pub fn discard_pile_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The player who most recently received an automatic draw, if the flag
    /// has not been cleared since.
    #[must_use]
    pub fn last_auto_drawn_player(&self) -> Option<PlayerId> {
        self.last_auto_drawn_player
    }

    /// Clear the auto-draw flag.
    pub fn clear_auto_draw_flag(&mut self) {
        self.last_auto_drawn_player = None;
    }
}
