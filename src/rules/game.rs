//! A running game.
//!
//! `Game` is the single entry point for player moves. Each move goes through
//! `check` first, which never mutates, and only then through the payment and
//! effect application steps.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{GameDefinition, GameError, GameResult, ScoreBoard};
use crate::boards::{Table, TableSnapshot};
use crate::cards::{Card, CardId};
use crate::core::{Player, Settings, LAST_AGE};
use crate::effects::SpecialAbility;
use crate::resources::ResourceTransactions;
use crate::wonders::Wonder;

/// What a player does with a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Build the card, paying with one of its options. Chained cards are
    /// built for free and ignore the option.
    PlayCard {
        card: CardId,
        option: usize,
        transactions: ResourceTransactions,
    },
    /// Build the card with the once-per-age free build.
    PlayFree { card: CardId },
    /// Build a card taken from the discard pile, for free.
    PlayDiscarded { card: CardId },
    /// Spend the card to build the next wonder stage.
    UpgradeWonder {
        card: CardId,
        option: usize,
        transactions: ResourceTransactions,
    },
    /// Sell the card for gold.
    Discard { card: CardId },
}

impl Move {
    #[must_use]
    pub fn card(&self) -> CardId {
        match self {
            Move::PlayCard { card, .. }
            | Move::PlayFree { card }
            | Move::PlayDiscarded { card }
            | Move::UpgradeWonder { card, .. }
            | Move::Discard { card } => *card,
        }
    }
}

/// Whether and how a player could build a card right now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPlayability {
    pub card: CardId,
    pub already_built: bool,
    pub chained: bool,
    pub free_play_available: bool,
    /// Indices of the payment options that validate with the given purchases.
    pub affordable_options: Vec<usize>,
}

impl CardPlayability {
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.already_built
            && (self.chained || self.free_play_available || !self.affordable_options.is_empty())
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    id: u64,
    /// Seat order.
    players: Vec<Player>,
    settings: Settings,
    table: Table,
    discarded: Vec<CardId>,
    definition: Arc<GameDefinition>,
}

impl Game {
    pub(crate) fn new(
        id: u64,
        players: Vec<Player>,
        settings: Settings,
        table: Table,
        definition: Arc<GameDefinition>,
    ) -> Self {
        tracing::info!(game_id = id, players = players.len(), "game created");
        Self {
            id,
            players,
            settings,
            table,
            discarded: Vec::new(),
            definition,
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn definition(&self) -> &Arc<GameDefinition> {
        &self.definition
    }

    #[must_use]
    pub fn discarded(&self) -> &[CardId] {
        &self.discarded
    }

    #[must_use]
    pub fn age(&self) -> u8 {
        self.table.age()
    }

    /// Whether every age has been played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.table.age() > LAST_AGE
    }

    /// Seat of the player answering to `user_name`.
    #[must_use]
    pub fn seat_of(&self, user_name: &str) -> Option<usize> {
        self.players.iter().position(|player| player.is(user_name))
    }

    fn card(&self, id: CardId) -> GameResult<Arc<Card>> {
        self.definition.card(id).cloned()
    }

    /// Validate `mv` for `player` without changing anything.
    pub fn check(&self, player: usize, mv: &Move) -> GameResult<()> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if player >= self.table.len() {
            return Err(GameError::UnknownPlayer(player));
        }
        let card = self.card(mv.card())?;
        let board = self.table.board(player);

        match mv {
            Move::PlayCard {
                option,
                transactions,
                ..
            } => {
                ensure_not_built(board.has_card_named(&card.name), &card)?;
                if !board.is_chained(&card) {
                    card.requirements
                        .check_option(&self.table, player, *option, transactions)?;
                }
            }
            Move::PlayFree { .. } => {
                ensure_not_built(board.has_card_named(&card.name), &card)?;
                if !board.can_play_free(self.table.age()) {
                    return Err(GameError::NoFreePlayAvailable);
                }
            }
            Move::PlayDiscarded { .. } => {
                ensure_not_built(board.has_card_named(&card.name), &card)?;
                if !board.has_special(SpecialAbility::PlayDiscarded) {
                    return Err(GameError::NoDiscardPlayAvailable);
                }
                if !self.discarded.contains(&card.id) {
                    return Err(GameError::NotDiscarded(card.id));
                }
            }
            Move::UpgradeWonder {
                option,
                transactions,
                ..
            } => {
                board
                    .wonder()
                    .next_stage()?
                    .requirements
                    .check_option(&self.table, player, *option, transactions)?;
            }
            Move::Discard { .. } => {}
        }
        Ok(())
    }

    /// Everything a client needs to show whether `card` can be built.
    pub fn card_playability(
        &self,
        player: usize,
        card: CardId,
        transactions: &ResourceTransactions,
    ) -> GameResult<CardPlayability> {
        if player >= self.table.len() {
            return Err(GameError::UnknownPlayer(player));
        }
        let card = self.card(card)?;
        let board = self.table.board(player);
        Ok(CardPlayability {
            card: card.id,
            already_built: board.has_card_named(&card.name),
            chained: board.is_chained(&card),
            free_play_available: board.can_play_free(self.table.age()),
            affordable_options: card
                .requirements
                .affordable_options(&self.table, player, transactions),
        })
    }

    /// Play `mv` for `player`. Nothing changes if the move is rejected.
    #[instrument(skip(self), fields(game_id = self.id))]
    pub fn play(&mut self, player: usize, mv: Move) -> GameResult<()> {
        if let Err(err) = self.check(player, &mv) {
            tracing::warn!(%err, "move rejected");
            return Err(err);
        }
        let card = self.card(mv.card())?;

        match mv {
            Move::PlayCard {
                option,
                transactions,
                ..
            } => {
                if !self.table.board(player).is_chained(&card) {
                    card.requirements
                        .pay(&mut self.table, player, option, &transactions)?;
                }
                self.build_card(player, &card);
            }
            Move::PlayFree { .. } => {
                let age = self.table.age();
                if !self.table.board_mut(player).consume_free_play(age) {
                    return Err(GameError::NoFreePlayAvailable);
                }
                self.build_card(player, &card);
            }
            Move::PlayDiscarded { .. } => {
                let index = self
                    .discarded
                    .iter()
                    .position(|&id| id == card.id)
                    .ok_or(GameError::NotDiscarded(card.id))?;
                if !self
                    .table
                    .board_mut(player)
                    .consume_special(SpecialAbility::PlayDiscarded)
                {
                    return Err(GameError::NoDiscardPlayAvailable);
                }
                self.discarded.remove(index);
                self.build_card(player, &card);
            }
            Move::UpgradeWonder {
                option,
                transactions,
                ..
            } => {
                let requirements = self.table.board(player).wonder().next_stage()?.requirements.clone();
                requirements.pay(&mut self.table, player, option, &transactions)?;
                self.table
                    .board_mut(player)
                    .wonder_mut()
                    .place_card(card.back.clone())?;
                Wonder::activate_last_built_stage(&mut self.table, player)?;
            }
            Move::Discard { .. } => {
                self.table
                    .board_mut(player)
                    .add_gold(self.settings.discarded_card_gold);
                self.discarded.push(card.id);
            }
        }
        tracing::info!(player, card = %card.name, "move played");
        Ok(())
    }

    fn build_card(&mut self, player: usize, card: &Arc<Card>) {
        self.table.board_mut(player).add_card(Arc::clone(card));
        for effect in &card.effects {
            effect.apply(&mut self.table, player);
        }
    }

    /// Resolve military conflicts and move on to the next age.
    #[instrument(skip(self), fields(game_id = self.id))]
    pub fn end_age(&mut self) -> GameResult<()> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.table.resolve_military_conflicts(&self.settings)?;
        self.table.advance_age();
        tracing::info!(age = self.table.age(), "age ended");
        Ok(())
    }

    #[must_use]
    pub fn compute_score(&self) -> ScoreBoard {
        let user_names: Vec<String> = self
            .players
            .iter()
            .map(|player| player.user_name.clone())
            .collect();
        ScoreBoard::compute(&self.table, &user_names)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            players: self.players.clone(),
            table: self.table.snapshot(),
            discarded: self.discarded.len(),
        }
    }
}

fn ensure_not_built(built: bool, card: &Card) -> GameResult<()> {
    if built {
        return Err(GameError::CardAlreadyBuilt(card.name.clone()));
    }
    Ok(())
}

/// Public view of a game, pushed to every player after each accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: u64,
    pub players: Vec<Player>,
    pub table: TableSnapshot,
    /// Size of the discard pile. Its content is hidden.
    pub discarded: usize,
}

impl GameSnapshot {
    /// Compact binary form for the transport layer.
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
