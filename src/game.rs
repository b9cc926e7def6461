use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    deck::{Card, Deck},
    error::GameError,
    hand::{Hand, Participant},
    outcome::{resolve, resolve_naturals, Resolution},
    strategy::{DealerStrategy, Decision, TurnState},
    table::{ask, Table},
};

const WELCOME: &str = "\
------------ Welcome to the Casino ------------
------------- High Stakes Blackjack Table -------------
---------------- Are you ready to play? ---------------";
const FAREWELL: &str = "----------------- Come again soon -----------------";
const HIT_OR_STICK: &str = "Would you like to hit or stick?";

/// Result of one player decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The hand is final as it stands.
    Stuck,
    /// A card was added; `state` says whether the turn goes on.
    Continued {
        card: Card,
        value: u16,
        state: TurnState,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub player_name: String,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_value: u16,
    pub dealer_value: u16,
    /// `None` when a natural ended the round before any turn.
    pub player_state: Option<TurnState>,
    /// `None` when the dealer never played.
    pub dealer_state: Option<TurnState>,
    pub resolution: Resolution,
}

/// Everything one round owns: the deck and both hands.
pub struct RoundContext {
    pub player_name: String,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    dealer_strategy: DealerStrategy,
}

impl RoundContext {
    pub fn new(player_name: impl Into<String>, deck: Deck) -> Self {
        RoundContext {
            player_name: player_name.into(),
            deck,
            player: Hand::new(Participant::Player),
            dealer: Hand::new(Participant::Dealer),
            dealer_strategy: DealerStrategy::default(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    fn draw_to(&mut self, who: Participant) -> Result<Card, GameError> {
        let card = self.deck.draw()?;
        let hand = match who {
            Participant::Player => &mut self.player,
            Participant::Dealer => &mut self.dealer,
        };
        hand.push(card);
        debug!(
            ?who,
            card = %card,
            value = hand.value(),
            remaining = self.deck.remaining_cards(),
            "card dealt"
        );
        Ok(card)
    }

    /// Two cards to the player, then two to the dealer. Only on empty hands.
    fn deal_initial(&mut self) -> Result<(), GameError> {
        if !self.player.is_empty() || !self.dealer.is_empty() {
            return Err(GameError::AlreadyDealt);
        }
        for who in [Participant::Player, Participant::Dealer] {
            self.draw_to(who)?;
            self.draw_to(who)?;
        }
        Ok(())
    }

    /// Applies one decision to the player's hand.
    pub fn player_step(&mut self, decision: Decision) -> Result<Step, GameError> {
        match decision {
            Decision::Stick => Ok(Step::Stuck),
            Decision::Hit => {
                let card = self.draw_to(Participant::Player)?;
                let value = self.player.value();
                let state = TurnState::after_hit(value);
                debug!(value, ?state, "player hit");
                Ok(Step::Continued { card, value, state })
            }
        }
    }

    /// Asks for decisions until the player sticks, hits 21 or busts.
    pub fn play_player_turn<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<TurnState, GameError> {
        loop {
            let answer = ask(table, HIT_OR_STICK, &Decision::OPTIONS, None)?;
            let decision = Decision::from_code(&answer)?;
            match self.player_step(decision)? {
                Step::Stuck => {
                    table.notify(&format!("You stick on {}.", self.player.value()));
                    return Ok(TurnState::Done);
                }
                Step::Continued { card, value, state } => {
                    table.notify(&format!(
                        "You have drawn the {card}. Your total is now {value}."
                    ));
                    match state {
                        TurnState::Blackjack => {
                            table.notify("Blackjack!");
                            return Ok(state);
                        }
                        TurnState::Bust => {
                            table.notify("Bust!");
                            return Ok(state);
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    /// Dealer draws while under the threshold, checking the dealt hand first.
    pub fn play_dealer_turn<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<TurnState, GameError> {
        for _ in 0..=self.deck.remaining_cards() {
            let value = self.dealer.value();
            if !self.dealer_strategy.should_draw(value) {
                let state = self.dealer_strategy.final_state(value);
                if state == TurnState::Bust {
                    table.notify(&format!("The dealer is bust with {value}."));
                } else {
                    table.notify(&format!("The dealer stands on {value}."));
                }
                debug!(value, ?state, "dealer finished");
                return Ok(state);
            }
            let card = self.draw_to(Participant::Dealer)?;
            table.notify(&format!(
                "The dealer draws the {card}. The dealer's total is now {}.",
                self.dealer.value()
            ));
        }
        Err(GameError::EmptyDeck)
    }

    fn reveal_dealer<T: Table + ?Sized>(&self, table: &mut T) {
        table.notify(&format!(
            "The dealer reveals {} for a total of {}.",
            self.dealer.describe(),
            self.dealer.value()
        ));
    }

    fn report(
        &self,
        player_state: Option<TurnState>,
        dealer_state: Option<TurnState>,
        resolution: Resolution,
    ) -> RoundReport {
        RoundReport {
            player_name: self.player_name.clone(),
            player_cards: self.player.cards().to_vec(),
            dealer_cards: self.dealer.cards().to_vec(),
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            player_state,
            dealer_state,
            resolution,
        }
    }
}

/// Deals and plays one full round on `round`.
#[instrument(skip_all, fields(player = %round.player_name))]
pub fn play_round<T: Table + ?Sized>(
    table: &mut T,
    round: &mut RoundContext,
) -> Result<RoundReport, GameError> {
    round.deal_initial()?;
    let (first, second) = (round.player.cards()[0], round.player.cards()[1]);
    table.notify(&format!(
        "{}, you have drawn the {first} and the {second} ({}).",
        round.player_name,
        round.player.value()
    ));
    table.notify(&format!(
        "The dealer has drawn the {} and the ???",
        round.dealer.cards()[0]
    ));

    let report = if let Some(resolution) = resolve_naturals(&round.player, &round.dealer) {
        round.reveal_dealer(table);
        round.report(None, None, resolution)
    } else {
        let player_state = round.play_player_turn(table)?;
        if player_state == TurnState::Bust {
            let resolution = resolve(
                None,
                round.dealer.value(),
                player_state,
                round.player.value(),
            );
            round.report(Some(player_state), None, resolution)
        } else {
            round.reveal_dealer(table);
            let dealer_state = round.play_dealer_turn(table)?;
            let resolution = resolve(
                Some(dealer_state),
                round.dealer.value(),
                player_state,
                round.player.value(),
            );
            round.report(Some(player_state), Some(dealer_state), resolution)
        }
    };

    table.notify(&report.resolution.message(
        &report.player_name,
        report.player_value,
        report.dealer_value,
    ));
    info!(
        outcome = ?report.resolution.outcome,
        reason = ?report.resolution.reason,
        report = %serde_json::to_string(&report).unwrap_or_default(),
        "round finished"
    );
    Ok(report)
}

/// Asks whether the player is ready, then plays one round with `deck`.
/// `None` when the player declines.
pub fn play_session<T: Table + ?Sized>(
    table: &mut T,
    player_name: &str,
    deck: Deck,
) -> Result<Option<RoundReport>, GameError> {
    let ready = ask(table, WELCOME, &["yes", "no"], None)?;
    if ready == "no" {
        table.notify(FAREWELL);
        info!("player declined to play");
        return Ok(None);
    }
    let mut round = RoundContext::new(player_name, deck);
    play_round(table, &mut round).map(Some)
}
