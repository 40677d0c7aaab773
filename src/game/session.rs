//! Game Session
//!
//! Runs the interactive loop for one player. The session owns the move set,
//! the win relation and the entropy source; nothing is global.
//!
//! Per round the computer's move is drawn, keyed and committed *before* the
//! player's line is read. Help and invalid input leave that sealed move in
//! place, so the player cannot make the computer re-roll. Only a resolved
//! round reveals and discards it.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::config::{ConfigError, SessionConfig};
use crate::core::moves::MoveSet;
use crate::core::rng::SessionRng;
use crate::core::rules::{resolve_round, WinRelation};
use crate::game::events::SessionEvent;
use crate::game::input::Command;
use crate::game::state::{RoundReport, SessionState, SessionSummary};
use crate::proof::commitment::{CommitmentError, MoveListCommitment, SealedMove};

/// Session errors.
///
/// Bad input is never an error; only a broken terminal or bad config is.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Commitment could not be created.
    #[error("Commitment error: {0}")]
    Commitment(#[from] CommitmentError),
}

/// One interactive game.
pub struct Session<R, I, O> {
    moves: MoveSet,
    relation: WinRelation,
    config: SessionConfig,
    rng: R,
    input: I,
    output: O,
    /// Computer move for the round in progress.
    pending: Option<SealedMove>,
    /// Startup commitment, revealed on exit.
    move_list: Option<MoveListCommitment>,
    state: SessionState,
    summary: SessionSummary,
}

impl<R: SessionRng, I: BufRead, O: Write> Session<R, I, O> {
    /// Create a session. The win relation is built once here.
    pub fn new(
        moves: MoveSet,
        config: SessionConfig,
        rng: R,
        input: I,
        output: O,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let relation = WinRelation::build(&moves);

        Ok(Self {
            moves,
            relation,
            config,
            rng,
            input,
            output,
            pending: None,
            move_list: None,
            state: SessionState::AwaitingInput,
            summary: SessionSummary::default(),
        })
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Play until the player exits or input ends.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        self.start()?;
        while !self.step()?.is_terminal() {}
        self.finish()?;
        Ok(self.summary)
    }

    /// Publish the move list commitment and the menu.
    pub fn start(&mut self) -> Result<(), SessionError> {
        info!(moves = self.moves.len(), "session started");

        let listed = MoveListCommitment::seal(&mut self.rng, &self.moves, self.config.key_bytes)?;
        SessionEvent::MoveListCommitted(listed.commitment()).emit(&mut self.output)?;
        SessionEvent::Menu(&self.moves).emit(&mut self.output)?;
        self.move_list = Some(listed);
        Ok(())
    }

    /// Handle one line of input and return the state it led to.
    pub fn step(&mut self) -> Result<SessionState, SessionError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let sealed = match self.pending.take() {
            Some(sealed) => sealed,
            None => self.seal()?,
        };

        SessionEvent::Prompt(&self.config.prompt).emit(&mut self.output)?;
        let command = self.read_command()?;
        let mut state = SessionState::after(&command);

        match command {
            Command::Exit => {
                SessionEvent::Exiting.emit(&mut self.output)?;
            }
            Command::Help => {
                SessionEvent::Menu(&self.moves).emit(&mut self.output)?;
                self.pending = Some(sealed);
            }
            Command::Invalid(token) => {
                debug!(%token, "rejected input");
                SessionEvent::InvalidMove.emit(&mut self.output)?;
                self.pending = Some(sealed);
            }
            Command::Play(index) => match self.moves.get(index).cloned() {
                Some(user_move) => {
                    let reveal = sealed.reveal();
                    let outcome = resolve_round(&user_move, &reveal.computer_move, &self.relation);
                    self.summary.record(outcome);

                    let report = RoundReport { user_move, outcome, reveal };
                    debug!(
                        round = self.summary.rounds,
                        user = %report.user_move,
                        computer = %report.computer_move(),
                        ?outcome,
                        "round resolved"
                    );
                    SessionEvent::RoundResolved(&report).emit(&mut self.output)?;
                }
                None => {
                    SessionEvent::InvalidMove.emit(&mut self.output)?;
                    self.pending = Some(sealed);
                    state = SessionState::InvalidInput;
                }
            },
        }

        self.state = state.next();
        Ok(state)
    }

    /// Reveal the startup commitment key.
    pub fn finish(&mut self) -> Result<(), SessionError> {
        if let Some(listed) = self.move_list.take() {
            let key = listed.reveal_key();
            SessionEvent::MoveListKey(&key).emit(&mut self.output)?;
        }
        info!(
            rounds = self.summary.rounds,
            wins = self.summary.wins,
            losses = self.summary.losses,
            ties = self.summary.ties,
            "session ended"
        );
        Ok(())
    }

    /// Draw and commit the computer's move for the next round.
    fn seal(&mut self) -> Result<SealedMove, SessionError> {
        let sealed = SealedMove::draw(&mut self.rng, &self.moves, self.config.key_bytes)?;
        debug!(digest = %sealed.commitment().digest_hex(), "computer move sealed");

        if self.config.announce_commitment {
            SessionEvent::RoundCommitted(sealed.commitment()).emit(&mut self.output)?;
        }
        Ok(sealed)
    }

    /// Read one line. End of input counts as exit.
    fn read_command(&mut self) -> Result<Command, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            writeln!(self.output)?;
            return Ok(Command::Exit);
        }
        Ok(Command::parse(&line, self.moves.len()))
    }
}
