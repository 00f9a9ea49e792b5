//! One human-versus-engine game, driven the way a front end drives it.

use super::contracts::{BoardConsistent, LegalPlacement, MonotonicBoard};
use super::error::SessionError;
use super::heuristic::{Decision, ForkDefense};
use super::rules::{self, Outcome};
use super::{Board, DecisionEngine, Mark, Move, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What happened on one call to [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The human's cell.
    pub human: Position,
    /// The engine's reply, if the game was still going.
    pub reply: Option<Decision>,
    /// Set once the game is over.
    pub outcome: Option<Outcome>,
}

/// A game between a human and a [`DecisionEngine`].
///
/// The session keeps its own display board next to the engine's and
/// checks for a finished game after every mark, exactly as a UI would.
/// `X` always moves first.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: DecisionEngine,
    display: Board,
    history: Vec<Move>,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Starts a game; if the engine holds `X` it plays its opening move.
    #[instrument]
    pub fn start(human: Mark, fork_defense: ForkDefense) -> Result<Self, SessionError> {
        let engine = DecisionEngine::new(human).with_fork_defense(fork_defense);
        let mut session = Self {
            engine,
            display: Board::new(),
            history: Vec::new(),
            outcome: None,
        };
        if session.engine.computer() == Mark::X {
            let opening = session.engine.record_and_explain(None)?;
            session.commit_reply(opening)?;
        }
        info!(%human, %fork_defense, "Game started");
        Ok(session)
    }

    /// Plays the human's cell and, if the game continues, the engine's reply.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] once the game has ended, or the engine's
    /// error for an illegal cell. Nothing changes on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<Turn, SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::GameOver);
        }
        let human = LegalPlacement::check(&self.display, index)?;
        let mark = self.engine.human();

        // Game over after the human's mark: the engine is not consulted.
        let mut after_human = self.display.clone();
        after_human.place(human, mark);
        if let Some(outcome) = rules::outcome(&after_human) {
            self.display = after_human;
            self.history.push(Move::new(mark, human));
            return Ok(self.finish(human, None, outcome));
        }

        let reply = self.engine.record_and_explain(Some(index))?;
        self.display = after_human;
        self.history.push(Move::new(mark, human));
        self.commit_reply(reply)?;

        debug_assert!(BoardConsistent::holds(&self.display));
        match rules::outcome(&self.display) {
            Some(outcome) => Ok(self.finish(human, Some(reply), outcome)),
            None => Ok(Turn {
                human,
                reply: Some(reply),
                outcome: None,
            }),
        }
    }

    /// A new game with the same marks and fork defense.
    #[instrument(skip(self))]
    pub fn restart(self) -> Result<Self, SessionError> {
        Self::start(self.engine.human(), self.engine.fork_defense())
    }

    /// The board as displayed.
    pub fn board(&self) -> &Board {
        &self.display
    }

    /// The engine playing this game.
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Moves so far, both players.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Set once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn commit_reply(&mut self, reply: Decision) -> Result<(), SessionError> {
        let before = self.display.clone();
        let computer = self.engine.computer();
        self.engine.commit(reply.position().to_index())?;
        self.display.place(reply.position(), computer);
        self.history.push(Move::new(computer, reply.position()));
        debug_assert!(MonotonicBoard::holds(&before, &self.display));
        debug_assert_eq!(self.engine.board(), &self.display);
        debug!(%reply, "Engine move committed");
        Ok(())
    }

    fn finish(&mut self, human: Position, reply: Option<Decision>, outcome: Outcome) -> Turn {
        debug_assert_eq!(outcome.is_draw(), rules::is_draw(&self.display));
        info!(%outcome, verdict = %outcome.verdict(self.engine.human()), "Game over");
        self.outcome = Some(outcome);
        Turn {
            human,
            reply,
            outcome: Some(outcome),
        }
    }
}
