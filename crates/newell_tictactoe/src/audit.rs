//! Exhaustive play against every possible opponent.
//!
//! The engine is deterministic, so trying every human reply at every turn,
//! with the engine moving first and then second, covers every game it can
//! ever play.

use super::error::EngineError;
use super::heuristic::{ForkDefense, Seats};
use super::rules::{self, Outcome};
use super::{DecisionEngine, Mark, Move};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// Tally of every game the engine can play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AuditReport {
    /// Fork defense the engine used.
    fork_defense: ForkDefense,
    /// Finished games.
    games: usize,
    /// Games the engine won.
    engine_wins: usize,
    /// Drawn games.
    ties: usize,
    /// Move lists of every game the engine lost.
    losses: Vec<Vec<Move>>,
}

impl AuditReport {
    fn new(fork_defense: ForkDefense) -> Self {
        Self {
            fork_defense,
            games: 0,
            engine_wins: 0,
            ties: 0,
            losses: Vec::new(),
        }
    }

    /// True if no game was lost.
    pub fn is_unbeaten(&self) -> bool {
        self.losses.is_empty()
    }

    fn record(&mut self, outcome: Outcome, engine: Mark, line: &[Move]) {
        self.games += 1;
        match outcome.winner() {
            Some(mark) if mark == engine => self.engine_wins += 1,
            Some(_) => {
                warn!(moves = ?line, "Engine lost");
                self.losses.push(line.to_vec());
            }
            None => self.ties += 1,
        }
    }
}

/// Plays out every game for both seat assignments.
#[instrument]
pub fn audit(fork_defense: ForkDefense) -> Result<AuditReport, EngineError> {
    let mut report = AuditReport::new(fork_defense);
    for human in Mark::iter() {
        let mut engine = DecisionEngine::new(human).with_fork_defense(fork_defense);
        let mut line = Vec::new();
        if engine.computer() == Mark::X {
            let opening = engine.record_and_explain(None)?.position();
            engine.commit(opening.to_index())?;
            line.push(Move::new(engine.computer(), opening));
        }
        explore(&engine, &mut line, &mut report)?;
    }
    info!(
        games = report.games,
        wins = report.engine_wins,
        ties = report.ties,
        losses = report.losses.len(),
        "Audit complete"
    );
    Ok(report)
}

/// Branches on every human move from a position where the human is to move.
fn explore(
    engine: &DecisionEngine,
    line: &mut Vec<Move>,
    report: &mut AuditReport,
) -> Result<(), EngineError> {
    let Seats { human, computer } = engine.seats();
    for pos in engine.board().empty_positions() {
        line.push(Move::new(human, pos));

        let mut after_human = engine.board().clone();
        after_human.place(pos, human);
        if let Some(outcome) = rules::outcome(&after_human) {
            report.record(outcome, computer, line);
        } else {
            let mut next = engine.clone();
            let reply = next.record_and_explain(Some(pos.to_index()))?;
            next.commit(reply.position().to_index())?;
            line.push(Move::new(computer, reply.position()));
            match rules::outcome(next.board()) {
                Some(outcome) => report.record(outcome, computer, line),
                None => explore(&next, line, report)?,
            }
            line.pop();
        }

        line.pop();
    }
    Ok(())
}
