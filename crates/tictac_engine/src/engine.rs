//! The game-state engine: board, turns, outcomes and session scores.

use crate::error::{ConfigConflict, InvalidMove};
use crate::listener::{RoundEvent, RoundListener};
use crate::player::{Player, PlayerSetup, validate_pair};
use crate::rules;
use crate::types::{Board, BoardSnapshot, Cell, Coord, Line, PlayerId};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Empty board, nobody has moved yet.
    NotStarted,
    /// At least one move, no outcome yet.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winner.
        seat: PlayerId,
        /// The completed line.
        line: Line,
    },
    /// The board filled without a winner.
    Drawn,
}

impl RoundStatus {
    /// True once the round has a win or a draw.
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundStatus::Won { .. } | RoundStatus::Drawn)
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The round goes on with the other player.
    Continued,
    /// The mover won along this line.
    Won(Line),
    /// The board is full with no winner.
    Drawn,
}

/// Session totals for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Name and score for each seat, seat one first.
    pub players: [(String, u32); 2],
    /// Drawn rounds.
    pub draws: u32,
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [(one, one_score), (two, two_score)] = &self.players;
        write!(
            f,
            "{one}: {one_score}    |    {two}: {two_score}    |    Draws: {}",
            self.draws
        )
    }
}

/// Tic-tac-toe game engine.
///
/// Holds one round's board and turn state plus the session's scores.
/// Front-ends call [`GameEngine::apply_move`] and re-render from
/// [`GameEngine::board_snapshot`] and [`GameEngine::current_player`].
pub struct GameEngine {
    players: [Player; 2],
    board: Board,
    current: PlayerId,
    moves_played: usize,
    status: RoundStatus,
    draws: u32,
    listener: Option<Box<dyn RoundListener>>,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("players", &self.players)
            .field("board", &self.board)
            .field("current", &self.current)
            .field("moves_played", &self.moves_played)
            .field("status", &self.status)
            .field("draws", &self.draws)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::from_players(
            [PlayerId::One, PlayerId::Two]
                .map(|seat| Player::from_setup(PlayerSetup::default_for(seat), 0)),
        )
    }
}

impl GameEngine {
    /// Creates an engine for two players.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigConflict`] when the players share a name or symbol
    /// after normalisation.
    #[instrument(skip_all, fields(one = %one.name, two = %two.name))]
    pub fn new(one: PlayerSetup, two: PlayerSetup) -> Result<Self, ConfigConflict> {
        let [one, two] = validate_pair(one, two)?;
        info!("Creating game engine");
        Ok(Self::from_players([
            Player::from_setup(one, 0),
            Player::from_setup(two, 0),
        ]))
    }

    fn from_players(players: [Player; 2]) -> Self {
        Self {
            players,
            board: Board::new(),
            current: PlayerId::One,
            moves_played: 0,
            status: RoundStatus::NotStarted,
            draws: 0,
            listener: None,
        }
    }

    /// Attaches a listener that hears about every move and outcome.
    pub fn with_listener(mut self, listener: impl RoundListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Replaces (or removes) the listener.
    pub fn set_listener(&mut self, listener: Option<Box<dyn RoundListener>>) {
        self.listener = listener;
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::RoundOver`] if the round already has an outcome
    /// - [`InvalidMove::OutOfRange`] if either coordinate is outside 0-2
    /// - [`InvalidMove::Occupied`] if the cell is taken
    ///
    /// The engine is unchanged on error.
    #[instrument(skip(self), fields(seat = %self.current, moves = self.moves_played))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, InvalidMove> {
        if self.status.is_terminal() {
            return Err(InvalidMove::RoundOver);
        }
        let at = Coord::new(row, col).ok_or(InvalidMove::OutOfRange { row, col })?;
        if !self.board.is_empty(at) {
            return Err(InvalidMove::Occupied { row, col });
        }

        let seat = self.current;
        self.board.set(at, Cell::Occupied(seat));
        self.moves_played += 1;
        self.status = RoundStatus::InProgress;
        debug!(%at, "Mark placed");
        self.notify(RoundEvent::MovePlayed { seat, at });

        let symbol = self.players[seat.index()].symbol().clone();
        if let Some(line) = self.check_winner(&symbol) {
            self.players[seat.index()].record_win();
            self.status = RoundStatus::Won { seat, line };
            info!(winner = %self.players[seat.index()].name(), "Round won");
            self.notify(RoundEvent::RoundWon { seat, line });
            return Ok(MoveOutcome::Won(line));
        }

        if self.is_draw() {
            self.draws += 1;
            self.status = RoundStatus::Drawn;
            info!(draws = self.draws, "Round drawn");
            self.notify(RoundEvent::RoundDrawn);
            return Ok(MoveOutcome::Drawn);
        }

        self.advance_turn();
        Ok(MoveOutcome::Continued)
    }

    /// Applies a move given as a row-major index (0-8).
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], except that an index past 8 gives
    /// [`InvalidMove::IndexOutOfRange`].
    pub fn apply_index(&mut self, index: usize) -> Result<MoveOutcome, InvalidMove> {
        if self.status.is_terminal() {
            return Err(InvalidMove::RoundOver);
        }
        let at = Coord::from_index(index).ok_or(InvalidMove::IndexOutOfRange { index })?;
        self.apply_move(at.row, at.col)
    }

    /// Returns the first line held entirely by the player with `symbol`.
    ///
    /// Lines are scanned rows first, then columns, then diagonals.
    /// An unknown symbol never wins.
    #[instrument(skip(self))]
    pub fn check_winner(&self, symbol: &str) -> Option<Line> {
        let seat = self.seat_of(symbol)?;
        rules::winning_line(&self.board, seat)
    }

    /// True iff all nine cells are filled and nobody has a line.
    pub fn is_draw(&self) -> bool {
        rules::is_full(&self.board) && rules::any_winning_line(&self.board).is_none()
    }

    /// Hands the turn to the other seat.
    fn advance_turn(&mut self) {
        self.current = self.current.other();
        debug!(next = %self.current, "Turn advanced");
    }

    /// Starts a fresh round: empty board, player one to move. Scores stay.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board = Board::new();
        self.moves_played = 0;
        self.current = PlayerId::One;
        self.status = RoundStatus::NotStarted;
        info!("Round reset");
    }

    /// Zeroes both players' scores and the draw count. The board is untouched.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.clear_score();
        }
        self.draws = 0;
        info!("Scores reset");
    }

    /// Replaces both players and starts a fresh round.
    ///
    /// Each new player keeps the score of the previous player with the same
    /// name, if there was one. The draw count is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigConflict`] on duplicate names or symbols; the engine
    /// is unchanged in that case.
    #[instrument(skip_all, fields(one = %one.name, two = %two.name))]
    pub fn reconfigure_players(
        &mut self,
        one: PlayerSetup,
        two: PlayerSetup,
    ) -> Result<(), ConfigConflict> {
        let setups = validate_pair(one, two)?;
        let players = setups.map(|setup| {
            let carried = self
                .players
                .iter()
                .find(|p| p.name() == &setup.name)
                .map_or(0, |p| *p.score());
            Player::from_setup(setup, carried)
        });
        self.players = players;
        info!("Players reconfigured");
        self.reset_round();
        Ok(())
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    /// Seat of the player whose turn it is.
    pub fn current_seat(&self) -> PlayerId {
        self.current
    }

    /// The player in `seat`.
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat.index()]
    }

    /// Both players, seat one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board with each cell replaced by its occupant's symbol.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.rows().map(|row| {
            row.map(|cell| {
                cell.occupant()
                    .map(|seat| self.players[seat.index()].symbol().clone())
            })
        })
    }

    /// Moves played this round.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// State of the current round.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Drawn rounds this session.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// The winning line, once the round is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            RoundStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Session totals.
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            players: self
                .players
                .clone()
                .map(|p| (p.name().clone(), *p.score())),
            draws: self.draws,
        }
    }

    fn seat_of(&self, symbol: &str) -> Option<PlayerId> {
        PlayerId::iter().find(|seat| self.players[seat.index()].symbol() == symbol)
    }

    fn notify(&self, event: RoundEvent) {
        if let Some(listener) = &self.listener {
            listener.on_event(event);
        }
    }
}
