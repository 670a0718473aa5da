use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Sound effect the front end should play after a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Open,
    Flag,
    Win,
    Lose,
}

impl Cue {
    pub fn for_reveal(outcome: RevealOutcome) -> Vec<Cue> {
        use RevealOutcome::*;
        match outcome {
            NoChange => Vec::new(),
            Revealed => alloc::vec![Cue::Open],
            Won => alloc::vec![Cue::Open, Cue::Win],
            HitMine => alloc::vec![Cue::Open, Cue::Lose],
        }
    }

    pub fn for_mark(outcome: MarkOutcome) -> Vec<Cue> {
        if outcome.has_update() {
            alloc::vec![Cue::Flag]
        } else {
            Vec::new()
        }
    }
}

/// Result of handling one input event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Turn {
    pub cues: Vec<Cue>,
    pub revealed: Vec<Coord2>,
    pub redraw: bool,
}

impl Turn {
    fn from_reveal(result: RevealResult) -> Self {
        Self {
            cues: Cue::for_reveal(result.outcome),
            redraw: result.outcome.has_update(),
            revealed: result.revealed,
        }
    }

    fn from_mark(outcome: MarkOutcome) -> Self {
        Self {
            cues: Cue::for_mark(outcome),
            revealed: Vec::new(),
            redraw: outcome.has_update(),
        }
    }

    pub fn ended_game(&self) -> bool {
        self.cues.iter().any(|cue| matches!(cue, Cue::Win | Cue::Lose))
    }
}

/// One player's game: fixed config, a random source, and the current board.
///
/// Restarting swaps in a freshly generated engine; boards are never reused.
#[derive(Debug)]
pub struct GameSession<R: Rng> {
    config: GameConfig,
    geometry: BoardGeometry,
    rng: R,
    engine: PlayEngine,
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self> {
        let engine = Self::fresh_engine(config, &mut rng)?;
        Ok(Self {
            config,
            geometry: BoardGeometry::new(config.size, config::CELL_SIZE),
            rng,
            engine,
        })
    }

    fn fresh_engine(config: GameConfig, rng: &mut R) -> Result<PlayEngine> {
        PlayEngine::initialize(config, RngLayoutGenerator::new(rng))
    }

    pub fn restart(&mut self) -> Result<()> {
        self.engine = Self::fresh_engine(self.config, &mut self.rng)?;
        log::debug!("new game: {:?}", self.config);
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_engine(&self.engine)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Turn {
        Turn::from_reveal(self.engine.reveal(coords))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Turn {
        Turn::from_mark(self.engine.toggle_flag(coords))
    }

    /// Applies a pointer-down event; off-board and unknown-button events do nothing.
    pub fn handle(&mut self, input: PointerInput) -> Turn {
        match self.geometry.action_for(input) {
            Some(PointerAction::Reveal(coords)) => {
                log::trace!("reveal cell: {:?}", coords);
                self.reveal(coords)
            }
            Some(PointerAction::Flag(coords)) => {
                log::trace!("mark cell: {:?}", coords);
                self.toggle_flag(coords)
            }
            None => Turn::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session() -> GameSession<SmallRng> {
        GameSession::new(GameConfig::default(), SmallRng::seed_from_u64(11)).unwrap()
    }

    fn first_safe(session: &GameSession<SmallRng>) -> Coord2 {
        let (rows, cols) = session.config().size;
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .find(|&coords| !session.engine().has_mine_at(coords))
            .unwrap()
    }

    fn first_mine(session: &GameSession<SmallRng>) -> Coord2 {
        session.engine().mine_layout().iter_mines().next().unwrap()
    }

    fn click(button: i16, (row, col): Coord2) -> PointerInput {
        PointerInput {
            button: button.into(),
            x: f64::from(col) * config::CELL_SIZE + 1.0,
            y: f64::from(row) * config::CELL_SIZE + 1.0,
        }
    }

    #[test]
    fn new_session_rejects_bad_config() {
        let config = GameConfig::new_unchecked((2, 2), 4);
        let result = GameSession::new(config, SmallRng::seed_from_u64(0));

        assert!(matches!(result, Err(GameError::TooManyMines { .. })));
    }

    #[test]
    fn primary_click_reveals_and_cues_open() {
        let mut session = session();
        let coords = first_safe(&session);

        let turn = session.handle(click(0, coords));

        assert!(turn.redraw);
        assert_eq!(turn.cues.first(), Some(&Cue::Open));
        assert!(turn.revealed.contains(&coords));
        assert!(session.engine().cell_at(coords).is_revealed());
    }

    #[test]
    fn secondary_click_flags_and_cues_flag() {
        let mut session = session();

        let turn = session.handle(click(2, (0, 0)));

        assert_eq!(turn.cues, [Cue::Flag]);
        assert_eq!(session.view().flags_placed, 1);
    }

    #[test]
    fn clicking_a_mine_loses() {
        let mut session = session();
        let mine = first_mine(&session);

        let turn = session.handle(click(0, mine));

        assert_eq!(turn.cues, [Cue::Open, Cue::Lose]);
        assert!(turn.ended_game());
        assert_eq!(session.engine().state(), EngineState::Lost);
        assert_eq!(session.handle(click(2, (0, 0))), Turn::default());
    }

    #[test]
    fn off_board_and_middle_clicks_are_ignored() {
        let mut session = session();
        let before = session.engine().clone();

        let off_board = PointerInput {
            button: PointerButton::Primary,
            x: 1000.0,
            y: 5.0,
        };
        assert_eq!(session.handle(off_board), Turn::default());
        assert_eq!(session.handle(click(1, (0, 0))), Turn::default());
        assert_eq!(session.engine(), &before);
    }

    #[test]
    fn restart_replaces_board() {
        let mut session = session();
        let mine = first_mine(&session);
        session.handle(click(0, mine));

        session.restart().unwrap();

        assert_eq!(session.engine().state(), EngineState::Playing);
        assert_eq!(session.engine().flags_placed(), 0);
        assert_eq!(session.engine().total_mines(), 15);
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut session = session();
        let (rows, cols) = session.config().size;
        let mut last = Turn::default();

        for row in 0..rows {
            for col in 0..cols {
                if !session.engine().has_mine_at((row, col)) {
                    let turn = session.reveal((row, col));
                    if turn.redraw {
                        last = turn;
                    }
                }
            }
        }

        assert_eq!(last.cues, [Cue::Open, Cue::Win]);
        assert_eq!(session.engine().state(), EngineState::Won);
    }
}
