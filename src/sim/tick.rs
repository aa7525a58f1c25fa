//! Fixed-rate simulation tick
//!
//! [`GameLogic`] exclusively owns the [`GameState`]. A driver calls
//! [`GameLogic::tick`] once per timer period and forwards player input in
//! between ticks; renderers read the state through [`GameLogic::state`].

use serde::{Deserialize, Serialize};

use super::ai::AiController;
use super::ball::Score;
use super::state::GameState;
use crate::consts::*;
use crate::settings::Settings;

/// Player input, applied synchronously between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    /// Slide the selected spindles one step
    MoveSelected { up: bool },
    /// Quarter turn of the selected spindles
    RotateSelected { clockwise: bool },
    /// Put the ball back on the center spot with a new random velocity
    ResetBall,
    /// Select or deselect the spindle bound to this key
    ToggleSelect(char),
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Goal {
        scorer: Score,
        human: u32,
        computer: u32,
    },
    GameOver {
        winner: Score,
        seconds: f64,
    },
}

/// Tick orchestrator and sole mutator of the game state
#[derive(Debug, Clone)]
pub struct GameLogic {
    state: GameState,
    computer_ai: AiController,
    /// Drives the human team too when running a demo
    human_ai: Option<AiController>,
    invert_rotation: bool,
}

impl GameLogic {
    /// Start a match from settings, picking a random seed if none is set
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: &Settings, seed: u64) -> Self {
        log::info!(
            "New match: {}x{} table, first to {}, seed {}",
            settings.table_width,
            settings.table_height,
            settings.score_to_win,
            seed
        );
        let state = GameState::new(
            settings.table_width,
            settings.table_height,
            settings.score_to_win,
            seed,
        );
        Self {
            state,
            computer_ai: AiController::for_computer(seed),
            human_ai: settings.demo_mode.then(|| AiController::for_human(seed)),
            invert_rotation: settings.invert_rotation,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance the match by one tick; `tick_number` counts from 1
    ///
    /// Order: AI (every [`AI_PERIOD`] ticks), player/ball contact, ball
    /// movement and scoring, momentum decay (every [`DECAY_PERIOD`] ticks),
    /// goal light fade. Does nothing once the match is over.
    pub fn tick(&mut self, tick_number: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.is_game_over() {
            return events;
        }
        let state = &mut self.state;
        state.time_ticks += 1;

        if tick_number % AI_PERIOD == 0 {
            self.computer_ai.take_turn(&mut state.computer, &state.ball);
            if let Some(ai) = self.human_ai.as_mut() {
                ai.take_turn(&mut state.human, &state.ball);
            }
        }

        if !state.ball.is_off_table() {
            state.human.collide(&mut state.ball);
            state.computer.collide(&mut state.ball);
        }

        let score = state.ball.move_on(&state.table);
        if score != Score::Nobody {
            state.record_score(score);
            log::info!(
                "Goal for {:?}! Human {} - {} Computer",
                score,
                state.human_score,
                state.computer_score
            );
            events.push(GameEvent::Goal {
                scorer: score,
                human: state.human_score,
                computer: state.computer_score,
            });

            if state.is_game_over() {
                let winner = state.winner();
                let seconds = state.elapsed_seconds();
                log::info!("Game over after {seconds:.1}s, winner {winner:?}");
                events.push(GameEvent::GameOver { winner, seconds });
            }
        }

        if tick_number % DECAY_PERIOD == 0 {
            state.human.decay_momentum();
            state.computer.decay_momentum();
        }

        state.table.decay_goal_lights();
        events
    }

    /// Apply one input command; ignored once the match is over
    pub fn handle(&mut self, command: InputCommand) {
        if self.state.is_game_over() {
            log::debug!("Ignoring {command:?}, match is over");
            return;
        }
        log::debug!("Input: {command:?}");
        match command {
            InputCommand::MoveSelected { up } => self.state.human.move_selected(up),
            InputCommand::RotateSelected { clockwise } => {
                self.state
                    .human
                    .rotate_selected(clockwise != self.invert_rotation);
            }
            InputCommand::ResetBall => self.state.ball.reset(),
            InputCommand::ToggleSelect(control) => {
                if !self.state.human.toggle_select(control) {
                    log::debug!("No spindle bound to {control:?}");
                }
            }
        }
    }

    pub fn move_selected_spindles(&mut self, up: bool) {
        self.handle(InputCommand::MoveSelected { up });
    }

    pub fn rotate_selected_spindles(&mut self, clockwise: bool) {
        self.handle(InputCommand::RotateSelected { clockwise });
    }

    pub fn reset_ball(&mut self) {
        self.handle(InputCommand::ResetBall);
    }

    pub fn toggle_spindle_select(&mut self, control: char) {
        self.handle(InputCommand::ToggleSelect(control));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::vector::Vector;

    fn logic(seed: u64) -> GameLogic {
        GameLogic::with_seed(&Settings::default(), seed)
    }

    /// Ball one step from the left goal, clear of every player
    fn line_up_left_goal(logic: &mut GameLogic) {
        logic.state.ball.set_position(115, 400);
        logic.state.ball.set_velocity(Vector::new(-20.0, 0.0));
    }

    #[test]
    fn test_ai_runs_every_fifth_tick() {
        let mut logic = logic(5);
        let initial = logic.state().computer_team().clone();

        for n in 1..AI_PERIOD {
            logic.tick(n);
            assert_eq!(logic.state().computer_team(), &initial);
        }

        let changed = (1..=10).any(|i| {
            logic.tick(i * AI_PERIOD);
            logic.state().computer_team() != &initial
        });
        assert!(changed);
    }

    #[test]
    fn test_momentum_decays_every_tenth_tick() {
        let mut logic = logic(5);
        logic.toggle_spindle_select('S');
        logic.rotate_selected_spindles(true);
        logic.rotate_selected_spindles(true);
        let momentum = |l: &GameLogic| l.state().human_team().spindles()[0].players()[0].momentum();
        assert_eq!(momentum(&logic), -2.0 * MOMENTUM_CHANGE);

        for n in 1..DECAY_PERIOD {
            logic.tick(n);
            assert_eq!(momentum(&logic), -2.0 * MOMENTUM_CHANGE);
        }
        logic.tick(DECAY_PERIOD);
        assert!((momentum(&logic) - -2.0 * MOMENTUM_CHANGE / 1f64.exp()).abs() < 1e-9);
    }

    #[test]
    fn test_goal_updates_score_and_light() {
        let mut logic = logic(8);
        line_up_left_goal(&mut logic);

        let events = logic.tick(1);
        assert_eq!(
            events,
            vec![GameEvent::Goal {
                scorer: Score::Human,
                human: 1,
                computer: 0
            }]
        );
        assert!(logic.state().ball().is_off_table());
        assert!(logic.state().table().left_goal.is_lit_up());

        // Ball is frozen off the table, so nothing else can score yet
        for n in 2..=(BALL_REAPPEAR_DELAY as u64 + 1) {
            assert!(logic.tick(n).is_empty());
        }
        assert!(logic.state().table().left_goal.is_lit_up());

        let mut last_left_goal = 1;
        let end = 40;
        for n in (BALL_REAPPEAR_DELAY as u64 + 2)..=end {
            let events = logic.tick(n);
            if events.iter().any(|e| {
                matches!(
                    e,
                    GameEvent::Goal {
                        scorer: Score::Human,
                        ..
                    }
                )
            }) {
                last_left_goal = n;
            }
        }
        let expect_lit = end - last_left_goal < GOAL_LIGHT_TICKS as u64;
        assert_eq!(logic.state().table().left_goal.is_lit_up(), expect_lit);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut logic = logic(8);
        logic.state.human_score = SCORE_TO_WIN - 1;
        line_up_left_goal(&mut logic);

        let events = logic.tick(1);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            GameEvent::GameOver {
                winner: Score::Human,
                ..
            }
        ));
        assert!(logic.state().is_game_over());
        assert_eq!(logic.state().winner(), Score::Human);

        let ticks = logic.state().time_ticks();
        let ball = logic.state().ball().position();
        assert!(logic.tick(2).is_empty());
        assert_eq!(logic.state().time_ticks(), ticks);
        assert_eq!(logic.state().ball().position(), ball);

        logic.toggle_spindle_select('d');
        assert!(logic.state().human_team().spindles().iter().all(|s| !s.is_selected()));

        let summary = logic.state().summary().expect("match is over");
        assert_eq!(summary.winner, Score::Human);
        assert_eq!(summary.human_score, SCORE_TO_WIN);
    }

    #[test]
    fn test_invert_rotation() {
        let settings = Settings {
            invert_rotation: true,
            ..Settings::default()
        };
        let mut logic = GameLogic::with_seed(&settings, 1);
        logic.handle(InputCommand::ToggleSelect('f'));
        logic.handle(InputCommand::RotateSelected { clockwise: true });

        let goalie = &logic.state().human_team().spindles()[2].players()[0];
        assert_eq!(goalie.momentum(), MOMENTUM_CHANGE);
    }

    #[test]
    fn test_move_selected_only() {
        let mut logic = logic(1);
        let before: Vec<_> = logic.state().spindles().map(|s| s.top()).collect();
        logic.move_selected_spindles(true);
        let after: Vec<_> = logic.state().spindles().map(|s| s.top()).collect();
        assert_eq!(before, after);

        logic.toggle_spindle_select('s');
        logic.move_selected_spindles(false);
        let moved = logic.state().human_team().spindles()[0].top();
        assert_eq!(moved.1, before[0].1 + SPINDLE_STEP);
    }

    #[test]
    fn test_reset_ball_command() {
        let mut logic = logic(3);
        logic.state.ball.set_position(200, 200);
        logic.reset_ball();
        assert_eq!(logic.state().ball().position(), (500, 500));
    }

    #[test]
    fn test_demo_mode_moves_both_teams() {
        let settings = Settings {
            demo_mode: true,
            ..Settings::default()
        };
        let mut logic = GameLogic::with_seed(&settings, 21);
        let human = logic.state().human_team().clone();
        for n in 1..=50 {
            logic.tick(n);
        }
        assert_ne!(logic.state().human_team(), &human);
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = logic(2024);
        let mut b = logic(2024);
        for n in 1..=2_000 {
            assert_eq!(a.tick(n).len(), b.tick(n).len());
        }
        assert_eq!(a.state().ball().position(), b.state().ball().position());
        assert_eq!(a.state().human_score(), b.state().human_score());
        assert_eq!(a.state().computer_score(), b.state().computer_score());
        assert_eq!(a.state().computer_team(), b.state().computer_team());
    }
}
