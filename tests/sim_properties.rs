//! Invariants that must hold for any input sequence

use fussball::Settings;
use fussball::consts::*;
use fussball::sim::{Ball, GameEvent, GameLogic, InputCommand, Player, Spindle, Table, TeamColor, Vector};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn command() -> impl Strategy<Value = InputCommand> {
    prop_oneof![
        any::<bool>().prop_map(|up| InputCommand::MoveSelected { up }),
        any::<bool>().prop_map(|clockwise| InputCommand::RotateSelected { clockwise }),
        Just(InputCommand::ResetBall),
        prop::sample::select(vec!['s', 'D', 'f', 'x']).prop_map(InputCommand::ToggleSelect),
    ]
}

proptest! {
    #[test]
    fn ball_never_leaves_the_table(
        x in 110i32..=890,
        y in 110i32..=890,
        vx in -200.0f64..200.0,
        vy in -200.0f64..200.0,
        seed in any::<u64>(),
    ) {
        let table = Table::new(1000, 1000);
        let mut ball = Ball::new(x, y, Pcg32::seed_from_u64(seed));
        ball.set_velocity(Vector::new(vx, vy));
        let r = ball.radius();

        for _ in 0..80 {
            ball.move_on(&table);
            if ball.is_off_table() {
                continue;
            }
            let (bx, by) = ball.position();
            prop_assert!(bx - r >= table.left_wall.x);
            prop_assert!(bx + r <= table.right_wall.x);
            prop_assert!(by - r >= table.top_wall.y);
            prop_assert!(by + r <= table.bottom_wall.y);
        }
    }

    #[test]
    fn friction_only_slows_the_ball(
        vx in -100.0f64..100.0,
        vy in -100.0f64..100.0,
    ) {
        let table = Table::new(1000, 1000);
        let mut ball = Ball::new(500, 500, Pcg32::seed_from_u64(0));
        ball.set_velocity(Vector::new(vx, vy));

        for _ in 0..60 {
            if ball.is_off_table() {
                break;
            }
            let before = ball.velocity().magnitude();
            ball.move_on(&table);
            let after = ball.velocity().magnitude();
            prop_assert!(after <= before * BALL_FRICTION + 1e-9);
        }
    }

    #[test]
    fn spindle_players_stay_on_the_table(moves in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut spindle = Spindle::new(5, 400, 25, 975, 100, 900, TeamColor::Red, None);
        for up in moves {
            spindle.move_vertical(up);
            for player in spindle.players() {
                let y = player.position().1;
                prop_assert!((100..=900).contains(&y));
            }
        }
    }

    #[test]
    fn momentum_stays_capped(turns in prop::collection::vec(0u8..3, 0..100)) {
        let mut player = Player::new(0, 0);
        for turn in turns {
            match turn {
                0 => player.rotate(true),
                1 => player.rotate(false),
                _ => player.decay_momentum(),
            }
            prop_assert!(player.momentum().abs() <= MAX_MOMENTUM);
        }
    }
}

proptest! {
    // Whole matches are slow; fewer cases
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn same_seed_same_match(
        seed in any::<u64>(),
        commands in prop::collection::vec((1u64..300, command()), 0..40),
    ) {
        let settings = Settings::default();
        let mut a = GameLogic::with_seed(&settings, seed);
        let mut b = GameLogic::with_seed(&settings, seed);
        let mut commands = commands;
        commands.sort_by_key(|(at, _)| *at);
        let mut pending = commands.into_iter().peekable();

        for n in 1..=300 {
            while let Some((_, cmd)) = pending.next_if(|(at, _)| *at == n) {
                a.handle(cmd);
                b.handle(cmd);
            }
            a.tick(n);
            b.tick(n);
        }

        prop_assert_eq!(a.state().ball().position(), b.state().ball().position());
        prop_assert_eq!(a.state().human_team(), b.state().human_team());
        prop_assert_eq!(a.state().computer_team(), b.state().computer_team());
        prop_assert_eq!(a.state().human_score(), b.state().human_score());
        prop_assert_eq!(a.state().computer_score(), b.state().computer_score());
    }

    #[test]
    fn game_over_announced_once_when_threshold_reached(seed in any::<u64>()) {
        let settings = Settings { demo_mode: true, ..Settings::default() };
        let mut logic = GameLogic::with_seed(&settings, seed);
        let to_win = logic.state().score_to_win();
        let leading = |l: &GameLogic| l.state().human_score().max(l.state().computer_score());
        let mut announced = 0;

        for n in 1..=2_000 {
            let before = leading(&logic);
            let events = logic.tick(n);
            let after = leading(&logic);

            if before >= to_win {
                prop_assert!(events.is_empty());
                continue;
            }
            let game_overs = events
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count();
            prop_assert_eq!(game_overs, usize::from(after >= to_win));
            announced += game_overs;
        }
        prop_assert!(announced <= 1);
        prop_assert_eq!(announced == 1, logic.state().is_game_over());
    }
}
