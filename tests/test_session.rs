use alien_invasion::config::GameConfig;
use alien_invasion::entities::GameStatus;
use alien_invasion::feedback::{Cue, Recorder};
use alien_invasion::input::Intent;
use alien_invasion::session::Session;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn new_session(seed: u64) -> Session<StdRng, Recorder> {
    Session::new(
        GameConfig::default(),
        StdRng::seed_from_u64(seed),
        Recorder::default(),
    )
}

#[test]
fn intents_are_applied_immediately() {
    let mut session = new_session(1);
    session.apply(Intent::MoveRight);
    assert_eq!(session.world.ship.x, 256.0);
    session.apply(Intent::MoveLeft);
    session.apply(Intent::MoveLeft);
    assert_eq!(session.world.ship.x, 192.0);

    session.apply(Intent::Fire);
    assert_eq!(session.world.bullets.len(), 1);
    assert_eq!(session.feedback().cues, vec![Cue::Shoot]);
}

#[test]
fn same_seed_same_colours() {
    let a = new_session(9);
    let b = new_session(9);
    let variants = |s: &Session<StdRng, Recorder>| {
        s.world.aliens.iter().map(|a| a.variant).collect::<Vec<_>>()
    };
    assert_eq!(variants(&a), variants(&b));
}

#[test]
fn untouched_formation_eventually_lands() {
    let mut session = new_session(2);
    for _ in 0..100_000 {
        if session.world.is_game_over() {
            break;
        }
        session.tick();
    }
    assert_eq!(session.world.status, GameStatus::GameOver);
    assert_eq!(session.world.score, 0);

    session.apply(Intent::Restart);
    assert_eq!(session.world.status, GameStatus::Playing);
    assert_eq!(session.world.aliens.len(), 6);
}

/// Plays a long random game and checks the frame-level rules after every
/// tick.
#[test]
fn random_play_keeps_invariants() {
    let mut session = new_session(11);
    let mut driver = StdRng::seed_from_u64(99);
    let alien_height = session.world.config.alien_height();

    for _ in 0..20_000 {
        match driver.gen_range(0..10) {
            0 => session.apply(Intent::MoveLeft),
            1 => session.apply(Intent::MoveRight),
            2 | 3 => session.apply(Intent::Fire),
            _ => {}
        }
        if session.world.is_game_over() {
            session.apply(Intent::Restart);
            continue;
        }

        let before = session.world.clone();
        session.tick();
        let after = &session.world;

        assert_eq!(after.alien_count, after.live_aliens());
        assert_eq!(after.score % 100, 0);
        assert!(after.score >= before.score);
        assert!(after.ship.x >= 0.0);
        assert!(after.ship.x + after.ship.width <= after.config.board_width());

        if after.wave == before.wave {
            // Bullets that were already spent stay spent.
            let prefix = before.bullets.len() - after.bullets.len().min(before.bullets.len());
            for (old, new) in before.bullets.iter().skip(prefix).zip(&after.bullets) {
                assert!(!old.used || new.used);
            }

            let flipped = before.formation.velocity_x.signum() != after.formation.velocity_x.signum();
            for (old, new) in before.aliens.iter().zip(&after.aliens) {
                let dy = new.y - old.y;
                if flipped {
                    assert_eq!(dy, alien_height);
                } else {
                    assert_eq!(dy, 0.0);
                }
            }
        } else {
            assert_eq!(after.wave, before.wave + 1);
            assert!(after.formation.velocity_x.abs() > before.formation.velocity_x.abs());
            assert!(after.bullets.is_empty());
            let expected = (after.formation.columns * after.formation.rows) as usize;
            assert_eq!(after.aliens.len(), expected);
            assert!(after.aliens.iter().all(|a| a.alive));
        }
    }
}
