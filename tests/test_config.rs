use alien_invasion::compute::{init_state, tick};
use alien_invasion::config::*;
use alien_invasion::feedback::Silent;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn board(columns: u32, rows: u32) -> GameConfig {
    GameConfig { columns, rows, ..GameConfig::default() }
}

#[test]
fn default_board_is_valid() {
    assert_eq!(GameConfig::default().validate(), Ok(()));
}

#[test]
fn boards_narrower_than_the_base_grid_are_rejected() {
    // 4 and 5 columns cannot hold three 64-wide aliens past the origin.
    for columns in [0, 1, 4, 5] {
        assert_eq!(
            board(columns, 16).validate(),
            Err(ConfigError::TooNarrow { columns }),
            "{columns} columns"
        );
    }
}

#[test]
fn boards_whose_column_cap_is_below_the_base_grid_are_rejected() {
    // The grid fits on 8 and 9 columns but the cap would be 2.
    for columns in [8, 9] {
        assert_eq!(board(columns, 16).validate(), Err(ConfigError::TooNarrow { columns }));
    }
    assert_eq!(board(10, 16).validate(), Ok(()));
}

#[test]
fn boards_too_short_for_the_base_rows_are_rejected() {
    for rows in [0, 3, 5] {
        assert_eq!(board(16, rows).validate(), Err(ConfigError::TooShort { rows }));
    }
    assert_eq!(board(16, 6).validate(), Ok(()));
}

#[test]
fn oversized_boards_are_rejected() {
    assert_eq!(
        board(100_000, 16).validate(),
        Err(ConfigError::TooLarge { rows: 16, columns: 100_000 })
    );
    assert_eq!(
        board(16, u32::MAX).validate(),
        Err(ConfigError::TooLarge { rows: u32::MAX, columns: 16 })
    );
    assert_eq!(board(MAX_BOARD_TILES, MAX_BOARD_TILES).validate(), Ok(()));
}

#[test]
fn error_messages_name_the_minimum() {
    assert_eq!(
        ConfigError::TooNarrow { columns: 5 }.to_string(),
        "board is 5 columns wide; the alien grid needs at least 10"
    );
    assert_eq!(
        ConfigError::TooShort { rows: 5 }.to_string(),
        "board is 5 rows tall; the alien grid needs at least 6"
    );
}

#[test]
fn smallest_valid_board_respawns_a_full_wave() {
    let config = board(10, 6);
    assert_eq!(config.validate(), Ok(()));

    let mut rng = StdRng::seed_from_u64(3);
    let mut state = init_state(config, &mut rng);
    assert_eq!(state.aliens.len(), 6);
    let right_edge = state.aliens.iter().map(|a| a.x + a.width).fold(0.0, f32::max);
    assert!(right_edge < config.board_width());

    for alien in &mut state.aliens {
        alien.alive = false;
    }
    state.alien_count = 0;
    tick(&mut state, &mut rng, &mut Silent);

    assert_eq!(state.wave, 2);
    assert_eq!(state.aliens.len(), 6);
    assert_eq!(state.alien_count, 6);
}
