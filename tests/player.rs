#![allow(missing_docs)]
//! End-to-end playback tests against the in-memory mock driver.

mod common;

use std::{thread, time::Duration};

use common::MockDriver;
use pixelboard::{
    Error,
    color::{LED_OFF, rgb_to_hsv},
    frame::{Frame, heart},
    player::{CancelToken, Content, Playback, Player, Show},
};
use smart_leds::colors;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn single_red_pixel_renders_one_lit_command() {
    init_logging();
    let mut player = Player::new(MockDriver::pi500()).expect("enumeration succeeds");

    let mut frame = Frame::new(16, 5);
    frame.set(0, 0, Some(colors::RED));
    player.show_image(&frame).expect("render succeeds");

    let driver = player.into_driver();
    assert_eq!(driver.flush_count(), 1, "one atomic flush per frame");
    // Every cell of the 5x16 grid is mapped, so 80 commands staged.
    assert_eq!(driver.staged.len(), 80);

    let lit: Vec<_> = driver
        .staged
        .iter()
        .filter(|(_, _, color)| *color != LED_OFF)
        .collect();
    assert_eq!(lit.len(), 1, "exactly one non-off command");
    assert_eq!(*lit[0], (0, 0, rgb_to_hsv(colors::RED)));

    // The spacebar row is beyond max_rows and stays untouched.
    assert!(driver.committed.keys().all(|&(row, _)| row < 5));
}

#[test]
fn all_absent_frame_emits_the_off_sentinel_everywhere() {
    let mut player = Player::new(MockDriver::pi500()).expect("enumeration succeeds");

    player
        .show_image(&Frame::new(16, 6))
        .expect("render succeeds");

    let driver = player.into_driver();
    assert!(
        driver.committed.values().all(|&color| color == LED_OFF),
        "absent pixels must become the exact off sentinel"
    );
}

#[test]
fn clear_is_idempotent_and_matches_the_off_sentinel() {
    let mut player = Player::new(MockDriver::pi500()).expect("enumeration succeeds");

    player.clear().expect("clear succeeds");
    player.clear().expect("clear succeeds");

    let driver = player.into_driver();
    assert_eq!(driver.flush_count(), 2);
    // 84 mapped LEDs (80 grid cells + 4 spacebar LEDs) per pass.
    assert_eq!(driver.staged.len(), 168);
    let (first, second) = driver.staged.split_at(84);
    assert_eq!(first, second, "both passes emit the identical command set");
    assert!(first.iter().all(|&(_, _, color)| color == LED_OFF));
}

#[test]
fn heart_demo_lights_fourteen_cells() {
    let mut player = Player::new(MockDriver::pi500()).expect("enumeration succeeds");

    player.show_image(&heart()).expect("render succeeds");

    let driver = player.into_driver();
    let red = rgb_to_hsv(colors::RED);
    let lit = driver
        .committed
        .values()
        .filter(|&&color| color == red)
        .count();
    assert_eq!(lit, 14);
    assert_eq!(driver.committed.len(), 25, "5x5 image touches 25 cells");
}

#[test]
fn non_repeating_animation_flushes_once_per_frame() {
    init_logging();
    let mut player = Player::new(MockDriver::pi500()).expect("enumeration succeeds");

    let frames = vec![
        Frame::filled(16, 5, colors::BLUE),
        Frame::filled(16, 5, colors::RED),
        Frame::new(16, 5),
    ];
    let show = Show::animation(frames, Duration::from_millis(1), false);
    let outcome = player.play(&show, &CancelToken::new()).expect("playback");

    assert_eq!(outcome, Playback::Completed);
    let driver = player.into_driver();
    assert_eq!(driver.flush_count(), 3);
    // Completion leaves the final frame on the matrix; no implicit clear.
    assert!(driver.committed.values().all(|&color| color == LED_OFF));
}

#[test]
fn cancellation_clears_the_matrix_before_returning() {
    init_logging();
    let mut player = Player::new(MockDriver::pi500()).expect("enumeration succeeds");

    let show = Show::scroll_text("HELLO");
    let cancel = CancelToken::new();
    let canceller = cancel.clone();
    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(30));
        canceller.cancel();
    });

    let outcome = player
        .play(
            &Show {
                delay: Duration::from_millis(5),
                ..show
            },
            &cancel,
        )
        .expect("cancelled playback still succeeds");
    handle.join().expect("canceller thread");

    assert_eq!(outcome, Playback::Cancelled);
    let driver = player.into_driver();
    let last = driver.flushes.last().expect("at least the clear flush");
    assert!(
        last.values().all(|&color| color == LED_OFF),
        "cancellation must leave every LED dark"
    );
}

#[test]
fn pre_cancelled_token_skips_rendering_entirely() {
    let mut player = Player::new(MockDriver::pi500()).expect("enumeration succeeds");

    let cancel = CancelToken::new();
    cancel.cancel();
    let outcome = player
        .play(&Show::scroll_text("HI"), &cancel)
        .expect("playback");

    assert_eq!(outcome, Playback::Cancelled);
    let driver = player.into_driver();
    assert_eq!(driver.flush_count(), 1, "only the clear pass flushed");
    assert!(driver.staged.iter().all(|&(_, _, color)| color == LED_OFF));
}

#[test]
fn flush_failure_attempts_cleanup_then_propagates() {
    init_logging();
    let mut driver = MockDriver::pi500();
    driver.fail_flush = Some(1); // first frame commit fails
    let mut player = Player::new(driver).expect("enumeration succeeds");

    let show = Show::animation(
        vec![Frame::filled(16, 5, colors::RED)],
        Duration::from_millis(1),
        true,
    );
    let error = player
        .play(&show, &CancelToken::new())
        .expect_err("driver failure is fatal");
    assert!(matches!(error, Error::Io(_)));

    let driver = player.into_driver();
    // The all-off cleanup pass went through on the second flush call.
    assert_eq!(driver.flush_count(), 1);
    let last = driver.flushes.last().expect("cleanup flushed");
    assert!(last.values().all(|&color| color == LED_OFF));
}

#[test]
fn invalid_configurations_are_rejected_before_any_hardware_call() {
    let mut player = Player::new(MockDriver::pi500()).expect("enumeration succeeds");
    let cancel = CancelToken::new();

    let zero_delay = Show {
        delay: Duration::ZERO,
        ..Show::scroll_text("HI")
    };
    assert!(matches!(
        player.play(&zero_delay, &cancel),
        Err(Error::ZeroDelay)
    ));

    let empty_animation = Show::animation(Vec::new(), Duration::from_millis(10), false);
    assert!(matches!(
        player.play(&empty_animation, &cancel),
        Err(Error::EmptyAnimation)
    ));

    let empty_text = Show {
        content: Content::Text {
            text: String::new(),
            color: colors::RED,
        },
        delay: Duration::from_millis(10),
        repeat: false,
    };
    assert!(matches!(
        player.play(&empty_text, &cancel),
        Err(Error::EmptyText)
    ));

    let driver = player.into_driver();
    assert!(driver.staged.is_empty(), "no staging before validation");
    assert_eq!(driver.flush_count(), 0);
}

#[test]
fn ragged_frames_are_rejected() {
    let result = Frame::from_rows(vec![vec![None; 4], vec![None; 3]]);
    assert!(matches!(
        result,
        Err(Error::RaggedFrame {
            row: 1,
            expected: 4,
            actual: 3
        })
    ));
}

#[test]
fn scroll_show_replays_the_full_pass_per_loop() {
    init_logging();
    let mut player = Player::new(MockDriver::pi500()).expect("enumeration succeeds");

    let show = Show {
        repeat: false,
        delay: Duration::from_millis(1),
        ..Show::scroll_text("HI")
    };
    let outcome = player.play(&show, &CancelToken::new()).expect("playback");

    assert_eq!(outcome, Playback::Completed);
    let driver = player.into_driver();
    // "HI" is 8 columns wide: offsets 0..=24 give 25 frames.
    assert_eq!(driver.flush_count(), 25);
}
