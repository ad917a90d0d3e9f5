mod common;
use common::{t, t_ms};

use timekeeper::core::timer::{SessionTimer, TimerStatus};
use timekeeper::errors::AppError;
use timekeeper::utils::time::format_seconds;

#[test]
fn test_pause_resume_accounting() {
    // start(0) pause(100) resume(150) pause(200) stop(500):
    // only the Running intervals count, 100 + 50 = 150, and the long paused
    // tail before stop adds nothing.
    let mut timer = SessionTimer::new();
    timer.start("Acme", t(0)).unwrap();
    timer.pause(t(100)).unwrap();
    timer.resume(t(150)).unwrap();
    timer.pause(t(200)).unwrap();

    let summary = timer.stop(t(500)).unwrap();
    assert_eq!(summary.duration_seconds, 150);
    assert_eq!(summary.start_time, t(0));
    assert_eq!(summary.stop_time, t(500));
}

#[test]
fn test_stop_without_pauses() {
    let mut timer = SessionTimer::new();
    timer.start("Beta", t(0)).unwrap();

    let summary = timer.stop(t(3661)).unwrap();
    assert_eq!(summary.duration_seconds, 3661);
    assert_eq!(format_seconds(summary.duration_seconds), "01:01:01");
}

#[test]
fn test_intervals_truncated_independently() {
    // Two Running intervals of 1.6s each: truncated per interval that is
    // 1 + 1 = 2, not floor(3.2) = 3.
    let mut timer = SessionTimer::new();
    timer.start("Acme", t_ms(0)).unwrap();
    timer.pause(t_ms(1600)).unwrap();
    timer.resume(t_ms(10_000)).unwrap();

    let summary = timer.stop(t_ms(11_600)).unwrap();
    assert_eq!(summary.duration_seconds, 2);
}

#[test]
fn test_start_requires_project() {
    let mut timer = SessionTimer::new();

    let err = timer.start("   ", t(0)).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(timer.status(), TimerStatus::Idle);
}

#[test]
fn test_start_while_active_is_rejected() {
    let mut timer = SessionTimer::new();
    timer.start("Acme", t(0)).unwrap();
    timer.pause(t(10)).unwrap();

    // Rejected while Paused, state untouched.
    let err = timer.start("Other", t(20)).unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(timer.status(), TimerStatus::Paused);
    assert_eq!(timer.accumulated_seconds(), 10);

    timer.resume(t(20)).unwrap();

    // And rejected while Running.
    let err = timer.start("Other", t(30)).unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(timer.status(), TimerStatus::Running);
    assert_eq!(timer.accumulated_seconds(), 10);
}

#[test]
fn test_stop_while_idle_is_rejected() {
    let mut timer = SessionTimer::new();
    assert!(matches!(
        timer.stop(t(0)),
        Err(AppError::InvalidState(_))
    ));
}

#[test]
fn test_pause_and_resume_require_matching_state() {
    let mut timer = SessionTimer::new();
    timer.start("Acme", t(0)).unwrap();

    assert!(matches!(
        timer.resume(t(1)),
        Err(AppError::InvalidState(_))
    ));

    timer.pause(t(5)).unwrap();
    assert!(matches!(
        timer.pause(t(6)),
        Err(AppError::InvalidState(_))
    ));
}

#[test]
fn test_current_elapsed_is_a_pure_query() {
    let mut timer = SessionTimer::new();
    timer.start("Acme", t(0)).unwrap();

    assert_eq!(timer.current_elapsed_seconds(t(30)), 30);
    assert_eq!(timer.current_elapsed_seconds(t(30)), 30);

    timer.pause(t(60)).unwrap();
    // Paused: the query reports the accumulated total whatever `now` is.
    assert_eq!(timer.current_elapsed_seconds(t(999)), 60);

    let summary = timer.stop(t(999)).unwrap();
    assert_eq!(summary.duration_seconds, 60);
}

#[test]
fn test_backwards_clock_clamps_to_zero() {
    let mut timer = SessionTimer::new();
    timer.start("Acme", t(100)).unwrap();

    // The clock moved backwards between resume and pause: the skewed segment
    // contributes nothing instead of going negative.
    timer.pause(t(40)).unwrap();
    assert_eq!(timer.accumulated_seconds(), 0);

    timer.resume(t(50)).unwrap();
    let summary = timer.stop(t(80)).unwrap();
    assert_eq!(summary.duration_seconds, 30);
}

#[test]
fn test_stop_resets_for_a_fresh_session() {
    let mut timer = SessionTimer::new();
    timer.start("Acme", t(0)).unwrap();
    timer.stop(t(10)).unwrap();

    assert_eq!(timer.status(), TimerStatus::Idle);
    assert_eq!(timer.accumulated_seconds(), 0);
    assert!(timer.start_time().is_none());

    // Stop emits exactly once per session.
    assert!(matches!(
        timer.stop(t(11)),
        Err(AppError::InvalidState(_))
    ));

    timer.start("Next", t(20)).unwrap();
    let summary = timer.stop(t(25)).unwrap();
    assert_eq!(summary.duration_seconds, 5);
}
