// Host-side tests for the fixed simulation clock.

use landing_core::FixedStep;
use std::time::Duration;

#[test]
fn whole_steps_with_carry() {
    let mut clock = FixedStep::new(60, 4);
    let step = clock.step();
    assert_eq!(clock.advance(step / 2), 0);
    assert_eq!(clock.advance(step / 2), 1);
    assert_eq!(clock.advance(step * 2), 2);
    assert_eq!(clock.advance(Duration::ZERO), 0);
}

#[test]
fn sixty_hz_frames_step_once_each() {
    let mut clock = FixedStep::default();
    let frame = clock.step();
    let total: u32 = (0..120).map(|_| clock.advance(frame)).sum();
    assert_eq!(total, 120);
}

#[test]
fn high_refresh_rate_keeps_simulation_speed() {
    let mut clock = FixedStep::new(60, 4);
    let frame = Duration::from_secs(1) / 120;
    let total: u32 = (0..240).map(|_| clock.advance(frame)).sum();
    assert!((119..=120).contains(&total), "total={}", total);
}

#[test]
fn backlog_is_capped_and_dropped() {
    let mut clock = FixedStep::new(60, 4);
    assert_eq!(clock.advance(Duration::from_secs(5)), 4);
    // Nothing carried over from the long pause
    assert_eq!(clock.advance(Duration::ZERO), 0);
    assert_eq!(clock.advance(clock.step()), 1);
}

#[test]
fn reset_clears_partial_step() {
    let mut clock = FixedStep::new(60, 4);
    let step = clock.step();
    assert_eq!(clock.advance(step * 3 / 4), 0);
    clock.reset();
    assert_eq!(clock.advance(step / 2), 0);
}

#[test]
fn degenerate_rates_are_clamped() {
    let mut clock = FixedStep::new(0, 0);
    assert_eq!(clock.step(), Duration::from_secs(1));
    assert_eq!(clock.advance(Duration::from_secs(3)), 1);
}
