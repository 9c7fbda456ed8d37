use super::*;
use std::thread;

#[test]
fn test_advisory_budget_never_stops() {
    let limits = SearchLimits::advisory(1);
    assert_eq!(limits.time_budget, Some(Duration::from_secs(1)));
    assert!(!limits.enforce_deadline);
    limits.start();
    limits.time_control.stop();
    assert!(!limits.should_stop());
}

#[test]
fn test_advisory_non_positive_is_no_budget() {
    assert_eq!(SearchLimits::advisory(0).time_budget, None);
    assert_eq!(SearchLimits::advisory(-3).time_budget, None);
}

#[test]
fn test_deadline_expiry() {
    let limits = SearchLimits::deadline(Duration::from_millis(10));
    limits.start();
    assert!(!limits.should_stop());

    thread::sleep(Duration::from_millis(20));
    assert!(limits.should_stop());
    assert!(limits.time_control.is_stopped());
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(10));
    assert!(!tc.check_time());
    assert_eq!(tc.remaining(), None);
}

#[test]
fn test_time_control_manual_stop() {
    let tc = TimeControl::new(None);
    tc.start();
    assert!(!tc.is_stopped());
    tc.clone().stop();
    assert!(tc.is_stopped());
}

#[test]
fn test_remaining_saturates() {
    let tc = TimeControl::new(Some(Duration::from_millis(5)));
    tc.start();
    thread::sleep(Duration::from_millis(10));
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
}
