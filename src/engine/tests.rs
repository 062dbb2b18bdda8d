use super::thread::elapsed_now;
use std::time::{Duration, Instant};

#[test]
fn elapsed_now_is_accumulated_when_stopped() {
    let acc = Duration::from_secs(42);
    assert_eq!(elapsed_now(acc, None), acc);
}

#[test]
fn elapsed_now_adds_running_stretch() {
    let acc = Duration::from_secs(10);
    let started = Instant::now();
    let e = elapsed_now(acc, Some(started));
    assert!(e >= acc);
    assert!(e < acc + Duration::from_secs(1));
}
