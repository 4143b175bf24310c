use listing_common::debounce::Debouncer;

#[test]
fn no_deadline_never_fires() {
    let mut d = Debouncer::new(80.0);
    assert!(!d.fire(1_000_000.0));
    assert!(!d.pending());
}

#[test]
fn fires_once_deadline_elapses() {
    let mut d = Debouncer::new(80.0);
    d.input(1000.0);
    assert!(d.pending());
    assert!(!d.fire(1050.0));
    assert!(d.fire(1080.0));
    assert!(!d.pending());
}

#[test]
fn firing_clears_the_deadline() {
    let mut d = Debouncer::new(80.0);
    d.input(1000.0);
    assert!(d.fire(1100.0));
    // A second callback for the same burst finds nothing pending.
    assert!(!d.fire(1101.0));
}

#[test]
fn new_input_pushes_the_deadline_out() {
    let mut d = Debouncer::new(80.0);
    d.input(1000.0);
    d.input(1070.0);
    // The callback scheduled off the first input arrives too early now.
    assert!(!d.fire(1080.0));
    assert!(d.fire(1150.0));
}

#[test]
fn burst_collapses_to_one_fire() {
    let mut d = Debouncer::new(80.0);
    let mut fired = 0;
    for i in 0..10 {
        let now = 1000.0 + i as f64 * 20.0;
        d.input(now);
        // Each input schedules a check one window later.
        if d.fire(now + 80.0 - 0.1) {
            fired += 1;
        }
    }
    if d.fire(1000.0 + 9.0 * 20.0 + 80.0) {
        fired += 1;
    }
    assert_eq!(fired, 1);
}

#[test]
fn cancel_discards_pending_deadline() {
    let mut d = Debouncer::new(80.0);
    d.input(1000.0);
    d.cancel();
    assert!(!d.pending());
    assert!(!d.fire(2000.0));
}
