//! Lifecycle tests that walk the latch the way the page shell drives it:
//! a post-mount callback and a teardown hook holding separate handles.

use market_signals_core::config::ShellConfig;
use market_signals_core::lifecycle::{MountLatch, MountState, SettleOutcome};
use market_signals_core::style::{shell_class, HIDDEN_CLASS, VISIBLE_CLASS};

fn has_class(class: &str, wanted: &str) -> bool {
    class.split_whitespace().any(|c| c == wanted)
}

#[test]
fn test_mount_then_rerender_stays_visible() {
    let latch = MountLatch::new();
    let on_mount = latch.clone();

    // First render, before the post-mount callback
    assert!(has_class(&shell_class(latch.state()), HIDDEN_CLASS));

    assert_eq!(on_mount.settle(), SettleOutcome::Settled);

    // Any number of later renders, each of which may re-run the callback
    for _ in 0..10 {
        assert_eq!(on_mount.settle(), SettleOutcome::AlreadySettled);
        let class = shell_class(latch.state());
        assert!(has_class(&class, VISIBLE_CLASS));
        assert!(!has_class(&class, HIDDEN_CLASS));
    }
}

#[test]
fn test_teardown_before_mount_discards_callback() {
    let latch = MountLatch::new();
    let on_mount = latch.clone();
    let on_drop = latch.clone();

    on_drop.dispose();
    drop(on_drop);

    assert_eq!(on_mount.settle(), SettleOutcome::Discarded);
    assert_eq!(latch.state(), MountState::Pending);
}

#[test]
fn test_latches_are_independent_per_instance() {
    let first = MountLatch::new();
    let second = MountLatch::new();

    first.settle();

    assert_eq!(first.state(), MountState::Settled);
    assert_eq!(second.state(), MountState::Pending);
}

#[test]
fn test_latch_crosses_threads() {
    let latch = MountLatch::new();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let latch = latch.clone();
            std::thread::spawn(move || latch.settle())
        })
        .collect();

    let settled = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|o| *o == SettleOutcome::Settled)
        .count();

    assert_eq!(settled, 1);
    assert!(latch.state().is_loaded());
}

#[test]
fn test_invalid_config_is_reported() {
    let err = ShellConfig::new(700, "navy", "#111827").unwrap_err();
    assert_eq!(err.to_string(), "Invalid color: navy");
}
