//! Post-mount lifecycle hook.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use market_signals_core::{MountLatch, MountState, SettleOutcome};

/// Tracks whether the calling component has completed its first render.
///
/// Returns [`MountState::Pending`] during the first render and
/// [`MountState::Settled`] on every render after the post-mount effect has
/// fired. The effect reads no reactive state, so it runs once per instance;
/// the latch makes any repeat a no-op and discards a callback that arrives
/// after the component was dropped.
pub fn use_mount_state() -> MountState {
    use_mount_latch().0
}

/// Same as [`use_mount_state`], also handing back the instance's latch.
///
/// The latch is disposed when the calling component is dropped, so holders
/// outside the component can observe teardown through
/// [`MountLatch::is_disposed`].
pub fn use_mount_latch() -> (MountState, MountLatch) {
    let mut state = use_signal(MountState::default);
    let latch = use_hook(MountLatch::new);

    use_effect({
        let latch = latch.clone();
        move || match latch.settle() {
            SettleOutcome::Settled => state.set(MountState::Settled),
            SettleOutcome::AlreadySettled => {}
            SettleOutcome::Discarded => debug!("skipping mount transition for dropped component"),
        }
    });

    use_drop({
        let latch = latch.clone();
        move || latch.dispose()
    });

    (state(), latch)
}
