//! Mount lifecycle for the page shell.
//!
//! The shell starts [`MountState::Pending`] and flips to [`MountState::Settled`]
//! once, after the host has committed its first render. [`MountLatch`] enforces
//! that rule: the first [`settle`](MountLatch::settle) wins, later calls are
//! no-ops, and a latch that was [`dispose`](MountLatch::dispose)d before settling
//! discards the callback instead of touching a torn-down instance.
//!
//! ```
//! use market_signals_core::lifecycle::{MountLatch, MountState, SettleOutcome};
//!
//! let latch = MountLatch::new();
//! assert_eq!(latch.state(), MountState::Pending);
//!
//! assert_eq!(latch.settle(), SettleOutcome::Settled);
//! assert_eq!(latch.settle(), SettleOutcome::AlreadySettled);
//! assert!(latch.state().is_loaded());
//! ```

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Two-state mount lifecycle. `Pending` is the initial state, `Settled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MountState {
    /// Not yet mounted, or mounted but the post-mount callback has not run
    #[default]
    Pending,
    /// First render committed and the transition has fired
    Settled,
}

impl MountState {
    /// Boolean view used by the fade-in: `true` once settled.
    pub fn is_loaded(self) -> bool {
        matches!(self, MountState::Settled)
    }
}

/// Result of a [`MountLatch::settle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// This call performed the transition
    Settled,
    /// The transition already happened; nothing changed
    AlreadySettled,
    /// The owner was torn down before the transition; nothing changed
    Discarded,
}

/// One-shot guard for the `Pending -> Settled` transition.
///
/// Clones share state, so the post-mount callback and the teardown hook can
/// each hold a handle to the same latch. Settled and disposed are bits of a
/// single atomic, so a `dispose` racing a `settle` is ordered one way or the
/// other, never interleaved.
#[derive(Debug, Clone, Default)]
pub struct MountLatch {
    bits: Arc<AtomicU8>,
}

const SETTLED: u8 = 0b01;
const DISPOSED: u8 = 0b10;

impl MountLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MountState {
        if self.bits.load(Ordering::Acquire) & SETTLED != 0 {
            MountState::Settled
        } else {
            MountState::Pending
        }
    }

    /// Attempts the transition to [`MountState::Settled`].
    ///
    /// Returns [`SettleOutcome::Settled`] for exactly one call over the lifetime
    /// of the latch, and only if it has not been disposed first. Once settled,
    /// every later call returns [`SettleOutcome::AlreadySettled`], disposed or not.
    pub fn settle(&self) -> SettleOutcome {
        let mut current = self.bits.load(Ordering::Acquire);
        loop {
            if current & SETTLED != 0 {
                return SettleOutcome::AlreadySettled;
            }
            if current & DISPOSED != 0 {
                debug!("mount callback arrived after teardown, discarding");
                return SettleOutcome::Discarded;
            }

            match self.bits.compare_exchange_weak(
                current,
                current | SETTLED,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    debug!("page shell settled");
                    return SettleOutcome::Settled;
                }
                Err(actual) => current = actual,
            }
        }
    }

    /// Marks the owning instance as torn down. Idempotent.
    ///
    /// A settled latch stays settled; a pending one will discard any later
    /// [`settle`](Self::settle).
    pub fn dispose(&self) {
        let previous = self.bits.fetch_or(DISPOSED, Ordering::AcqRel);
        if previous & DISPOSED == 0 {
            debug!(state = ?self.state(), "mount latch disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.bits.load(Ordering::Acquire) & DISPOSED != 0
    }
}
