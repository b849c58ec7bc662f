//! Default generator and entry point functions
//!
//! Each thread owns one generator instance, created lazily on first use. Generators are seeded
//! from a process-wide counter, the coarse wall-clock time, and the process ID, so no two
//! generators within a process start from the same seed and no lock is taken on the hot path.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generator::{with_rand08::Adapter, SuidGenerator};
use crate::Suid;

type DefaultGen = SuidGenerator<Adapter<ChaCha8Rng>>;

/// Number of thread-local generators seeded so far in this process.
static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static DEFAULT_GENERATOR: RefCell<Option<DefaultGen>> = const { RefCell::new(None) };
}

/// Generates a Suid tagged with `tag` from the current timestamp.
///
/// This function employs a thread-local generator. On Unix, the generator is reseeded when the
/// process ID changes (i.e., upon process forks) so that parent and child do not produce the same
/// random tails.
///
/// # Panics
///
/// Panics if the system clock reports a time outside the range representable by Suid.
///
/// # Examples
///
/// ```rust
/// let x = timesorted::suid(17);
/// println!("{}", x); // e.g., "1101812b-6a5e-3a5f-4e8b-0d8c3e1a9f20"
/// assert_eq!(x.tag(), 17);
/// ```
pub fn suid(tag: u8) -> Suid {
    with_default_generator(|g| g.generate(tag))
}

/// Runs `f` with the calling thread's generator, creating or reseeding it as needed.
pub(crate) fn with_default_generator<T>(f: impl FnOnce(&mut DefaultGen) -> T) -> T {
    DEFAULT_GENERATOR.with(|cell| {
        let mut slot = cell.borrow_mut();
        if unix_fork_safety::pid_changed() && slot.is_some() {
            tracing::debug!("process id changed; reseeding thread-local suid generator");
            *slot = None;
        }
        f(slot.get_or_insert_with(new_generator))
    })
}

fn new_generator() -> DefaultGen {
    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    let coarse_ms = crate::UtcTimestamp::now().unix_millis();
    let pid = std::process::id();

    let mut seed = [0u8; 32];
    seed[..8].copy_from_slice(&counter.to_le_bytes());
    seed[8..16].copy_from_slice(&coarse_ms.to_le_bytes());
    seed[16..20].copy_from_slice(&pid.to_le_bytes());

    tracing::trace!(counter, pid, "seeding thread-local suid generator");
    SuidGenerator::with_rand08(ChaCha8Rng::from_seed(seed))
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Returns true if the process ID has changed since the last call on this thread.
    pub fn pid_changed() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            pid != last_pid.replace(pid)
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn pid_changed() -> bool {
        false
    }
}
