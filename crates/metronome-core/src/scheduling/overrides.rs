//! Context-scoped override of the threading decision.
//!
//! Every override belongs to one logical context, chosen in this order:
//! 1. the cell of the innermost [`scope_threading_override`] /
//!    [`isolate_threading_override`] / [`propagate_threading_override`] scope;
//! 2. the current tokio task, keyed by its [`task::Id`];
//! 3. the current OS thread, for code running outside any task.
//!
//! A guard remembers the slot it wrote to and restores into that slot, so it
//! stays correct when the task migrates between workers or the guard outlives
//! its scope. Branches of `join!`/`select!` share their task; give each one its
//! own scope when they must not see each other's overrides.
use std::{
    collections::HashMap,
    future::Future,
    sync::{
        Arc, LazyLock, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicU8, Ordering},
    },
    thread::{self, ThreadId},
};

use tokio::task;
use tracing::trace;

tokio::task_local! {
    static TASK_OVERRIDE: Arc<ScopeCell>;
}

/// Overrides of contexts that are not inside a scope. Each key is only ever
/// written by guards of its own context.
static UNSCOPED: LazyLock<Mutex<HashMap<Owner, bool>>> = LazyLock::new(Default::default);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Owner {
    Task(task::Id),
    Thread(ThreadId),
}

#[derive(Debug)]
struct ScopeCell(AtomicU8);

impl ScopeCell {
    const UNSET: u8 = 0;
    const ENABLED: u8 = 1;
    const DISABLED: u8 = 2;

    fn new(value: Option<bool>) -> Arc<Self> {
        let cell = Self(AtomicU8::new(Self::UNSET));
        cell.set(value);
        Arc::new(cell)
    }

    fn get(&self) -> Option<bool> {
        match self.0.load(Ordering::Relaxed) {
            Self::ENABLED => Some(false),
            Self::DISABLED => Some(true),
            _ => None,
        }
    }

    fn set(&self, value: Option<bool>) {
        let raw = match value {
            None => Self::UNSET,
            Some(false) => Self::ENABLED,
            Some(true) => Self::DISABLED,
        };
        self.0.store(raw, Ordering::Relaxed);
    }
}

/// Storage an override was written to.
#[derive(Debug, Clone)]
enum Slot {
    Scope(Arc<ScopeCell>),
    Unscoped(Owner),
}

impl Slot {
    fn current() -> Self {
        if let Ok(cell) = TASK_OVERRIDE.try_with(Arc::clone) {
            return Slot::Scope(cell);
        }
        match task::try_id() {
            Some(id) => Slot::Unscoped(Owner::Task(id)),
            None => Slot::Unscoped(Owner::Thread(thread::current().id())),
        }
    }

    fn get(&self) -> Option<bool> {
        match self {
            Slot::Scope(cell) => cell.get(),
            Slot::Unscoped(owner) => unscoped().get(owner).copied(),
        }
    }

    fn set(&self, value: Option<bool>) {
        match self {
            Slot::Scope(cell) => cell.set(value),
            Slot::Unscoped(owner) => {
                let mut map = unscoped();
                match value {
                    Some(v) => map.insert(*owner, v),
                    None => map.remove(owner),
                };
            }
        }
    }
}

fn unscoped() -> MutexGuard<'static, HashMap<Owner, bool>> {
    UNSCOPED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Override visible from the current logical context, if any.
pub fn current_threading_override() -> Option<bool> {
    Slot::current().get()
}

/// Forces the threading decision for the current context until the returned
/// guard is released or dropped.
///
/// `true` means "treat threads as unavailable", `false` means "treat threads as
/// available". Guards nest; each one restores exactly the value that was visible
/// when it was created.
///
/// # Examples
/// ```
/// use metronome_core::scheduling::{begin_threading_override, is_threading_disabled};
///
/// {
///     let _guard = begin_threading_override(true);
///     assert!(is_threading_disabled());
/// }
/// ```
pub fn begin_threading_override(disabled: bool) -> ThreadingOverrideGuard {
    let slot = Slot::current();
    let previous = slot.get();
    slot.set(Some(disabled));
    trace!(disabled, ?previous, "threading override installed");
    ThreadingOverrideGuard {
        slot,
        previous,
        released: false,
    }
}

/// Runs `f` with the threading decision forced, restoring it afterwards even if
/// `f` panics.
pub fn with_threading_override<R>(disabled: bool, f: impl FnOnce() -> R) -> R {
    let _guard = begin_threading_override(disabled);
    f()
}

/// Runs `fut` in its own override cell, initialised to `disabled`.
///
/// The value does not leak to sibling tasks, nor to tasks spawned from `fut`
/// unless they are wrapped in [`propagate_threading_override`].
pub fn scope_threading_override<F>(disabled: bool, fut: F) -> impl Future<Output = F::Output>
where
    F: Future,
{
    TASK_OVERRIDE.scope(ScopeCell::new(Some(disabled)), fut)
}

/// Runs `fut` in its own, initially empty override cell.
pub fn isolate_threading_override<F>(fut: F) -> impl Future<Output = F::Output>
where
    F: Future,
{
    TASK_OVERRIDE.scope(ScopeCell::new(None), fut)
}

/// Carries the override visible right now into `fut`, typically a future about
/// to be spawned as a child task.
pub fn propagate_threading_override<F>(fut: F) -> impl Future<Output = F::Output>
where
    F: Future,
{
    TASK_OVERRIDE.scope(ScopeCell::new(current_threading_override()), fut)
}

/// Restores the override captured at creation time.
///
/// Releasing is idempotent. Releasing out of order is tolerated: every guard puts
/// back its own snapshot regardless of what is current at that moment.
#[derive(Debug)]
#[must_use = "the override is reverted as soon as the guard is dropped"]
pub struct ThreadingOverrideGuard {
    slot: Slot,
    previous: Option<bool>,
    released: bool,
}

impl ThreadingOverrideGuard {
    /// Value that will be restored on release.
    pub fn previous(&self) -> Option<bool> {
        self.previous
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.slot.set(self.previous);
        self.released = true;
        trace!(restored = ?self.previous, "threading override released");
    }
}

impl Drop for ThreadingOverrideGuard {
    fn drop(&mut self) {
        self.release();
    }
}
