//! Scoped process-wide key hooks.
//!
//! While the overlay is open the viewer holds a [`KeyHookGuard`]; the hook
//! behind it raises an [`EscapeSignal`] when Escape is pressed anywhere in
//! the process. Dropping the guard detaches the listener, so closing the
//! overlay or dropping the viewer can never leak it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Key name delivered for the Escape key (matches DOM `KeyboardEvent.key`).
pub const ESCAPE_KEY: &str = "Escape";

/// Flag raised by a key hook and drained by its owner.
#[derive(Debug, Clone, Default)]
pub struct EscapeSignal(Rc<Cell<bool>>);

impl EscapeSignal {
    /// Create a lowered signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal.
    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Whether the signal is raised, without consuming it.
    pub fn is_raised(&self) -> bool {
        self.0.get()
    }

    /// Consume the signal, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// Handle to an installed key listener. Dropping it detaches the listener.
pub struct KeyHookGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl KeyHookGuard {
    /// Create a guard that runs `release` exactly once when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Create a guard with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Detach the listener now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for KeyHookGuard {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for KeyHookGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHookGuard")
            .field("attached", &self.release.is_some())
            .finish()
    }
}

/// A source of process-wide key events.
pub trait KeyHook {
    /// Attach a listener that raises `signal` on Escape.
    fn install(&self, signal: EscapeSignal) -> KeyHookGuard;
}

/// Hook for hosts that deliver Escape to the viewer directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopKeyHook;

impl KeyHook for NoopKeyHook {
    fn install(&self, _signal: EscapeSignal) -> KeyHookGuard {
        KeyHookGuard::detached()
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    listeners: Vec<(u64, EscapeSignal)>,
}

/// In-process key hook fed by the host's key events.
///
/// Clones share the same listener set.
#[derive(Debug, Clone, Default)]
pub struct KeyHookRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl KeyHookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a key press. Returns true if a listener consumed it.
    pub fn dispatch_key(&self, key: &str) -> bool {
        if key != ESCAPE_KEY {
            return false;
        }
        let inner = self.inner.borrow();
        for (_, signal) in &inner.listeners {
            signal.raise();
        }
        !inner.listeners.is_empty()
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl KeyHook for KeyHookRegistry {
    fn install(&self, signal: EscapeSignal) -> KeyHookGuard {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, signal));
            id
        };
        log::trace!("Key listener {} attached", id);

        let registry: Weak<RefCell<RegistryInner>> = Rc::downgrade(&self.inner);
        KeyHookGuard::new(move || {
            if let Some(inner) = registry.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                log::trace!("Key listener {} detached", id);
            }
        })
    }
}
