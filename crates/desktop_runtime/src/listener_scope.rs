//! Scoped ownership of global event listeners for a pointer session.

/// Detach callbacks for listeners installed for the lifetime of one drag or resize.
///
/// Every callback runs exactly once: on [`ListenerScope::release`] or when the scope is dropped,
/// whichever comes first. Dropping covers teardown paths such as a window closing mid-drag.
#[derive(Default)]
pub struct ListenerScope {
    detach: Vec<Box<dyn FnOnce()>>,
}

impl ListenerScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the callback that removes one installed listener.
    pub fn on_release(&mut self, detach: impl FnOnce() + 'static) {
        self.detach.push(Box::new(detach));
    }

    pub fn is_empty(&self) -> bool {
        self.detach.is_empty()
    }

    /// Detaches everything now.
    pub fn release(mut self) {
        self.detach_all();
    }

    fn detach_all(&mut self) {
        for detach in self.detach.drain(..) {
            detach();
        }
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        self.detach_all();
    }
}
