//! Effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{host, runtime_context::DesktopRuntimeContext};

/// Installs the effect that drains queued [`crate::RuntimeEffect`] values in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // The queue is cleared before running so effects dispatched from inside a handler land in a
    // fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            host::run_runtime_effect(runtime, effect);
        }
    });
}
