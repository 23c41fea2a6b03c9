//! Runs the focus and other host effects the reducer queues after each dispatch.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Watches the runtime effect queue and hands each batch to the host, oldest first.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }

        // Taken before running, so a host effect that dispatches starts a new batch.
        let batch = runtime.effects.try_update(std::mem::take).unwrap_or_default();
        let host = runtime.host.get_value();
        batch
            .into_iter()
            .for_each(|effect| host.run_runtime_effect(effect));
    });
}
