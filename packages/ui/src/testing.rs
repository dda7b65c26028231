//! Helpers for driving a `VirtualDom` in tests.

use std::time::Duration;

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

/// Poll tasks, effects and renders until `duration` of (paused) time passes.
pub async fn drive(dom: &mut VirtualDom, duration: Duration) {
    let _ = tokio::time::timeout(duration, async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
    })
    .await;
}
