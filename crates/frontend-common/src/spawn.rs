//! Local task spawning for the single-threaded event loop

use std::future::Future;

/// Run `future` on the current thread's executor.
///
/// In the browser this is the JS microtask queue. Natively it must be called
/// from inside a `tokio::task::LocalSet`.
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(future);

    #[cfg(not(target_arch = "wasm32"))]
    drop(tokio::task::spawn_local(future));
}
