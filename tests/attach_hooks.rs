/*
 *  tests/attach_hooks.rs
 *
 *  The load-time hook activates the process-wide dispatcher
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 */

// One test per binary: nothing else may touch the global dispatcher first.

use std::path::Path;

use drm::config::PROBE_DEVICE;
use drm::{ActivationState, Symbol};

#[test]
fn test_global_activated_before_first_call() {
    let d = drm::global();

    // No entry point has been called yet in this process
    assert_eq!(d.activation_count(), 1);

    assert_ne!(d.state(), ActivationState::Detached);
    if !Path::new(PROBE_DEVICE).exists() {
        assert_eq!(d.state(), ActivationState::Inactive);
    }

    // Calls afterwards reuse that activation
    unsafe { drm::entry::drmGetNodeTypeFromFd(-1) };
    let _ = d.is_resolved(Symbol::drmOpen);
    assert_eq!(d.activation_count(), 1);
}
