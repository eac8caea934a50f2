/*
 *  tests/dispatch_integration.rs
 *
 *  Integration tests for the forwarding path
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 */

use std::ffi::{c_char, c_int, c_void};
use std::os::unix::fs::symlink;
use std::path::Path;
use std::ptr;

use drm::config::PROBE_DEVICE;
use drm::entry::forward;
use drm::loader::MockVendor;
use drm::types::*;
use drm::{ActivationState, Dispatcher, ShimConfig, Symbol};

// Stand-ins for vendor exports

extern "C" fn vendor_get_cap(fd: c_int, capability: u64, value: *mut u64) -> c_int {
    unsafe { *value = capability * 1000 + fd as u64 };
    fd + 1
}

extern "C" fn vendor_close(fd: c_int) -> c_int {
    -fd
}

extern "C" fn vendor_open(_name: *const c_char, _busid: *const c_char) -> c_int {
    9
}

extern "C" fn vendor_atomic_duplicate(req: drmModeAtomicReqPtr) -> drmModeAtomicReqPtr {
    req
}

extern "C" fn vendor_free_busid(busid: *const c_char) {
    // Marks the byte it was handed so the caller can see the call landed
    unsafe { *(busid as *mut u8) = b'!' };
}

extern "C" fn vendor_syncobj_create(_fd: c_int, flags: u32, handle: *mut u32) -> c_int {
    unsafe { *handle = flags + 100 };
    0
}

fn tegra_config(probe: impl AsRef<Path>) -> ShimConfig {
    ShimConfig::builtin()
        .with_probe_path(probe.as_ref())
        .with_library_dir("/usr/lib/aarch64-linux-gnu/tegra")
}

/// A vendor build exporting every symbol the tests call into
fn full_vendor() -> MockVendor {
    MockVendor::new()
        .with_symbol(Symbol::drmGetCap.name(), vendor_get_cap as *const c_void)
        .with_symbol(Symbol::drmClose.name(), vendor_close as *const c_void)
        .with_symbol(Symbol::drmOpen.name(), vendor_open as *const c_void)
        .with_symbol(Symbol::drmModeAtomicDuplicate.name(), vendor_atomic_duplicate as *const c_void)
        .with_symbol(Symbol::drmFreeBusid.name(), vendor_free_busid as *const c_void)
        .with_symbol(Symbol::drmSyncobjCreate.name(), vendor_syncobj_create as *const c_void)
}

/// An older vendor build without sync objects
fn legacy_vendor() -> MockVendor {
    MockVendor::new()
        .with_symbol(Symbol::drmGetCap.name(), vendor_get_cap as *const c_void)
        .with_symbol(Symbol::drmClose.name(), vendor_close as *const c_void)
}

fn assert_defaults(d: &Dispatcher) {
    let mut cap = 0xdead_beef_u64;
    let mut handle = 77u32;
    let mut devices: [drmDevicePtr; 4] = [ptr::null_mut(); 4];

    unsafe {
        assert_eq!(forward::drmOpen(d, ptr::null(), ptr::null()), -libc::EINVAL);
        assert_eq!(forward::drmOpenRender(d, 128), -libc::EINVAL);
        assert_eq!(forward::drmOpenOnce(d, ptr::null_mut(), ptr::null(), ptr::null_mut()), -1);
        assert_eq!(forward::drmGetNodeTypeFromFd(d, 3), -1);
        assert_eq!(forward::drmGetDevices2(d, 0, devices.as_mut_ptr(), 4), -libc::EINVAL);
        assert_eq!(forward::drmMap(d, 3, 0, 4096, ptr::null_mut()), -libc::EINVAL);
        assert_eq!(forward::drmCheckModesettingSupported(d, ptr::null()), -libc::EINVAL);

        assert_eq!(forward::drmClose(d, 3), 0);
        assert_eq!(forward::drmGetCap(d, 3, 0x10, &mut cap), 0);
        assert_eq!(forward::drmSyncobjCreate(d, 3, 0, &mut handle), 0);
        assert_eq!(forward::drmModeConnectorGetPossibleCrtcs(d, 3, ptr::null()), 0);

        assert!(forward::drmGetVersion(d, 3).is_null());
        assert!(forward::drmModeGetResources(d, 3).is_null());
        assert!(forward::drmModeAtomicAlloc(d).is_null());
        assert!(forward::drmGetDeviceNameFromFd2(d, 3).is_null());

        forward::drmFreeVersion(d, ptr::null_mut());
        forward::drmModeFreeResources(d, ptr::null_mut());
        forward::drmCloseOnce(d, 3);
    }

    // Defaults never write through out-parameters
    assert_eq!(cap, 0xdead_beef);
    assert_eq!(handle, 77);
    assert!(devices.iter().all(|p| p.is_null()));
}

#[test]
fn test_absent_probe_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let mock = full_vendor();
    let d = Dispatcher::with_loader(tegra_config(dir.path().join("nvhost-nvdec")), Box::new(mock.clone()));

    assert_defaults(&d);

    assert_eq!(d.state(), ActivationState::Inactive);
    assert_eq!(d.resolved_count(), 0);
    assert_eq!(mock.state().load_count, 0);
}

#[test]
fn test_regular_file_probe_returns_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mock = full_vendor();
    let d = Dispatcher::with_loader(tegra_config(file.path()), Box::new(mock.clone()));

    assert_defaults(&d);
    assert_eq!(mock.state().load_count, 0);
}

#[test]
fn test_get_cap_passes_through() {
    let mock = full_vendor();
    let d = Dispatcher::with_loader(tegra_config("/dev/null"), Box::new(mock.clone()));

    let mut value = 0u64;
    let rc = unsafe { forward::drmGetCap(&d, 5, 0x13, &mut value) };

    assert_eq!(rc, 6);
    assert_eq!(value, 0x13 * 1000 + 5);
    assert_eq!(d.state(), ActivationState::Active);
    assert_eq!(
        mock.state().last_path.as_deref(),
        Some(Path::new("/usr/lib/aarch64-linux-gnu/tegra/libdrm.so.2"))
    );
}

#[test]
fn test_pass_through_keeps_arguments_and_results() {
    let d = Dispatcher::with_loader(tegra_config("/dev/null"), Box::new(full_vendor()));

    let mut request = [0u8; 16];
    let req = request.as_mut_ptr() as drmModeAtomicReqPtr;
    let mut busid = *b"pci:0000:00:00.0\0";

    unsafe {
        assert_eq!(forward::drmOpen(&d, ptr::null(), ptr::null()), 9);
        assert_eq!(forward::drmClose(&d, 42), -42);
        assert_eq!(forward::drmModeAtomicDuplicate(&d, req), req);
        forward::drmFreeBusid(&d, busid.as_mut_ptr() as *const _);
    }
    assert_eq!(busid[0], b'!');
}

#[test]
fn test_missing_symbol_takes_default_others_forward() {
    let mock = legacy_vendor();
    let d = Dispatcher::with_loader(tegra_config("/dev/null"), Box::new(mock.clone()));

    let mut handle = 5u32;
    let mut value = 0u64;
    unsafe {
        assert_eq!(forward::drmSyncobjCreate(&d, 3, 1, &mut handle), 0);
        assert_eq!(forward::drmOpen(&d, ptr::null(), ptr::null()), -libc::EINVAL);
        assert_eq!(forward::drmGetCap(&d, 3, 1, &mut value), 4);
    }

    assert_eq!(handle, 5);
    assert_eq!(value, 1003);
    assert_eq!(d.state(), ActivationState::Active);
    assert!(!d.is_resolved(Symbol::drmSyncobjCreate));
    assert_eq!(d.resolved_count(), 2);
}

#[test]
fn test_newer_vendor_forwards_syncobj() {
    let d = Dispatcher::with_loader(tegra_config("/dev/null"), Box::new(full_vendor()));

    let mut handle = 0u32;
    let rc = unsafe { forward::drmSyncobjCreate(&d, 3, 1, &mut handle) };

    assert_eq!(rc, 0);
    assert_eq!(handle, 101);
}

#[test]
fn test_teardown_is_idempotent() {
    let never = full_vendor();
    let d = Dispatcher::with_loader(tegra_config("/dev/null"), Box::new(never.clone()));
    d.deactivate();
    d.deactivate();
    assert_eq!(d.state(), ActivationState::Detached);
    assert_eq!(never.state().unload_count, 0);

    let mock = full_vendor();
    let d = Dispatcher::with_loader(tegra_config("/dev/null"), Box::new(mock.clone()));
    d.activate();
    d.deactivate();
    d.deactivate();

    assert!(!d.has_module());
    assert_eq!(mock.state().unload_count, 1);
    assert_defaults(&d);
}

#[test]
fn test_probe_change_after_activation_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let probe = dir.path().join("nvhost-nvdec");
    symlink("/dev/null", &probe).unwrap();

    let mock = full_vendor();
    let d = Dispatcher::with_loader(tegra_config(&probe), Box::new(mock.clone()));
    d.activate();

    std::fs::remove_file(&probe).unwrap();

    let mut value = 0u64;
    assert_eq!(unsafe { forward::drmGetCap(&d, 1, 2, &mut value) }, 2);
    assert_eq!(value, 2001);
    assert_eq!(d.activation_count(), 1);
    assert_eq!(mock.state().load_count, 1);
}

#[test]
fn test_probe_appearing_after_activation_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let probe = dir.path().join("nvhost-nvdec");

    let mock = full_vendor();
    let d = Dispatcher::with_loader(tegra_config(&probe), Box::new(mock.clone()));
    d.activate();

    symlink("/dev/null", &probe).unwrap();

    assert_defaults(&d);
    assert_eq!(d.state(), ActivationState::Inactive);
    assert_eq!(mock.state().load_count, 0);
}

#[test]
fn test_dlopen_of_missing_vendor_library() {
    let dir = tempfile::tempdir().unwrap();
    let d = Dispatcher::new(tegra_config("/dev/null").with_library_dir(dir.path()));

    assert_defaults(&d);
    assert_eq!(d.state(), ActivationState::Inactive);
    assert!(!d.has_module());
}

#[test]
fn test_exported_entry_points_without_hardware() {
    // Only meaningful off-target; on a Tegra board the global forwards for real
    if Path::new(PROBE_DEVICE).exists() {
        return;
    }

    unsafe {
        assert_eq!(drm::entry::drmOpen(ptr::null(), ptr::null()), -libc::EINVAL);
        assert_eq!(drm::entry::drmGetNodeTypeFromFd(0), -1);
        assert!(drm::entry::drmModeGetResources(0).is_null());
        drm::entry::drmFreeVersion(ptr::null_mut());
    }
    assert_eq!(drm::global().resolved_count(), 0);
}
