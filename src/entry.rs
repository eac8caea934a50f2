/*
 *  entry.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  The forwarded libdrm surface
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

//! Every libdrm entry point the shim exports, with the value it returns when
//! the vendor library is unavailable.
//!
//! Defaults: the open family and device enumeration report `-EINVAL`, the
//! calls mesa probes with report what the old header stubs did (`-1` or
//! `-EINVAL`), everything else returns 0 or NULL, and `void` calls do
//! nothing. Signatures are the vendor's, parameter for parameter; C array
//! parameters are the pointers they decay to.

#![allow(non_snake_case, clippy::too_many_arguments, clippy::missing_safety_doc)]

use std::ffi::{c_char, c_int, c_uint, c_ulong, c_void};
use std::ptr;

use libc::EINVAL;

use crate::table::entry_points;
use crate::types::*;

entry_points! {
    // Device open/close
    fn drmAvailable() -> c_int = 0;
    /// Open a DRM device by driver name and/or bus id. Returns `-EINVAL`
    /// when there is no vendor libdrm to open it with.
    fn drmOpen(name: *const c_char, busid: *const c_char) -> c_int = -EINVAL;
    fn drmOpenWithType(name: *const c_char, busid: *const c_char, type_: c_int) -> c_int = -EINVAL;
    fn drmOpenControl(minor: c_int) -> c_int = -EINVAL;
    fn drmOpenRender(minor: c_int) -> c_int = -EINVAL;
    fn drmOpenOnce(unused: *mut c_void, BusID: *const c_char, newlyopened: *mut c_int) -> c_int = -1;
    fn drmClose(fd: c_int) -> c_int = 0;
    fn drmCloseOnce(fd: c_int);

    // Versions, bus ids, device nodes
    fn drmGetVersion(fd: c_int) -> drmVersionPtr = ptr::null_mut();
    fn drmGetLibVersion(fd: c_int) -> drmVersionPtr = ptr::null_mut();
    fn drmFreeVersion(version: drmVersionPtr);
    fn drmSetInterfaceVersion(fd: c_int, version: *mut drmSetVersion) -> c_int = 0;
    fn drmGetBusid(fd: c_int) -> *mut c_char = ptr::null_mut();
    fn drmSetBusid(fd: c_int, busid: *const c_char) -> c_int = 0;
    fn drmFreeBusid(busid: *const c_char);
    fn drmGetInterruptFromBusID(fd: c_int, busnum: c_int, devnum: c_int, funcnum: c_int) -> c_int = 0;
    fn drmGetDeviceNameFromFd(fd: c_int) -> *mut c_char = ptr::null_mut();
    fn drmGetDeviceNameFromFd2(fd: c_int) -> *mut c_char = ptr::null_mut();
    fn drmGetPrimaryDeviceNameFromFd(fd: c_int) -> *mut c_char = ptr::null_mut();
    fn drmGetRenderDeviceNameFromFd(fd: c_int) -> *mut c_char = ptr::null_mut();
    fn drmGetNodeTypeFromFd(fd: c_int) -> c_int = -1;
    fn drmGetDevice(fd: c_int, device: *mut drmDevicePtr) -> c_int = -EINVAL;
    fn drmGetDevice2(fd: c_int, flags: u32, device: *mut drmDevicePtr) -> c_int = -EINVAL;
    fn drmGetDevices(devices: *mut drmDevicePtr, max_devices: c_int) -> c_int = -EINVAL;
    fn drmGetDevices2(flags: u32, devices: *mut drmDevicePtr, max_devices: c_int) -> c_int = -EINVAL;
    fn drmFreeDevice(device: *mut drmDevicePtr);
    fn drmFreeDevices(devices: *mut drmDevicePtr, count: c_int);
    fn drmDevicesEqual(a: drmDevicePtr, b: drmDevicePtr) -> c_int = 0;
    fn drmFree(pt: *mut c_void);

    // Capabilities and client info
    /// Query a driver capability into `*value`.
    fn drmGetCap(fd: c_int, capability: u64, value: *mut u64) -> c_int = 0;
    fn drmSetClientCap(fd: c_int, capability: u64, value: u64) -> c_int = 0;
    fn drmGetClient(
        fd: c_int,
        idx: c_int,
        auth: *mut c_int,
        pid: *mut c_int,
        uid: *mut c_int,
        magic: *mut c_ulong,
        iocs: *mut c_ulong,
    ) -> c_int = 0;
    fn drmGetStats(fd: c_int, stats: *mut drmStatsT) -> c_int = 0;

    // Master, authentication, leases
    fn drmSetMaster(fd: c_int) -> c_int = 0;
    fn drmDropMaster(fd: c_int) -> c_int = 0;
    fn drmIsMaster(fd: c_int) -> c_int = 0;
    fn drmGetMagic(fd: c_int, magic: *mut drm_magic_t) -> c_int = 0;
    fn drmAuthMagic(fd: c_int, magic: drm_magic_t) -> c_int = 0;
    fn drmModeCreateLease(
        fd: c_int,
        objects: *const u32,
        num_objects: c_int,
        flags: c_int,
        lessee_id: *mut u32,
    ) -> c_int = 0;
    fn drmModeListLessees(fd: c_int) -> drmModeLesseeListPtr = ptr::null_mut();
    fn drmModeGetLease(fd: c_int) -> drmModeObjectListPtr = ptr::null_mut();
    fn drmModeRevokeLease(fd: c_int, lessee_id: u32) -> c_int = 0;

    // PRIME and GEM handles
    fn drmPrimeHandleToFD(fd: c_int, handle: u32, flags: u32, prime_fd: *mut c_int) -> c_int = 0;
    fn drmPrimeFDToHandle(fd: c_int, prime_fd: c_int, handle: *mut u32) -> c_int = 0;
    fn drmCloseBufferHandle(fd: c_int, handle: u32) -> c_int = 0;

    // ioctl and driver commands
    fn drmIoctl(fd: c_int, request: c_ulong, arg: *mut c_void) -> c_int = 0;
    fn drmCommandNone(fd: c_int, drmCommandIndex: c_ulong) -> c_int = 0;
    fn drmCommandRead(fd: c_int, drmCommandIndex: c_ulong, data: *mut c_void, size: c_ulong) -> c_int = 0;
    fn drmCommandWrite(fd: c_int, drmCommandIndex: c_ulong, data: *mut c_void, size: c_ulong) -> c_int = 0;
    fn drmCommandWriteRead(fd: c_int, drmCommandIndex: c_ulong, data: *mut c_void, size: c_ulong) -> c_int = 0;

    // Legacy maps, buffers, DMA
    fn drmAddMap(
        fd: c_int,
        offset: drm_handle_t,
        size: drmSize,
        type_: drmMapType,
        flags: drmMapFlags,
        handle: *mut drm_handle_t,
    ) -> c_int = 0;
    fn drmRmMap(fd: c_int, handle: drm_handle_t) -> c_int = 0;
    fn drmGetMap(
        fd: c_int,
        idx: c_int,
        offset: *mut drm_handle_t,
        size: *mut drmSize,
        type_: *mut drmMapType,
        flags: *mut drmMapFlags,
        handle: *mut drm_handle_t,
        mtrr: *mut c_int,
    ) -> c_int = 0;
    fn drmMap(fd: c_int, handle: drm_handle_t, size: drmSize, address: drmAddressPtr) -> c_int = -EINVAL;
    fn drmUnmap(address: drmAddress, size: drmSize) -> c_int = 0;
    fn drmAddBufs(fd: c_int, count: c_int, size: c_int, flags: drmBufDescFlags, agp_offset: c_int) -> c_int = 0;
    fn drmMarkBufs(fd: c_int, low: f64, high: f64) -> c_int = 0;
    fn drmFreeBufs(fd: c_int, count: c_int, list: *mut c_int) -> c_int = 0;
    fn drmGetBufInfo(fd: c_int) -> drmBufInfoPtr = ptr::null_mut();
    fn drmMapBufs(fd: c_int) -> drmBufMapPtr = ptr::null_mut();
    fn drmUnmapBufs(bufs: drmBufMapPtr) -> c_int = 0;
    fn drmDMA(fd: c_int, request: drmDMAReqPtr) -> c_int = 0;

    // Legacy locks, contexts, drawables, IRQs
    fn drmGetLock(fd: c_int, context: drm_context_t, flags: drmLockFlags) -> c_int = 0;
    fn drmUnlock(fd: c_int, context: drm_context_t) -> c_int = 0;
    fn drmFinish(fd: c_int, context: c_int, flags: drmLockFlags) -> c_int = 0;
    fn drmCreateContext(fd: c_int, handle: *mut drm_context_t) -> c_int = 0;
    fn drmDestroyContext(fd: c_int, handle: drm_context_t) -> c_int = 0;
    fn drmSwitchToContext(fd: c_int, context: drm_context_t) -> c_int = 0;
    fn drmSetContextFlags(fd: c_int, context: drm_context_t, flags: drm_context_tFlags) -> c_int = 0;
    fn drmGetContextFlags(fd: c_int, context: drm_context_t, flags: drm_context_tFlagsPtr) -> c_int = 0;
    fn drmAddContextTag(fd: c_int, context: drm_context_t, tag: *mut c_void) -> c_int = 0;
    fn drmDelContextTag(fd: c_int, context: drm_context_t) -> c_int = 0;
    fn drmGetContextTag(fd: c_int, context: drm_context_t) -> *mut c_void = ptr::null_mut();
    fn drmGetReservedContextList(fd: c_int, count: *mut c_int) -> *mut drm_context_t = ptr::null_mut();
    fn drmFreeReservedContextList(list: *mut drm_context_t);
    fn drmAddContextPrivateMapping(fd: c_int, ctx_id: drm_context_t, handle: drm_handle_t) -> c_int = 0;
    fn drmGetContextPrivateMapping(fd: c_int, ctx_id: drm_context_t, handle: *mut drm_handle_t) -> c_int = 0;
    fn drmCreateDrawable(fd: c_int, handle: *mut drm_drawable_t) -> c_int = 0;
    fn drmDestroyDrawable(fd: c_int, handle: drm_drawable_t) -> c_int = 0;
    fn drmUpdateDrawableInfo(
        fd: c_int,
        handle: drm_drawable_t,
        type_: drm_drawable_info_type_t,
        num: c_uint,
        data: *mut c_void,
    ) -> c_int = 0;
    fn drmCtlInstHandler(fd: c_int, irq: c_int) -> c_int = 0;
    fn drmCtlUninstHandler(fd: c_int) -> c_int = 0;

    // vblank, CRTC sequence, events
    fn drmWaitVBlank(fd: c_int, vbl: drmVBlankPtr) -> c_int = 0;
    fn drmCrtcGetSequence(fd: c_int, crtcId: u32, sequence: *mut u64, ns: *mut u64) -> c_int = 0;
    fn drmCrtcQueueSequence(
        fd: c_int,
        crtcId: u32,
        flags: u32,
        sequence: u64,
        sequence_queued: *mut u64,
        user_data: u64,
    ) -> c_int = 0;
    fn drmHandleEvent(fd: c_int, evctx: drmEventContextPtr) -> c_int = 0;

    // Sync objects; absent from older vendor builds
    fn drmSyncobjCreate(fd: c_int, flags: u32, handle: *mut u32) -> c_int = 0;
    fn drmSyncobjDestroy(fd: c_int, handle: u32) -> c_int = 0;
    fn drmSyncobjHandleToFD(fd: c_int, handle: u32, obj_fd: *mut c_int) -> c_int = 0;
    fn drmSyncobjFDToHandle(fd: c_int, obj_fd: c_int, handle: *mut u32) -> c_int = 0;
    fn drmSyncobjImportSyncFile(fd: c_int, handle: u32, sync_file_fd: c_int) -> c_int = 0;
    fn drmSyncobjExportSyncFile(fd: c_int, handle: u32, sync_file_fd: *mut c_int) -> c_int = 0;
    fn drmSyncobjWait(
        fd: c_int,
        handles: *mut u32,
        num_handles: c_uint,
        timeout_nsec: i64,
        flags: c_uint,
        first_signaled: *mut u32,
    ) -> c_int = 0;
    fn drmSyncobjReset(fd: c_int, handles: *const u32, handle_count: u32) -> c_int = 0;
    fn drmSyncobjSignal(fd: c_int, handles: *const u32, handle_count: u32) -> c_int = 0;
    fn drmSyncobjTimelineSignal(fd: c_int, handles: *const u32, points: *mut u64, handle_count: u32) -> c_int = 0;
    fn drmSyncobjTimelineWait(
        fd: c_int,
        handles: *mut u32,
        points: *mut u64,
        num_handles: c_uint,
        timeout_nsec: i64,
        flags: c_uint,
        first_signaled: *mut u32,
    ) -> c_int = 0;
    fn drmSyncobjQuery(fd: c_int, handles: *mut u32, points: *mut u64, handle_count: u32) -> c_int = 0;
    fn drmSyncobjQuery2(fd: c_int, handles: *mut u32, points: *mut u64, handle_count: u32, flags: u32) -> c_int = 0;
    fn drmSyncobjTransfer(
        fd: c_int,
        dst_handle: u32,
        dst_point: u64,
        src_handle: u32,
        src_point: u64,
        flags: u32,
    ) -> c_int = 0;
    fn drmSyncobjEventfd(fd: c_int, handle: u32, point: u64, ev_fd: c_int, flags: u32) -> c_int = 0;

    // KMS resources and framebuffers
    fn drmCheckModesettingSupported(busid: *const c_char) -> c_int = -EINVAL;
    fn drmModeGetResources(fd: c_int) -> drmModeResPtr = ptr::null_mut();
    fn drmModeFreeResources(ptr: drmModeResPtr);
    fn drmModeGetFB(fd: c_int, bufferId: u32) -> drmModeFBPtr = ptr::null_mut();
    fn drmModeFreeFB(ptr: drmModeFBPtr);
    fn drmModeGetFB2(fd: c_int, bufferId: u32) -> drmModeFB2Ptr = ptr::null_mut();
    fn drmModeFreeFB2(ptr: drmModeFB2Ptr);
    fn drmModeAddFB(
        fd: c_int,
        width: u32,
        height: u32,
        depth: u8,
        bpp: u8,
        pitch: u32,
        bo_handle: u32,
        buf_id: *mut u32,
    ) -> c_int = 0;
    fn drmModeAddFB2(
        fd: c_int,
        width: u32,
        height: u32,
        pixel_format: u32,
        bo_handles: *const u32,
        pitches: *const u32,
        offsets: *const u32,
        buf_id: *mut u32,
        flags: u32,
    ) -> c_int = 0;
    fn drmModeAddFB2WithModifiers(
        fd: c_int,
        width: u32,
        height: u32,
        pixel_format: u32,
        bo_handles: *const u32,
        pitches: *const u32,
        offsets: *const u32,
        modifier: *const u64,
        buf_id: *mut u32,
        flags: u32,
    ) -> c_int = 0;
    fn drmModeRmFB(fd: c_int, bufferId: u32) -> c_int = 0;
    fn drmModeCloseFB(fd: c_int, buffer_id: u32) -> c_int = 0;
    fn drmModeDirtyFB(fd: c_int, bufferId: u32, clips: drmModeClipPtr, num_clips: u32) -> c_int = 0;

    // CRTCs, gamma, cursors, page flips
    fn drmModeGetCrtc(fd: c_int, crtcId: u32) -> drmModeCrtcPtr = ptr::null_mut();
    fn drmModeFreeCrtc(ptr: drmModeCrtcPtr);
    fn drmModeSetCrtc(
        fd: c_int,
        crtcId: u32,
        bufferId: u32,
        x: u32,
        y: u32,
        connectors: *mut u32,
        count: c_int,
        mode: drmModeModeInfoPtr,
    ) -> c_int = 0;
    fn drmModeCrtcSetGamma(
        fd: c_int,
        crtc_id: u32,
        size: u32,
        red: *const u16,
        green: *const u16,
        blue: *const u16,
    ) -> c_int = 0;
    fn drmModeCrtcGetGamma(
        fd: c_int,
        crtc_id: u32,
        size: u32,
        red: *mut u16,
        green: *mut u16,
        blue: *mut u16,
    ) -> c_int = 0;
    fn drmModeSetCursor(fd: c_int, crtcId: u32, bo_handle: u32, width: u32, height: u32) -> c_int = 0;
    fn drmModeSetCursor2(
        fd: c_int,
        crtcId: u32,
        bo_handle: u32,
        width: u32,
        height: u32,
        hot_x: i32,
        hot_y: i32,
    ) -> c_int = 0;
    fn drmModeMoveCursor(fd: c_int, crtcId: u32, x: c_int, y: c_int) -> c_int = 0;
    fn drmModePageFlip(fd: c_int, crtc_id: u32, fb_id: u32, flags: u32, user_data: *mut c_void) -> c_int = 0;
    fn drmModePageFlipTarget(
        fd: c_int,
        crtc_id: u32,
        fb_id: u32,
        flags: u32,
        user_data: *mut c_void,
        target_vblank: u32,
    ) -> c_int = 0;

    // Encoders, connectors, modes
    fn drmModeGetEncoder(fd: c_int, encoder_id: u32) -> drmModeEncoderPtr = ptr::null_mut();
    fn drmModeFreeEncoder(ptr: drmModeEncoderPtr);
    fn drmModeGetConnector(fd: c_int, connectorId: u32) -> drmModeConnectorPtr = ptr::null_mut();
    fn drmModeGetConnectorCurrent(fd: c_int, connector_id: u32) -> drmModeConnectorPtr = ptr::null_mut();
    fn drmModeFreeConnector(ptr: drmModeConnectorPtr);
    fn drmModeConnectorGetPossibleCrtcs(fd: c_int, connector: *const drmModeConnector) -> u32 = 0;
    fn drmModeConnectorSetProperty(fd: c_int, connector_id: u32, property_id: u32, value: u64) -> c_int = 0;
    fn drmModeAttachMode(fd: c_int, connectorId: u32, mode_info: drmModeModeInfoPtr) -> c_int = 0;
    fn drmModeDetachMode(fd: c_int, connectorId: u32, mode_info: drmModeModeInfoPtr) -> c_int = 0;
    fn drmModeFreeModeInfo(ptr: drmModeModeInfoPtr);

    // Properties and blobs
    fn drmModeGetProperty(fd: c_int, propertyId: u32) -> drmModePropertyPtr = ptr::null_mut();
    fn drmModeFreeProperty(ptr: drmModePropertyPtr);
    fn drmModeGetPropertyBlob(fd: c_int, blob_id: u32) -> drmModePropertyBlobPtr = ptr::null_mut();
    fn drmModeFreePropertyBlob(ptr: drmModePropertyBlobPtr);
    fn drmModeCreatePropertyBlob(fd: c_int, data: *const c_void, size: usize, id: *mut u32) -> c_int = 0;
    fn drmModeDestroyPropertyBlob(fd: c_int, id: u32) -> c_int = 0;

    // Planes and object properties
    fn drmModeGetPlaneResources(fd: c_int) -> drmModePlaneResPtr = ptr::null_mut();
    fn drmModeFreePlaneResources(ptr: drmModePlaneResPtr);
    fn drmModeGetPlane(fd: c_int, plane_id: u32) -> drmModePlanePtr = ptr::null_mut();
    fn drmModeFreePlane(ptr: drmModePlanePtr);
    fn drmModeSetPlane(
        fd: c_int,
        plane_id: u32,
        crtc_id: u32,
        fb_id: u32,
        flags: u32,
        crtc_x: i32,
        crtc_y: i32,
        crtc_w: u32,
        crtc_h: u32,
        src_x: u32,
        src_y: u32,
        src_w: u32,
        src_h: u32,
    ) -> c_int = 0;
    fn drmModeObjectGetProperties(fd: c_int, object_id: u32, object_type: u32) -> drmModeObjectPropertiesPtr = ptr::null_mut();
    fn drmModeFreeObjectProperties(ptr: drmModeObjectPropertiesPtr);
    fn drmModeObjectSetProperty(
        fd: c_int,
        object_id: u32,
        object_type: u32,
        property_id: u32,
        value: u64,
    ) -> c_int = 0;

    // Atomic modesetting
    fn drmModeAtomicAlloc() -> drmModeAtomicReqPtr = ptr::null_mut();
    fn drmModeAtomicDuplicate(req: drmModeAtomicReqPtr) -> drmModeAtomicReqPtr = ptr::null_mut();
    fn drmModeAtomicMerge(base: drmModeAtomicReqPtr, augment: drmModeAtomicReqPtr) -> c_int = 0;
    fn drmModeAtomicFree(req: drmModeAtomicReqPtr);
    fn drmModeAtomicGetCursor(req: drmModeAtomicReqPtr) -> c_int = 0;
    fn drmModeAtomicSetCursor(req: drmModeAtomicReqPtr, cursor: c_int);
    fn drmModeAtomicAddProperty(req: drmModeAtomicReqPtr, object_id: u32, property_id: u32, value: u64) -> c_int = 0;
    fn drmModeAtomicCommit(fd: c_int, req: drmModeAtomicReqPtr, flags: u32, user_data: *mut c_void) -> c_int = 0;

    // Dumb buffers
    fn drmModeCreateDumbBuffer(
        fd: c_int,
        width: u32,
        height: u32,
        bpp: u32,
        flags: u32,
        handle: *mut u32,
        pitch: *mut u32,
        size: *mut u64,
    ) -> c_int = 0;
    fn drmModeDestroyDumbBuffer(fd: c_int, handle: u32) -> c_int = 0;
    fn drmModeMapDumbBuffer(fd: c_int, handle: u32, offset: *mut u64) -> c_int = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbol_names_match_variants() {
        assert_eq!(Symbol::drmOpen.name().to_bytes(), b"drmOpen");
        assert_eq!(Symbol::drmModeMapDumbBuffer.name().to_bytes(), b"drmModeMapDumbBuffer");
        assert_eq!(Symbol::drmSyncobjCreate.to_string(), "drmSyncobjCreate");
    }

    #[test]
    fn test_symbol_names_unique() {
        let names: HashSet<_> = Symbol::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), SYMBOL_COUNT);
    }

    #[test]
    fn test_index_is_table_position() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Symbol::from_name("drmGetCap"), Some(Symbol::drmGetCap));
        assert_eq!(Symbol::from_name("drmMsg"), None);
    }

    #[test]
    fn test_surface_covers_core_kms_set() {
        for name in [
            "drmOpen", "drmClose", "drmGetCap", "drmSetClientCap", "drmSetMaster",
            "drmDropMaster", "drmGetMagic", "drmAuthMagic", "drmGetVersion", "drmFreeVersion",
            "drmHandleEvent", "drmIoctl", "drmWaitVBlank", "drmPrimeFDToHandle",
            "drmPrimeHandleToFD", "drmSetInterfaceVersion", "drmGetBusid", "drmFreeBusid",
            "drmGetDeviceNameFromFd", "drmFree", "drmCommandWriteRead", "drmModeAddFB",
            "drmModeAddFB2", "drmModeRmFB", "drmModeGetConnector", "drmModeFreeConnector",
            "drmModeConnectorSetProperty", "drmModeGetCrtc", "drmModeFreeCrtc", "drmModeSetCrtc",
            "drmModeCrtcSetGamma", "drmModeCrtcGetGamma", "drmModePageFlip", "drmModeSetCursor",
            "drmModeMoveCursor", "drmModeGetEncoder", "drmModeFreeEncoder", "drmModeGetPlane",
            "drmModeFreePlane", "drmModeSetPlane", "drmModeObjectGetProperties",
            "drmModeFreeObjectProperties", "drmModeGetProperty", "drmModeFreeProperty",
            "drmModeGetResources", "drmModeFreeResources", "drmModeGetPlaneResources",
            "drmModeFreePlaneResources", "drmModeAtomicAlloc", "drmModeAtomicAddProperty",
            "drmModeAtomicCommit", "drmModeAtomicFree", "drmModeCreatePropertyBlob",
            "drmModeDestroyPropertyBlob", "drmModeGetPropertyBlob", "drmModeFreePropertyBlob",
        ] {
            assert!(Symbol::from_name(name).is_some(), "{} missing", name);
        }
        assert!(SYMBOL_COUNT >= 100);
    }
}
