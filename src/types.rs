/*
 *  types.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  C ABI types from xf86drm.h and xf86drmMode.h
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

//! C-compatible mirrors of the libdrm types that appear in forwarded
//! signatures.
//!
//! The shim never reads these; it only passes pointers to them through. The
//! layouts are still spelled out for the structs callers commonly inspect so
//! Rust users of the rlib can read what the vendor library returns. Types
//! nobody should look inside are opaque.

#![allow(non_camel_case_types, non_snake_case)]

use std::ffi::{c_char, c_int, c_long, c_uint, c_ulong, c_void};

pub const DRM_DISPLAY_MODE_LEN: usize = 32;
pub const DRM_PROP_NAME_LEN: usize = 32;
pub const DRM_PLATFORM_DEVICE_NAME_LEN: usize = 512;
pub const DRM_HOST1X_DEVICE_NAME_LEN: usize = 512;

pub type drm_magic_t = c_uint;
pub type drm_handle_t = c_uint;
pub type drm_context_t = c_uint;
pub type drm_drawable_t = c_uint;
pub type drmSize = c_uint;
pub type drmAddress = *mut c_void;
pub type drmAddressPtr = *mut drmAddress;

// Enum-typed flag words; C enums are int-sized on every ABI we ship for.
pub type drmMapType = c_uint;
pub type drmMapFlags = c_uint;
pub type drmBufDescFlags = c_uint;
pub type drmLockFlags = c_uint;
pub type drm_context_tFlags = c_uint;
pub type drm_context_tFlagsPtr = *mut drm_context_tFlags;
pub type drm_drawable_info_type_t = c_uint;
pub type drmVBlankSeqType = c_uint;

/// Declares a type only ever handled through a pointer.
macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque!(
    drmModeAtomicReq,
    drmModeLesseeListRes,
    drmModeObjectListRes,
    drmModeFB2,
    drmStatsT,
    drmBufInfo,
    drmBufMap,
    drmDMAReq,
    drm_mode_property_enum,
);

pub type drmModeAtomicReqPtr = *mut drmModeAtomicReq;
pub type drmModeLesseeListPtr = *mut drmModeLesseeListRes;
pub type drmModeObjectListPtr = *mut drmModeObjectListRes;
pub type drmModeFB2Ptr = *mut drmModeFB2;
pub type drmBufInfoPtr = *mut drmBufInfo;
pub type drmBufMapPtr = *mut drmBufMap;
pub type drmDMAReqPtr = *mut drmDMAReq;

#[repr(C)]
#[derive(Debug)]
pub struct drmVersion {
    pub version_major: c_int,
    pub version_minor: c_int,
    pub version_patchlevel: c_int,
    pub name_len: c_int,
    pub name: *mut c_char,
    pub date_len: c_int,
    pub date: *mut c_char,
    pub desc_len: c_int,
    pub desc: *mut c_char,
}
pub type drmVersionPtr = *mut drmVersion;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct drmVBlankReq {
    pub type_: drmVBlankSeqType,
    pub sequence: c_uint,
    pub signal: c_ulong,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct drmVBlankReply {
    pub type_: drmVBlankSeqType,
    pub sequence: c_uint,
    pub tval_sec: c_long,
    pub tval_usec: c_long,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union drmVBlank {
    pub request: drmVBlankReq,
    pub reply: drmVBlankReply,
}
pub type drmVBlankPtr = *mut drmVBlank;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct drmSetVersion {
    pub drm_di_major: c_int,
    pub drm_di_minor: c_int,
    pub drm_dd_major: c_int,
    pub drm_dd_minor: c_int,
}
pub type drmSetVersionPtr = *mut drmSetVersion;

pub type drmVBlankHandler =
    Option<unsafe extern "C" fn(fd: c_int, sequence: c_uint, tv_sec: c_uint, tv_usec: c_uint, user_data: *mut c_void)>;
pub type drmPageFlipHandler2 = Option<
    unsafe extern "C" fn(fd: c_int, sequence: c_uint, tv_sec: c_uint, tv_usec: c_uint, crtc_id: c_uint, user_data: *mut c_void),
>;
pub type drmSequenceHandler = Option<unsafe extern "C" fn(fd: c_int, sequence: u64, ns: u64, user_data: u64)>;

/// Versioned event dispatch table passed to drmHandleEvent
#[repr(C)]
pub struct drmEventContext {
    pub version: c_int,
    pub vblank_handler: drmVBlankHandler,
    pub page_flip_handler: drmVBlankHandler,
    pub page_flip_handler2: drmPageFlipHandler2,
    pub sequence_handler: drmSequenceHandler,
}
pub type drmEventContextPtr = *mut drmEventContext;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct drmPciBusInfo {
    pub domain: u16,
    pub bus: u8,
    pub dev: u8,
    pub func: u8,
}
pub type drmPciBusInfoPtr = *mut drmPciBusInfo;

#[repr(C)]
pub struct drmPlatformBusInfo {
    pub fullname: [c_char; DRM_PLATFORM_DEVICE_NAME_LEN],
}
pub type drmPlatformBusInfoPtr = *mut drmPlatformBusInfo;

#[repr(C)]
pub struct drmHost1xBusInfo {
    pub fullname: [c_char; DRM_HOST1X_DEVICE_NAME_LEN],
}
pub type drmHost1xBusInfoPtr = *mut drmHost1xBusInfo;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct drmPciDeviceInfo {
    pub vendor_id: u16,
    pub device_id: u16,
    pub subvendor_id: u16,
    pub subdevice_id: u16,
    pub revision_id: u8,
}
pub type drmPciDeviceInfoPtr = *mut drmPciDeviceInfo;

#[repr(C)]
#[derive(Clone, Copy)]
pub union drmBusInfo {
    pub pci: drmPciBusInfoPtr,
    pub platform: drmPlatformBusInfoPtr,
    pub host1x: drmHost1xBusInfoPtr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union drmDeviceInfo {
    pub pci: drmPciDeviceInfoPtr,
}

#[repr(C)]
pub struct drmDevice {
    /// DRM_NODE_MAX sized array
    pub nodes: *mut *mut c_char,
    /// DRM_NODE_* bitmask
    pub available_nodes: c_int,
    pub bustype: c_int,
    pub businfo: drmBusInfo,
    pub deviceinfo: drmDeviceInfo,
}
pub type drmDevicePtr = *mut drmDevice;

#[repr(C)]
#[derive(Debug)]
pub struct drmModeRes {
    pub count_fbs: c_int,
    pub fbs: *mut u32,
    pub count_crtcs: c_int,
    pub crtcs: *mut u32,
    pub count_connectors: c_int,
    pub connectors: *mut u32,
    pub count_encoders: c_int,
    pub encoders: *mut u32,
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}
pub type drmModeResPtr = *mut drmModeRes;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct drmModeModeInfo {
    pub clock: u32,
    pub hdisplay: u16,
    pub hsync_start: u16,
    pub hsync_end: u16,
    pub htotal: u16,
    pub hskew: u16,
    pub vdisplay: u16,
    pub vsync_start: u16,
    pub vsync_end: u16,
    pub vtotal: u16,
    pub vscan: u16,
    pub vrefresh: u32,
    pub flags: u32,
    pub type_: u32,
    pub name: [c_char; DRM_DISPLAY_MODE_LEN],
}
pub type drmModeModeInfoPtr = *mut drmModeModeInfo;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct drmModeFB {
    pub fb_id: u32,
    pub width: u32,
    pub height: u32,
    pub pitch: u32,
    pub bpp: u32,
    pub depth: u32,
    /// driver specific handle
    pub handle: u32,
}
pub type drmModeFBPtr = *mut drmModeFB;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct drmModeClip {
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
}
pub type drmModeClipPtr = *mut drmModeClip;

#[repr(C)]
#[derive(Debug)]
pub struct drmModePropertyBlobRes {
    pub id: u32,
    pub length: u32,
    pub data: *mut c_void,
}
pub type drmModePropertyBlobPtr = *mut drmModePropertyBlobRes;

#[repr(C)]
#[derive(Debug)]
pub struct drmModePropertyRes {
    pub prop_id: u32,
    pub flags: u32,
    pub name: [c_char; DRM_PROP_NAME_LEN],
    pub count_values: c_int,
    /// store the blob lengths
    pub values: *mut u64,
    pub count_enums: c_int,
    pub enums: *mut drm_mode_property_enum,
    pub count_blobs: c_int,
    /// store the blob IDs
    pub blob_ids: *mut u32,
}
pub type drmModePropertyPtr = *mut drmModePropertyRes;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct drmModeCrtc {
    pub crtc_id: u32,
    /// FB id to connect to, 0 = disconnect
    pub buffer_id: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub mode_valid: c_int,
    pub mode: drmModeModeInfo,
    /// Number of gamma stops
    pub gamma_size: c_int,
}
pub type drmModeCrtcPtr = *mut drmModeCrtc;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct drmModeEncoder {
    pub encoder_id: u32,
    pub encoder_type: u32,
    pub crtc_id: u32,
    pub possible_crtcs: u32,
    pub possible_clones: u32,
}
pub type drmModeEncoderPtr = *mut drmModeEncoder;

pub type drmModeConnection = c_uint;

pub type drmModeSubPixel = c_uint;

#[repr(C)]
#[derive(Debug)]
pub struct drmModeConnector {
    pub connector_id: u32,
    /// Encoder currently connected to
    pub encoder_id: u32,
    pub connector_type: u32,
    pub connector_type_id: u32,
    pub connection: drmModeConnection,
    pub mmWidth: u32,
    pub mmHeight: u32,
    pub subpixel: drmModeSubPixel,
    pub count_modes: c_int,
    pub modes: drmModeModeInfoPtr,
    pub count_props: c_int,
    pub props: *mut u32,
    pub prop_values: *mut u64,
    pub count_encoders: c_int,
    pub encoders: *mut u32,
}
pub type drmModeConnectorPtr = *mut drmModeConnector;

#[repr(C)]
#[derive(Debug)]
pub struct drmModeObjectProperties {
    pub count_props: u32,
    pub props: *mut u32,
    pub prop_values: *mut u64,
}
pub type drmModeObjectPropertiesPtr = *mut drmModeObjectProperties;

#[repr(C)]
#[derive(Debug)]
pub struct drmModePlane {
    pub count_formats: u32,
    pub formats: *mut u32,
    pub plane_id: u32,
    pub crtc_id: u32,
    pub fb_id: u32,
    pub crtc_x: u32,
    pub crtc_y: u32,
    pub x: u32,
    pub y: u32,
    pub possible_crtcs: u32,
    pub gamma_size: u32,
}
pub type drmModePlanePtr = *mut drmModePlane;

#[repr(C)]
#[derive(Debug)]
pub struct drmModePlaneRes {
    pub count_planes: u32,
    pub planes: *mut u32,
}
pub type drmModePlaneResPtr = *mut drmModePlaneRes;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn test_mode_info_layout() {
        // 4 + 10 * 2 + 3 * 4 + 32
        assert_eq!(size_of::<drmModeModeInfo>(), 68);
    }

    #[test]
    fn test_set_version_layout() {
        assert_eq!(size_of::<drmSetVersion>(), 16);
    }

    #[test]
    fn test_vblank_union_matches_larger_member() {
        assert_eq!(
            size_of::<drmVBlank>(),
            size_of::<drmVBlankReq>().max(size_of::<drmVBlankReply>())
        );
        assert_eq!(align_of::<drmVBlank>(), align_of::<c_long>());
    }

    #[test]
    fn test_opaque_types_are_zero_sized() {
        assert_eq!(size_of::<drmModeAtomicReq>(), 0);
        assert_eq!(size_of::<drmStatsT>(), 0);
    }

    #[test]
    fn test_connector_physical_size_fields() {
        assert_eq!(offset_of!(drmModeConnector, connection), 16);
        assert_eq!(offset_of!(drmModeConnector, mmWidth), 20);
        assert_eq!(offset_of!(drmModeConnector, mmHeight), 24);
        assert_eq!(offset_of!(drmModeConnector, subpixel), 28);
    }

    #[test]
    fn test_name_buffers_sized_from_header_lengths() {
        assert_eq!(size_of::<drmPlatformBusInfo>(), DRM_PLATFORM_DEVICE_NAME_LEN);
        assert_eq!(size_of::<drmHost1xBusInfo>(), DRM_HOST1X_DEVICE_NAME_LEN);
        assert_eq!(
            offset_of!(drmModePropertyRes, count_values) - offset_of!(drmModePropertyRes, name),
            DRM_PROP_NAME_LEN
        );
    }
}
