// build.rs

use chrono::Utc;
use std::env;
use std::fs;
use std::path::Path;

/// Directory the vendor libdrm.so.2 is installed in on L4T images.
const DEFAULT_TARGET_LIBPATH: &str = "/usr/lib/aarch64-linux-gnu/tegra";

/// Device node that only exists when the Tegra multimedia stack is present.
const DEFAULT_PROBE_DEVICE: &str = "/dev/nvhost-nvdec";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("build_info.rs");

    let target_libpath = env::var("DRM_SHIM_TARGET_LIBPATH")
        .unwrap_or_else(|_| DEFAULT_TARGET_LIBPATH.to_string());
    let probe_device = env::var("DRM_SHIM_PROBE_DEVICE")
        .unwrap_or_else(|_| DEFAULT_PROBE_DEVICE.to_string());

    if !Path::new(&target_libpath).is_absolute() {
        panic!("DRM_SHIM_TARGET_LIBPATH must be an absolute path, got {target_libpath:?}");
    }

    let build_date = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    // Constants are pulled into src/config.rs with include!
    fs::write(
        &dest_path,
        format!(
            "pub const BUILD_DATE: &str = {build_date:?};\n\
             pub const TARGET_LIBPATH: &str = {target_libpath:?};\n\
             pub const PROBE_DEVICE: &str = {probe_device:?};\n"
        ),
    ).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=DRM_SHIM_TARGET_LIBPATH");
    println!("cargo:rerun-if-env-changed=DRM_SHIM_PROBE_DEVICE");
}
