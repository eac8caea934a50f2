/*
 *  config.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  Build-time fixed locations for the probe node and the vendor module
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

use std::path::{Path, PathBuf};

use crate::error::ShimError;

mod build_info {
    include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
}

pub use build_info::{BUILD_DATE, PROBE_DEVICE, TARGET_LIBPATH};

/// Versioned filename of the vendor library inside `TARGET_LIBPATH`.
pub const VENDOR_LIBRARY_NAME: &str = "libdrm.so.2";

/// Where to look for the hardware and where the real libdrm lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    /// Device node whose presence gates activation
    pub probe_path: PathBuf,
    /// Absolute directory holding the vendor module
    pub library_dir: PathBuf,
    /// File name of the vendor module
    pub library_name: String,
}

impl ShimConfig {
    /// The configuration baked in by build.rs.
    pub fn builtin() -> Self {
        Self {
            probe_path: PathBuf::from(PROBE_DEVICE),
            library_dir: PathBuf::from(TARGET_LIBPATH),
            library_name: VENDOR_LIBRARY_NAME.to_string(),
        }
    }

    pub fn with_probe_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.probe_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_library_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.library_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_library_name(mut self, name: &str) -> Self {
        self.library_name = name.to_string();
        self
    }

    /// Full path handed to the loader.
    pub fn library_path(&self) -> PathBuf {
        self.library_dir.join(&self.library_name)
    }

    /// The vendor module must be named by an absolute path so the dynamic
    /// linker never searches for it (and never finds this shim instead).
    pub fn validate(&self) -> Result<(), ShimError> {
        if !self.library_dir.is_absolute() {
            return Err(ShimError::InvalidConfig(format!(
                "vendor directory {} is not absolute",
                self.library_dir.display()
            )));
        }
        if self.library_name.is_empty() || self.library_name.contains('/') {
            return Err(ShimError::InvalidConfig(format!(
                "vendor library name {:?} is not a plain file name",
                self.library_name
            )));
        }
        Ok(())
    }
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
