/*
 *  probe.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  Hardware presence probe
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

use std::fs;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ShimError;

/// Checks for the device node that marks the vendor stack as installed.
///
/// Only existence and file type are looked at. Symlinks are followed, so a
/// udev-created alias pointing at the real node counts as present.
#[derive(Debug, Clone)]
pub struct DeviceProbe {
    path: PathBuf,
}

impl DeviceProbe {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ok if the node exists and is a character device.
    pub fn check(&self) -> Result<(), ShimError> {
        let meta = fs::metadata(&self.path).map_err(|source| ShimError::ProbeMissing {
            path: self.path.clone(),
            source,
        })?;

        if !meta.file_type().is_char_device() {
            return Err(ShimError::NotCharDevice { path: self.path.clone() });
        }

        debug!("probe device {} present", self.path.display());
        Ok(())
    }

    pub fn is_present(&self) -> bool {
        self.check().is_ok()
    }
}
