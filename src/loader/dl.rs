/*
 *  loader/dl.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  dlopen-backed vendor loader
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

use std::ffi::{CStr, c_void};
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

use libloading::os::unix::{Library, RTLD_LOCAL, RTLD_NOW};
use log::{debug, info};

use super::{VendorLoader, VendorModule};
use crate::error::ShimError;

/// The real vendor libdrm, opened with dlopen.
pub struct LoadedVendor {
    /// dlclose runs when this is dropped
    library: Library,

    path: PathBuf,
}

impl LoadedVendor {
    /// Open `path` with immediate binding in a private namespace.
    ///
    /// `RTLD_NOW` makes a module with unsatisfied dependencies fail here
    /// instead of on first call; `RTLD_LOCAL` keeps its symbols (all named
    /// exactly like ours) out of the global lookup scope.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ShimError> {
        let path = path.as_ref();
        info!("Loading vendor libdrm from: {}", path.display());

        let library = unsafe {
            Library::open(Some(path), RTLD_NOW | RTLD_LOCAL).map_err(|source| {
                ShimError::LoadFailed { path: path.to_path_buf(), source }
            })?
        };

        Ok(Self { library, path: path.to_path_buf() })
    }
}

impl VendorModule for LoadedVendor {
    fn lookup(&self, name: &CStr) -> Option<NonNull<c_void>> {
        // A failed dlsym is a normal outcome: older vendor builds lack
        // the newer entry points.
        let symbol = unsafe { self.library.get::<*mut c_void>(name.to_bytes_with_nul()) };
        match symbol {
            Ok(symbol) => NonNull::new(symbol.into_raw()),
            Err(e) => {
                debug!("{}: {}", name.to_string_lossy(), e);
                None
            }
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Loader used by the process-wide dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct DlopenLoader;

impl VendorLoader for DlopenLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn VendorModule>, ShimError> {
        Ok(Box::new(LoadedVendor::open(path)?))
    }
}
