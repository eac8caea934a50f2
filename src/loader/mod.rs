/*
 *  loader/mod.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  Vendor module loading
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

//! Loading of the vendor libdrm.
//!
//! The dispatcher only needs two things from a loaded module: look a symbol
//! up by name, and let go of the module when dropped. Those are the
//! [`VendorModule`] and [`VendorLoader`] traits.
//!
//! ## Implementations
//!
//! 1. **dlopen** (`dl.rs`) - the real thing, `RTLD_NOW | RTLD_LOCAL` through libloading
//! 2. **Mock** (`mock.rs`) - in-process symbol table for tests, only built
//!    for unit tests or with the `mock-vendor` feature

use std::ffi::{CStr, c_void};
use std::path::Path;
use std::ptr::NonNull;

use crate::error::ShimError;

pub mod dl;
#[cfg(any(test, feature = "mock-vendor"))]
pub mod mock;

pub use dl::{DlopenLoader, LoadedVendor};
#[cfg(any(test, feature = "mock-vendor"))]
pub use mock::{MockVendor, MockVendorState};

/// A loaded vendor module. Dropping it unloads the module.
pub trait VendorModule: Send + Sync {
    /// Address of `name`, or None if the module does not export it.
    fn lookup(&self, name: &CStr) -> Option<NonNull<c_void>>;

    /// Path the module was loaded from.
    fn path(&self) -> &Path;
}

/// Something that can turn a path into a [`VendorModule`].
pub trait VendorLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Box<dyn VendorModule>, ShimError>;
}
