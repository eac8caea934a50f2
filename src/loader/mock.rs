/*
 *  loader/mock.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  Mock vendor module for testing without the Tegra stack
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

use std::collections::HashMap;
use std::ffi::{CStr, CString, c_void};
use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::sync::{Arc, Mutex, PoisonError};

use super::{VendorLoader, VendorModule};
use crate::error::ShimError;

/// Mock vendor libdrm
///
/// Hands out whatever addresses it was built with, typically `extern "C"`
/// functions defined by a test. This is useful for:
/// - Unit tests of the dispatcher
/// - Integration tests of the exported entry points
/// - Simulating an old vendor build that lacks newer symbols
///
/// Clones share state, so a test can keep one copy for inspection after
/// handing the other to a dispatcher.
#[derive(Debug, Clone, Default)]
pub struct MockVendor {
    /// Symbol name to address
    symbols: Arc<HashMap<CString, usize>>,

    /// Shared state for testing
    state: Arc<Mutex<MockVendorState>>,
}

/// Internal state for the mock vendor (shared for inspection in tests)
#[derive(Debug, Default, Clone)]
pub struct MockVendorState {
    /// Number of times load() was called
    pub load_count: usize,

    /// Number of modules dropped (dlclose equivalent)
    pub unload_count: usize,

    /// Number of lookups performed
    pub lookup_count: usize,

    /// Path passed to the most recent load()
    pub last_path: Option<PathBuf>,

    /// Simulate a module that cannot be opened
    pub simulate_load_failure: bool,
}

impl MockVendor {
    /// Create a mock vendor exporting nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Export `name` at `address`
    pub fn with_symbol(mut self, name: &CStr, address: *const c_void) -> Self {
        Arc::make_mut(&mut self.symbols).insert(name.to_owned(), address as usize);
        self
    }

    /// A vendor whose load always fails (missing file, wrong architecture...)
    pub fn failing() -> Self {
        let mock = Self::new();
        mock.lock().simulate_load_failure = true;
        mock
    }

    /// Snapshot of the shared state
    pub fn state(&self) -> MockVendorState {
        self.lock().clone()
    }

    pub fn exports(&self, name: &CStr) -> bool {
        self.symbols.contains_key(name)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockVendorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VendorLoader for MockVendor {
    fn load(&self, path: &Path) -> Result<Box<dyn VendorModule>, ShimError> {
        let mut state = self.lock();
        state.load_count += 1;
        state.last_path = Some(path.to_path_buf());

        if state.simulate_load_failure {
            return Err(ShimError::MockLoadRefused { path: path.to_path_buf() });
        }

        Ok(Box::new(MockModule {
            path: path.to_path_buf(),
            symbols: Arc::clone(&self.symbols),
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockModule {
    path: PathBuf,
    symbols: Arc<HashMap<CString, usize>>,
    state: Arc<Mutex<MockVendorState>>,
}

impl VendorModule for MockModule {
    fn lookup(&self, name: &CStr) -> Option<NonNull<c_void>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).lookup_count += 1;
        self.symbols
            .get(name)
            .and_then(|&address| NonNull::new(address as *mut c_void))
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for MockModule {
    fn drop(&mut self) {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).unload_count += 1;
    }
}
