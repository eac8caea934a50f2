/*
 *  lib.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  Runtime-dispatching libdrm
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

//! A drop-in `libdrm.so.2` for Tegra boards.
//!
//! Loaded in place of libdrm, the library checks for the NVIDIA host1x
//! decoder node when the process loads it. If the node is there it opens the
//! vendor libdrm from the Tegra library directory and every exported
//! `drm*` function forwards to the vendor's implementation. If not, each
//! export returns a fixed "not available" value and the caller carries on
//! as if no DRM device existed.
//!
//! Rust callers (and the tests) drive the same machinery through
//! [`Dispatcher`] and the [`entry::forward`] functions.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod loader;
pub mod logging;
pub mod probe;
pub mod types;

mod table;
pub mod entry;

pub use config::ShimConfig;
pub use dispatch::{ActivationState, Dispatcher, global};
pub use entry::{SYMBOL_COUNT, Symbol};
pub use error::ShimError;

// Constructor: runs when the dynamic loader maps the shim
#[cfg(all(target_os = "linux", not(test)))]
#[used]
#[unsafe(link_section = ".init_array")]
static SHIM_INIT: extern "C" fn() = {
    extern "C" fn shim_init() {
        logging::init();
        global().activate();
    }
    shim_init
};

// Destructor: dlclose or process exit
#[cfg(all(target_os = "linux", not(test)))]
#[used]
#[unsafe(link_section = ".fini_array")]
static SHIM_FINI: extern "C" fn() = {
    extern "C" fn shim_fini() {
        global().deactivate();
    }
    shim_fini
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_agree() {
        assert_eq!(Symbol::ALL.len(), SYMBOL_COUNT);
        assert_eq!(config::VENDOR_LIBRARY_NAME, "libdrm.so.2");
    }
}
