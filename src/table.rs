/*
 *  table.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  Forwarding stub generator
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

//! One row per vendor function drives everything:
//!
//! ```ignore
//! entry_points! {
//!     fn drmOpen(name: *const c_char, busid: *const c_char) -> c_int = -EINVAL;
//!     fn drmFreeVersion(version: drmVersionPtr);
//! }
//! ```
//!
//! expands to
//!
//! - `enum Symbol` with a variant per row, `Symbol::ALL`, `Symbol::name()`
//!   and `SYMBOL_COUNT`, which size and index the dispatcher's slot table;
//! - `forward::<name>(&Dispatcher, args…)`, which calls the resolved vendor
//!   function or evaluates the row's default;
//! - the exported `extern "C" fn <name>(args…)`, forwarding through the
//!   process-wide dispatcher.
//!
//! Rows without a return type are `void` functions and default to doing
//! nothing.

use std::ffi::CStr;

/// Compile-time conversion of a `concat!(name, "\0")` literal.
pub const fn c_name(bytes: &'static [u8]) -> &'static CStr {
    match CStr::from_bytes_with_nul(bytes) {
        Ok(name) => name,
        Err(_) => panic!("entry point name is not a C string"),
    }
}

macro_rules! entry_points {
    ($(
        $(#[$meta:meta])*
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty = $default:expr)?;
    )*) => {
        /// Every forwarded entry point, in table order.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(usize)]
        pub enum Symbol {
            $($name,)*
        }

        impl Symbol {
            pub const ALL: &'static [Symbol] = &[$(Symbol::$name,)*];

            /// Exported name, as looked up in the vendor module.
            pub const fn name(self) -> &'static ::std::ffi::CStr {
                SYMBOL_NAMES[self as usize]
            }

            /// Slot in the dispatch table.
            pub const fn index(self) -> usize {
                self as usize
            }

            pub fn from_name(name: &str) -> Option<Symbol> {
                Symbol::ALL
                    .iter()
                    .copied()
                    .find(|symbol| symbol.name().to_bytes() == name.as_bytes())
            }
        }

        impl ::std::fmt::Display for Symbol {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.name().to_string_lossy())
            }
        }

        pub const SYMBOL_COUNT: usize = Symbol::ALL.len();

        const SYMBOL_NAMES: [&::std::ffi::CStr; SYMBOL_COUNT] = [
            $($crate::table::c_name(concat!(stringify!($name), "\0").as_bytes()),)*
        ];

        /// Forwarders bound to an explicit dispatcher.
        ///
        /// Pointer arguments are passed through untouched; the caller upholds
        /// whatever the vendor function requires of them.
        pub mod forward {
            #![allow(non_snake_case, clippy::too_many_arguments, clippy::missing_safety_doc)]

            use super::*;

            $(
                #[inline]
                pub unsafe fn $name(
                    dispatch: &$crate::dispatch::Dispatcher,
                    $($arg: $ty),*
                ) $(-> $ret)? {
                    match dispatch.resolve(Symbol::$name) {
                        Some(address) => {
                            // The slot was resolved from this very name, so the
                            // vendor export has this signature.
                            let vendor: unsafe extern "C" fn($($ty),*) $(-> $ret)? =
                                unsafe { ::std::mem::transmute(address.as_ptr()) };
                            unsafe { vendor($($arg),*) }
                        }
                        None => { $($default)? }
                    }
                }
            )*
        }

        $(
            $(#[$meta])*
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $name($($arg: $ty),*) $(-> $ret)? {
                unsafe { forward::$name($crate::dispatch::global(), $($arg),*) }
            }
        )*
    };
}

pub(crate) use entry_points;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_name_keeps_text() {
        let name = c_name(b"drmOpen\0");
        assert_eq!(name.to_bytes(), b"drmOpen");
    }
}
