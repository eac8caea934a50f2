/*
 *  logging.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  Opt-in diagnostics logger
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

//! The shim lives inside somebody else's process, so it never installs a
//! logger on its own. Setting `DRM_SHIM_LOG` (an env_logger filter such as
//! `debug` or `drm=trace`) before the library is loaded turns one on.

use env_logger::Env;

/// Environment variable holding the filter string.
pub const LOG_ENV: &str = "DRM_SHIM_LOG";

/// Install env_logger if `DRM_SHIM_LOG` is set.
///
/// Returns true if this call installed the logger. A logger the host already
/// registered is left alone.
pub fn init() -> bool {
    if std::env::var_os(LOG_ENV).is_none() {
        return false;
    }

    env_logger::Builder::from_env(Env::new().filter(LOG_ENV))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_logger_without_env() {
        // SAFETY: no other test in this binary touches DRM_SHIM_LOG
        unsafe { std::env::remove_var(LOG_ENV) };
        assert!(!init());
    }
}
