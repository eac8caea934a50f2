/*
 *  error.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  Internal error taxonomy for activation
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

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons activation can leave the dispatcher inactive.
///
/// These never reach a C caller. The dispatcher logs them at debug level and
/// every entry point falls back to its default value.
#[derive(Debug, Error)]
pub enum ShimError {
    #[error("probe device {} not found: {source}", path.display())]
    ProbeMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("probe device {} is not a character device", path.display())]
    NotCharDevice { path: PathBuf },

    #[error("invalid shim configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load vendor module {}: {source}", path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[cfg(any(test, feature = "mock-vendor"))]
    #[error("mock loader refused to load {}", path.display())]
    MockLoadRefused { path: PathBuf },
}

impl ShimError {
    /// True when the failure only means the hardware is not there.
    pub fn is_hardware_absent(&self) -> bool {
        matches!(self, ShimError::ProbeMissing { .. } | ShimError::NotCharDevice { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_errors_mean_hardware_absent() {
        let missing = ShimError::ProbeMissing {
            path: PathBuf::from("/dev/nvhost-nvdec"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let not_chr = ShimError::NotCharDevice { path: PathBuf::from("/tmp/x") };
        let bad_cfg = ShimError::InvalidConfig("relative".to_string());

        assert!(missing.is_hardware_absent());
        assert!(not_chr.is_hardware_absent());
        assert!(!bad_cfg.is_hardware_absent());
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = ShimError::NotCharDevice { path: PathBuf::from("/tmp/plain") };
        assert_eq!(err.to_string(), "probe device /tmp/plain is not a character device");
    }
}
