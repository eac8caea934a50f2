/*
 *  dispatch.rs
 *
 *  libdrm-shim
 *  (c) 2020-26 Stuart Hunter
 *
 *  Dispatch table manager
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

//! The dispatch table manager.
//!
//! A [`Dispatcher`] decides once whether the vendor libdrm is usable and, if
//! it is, resolves every forwarded symbol into a fixed slot table. After that
//! the forwarding path only does two atomic loads per call.
//!
//! ```text
//!   Inactive ──activate (probe ok, load ok)──> Active
//!      │                                          │
//!      └────────────── deactivate ───────────> Detached
//! ```
//!
//! Nothing here reports failure to a C caller. A dispatcher that could not
//! activate simply has no resolved slots.

use std::ffi::c_void;
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicPtr, AtomicU8, AtomicUsize, Ordering};
use std::sync::{LazyLock, Mutex, Once, PoisonError};

use log::{debug, info, trace};

use crate::config::ShimConfig;
use crate::entry::{SYMBOL_COUNT, Symbol};
use crate::error::ShimError;
use crate::loader::{DlopenLoader, VendorLoader, VendorModule};
use crate::probe::DeviceProbe;

/// Activation state of a dispatcher
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    /// Not activated, or activation found no usable vendor module
    Inactive = 0,

    /// Vendor module loaded and symbols resolved
    Active = 1,

    /// Torn down; terminal
    Detached = 2,
}

impl ActivationState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => ActivationState::Active,
            2 => ActivationState::Detached,
            _ => ActivationState::Inactive,
        }
    }
}

pub struct Dispatcher {
    probe: DeviceProbe,
    config: ShimConfig,
    loader: Box<dyn VendorLoader>,

    once: Once,
    state: AtomicU8,

    /// One slot per forwarded symbol; null = unresolved
    slots: [AtomicPtr<c_void>; SYMBOL_COUNT],

    /// Library handle. Only touched by activate and deactivate.
    module: Mutex<Option<Box<dyn VendorModule>>>,

    activations: AtomicUsize,
}

impl Dispatcher {
    /// Dispatcher that loads the vendor module with dlopen.
    pub fn new(config: ShimConfig) -> Self {
        Self::with_loader(config, Box::new(DlopenLoader))
    }

    pub fn with_loader(config: ShimConfig, loader: Box<dyn VendorLoader>) -> Self {
        Self {
            probe: DeviceProbe::new(&config.probe_path),
            config,
            loader,
            once: Once::new(),
            state: AtomicU8::new(ActivationState::Inactive as u8),
            slots: [const { AtomicPtr::new(ptr::null_mut()) }; SYMBOL_COUNT],
            module: Mutex::new(None),
            activations: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    /// Run the activation sequence if it has not run yet.
    ///
    /// Safe to call from any number of threads; the sequence body executes
    /// at most once for the life of the dispatcher, and losers of the race
    /// block until it has finished. If the body panicked, later calls leave
    /// the dispatcher inactive instead of panicking again.
    pub fn activate(&self) {
        self.once.call_once_force(|once| {
            if once.is_poisoned() {
                debug!("libdrm shim inactive: earlier activation panicked");
                return;
            }
            self.activations.fetch_add(1, Ordering::Relaxed);

            match self.try_activate() {
                Ok(resolved) => {
                    info!(
                        "libdrm shim active: {}/{} symbols from {}",
                        resolved,
                        SYMBOL_COUNT,
                        self.config.library_path().display()
                    );
                }
                Err(e) if e.is_hardware_absent() => {
                    debug!("libdrm shim inactive: {}", e);
                }
                Err(e) => {
                    debug!("libdrm shim inactive, vendor module unusable: {}", e);
                }
            }
        });
    }

    fn try_activate(&self) -> Result<usize, ShimError> {
        self.probe.check()?;
        self.config.validate()?;

        let module = self.loader.load(&self.config.library_path())?;

        let mut resolved = 0;
        for &symbol in Symbol::ALL {
            match module.lookup(symbol.name()) {
                Some(address) => {
                    self.slots[symbol.index()].store(address.as_ptr(), Ordering::Relaxed);
                    resolved += 1;
                }
                None => trace!("vendor module lacks {}", symbol),
            }
        }

        *self.module.lock().unwrap_or_else(PoisonError::into_inner) = Some(module);

        // Publishes the slot stores above to every reader that sees Active
        self.state.store(ActivationState::Active as u8, Ordering::Release);
        Ok(resolved)
    }

    /// Tear down: forget every resolved address and unload the module.
    ///
    /// Idempotent. Also closes the door on a dispatcher that was never
    /// activated, so nothing resolves after teardown.
    pub fn deactivate(&self) {
        self.once.call_once_force(|_| {});

        self.state.store(ActivationState::Detached as u8, Ordering::Release);

        for slot in &self.slots {
            slot.store(ptr::null_mut(), Ordering::Relaxed);
        }

        let module = self.module.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(module) = module {
            debug!("unloading vendor libdrm {}", module.path().display());
            drop(module);
        }
    }

    /// Address to forward `symbol` to, or None when its default applies.
    #[inline]
    pub fn resolve(&self, symbol: Symbol) -> Option<NonNull<c_void>> {
        self.activate();

        if self.state.load(Ordering::Acquire) != ActivationState::Active as u8 {
            return None;
        }
        NonNull::new(self.slots[symbol.index()].load(Ordering::Relaxed))
    }

    pub fn state(&self) -> ActivationState {
        ActivationState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Whether `symbol` currently forwards to the vendor module.
    pub fn is_resolved(&self, symbol: Symbol) -> bool {
        self.resolve(symbol).is_some()
    }

    pub fn resolved_count(&self) -> usize {
        Symbol::ALL.iter().filter(|&&s| self.is_resolved(s)).count()
    }

    /// Times the activation sequence body has run (0 or 1).
    pub fn activation_count(&self) -> usize {
        self.activations.load(Ordering::Relaxed)
    }

    /// Whether a vendor module is currently held.
    pub fn has_module(&self) -> bool {
        self.module.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

static GLOBAL: LazyLock<Dispatcher> = LazyLock::new(|| Dispatcher::new(ShimConfig::builtin()));

/// The process-wide dispatcher behind the exported entry points.
#[inline]
pub fn global() -> &'static Dispatcher {
    &GLOBAL
}
