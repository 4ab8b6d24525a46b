// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! The `usbser-probe` library maps a USB device's hardware identity onto the
//! serial driver responsible for it.
//!
//! The [`ProbeTable`] is populated during application startup, either driver
//! by driver or from the stock driver set, and is then queried by the
//! enumeration layer whenever a device is attached. The table answers which
//! driver kind handles a (vendor, product) pair; it never opens or talks to
//! the device itself.

#[macro_use]
extern crate log;

mod config;
mod error;
mod identity;
mod table;

pub mod driver;

pub use self::config::{ConfigError, DeviceEntry, TableConfig};
pub use self::error::{ErrorKind, ProbeError, Result};
pub use self::identity::{ParseIdentityError, UsbDeviceIdentity};
pub use self::table::ProbeTable;
