use std::collections::HashMap;

use super::{SerialDriver, UsbDriverKind};

/// Vendor id for Arduino.
pub const VENDOR_ARDUINO: u16 = 0x2341;
/// Vendor id for Van Ooijen Technische Informatica.
pub const VENDOR_VAN_OOIJEN: u16 = 0x16C0;
/// Vendor id for LeafLabs.
pub const VENDOR_LEAFLABS: u16 = 0x1EAF;

/// USB CDC abstract control model driver.
///
/// Covers boards which expose a standard communications class interface.
/// The device list holds the common hobbyist boards; class-based discovery
/// is up to the enumeration layer.
pub struct CdcAcmDriver;

impl SerialDriver for CdcAcmDriver {
    const KIND: UsbDriverKind = UsbDriverKind::CdcAcm;

    fn supported_devices() -> HashMap<u16, Vec<u16>> {
        HashMap::from([
            (
                VENDOR_ARDUINO,
                vec![
                    0x0001, // Uno
                    0x0010, // Mega 2560
                    0x003B, // Serial adapter
                    0x003F, // Mega ADK
                    0x0042, // Mega 2560 R3
                    0x0043, // Uno R3
                    0x0044, // Mega ADK R3
                    0x8036, // Leonardo
                    0x8037, // Micro
                ],
            ),
            (
                VENDOR_VAN_OOIJEN,
                vec![
                    0x0483, // Teensyduino
                ],
            ),
            (
                VENDOR_LEAFLABS,
                vec![
                    0x0004, // Maple
                ],
            ),
        ])
    }
}
