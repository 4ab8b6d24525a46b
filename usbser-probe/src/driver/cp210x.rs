use std::collections::HashMap;

use super::{SerialDriver, UsbDriverKind};

/// Vendor id for Silicon Labs.
pub const VENDOR_SILABS: u16 = 0x10C4;

/// Silicon Labs CP210x UART bridge driver.
pub struct Cp210xDriver;

impl SerialDriver for Cp210xDriver {
    const KIND: UsbDriverKind = UsbDriverKind::Cp210x;

    fn supported_devices() -> HashMap<u16, Vec<u16>> {
        HashMap::from([(
            VENDOR_SILABS,
            vec![
                0xEA60, // CP2102, CP2109
                0xEA70, // CP2105
                0xEA71, // CP2108
            ],
        )])
    }
}
