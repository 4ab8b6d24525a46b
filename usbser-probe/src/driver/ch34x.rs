use std::collections::HashMap;

use super::{SerialDriver, UsbDriverKind};

/// Vendor id for QinHeng Electronics.
pub const VENDOR_QINHENG: u16 = 0x1A86;

/// QinHeng CH340/CH341 UART bridge driver.
pub struct Ch34xDriver;

impl SerialDriver for Ch34xDriver {
    const KIND: UsbDriverKind = UsbDriverKind::Ch34x;

    fn supported_devices() -> HashMap<u16, Vec<u16>> {
        HashMap::from([(
            VENDOR_QINHENG,
            vec![
                0x7523, // CH340
                0x5523, // CH341A
            ],
        )])
    }
}
