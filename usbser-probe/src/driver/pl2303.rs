use std::collections::HashMap;

use super::{SerialDriver, UsbDriverKind};

/// Vendor id for Prolific Technology.
pub const VENDOR_PROLIFIC: u16 = 0x067B;

/// Prolific PL2303 UART bridge driver.
pub struct Pl2303Driver;

impl SerialDriver for Pl2303Driver {
    const KIND: UsbDriverKind = UsbDriverKind::Pl2303;

    fn supported_devices() -> HashMap<u16, Vec<u16>> {
        HashMap::from([(
            VENDOR_PROLIFIC,
            vec![
                0x2303, // PL2303HX and predecessors
                0x23A3, // PL2303GC
                0x23B3, // PL2303GB
                0x23C3, // PL2303GT
                0x23D3, // PL2303GL
                0x23E3, // PL2303GE
                0x23F3, // PL2303GS
            ],
        )])
    }
}
