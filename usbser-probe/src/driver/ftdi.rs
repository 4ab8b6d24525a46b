use std::collections::HashMap;

use super::{SerialDriver, UsbDriverKind};

/// Vendor id for Future Technology Devices International.
pub const VENDOR_FTDI: u16 = 0x0403;

/// FTDI FT-series UART bridge driver.
pub struct FtdiDriver;

impl SerialDriver for FtdiDriver {
    const KIND: UsbDriverKind = UsbDriverKind::Ftdi;

    fn supported_devices() -> HashMap<u16, Vec<u16>> {
        HashMap::from([(
            VENDOR_FTDI,
            vec![
                0x6001, // FT232R
                0x6010, // FT2232H
                0x6011, // FT4232H
                0x6014, // FT232H
                0x6015, // FT230X, FT231X, FT234XD
            ],
        )])
    }
}
