use std::error;

use crate::driver::UsbDriverKind;

pub type Result<T> = std::result::Result<T, ProbeError>;

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The driver declared no supported devices at all.
    EmptyDeviceSet,

    /// The driver declared a vendor without any product identifiers.
    EmptyProductList(u16),
}

/// Driver introspection failure.
///
/// Raised when a driver's self-described device set is malformed. Pairs
/// registered before the failure was found remain in the probe table.
#[derive(Debug)]
pub struct ProbeError {
    /// Offending driver kind.
    pub driver: UsbDriverKind,
    /// Error kind.
    pub kind: ErrorKind,
}

impl ProbeError {
    pub(crate) fn empty_device_set(driver: UsbDriverKind) -> Self {
        Self {
            driver,
            kind: ErrorKind::EmptyDeviceSet,
        }
    }

    pub(crate) fn empty_product_list(driver: UsbDriverKind, vendor_id: u16) -> Self {
        Self {
            driver,
            kind: ErrorKind::EmptyProductList(vendor_id),
        }
    }
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        match &self.kind {
            ErrorKind::EmptyDeviceSet => {
                write!(f, "{}: driver declared no supported devices", self.driver)
            }
            ErrorKind::EmptyProductList(vendor_id) => {
                write!(
                    f,
                    "{}: no product identifiers for vendor {:04X}",
                    self.driver, vendor_id
                )
            }
        }
    }
}

impl error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
