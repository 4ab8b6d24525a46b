pub use cdc_acm::CdcAcmDriver;
pub use ch34x::Ch34xDriver;
pub use cp210x::Cp210xDriver;
pub use ftdi::FtdiDriver;
pub use pl2303::Pl2303Driver;

mod cdc_acm;
mod ch34x;
mod cp210x;
mod ftdi;
mod pl2303;

use std::collections::HashMap;

/// Serial driver kind.
///
/// Identifies a driver implementation without instantiating it. The probe
/// table stores driver kinds, never live device sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsbDriverKind {
    /// FTDI FT-series UART bridges.
    Ftdi,
    /// USB CDC abstract control model devices.
    CdcAcm,
    /// Silicon Labs CP210x bridges.
    Cp210x,
    /// Prolific PL2303 bridges.
    Pl2303,
    /// QinHeng CH340/CH341 bridges.
    Ch34x,
}

impl UsbDriverKind {
    /// All driver kinds shipped with this crate.
    pub const ALL: [UsbDriverKind; 5] = [
        UsbDriverKind::Ftdi,
        UsbDriverKind::CdcAcm,
        UsbDriverKind::Cp210x,
        UsbDriverKind::Pl2303,
        UsbDriverKind::Ch34x,
    ];
}

impl std::fmt::Display for UsbDriverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsbDriverKind::Ftdi => write!(f, "FTDI"),
            UsbDriverKind::CdcAcm => write!(f, "CDC-ACM"),
            UsbDriverKind::Cp210x => write!(f, "CP210x"),
            UsbDriverKind::Pl2303 => write!(f, "PL2303"),
            UsbDriverKind::Ch34x => write!(f, "CH34x"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseDriverKindError;

impl std::fmt::Display for ParseDriverKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown driver kind")
    }
}

impl std::error::Error for ParseDriverKindError {}

impl std::str::FromStr for UsbDriverKind {
    type Err = ParseDriverKindError;

    /// Parse a driver kind by name, e.g. `ftdi` or `cdc_acm`.
    ///
    /// Names are matched case insensitively; `-` and `_` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ftdi" => Ok(UsbDriverKind::Ftdi),
            "cdc_acm" => Ok(UsbDriverKind::CdcAcm),
            "cp210x" => Ok(UsbDriverKind::Cp210x),
            "pl2303" => Ok(UsbDriverKind::Pl2303),
            "ch34x" => Ok(UsbDriverKind::Ch34x),
            _ => Err(ParseDriverKindError),
        }
    }
}

/// Driver self-description capability.
///
/// Every driver type declares the full set of devices it can drive: a map
/// from vendor id to the product ids under that vendor. This is the only
/// interface the probe table requires from a driver implementation.
pub trait SerialDriver {
    /// Driver kind tag for this implementation.
    const KIND: UsbDriverKind;

    /// Supported device set, keyed by vendor id.
    fn supported_devices() -> HashMap<u16, Vec<u16>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_is_wellformed(devices: HashMap<u16, Vec<u16>>) -> bool {
        !devices.is_empty() && devices.values().all(|product_ids| !product_ids.is_empty())
    }

    #[test]
    fn stock_catalogs_wellformed() {
        assert!(catalog_is_wellformed(FtdiDriver::supported_devices()));
        assert!(catalog_is_wellformed(CdcAcmDriver::supported_devices()));
        assert!(catalog_is_wellformed(Cp210xDriver::supported_devices()));
        assert!(catalog_is_wellformed(Pl2303Driver::supported_devices()));
        assert!(catalog_is_wellformed(Ch34xDriver::supported_devices()));
    }

    #[test]
    fn kind_display() {
        assert_eq!(UsbDriverKind::Ftdi.to_string(), "FTDI");
        assert_eq!(UsbDriverKind::CdcAcm.to_string(), "CDC-ACM");
        assert_eq!(UsbDriverKind::Ch34x.to_string(), "CH34x");
    }

    #[test]
    fn kind_roundtrip() {
        for kind in UsbDriverKind::ALL {
            assert_eq!(kind.to_string().parse::<UsbDriverKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_parse() {
        assert_eq!("ftdi".parse::<UsbDriverKind>().unwrap(), UsbDriverKind::Ftdi);
        assert_eq!(
            "cdc_acm".parse::<UsbDriverKind>().unwrap(),
            UsbDriverKind::CdcAcm
        );
        assert_eq!("warpdrive".parse::<UsbDriverKind>(), Err(ParseDriverKindError));
    }

    #[test]
    fn ftdi_catalog() {
        let devices = FtdiDriver::supported_devices();

        assert!(devices[&ftdi::VENDOR_FTDI].contains(&0x6001));
        assert_eq!(FtdiDriver::KIND, UsbDriverKind::Ftdi);
    }
}
