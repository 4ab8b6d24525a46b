/// USB hardware identity.
///
/// The (vendor, product) pair a device reports during enumeration. Both
/// identifiers are 16-bit values assigned by the vendor; together they
/// identify the hardware model. Equality and hashing are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UsbDeviceIdentity {
    /// USB vendor id.
    pub vendor_id: u16,
    /// USB product id.
    pub product_id: u16,
}

impl UsbDeviceIdentity {
    /// Construct identity from a (vendor, product) pair.
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

impl std::fmt::Display for UsbDeviceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04X}:{:04X}", self.vendor_id, self.product_id)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseIdentityError;

impl std::fmt::Display for ParseIdentityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected identity in vendor:product hexadecimal form")
    }
}

impl std::error::Error for ParseIdentityError {}

impl std::str::FromStr for UsbDeviceIdentity {
    type Err = ParseIdentityError;

    /// Parse an identity in `VID:PID` hexadecimal form, e.g. `0403:6001`.
    ///
    /// A `0x` prefix on either component is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (vendor, product) = s.split_once(':').ok_or(ParseIdentityError)?;

        let vendor_id = u16::from_str_radix(vendor.trim_start_matches("0x"), 16)
            .map_err(|_| ParseIdentityError)?;
        let product_id = u16::from_str_radix(product.trim_start_matches("0x"), 16)
            .map_err(|_| ParseIdentityError)?;

        Ok(Self::new(vendor_id, product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_display() {
        assert_eq!(UsbDeviceIdentity::new(0x0403, 0x6001).to_string(), "0403:6001");
        assert_eq!(UsbDeviceIdentity::new(0x1A86, 0x7523).to_string(), "1A86:7523");
    }

    #[test]
    fn identity_parse() {
        let identity: UsbDeviceIdentity = "0403:6001".parse().unwrap();

        assert_eq!(identity.vendor_id, 0x0403);
        assert_eq!(identity.product_id, 0x6001);
    }

    #[test]
    fn identity_parse_prefixed() {
        let identity: UsbDeviceIdentity = "0x10C4:0xEA60".parse().unwrap();

        assert_eq!(identity, UsbDeviceIdentity::new(0x10C4, 0xEA60));
    }

    #[test]
    fn identity_parse_invalid() {
        assert!("04036001".parse::<UsbDeviceIdentity>().is_err());
        assert!("0403:zzzz".parse::<UsbDeviceIdentity>().is_err());
        assert!("".parse::<UsbDeviceIdentity>().is_err());
    }

    #[test]
    fn identity_order() {
        let mut identities = vec![
            UsbDeviceIdentity::new(0x10C4, 0xEA60),
            UsbDeviceIdentity::new(0x0403, 0x6010),
            UsbDeviceIdentity::new(0x0403, 0x6001),
        ];
        identities.sort();

        assert_eq!(identities[0], UsbDeviceIdentity::new(0x0403, 0x6001));
        assert_eq!(identities[1], UsbDeviceIdentity::new(0x0403, 0x6010));
        assert_eq!(identities[2], UsbDeviceIdentity::new(0x10C4, 0xEA60));
    }
}
