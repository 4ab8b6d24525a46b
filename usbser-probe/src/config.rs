use serde::Deserialize;

use crate::driver::UsbDriverKind;
use crate::table::ProbeTable;

/// User-supplied probe table extension.
///
/// Holds extra device entries read from a TOML file:
///
/// ```toml
/// [[device]]
/// vendor_id = 0x1B4F
/// product_id = 0x9206
/// driver = "cdc_acm"
/// ```
///
/// Entries are registered on top of whatever the application already put in
/// the table; the first registration for a pair still wins.
#[derive(Debug, Default, Deserialize)]
pub struct TableConfig {
    /// Extra device entries.
    #[serde(default)]
    pub device: Vec<DeviceEntry>,
}

/// Single configured device entry.
#[derive(Debug, Deserialize)]
pub struct DeviceEntry {
    /// USB vendor id.
    pub vendor_id: u16,
    /// USB product id.
    pub product_id: u16,
    /// Driver kind responsible for the pair.
    pub driver: UsbDriverKind,
}

#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    Io(std::io::Error),
    /// Configuration file could not be parsed.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io error: {}", e),
            ConfigError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl TableConfig {
    /// Read table configuration from a TOML file.
    pub fn try_from_file(
        path: impl AsRef<std::path::Path>,
    ) -> std::result::Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        toml::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Register every configured entry with the probe table.
    pub fn apply(&self, table: &mut ProbeTable) {
        for entry in &self.device {
            debug!(
                "Add {:04X}:{:04X} for {} from configuration",
                entry.vendor_id, entry.product_id, entry.driver
            );

            table.add_product(entry.vendor_id, entry.product_id, entry.driver);
        }
    }
}
