use std::collections::HashMap;
use std::sync::Arc;

use crate::driver::{
    CdcAcmDriver, Ch34xDriver, Cp210xDriver, FtdiDriver, Pl2303Driver, SerialDriver, UsbDriverKind,
};
use crate::error::{ProbeError, Result};
use crate::identity::UsbDeviceIdentity;

/// Driver probe table.
///
/// The probe table maps hardware identity onto the driver kind responsible
/// for that device's serial protocol. Populate the table during startup,
/// then [`freeze`](ProbeTable::freeze) it into an immutable snapshot for the
/// enumeration layer.
///
/// The first registration for a (vendor, product) pair wins; later
/// registrations for the same pair are ignored.
#[derive(Debug, Default)]
pub struct ProbeTable {
    table: HashMap<UsbDeviceIdentity, UsbDriverKind>,
}

impl ProbeTable {
    /// Construct an empty probe table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe table with all stock drivers registered.
    pub fn stock() -> Self {
        let mut table = Self::new();

        // Stock driver catalogs are compile time constants and never empty.
        table.add_driver::<FtdiDriver>().unwrap();
        table.add_driver::<CdcAcmDriver>().unwrap();
        table.add_driver::<Cp210xDriver>().unwrap();
        table.add_driver::<Pl2303Driver>().unwrap();
        table.add_driver::<Ch34xDriver>().unwrap();

        table
    }

    /// Register a single (vendor, product) pair with a driver kind.
    ///
    /// Registering a pair which is already bound is a no-op, not an error:
    /// drivers may declare overlapping identities and the existing binding
    /// is kept.
    pub fn add_product(
        &mut self,
        vendor_id: u16,
        product_id: u16,
        driver: UsbDriverKind,
    ) -> &mut Self {
        let identity = UsbDeviceIdentity::new(vendor_id, product_id);

        if let Some(bound) = self.table.get(&identity) {
            trace!("Keep {} for {}, ignore {}", bound, identity, driver);
        } else {
            self.table.insert(identity, driver);
        }

        self
    }

    /// Register every device a driver declares support for.
    ///
    /// Queries the driver's self-described device set and registers each
    /// (vendor, product) pair it exposes. A malformed set fails the call;
    /// pairs registered before the failure was found remain in the table.
    pub fn add_driver<D: SerialDriver>(&mut self) -> Result<&mut Self> {
        let devices = D::supported_devices();

        if devices.is_empty() {
            return Err(ProbeError::empty_device_set(D::KIND));
        }

        for (vendor_id, product_ids) in devices {
            if product_ids.is_empty() {
                return Err(ProbeError::empty_product_list(D::KIND, vendor_id));
            }

            for product_id in product_ids {
                debug!("Add {:04X}:{:04X} for {}", vendor_id, product_id, D::KIND);

                self.add_product(vendor_id, product_id, D::KIND);
            }
        }

        Ok(self)
    }

    /// Find the driver kind for a hardware identity.
    ///
    /// Absence means the device is unsupported, which is a normal outcome
    /// for the caller to branch on.
    pub fn find_driver(&self, vendor_id: u16, product_id: u16) -> Option<UsbDriverKind> {
        self.table
            .get(&UsbDeviceIdentity::new(vendor_id, product_id))
            .copied()
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table holds no identities at all.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Table contents sorted by vendor id, then product id.
    ///
    /// Diagnostic convenience for listing the table.
    pub fn entries(&self) -> Vec<(UsbDeviceIdentity, UsbDriverKind)> {
        let mut entries: Vec<_> = self.table.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(identity, _)| *identity);

        entries
    }

    /// Freeze the table into an immutable shared snapshot.
    ///
    /// Enumeration may run on another thread than registration. Hand each
    /// reader a clone of the returned handle; the table can no longer
    /// change afterwards.
    pub fn freeze(self) -> Arc<Self> {
        Arc::new(self)
    }
}
