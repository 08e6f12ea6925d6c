//! # Mosaics
//!
//! A mosaic is a named asset owned by a namespace. Its id is derived from
//! `"<namespace>:<mosaic>"` by [`crate::id::generate_mosaic_id`]. XEM, the
//! network currency, is the mosaic `nem:xem`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::{XEM_DIVISIBILITY, XEM_FULL_NAME};
use crate::error::{Nem2Error, Result};
use crate::id;

// ---------------------------------------------------------------------------
// MosaicId
// ---------------------------------------------------------------------------

/// A mosaic identifier, optionally remembering the name it was derived from.
///
/// Equality and hashing look at the numeric id only.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicId {
    id: u64,
    full_name: Option<String>,
}

impl MosaicId {
    /// Wraps a raw id.
    pub fn new(id: u64) -> Self {
        Self { id, full_name: None }
    }

    /// Derives the id of `"<namespace>:<mosaic>"`, e.g. `nem:xem` or
    /// `foo.bar:token`.
    ///
    /// # Errors
    ///
    /// `IllegalArgument` when the name does not have exactly one `:` with a
    /// non-empty part on each side, or when either part breaks the naming
    /// rules.
    pub fn from_full_name(full_name: &str) -> Result<Self> {
        let invalid = || Nem2Error::illegal(format!("{} is not valid", full_name));
        let (namespace, mosaic) = full_name.split_once(':').ok_or_else(invalid)?;
        if namespace.is_empty() || mosaic.is_empty() || mosaic.contains(':') {
            return Err(invalid());
        }
        Ok(Self {
            id: id::generate_mosaic_id(namespace, mosaic)?,
            full_name: Some(full_name.to_string()),
        })
    }

    /// Derives the id of `mosaic_name` under `namespace_full_name`,
    /// reporting naming errors from [`id::generate_mosaic_id`] unchanged.
    pub fn from_parts(namespace_full_name: &str, mosaic_name: &str) -> Result<Self> {
        Ok(Self {
            id: id::generate_mosaic_id(namespace_full_name, mosaic_name)?,
            full_name: Some(format!("{}:{}", namespace_full_name, mosaic_name)),
        })
    }

    /// The 64-bit id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The name the id was derived from, when known.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }
}

impl PartialEq for MosaicId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MosaicId {}

impl Hash for MosaicId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.full_name {
            Some(name) => write!(f, "MosaicId({:#018x}, {})", self.id, name),
            None => write!(f, "MosaicId({:#018x})", self.id),
        }
    }
}

impl From<u64> for MosaicId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

// ---------------------------------------------------------------------------
// Mosaic
// ---------------------------------------------------------------------------

/// An amount of a mosaic, in its smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mosaic {
    /// Which mosaic.
    pub id: MosaicId,
    /// Amount in atomic units.
    pub amount: u64,
}

impl Mosaic {
    pub fn new(id: MosaicId, amount: u64) -> Self {
        Self { id, amount }
    }
}

// ---------------------------------------------------------------------------
// MosaicProperties
// ---------------------------------------------------------------------------

const SUPPLY_MUTABLE_FLAG: u8 = 0x01;
const TRANSFERABLE_FLAG: u8 = 0x02;
const LEVY_MUTABLE_FLAG: u8 = 0x04;

/// Properties fixed when a mosaic is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicProperties {
    pub supply_mutable: bool,
    pub transferable: bool,
    pub levy_mutable: bool,
    /// Decimal places of the amount.
    pub divisibility: u8,
    /// Lifetime in blocks. Zero means eternal.
    pub duration: u64,
}

impl MosaicProperties {
    pub fn new(
        supply_mutable: bool,
        transferable: bool,
        levy_mutable: bool,
        divisibility: u8,
        duration: u64,
    ) -> Self {
        Self {
            supply_mutable,
            transferable,
            levy_mutable,
            divisibility,
            duration,
        }
    }

    /// Rebuilds the properties from the packed flag byte.
    pub fn from_flags(flags: u8, divisibility: u8, duration: u64) -> Self {
        Self {
            supply_mutable: flags & SUPPLY_MUTABLE_FLAG != 0,
            transferable: flags & TRANSFERABLE_FLAG != 0,
            levy_mutable: flags & LEVY_MUTABLE_FLAG != 0,
            divisibility,
            duration,
        }
    }

    /// Packed flag byte: bit 0 supply mutable, bit 1 transferable, bit 2
    /// levy mutable.
    pub fn flags(&self) -> u8 {
        let mut flags = 0;
        if self.supply_mutable {
            flags |= SUPPLY_MUTABLE_FLAG;
        }
        if self.transferable {
            flags |= TRANSFERABLE_FLAG;
        }
        if self.levy_mutable {
            flags |= LEVY_MUTABLE_FLAG;
        }
        flags
    }
}

// ---------------------------------------------------------------------------
// MosaicSupplyType
// ---------------------------------------------------------------------------

/// Direction of a supply change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MosaicSupplyType {
    Decrease,
    Increase,
}

impl MosaicSupplyType {
    pub fn value(self) -> u8 {
        match self {
            Self::Decrease => 0,
            Self::Increase => 1,
        }
    }
}

impl TryFrom<u8> for MosaicSupplyType {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Decrease),
            1 => Ok(Self::Increase),
            other => Err(Nem2Error::illegal(format!(
                "{} is not a valid mosaic supply type",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// XEM
// ---------------------------------------------------------------------------

/// Helpers for the network currency.
pub struct Xem;

impl Xem {
    /// Id of `nem:xem`.
    pub fn mosaic_id() -> MosaicId {
        MosaicId {
            id: id::generate_id("xem", id::generate_id("nem", 0)),
            full_name: Some(XEM_FULL_NAME.to_string()),
        }
    }

    /// `xem` whole units, converted to micro XEM.
    ///
    /// The value is rounded to the nearest micro XEM. Negative and non-finite
    /// amounts are rejected.
    pub fn of(xem: f64) -> Result<Mosaic> {
        if !xem.is_finite() || xem < 0.0 {
            return Err(Nem2Error::illegal(format!("{} is not a valid XEM amount", xem)));
        }
        let micro = (xem * 10f64.powi(i32::from(XEM_DIVISIBILITY))).round();
        if micro > u64::MAX as f64 {
            return Err(Nem2Error::illegal(format!("{} XEM overflows the amount", xem)));
        }
        Ok(Self::of_micro(micro as u64))
    }

    /// `micro` micro XEM.
    pub fn of_micro(micro: u64) -> Mosaic {
        Mosaic::new(Self::mosaic_id(), micro)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const XEM_ID: u64 = 0xD525_AD41_D95F_CF29;

    #[test]
    fn mosaic_id_from_full_name() {
        let id = MosaicId::from_full_name("nem:xem").unwrap();
        assert_eq!(id.id(), XEM_ID);
        assert_eq!(id.full_name(), Some("nem:xem"));
    }

    #[test]
    fn equality_ignores_full_name() {
        let named = MosaicId::from_full_name("nem:xem").unwrap();
        let raw = MosaicId::new(XEM_ID);
        assert_eq!(named, raw);
        assert_eq!(raw.full_name(), None);
    }

    #[test]
    fn from_parts_reports_derivation_errors() {
        let id = MosaicId::from_parts("nem", "xem").unwrap();
        assert_eq!(id, MosaicId::from_full_name("nem:xem").unwrap());
        assert_eq!(id.full_name(), Some("nem:xem"));

        let err = MosaicId::from_parts("nem", "").unwrap_err();
        assert_eq!(err.message(), "having zero length");
    }

    #[test]
    fn multi_level_namespace_full_name() {
        let id = MosaicId::from_full_name("foo.bar:token").unwrap();
        assert_eq!(id.id(), id::generate_mosaic_id("foo.bar", "token").unwrap());
    }

    #[test]
    fn rejects_malformed_full_names() {
        for name in ["nem", "nem.xem", ":nem", "nem.xem:", "", "nem:xem:nem"] {
            let err = MosaicId::from_full_name(name).unwrap_err();
            assert!(matches!(err, Nem2Error::IllegalArgument(_)), "{name}");
        }
    }

    #[test]
    fn properties_pack_into_flags() {
        let props = MosaicProperties::new(true, true, true, 3, 10);
        assert_eq!(props.flags(), 0x07);
        let props = MosaicProperties::new(false, true, false, 6, 0);
        assert_eq!(props.flags(), 0x02);
        assert_eq!(MosaicProperties::from_flags(0x02, 6, 0), props);
        assert_eq!(MosaicProperties::from_flags(0x05, 1, 2).flags(), 0x05);
    }

    #[test]
    fn supply_type_values() {
        assert_eq!(MosaicSupplyType::Decrease.value(), 0);
        assert_eq!(MosaicSupplyType::Increase.value(), 1);
        assert_eq!(MosaicSupplyType::try_from(1).unwrap(), MosaicSupplyType::Increase);
        assert!(MosaicSupplyType::try_from(2).is_err());
    }

    #[test]
    fn xem_amounts() {
        assert_eq!(Xem::mosaic_id().id(), XEM_ID);
        assert_eq!(Xem::of(1.5).unwrap().amount, 1_500_000);
        assert_eq!(Xem::of(0.000001).unwrap().amount, 1);
        assert_eq!(Xem::of_micro(42).amount, 42);
        assert!(Xem::of(-1.0).is_err());
        assert!(Xem::of(f64::NAN).is_err());
    }
}
