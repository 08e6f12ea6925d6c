//! # JSON Value Tree
//!
//! Node responses and listener messages arrive as loosely typed JSON. The
//! mapping layer walks them through [`JsonValue`], a closed tagged union with
//! typed accessors that fail with [`Nem2Error::ParseError`] instead of
//! returning silently empty values.
//!
//! ## Decoding precedence
//!
//! A value is tried as boolean, then string, then integer, then double, then
//! array, then object. `null` decodes to [`JsonValue::Null`]. Whole numbers
//! that fit in `i64` are integers. Numbers with a fraction or exponent, and
//! whole numbers outside `i64`, are doubles.
//!
//! ## 64-bit values
//!
//! Nodes send every `u64` as a two-element `[low, high]` array of 32-bit
//! words. [`JsonObject::get_u64`] recombines them.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::account::NetworkType;
use crate::codec::uint64;
use crate::error::{Nem2Error, Result};
use crate::mosaic::MosaicSupplyType;
use crate::namespace::NamespaceType;
use crate::transaction::{HashType, MessageType, MultisigCosignatoryModificationType, TransactionType};

/// A dynamically typed JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonObject),
}

impl JsonValue {
    /// Parses JSON text.
    ///
    /// # Errors
    ///
    /// `ParseError` carrying the decoder's message when `text` is not JSON.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Nem2Error::parse(format!("Failed to parse JSON: {}", e)))
    }

    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Reads a `[low, high]` pair.
    pub fn as_u64(&self) -> Option<u64> {
        u64_from_pair(self.as_array()?)
    }

    /// Expects an object, failing with `Failed to parse {what}.`.
    pub fn expect_object(&self, what: &str) -> Result<&JsonObject> {
        self.as_object()
            .ok_or_else(|| Nem2Error::parse(format!("Failed to parse {}.", what)))
    }

    /// Expects an array, failing with `Failed to parse {what}.`.
    pub fn expect_array(&self, what: &str) -> Result<&[JsonValue]> {
        self.as_array()
            .ok_or_else(|| Nem2Error::parse(format!("Failed to parse {}.", what)))
    }
}

fn u64_from_pair(values: &[JsonValue]) -> Option<u64> {
    match values {
        [low, high] => {
            let low = u32::try_from(low.as_i64()?).ok()?;
            let high = u32::try_from(high.as_i64()?).ok()?;
            Some(uint64::from_pair(low, high))
        }
        _ => None,
    }
}

impl From<JsonObject> for JsonValue {
    fn from(object: JsonObject) -> Self {
        Self::Object(object)
    }
}

impl std::str::FromStr for JsonValue {
    type Err = Nem2Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

/// A JSON object with keyed accessors.
///
/// Each accessor fails with `Failed to parse {key}` when the key is absent
/// or holds the wrong variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObject {
    entries: BTreeMap<String, JsonValue>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: JsonValue) -> Option<JsonValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.entries.iter()
    }

    fn field<'a, T>(&'a self, key: &str, read: impl FnOnce(&'a JsonValue) -> Option<T>) -> Result<T> {
        self.entries
            .get(key)
            .and_then(read)
            .ok_or_else(|| Nem2Error::parse(format!("Failed to parse {}", key)))
    }

    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.field(key, JsonValue::as_i64)
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.field(key, JsonValue::as_bool)
    }

    pub fn get_string(&self, key: &str) -> Result<&str> {
        self.field(key, JsonValue::as_str)
    }

    pub fn get_array(&self, key: &str) -> Result<&[JsonValue]> {
        self.field(key, JsonValue::as_array)
    }

    pub fn get_object(&self, key: &str) -> Result<&JsonObject> {
        self.field(key, JsonValue::as_object)
    }

    /// Reads a `[low, high]` pair.
    ///
    /// # Errors
    ///
    /// `Failed to parse {key}` when the key is missing or not an array, and
    /// `Failed to parse {key} as uint64` when the array is not two 32-bit
    /// words.
    pub fn get_u64(&self, key: &str) -> Result<u64> {
        u64_from_pair(self.get_array(key)?)
            .ok_or_else(|| Nem2Error::parse(format!("Failed to parse {} as uint64", key)))
    }

    /// Reads an array whose every element is an integer.
    pub fn get_array_of_int(&self, key: &str) -> Result<Vec<i64>> {
        self.get_array(key)?
            .iter()
            .map(|value| {
                value
                    .as_i64()
                    .ok_or_else(|| Nem2Error::parse(format!("Failed to parse {} element as integer.", key)))
            })
            .collect()
    }

    /// Reads an array whose every element is an object.
    pub fn get_array_of_object(&self, key: &str) -> Result<Vec<&JsonObject>> {
        self.get_array(key)?
            .iter()
            .map(|value| {
                value
                    .as_object()
                    .ok_or_else(|| Nem2Error::parse(format!("Failed to parse {} element as object.", key)))
            })
            .collect()
    }

    /// Reads an integer and converts it to a wire enumeration.
    ///
    /// # Errors
    ///
    /// `{raw} is unknown value as {Name}.` when the integer has no variant.
    pub fn get_enum<T: JsonEnum>(&self, key: &str) -> Result<T> {
        let raw = self.get_int(key)?;
        T::from_raw(raw)
            .ok_or_else(|| Nem2Error::parse(format!("{} is unknown value as {}.", raw, T::NAME)))
    }
}

impl FromIterator<(String, JsonValue)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Enumerations carried as integers in node JSON.
pub trait JsonEnum: Sized {
    /// Name used in "unknown value" errors.
    const NAME: &'static str;

    fn from_raw(raw: i64) -> Option<Self>;
}

macro_rules! json_enum {
    ($ty:ty, $raw:ty, $name:literal) => {
        impl JsonEnum for $ty {
            const NAME: &'static str = $name;

            fn from_raw(raw: i64) -> Option<Self> {
                <$raw>::try_from(raw).ok().and_then(|raw| <$ty>::try_from(raw).ok())
            }
        }
    };
}

json_enum!(TransactionType, u16, "TransactionType");
json_enum!(NetworkType, u8, "NetworkType");
json_enum!(HashType, u8, "HashType");
json_enum!(MessageType, u8, "MessageType");
json_enum!(MosaicSupplyType, u8, "MosaicSupplyType");
json_enum!(NamespaceType, u8, "NamespaceType");
json_enum!(MultisigCosignatoryModificationType, u8, "MultisigCosignatoryModificationType");

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON-compatible value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Boolean(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<JsonValue, E> {
        Ok(match i64::try_from(value) {
            Ok(value) => JsonValue::Integer(value),
            Err(_) => JsonValue::Double(value as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Double(value))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<JsonValue, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<JsonValue, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(JsonValue::Array(values))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<JsonValue, A::Error> {
        let mut object = JsonObject::new();
        while let Some((key, value)) = map.next_entry::<String, JsonValue>()? {
            object.insert(key, value);
        }
        Ok(JsonValue::Object(object))
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

impl<'de> Deserialize<'de> for JsonObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::Object(object) => Ok(object),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.kind()),
                &"a JSON object",
            )),
        }
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(value) => serializer.serialize_bool(*value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Double(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Self::Object(object) => object.serialize(serializer),
        }
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
