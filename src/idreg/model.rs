use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Top-level key the records live under.
pub const USERS_KEY: &str = "users";

/// A single registry entry.
///
/// The five named fields are the ones the registry understands. Anything
/// else found on a stored record lands in `extra` and is written back
/// untouched, in the order it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    // Missing or mistyped fields are tolerated so one bad entry does not
    // blank the registry.
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_opt_string"
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub pesel: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub nip: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub regon: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads a scalar as text: strings as-is, numbers and booleans in their
/// JSON spelling, `null` as absent. Arrays and objects are rejected.
fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err(de::Error::invalid_type(
            de::Unexpected::Seq,
            &"a string or number",
        )),
        Value::Object(_) => Err(de::Error::invalid_type(
            de::Unexpected::Map,
            &"a string or number",
        )),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

impl UserRecord {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            pesel: None,
            nip: None,
            regon: None,
            extra: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_pesel(mut self, pesel: impl Into<String>) -> Self {
        self.pesel = Some(pesel.into());
        self
    }

    pub fn with_nip(mut self, nip: impl Into<String>) -> Self {
        self.nip = Some(nip.into());
        self
    }

    pub fn with_regon(mut self, regon: impl Into<String>) -> Self {
        self.regon = Some(regon.into());
        self
    }

    /// Overwrite every field the update carries; leave the rest alone.
    pub fn merge(&mut self, update: &RecordUpdate) {
        if let Some(name) = &update.name {
            self.name = Some(name.clone());
        }
        if let Some(pesel) = &update.pesel {
            self.pesel = Some(pesel.clone());
        }
        if let Some(nip) = &update.nip {
            self.nip = Some(nip.clone());
        }
        if let Some(regon) = &update.regon {
            self.regon = Some(regon.clone());
        }
        for (key, value) in &update.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

/// The whole persisted registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl Document {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Serialize with four-space indentation, the on-disk layout.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}

/// A partial edit. `None` means "leave the field as it is".
///
/// There is no way to express "clear this field": the registry never had
/// one, and callers are expected to drop blank input before building an
/// update (see [`RecordUpdate::from_input`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub pesel: Option<String>,
    pub nip: Option<String>,
    pub regon: Option<String>,
    pub extra: Map<String, Value>,
}

impl RecordUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an update from raw prompted values, skipping blank ones.
    pub fn from_input(name: &str, pesel: &str, nip: &str, regon: &str) -> Self {
        Self {
            name: non_blank(name),
            pesel: non_blank(pesel),
            nip: non_blank(nip),
            regon: non_blank(regon),
            extra: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_pesel(mut self, pesel: impl Into<String>) -> Self {
        self.pesel = Some(pesel.into());
        self
    }

    pub fn with_nip(mut self, nip: impl Into<String>) -> Self {
        self.nip = Some(nip.into());
        self
    }

    pub fn with_regon(mut self, regon: impl Into<String>) -> Self {
        self.regon = Some(regon.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.pesel.is_none()
            && self.nip.is_none()
            && self.regon.is_none()
            && self.extra.is_empty()
    }
}

/// Trim and drop empty input.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
