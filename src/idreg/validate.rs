//! Checksum validators for Polish national identifiers.
//!
//! All three follow the same shape: a fixed length of ASCII digits, a
//! weighted sum over every digit but the last, and a check digit derived
//! from that sum. Invalid input is a normal outcome, so these return `bool`
//! and never panic.
//!
//! - PESEL: 11 digits, check = `(10 - sum mod 10) mod 10`
//! - NIP: 10 digits, check = `sum mod 11`, a check of 10 is never valid
//! - REGON: 9 or 14 digits, check = `sum mod 11`, a check of 10 counts as 0

use crate::model::UserRecord;
use std::fmt;

const PESEL_WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];
const NIP_WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];
const REGON9_WEIGHTS: [u32; 8] = [8, 9, 2, 3, 4, 5, 6, 7];
const REGON14_WEIGHTS: [u32; 13] = [2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

/// Splits `s` into its leading digits and trailing check digit if it is
/// exactly `len` ASCII digits long.
fn digits(s: &str, len: usize) -> Option<(Vec<u32>, u32)> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut body: Vec<u32> = s.bytes().map(|b| u32::from(b - b'0')).collect();
    let check = body.pop()?;
    Some((body, check))
}

fn weighted(body: &[u32], weights: &[u32]) -> u32 {
    body.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Validates an 11-digit PESEL.
///
/// ```
/// use idreg::validate::validate_pesel;
///
/// assert!(validate_pesel("44051401458"));
/// assert!(!validate_pesel("12345678901"));
/// assert!(!validate_pesel(""));
/// ```
pub fn validate_pesel(pesel: &str) -> bool {
    let Some((body, check)) = digits(pesel, 11) else {
        return false;
    };
    (10 - weighted(&body, &PESEL_WEIGHTS) % 10) % 10 == check
}

/// Validates a 10-digit NIP.
///
/// ```
/// use idreg::validate::validate_nip;
///
/// assert!(validate_nip("1234563218"));
/// assert!(!validate_nip("123-456-32-18"));
/// ```
pub fn validate_nip(nip: &str) -> bool {
    let Some((body, check)) = digits(nip, 10) else {
        return false;
    };
    // A remainder of 10 has no digit to represent it.
    let rem = weighted(&body, &NIP_WEIGHTS) % 11;
    rem < 10 && rem == check
}

/// Validates a 9- or 14-digit REGON.
///
/// ```
/// use idreg::validate::validate_regon;
///
/// assert!(validate_regon("123456785"));
/// assert!(validate_regon("12345678512347"));
/// assert!(!validate_regon("1234567851"));
/// ```
pub fn validate_regon(regon: &str) -> bool {
    let weights: &[u32] = match regon.len() {
        9 => &REGON9_WEIGHTS,
        14 => &REGON14_WEIGHTS,
        _ => return false,
    };
    let Some((body, check)) = digits(regon, regon.len()) else {
        return false;
    };
    let expected = match weighted(&body, weights) % 11 {
        10 => 0,
        rem => rem,
    };
    expected == check
}

/// The identifier kinds a record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Pesel,
    Nip,
    Regon,
}

impl IdentifierKind {
    pub fn all() -> &'static [IdentifierKind] {
        &[
            IdentifierKind::Pesel,
            IdentifierKind::Nip,
            IdentifierKind::Regon,
        ]
    }

    pub fn validate(&self, value: &str) -> bool {
        match self {
            IdentifierKind::Pesel => validate_pesel(value),
            IdentifierKind::Nip => validate_nip(value),
            IdentifierKind::Regon => validate_regon(value),
        }
    }

    /// The value of this identifier on `record`, if set.
    pub fn value_of<'a>(&self, record: &'a UserRecord) -> Option<&'a str> {
        match self {
            IdentifierKind::Pesel => record.pesel.as_deref(),
            IdentifierKind::Nip => record.nip.as_deref(),
            IdentifierKind::Regon => record.regon.as_deref(),
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Pesel => write!(f, "PESEL"),
            IdentifierKind::Nip => write!(f, "NIP"),
            IdentifierKind::Regon => write!(f, "REGON"),
        }
    }
}

/// Every identifier present on `record` that fails its checksum.
/// Absent identifiers are not checked.
pub fn check_record(record: &UserRecord) -> Vec<IdentifierKind> {
    IdentifierKind::all()
        .iter()
        .copied()
        .filter(|kind| kind.value_of(record).is_some_and(|v| !kind.validate(v)))
        .collect()
}
