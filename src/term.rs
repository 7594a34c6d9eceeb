use std::fmt;
use std::str;

use byteorder::{ByteOrder, BigEndian};
use chrono::{DateTime, Utc};


const SIGN_BIT: u64 = 1 << 63;


/// An encoded field value
///
/// Terms are compared bytewise. Numeric encodings are arranged so that the
/// byte order of two terms equals the numeric order of the values they hold,
/// which lets the same term be used for exact matches and for range bounds.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct Term(Vec<u8>);


impl Term {
    pub fn from_bytes(bytes: &[u8]) -> Term {
        Term(bytes.to_vec())
    }

    pub fn from_string(string: &str) -> Term {
        Term(string.as_bytes().to_vec())
    }

    pub fn from_boolean(value: bool) -> Term {
        if value {
            Term(vec![b'T'])
        } else {
            Term(vec![b'F'])
        }
    }

    pub fn from_integer(value: i64) -> Term {
        let mut bytes = vec![0; 8];
        BigEndian::write_u64(&mut bytes, (value as u64) ^ SIGN_BIT);
        Term(bytes)
    }

    pub fn from_float(value: f64) -> Term {
        let bits = value.to_bits();
        let sortable = if bits & SIGN_BIT != 0 {
            !bits
        } else {
            bits ^ SIGN_BIT
        };

        let mut bytes = vec![0; 8];
        BigEndian::write_u64(&mut bytes, sortable);
        Term(bytes)
    }

    /// Dates are stored as milliseconds since the epoch
    pub fn from_datetime(value: &DateTime<Utc>) -> Term {
        Term::from_integer(value.timestamp_millis())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> Option<&str> {
        str::from_utf8(&self.0).ok()
    }

    pub fn to_integer(&self) -> Option<i64> {
        if self.0.len() != 8 {
            return None;
        }

        Some((BigEndian::read_u64(&self.0) ^ SIGN_BIT) as i64)
    }

    pub fn to_float(&self) -> Option<f64> {
        if self.0.len() != 8 {
            return None;
        }

        let sortable = BigEndian::read_u64(&self.0);
        let bits = if sortable & SIGN_BIT != 0 {
            sortable ^ SIGN_BIT
        } else {
            !sortable
        };

        Some(f64::from_bits(bits))
    }
}


impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.as_str() {
            Some(string) => write!(f, "Term({:?})", string),
            None => write!(f, "Term({:?})", self.0),
        }
    }
}
