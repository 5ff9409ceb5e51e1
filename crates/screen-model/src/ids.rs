#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use sha2::Digest;

use crate::ModelError;

/// Identifier assigned to a record when its dataset is loaded.
///
/// Derived from the source, the load generation and the 1-based row number,
/// and rendered as lowercase hex. Manual status overrides are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId([u8; 16]);

impl RecordId {
    /// sha256("<source_id>\0<generation>\0<row_number>"), first 16 bytes.
    pub fn derive(source_id: &str, generation: u64, row_number: usize) -> Self {
        let mut hasher = sha2::Sha256::new();
        hasher.update(source_id.as_bytes());
        hasher.update([0u8]);
        hasher.update(generation.to_string().as_bytes());
        hasher.update([0u8]);
        hasher.update(row_number.to_string().as_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        Self::from_first_16_bytes_of_sha256(digest)
    }

    pub fn from_first_16_bytes_of_sha256(digest: [u8; 32]) -> Self {
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for RecordId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim()).map_err(|_| ModelError::InvalidRecordId(s.into()))?;
        let out: [u8; 16] = bytes
            .try_into()
            .map_err(|_| ModelError::InvalidRecordId(s.into()))?;
        Ok(Self(out))
    }
}

impl serde::Serialize for RecordId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_is_deterministic_per_generation() {
        let a = RecordId::derive("candidates.csv", 1, 1);
        let b = RecordId::derive("candidates.csv", 1, 1);
        let c = RecordId::derive("candidates.csv", 1, 2);
        let d = RecordId::derive("candidates.csv", 2, 1);
        let e = RecordId::derive("other.csv", 1, 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(a, e);
    }

    #[test]
    fn record_id_hex_round_trip() {
        let id = RecordId::derive("candidates.csv", 3, 7);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 32);
        assert_eq!(hex.parse::<RecordId>().unwrap(), id);
        assert!("zz".parse::<RecordId>().is_err());
        assert!("abcd".parse::<RecordId>().is_err());
    }
}
