//! Fingerprints of the schema map files the catalog loads.
//!
//! The digest is recorded on the catalog and logged on load. `vrpt convert`
//! prints it in its summary so two runs can be checked against the same map.

#![deny(unsafe_code)]

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of a schema map file's bytes.
pub fn schema_fingerprint(contents: &[u8]) -> String {
    hex::encode(Sha256::digest(contents))
}
