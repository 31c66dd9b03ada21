// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/oracle.rs
// Version: 1.0.3
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the hash oracle adapter: salted one-way hash schemes
// called through a per-worker scratch context, so every search thread hashes
// without locking.
//
// Tree Location:
// - src/core/oracle.rs (hash oracle adapter)
// - Depends on: pwhash, sha2, hex

use crate::core::candidate::Candidate;
use crate::error::Error;
use crate::Result;
use sha2::{Digest, Sha256};
use std::fmt;

/// Hash bytes compared before the full string. Both schemes put the salt in
/// bytes 0..2, so this window is the first part that depends on the candidate.
const PREFILTER: std::ops::Range<usize> = 2..5;

/// Two characters from the crypt(3) alphabet `[./0-9A-Za-z]`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Salt([u8; 2]);

impl Salt {
    pub const DEFAULT: Salt = Salt(*b"AB");

    pub fn new(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let valid = |b: &u8| b.is_ascii_alphanumeric() || *b == b'.' || *b == b'/';
        if bytes.len() != 2 || !bytes.iter().all(valid) {
            return Err(Error::InvalidSalt { salt: s.to_string() });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }

    /// Read the salt embedded in the first two characters of a hash
    pub fn from_hash(hash: &str) -> Result<Self> {
        match hash.get(0..2) {
            Some(prefix) => Self::new(prefix),
            None => Err(Error::InvalidHash {
                hash: hash.to_string(),
                reason: "too short to carry a salt",
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl Default for Salt {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({})", self.as_str())
    }
}

/// A deterministic salted one-way hash, callable from many threads at once.
///
/// All mutable state lives in the caller-owned `Scratch`; the returned string
/// borrows from it and is valid until the next call with the same scratch.
pub trait HashOracle: Send + Sync {
    type Scratch: Default + Send;

    fn name(&self) -> &'static str;

    fn hash<'s>(
        &self,
        candidate: &Candidate,
        salt: &Salt,
        scratch: &'s mut Self::Scratch,
    ) -> Result<&'s str>;

    /// Length of every hash this oracle produces
    fn hash_len(&self) -> usize;
}

/// Cheap pre-filter followed by the full comparison. A prefix match alone
/// never counts as a hit.
#[inline]
pub fn hashes_match(candidate_hash: &str, target_hash: &str) -> bool {
    let (a, b) = (candidate_hash.as_bytes(), target_hash.as_bytes());
    if a.len() >= PREFILTER.end && b.len() >= PREFILTER.end && a[PREFILTER] != b[PREFILTER] {
        return false;
    }
    a == b
}

/// Traditional DES-based crypt(3): 13 characters, salt first.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixCrypt;

/// Output buffer kept across calls. pwhash hands back a fresh `String` per
/// hash; it is copied in here so the buffer the worker reads stays put.
#[derive(Debug, Default)]
pub struct CryptScratch {
    out: String,
}

impl HashOracle for UnixCrypt {
    type Scratch = CryptScratch;

    fn name(&self) -> &'static str {
        "des-crypt"
    }

    fn hash<'s>(
        &self,
        candidate: &Candidate,
        salt: &Salt,
        scratch: &'s mut CryptScratch,
    ) -> Result<&'s str> {
        // unix_crypt is deprecated upstream as a weak scheme; it is the target format here.
        #[allow(deprecated)]
        let hashed = pwhash::unix_crypt::hash_with(salt.as_str(), candidate.as_bytes())
            .map_err(|e| Error::Hash(e.to_string()))?;
        scratch.out.clear();
        scratch.out.push_str(&hashed);
        Ok(&scratch.out)
    }

    fn hash_len(&self) -> usize {
        13
    }
}

/// Salt followed by lowercase hex SHA-256(salt || candidate): 66 characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaltedSha256;

pub struct Sha256Scratch {
    hex: [u8; 66],
}

impl Default for Sha256Scratch {
    fn default() -> Self {
        Self { hex: [b'0'; 66] }
    }
}

impl HashOracle for SaltedSha256 {
    type Scratch = Sha256Scratch;

    fn name(&self) -> &'static str {
        "salted-sha256"
    }

    fn hash<'s>(
        &self,
        candidate: &Candidate,
        salt: &Salt,
        scratch: &'s mut Sha256Scratch,
    ) -> Result<&'s str> {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_str().as_bytes());
        hasher.update(candidate.as_bytes());
        let digest = hasher.finalize();

        scratch.hex[..2].copy_from_slice(salt.as_str().as_bytes());
        hex::encode_to_slice(digest, &mut scratch.hex[2..])
            .map_err(|e| Error::Hash(e.to_string()))?;
        std::str::from_utf8(&scratch.hex).map_err(|e| Error::Hash(e.to_string()))
    }

    fn hash_len(&self) -> usize {
        66
    }
}

/// Hash a single candidate with a throwaway scratch context
pub fn hash_once<O: HashOracle>(oracle: &O, candidate: &Candidate, salt: &Salt) -> Result<String> {
    let mut scratch = O::Scratch::default();
    oracle.hash(candidate, salt, &mut scratch).map(str::to_string)
}


// Changelog:
// - v1.0.3 (2025-07-08): DES scratch keeps its buffer between calls.
// - v1.0.2 (2025-07-05): Scratch-returning hash signature.
//   - hash() now borrows its output from the caller's scratch context.
// - v1.0.1 (2025-07-03): Added the salted SHA-256 scheme for fast runs.
// - v1.0.0 (2025-07-02): Initial DES crypt adapter on pwhash.
