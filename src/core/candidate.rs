// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/candidate.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the candidate enumerator: the fixed-width DDMMYYYY
// encoding and the digit-range search space it is swept over.
//
// Tree Location:
// - src/core/candidate.rs (candidate encoding and search space)
// - Depends on: serde

use serde::{Serialize, Serializer};
use std::fmt;

pub const MAX_DAY: u8 = 31;
pub const MAX_MONTH: u8 = 12;
pub const MAX_YEAR: u16 = 2025;

/// Width of an encoded candidate in bytes
pub const CANDIDATE_LEN: usize = 8;

/// One DDMMYYYY digit string from the search space.
///
/// The space is defined by digit ranges, not calendar validity, so `00002025`
/// or `31020000` are legitimate candidates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate([u8; CANDIDATE_LEN]);

impl Candidate {
    /// Encode (day, month, year) as zero-padded DDMMYYYY.
    ///
    /// Callers keep inputs within `MAX_DAY`, `MAX_MONTH` and `MAX_YEAR`;
    /// out-of-range values are reduced modulo their field width.
    pub fn encode(day: u8, month: u8, year: u16) -> Self {
        let mut out = [b'0'; CANDIDATE_LEN];
        out[0] = b'0' + (day / 10) % 10;
        out[1] = b'0' + day % 10;
        out[2] = b'0' + (month / 10) % 10;
        out[3] = b'0' + month % 10;
        out[4] = b'0' + ((year / 1000) % 10) as u8;
        out[5] = b'0' + ((year / 100) % 10) as u8;
        out[6] = b'0' + ((year / 10) % 10) as u8;
        out[7] = b'0' + (year % 10) as u8;
        Self(out)
    }

    pub fn decode(&self) -> (u8, u8, u16) {
        let d = |i: usize| self.0[i] - b'0';
        let day = d(0) * 10 + d(1);
        let month = d(2) * 10 + d(3);
        let year = d(4) as u16 * 1000 + d(5) as u16 * 100 + d(6) as u16 * 10 + d(7) as u16;
        (day, month, year)
    }

    /// Parse exactly eight ASCII digits
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != CANDIDATE_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let mut out = [0u8; CANDIDATE_LEN];
        out.copy_from_slice(bytes);
        Some(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ever built from ASCII digits.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Render as DD/MM/YYYY for reports
    pub fn to_date_string(&self) -> String {
        let s = self.as_str();
        format!("{}/{}/{}", &s[0..2], &s[2..4], &s[4..8])
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Candidate({})", self.as_str())
    }
}

impl Serialize for Candidate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Inclusive digit ranges swept by the search, flattened day-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSpace {
    max_day: u8,
    max_month: u8,
    max_year: u16,
}

impl SearchSpace {
    /// 32 days x 13 months x 2026 years = 842,816 candidates
    pub const FULL: SearchSpace = SearchSpace {
        max_day: MAX_DAY,
        max_month: MAX_MONTH,
        max_year: MAX_YEAR,
    };

    /// A narrowed space starting at 00000000; bounds are clamped to the full limits.
    pub fn new(max_day: u8, max_month: u8, max_year: u16) -> Self {
        Self {
            max_day: max_day.min(MAX_DAY),
            max_month: max_month.min(MAX_MONTH),
            max_year: max_year.min(MAX_YEAR),
        }
    }

    fn years(&self) -> u64 {
        self.max_year as u64 + 1
    }

    fn months(&self) -> u64 {
        self.max_month as u64 + 1
    }

    pub fn len(&self) -> u64 {
        (self.max_day as u64 + 1) * self.months() * self.years()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Map a flattened index to its candidate. Indices past `len()` wrap.
    pub fn candidate_at(&self, index: u64) -> Candidate {
        let index = index % self.len();
        let year = index % self.years();
        let month = (index / self.years()) % self.months();
        let day = index / (self.years() * self.months());
        Candidate::encode(day as u8, month as u8, year as u16)
    }

    pub fn contains(&self, candidate: &Candidate) -> bool {
        let (day, month, year) = candidate.decode();
        day <= self.max_day && month <= self.max_month && year <= self.max_year
    }

    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        (0..self.len()).map(move |i| self.candidate_at(i))
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self::FULL
    }
}


// Changelog:
// - v1.0.1 (2025-07-04): Added narrowed search spaces.
//   - SearchSpace::new clamps bounds so quick runs reuse the same encoding.
// - v1.0.0 (2025-07-02): Initial candidate enumerator.
