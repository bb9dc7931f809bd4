// Ciphers module - Typed ciphersuite records and preference ranking

use crate::error::GenError;
use std::fmt;

pub mod parser;

/// Key-exchange family. `EDH` is a legacy spelling of `DHE` and collapses
/// into it at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyExchange {
    Ecdhe,
    Dhe,
}

/// Bulk cipher family.
///
/// DES matches the structural shapes but is outside this domain: the policy
/// filter removes every DES suite before decomposition, and a DES token
/// reaching construction is treated as vocabulary drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkCipher {
    Aes,
    Chacha20,
}

/// Key size label. Ordered by the preference table, not numerically;
/// 192-bit keys rank below 128-bit ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitLength {
    B256,
    B128,
    B192,
}

/// Block/stream operation mode. An empty suffix and the 3DES-style `_CBC3`
/// suffix both mean CBC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Poly1305,
    Gcm,
    Ccm,
    Cbc,
}

/// Message digest, with a sentinel for AEAD modes that carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
    NotApplicable,
    Sha384,
    Sha256,
    Sha,
}

// =============================================================================
// Preference tables
// =============================================================================
//
// Descending order of goodness per field. These encode a mandated security
// ranking with no formula behind it; they are versioned configuration, and
// new ciphersuite families are supported by editing them.

pub const KEY_EXCHANGE_PREFERENCE: [KeyExchange; 2] = [KeyExchange::Ecdhe, KeyExchange::Dhe];
pub const BULK_CIPHER_PREFERENCE: [BulkCipher; 2] = [BulkCipher::Aes, BulkCipher::Chacha20];
pub const MODE_PREFERENCE: [Mode; 4] = [Mode::Poly1305, Mode::Gcm, Mode::Ccm, Mode::Cbc];
pub const DIGEST_PREFERENCE: [Digest; 4] = [
    Digest::NotApplicable,
    Digest::Sha384,
    Digest::Sha256,
    Digest::Sha,
];
pub const BIT_LENGTH_PREFERENCE: [BitLength; 3] = [BitLength::B256, BitLength::B128, BitLength::B192];

/// Composite ranking key: preference-table index per field, in field
/// priority order (key exchange, bulk cipher, mode, digest, bit length).
/// Lower sorts first.
pub type SortKey = (usize, usize, usize, usize, usize);

/// One accepted, decomposed ciphersuite
///
/// Immutable after construction; every field is guaranteed to sit in its
/// preference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphersuite {
    pub name: String,
    pub fwsec: KeyExchange,
    pub cipher: BulkCipher,
    pub bitlength: BitLength,
    pub mode: Mode,
    pub digest: Digest,
    sort_key: SortKey,
}

impl Ciphersuite {
    /// Build a record from the raw tokens a structural shape captured.
    ///
    /// Normalizes legacy spellings (`EDH`, empty/`_CBC`/`_CBC3`/`_GCM` mode
    /// suffixes), then validates each field against its preference table.
    /// A token outside its domain is a fatal error: it means these tables
    /// are stale relative to the input vocabulary, and dropping the suite
    /// silently would mask that.
    pub fn new(
        name: &str,
        fwsec: &str,
        cipher: &str,
        bitlength: &str,
        mode: &str,
        digest: &str,
    ) -> Result<Self, GenError> {
        let fwsec = match fwsec {
            "ECDHE" => KeyExchange::Ecdhe,
            "DHE" | "EDH" => KeyExchange::Dhe,
            other => return Err(Self::domain_error("fwsec", other, name)),
        };
        let cipher = match cipher {
            "AES" => BulkCipher::Aes,
            "CHACHA20" => BulkCipher::Chacha20,
            other => return Err(Self::domain_error("cipher", other, name)),
        };
        let bitlength = match bitlength {
            "256" => BitLength::B256,
            "128" => BitLength::B128,
            "192" => BitLength::B192,
            other => return Err(Self::domain_error("bitlength", other, name)),
        };
        let mode = match mode {
            "" | "_CBC" | "_CBC3" => Mode::Cbc,
            "_GCM" | "GCM" => Mode::Gcm,
            "CCM" => Mode::Ccm,
            "POLY1305" => Mode::Poly1305,
            other => return Err(Self::domain_error("mode", other, name)),
        };
        let digest = match digest {
            "n/a" => Digest::NotApplicable,
            "SHA384" => Digest::Sha384,
            "SHA256" => Digest::Sha256,
            "SHA" => Digest::Sha,
            other => return Err(Self::domain_error("digest", other, name)),
        };

        let sort_key = (
            Self::pref_index(&KEY_EXCHANGE_PREFERENCE, fwsec, "fwsec", name)?,
            Self::pref_index(&BULK_CIPHER_PREFERENCE, cipher, "cipher", name)?,
            Self::pref_index(&MODE_PREFERENCE, mode, "mode", name)?,
            Self::pref_index(&DIGEST_PREFERENCE, digest, "digest", name)?,
            Self::pref_index(&BIT_LENGTH_PREFERENCE, bitlength, "bitlength", name)?,
        );

        Ok(Self {
            name: name.to_string(),
            fwsec,
            cipher,
            bitlength,
            mode,
            digest,
            sort_key,
        })
    }

    /// Ranking key; computed once at construction.
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// AEAD modes carry no separate digest or have it folded into the suite
    /// definition.
    pub fn is_aead(&self) -> bool {
        matches!(self.mode, Mode::Poly1305 | Mode::Gcm | Mode::Ccm)
    }

    fn pref_index<T: PartialEq + Copy + fmt::Display>(
        table: &[T],
        value: T,
        field: &'static str,
        name: &str,
    ) -> Result<usize, GenError> {
        table
            .iter()
            .position(|v| *v == value)
            .ok_or_else(|| Self::domain_error(field, &value.to_string(), name))
    }

    fn domain_error(field: &'static str, value: &str, name: &str) -> GenError {
        GenError::UnknownFieldValue {
            field,
            value: value.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for KeyExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyExchange::Ecdhe => write!(f, "ECDHE"),
            KeyExchange::Dhe => write!(f, "DHE"),
        }
    }
}

impl fmt::Display for BulkCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkCipher::Aes => write!(f, "AES"),
            BulkCipher::Chacha20 => write!(f, "CHACHA20"),
        }
    }
}

impl fmt::Display for BitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitLength::B256 => write!(f, "256"),
            BitLength::B128 => write!(f, "128"),
            BitLength::B192 => write!(f, "192"),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Poly1305 => write!(f, "POLY1305"),
            Mode::Gcm => write!(f, "GCM"),
            Mode::Ccm => write!(f, "CCM"),
            Mode::Cbc => write!(f, "CBC"),
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digest::NotApplicable => write!(f, "n/a"),
            Digest::Sha384 => write!(f, "SHA384"),
            Digest::Sha256 => write!(f, "SHA256"),
            Digest::Sha => write!(f, "SHA"),
        }
    }
}
