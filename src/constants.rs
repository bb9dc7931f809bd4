// cipherprefs - Server ciphersuite preference list generator

//! Security policy and output constants
//!
//! This module centralizes the versioned policy tables that drive candidate
//! filtering and emission. The orderings and memberships here are mandated
//! security configuration, not derived values: adding support for a new
//! ciphersuite family means editing these tables, never the algorithms that
//! consume them.

// =============================================================================
// Policy filter tables
// =============================================================================

/// Substrings that mark an ephemeral (forward-secret) key exchange.
///
/// A candidate lacking every one of these is rejected outright: without
/// forward secrecy a recorded session can be decrypted later if the server's
/// long-term key leaks.
pub const EPHEMERAL_INDICATORS: [&str; 3] = ["_EDH_", "_DHE_", "_ECDHE_"];

/// Substring that marks RSA authentication.
pub const RSA_AUTH_INDICATOR: &str = "_RSA_";

/// Substrings naming constructs a server must never offer.
///
/// Covers export-grade key sizes, weak digests, broken stream ciphers,
/// single/triple DES, regional ciphers we do not audit, NULL encryption,
/// and truncated-tag CCM variants.
pub const DISALLOWED_CONSTRUCTS: [&str; 9] = [
    "_DES_40_",
    "MD5",
    "_RC4_",
    "_DES_64_",
    "_SEED_",
    "_CAMELLIA_",
    "_NULL",
    "_CCM_8",
    "_DES_",
];

// =============================================================================
// Emission constants
// =============================================================================

/// Names emitted unconditionally, without an `#ifdef` guard.
///
/// Every OpenSSL build this generator targets defines these two symbols, and
/// a server configuration must always be able to fall back to them.
pub const MANDATORY_SUITES: [&str; 2] = [
    "TLS1_TXT_DHE_RSA_WITH_AES_256_SHA",
    "TLS1_TXT_DHE_RSA_WITH_AES_128_SHA",
];

/// Fixed indentation for generated list entries: seven spaces.
pub const INDENT: &str = "       ";

/// Delimiter appended to every list entry except the last.
pub const DELIMITER: &str = " :";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_suites_pass_the_policy_tables() {
        for name in MANDATORY_SUITES {
            assert!(EPHEMERAL_INDICATORS.iter().any(|e| name.contains(e)));
            assert!(name.contains(RSA_AUTH_INDICATOR));
            assert!(!DISALLOWED_CONSTRUCTS.iter().any(|b| name.contains(b)));
        }
    }

    #[test]
    fn test_plain_des_is_disallowed_even_without_a_width_suffix() {
        // "_DES_" must stay in the table so 3DES spellings like
        // TLS1_TXT_EDH_RSA_DES_192_CBC3_SHA are caught too.
        assert!(DISALLOWED_CONSTRUCTS.contains(&"_DES_"));
    }
}
