// Policy module - Server usability rules for candidate ciphersuite names
//
// The entire security policy lives here: a server offers a ciphersuite only
// when it provides forward secrecy, authenticates with RSA, and avoids every
// known-weak construct. Absence of weak constructs alone is never sufficient.

use crate::constants::{DISALLOWED_CONSTRUCTS, EPHEMERAL_INDICATORS, RSA_AUTH_INDICATOR};

/// Decides whether a candidate name is usable in the server preference list
pub struct UsabilityPolicy;

impl UsabilityPolicy {
    /// Pure predicate over a candidate name; never fails.
    ///
    /// Accepts iff the name carries an ephemeral key-exchange indicator,
    /// carries the RSA authentication indicator, and contains none of the
    /// disallowed constructs.
    pub fn is_usable(name: &str) -> bool {
        let ephemeral = EPHEMERAL_INDICATORS.iter().any(|e| name.contains(e));
        if !ephemeral {
            return false;
        }

        if !name.contains(RSA_AUTH_INDICATOR) {
            return false;
        }

        DISALLOWED_CONSTRUCTS.iter().all(|b| !name.contains(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ephemeral_rsa_aes() {
        assert!(UsabilityPolicy::is_usable(
            "TLS1_TXT_ECDHE_RSA_WITH_AES_256_GCM_SHA384"
        ));
        assert!(UsabilityPolicy::is_usable(
            "TLS1_TXT_DHE_RSA_WITH_AES_128_SHA"
        ));
        assert!(UsabilityPolicy::is_usable(
            "TLS1_TXT_EDH_RSA_WITH_AES_128_SHA"
        ));
    }

    #[test]
    fn test_rejects_static_key_exchange() {
        // Strong cipher, no forward secrecy.
        assert!(!UsabilityPolicy::is_usable(
            "TLS1_TXT_RSA_WITH_AES_256_GCM_SHA384"
        ));
        // ECDH without the ephemeral E is static too.
        assert!(!UsabilityPolicy::is_usable(
            "TLS1_TXT_ECDH_RSA_WITH_AES_256_SHA"
        ));
    }

    #[test]
    fn test_rejects_non_rsa_authentication() {
        assert!(!UsabilityPolicy::is_usable(
            "TLS1_TXT_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"
        ));
    }

    #[test]
    fn test_rejects_every_disallowed_construct() {
        // Each of these carries an ephemeral indicator and RSA auth, so the
        // denylist is the only thing keeping it out.
        let rejected = [
            "TLS1_TXT_DHE_RSA_WITH_RC4_128_SHA",
            "TLS1_TXT_ECDHE_RSA_WITH_RC4_128_MD5",
            "SSL3_TXT_EDH_RSA_DES_192_CBC3_SHA",
            "SSL3_TXT_EDH_RSA_DES_40_CBC_SHA",
            "SSL3_TXT_EDH_RSA_DES_64_CBC_SHA",
            "TLS1_TXT_DHE_RSA_WITH_SEED_SHA",
            "TLS1_TXT_ECDHE_RSA_WITH_CAMELLIA_256_CBC_SHA384",
            "TLS1_TXT_ECDHE_RSA_WITH_NULL_SHA",
            "TLS1_TXT_DHE_RSA_WITH_AES_128_CCM_8",
        ];
        for name in rejected {
            assert!(!UsabilityPolicy::is_usable(name), "accepted {name}");
        }
    }

    #[test]
    fn test_rc4_rejected_despite_ephemeral_and_rsa() {
        let name = "TLS1_TXT_ECDHE_RSA_WITH_RC4_128_SHA";
        assert!(name.contains("_ECDHE_") && name.contains("_RSA_"));
        assert!(!UsabilityPolicy::is_usable(name));
    }

    #[test]
    fn test_full_tag_ccm_is_allowed_truncated_is_not() {
        assert!(UsabilityPolicy::is_usable(
            "TLS1_TXT_DHE_RSA_WITH_AES_256_CCM"
        ));
        assert!(!UsabilityPolicy::is_usable(
            "TLS1_TXT_DHE_RSA_WITH_AES_256_CCM_8"
        ));
    }

    #[test]
    fn test_total_over_arbitrary_strings() {
        assert!(!UsabilityPolicy::is_usable(""));
        assert!(!UsabilityPolicy::is_usable("not a cipher name"));
        assert!(!UsabilityPolicy::is_usable("_DHE_ but no rsa marker"));
        // The policy is substring-based by design; it does not require the
        // input to look like a ciphersuite name at all.
        assert!(UsabilityPolicy::is_usable("_DHE__RSA_"));
    }
}
