// Cipher Parser - Decomposes symbolic names into ciphersuite records

use super::Ciphersuite;
use crate::error::GenError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Shape (a): AES/DES suites with an optional chaining-mode suffix and an
    /// explicit digest suffix. Anchored at both ends.
    static ref AES_SHAPE: Regex = Regex::new(
        r"^(?:TLS1|SSL3)_TXT_(EDH|DHE|ECDHE)_RSA(?:_WITH)?_(AES|DES)_(256|128|192)(|_CBC|_CBC3|_GCM)_(SHA|SHA256|SHA384)$"
    )
    .expect("AES shape pattern is valid");

    /// Shape (b): CCM suites; no digest suffix, prefix match.
    static ref CCM_SHAPE: Regex = Regex::new(
        r"^(?:TLS1|SSL3)_TXT_(EDH|DHE|ECDHE)_RSA(?:_WITH)?_(AES|DES)_(256|128|192)_CCM"
    )
    .expect("CCM shape pattern is valid");

    /// Shape (c): ChaCha20-Poly1305 suites; everything but the key exchange
    /// is implied by the match, prefix match.
    static ref CHACHA_SHAPE: Regex = Regex::new(
        r"^(?:TLS1|SSL3)_TXT_(EDH|DHE|ECDHE)_RSA(?:_WITH)?_CHACHA20_POLY1305"
    )
    .expect("ChaCha shape pattern is valid");
}

/// Result of decomposing one candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The name matched a structural shape and every field is in domain
    Parsed(Ciphersuite),
    /// The name matched no shape; reported and dropped, never fatal
    Unparseable(String),
}

/// Decomposes accepted candidate names into typed records
pub struct SuiteParser;

impl SuiteParser {
    /// Try the structural shapes in order, first match wins.
    ///
    /// The order is load-bearing: shape (a) is a near-superset of the CCM
    /// and ChaCha shapes and must not shadow them, so the more specific
    /// shapes are tried only after (a) has failed to match exactly.
    ///
    /// `Err` is reserved for domain violations (see `GenError`); a name
    /// that simply matches no shape comes back as `Unparseable`.
    pub fn parse_cipher(name: &str) -> Result<ParseOutcome, GenError> {
        if let Some(caps) = AES_SHAPE.captures(name) {
            let suite = Ciphersuite::new(
                name, &caps[1], &caps[2], &caps[3], &caps[4], &caps[5],
            )?;
            return Ok(ParseOutcome::Parsed(suite));
        }

        if let Some(caps) = CCM_SHAPE.captures(name) {
            let suite = Ciphersuite::new(name, &caps[1], &caps[2], &caps[3], "CCM", "n/a")?;
            return Ok(ParseOutcome::Parsed(suite));
        }

        if let Some(caps) = CHACHA_SHAPE.captures(name) {
            let suite = Ciphersuite::new(name, &caps[1], "CHACHA20", "256", "POLY1305", "n/a")?;
            return Ok(ParseOutcome::Parsed(suite));
        }

        Ok(ParseOutcome::Unparseable(name.to_string()))
    }

    /// Diagnostic comment emitted for an unparseable name, interleaved with
    /// generated output so it survives in the produced fragment.
    pub fn unparseable_diagnostic(name: &str) -> String {
        format!("/* Couldn't parse {name} ! */")
    }
}
