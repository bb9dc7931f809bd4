// Extraction module - Scans header text for ciphersuite symbolic names

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Shape of a ciphersuite symbolic name: one of the two protocol-version
    /// text prefixes, then an identifier tail.
    static ref CIPHER_TOKEN: Regex =
        Regex::new(r"(?:SSL3|TLS1)_TXT_\w+").expect("ciphersuite token pattern is valid");
}

/// Scans lines of header text for ciphersuite symbolic names
pub struct CipherExtractor;

impl CipherExtractor {
    /// Return the first ciphersuite token on a line, if any.
    ///
    /// Case-sensitive, anywhere in the line; at most one token per line is
    /// taken even when a line mentions several.
    pub fn extract_line(line: &str) -> Option<&str> {
        CIPHER_TOKEN.find(line).map(|m| m.as_str())
    }

    /// Lazily yield every candidate name in a block of header text, one per
    /// matching line, in line order. Lines without a token are skipped.
    pub fn find_ciphers(contents: &str) -> impl Iterator<Item = &str> {
        contents.lines().filter_map(Self::extract_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_token_from_define_line() {
        let line = "# define TLS1_TXT_ECDHE_RSA_WITH_AES_128_GCM_SHA256 \
                    \"ECDHE-RSA-AES128-GCM-SHA256\"";
        assert_eq!(
            CipherExtractor::extract_line(line),
            Some("TLS1_TXT_ECDHE_RSA_WITH_AES_128_GCM_SHA256")
        );
    }

    #[test]
    fn test_accepts_ssl3_prefix() {
        let line = "# define SSL3_TXT_EDH_RSA_DES_192_CBC3_SHA \"EDH-RSA-DES-CBC3-SHA\"";
        assert_eq!(
            CipherExtractor::extract_line(line),
            Some("SSL3_TXT_EDH_RSA_DES_192_CBC3_SHA")
        );
    }

    #[test]
    fn test_first_match_per_line_wins() {
        let line = "TLS1_TXT_AAA TLS1_TXT_BBB";
        assert_eq!(CipherExtractor::extract_line(line), Some("TLS1_TXT_AAA"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(CipherExtractor::extract_line("tls1_txt_foo"), None);
        assert_eq!(CipherExtractor::extract_line("TLS1_txt_foo"), None);
    }

    #[test]
    fn test_unrelated_lines_are_skipped() {
        let header = "\
/* tls1.h */
#ifndef HEADER_TLS1_H
# define TLS1_TXT_DHE_RSA_WITH_AES_256_SHA \"DHE-RSA-AES256-SHA\"
# define TLS1_CK_DHE_RSA_WITH_AES_256_SHA 0x03000039
#endif";
        let found: Vec<&str> = CipherExtractor::find_ciphers(header).collect();
        assert_eq!(found, vec!["TLS1_TXT_DHE_RSA_WITH_AES_256_SHA"]);
    }

    #[test]
    fn test_token_stops_at_non_identifier_character() {
        let line = "key = TLS1_TXT_DHE_RSA_WITH_AES_128_SHA;";
        assert_eq!(
            CipherExtractor::extract_line(line),
            Some("TLS1_TXT_DHE_RSA_WITH_AES_128_SHA")
        );
    }
}
