// Output module - Renders the ranked listing as a C-preprocessor fragment

use crate::ciphers::Ciphersuite;
use crate::constants::{DELIMITER, INDENT, MANDATORY_SUITES};

/// Serializes a ranked ciphersuite sequence into preference-list source text
pub struct PreferenceListFormatter;

impl PreferenceListFormatter {
    /// Render the complete fragment for an already-ranked sequence.
    ///
    /// Mandatory suites are emitted bare under a `/* Required */` marker;
    /// everything else is wrapped in an `#ifdef` guard so the fragment still
    /// compiles against a build lacking that symbol. Entries are joined by
    /// the colon delimiter (all but the last) and the whole list ends with a
    /// terminating `;` line.
    ///
    /// Output depends only on the input sequence, byte for byte.
    pub fn format_listing(suites: &[Ciphersuite]) -> String {
        let mut out = String::new();

        for (i, suite) in suites.iter().enumerate() {
            let delimiter = if i + 1 == suites.len() { "" } else { DELIMITER };
            if Self::is_mandatory(&suite.name) {
                out.push_str(&format!("{INDENT}/* Required */\n"));
                out.push_str(&format!("{INDENT}{}{delimiter}\n", suite.name));
            } else {
                out.push_str(&format!("#ifdef {}\n", suite.name));
                out.push_str(&format!("{INDENT}{}{delimiter}\n", suite.name));
                out.push_str("#endif\n");
            }
        }

        out.push_str(&format!("{INDENT};\n"));
        out
    }

    /// Membership in the fixed never-guarded name set.
    pub fn is_mandatory(name: &str) -> bool {
        MANDATORY_SUITES.contains(&name)
    }
}
