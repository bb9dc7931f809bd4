// Generator module - End-to-end preference list generation

use crate::ciphers::parser::{ParseOutcome, SuiteParser};
use crate::ciphers::Ciphersuite;
use crate::error::GenError;
use crate::extract::CipherExtractor;
use crate::output::PreferenceListFormatter;
use crate::policy::UsabilityPolicy;
use crate::{Args, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// One fully-read input header
struct SourceFile {
    path: String,
    contents: String,
}

/// Drives the extract → filter → parse → rank → emit pipeline
pub struct Generator {
    args: Args,
}

impl Generator {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Run the whole pipeline and return the complete output text:
    /// unparseable-name diagnostic comments in encounter order, then the
    /// ranked listing.
    ///
    /// Every input file is read in full before anything is produced, so an
    /// unreadable file aborts the run without partial output.
    pub fn run(&self) -> Result<String> {
        let files = self.read_inputs()?;

        let mut diagnostics = Vec::new();
        let mut suites = Vec::new();
        let mut candidates = 0usize;
        let mut accepted = 0usize;

        for file in &files {
            for name in CipherExtractor::find_ciphers(&file.contents) {
                candidates += 1;
                if !UsabilityPolicy::is_usable(name) {
                    continue;
                }
                accepted += 1;
                match SuiteParser::parse_cipher(name)? {
                    ParseOutcome::Parsed(suite) => suites.push(suite),
                    ParseOutcome::Unparseable(name) => {
                        debug!(%name, file = %file.path, "no structural shape matched");
                        diagnostics.push(SuiteParser::unparseable_diagnostic(&name));
                    }
                }
            }
        }

        info!(
            files = files.len(),
            candidates,
            accepted,
            parsed = suites.len(),
            "scanned input headers"
        );

        if suites.is_empty() {
            if self.args.strict {
                return Err(GenError::EmptyPreferenceList { files: files.len() }.into());
            }
            warn!("no usable ciphersuites found; emitting an empty preference list");
        }

        // Stable sort: suites with fully equal keys keep encounter order.
        suites.sort_by_key(Ciphersuite::sort_key);

        let mut out = String::new();
        for diagnostic in &diagnostics {
            out.push_str(diagnostic);
            out.push('\n');
        }
        out.push_str(&PreferenceListFormatter::format_listing(&suites));
        Ok(out)
    }

    /// Read every input file up front, in argument order, all-or-nothing.
    fn read_inputs(&self) -> Result<Vec<SourceFile>> {
        self.args
            .files
            .iter()
            .map(|path| Self::read_file(path))
            .collect()
    }

    fn read_file(path: &Path) -> Result<SourceFile> {
        let contents = fs::read_to_string(path).map_err(|source| GenError::FileSystemError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(SourceFile {
            path: path.display().to_string(),
            contents,
        })
    }
}
