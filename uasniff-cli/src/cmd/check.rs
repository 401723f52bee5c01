//! verify the classification of the agents listed in a fixture file

use clap::Args;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use uasniff::{
    error::{BoxError, ErrorContext as _, OpaqueError},
    ua::fixture,
};

#[derive(Debug, Args)]
/// verify the classification of all agents in a fixture file
pub struct CliCommandCheck {
    /// the fixture file to verify
    ///
    /// (blocks of an agent line followed by its expected tags,
    /// separated by empty lines)
    file: PathBuf,
}

/// run the check command
pub fn run(cfg: CliCommandCheck) -> Result<(), BoxError> {
    let input = std::fs::read_to_string(&cfg.file)
        .with_context(|| format!("read fixture file {}", cfg.file.display()))?;
    let entries = fixture::parse(&input).context("parse fixture file")?;
    tracing::info!(file = %cfg.file.display(), entries = entries.len(), "check fixture file");

    let mut failed = 0usize;
    for entry in &entries {
        if let Err(mismatch) = entry.check() {
            tracing::error!(
                line = mismatch.line(),
                agent = mismatch.agent(),
                missing = ?mismatch.missing(),
                unexpected = ?mismatch.unexpected(),
                "classification mismatch",
            );
            failed += 1;
        }
    }

    let total = entries.len();
    let mut out = io::stdout().lock();
    writeln!(out, "{} passed; {failed} failed", total - failed)?;
    out.flush()?;

    if failed > 0 {
        return Err(OpaqueError::from_display(format!(
            "{failed} of {total} fixture entries failed"
        ))
        .into());
    }
    Ok(())
}
