use engine::activator::ActivationOutcome;
use std::io::{self, Write};

/// Where command progress goes: ordinary lines to `out`, failures to `err`.
pub struct Output<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

impl<'a> Output<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    pub fn error_line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.err, "{}", text.as_ref())
    }

    /// One line per outcome. Returns true when any outcome failed.
    pub fn outcomes(&mut self, outcomes: &[ActivationOutcome]) -> io::Result<bool> {
        let mut failed = false;
        for outcome in outcomes {
            match &outcome.error {
                Some(error) => {
                    failed = true;
                    if outcome.message.is_empty() {
                        writeln!(self.err, "  {}: ERROR {error}", outcome.app)?;
                    } else {
                        writeln!(
                            self.err,
                            "  {}: ERROR {error} ({})",
                            outcome.app, outcome.message
                        )?;
                    }
                }
                None if outcome.skipped => {
                    writeln!(self.out, "  {}: skipped ({})", outcome.app, outcome.message)?
                }
                None => writeln!(self.out, "  {}: {}", outcome.app, outcome.message)?,
            }
        }
        Ok(failed)
    }
}
