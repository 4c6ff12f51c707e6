//! Console reporting for execution passes

use crate::run::engine::{FileOutcome, FileStatus, RunSummary};
use std::io;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes per-file status lines and the closing summary to stdout.
/// Write failures are swallowed: reporting can never fail a run.
pub(crate) struct Reporter {
    out: StandardStream,
}

impl Reporter {
    pub(crate) fn new(choice: ColorChoice) -> Self {
        Reporter {
            out: StandardStream::stdout(choice),
        }
    }

    pub(crate) fn file_finished(&mut self, outcome: &FileOutcome) {
        let _ = self.write_outcome(outcome);
    }

    pub(crate) fn run_finished(&mut self, summary: &RunSummary) {
        let _ = self.write_summary(summary);
    }

    fn write_outcome(&mut self, outcome: &FileOutcome) -> io::Result<()> {
        match &outcome.status {
            FileStatus::Passed => {
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(self.out, "✓")?;
                self.out.reset()?;
                writeln!(
                    self.out,
                    " {} ({}ms)",
                    outcome.path.display(),
                    outcome.duration.as_millis()
                )?;
            }
            FileStatus::Failed { detail } => {
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(self.out, "✗ {}", outcome.path.display())?;
                self.out.reset()?;
                writeln!(self.out, " ({}ms): {}", outcome.duration.as_millis(), detail)?;
            }
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let failed = summary.failed();

        writeln!(self.out)?;
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "{} passing", summary.passed())?;
        self.out.reset()?;
        if failed > 0 {
            write!(self.out, ", ")?;
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(self.out, "{} failing", failed)?;
            self.out.reset()?;
        }
        writeln!(self.out, " ({}ms)", summary.duration.as_millis())?;
        Ok(())
    }
}
