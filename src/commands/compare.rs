use crate::areas::archive::Archive;
use crate::areas::reports::ReportStore;
use crate::areas::session::Session;
use crate::artifacts::report::Report;
use anyhow::Context;
use bytes::Bytes;
use chrono::Utc;
use std::path::Path;
use tracing::info;

impl Session {
    /// Compare two archive files, optionally saving a report to `output`
    pub fn compare_files(
        &self,
        first: &Path,
        second: &Path,
        output: Option<&Path>,
    ) -> anyhow::Result<()> {
        let result = Archive::new(first).compare(&Archive::new(second))?;
        info!(
            first = %first.display(),
            second = %second.display(),
            identical = result.is_identical(),
            "archives compared"
        );

        self.print_comparison(&result)?;

        if let Some(output) = output {
            let report = Report::new(&result, first, second, Utc::now());
            ReportStore::write(output, Bytes::from(report.to_json()?))
                .context(format!("Unable to save report {}", output.display()))?;

            writeln!(self.writer())?;
            writeln!(self.writer(), "Report saved: {}", output.display())?;
        }

        Ok(())
    }
}
