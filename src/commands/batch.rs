use crate::areas::archive::Archive;
use crate::areas::reports::ReportStore;
use crate::areas::session::Session;
use crate::areas::workspace::Workspace;
use crate::artifacts::comparison::archive_pair::{ArchivePair, pair_archives};
use crate::artifacts::comparison::comparison_result::ComparisonResult;
use crate::artifacts::report::Report;
use bytes::Bytes;
use chrono::Utc;
use colored::Colorize;
use futures::StreamExt;
use futures::stream;
use std::path::Path;
use tracing::{info, warn};

impl Session {
    /// Compare every pair of matching archives found in two directories.
    ///
    /// A pair that fails is reported and skipped; the remaining pairs are
    /// still compared. Up to `jobs` pairs are read at once, results are
    /// printed in pairing order.
    pub async fn compare_directories(
        &self,
        first: &Path,
        second: &Path,
        output: Option<&Path>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "Searching for archives")?;
        writeln!(self.writer(), "  First directory: {}", first.display())?;
        writeln!(self.writer(), "  Second directory: {}", second.display())?;
        writeln!(self.writer())?;

        let pairs = pair_archives(
            &Workspace::new(first).list_archives()?,
            &Workspace::new(second).list_archives()?,
        );
        info!(pairs = pairs.len(), "archives paired");

        if pairs.is_empty() {
            writeln!(self.writer(), "{}", "No matching archives found.".yellow())?;
            return Ok(());
        }

        let noun = if pairs.len() == 1 { "pair" } else { "pairs" };
        writeln!(
            self.writer(),
            "Found {} matching archive {noun}:",
            pairs.len()
        )?;
        for pair in &pairs {
            writeln!(self.writer(), "  • {}", pair.base_name)?;
        }
        writeln!(self.writer())?;

        let store = output.map(ReportStore::create).transpose()?;
        let total = pairs.len();

        let mut comparisons = stream::iter(pairs)
            .map(|pair| async move {
                let (first, second) = (pair.first.clone(), pair.second.clone());
                let result = tokio::task::spawn_blocking(move || {
                    Archive::new(&first).compare(&Archive::new(&second))
                })
                .await
                .map_err(anyhow::Error::from)
                .and_then(|result| result);

                (pair, result)
            })
            .buffered(self.config().jobs.get())
            .enumerate();

        while let Some((index, (pair, result))) = comparisons.next().await {
            writeln!(
                self.writer(),
                "{}",
                format!("Comparing {}/{}: {}", index + 1, total, pair.base_name).bold()
            )?;
            self.print_pair_outcome(&pair, result, store.as_ref())?;
            writeln!(self.writer())?;
        }

        match store {
            Some(store) => writeln!(
                self.writer(),
                "All comparisons finished. Reports saved in: {}",
                store.path().display()
            )?,
            None => writeln!(self.writer(), "All comparisons finished.")?,
        }

        Ok(())
    }

    fn print_pair_outcome(
        &self,
        pair: &ArchivePair,
        result: anyhow::Result<ComparisonResult>,
        store: Option<&ReportStore>,
    ) -> anyhow::Result<()> {
        let result = match result {
            Ok(result) => result,
            Err(error) => {
                warn!(pair = %pair.base_name, error = %format!("{error:#}"), "comparison failed");
                writeln!(
                    self.writer(),
                    "  {}",
                    format!("Error comparing archives: {error:#}").red()
                )?;
                return Ok(());
            }
        };

        info!(
            pair = %pair.base_name,
            identical = result.is_identical(),
            "pair compared"
        );
        writeln!(self.writer(), "  {}", result.summary())?;

        let Some(store) = store else {
            return Ok(());
        };

        let report_path = store.report_path(&pair.base_name);
        let report = Report::new(&result, &pair.first, &pair.second, Utc::now());
        let written = report
            .to_json()
            .and_then(|json| ReportStore::write(&report_path, Bytes::from(json)));

        match written {
            Ok(()) => {
                let file_name = report_path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                writeln!(self.writer(), "  Report: {file_name}")?;
            }
            Err(error) => {
                warn!(pair = %pair.base_name, error = %format!("{error:#}"), "report failed");
                writeln!(
                    self.writer(),
                    "  {}",
                    format!("Error writing report: {error:#}").red()
                )?;
            }
        }

        Ok(())
    }
}
