use crate::areas::session::Session;
use crate::artifacts::comparison::comparison_result::ComparisonResult;
use crate::artifacts::diff::diff_record::DiffRecord;
use colored::Colorize;
use std::collections::BTreeSet;

const DELTA_HEADER_LINES: usize = 2;

impl Session {
    pub fn print_comparison(&self, result: &ComparisonResult) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", "=== Archive comparison ===".bold())?;
        writeln!(self.writer())?;

        self.print_bucket("Identical entries", &result.identical)?;
        self.print_bucket(
            "Different entries",
            &result.different.keys().cloned().collect(),
        )?;
        self.print_bucket("Only in first archive", &result.only_in_first)?;
        self.print_bucket("Only in second archive", &result.only_in_second)?;

        if self.config().show_diff && !result.different.is_empty() {
            writeln!(self.writer(), "{}", "Differences:".bold())?;
            for record in result.different.values() {
                self.print_diff_record(record)?;
            }
            writeln!(self.writer())?;
        }

        let summary = result.summary();
        writeln!(self.writer(), "{}", "Summary:".bold())?;
        writeln!(self.writer(), "  Total entries: {}", summary.total)?;
        writeln!(self.writer(), "  Identical: {}", summary.identical)?;
        writeln!(self.writer(), "  Different: {}", summary.different)?;
        writeln!(self.writer(), "  Only in first: {}", summary.only_in_first)?;
        writeln!(self.writer(), "  Only in second: {}", summary.only_in_second)?;
        writeln!(self.writer())?;

        if result.is_identical() {
            writeln!(self.writer(), "{}", "The archives are identical.".green())?;
        } else {
            writeln!(self.writer(), "{}", "The archives differ.".yellow())?;
        }

        Ok(())
    }

    fn print_bucket(&self, title: &str, names: &BTreeSet<String>) -> anyhow::Result<()> {
        if names.is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "{}", format!("{title} ({}):", names.len()).bold())?;
        for name in names {
            writeln!(self.writer(), "  • {name}")?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn print_diff_record(&self, record: &DiffRecord) -> anyhow::Result<()> {
        if record.binary {
            writeln!(
                self.writer(),
                "{}",
                format!("{} (binary)", record.name).bold()
            )?;
            writeln!(
                self.writer(),
                "Binary files differ ({} -> {})",
                record.first.fingerprint.to_short(),
                record.second.fingerprint.to_short()
            )?;
            return Ok(());
        }

        for (index, line) in record.delta.lines().enumerate() {
            if index < DELTA_HEADER_LINES {
                writeln!(self.writer(), "{}", line.bold())?;
            } else if line.starts_with('-') {
                writeln!(self.writer(), "{}", line.red())?;
            } else if line.starts_with('+') {
                writeln!(self.writer(), "{}", line.green())?;
            } else {
                writeln!(self.writer(), "{line}")?;
            }
        }

        Ok(())
    }
}
