use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

const REPORT_SUFFIX: &str = "_comparison.json";

/// Directory receiving one report per archive pair
#[derive(Debug)]
pub struct ReportStore {
    path: Box<Path>,
}

impl ReportStore {
    /// Open the report directory, creating it when needed
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(path).context(format!(
            "Unable to create report directory {}",
            path.display()
        ))?;

        Ok(ReportStore { path: path.into() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn report_path(&self, base_name: &str) -> PathBuf {
        self.path.join(format!("{base_name}{REPORT_SUFFIX}"))
    }

    /// Write a report file atomically: a temporary sibling is written first
    /// and then renamed over the target.
    pub fn write(report_path: &Path, content: Bytes) -> anyhow::Result<()> {
        let report_dir = report_path
            .parent()
            .context(format!("Invalid report path {}", report_path.display()))?;
        let file_name = report_path
            .file_name()
            .context(format!("Invalid report path {}", report_path.display()))?;
        let temp_report_path = report_dir.join(format!(
            ".{}.tmp-{}",
            file_name.to_string_lossy(),
            std::process::id()
        ));

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_report_path)
            .context(format!(
                "Unable to open report file {}",
                temp_report_path.display()
            ))?;

        file.write_all(&content).context(format!(
            "Unable to write report file {}",
            temp_report_path.display()
        ))?;

        std::fs::rename(&temp_report_path, report_path).context(format!(
            "Unable to rename report file to {}",
            report_path.display()
        ))?;

        Ok(())
    }
}
