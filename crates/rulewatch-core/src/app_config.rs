use std::path::PathBuf;

/// Runtime settings for a pipeline run, resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Root under which `data/`, `reports/` and `visuals/` are created.
    pub output_dir: PathBuf,
    pub fedreg_base_url: String,
    pub lookback_days: u32,
    pub per_page: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub rolling_window: usize,
    pub months: usize,
}

impl AppConfig {
    #[must_use]
    pub fn raw_csv_path(&self) -> PathBuf {
        self.output_dir.join("data/raw/epa_prorule_raw.csv")
    }

    #[must_use]
    pub fn normalized_csv_path(&self) -> PathBuf {
        self.output_dir
            .join("data/processed/epa_prorule_normalized.csv")
    }

    #[must_use]
    pub fn qa_report_path(&self) -> PathBuf {
        self.output_dir.join("reports/qa_report.md")
    }

    /// Directories the pipeline writes into.
    #[must_use]
    pub fn output_dirs(&self) -> [PathBuf; 4] {
        [
            self.output_dir.join("data/raw"),
            self.output_dir.join("data/processed"),
            self.output_dir.join("reports"),
            self.output_dir.join("visuals"),
        ]
    }
}
