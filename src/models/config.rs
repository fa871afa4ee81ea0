//! Configuration model loaded from external sources.

use std::path::PathBuf;

use serde::Deserialize;

use crate::list_view::PageSize;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by every console command.
pub struct AppConfig {
    /// Directory holding one saved API response per table.
    pub data_dir: PathBuf,
    /// Records shown per list page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Directory receiving exported reports.
    pub export_dir: PathBuf,
    /// Prepended to report titles.
    #[serde(default)]
    pub report_title_prefix: String,
}

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl AppConfig {
    /// Configured page size, falling back to the default when it is zero.
    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.page_size).unwrap_or_else(|_| {
            log::warn!(
                "Ignoring page_size {}, using {DEFAULT_ITEMS_PER_PAGE}",
                self.page_size
            );
            PageSize::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_falls_back_to_default() {
        let config = AppConfig {
            data_dir: "data".into(),
            page_size: 0,
            export_dir: "exports".into(),
            report_title_prefix: String::new(),
        };
        assert_eq!(config.page_size().get(), DEFAULT_ITEMS_PER_PAGE);
    }
}
