use crate::config::PaginationSettings;

/// Limits applied to requested page sizes
#[derive(Debug, Clone, Copy)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self::from(&PaginationSettings::default())
    }

    /// Requested size, or the default, clamped into `1..=max_page_size`
    pub fn clamp_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size.max(1))
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&PaginationSettings> for PaginationConfig {
    fn from(settings: &PaginationSettings) -> Self {
        Self {
            default_page_size: settings.default_page_size,
            max_page_size: settings.max_page_size,
        }
    }
}
