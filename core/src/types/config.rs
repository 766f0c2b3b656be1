/// Configuration for the lab-value extractor
///
/// Both strategies run by default. Turning one off never changes what the
/// other finds; it only removes its contribution to the result.
///
/// # Example
///
/// ```
/// use labextract_core::ExtractorConfig;
///
/// let config = ExtractorConfig::default().with_fallback(false);
///
/// assert!(config.line_scan);
/// assert!(!config.fallback);
/// assert!(config.next_line_values);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Run the line-proximity scan (first strategy)
    pub line_scan: bool,

    /// Accept a value on the line following a bare label
    pub next_line_values: bool,

    /// Run the whole-text regex fallback (second strategy)
    pub fallback: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            line_scan: true,
            next_line_values: true,
            fallback: true,
        }
    }
}

impl ExtractorConfig {
    /// Creates a config with only the line scan enabled
    ///
    /// # Example
    ///
    /// ```
    /// use labextract_core::ExtractorConfig;
    ///
    /// let config = ExtractorConfig::line_scan_only();
    /// assert!(config.line_scan);
    /// assert!(!config.fallback);
    /// ```
    pub fn line_scan_only() -> Self {
        Self {
            fallback: false,
            ..Self::default()
        }
    }

    /// Builder: Enable or disable the line scan
    pub fn with_line_scan(mut self, enabled: bool) -> Self {
        self.line_scan = enabled;
        self
    }

    /// Builder: Enable or disable next-line value lookup
    pub fn with_next_line_values(mut self, enabled: bool) -> Self {
        self.next_line_values = enabled;
        self
    }

    /// Builder: Enable or disable the whole-text fallback
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    /// Whether any strategy is enabled
    pub fn is_active(&self) -> bool {
        self.line_scan || self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let config = ExtractorConfig::default();
        assert!(config.line_scan);
        assert!(config.next_line_values);
        assert!(config.fallback);
        assert!(config.is_active());
    }

    #[test]
    fn test_builder_chain() {
        let config = ExtractorConfig::default()
            .with_line_scan(false)
            .with_fallback(false)
            .with_next_line_values(false);
        assert!(!config.is_active());
        assert!(!config.next_line_values);
    }
}
