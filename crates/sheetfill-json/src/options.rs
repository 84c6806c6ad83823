//! JSON writer options

/// Options for writing workbook snapshots
#[derive(Debug, Clone)]
pub struct JsonWriteOptions {
    /// Pretty-print the output (default: true)
    pub pretty: bool,
}

impl Default for JsonWriteOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}
