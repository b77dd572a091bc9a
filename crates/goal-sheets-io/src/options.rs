//! Loading options

/// Options for reading delimited text
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter (default: guessed from the header line)
    pub delimiter: Option<u8>,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Read cells that look like numbers as numbers
    pub auto_detect_numbers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            auto_detect_numbers: true,
        }
    }
}

impl LoadOptions {
    /// Use a fixed delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

/// Input format, decided by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Any workbook calamine can open (xlsx, xlsm, xlsb, xls, ods)
    Workbook,
    /// Delimited text
    Csv,
    /// Tab-separated text
    Tsv,
}

impl FileFormat {
    /// Detect the format from a path's extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "xlam" | "ods" => Some(FileFormat::Workbook),
            "csv" | "txt" => Some(FileFormat::Csv),
            "tsv" | "tab" => Some(FileFormat::Tsv),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FileFormat::from_extension("XLSX"), Some(FileFormat::Workbook));
        assert_eq!(FileFormat::from_extension("ods"), Some(FileFormat::Workbook));
        assert_eq!(FileFormat::from_extension("csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_extension("tsv"), Some(FileFormat::Tsv));
        assert_eq!(FileFormat::from_extension("pdf"), None);
    }
}
