pub mod markdown;

use std::fmt;

use classdoc_core::document::Document;

/// Writes a parsed [`Document`] in an output format.
pub trait Exporter {
    /// Write `document` under the heading `title` to `out`.
    fn export(&self, document: &Document, title: &str, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Export into a new string.
    fn export_to_string(&self, document: &Document, title: &str) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.export(document, title, &mut out)?;
        Ok(out)
    }
}
