//! PDF Document abstraction
//!
//! Owns the `lopdf` object pool for one run. Engine operations borrow it
//! for the duration of a single call.

use std::path::Path;

use lopdf::Document;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::spot::{self, FilterSpec};
use crate::types::{SpotInfo, SpotOutcome};

const PDF_HEADER: &[u8] = b"%PDF-";

/// PDF Document wrapper for loading, processing and saving
pub struct PdfDocument {
    document: Document,
}

impl PdfDocument {
    /// Load a PDF document from file path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = Document::load(path).map_err(|e| Error::load(path, e))?;
        debug!("Loaded {} ({} pages)", path.display(), document.get_pages().len());

        Ok(Self { document })
    }

    /// Parse a PDF document held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes).map_err(|e| Error::load("<memory>", e))?;
        Ok(Self::from(document))
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    pub fn inner(&self) -> &Document {
        &self.document
    }

    pub fn list_spots(&self) -> Vec<String> {
        spot::list_spots(&self.document)
    }

    pub fn describe_spots(&self) -> Vec<SpotInfo> {
        spot::describe_spots(&self.document)
    }

    pub fn disable_matching(&mut self, spec: &FilterSpec) -> usize {
        spot::disable_matching(&mut self.document, spec)
    }

    pub fn disable_all(&mut self) -> usize {
        spot::disable_all(&mut self.document)
    }

    pub fn disable_matching_report(&mut self, spec: &FilterSpec) -> Vec<SpotOutcome> {
        spot::disable_matching_report(&mut self.document, spec)
    }

    /// Compress uncompressed streams before saving
    pub fn compress(&mut self) {
        self.document.compress();
    }

    /// Serialize the document to `path`
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.document.save(path).map_err(|e| Error::write(path, e))?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    /// Serialize the document into memory
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.document
            .save_to(&mut buffer)
            .map_err(|e| Error::write("<memory>", e))?;
        Ok(buffer)
    }
}

impl From<Document> for PdfDocument {
    fn from(document: Document) -> Self {
        Self { document }
    }
}

/// Checks that a written file looks like a PDF and parses again
pub fn verify_output_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    if !bytes.starts_with(PDF_HEADER) {
        return Err(Error::Validation(format!(
            "{} is not a valid PDF",
            path.display()
        )));
    }
    Document::load_mem(&bytes).map_err(|e| Error::load(path, e))?;
    Ok(())
}
