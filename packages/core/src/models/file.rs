//! File model traits.
//!
//! File nodes keep their payload on the `jcr:data` property of their
//! `jcr:content` child. Concrete file models implement [`FileModel`] (and
//! delegate their property reads to the content child, page style); the
//! [`FileType`] descriptor they supply drives the stricter adaptation checks
//! in [`file_utils`](crate::utils::file_utils).

use std::io::{Cursor, Read};

use serde_json::Value;
use tracing::error;

use crate::models::{ModelAdaptionError, ResourceModel};
use crate::repository::{JCR_DATA, JCR_MIMETYPE};
use crate::utils::file_utils;

/// Descriptor of a pluggable file type.
///
/// Supplies the extension and MIME expectations a concrete file model is
/// checked against during file adaptation.
pub trait FileType {
    /// File extension, without the leading dot.
    fn extension(&self) -> &str;

    /// Content type of this file's rendered output.
    fn output_content_type(&self) -> &str;

    /// MIME types (read from `jcr:mimeType`) this file type can interpret.
    fn readable_content_types(&self) -> Vec<String>;

    /// Display name of the file type.
    fn name(&self) -> &str;
}

/// Model over a file node.
///
/// Content accessors distinguish "file has no content" (an error) from
/// "file has empty content" (an empty but valid stream).
pub trait FileModel: ResourceModel {
    /// File type descriptor for this model.
    fn file_type(&self) -> &dyn FileType;

    /// Extension of the file name: the part after the final `.`, or empty.
    fn extension(&self) -> String {
        self.name()
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_string())
            .unwrap_or_default()
    }

    /// MIME type from the `jcr:mimeType` property, or empty string.
    fn mime_type(&self) -> String {
        self.string_property(JCR_MIMETYPE)
            .unwrap_or_default()
            .to_string()
    }

    /// Byte content stream read from the `jcr:data` property.
    ///
    /// # Errors
    ///
    /// Returns [`ModelAdaptionError::FileReadError`] when the property is
    /// absent or not string-valued. An existing empty property yields an
    /// empty stream, not an error.
    fn content_stream(&self) -> Result<Cursor<Vec<u8>>, ModelAdaptionError> {
        match self.properties().get(JCR_DATA) {
            Some(Value::String(data)) => Ok(Cursor::new(data.clone().into_bytes())),
            _ => Err(ModelAdaptionError::file_read(
                self.path(),
                "No file content found.",
            )),
        }
    }

    /// File content as a string, lines joined with `\n`.
    ///
    /// A trailing newline in the stored content is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ModelAdaptionError::FileReadError`] when the content stream
    /// cannot be opened or is not valid UTF-8.
    fn content_string(&self) -> Result<String, ModelAdaptionError> {
        let mut stream = self.content_stream()?;
        let mut raw = String::new();
        stream
            .read_to_string(&mut raw)
            .map_err(|err| ModelAdaptionError::file_read(self.path(), err.to_string()))?;
        Ok(raw.lines().collect::<Vec<_>>().join("\n"))
    }

    /// Human-readable content size, or empty string when unreadable.
    fn file_size(&self) -> String {
        match self.content_stream() {
            Ok(stream) => file_utils::readable_file_size(stream.get_ref().len() as u64),
            Err(err) => {
                error!(path = self.path(), %err, "Unable to retrieve file size");
                String::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;
