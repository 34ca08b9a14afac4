//! Reusable multipart form-data payloads.
//!
//! `reqwest::multipart::Form` is single-use, but a request may be dispatched
//! several times by the retry loop. `FormPayload` keeps the fields in an
//! owned, cloneable shape and materializes a fresh `Form` per attempt.

use bytes::Bytes;

use crate::error::{Error, ErrorKind, Result};

/// An ordered set of text fields and file attachments for a
/// `multipart/form-data` request.
#[derive(Debug, Clone, Default)]
pub struct FormPayload {
    texts: Vec<(String, String)>,
    files: Vec<FilePart>,
}

/// A file attachment inside a [`FormPayload`].
///
/// Mirrors what a picker hands over: a name, a content type, and the raw
/// bytes, treated as an opaque attachment.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name the file is attached under.
    pub field: String,
    /// File name reported in the part's content disposition.
    pub file_name: String,
    /// MIME type of the file.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Bytes,
}

impl FormPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.texts.push((name.into(), value.into()));
        self
    }

    /// Append a file attachment.
    pub fn file(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        self.files.push(FilePart {
            field: field.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        });
        self
    }

    /// Returns true if the payload has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.files.is_empty()
    }

    /// Text fields in insertion order.
    pub fn text_fields(&self) -> &[(String, String)] {
        &self.texts
    }

    /// File attachments in insertion order.
    pub fn file_parts(&self) -> &[FilePart] {
        &self.files
    }

    /// Build a fresh `reqwest` form from this payload.
    pub(crate) fn to_form(&self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();

        for (name, value) in &self.texts {
            form = form.text(name.clone(), value.clone());
        }

        for file in &self.files {
            let part = reqwest::multipart::Part::bytes(file.bytes.to_vec())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)
                .map_err(|e| {
                    Error::with_source(
                        ErrorKind::Multipart(format!(
                            "invalid content type {:?} for field {:?}",
                            file.content_type, file.field
                        )),
                        e,
                    )
                })?;
            form = form.part(file.field.clone(), part);
        }

        Ok(form)
    }
}
