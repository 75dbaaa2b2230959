//! Multipart form data support.
//!
//! RFC 7578 `multipart/form-data` bodies delimited by a browser boundary.
//!
//! # Example
//! ```ignore
//! use webmimic::http::boundary::BoundaryGenerator;
//! use webmimic::http::multipart::{Form, Part};
//!
//! let form = Form::new(BoundaryGenerator::WebKit)?
//!     .text("username", "user123")
//!     .part("file", Part::bytes(b"file content".as_slice()).file_name("doc.txt"));
//!
//! let content_type = form.content_type();
//! let body = form.into_body();
//! ```

use crate::base::error::ImpersonateError;
use crate::http::boundary::BoundaryGenerator;
use bytes::{BufMut, Bytes, BytesMut};
use std::borrow::Cow;

/// A multipart form.
#[derive(Debug)]
pub struct Form {
    boundary: String,
    fields: Vec<(Cow<'static, str>, Part)>,
}

impl Form {
    /// Empty form with a fresh boundary from `generator`.
    pub fn new(generator: BoundaryGenerator) -> Result<Self, ImpersonateError> {
        Ok(Self::with_boundary(generator.generate()?))
    }

    /// Empty form with a caller-supplied boundary.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            fields: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Add a text field.
    pub fn text<N, V>(self, name: N, value: V) -> Self
    where
        N: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        self.part(name, Part::text(value))
    }

    /// Add a custom part.
    pub fn part<N>(mut self, name: N, part: Part) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        self.fields.push((name.into(), part));
        self
    }

    /// Value for the request's `content-type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Exact length of [`Form::into_body`].
    pub fn content_length(&self) -> usize {
        if self.fields.is_empty() {
            return 0;
        }

        let mut length = 0usize;
        for (name, part) in &self.fields {
            // --boundary\r\n headers \r\n\r\n body \r\n
            length += 2 + self.boundary.len() + 2;
            length += part.format_headers(name).len();
            length += 4;
            length += part.data.len();
            length += 2;
        }
        // --boundary--\r\n
        length + 2 + self.boundary.len() + 4
    }

    /// Encode the form.
    pub fn into_body(self) -> Bytes {
        if self.fields.is_empty() {
            return Bytes::new();
        }

        let mut output = BytesMut::with_capacity(self.content_length());
        for (name, part) in &self.fields {
            output.put_slice(b"--");
            output.put_slice(self.boundary.as_bytes());
            output.put_slice(b"\r\n");
            output.put_slice(part.format_headers(name).as_bytes());
            output.put_slice(b"\r\n\r\n");
            output.put_slice(&part.data);
            output.put_slice(b"\r\n");
        }
        output.put_slice(b"--");
        output.put_slice(self.boundary.as_bytes());
        output.put_slice(b"--\r\n");

        output.freeze()
    }
}

/// A part of a multipart form.
#[derive(Debug, Clone)]
pub struct Part {
    data: Bytes,
    content_type: Option<Cow<'static, str>>,
    file_name: Option<Cow<'static, str>>,
}

impl Part {
    /// Text part. Browsers send plain fields without a content type.
    pub fn text<V>(value: V) -> Self
    where
        V: Into<Cow<'static, str>>,
    {
        Self {
            data: Bytes::from(value.into().into_owned()),
            content_type: None,
            file_name: None,
        }
    }

    /// Binary part.
    pub fn bytes<B>(data: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self {
            data: data.into(),
            content_type: None,
            file_name: None,
        }
    }

    pub fn content_type<S>(mut self, mime: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.content_type = Some(mime.into());
        self
    }

    /// Set the file name. File parts without an explicit type are sent as
    /// `application/octet-stream`.
    pub fn file_name<S>(mut self, name: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.file_name = Some(name.into());
        self
    }

    fn format_headers(&self, name: &str) -> String {
        let mut header = format!(
            "Content-Disposition: form-data; name=\"{}\"",
            escape_quotes(name)
        );

        if let Some(filename) = &self.file_name {
            header.push_str(&format!("; filename=\"{}\"", escape_quotes(filename)));
        }

        match (&self.content_type, &self.file_name) {
            (Some(mime), _) => header.push_str(&format!("\r\nContent-Type: {mime}")),
            (None, Some(_)) => header.push_str("\r\nContent-Type: application/octet-stream"),
            (None, None) => {}
        }

        header
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Browsers percent-encode quotes and line breaks in disposition parameters.
fn escape_quotes(s: &str) -> Cow<'_, str> {
    if s.contains(['"', '\r', '\n']) {
        Cow::Owned(
            s.replace('"', "%22")
                .replace('\r', "%0D")
                .replace('\n', "%0A"),
        )
    } else {
        Cow::Borrowed(s)
    }
}
