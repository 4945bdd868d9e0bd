//! In-memory binary payloads.

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::LangException;

/// A binary payload with a declared content type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blob {
    content_type: String,
    data: Bytes,
}

impl Blob {
    pub fn new(data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Read a payload to completion from an async source.
    ///
    /// A failed read rejects; partial data never escapes.
    pub async fn from_reader<R>(
        mut reader: R,
        content_type: impl Into<String>,
    ) -> Result<Self, LangException>
    where
        R: AsyncRead + Unpin,
    {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).await.map_err(|e| {
            LangException::network("failed to read binary payload").with_detail(e.to_string())
        })?;
        Ok(Self::new(data, content_type))
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
