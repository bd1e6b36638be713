use crate::ImagePayload;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("data url does not start with `data:`")]
    MissingScheme,
    #[error("data url has no `,` separating header and payload")]
    MissingSeparator,
    #[error("data url is not base64 encoded")]
    NotBase64,
    #[error("data url carries no payload")]
    EmptyPayload,
}

/// A borrowed view of a `data:<mime>;base64,<payload>` string as produced by
/// the browser's file reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUrl<'a> {
    mime: &'a str,
    payload: &'a str,
}

impl<'a> DataUrl<'a> {
    pub fn parse(url: &'a str) -> Result<Self, DataUrlError> {
        let rest = url.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingSeparator)?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or(DataUrlError::NotBase64)?;
        if payload.is_empty() {
            return Err(DataUrlError::EmptyPayload);
        }
        Ok(Self { mime, payload })
    }

    /// Media type from the header, empty when the reader could not tell.
    pub fn mime(&self) -> &'a str {
        self.mime
    }

    pub fn payload(&self) -> &'a str {
        self.payload
    }

    pub fn to_payload(&self) -> ImagePayload {
        ImagePayload::from(self.payload.to_string())
    }
}
