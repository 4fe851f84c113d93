/// Multipart form parsing shared by the API and the HTML form
use crate::error::{Result, ServerError};
use axum::http::{header, HeaderMap};
use bytes::Bytes;
use wish_core::types::ImageFile;

/// One decoded form part
#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File(ImageFile),
}

/// All parts of a multipart body, in the order they arrived
#[derive(Debug, Clone, Default)]
pub struct FormParts {
    parts: Vec<(String, FormValue)>,
}

impl FormParts {
    /// Decode a `multipart/form-data` body
    pub async fn parse(headers: &HeaderMap, body: Bytes) -> Result<Self> {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ServerError::BadRequest("Missing Content-Type".to_string()))?;

        if !content_type.starts_with("multipart/form-data") {
            return Err(ServerError::BadRequest(
                "Expected multipart/form-data".to_string(),
            ));
        }

        let boundary = multer::parse_boundary(content_type)?;

        // Convert Bytes to a stream for multer
        let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
        let mut multipart = multer::Multipart::new(stream, boundary);

        let mut parts = Vec::new();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            let file_name = field.file_name().map(str::to_string);

            let value = match file_name {
                Some(file_name) => {
                    let content_type = field.content_type().map(|m| m.to_string());
                    let data = field.bytes().await?;
                    FormValue::File(ImageFile::new(file_name, content_type, data))
                }
                None => FormValue::Text(field.text().await?),
            };

            parts.push((name, value));
        }

        Ok(Self { parts })
    }

    pub fn from_parts(parts: Vec<(String, FormValue)>) -> Self {
        Self { parts }
    }

    fn get(&self, name: &str) -> Option<&FormValue> {
        self.parts
            .iter()
            .find(|(part_name, _)| part_name == name)
            .map(|(_, value)| value)
    }

    /// First text value named `name`, or an empty string
    pub fn text(&self, name: &str) -> String {
        match self.get(name) {
            Some(FormValue::Text(text)) => text.clone(),
            _ => String::new(),
        }
    }

    /// Files named `{prefix}0`, `{prefix}1`, ... up to the first missing index.
    ///
    /// The index can never exceed the number of parts received.
    pub fn sequential_files(&self, prefix: &str) -> Result<Vec<ImageFile>> {
        let mut files = Vec::new();

        for index in 0..=self.parts.len() {
            let key = format!("{}{}", prefix, index);
            match self.get(&key) {
                None => break,
                Some(FormValue::File(file)) => files.push(file.clone()),
                Some(FormValue::Text(_)) => {
                    return Err(ServerError::BadRequest(format!("{} is not a file", key)));
                }
            }
        }

        Ok(files)
    }

    /// Every file part named `name`, in order.
    ///
    /// Browsers send one empty, nameless file part for a file input left
    /// blank; those are skipped.
    pub fn files(&self, name: &str) -> Vec<ImageFile> {
        self.parts
            .iter()
            .filter(|(part_name, _)| part_name == name)
            .filter_map(|(_, value)| match value {
                FormValue::File(file) if !(file.file_name.is_empty() && file.is_empty()) => {
                    Some(file.clone())
                }
                _ => None,
            })
            .collect()
    }
}
