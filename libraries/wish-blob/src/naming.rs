//! Blob naming policy.
//!
//! A blob is named `{timestamp_millis}_{index}_{filename}`: the upload time,
//! the image's position in its submission, and a sanitized copy of the
//! client's filename.

/// Name used when the client's filename has nothing usable in it
const FALLBACK_NAME: &str = "image";

/// Build the pathname for the `index`-th image of a submission.
pub fn blob_pathname(timestamp_millis: i64, index: usize, original_name: &str) -> String {
    format!(
        "{}_{}_{}",
        timestamp_millis,
        index,
        sanitize_file_name(original_name)
    )
}

/// Keep only the final path component and replace anything outside
/// `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.chars().all(|c| c == '.') {
        FALLBACK_NAME.to_string()
    } else {
        cleaned
    }
}
