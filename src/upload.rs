//! File Upload
//!
//! Turns selected files into displayable object URLs without reading them.

use web_sys::{HtmlInputElement, Url};

/// One object URL per selected file, in selection order.
/// Clears the input so the same files can be picked again.
pub fn object_urls(input: &HtmlInputElement) -> Vec<String> {
    let Some(files) = input.files() else {
        return Vec::new();
    };

    let urls = (0..files.length())
        .filter_map(|i| files.get(i))
        .filter_map(|file| match Url::create_object_url_with_blob(&file) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("could not create URL for {}: {:?}", file.name(), e);
                None
            }
        })
        .collect();

    input.set_value("");
    urls
}
