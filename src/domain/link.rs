const EMBEDDED_PREFIX: &str = "data:image/";
const BASE64_MARKER: &str = "base64,";

/// True for links that carry their image inline as a data-URI.
pub fn is_embedded(link: &str) -> bool {
    link.starts_with(EMBEDDED_PREFIX)
}

/// The base64 payload of an embedded link, if it has one.
pub fn embedded_payload(link: &str) -> Option<&str> {
    link.find(BASE64_MARKER)
        .map(|start| &link[start + BASE64_MARKER.len()..])
}
