//! Icon link discovery.
//!
//! The document is run through an HTML tokenizer; no tree is built. Only
//! `<link>` and `<meta>` start tags (or their self-closing forms) are
//! inspected, and only for the handful of attributes that point at icons.
//! Script, style and the other raw-text elements are skipped as text, so
//! markup quoted inside them never becomes a candidate.

use std::cell::RefCell;
use std::io::{BufRead, Read};

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use thiserror::Error;

/// The document could not be read. Malformed markup is never an error.
#[derive(Error, Debug)]
#[error("reading html: {source}")]
pub struct ParseError {
    #[from]
    source: std::io::Error,
}

/// Collect candidate icon links from an HTML document, in document order.
///
/// Links are returned exactly as written in the markup (after entity
/// decoding); resolving them against the page URL is the caller's job.
/// Broken markup ends or skips over nothing that came before it: whatever
/// was found up to that point is returned.
pub fn extract_links<R: BufRead>(mut input: R) -> Result<Vec<String>, ParseError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;

    let queue = BufferQueue::default();
    queue.push_back(StrTendril::from_slice(&String::from_utf8_lossy(&raw)));

    let tokenizer = Tokenizer::new(LinkSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&queue);
    tokenizer.end();

    Ok(tokenizer.sink.links.take())
}

#[derive(Default)]
struct LinkSink {
    links: RefCell<Vec<String>>,
}

impl TokenSink for LinkSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let Token::TagToken(tag) = token else {
            return TokenSinkResult::Continue;
        };
        if tag.kind != TagKind::StartTag {
            return TokenSinkResult::Continue;
        }

        let found = match &*tag.name {
            "link" => icon_from_link(&Attrs::read(&tag)),
            "meta" => icon_from_meta(&Attrs::read(&tag)),
            _ => None,
        };
        if let Some(link) = found {
            tracing::trace!(link = %link, "icon candidate");
            self.links.borrow_mut().push(link);
        }

        if tag.self_closing {
            return TokenSinkResult::Continue;
        }
        match &*tag.name {
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" | "iframe" | "noembed" | "noframes" | "noscript" | "xmp" => {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
            "plaintext" => TokenSinkResult::Plaintext,
            _ => TokenSinkResult::Continue,
        }
    }
}

/// The attributes of one tag that matter for icon discovery.
#[derive(Debug, Default)]
struct Attrs {
    href: Option<String>,
    rel: Option<String>,
    property: Option<String>,
    content: Option<String>,
}

impl Attrs {
    fn read(tag: &Tag) -> Self {
        let mut attrs = Attrs::default();
        for attr in &tag.attrs {
            let slot = match &*attr.name.local {
                "href" => &mut attrs.href,
                "rel" => &mut attrs.rel,
                "property" => &mut attrs.property,
                "content" => &mut attrs.content,
                _ => continue,
            };
            // First occurrence wins, as in browsers.
            if slot.is_none() {
                *slot = Some(attr.value.to_string());
            }
        }
        attrs
    }
}

fn icon_from_link(attrs: &Attrs) -> Option<String> {
    if let Some(href) = &attrs.href {
        if href.contains("icon.") && (href.ends_with(".png") || href.ends_with(".jpg")) {
            return Some(href.clone());
        }
    }
    let rel = attrs.rel.as_deref()?;
    if rel.contains("apple-touch") || rel.contains("icon") {
        return attrs.href.clone();
    }
    None
}

fn icon_from_meta(attrs: &Attrs) -> Option<String> {
    if attrs.property.as_deref() != Some("og:image") {
        return None;
    }
    attrs.content.clone()
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use super::*;

    fn extract(doc: &str) -> Vec<String> {
        extract_links(doc.as_bytes()).unwrap()
    }

    #[test]
    fn test_links_in_document_order() {
        let doc = r#"
<html>
	<head>
		<link href="/icon.png">
		<link href="/icon.jpg">
		<link rel="icon" href="/any.ico">
		<link rel="apple-touch" href="data:image/png;base64,embeddedimage">
		<meta property="og:image" content="/this/is/an/icon.jpg">
		<meta property="og:image" content="/this/is/an/icon-2.jpg">
		<meta property="og:image" content="/images/fb_icon_325x325.png">
		<link href="/icon.mp4">
	</head>
</html>"#;

        assert_eq!(
            extract(doc),
            vec![
                "/icon.png",
                "/icon.jpg",
                "/any.ico",
                "data:image/png;base64,embeddedimage",
                "/this/is/an/icon.jpg",
                "/this/is/an/icon-2.jpg",
                "/images/fb_icon_325x325.png",
            ]
        );
    }

    #[test]
    fn test_ignores_unrelated_links() {
        let doc = r#"<head>
            <link rel="stylesheet" href="/site.css">
            <link rel="icon">
            <meta property="og:title" content="Hello">
            <meta name="og:image" content="/wrong-attr.png">
            <a href="/icon.png">not a link tag</a>
        </head>"#;

        assert!(extract(doc).is_empty());
    }

    #[test]
    fn test_emits_each_tag_once() {
        let doc = r#"<link rel="icon" href="/favicon-icon.png">"#;
        assert_eq!(extract(doc), vec!["/favicon-icon.png"]);
    }

    #[test]
    fn test_html_tolerance() {
        let doc = r#"<!DOCTYPE html>
<HTML>
<HEAD>
<META charset=utf-8>
<LINK REL="Shortcut icon" HREF="/favicon.ico">
<link rel=apple-touch-icon href=/touch.png>
<link rel="icon" href="/static/icon.png"/>
</body></div>
<meta property="og:image" content="https://cdn.example.com/og.png?a=1&amp;b=2">
</HEAD>
<body><p>unclosed<br></body>
</HTML>"#;

        assert_eq!(
            extract(doc),
            vec![
                "/favicon.ico",
                "/touch.png",
                "/static/icon.png",
                "https://cdn.example.com/og.png?a=1&b=2",
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_stray_lt_at_end_keeps_links() {
        let doc = r#"<head><link rel="icon" href="/a.ico"></head><p>a <"#;
        assert_eq!(extract(doc), vec!["/a.ico"]);
    }

    #[test]
    fn test_unterminated_comment_keeps_links() {
        let doc = r#"<head><link rel="icon" href="/a.ico"><!-- oops"#;
        assert_eq!(extract(doc), vec!["/a.ico"]);
    }

    #[test]
    fn test_conditional_comment_markup() {
        let doc = r#"<head><![if !IE]><link rel="icon" href="/a.ico"><![endif]></head>"#;
        assert_eq!(extract(doc), vec!["/a.ico"]);
    }

    #[test]
    fn test_unclosed_trailing_tag_keeps_earlier_links() {
        let doc = r#"<link rel="icon" href="/a.ico"><link rel="icon" href="/b.ico""#;
        assert_eq!(extract(doc), vec!["/a.ico"]);
    }

    #[test]
    fn test_script_and_style_are_text() {
        let doc = r#"<head><script>document.write('<link rel="icon" href="/fake.png">')</script><link rel="icon" href="/real.ico"></head>"#;
        assert_eq!(extract(doc), vec!["/real.ico"]);

        let doc = r#"<style>/* <meta property="og:image" content="/fake.png"> */</style>
<noscript><link rel="icon" href="/hidden.png"></noscript>
<link rel="icon" href="/real.ico">"#;
        assert_eq!(extract(doc), vec!["/real.ico"]);
    }

    #[test]
    fn test_invalid_utf8_is_not_fatal() {
        let mut doc = b"<p>\xff\xfe</p>".to_vec();
        doc.extend_from_slice(br#"<link rel="icon" href="/a.ico">"#);
        assert_eq!(extract_links(doc.as_slice()).unwrap(), vec!["/a.ico"]);
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream reset"))
        }
    }

    #[test]
    fn test_read_failure_is_parse_error() {
        let err = extract_links(io::BufReader::new(BrokenReader)).unwrap_err();
        assert_eq!(err.to_string(), "reading html: stream reset");
    }
}
