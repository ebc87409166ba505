use scraper::{ElementRef, Selector};
use url::Url;

use crate::error::{Error, Result};
use crate::lyrics::Document;

/// One lyric page found on the search results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub link: Url,
}

impl Candidate {
    pub fn new(title: impl Into<String>, link: Url) -> Self {
        Self {
            title: title.into(),
            link,
        }
    }
}

const RESULT_LINKS: &str = "table a";
const LYRICS_MARKER: &str = "div.ringtone";

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static css selector")
}

/// True if any path segment is exactly `lyrics`.
pub fn is_lyric_url(url: &Url) -> bool {
    url.path().split('/').any(|seg| seg == "lyrics")
}

/// Collect lyric page links from a search results page, in page order.
///
/// Hrefs are resolved against the page URL. Links to anything other than a
/// lyric page are dropped; an href that does not parse at all is an error.
pub fn extract_candidates(doc: &Document) -> Result<Vec<Candidate>> {
    let links = selector(RESULT_LINKS);
    let mut candidates = Vec::new();

    for anchor in doc.html().select(&links) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(link) = lyric_link(doc.url(), href)? else {
            continue;
        };
        candidates.push(Candidate::new(collapse_whitespace(anchor), link));
    }

    tracing::debug!(count = candidates.len(), url = %doc.url(), "extracted candidates");
    Ok(candidates)
}

/// Pull the lyric text out of a lyric page.
///
/// The lyrics sit in the first `div` sibling following the ringtone banner.
pub fn extract_lyrics(doc: &Document) -> Result<String> {
    let marker = selector(LYRICS_MARKER);
    let not_found = || Error::LyricsNotFound {
        url: doc.url().clone(),
    };

    let banner = doc.html().select(&marker).next().ok_or_else(not_found)?;
    let body = banner
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "div")
        .ok_or_else(not_found)?;

    let text: String = body.text().collect();
    Ok(text.trim().to_string())
}

/// Absolute lyric page URL for `href`, or `None` if it points elsewhere.
///
/// The segment test runs on the path the href itself carries, so a bare
/// `#fragment` or `?query` never inherits the page's own path.
fn lyric_link(base: &Url, href: &str) -> Result<Option<Url>> {
    let malformed = |source: url::ParseError| Error::MalformedLink {
        href: href.to_string(),
        source,
    };

    match Url::parse(href) {
        Ok(url) => return Ok(is_lyric_url(&url).then_some(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {}
        Err(source) => return Err(malformed(source)),
    }

    let path = href.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() || !path.split('/').any(|seg| seg == "lyrics") {
        return Ok(None);
    }
    base.join(href).map(Some).map_err(malformed)
}

fn collapse_whitespace(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(url: &str, body: &str) -> Document {
        Document::parse(Url::parse(url).unwrap(), body)
    }

    #[test]
    fn test_lyric_url_needs_exact_segment() {
        let ok = Url::parse("https://www.azlyrics.com/artist/song/lyrics/foo.html").unwrap();
        let bio = Url::parse("https://www.azlyrics.com/artist/song/bio.html").unwrap();
        let partial = Url::parse("https://www.azlyrics.com/lyricsx/foo.html").unwrap();

        assert!(is_lyric_url(&ok));
        assert!(!is_lyric_url(&bio));
        assert!(!is_lyric_url(&partial));
    }

    #[test]
    fn test_candidates_keep_page_order_and_drop_other_links() {
        let page = doc(
            "https://search.azlyrics.com/search.php?q=x",
            r#"<html><body>
            <a href="/lyrics/outside.html">Outside table</a>
            <table>
              <tr><td><a href="https://www.azlyrics.com/lyrics/band/first.html">1. <b>First</b>  Song</a></td></tr>
              <tr><td><a href="https://www.azlyrics.com/b/band.html">Band page</a></td></tr>
              <tr><td><a>No href</a></td></tr>
              <tr><td><a href="/lyrics/band/second.html">Second</a></td></tr>
            </table>
            </body></html>"#,
        );

        let found = extract_candidates(&page).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "1. First Song");
        assert_eq!(
            found[0].link.as_str(),
            "https://www.azlyrics.com/lyrics/band/first.html"
        );
        assert_eq!(found[1].title, "Second");
        assert_eq!(
            found[1].link.as_str(),
            "https://search.azlyrics.com/lyrics/band/second.html"
        );
    }

    #[test]
    fn test_malformed_href_is_fatal() {
        let page = doc(
            "https://search.azlyrics.com/search.php",
            r#"<table><tr><td><a href="http://[broken/lyrics/x.html">X</a></td></tr></table>"#,
        );

        let err = extract_candidates(&page).unwrap_err();
        assert!(matches!(err, Error::MalformedLink { .. }));
    }

    #[test]
    fn test_fragment_and_query_hrefs_do_not_inherit_page_path() {
        let page = doc(
            "https://mirror.example/lyrics/search.php?q=x",
            r##"<table><tr><td>
              <a href="#top">Back to top</a>
              <a href="?q=x&p=2">Next page</a>
              <a href="">Reload</a>
              <a href="other.html">Sibling</a>
              <a href="../lyrics/band/song.html">Song</a>
            </td></tr></table>"##,
        );

        let found = extract_candidates(&page).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Song");
        assert_eq!(
            found[0].link.as_str(),
            "https://mirror.example/lyrics/band/song.html"
        );
    }

    #[test]
    fn test_no_table_links_means_no_candidates() {
        let page = doc("https://search.azlyrics.com/search.php", "<p>Sorry, no results</p>");
        assert!(extract_candidates(&page).unwrap().is_empty());
    }

    #[test]
    fn test_lyrics_come_from_div_after_ringtone_banner() {
        let page = doc(
            "https://www.azlyrics.com/lyrics/band/song.html",
            r#"<div class="col">
              <div class="ringtone"><a href="/ring">Ringtone</a></div>
              <span>ad</span>
              <div>
                <!-- comment stays out -->
                First line<br>
                Second line<br>
              </div>
              <div>Not this one</div>
            </div>"#,
        );

        let text = extract_lyrics(&page).unwrap();
        assert!(text.starts_with("First line"));
        assert!(text.contains("Second line"));
        assert!(!text.contains("comment"));
        assert!(!text.contains("Not this one"));
    }

    #[test]
    fn test_page_without_banner_has_no_lyrics() {
        let page = doc("https://www.azlyrics.com/lyrics/a/b.html", "<div>Just text</div>");
        assert!(matches!(
            extract_lyrics(&page),
            Err(Error::LyricsNotFound { .. })
        ));
    }
}
