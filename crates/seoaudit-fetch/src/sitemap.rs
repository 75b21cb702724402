//! Sitemap retrieval and `<loc>` parsing.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::client::PageClient;
use crate::error::FetchError;

/// Fetch `{site_root}/sitemap.xml` and return up to `max_pages` page URLs.
///
/// Only URLs under `site_root` are kept; external entries are dropped.
///
/// # Errors
///
/// Returns [`FetchError`] if the sitemap cannot be fetched or its XML is
/// malformed.
pub async fn fetch_sitemap_urls(
    client: &PageClient,
    site_root: &str,
    max_pages: usize,
) -> Result<Vec<String>, FetchError> {
    let site_root = site_root.trim_end_matches('/');
    let sitemap_url = format!("{site_root}/sitemap.xml");
    let page = client.fetch_page(&sitemap_url).await?;
    let urls = parse_sitemap(&page.body, site_root, max_pages)?;
    tracing::info!(
        site = site_root,
        count = urls.len(),
        "collected sitemap URLs"
    );
    Ok(urls)
}

/// Parse a sitemap XML body into page URLs, in document order.
///
/// # Errors
///
/// Returns [`FetchError::Xml`] if the XML is malformed.
pub fn parse_sitemap(
    xml: &str,
    site_root: &str,
    max_pages: usize,
) -> Result<Vec<String>, FetchError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut in_loc = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                in_loc = e.name().as_ref() == b"loc";
            }
            Event::End(_) => {
                in_loc = false;
            }
            Event::Text(e) => {
                if in_loc {
                    match e.unescape() {
                        Ok(text) => {
                            if push_site_url(&mut urls, text.trim(), site_root, max_pages) {
                                break;
                            }
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "dropping unescapable <loc> entry");
                        }
                    }
                }
            }
            // Some generators wrap <loc> values in CDATA.
            Event::CData(e) => {
                if in_loc {
                    let text = String::from_utf8_lossy(e.as_ref());
                    if push_site_url(&mut urls, text.trim(), site_root, max_pages) {
                        break;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(urls)
}

/// Keep `loc` when it is under the site root; returns true once the cap is
/// reached.
fn push_site_url(urls: &mut Vec<String>, loc: &str, site_root: &str, max_pages: usize) -> bool {
    if loc.starts_with(site_root) {
        urls.push(loc.to_string());
    }
    urls.len() >= max_pages
}
