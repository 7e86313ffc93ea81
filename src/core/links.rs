//! Extraction of wiki links from page HTML.
//!
//! Only anchors inside the article body element are considered, so navigation
//! menus, footers and sidebars do not pull the crawl off into unrelated pages.
//! The scan is local to that element: find its opening tag, walk forward to the
//! matching close tag of the same name, then collect `href`s within.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

const WIKI_PREFIX: &str = "/wiki/";
const LORE_PREFIX: &str = "Lore/";

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?\shref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
        .expect("anchor pattern is valid")
});

static ELEMENT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)([a-z][a-z0-9]*)\b[^>]*>").expect("tag pattern is valid")
});

/// Link scanner bound to one article element id. Build once per crawl.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    content_id: String,
    open: Option<Regex>,
}

impl LinkExtractor {
    pub fn new(content_id: &str) -> Self {
        let open = Regex::new(&format!(
            r#"(?is)<([a-z][a-z0-9]*)\b[^>]*?\sid\s*=\s*(?:"{id}"|'{id}')[^>]*>"#,
            id = regex::escape(content_id)
        ))
        .ok();

        Self {
            content_id: content_id.to_string(),
            open,
        }
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn extract(&self, html: &str) -> BTreeSet<String> {
        let Some(body) = self.find_content(html) else {
            tracing::warn!(
                "No element with id '{}' found, page has no outgoing links",
                self.content_id
            );
            return BTreeSet::new();
        };

        anchor_hrefs(body)
            .filter_map(|href| href.strip_prefix(WIKI_PREFIX).map(str::to_string))
            .filter(|link| !link.contains(':'))
            .map(|link| {
                let link = remove_link_subsection(&link);
                let link = remove_link_query(link);
                let link = remove_lore_prefix(link);
                match urlencoding::decode(link) {
                    Ok(decoded) => decoded.into_owned(),
                    Err(_) => link.to_string(),
                }
            })
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Inner HTML of the content element, up to its matching close tag.
    /// An element that is never closed extends to the end of the document.
    fn find_content<'a>(&self, html: &'a str) -> Option<&'a str> {
        let caps = self.open.as_ref()?.captures(html)?;
        let opening = caps.get(0)?;
        let tag = caps.get(1)?.as_str();
        let start = opening.end();

        if opening.as_str().ends_with("/>") {
            return Some("");
        }

        let mut depth = 1usize;
        for m in ELEMENT_TAG.captures_iter(&html[start..]) {
            if !m.get(2)?.as_str().eq_ignore_ascii_case(tag) {
                continue;
            }
            let whole = m.get(0)?;
            if m.get(1).is_some_and(|slash| !slash.as_str().is_empty()) {
                depth -= 1;
                if depth == 0 {
                    return Some(&html[start..start + whole.start()]);
                }
            } else if !whole.as_str().ends_with("/>") {
                depth += 1;
            }
        }

        Some(&html[start..])
    }
}

/// One-off extraction; crawls should reuse a [`LinkExtractor`].
pub fn parse_outgoing_links(html: &str, content_id: &str) -> BTreeSet<String> {
    LinkExtractor::new(content_id).extract(html)
}

pub fn remove_link_subsection(link: &str) -> &str {
    link.split('#').next().unwrap_or(link)
}

fn remove_link_query(link: &str) -> &str {
    link.split('?').next().unwrap_or(link)
}

pub fn remove_lore_prefix(page_name: &str) -> &str {
    page_name.strip_prefix(LORE_PREFIX).unwrap_or(page_name)
}

/// Page names use underscores where titles use spaces.
pub fn normalize_page_name(name: &str) -> String {
    name.trim().replace(' ', "_")
}

fn anchor_hrefs(fragment: &str) -> impl Iterator<Item = String> + '_ {
    ANCHOR_HREF.captures_iter(fragment).filter_map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| decode_entities(m.as_str()))
    })
}

fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
