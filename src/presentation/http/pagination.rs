// src/presentation/http/pagination.rs
//! Discoverability headers for paged collections: RFC 5988 `Link` relations
//! plus the `Pagination-*` metadata headers.
use crate::{application::error::ApplicationError, domain::pagination::Page};
use axum::http::{
    HeaderMap, HeaderName, HeaderValue, Uri,
    header::{HOST, LINK},
};
use thiserror::Error;

pub static PAGINATION_TOTAL_COUNT: HeaderName = HeaderName::from_static("pagination-total-count");
pub static PAGINATION_PAGE: HeaderName = HeaderName::from_static("pagination-page");
pub static PAGINATION_PAGE_COUNT: HeaderName = HeaderName::from_static("pagination-page-count");
pub static PAGINATION_LIMIT: HeaderName = HeaderName::from_static("pagination-limit");

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// The URI of the current request, split so paging parameters can be
/// swapped out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    /// `scheme://host/path` when the host is known, `/path` otherwise.
    base: String,
    query: Vec<(String, String)>,
}

impl UriTemplate {
    pub fn from_parts(headers: &HeaderMap, uri: &Uri) -> Self {
        let host = headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .or_else(|| uri.authority().map(|a| a.as_str().to_owned()));

        let base = match host {
            Some(host) => {
                let scheme = headers
                    .get(FORWARDED_PROTO)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.split(',').next())
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .or_else(|| uri.scheme_str())
                    .unwrap_or("http");
                format!("{scheme}://{host}{}", uri.path())
            }
            None => uri.path().to_owned(),
        };

        let query = uri
            .query()
            .and_then(|raw| serde_urlencoded::from_str(raw).ok())
            .unwrap_or_default();

        Self { base, query }
    }

    /// The current URI with `page` and `size` removed and re-appended, in
    /// that order. Every other parameter keeps its position.
    pub fn with_page(&self, page: u32, size: u32) -> String {
        let mut pairs: Vec<(&str, String)> = self
            .query
            .iter()
            .filter(|(key, _)| key != "page" && key != "size")
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        pairs.push(("page", page.to_string()));
        pairs.push(("size", size.to_string()));

        let query = serde_urlencoded::to_string(&pairs).unwrap_or_default();
        format!("{}?{query}", self.base)
    }

    /// The URI of a member of this collection, e.g. for `Location`.
    pub fn child(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{id}", self.base.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Next,
    Prev,
    First,
    Last,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

/// Position of one page inside its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub size: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

impl<T> From<&Page<T>> for PageWindow {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            size: page.size,
            total_count: page.total_count,
            total_pages: page.total_pages,
        }
    }
}

impl PageWindow {
    /// Past the last page. Page 0 of an empty collection is still in range.
    pub fn is_out_of_range(&self) -> bool {
        self.page > 0 && self.page >= self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_first(&self) -> bool {
        self.has_prev()
    }

    pub fn has_last(&self) -> bool {
        self.total_pages > 1 && self.has_next()
    }

    /// Present relations with their target page, in `Link` order.
    pub fn relations(&self) -> Vec<(Relation, u32)> {
        let mut relations = Vec::with_capacity(4);
        if self.has_next() {
            relations.push((Relation::Next, self.page + 1));
        }
        if self.has_prev() {
            relations.push((Relation::Prev, self.page - 1));
        }
        if self.has_first() {
            relations.push((Relation::First, 0));
        }
        if self.has_last() {
            relations.push((Relation::Last, self.total_pages - 1));
        }
        relations
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page {page} is out of range ({total_pages} pages)")]
pub struct PageOutOfRange {
    pub page: u32,
    pub total_pages: u32,
}

impl From<PageOutOfRange> for ApplicationError {
    fn from(_: PageOutOfRange) -> Self {
        ApplicationError::not_found()
    }
}

/// `<uri>; rel="name"` entries joined by `, `, or `None` when the page has
/// no neighbours.
pub fn link_header(template: &UriTemplate, window: &PageWindow) -> Option<String> {
    let links: Vec<String> = window
        .relations()
        .into_iter()
        .map(|(relation, page)| {
            format!(
                "<{}>; rel=\"{}\"",
                template.with_page(page, window.size),
                relation.as_str()
            )
        })
        .collect();

    (!links.is_empty()).then(|| links.join(", "))
}

pub fn pagination_headers(
    template: &UriTemplate,
    window: &PageWindow,
) -> Result<HeaderMap, PageOutOfRange> {
    if window.is_out_of_range() {
        return Err(PageOutOfRange {
            page: window.page,
            total_pages: window.total_pages,
        });
    }

    let mut headers = HeaderMap::new();
    headers.insert(PAGINATION_TOTAL_COUNT.clone(), window.total_count.into());
    headers.insert(PAGINATION_PAGE.clone(), window.page.into());
    headers.insert(PAGINATION_PAGE_COUNT.clone(), window.total_pages.into());
    headers.insert(PAGINATION_LIMIT.clone(), window.size.into());

    if let Some(link) = link_header(template, window) {
        match HeaderValue::from_str(&link) {
            Ok(value) => {
                headers.insert(LINK, value);
            }
            Err(err) => tracing::warn!(error = %err, "dropping unrepresentable Link header"),
        }
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(uri: &str) -> UriTemplate {
        UriTemplate::from_parts(&HeaderMap::new(), &uri.parse().unwrap())
    }

    fn window(page: u32, size: u32, total_count: u64) -> PageWindow {
        let total_pages = u32::try_from(total_count.div_ceil(u64::from(size))).unwrap();
        PageWindow {
            page,
            size,
            total_count,
            total_pages,
        }
    }

    #[test]
    fn first_page_links_next_and_last_only() {
        let link = link_header(&template("/api/cars?page=0&size=2"), &window(0, 2, 5)).unwrap();
        assert_eq!(
            link,
            "</api/cars?page=1&size=2>; rel=\"next\", </api/cars?page=2&size=2>; rel=\"last\""
        );
    }

    #[test]
    fn middle_page_links_every_relation_in_order() {
        let link = link_header(&template("/api/cars?page=1&size=2"), &window(1, 2, 5)).unwrap();
        assert_eq!(
            link,
            "</api/cars?page=2&size=2>; rel=\"next\", \
             </api/cars?page=0&size=2>; rel=\"prev\", \
             </api/cars?page=0&size=2>; rel=\"first\", \
             </api/cars?page=2&size=2>; rel=\"last\""
        );
    }

    #[test]
    fn last_page_links_back_only() {
        let relations: Vec<_> = window(2, 2, 5).relations().into_iter().map(|(r, _)| r).collect();
        assert_eq!(relations, [Relation::Prev, Relation::First]);
    }

    #[test]
    fn single_page_has_no_link_header() {
        let headers = pagination_headers(&template("/api/cars"), &window(0, 20, 5)).unwrap();
        assert!(headers.get(LINK).is_none());
        assert_eq!(headers[&PAGINATION_PAGE_COUNT], "1");
    }

    #[test]
    fn paging_parameters_move_to_the_end() {
        let uri = template("/api/cars?size=2&brand=Fiat&page=0&model=Punto");
        assert_eq!(uri.with_page(1, 2), "/api/cars?brand=Fiat&model=Punto&page=1&size=2");
    }

    #[test]
    fn absolute_uri_uses_host_and_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("cars.example"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https"));
        let uri = UriTemplate::from_parts(&headers, &"/api/cars?page=0".parse().unwrap());

        assert_eq!(uri.with_page(0, 20), "https://cars.example/api/cars?page=0&size=20");
        assert_eq!(uri.child(6), "https://cars.example/api/cars/6");
    }

    #[test]
    fn metadata_headers_are_always_present() {
        let headers = pagination_headers(&template("/api/cars"), &window(0, 2, 5)).unwrap();
        assert_eq!(headers[&PAGINATION_TOTAL_COUNT], "5");
        assert_eq!(headers[&PAGINATION_PAGE], "0");
        assert_eq!(headers[&PAGINATION_PAGE_COUNT], "3");
        assert_eq!(headers[&PAGINATION_LIMIT], "2");
    }

    #[test]
    fn out_of_range_rules() {
        assert!(window(3, 2, 5).is_out_of_range());
        assert!(!window(2, 2, 5).is_out_of_range());
        assert!(!window(0, 20, 0).is_out_of_range());
        assert!(window(1, 20, 0).is_out_of_range());
        assert!(pagination_headers(&template("/api/cars"), &window(3, 2, 5)).is_err());
    }

    #[test]
    fn relation_flags_follow_position() {
        for total in 0..7u64 {
            let w = window(0, 2, total);
            for page in 0..w.total_pages {
                let w = PageWindow { page, ..w };
                assert_eq!(w.has_next(), page + 1 < w.total_pages);
                assert_eq!(w.has_first(), page > 0);
                assert_eq!(w.has_last(), w.total_pages > 1 && w.has_next());
            }
        }
    }
}
