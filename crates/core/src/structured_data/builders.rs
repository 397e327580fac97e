use serde::Serialize;
use url::Url;

use super::error::{Result, StructuredDataError};
use super::types::{
    Article, ArticleMeta, Author, BreadcrumbItem, BreadcrumbList, ListItem, Organization,
    PageMeta, Person, SiteConfig, WebPage, WebSiteRef, SCHEMA_CONTEXT,
};

/// Resolves `path` against the site's base URL. Absolute URLs are returned as they are.
pub fn absolute_url(site: &SiteConfig, path: &str) -> Result<Url> {
    match Url::parse(path) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            site.base_url
                .join(path)
                .map_err(|e| StructuredDataError::InvalidUrl {
                    path: path.to_string(),
                    reason: e.to_string(),
                })
        }
        Err(e) => Err(StructuredDataError::InvalidUrl {
            path: path.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// The site's `Organization` node.
pub fn organization(site: &SiteConfig) -> Result<Organization> {
    Ok(Organization {
        context: Some(SCHEMA_CONTEXT),
        schema_type: "Organization",
        name: site.name.clone(),
        url: site.base_url.to_string(),
        logo: optional_url(site, site.logo.as_deref())?,
    })
}

/// A `WebPage` node for a CMS page.
pub fn web_page(site: &SiteConfig, page: &PageMeta) -> Result<WebPage> {
    Ok(WebPage {
        context: SCHEMA_CONTEXT,
        schema_type: "WebPage",
        name: page.title.clone(),
        url: absolute_url(site, &page.path)?.to_string(),
        description: page.description.clone(),
        image: optional_url(site, page.image.as_deref())?,
        in_language: page.locale.clone(),
        is_part_of: WebSiteRef {
            schema_type: "WebSite",
            name: site.name.clone(),
            url: site.base_url.to_string(),
        },
    })
}

/// An `Article` node for a blog post.
///
/// Without an author name the organization is credited as author. `dateModified`
/// defaults to the publish date.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use contentkit_core::structured_data::{article, ArticleMeta, SiteConfig};
/// use url::Url;
///
/// let site = SiteConfig {
///     name: "Acme".to_string(),
///     base_url: Url::parse("https://acme.test").unwrap(),
///     logo: None,
/// };
/// let meta = ArticleMeta {
///     headline: "Launch day".to_string(),
///     path: "/blog/launch".to_string(),
///     published_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
///     modified_at: None,
///     description: None,
///     image: None,
///     author_name: Some("Ada".to_string()),
///     keywords: vec![],
/// };
///
/// let node = article(&site, &meta).unwrap();
/// assert_eq!(node.url, "https://acme.test/blog/launch");
/// assert_eq!(node.date_modified, node.date_published);
/// ```
pub fn article(site: &SiteConfig, meta: &ArticleMeta) -> Result<Article> {
    let mut publisher = organization(site)?;
    publisher.context = None;

    let author = match &meta.author_name {
        Some(name) => Author::Person(Person {
            schema_type: "Person",
            name: name.clone(),
        }),
        None => Author::Organization(publisher.clone()),
    };

    let url = absolute_url(site, &meta.path)?.to_string();
    let keywords = (!meta.keywords.is_empty()).then(|| meta.keywords.join(", "));

    Ok(Article {
        context: SCHEMA_CONTEXT,
        schema_type: "Article",
        headline: meta.headline.clone(),
        main_entity_of_page: url.clone(),
        url,
        date_published: meta.published_at,
        date_modified: meta.modified_at.unwrap_or(meta.published_at),
        author,
        publisher,
        description: meta.description.clone(),
        image: optional_url(site, meta.image.as_deref())?,
        keywords,
    })
}

/// A `BreadcrumbList` node with 1-based positions.
pub fn breadcrumb_list(site: &SiteConfig, items: &[BreadcrumbItem]) -> Result<BreadcrumbList> {
    let item_list_element = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Ok(ListItem {
                schema_type: "ListItem",
                position: index + 1,
                name: item.name.clone(),
                item: absolute_url(site, &item.path)?.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BreadcrumbList {
        context: SCHEMA_CONTEXT,
        schema_type: "BreadcrumbList",
        item_list_element,
    })
}

/// Serializes a node for embedding in a `<script type="application/ld+json">` element.
///
/// `<` is written as a JSON unicode escape so that text content cannot close the
/// script element.
pub fn to_json_ld<T: Serialize>(node: &T) -> Result<String> {
    let json =
        serde_json::to_string(node).map_err(|e| StructuredDataError::Serialization(e.to_string()))?;
    Ok(json.replace('<', "\\u003c"))
}

fn optional_url(site: &SiteConfig, path: Option<&str>) -> Result<Option<String>> {
    path.map(|path| absolute_url(site, path).map(|url| url.to_string()))
        .transpose()
}
