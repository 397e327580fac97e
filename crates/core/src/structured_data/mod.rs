//! schema.org JSON-LD metadata for rendered pages.

mod builders;
mod error;
mod types;

pub use builders::{absolute_url, article, breadcrumb_list, organization, to_json_ld, web_page};
pub use error::{Result, StructuredDataError};
pub use types::{
    Article, ArticleMeta, Author, BreadcrumbItem, BreadcrumbList, ListItem, Organization,
    PageMeta, Person, SiteConfig, WebPage, WebSiteRef, SCHEMA_CONTEXT,
};
