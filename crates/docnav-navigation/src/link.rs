//! Navigation link title resolution.
//!
//! Renders a navigation list entry as a `{title, permalink}` link, using
//! document metadata supplied by the documents subsystem. Title precedence
//! for document targets: front-matter `pagination_label`, then front-matter
//! `sidebar_label`, then the sidebar item's own label, then the document
//! title. First defined wins; an explicit empty string counts as defined.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use docnav_sidebars::{CategoryLink, NavigationItem};

use crate::error::SidebarError;

/// Front-matter fields consulted for navigation titles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocFrontMatter {
    /// Overrides the title shown in previous/next pagination links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_label: Option<String>,
    /// Overrides the title shown in sidebar entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_label: Option<String>,
}

/// Lightweight document metadata, owned by the documents subsystem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMetadata {
    /// Document title.
    pub title: String,
    /// Document permalink.
    pub permalink: String,
    /// Relevant front-matter fields.
    #[serde(default)]
    pub front_matter: DocFrontMatter,
}

/// A resolved navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationLink {
    /// Display title.
    pub title: String,
    /// Link target.
    pub permalink: String,
}

/// Resolve the navigation link for a document.
///
/// `sidebar_item_label` is the label of the sidebar entry pointing at the
/// document, when one exists; it ranks below the doc's own front-matter
/// labels and above the document title.
#[must_use]
pub fn to_doc_navigation_link(
    doc: &DocMetadata,
    sidebar_item_label: Option<&str>,
) -> NavigationLink {
    let title = doc
        .front_matter
        .pagination_label
        .as_deref()
        .or(doc.front_matter.sidebar_label.as_deref())
        .or(sidebar_item_label)
        .unwrap_or(&doc.title);

    NavigationLink {
        title: title.to_owned(),
        permalink: doc.permalink.clone(),
    }
}

/// Resolve a navigation list entry into a link.
///
/// Absent entries (start/end of a navigation list) resolve to `None`.
/// Document targets are looked up in `docs_by_id`; a missing id is a
/// configuration error.
pub fn to_navigation_link(
    item: Option<&NavigationItem>,
    docs_by_id: &HashMap<String, DocMetadata>,
) -> Result<Option<NavigationLink>, SidebarError> {
    let Some(item) = item else {
        return Ok(None);
    };

    let link = match item {
        NavigationItem::Category {
            label,
            link: CategoryLink::GeneratedIndex { permalink },
        } => NavigationLink {
            title: label.clone(),
            permalink: permalink.clone(),
        },
        NavigationItem::Category {
            label,
            link: CategoryLink::Doc { id },
        } => to_doc_navigation_link(doc_by_id(docs_by_id, id)?, Some(label)),
        NavigationItem::Doc { id, label } => {
            to_doc_navigation_link(doc_by_id(docs_by_id, id)?, label.as_deref())
        }
    };
    Ok(Some(link))
}

fn doc_by_id<'a>(
    docs_by_id: &'a HashMap<String, DocMetadata>,
    id: &str,
) -> Result<&'a DocMetadata, SidebarError> {
    docs_by_id
        .get(id)
        .ok_or_else(|| SidebarError::DocNotFound { id: id.to_owned() })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc_metadata(title: &str, permalink: &str) -> DocMetadata {
        DocMetadata {
            title: title.to_owned(),
            permalink: permalink.to_owned(),
            front_matter: DocFrontMatter::default(),
        }
    }

    fn docs_by_id(docs: Vec<(&str, DocMetadata)>) -> HashMap<String, DocMetadata> {
        docs.into_iter()
            .map(|(id, doc)| (id.to_owned(), doc))
            .collect()
    }

    #[test]
    fn test_title_defaults_to_doc_title() {
        let doc = doc_metadata("Title", "/x");

        let link = to_doc_navigation_link(&doc, None);

        assert_eq!(
            link,
            NavigationLink {
                title: "Title".to_owned(),
                permalink: "/x".to_owned(),
            }
        );
    }

    #[test]
    fn test_sidebar_item_label_beats_doc_title() {
        let docs = docs_by_id(vec![("x", doc_metadata("T", "/x"))]);
        let item = NavigationItem::Doc {
            id: "x".to_owned(),
            label: Some("L".to_owned()),
        };

        let link = to_navigation_link(Some(&item), &docs).unwrap();

        assert_eq!(
            link,
            Some(NavigationLink {
                title: "L".to_owned(),
                permalink: "/x".to_owned(),
            })
        );
    }

    #[test]
    fn test_front_matter_labels_beat_sidebar_item_label() {
        let mut doc = doc_metadata("Title", "/x");
        doc.front_matter.sidebar_label = Some("Sidebar".to_owned());

        let link = to_doc_navigation_link(&doc, Some("Item"));
        assert_eq!(link.title, "Sidebar");

        doc.front_matter.pagination_label = Some("Pagination".to_owned());

        let link = to_doc_navigation_link(&doc, Some("Item"));
        assert_eq!(link.title, "Pagination");
    }

    #[test]
    fn test_empty_string_label_counts_as_present() {
        let mut doc = doc_metadata("Title", "/x");
        doc.front_matter.pagination_label = Some(String::new());

        let link = to_doc_navigation_link(&doc, Some("Item"));

        assert_eq!(link.title, "");
    }

    #[test]
    fn test_generated_index_category_uses_its_own_label() {
        let item = NavigationItem::Category {
            label: "Guides".to_owned(),
            link: CategoryLink::GeneratedIndex {
                permalink: "/guides".to_owned(),
            },
        };

        let link = to_navigation_link(Some(&item), &HashMap::new()).unwrap();

        assert_eq!(
            link,
            Some(NavigationLink {
                title: "Guides".to_owned(),
                permalink: "/guides".to_owned(),
            })
        );
    }

    #[test]
    fn test_doc_link_category_resolves_through_doc_metadata() {
        let docs = docs_by_id(vec![("overview", doc_metadata("Overview", "/overview"))]);
        let item = NavigationItem::Category {
            label: "Guides".to_owned(),
            link: CategoryLink::Doc {
                id: "overview".to_owned(),
            },
        };

        let link = to_navigation_link(Some(&item), &docs).unwrap();

        assert_eq!(
            link,
            Some(NavigationLink {
                title: "Guides".to_owned(),
                permalink: "/overview".to_owned(),
            })
        );
    }

    #[test]
    fn test_absent_item_resolves_to_none() {
        let link = to_navigation_link(None, &HashMap::new()).unwrap();

        assert_eq!(link, None);
    }

    #[test]
    fn test_unknown_doc_id_is_a_configuration_error() {
        let item = NavigationItem::Doc {
            id: "ghost".to_owned(),
            label: None,
        };

        let err = to_navigation_link(Some(&item), &HashMap::new()).unwrap_err();

        assert_eq!(err.to_string(), "no doc found with id=ghost");
    }

    #[test]
    fn test_front_matter_deserializes_from_json() {
        let doc: DocMetadata = serde_json::from_str(
            r#"{
                "title": "Setup",
                "permalink": "/guides/setup",
                "front_matter": {"pagination_label": "Setting up"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            doc.front_matter.pagination_label.as_deref(),
            Some("Setting up")
        );
        assert_eq!(doc.front_matter.sidebar_label, None);
    }
}
