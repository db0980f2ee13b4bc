//! Sidebar item model.
//!
//! A sidebar is a named, ordered tree of navigation items. Items come in four
//! kinds: documents, cross-references, opaque links, and categories. The
//! model is a closed sum type; traversal code matches exhaustively over the
//! discriminant so a new item kind is a compile-time-checked exercise.
//!
//! # Serialized Form
//!
//! The model round-trips through the internally tagged JSON shape produced by
//! the normalization pipeline:
//!
//! ```json
//! {
//!   "docs": [
//!     {"type": "doc", "id": "intro"},
//!     {
//!       "type": "category",
//!       "label": "Guides",
//!       "link": {"type": "generated-index", "permalink": "/guides"},
//!       "items": [{"type": "doc", "id": "guides/setup", "label": "Setup"}]
//!     }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named sidebars, keyed by sidebar name.
///
/// Name declaration order carries no meaning; the map only needs
/// deterministic iteration. Item order *within* each sidebar defines
/// traversal and navigation order.
pub type Sidebars = BTreeMap<String, Vec<SidebarItem>>;

/// One node of a sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SidebarItem {
    /// A leaf referencing a document by id.
    Doc(DocItem),
    /// A cross-reference to a document listed elsewhere. Structurally a
    /// [`DocItem`], but never promoted to doc-id or navigation collections.
    Ref(RefItem),
    /// An opaque external or internal link.
    Link(LinkItem),
    /// An internal node grouping items, optionally a navigation target
    /// itself via [`CategoryLink`].
    Category(CategoryItem),
}

/// Document leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocItem {
    /// Target document id.
    pub id: String,
    /// Display label. Falls back to the id when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Cross-reference leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefItem {
    /// Referenced document id.
    pub id: String,
    /// Display label. Falls back to the id when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Opaque link leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Link target.
    pub href: String,
    /// Display label.
    pub label: String,
}

/// Category node.
///
/// A category's own link participation is independent of its children: a
/// link-bearing category is itself navigable AND its children are still
/// traversed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    /// Display label.
    pub label: String,
    /// Children, in traversal order.
    pub items: Vec<SidebarItem>,
    /// The category's own navigation target, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<CategoryLink>,
}

/// Navigation target of a link-bearing category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryLink {
    /// The category acts as a proxy for a document.
    Doc {
        /// Target document id.
        id: String,
    },
    /// The category acts as a proxy for a synthesized index page.
    GeneratedIndex {
        /// Permalink of the generated index page.
        permalink: String,
    },
}

impl SidebarItem {
    /// Project onto the document variant.
    #[must_use]
    pub fn as_doc(&self) -> Option<&DocItem> {
        match self {
            Self::Doc(doc) => Some(doc),
            Self::Ref(_) | Self::Link(_) | Self::Category(_) => None,
        }
    }

    /// Project onto the category variant.
    #[must_use]
    pub fn as_category(&self) -> Option<&CategoryItem> {
        match self {
            Self::Category(category) => Some(category),
            Self::Doc(_) | Self::Ref(_) | Self::Link(_) => None,
        }
    }
}

impl DocItem {
    /// Display label, falling back to the document id.
    #[must_use]
    pub fn effective_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

impl CategoryItem {
    /// True when the category is itself a navigation target.
    #[must_use]
    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }

    /// Target document id when the category links to a document.
    #[must_use]
    pub fn doc_link_id(&self) -> Option<&str> {
        match &self.link {
            Some(CategoryLink::Doc { id }) => Some(id),
            Some(CategoryLink::GeneratedIndex { .. }) | None => None,
        }
    }

    /// Permalink when the category links to a generated index page.
    #[must_use]
    pub fn generated_index_permalink(&self) -> Option<&str> {
        match &self.link {
            Some(CategoryLink::GeneratedIndex { permalink }) => Some(permalink),
            Some(CategoryLink::Doc { .. }) | None => None,
        }
    }
}
