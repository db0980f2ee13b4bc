//! Flattening collectors over sidebar trees.
//!
//! Every collector is derived from one traversal primitive,
//! [`flatten_items`]: a pre-order walk that yields each item once, at its
//! position, and descends into category children whether or not the category
//! carries a link. Parents therefore appear before their descendants and
//! siblings in declaration order.

use std::collections::BTreeMap;

use crate::item::{CategoryItem, CategoryLink, DocItem, LinkItem, RefItem, SidebarItem, Sidebars};

/// Flatten a sidebar into its pre-order item sequence.
#[must_use]
pub fn flatten_items(items: &[SidebarItem]) -> Vec<&SidebarItem> {
    fn walk<'a>(items: &'a [SidebarItem], flat: &mut Vec<&'a SidebarItem>) {
        for item in items {
            flat.push(item);
            if let SidebarItem::Category(category) = item {
                walk(&category.items, flat);
            }
        }
    }

    let mut flat = Vec::new();
    walk(items, &mut flat);
    flat
}

/// All document items, in flatten order.
#[must_use]
pub fn collect_doc_items(items: &[SidebarItem]) -> Vec<&DocItem> {
    flatten_items(items)
        .into_iter()
        .filter_map(SidebarItem::as_doc)
        .collect()
}

/// All category items, in flatten order (parents before descendants).
#[must_use]
pub fn collect_categories(items: &[SidebarItem]) -> Vec<&CategoryItem> {
    flatten_items(items)
        .into_iter()
        .filter_map(SidebarItem::as_category)
        .collect()
}

/// All opaque link items, in flatten order.
#[must_use]
pub fn collect_links(items: &[SidebarItem]) -> Vec<&LinkItem> {
    flatten_items(items)
        .into_iter()
        .filter_map(|item| match item {
            SidebarItem::Link(link) => Some(link),
            SidebarItem::Doc(_) | SidebarItem::Ref(_) | SidebarItem::Category(_) => None,
        })
        .collect()
}

/// All cross-reference items, in flatten order.
#[must_use]
pub fn collect_refs(items: &[SidebarItem]) -> Vec<&RefItem> {
    flatten_items(items)
        .into_iter()
        .filter_map(|item| match item {
            SidebarItem::Ref(r) => Some(r),
            SidebarItem::Doc(_) | SidebarItem::Link(_) | SidebarItem::Category(_) => None,
        })
        .collect()
}

/// All referenced document ids, in flatten order.
///
/// Covers `Doc` items and categories linking to a document. A category's
/// link id is emitted at the category's own position, before the ids of its
/// children. Cross-references never contribute.
#[must_use]
pub fn collect_doc_ids(items: &[SidebarItem]) -> Vec<String> {
    flatten_items(items)
        .into_iter()
        .filter_map(|item| match item {
            SidebarItem::Doc(doc) => Some(doc.id.clone()),
            SidebarItem::Category(category) => category.doc_link_id().map(str::to_owned),
            SidebarItem::Ref(_) | SidebarItem::Link(_) => None,
        })
        .collect()
}

/// Owned projection of a navigable sidebar entry.
///
/// Navigation lists hold document items and link-bearing categories.
/// Category children are not carried over; neighbor resolution and link
/// rendering only need the label and the link target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationItem {
    /// A document entry.
    Doc {
        /// Target document id.
        id: String,
        /// Display label, falling back to the id at render time.
        label: Option<String>,
    },
    /// A category that is itself a navigation target.
    Category {
        /// Category label.
        label: String,
        /// The category's own link.
        link: CategoryLink,
    },
}

impl NavigationItem {
    /// Identifying document id: the doc's own id, or the link id of a
    /// doc-linked category. Generated-index categories have none.
    #[must_use]
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            Self::Doc { id, .. }
            | Self::Category {
                link: CategoryLink::Doc { id },
                ..
            } => Some(id),
            Self::Category {
                link: CategoryLink::GeneratedIndex { .. },
                ..
            } => None,
        }
    }

    /// Permalink when the entry is a generated-index category.
    #[must_use]
    pub fn generated_index_permalink(&self) -> Option<&str> {
        match self {
            Self::Category {
                link: CategoryLink::GeneratedIndex { permalink },
                ..
            } => Some(permalink),
            Self::Doc { .. }
            | Self::Category {
                link: CategoryLink::Doc { .. },
                ..
            } => None,
        }
    }
}

/// All navigable entries, in flatten order.
///
/// Yields `Doc` items and categories carrying a link of either kind. Plain
/// links, cross-references, and link-less categories are excluded, but their
/// descendants are still visited and may themselves qualify.
#[must_use]
pub fn collect_navigation_items(items: &[SidebarItem]) -> Vec<NavigationItem> {
    flatten_items(items)
        .into_iter()
        .filter_map(|item| match item {
            SidebarItem::Doc(doc) => Some(NavigationItem::Doc {
                id: doc.id.clone(),
                label: doc.label.clone(),
            }),
            SidebarItem::Category(category) => {
                category.link.clone().map(|link| NavigationItem::Category {
                    label: category.label.clone(),
                    link,
                })
            }
            SidebarItem::Ref(_) | SidebarItem::Link(_) => None,
        })
        .collect()
}

/// [`collect_doc_ids`] applied to every sidebar, preserving the key set.
#[must_use]
pub fn collect_sidebars_doc_ids(sidebars: &Sidebars) -> BTreeMap<String, Vec<String>> {
    sidebars
        .iter()
        .map(|(name, items)| (name.clone(), collect_doc_ids(items)))
        .collect()
}

/// [`collect_navigation_items`] applied to every sidebar, preserving the key set.
#[must_use]
pub fn collect_sidebars_navigation_items(
    sidebars: &Sidebars,
) -> BTreeMap<String, Vec<NavigationItem>> {
    sidebars
        .iter()
        .map(|(name, items)| (name.clone(), collect_navigation_items(items)))
        .collect()
}
