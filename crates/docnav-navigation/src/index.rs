//! Sidebar navigation index.
//!
//! [`SidebarsIndex`] is the immutable query surface over a fully-normalized
//! sidebar set. It is built once, precomputing per-sidebar navigation lists,
//! the doc-id → owning-sidebar map, and the list of generated-index
//! categories; every query afterwards is a pure read.
//!
//! # Thread Safety
//!
//! Nothing mutates the index after construction, so it is safe to share
//! (e.g. behind `Arc`) and query concurrently without synchronization.

use std::collections::{BTreeMap, HashMap, HashSet};

use docnav_sidebars::{
    CategoryLink, NavigationItem, SidebarItem, Sidebars, collect_doc_ids, collect_navigation_items,
    flatten_items,
};

use crate::error::SidebarError;

/// Sidebar requested by a doc's front matter.
///
/// Distinguishes "nothing set" from an explicit opt-out, which front matter
/// expresses as a `null` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DisplayedSidebar {
    /// Front matter does not mention a sidebar; ownership is looked up.
    #[default]
    Unset,
    /// Front matter explicitly opted out of any sidebar.
    Disabled,
    /// Front matter names a sidebar, which must exist.
    Named(String),
}

/// Previous/next neighbors of a navigation target.
///
/// `previous`/`next` are `None` at the ends of the navigation list, when the
/// target is not listed, or when no sidebar applies at all (in which case
/// `sidebar_name` is `None` too).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocNavigation {
    /// The resolved sidebar, if any.
    pub sidebar_name: Option<String>,
    /// Entry immediately before the target.
    pub previous: Option<NavigationItem>,
    /// Entry immediately after the target.
    pub next: Option<NavigationItem>,
}

/// A category whose link is a generated index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGeneratedIndex {
    /// Sidebar the category lives in.
    pub sidebar_name: String,
    /// Category label.
    pub label: String,
    /// Permalink of the generated index page.
    pub permalink: String,
}

/// First concretely navigable target of a sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FirstLink {
    /// A document target.
    Doc {
        /// Target document id.
        id: String,
        /// Display label (the item's label, falling back to the id).
        label: String,
    },
    /// A generated index target.
    GeneratedIndex {
        /// Permalink of the generated index page.
        permalink: String,
        /// The owning category's label.
        label: String,
    },
}

/// Immutable navigation index over a sidebar set.
pub struct SidebarsIndex {
    sidebars: Sidebars,
    navigation_items: BTreeMap<String, Vec<NavigationItem>>,
    doc_id_to_sidebar: HashMap<String, String>,
    generated_indexes: Vec<CategoryGeneratedIndex>,
}

impl SidebarsIndex {
    /// Build the index from a fully-normalized sidebar set.
    #[must_use]
    pub fn new(sidebars: Sidebars) -> Self {
        let navigation_items: BTreeMap<String, Vec<NavigationItem>> = sidebars
            .iter()
            .map(|(name, items)| (name.clone(), collect_navigation_items(items)))
            .collect();

        // First sidebar to claim a doc id owns it.
        let mut doc_id_to_sidebar: HashMap<String, String> = HashMap::new();
        for (name, items) in &sidebars {
            for doc_id in collect_doc_ids(items) {
                if let Some(owner) = doc_id_to_sidebar.get(&doc_id) {
                    tracing::warn!(
                        doc_id = %doc_id,
                        owner = %owner,
                        duplicate = %name,
                        "doc id referenced by more than one sidebar, keeping first owner"
                    );
                } else {
                    doc_id_to_sidebar.insert(doc_id, name.clone());
                }
            }
        }

        let generated_indexes = sidebars
            .iter()
            .flat_map(|(name, items)| {
                flatten_items(items)
                    .into_iter()
                    .filter_map(SidebarItem::as_category)
                    .filter_map(|category| {
                        category.generated_index_permalink().map(|permalink| {
                            CategoryGeneratedIndex {
                                sidebar_name: name.clone(),
                                label: category.label.clone(),
                                permalink: permalink.to_owned(),
                            }
                        })
                    })
            })
            .collect();

        tracing::debug!(
            sidebars = sidebars.len(),
            docs = doc_id_to_sidebar.len(),
            "built sidebars index"
        );

        Self {
            sidebars,
            navigation_items,
            doc_id_to_sidebar,
            generated_indexes,
        }
    }

    /// The indexed sidebar set.
    #[must_use]
    pub fn sidebars(&self) -> &Sidebars {
        &self.sidebars
    }

    /// First doc id of the first sidebar, in map iteration order.
    ///
    /// Only the first sidebar is consulted: if it contains no doc ids, the
    /// result is `None` even when later sidebars do.
    #[must_use]
    pub fn first_doc_id_of_first_sidebar(&self) -> Option<String> {
        let (_, items) = self.sidebars.iter().next()?;
        collect_doc_ids(items).into_iter().next()
    }

    /// Sidebar owning `doc_id`, if any (first claim wins).
    #[must_use]
    pub fn sidebar_name_by_doc_id(&self, doc_id: &str) -> Option<&str> {
        self.doc_id_to_sidebar.get(doc_id).map(String::as_str)
    }

    /// All generated-index categories across all sidebars, in flatten order
    /// per sidebar, sidebars in map iteration order.
    #[must_use]
    pub fn category_generated_index_list(&self) -> &[CategoryGeneratedIndex] {
        &self.generated_indexes
    }

    /// Previous/next neighbors for a document.
    ///
    /// The effective sidebar comes from `displayed_sidebar`: an explicit
    /// opt-out yields the empty triple, a named sidebar must exist, and the
    /// unset case falls back to the owning sidebar (empty triple when the
    /// doc is unowned). Entries whose identifying doc id is in
    /// `unlisted_ids` are removed before neighbor lookup, so a hidden
    /// neighbor is skipped entirely rather than leaving a gap.
    ///
    /// # Errors
    ///
    /// [`SidebarError::DisplayedSidebarNotFound`] when a named sidebar does
    /// not exist.
    pub fn doc_navigation(
        &self,
        doc_id: &str,
        displayed_sidebar: &DisplayedSidebar,
        unlisted_ids: &HashSet<String>,
    ) -> Result<DocNavigation, SidebarError> {
        let sidebar_name = match displayed_sidebar {
            DisplayedSidebar::Disabled => return Ok(DocNavigation::default()),
            DisplayedSidebar::Named(name) => {
                if !self.navigation_items.contains_key(name) {
                    return Err(SidebarError::DisplayedSidebarNotFound {
                        doc_id: doc_id.to_owned(),
                        sidebar_name: name.clone(),
                    });
                }
                name.clone()
            }
            DisplayedSidebar::Unset => match self.sidebar_name_by_doc_id(doc_id) {
                Some(name) => name.to_owned(),
                None => return Ok(DocNavigation::default()),
            },
        };

        let listed: Vec<&NavigationItem> = self.navigation_items[&sidebar_name]
            .iter()
            .filter(|item| item.doc_id().is_none_or(|id| !unlisted_ids.contains(id)))
            .collect();

        let position = listed.iter().position(|item| item.doc_id() == Some(doc_id));

        Ok(Self::neighbors_at(Some(sidebar_name), &listed, position))
    }

    /// Previous/next neighbors for a generated category index page.
    ///
    /// Unlisted-id filtering does not apply: generated indexes are not
    /// authored documents.
    ///
    /// # Errors
    ///
    /// [`SidebarError::GeneratedIndexNotFound`] when no category carries the
    /// permalink.
    pub fn category_generated_index_navigation(
        &self,
        permalink: &str,
    ) -> Result<DocNavigation, SidebarError> {
        let entry = self
            .generated_indexes
            .iter()
            .find(|entry| entry.permalink == permalink)
            .ok_or_else(|| SidebarError::GeneratedIndexNotFound {
                permalink: permalink.to_owned(),
            })?;

        let items: Vec<&NavigationItem> = self.navigation_items[&entry.sidebar_name].iter().collect();
        let position = items
            .iter()
            .position(|item| item.generated_index_permalink() == Some(permalink));

        Ok(Self::neighbors_at(
            Some(entry.sidebar_name.clone()),
            &items,
            position,
        ))
    }

    /// First concretely navigable target reachable from the sidebar's top.
    ///
    /// Doc items win immediately; link-bearing categories resolve to their
    /// own target; link-less categories are searched depth-first before the
    /// next sibling is tried. Plain links and cross-references are
    /// transparent. Unknown sidebar names and sidebars with nothing
    /// navigable both yield `None`.
    #[must_use]
    pub fn first_link(&self, sidebar_name: &str) -> Option<FirstLink> {
        first_link_of_items(self.sidebars.get(sidebar_name)?)
    }

    fn neighbors_at(
        sidebar_name: Option<String>,
        items: &[&NavigationItem],
        position: Option<usize>,
    ) -> DocNavigation {
        let (previous, next) = position.map_or((None, None), |idx| {
            (
                idx.checked_sub(1).map(|prev| items[prev].clone()),
                items.get(idx + 1).map(|&item| item.clone()),
            )
        });

        DocNavigation {
            sidebar_name,
            previous,
            next,
        }
    }
}

fn first_link_of_items(items: &[SidebarItem]) -> Option<FirstLink> {
    for item in items {
        match item {
            SidebarItem::Doc(doc) => {
                return Some(FirstLink::Doc {
                    id: doc.id.clone(),
                    label: doc.effective_label().to_owned(),
                });
            }
            SidebarItem::Category(category) => match &category.link {
                Some(CategoryLink::Doc { id }) => {
                    return Some(FirstLink::Doc {
                        id: id.clone(),
                        label: category.label.clone(),
                    });
                }
                Some(CategoryLink::GeneratedIndex { permalink }) => {
                    return Some(FirstLink::GeneratedIndex {
                        permalink: permalink.clone(),
                        label: category.label.clone(),
                    });
                }
                None => {
                    if let Some(link) = first_link_of_items(&category.items) {
                        return Some(link);
                    }
                }
            },
            SidebarItem::Ref(_) | SidebarItem::Link(_) => {}
        }
    }
    None
}
