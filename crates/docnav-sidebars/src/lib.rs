//! Sidebar tree model and traversal algebra for docnav.
//!
//! This crate provides:
//! - [`SidebarItem`]: the tagged sidebar tree (docs, cross-references,
//!   links, categories with optional [`CategoryLink`]s)
//! - [`transform_items`]: structure-preserving recursive map
//! - Collectors built on one pre-order [`flatten_items`] primitive
//!
//! # Quick Start
//!
//! ```
//! use docnav_sidebars::{DocItem, SidebarItem, collect_doc_ids};
//!
//! let sidebar = vec![SidebarItem::Doc(DocItem {
//!     id: "intro".to_owned(),
//!     label: None,
//! })];
//!
//! assert_eq!(collect_doc_ids(&sidebar), vec!["intro"]);
//! ```

mod collect;
mod item;
mod transform;

pub use collect::{
    NavigationItem, collect_categories, collect_doc_ids, collect_doc_items, collect_links,
    collect_navigation_items, collect_refs, collect_sidebars_doc_ids,
    collect_sidebars_navigation_items, flatten_items,
};
pub use item::{CategoryItem, CategoryLink, DocItem, LinkItem, RefItem, SidebarItem, Sidebars};
pub use transform::transform_items;
