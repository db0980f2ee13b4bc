//! Sidebar navigation index and previous/next resolution for docnav.
//!
//! This crate provides:
//! - [`SidebarsIndex`]: immutable query surface over a normalized sidebar
//!   set (doc ownership, generated-index listing, previous/next neighbors,
//!   first navigable link)
//! - Consistency checks validating referenced doc ids and rejecting legacy
//!   versioned names
//! - Navigation link title resolution against caller-supplied doc metadata
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashSet;
//! use docnav_navigation::{DisplayedSidebar, SidebarsIndex};
//! use docnav_sidebars::{DocItem, SidebarItem, Sidebars};
//!
//! let mut sidebars = Sidebars::new();
//! sidebars.insert(
//!     "docs".to_owned(),
//!     vec![
//!         SidebarItem::Doc(DocItem { id: "intro".to_owned(), label: None }),
//!         SidebarItem::Doc(DocItem { id: "setup".to_owned(), label: None }),
//!     ],
//! );
//!
//! let index = SidebarsIndex::new(sidebars);
//! let navigation = index
//!     .doc_navigation("intro", &DisplayedSidebar::Unset, &HashSet::new())
//!     .unwrap();
//!
//! assert_eq!(navigation.sidebar_name.as_deref(), Some("docs"));
//! assert!(navigation.previous.is_none());
//! assert!(navigation.next.is_some());
//! ```

mod checks;
mod error;
mod index;
mod link;

pub use checks::{check_legacy_versioned_sidebar_names, check_sidebars_doc_ids};
pub use error::SidebarError;
pub use index::{
    CategoryGeneratedIndex, DisplayedSidebar, DocNavigation, FirstLink, SidebarsIndex,
};
pub use link::{
    DocFrontMatter, DocMetadata, NavigationLink, to_doc_navigation_link, to_navigation_link,
};

// Re-export the navigation list element type for callers that only depend
// on this crate.
pub use docnav_sidebars::NavigationItem;
