//! Sidebar consistency checks.
//!
//! Cross-validates a sidebar set against the documents the caller actually
//! knows about, and rejects the retired `version-<name>/` naming convention
//! with a dedicated message. The `sidebar_file_path` parameter is used in
//! error messages only.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use docnav_sidebars::{Sidebars, collect_sidebars_doc_ids};

use crate::error::SidebarError;

static LEGACY_VERSIONED_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^version-[^/]+/").unwrap());

/// Reject sidebar names carrying the retired `version-<version_name>/` prefix.
///
/// # Errors
///
/// [`SidebarError::LegacySidebarNames`] naming every offending sidebar.
pub fn check_legacy_versioned_sidebar_names(
    sidebars: &Sidebars,
    version_name: &str,
    sidebar_file_path: &str,
) -> Result<(), SidebarError> {
    let prefix = format!("version-{version_name}/");
    let names: Vec<String> = sidebars
        .keys()
        .filter(|name| name.starts_with(&prefix))
        .cloned()
        .collect();

    if names.is_empty() {
        Ok(())
    } else {
        Err(SidebarError::LegacySidebarNames {
            names,
            version_name: version_name.to_owned(),
            sidebar_file_path: sidebar_file_path.to_owned(),
        })
    }
}

/// Validate every doc id referenced by the sidebars against the known set.
///
/// Invalid ids matching the legacy versioned-id pattern are reported with
/// the legacy-specific message; that check takes priority over the generic
/// unknown-id report, which lists the invalid ids together with the full
/// valid set for diagnosis.
///
/// # Errors
///
/// [`SidebarError::LegacyDocIds`] or [`SidebarError::InvalidDocIds`].
pub fn check_sidebars_doc_ids(
    sidebars: &Sidebars,
    valid_doc_ids: &HashSet<String>,
    sidebar_file_path: &str,
) -> Result<(), SidebarError> {
    let referenced = collect_sidebars_doc_ids(sidebars);
    let mut invalid_ids: Vec<String> = referenced
        .values()
        .flatten()
        .filter(|id| !valid_doc_ids.contains(*id))
        .cloned()
        .collect();
    invalid_ids.sort();
    invalid_ids.dedup();

    if invalid_ids.is_empty() {
        return Ok(());
    }

    let legacy_ids: Vec<String> = invalid_ids
        .iter()
        .filter(|id| LEGACY_VERSIONED_ID_RE.is_match(id))
        .cloned()
        .collect();
    if !legacy_ids.is_empty() {
        return Err(SidebarError::LegacyDocIds {
            ids: legacy_ids,
            sidebar_file_path: sidebar_file_path.to_owned(),
        });
    }

    let mut valid_ids: Vec<String> = valid_doc_ids.iter().cloned().collect();
    valid_ids.sort();
    Err(SidebarError::InvalidDocIds {
        invalid_ids,
        valid_ids,
        sidebar_file_path: sidebar_file_path.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use docnav_sidebars::{CategoryItem, CategoryLink, DocItem, SidebarItem};

    use super::*;

    fn doc(id: &str) -> SidebarItem {
        SidebarItem::Doc(DocItem {
            id: id.to_owned(),
            label: None,
        })
    }

    fn sidebars(entries: Vec<(&str, Vec<SidebarItem>)>) -> Sidebars {
        entries
            .into_iter()
            .map(|(name, items)| (name.to_owned(), items))
            .collect()
    }

    fn id_set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    #[test]
    fn test_legacy_sidebar_names_rejected() {
        let sidebars = sidebars(vec![
            ("docs", vec![doc("a")]),
            ("version-1.0.0/docs", vec![doc("b")]),
        ]);

        let err =
            check_legacy_versioned_sidebar_names(&sidebars, "1.0.0", "sidebars.js").unwrap_err();

        match err {
            SidebarError::LegacySidebarNames { names, .. } => {
                assert_eq!(names, vec!["version-1.0.0/docs"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_legacy_check_only_matches_requested_version() {
        let sidebars = sidebars(vec![("version-2.0.0/docs", vec![doc("a")])]);

        assert!(
            check_legacy_versioned_sidebar_names(&sidebars, "1.0.0", "sidebars.js").is_ok()
        );
    }

    #[test]
    fn test_doc_ids_all_known_passes() {
        let sidebars = sidebars(vec![(
            "docs",
            vec![
                doc("intro"),
                SidebarItem::Category(CategoryItem {
                    label: "Guides".to_owned(),
                    items: vec![doc("guides/setup")],
                    link: Some(CategoryLink::Doc {
                        id: "guides/overview".to_owned(),
                    }),
                }),
            ],
        )]);

        let result = check_sidebars_doc_ids(
            &sidebars,
            &id_set(&["intro", "guides/setup", "guides/overview"]),
            "sidebars.js",
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_doc_ids_reported_with_valid_set() {
        let sidebars = sidebars(vec![("docs", vec![doc("ghost"), doc("intro")])]);

        let err =
            check_sidebars_doc_ids(&sidebars, &id_set(&["intro", "new"]), "sidebars.js")
                .unwrap_err();

        match err {
            SidebarError::InvalidDocIds {
                invalid_ids,
                valid_ids,
                sidebar_file_path,
            } => {
                assert_eq!(invalid_ids, vec!["ghost"]);
                assert_eq!(valid_ids, vec!["intro", "new"]);
                assert_eq!(sidebar_file_path, "sidebars.js");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_legacy_doc_ids_take_priority_over_generic_report() {
        let sidebars = sidebars(vec![(
            "docs",
            vec![doc("version-1.0.0/old"), doc("also-missing")],
        )]);

        let err = check_sidebars_doc_ids(&sidebars, &id_set(&["new"]), "sidebars.js").unwrap_err();

        match err {
            SidebarError::LegacyDocIds { ids, .. } => {
                assert_eq!(ids, vec!["version-1.0.0/old"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_category_doc_link_ids_are_validated_too() {
        let sidebars = sidebars(vec![(
            "docs",
            vec![SidebarItem::Category(CategoryItem {
                label: "Guides".to_owned(),
                items: vec![],
                link: Some(CategoryLink::Doc {
                    id: "ghost".to_owned(),
                }),
            })],
        )]);

        let err = check_sidebars_doc_ids(&sidebars, &id_set(&[]), "sidebars.js").unwrap_err();

        assert!(matches!(err, SidebarError::InvalidDocIds { .. }));
    }
}
