//! Error taxonomy for sidebar navigation.
//!
//! Fatal conditions propagate immediately with enough context (offending id,
//! sidebar name, sidebar file path) to produce an actionable message; soft
//! cases (doc not owned by any sidebar, empty sidebar, explicit opt-out) are
//! absent results, not errors.

use thiserror::Error;

/// Fatal sidebar configuration and validation errors.
#[derive(Debug, Error)]
pub enum SidebarError {
    /// A doc asked for a sidebar name that does not exist.
    #[error(
        "doc with id \"{doc_id}\" wants to display sidebar \"{sidebar_name}\" but a sidebar with this name doesn't exist"
    )]
    DisplayedSidebarNotFound {
        /// Id of the doc requesting the sidebar.
        doc_id: String,
        /// The missing sidebar name.
        sidebar_name: String,
    },

    /// A navigation link references a doc absent from the metadata mapping.
    #[error("no doc found with id={id}")]
    DocNotFound {
        /// The missing doc id.
        id: String,
    },

    /// No generated-index category carries the requested permalink.
    #[error("no sidebar category found with generated index permalink={permalink}")]
    GeneratedIndexNotFound {
        /// The requested permalink.
        permalink: String,
    },

    /// Sidebar names still use the retired `version-<name>/` prefix.
    #[error(
        "invalid sidebar file at \"{sidebar_file_path}\": legacy versioned sidebar names are not supported anymore, rename {} without the \"version-{version_name}/\" prefix",
        comma_list(.names)
    )]
    LegacySidebarNames {
        /// Offending sidebar names.
        names: Vec<String>,
        /// Version whose prefix was detected.
        version_name: String,
        /// Sidebar file path, for the error message only.
        sidebar_file_path: String,
    },

    /// Referenced doc ids still use the retired `version-<name>/` prefix.
    #[error(
        "invalid sidebar file at \"{sidebar_file_path}\": legacy versioned doc ids are not supported anymore, use {} without the \"version-<name>/\" prefix",
        comma_list(.ids)
    )]
    LegacyDocIds {
        /// Offending doc ids.
        ids: Vec<String>,
        /// Sidebar file path, for the error message only.
        sidebar_file_path: String,
    },

    /// Sidebars reference doc ids the documents subsystem does not know.
    #[error(
        "invalid sidebar file at \"{sidebar_file_path}\": these sidebar document ids do not exist: {}\navailable document ids are: {}",
        comma_list(.invalid_ids),
        comma_list(.valid_ids)
    )]
    InvalidDocIds {
        /// Referenced ids with no matching document.
        invalid_ids: Vec<String>,
        /// The full known-good id set, for diagnosis.
        valid_ids: Vec<String>,
        /// Sidebar file path, for the error message only.
        sidebar_file_path: String,
    },
}

fn comma_list(values: &[String]) -> String {
    values.join(", ")
}
