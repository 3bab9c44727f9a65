//! Finding constructors, one per message kind.
//!
//! Keeping the texts here guarantees that two verifiers raising the same
//! complaint produce equal findings, which the finding set then deduplicates.

use hosting_core::model::{
    Finding, FIELD_COMMITTERS, FIELD_NEW_REPOSITORY_NAME, FIELD_REPOSITORY_URL,
};

pub(crate) fn missing_committers() -> Finding {
    Finding::required(format!(
        "Missing list of users to authorize in '{FIELD_COMMITTERS}'"
    ))
}

pub(crate) fn committers_are_organizations(names: &[String]) -> Finding {
    Finding::required(format!(
        "The following names in '{FIELD_COMMITTERS}' are organizations instead of users: {}",
        names.join(", ")
    ))
}

pub(crate) fn committers_not_found(names: &[String]) -> Finding {
    Finding::required(format!(
        "The following names in '{FIELD_COMMITTERS}' are not valid GitHub usernames: {}",
        names.join(", ")
    ))
}

pub(crate) fn invalid_repository_url(value: &str) -> Finding {
    Finding::required(format!("Invalid repository URL '{value}'"))
}

pub(crate) fn missing_repository_name() -> Finding {
    Finding::required(format!("'{FIELD_NEW_REPOSITORY_NAME}' must not be empty")).with_subitems(
        vec![
            Finding::info(
                "It must match the <artifactId> of the project with \"-plugin\" appended",
            ),
            Finding::info("It must end in \"-plugin\" if hosting a plugin"),
            Finding::info("It must be all lowercase"),
            Finding::info("It must NOT contain \"Jenkins\""),
            Finding::info("It must use hyphens ( - ) instead of spaces"),
        ],
    )
}

pub(crate) fn repository_name_contains_jenkins() -> Finding {
    Finding::required(format!(
        "'{FIELD_NEW_REPOSITORY_NAME}' must not contain \"jenkins\" or \"hudson\""
    ))
}

pub(crate) fn repository_name_missing_suffix() -> Finding {
    Finding::required(format!(
        "'{FIELD_NEW_REPOSITORY_NAME}' must end with \"-plugin\""
    ))
}

pub(crate) fn repository_name_not_lowercase(name: &str) -> Finding {
    Finding::required(format!(
        "'{FIELD_NEW_REPOSITORY_NAME}' must be all lowercase: '{name}'"
    ))
}

pub(crate) fn git_suffix_in_url() -> Finding {
    Finding::required(format!(
        "The repository name must not include the \".git\" suffix; please remove it from '{FIELD_REPOSITORY_URL}'"
    ))
}

pub(crate) fn invalid_repository(owner: &str, name: &str) -> Finding {
    Finding::required(format!(
        "Invalid repository '{owner}/{name}': it does not exist or is not public"
    ))
}

pub(crate) fn missing_readme() -> Finding {
    Finding::required("Please add a README to the repository describing what the plugin does")
}

pub(crate) fn fork_of_upstream(parent: &str) -> Finding {
    Finding::required(format!(
        "The repository is a fork of '{parent}'; please break the fork relationship before hosting"
    ))
}

pub(crate) fn no_build_descriptor() -> Finding {
    Finding::warning(
        "No pom.xml found in the root of the repository; disregard this message if the project uses a different build system",
    )
}

pub(crate) fn invalid_build_descriptor() -> Finding {
    Finding::required("The pom.xml in the root of the repository is invalid")
}

pub(crate) fn no_artifact_id() -> Finding {
    Finding::required("The pom.xml does not contain a valid <artifactId> element")
}

pub(crate) fn artifact_id_mismatch(actual: &str, expected: &str) -> Finding {
    Finding::required(format!(
        "The <artifactId> '{actual}' is incorrect; it should be '{expected}' ('{FIELD_NEW_REPOSITORY_NAME}' with \"-plugin\" removed)"
    ))
}

pub(crate) fn artifact_id_contains_jenkins(actual: &str) -> Finding {
    Finding::required(format!(
        "The <artifactId> '{actual}' must not contain \"jenkins\""
    ))
}

pub(crate) fn artifact_id_not_lowercase(actual: &str) -> Finding {
    Finding::required(format!(
        "The <artifactId> must be all lowercase: '{actual}'"
    ))
}

pub(crate) fn no_display_name() -> Finding {
    Finding::required("The pom.xml does not contain a valid <name> element")
}

pub(crate) fn blank_display_name() -> Finding {
    Finding::required("The <name> element must not be blank")
}

pub(crate) fn display_name_contains_jenkins(name: &str) -> Finding {
    Finding::required(format!("The <name> '{name}' must not contain \"Jenkins\""))
}

pub(crate) fn wrong_parent_group_id(expected: &str) -> Finding {
    Finding::required(format!(
        "The <parent> <groupId> must be '{expected}'"
    ))
}

pub(crate) fn parent_version_too_old(version: &str) -> Finding {
    Finding::required(format!(
        "The parent version '{version}' is too old; the plugin parent must be version 2 or newer"
    ))
}

pub(crate) fn suggest_lts_baseline(version: &str) -> Finding {
    Finding::info(format!(
        "Consider setting the Jenkins baseline to an LTS release instead of '{version}'"
    ))
}

pub(crate) fn missing_license() -> Finding {
    Finding::required("Please specify an open-source license in the <licenses> section of the pom.xml")
}
