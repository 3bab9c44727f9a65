//! Maven build-descriptor model and parsing.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Failure to read the build descriptor.
#[derive(Debug, Error)]
pub enum PomError {
    /// The descriptor text is not well-formed XML.
    #[error("invalid descriptor XML: {0}")]
    Xml(#[from] roxmltree::Error),
    /// A dotted version component was not numeric.
    #[error("version component '{0}' is not numeric")]
    Version(String),
}

/// Parent descriptor reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentPom {
    /// Group identifier of the parent, if declared.
    pub group_id: Option<String>,
    /// Version of the parent, if declared.
    pub version: Option<String>,
}

/// Fields of interest from a project's `pom.xml`.
///
/// Parsed fresh on every check run; never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildDescriptor {
    /// Artifact identifier of the project itself.
    pub artifact_id: Option<String>,
    /// Display name of the project.
    pub name: Option<String>,
    /// Parent descriptor section, if present.
    pub parent: Option<ParentPom>,
    /// `<properties>` entries.
    pub properties: BTreeMap<String, String>,
    /// Names of declared `<license>` entries (may be empty strings).
    pub licenses: Vec<String>,
}

impl BuildDescriptor {
    /// Parses descriptor text.
    ///
    /// Only direct children of the document root are read, so a dependency's
    /// `<artifactId>` never shadows the project's own.
    pub fn parse(text: &str) -> Result<Self, PomError> {
        let doc = roxmltree::Document::parse(text)?;
        let root = doc.root_element();

        let mut descriptor = BuildDescriptor::default();
        for child in root.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                // An empty element is present-but-blank, not missing.
                "artifactId" => descriptor.artifact_id = Some(element_text(child)),
                "name" => descriptor.name = Some(element_text(child)),
                "parent" => {
                    descriptor.parent = Some(ParentPom {
                        group_id: child_text(child, "groupId"),
                        version: child_text(child, "version"),
                    });
                }
                "properties" => {
                    for prop in child.children().filter(|n| n.is_element()) {
                        descriptor
                            .properties
                            .insert(prop.tag_name().name().to_string(), element_text(prop));
                    }
                }
                "licenses" => {
                    for license in child
                        .children()
                        .filter(|n| n.is_element() && n.has_tag_name("license"))
                    {
                        descriptor
                            .licenses
                            .push(child_text(license, "name").unwrap_or_default());
                    }
                }
                _ => {}
            }
        }
        Ok(descriptor)
    }
}

fn element_text(node: roxmltree::Node<'_, '_>) -> String {
    node.text().unwrap_or("").trim().to_string()
}

fn child_text(node: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .map(element_text)
}

/// Numeric component of a dotted version string.
///
/// A missing component reads as `-1`, matching how the upstream tooling
/// compares versions like `2.107` against `2.107.1`.
pub fn version_digit(version: &str, index: usize) -> Result<i64, PomError> {
    match version.trim().split('.').nth(index) {
        None => Ok(-1),
        Some(part) => part
            .parse::<i64>()
            .map_err(|_| PomError::Version(part.to_string())),
    }
}
