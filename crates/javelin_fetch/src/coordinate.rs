//! Maven coordinates and repository-layout path derivation.

use std::fmt;

/// Base URL of the default public Maven repository.
pub const MAVEN_CENTRAL: &str = "https://repo1.maven.org/maven2";

/// The logical identity of a Maven artifact.
///
/// Two coordinates are equal iff all fields match, and equal coordinates
/// always derive equal paths. Path derivation must reproduce the standard
/// Maven repository convention exactly; any deviation breaks interop with
/// externally published artifacts and pre-existing local caches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinate {
    /// Group id, dot-separated (e.g. `org.clojure`).
    pub group: String,
    /// Artifact id.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Optional classifier selecting a variant artifact.
    pub classifier: Option<String>,
}

impl MavenCoordinate {
    /// Creates a coordinate without a classifier.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        MavenCoordinate {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            classifier: None,
        }
    }

    /// Returns the coordinate with a classifier set.
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// The jar file name: `name-version[-classifier].jar`.
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!("{}-{}-{}.jar", self.name, self.version, classifier),
            None => format!("{}-{}.jar", self.name, self.version),
        }
    }

    /// The path relative to a repository root, with `/` separators:
    /// `group/with/slashes/name/version/name-version[-classifier].jar`.
    pub fn relative_path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.group.replace('.', "/"),
            self.name,
            self.version,
            self.file_name()
        )
    }

    /// The full download URL under a repository base URL.
    pub fn remote_url(&self, repo: &str) -> String {
        format!("{}/{}", repo.trim_end_matches('/'), self.relative_path())
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}
