//! Entry parameters of the build view.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

/// Why a build run could not start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// `name` and/or `template` were absent or blank. Lists the missing keys.
    #[error("Missing required parameters")]
    MissingParameters { missing: Vec<&'static str> },
}

/// Validated `name` + `template` pair taken from `/build?name=..&template=..`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildParams {
    pub name: String,
    pub template: String,
}

impl BuildParams {
    /// Trim both values and require them to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingParameters`] naming every absent key.
    pub fn from_query(name: Option<&str>, template: Option<&str>) -> Result<Self, BuildError> {
        let name = non_blank(name);
        let template = non_blank(template);
        match (name, template) {
            (Some(name), Some(template)) => Ok(Self { name, template }),
            (name, template) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push("name");
                }
                if template.is_none() {
                    missing.push("template");
                }
                Err(BuildError::MissingParameters { missing })
            }
        }
    }

    /// Template id with its first character upper-cased, for headings.
    #[must_use]
    pub fn template_display(&self) -> String {
        let mut chars = self.template.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
