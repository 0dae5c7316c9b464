//! Showcase category filter.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use crate::catalog::{Category, Project};

/// Active filter on the showcase page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShowcaseFilter {
    #[default]
    All,
    Only(Category),
}

impl ShowcaseFilter {
    /// Filter buttons in display order.
    pub fn options() -> impl Iterator<Item = ShowcaseFilter> {
        std::iter::once(Self::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

/// Projects passing `filter`, in catalog order.
pub fn filter_projects(projects: &'static [Project], filter: ShowcaseFilter) -> Vec<&'static Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}
