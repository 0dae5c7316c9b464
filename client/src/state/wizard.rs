//! Three-step "create your prototype" wizard.
//!
//! DESIGN
//! ======
//! `next` only advances when the current step's required fields hold
//! non-blank text; `back` stops at the first step. Choosing a template on the
//! last step produces the `/build` link carrying the app name and template id.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::catalog::wizard_templates;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    AppDetails,
    TargetAudience,
    SelectTemplate,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::AppDetails, Self::TargetAudience, Self::SelectTemplate];

    /// 1-based position shown in the step indicator.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::AppDetails => 1,
            Self::TargetAudience => 2,
            Self::SelectTemplate => 3,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::AppDetails => "App Details",
            Self::TargetAudience => "Target Audience",
            Self::SelectTemplate => "Select Template",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::AppDetails => Self::TargetAudience,
            Self::TargetAudience | Self::SelectTemplate => Self::SelectTemplate,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::AppDetails | Self::TargetAudience => Self::AppDetails,
            Self::SelectTemplate => Self::TargetAudience,
        }
    }
}

/// Rendering state of one step indicator bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Active,
    Completed,
    Pending,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardForm {
    pub step: WizardStep,
    pub app_name: String,
    pub problem_statement: String,
    pub target_audience: String,
    /// Template id chosen on step 3, or preselected from `?template=`.
    pub template: Option<String>,
}

impl WizardForm {
    /// Fresh form, highlighting `preselected` when it names a wizard option.
    #[must_use]
    pub fn with_preselected(preselected: Option<&str>) -> Self {
        let template = preselected
            .and_then(|id| wizard_templates().find(|t| t.id == id))
            .map(|t| t.id.to_owned());
        Self { template, ..Self::default() }
    }

    /// Whether the current step's required fields are filled in.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::AppDetails => filled(&self.app_name) && filled(&self.problem_statement),
            WizardStep::TargetAudience => filled(&self.target_audience),
            WizardStep::SelectTemplate => false,
        }
    }

    /// Move forward one step. Returns `false` when blocked.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = self.step.next();
        true
    }

    pub fn back(&mut self) {
        self.step = self.step.prev();
    }

    #[must_use]
    pub fn status_of(&self, step: WizardStep) -> StepStatus {
        match step.cmp(&self.step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    #[must_use]
    pub fn is_highlighted(&self, template_id: &str) -> bool {
        self.template.as_deref() == Some(template_id)
    }

    /// Record the chosen template.
    pub fn select_template(&mut self, template_id: &str) {
        self.template = Some(template_id.to_owned());
    }

    /// Build page link for this app name and `template_id`.
    #[must_use]
    pub fn href_for(&self, template_id: &str) -> String {
        build_href(&self.app_name, template_id)
    }
}

/// `/build?name=..&template=..` with both values URL-encoded.
#[must_use]
pub fn build_href(name: &str, template: &str) -> String {
    format!(
        "/build?name={}&template={}",
        urlencoding::encode(name),
        urlencoding::encode(template)
    )
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}
