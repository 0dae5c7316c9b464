use super::*;

fn details(name: &str, problem: &str) -> WizardForm {
    WizardForm {
        app_name: name.to_owned(),
        problem_statement: problem.to_owned(),
        ..WizardForm::default()
    }
}

#[test]
fn starts_on_app_details() {
    let form = WizardForm::default();
    assert_eq!(form.step, WizardStep::AppDetails);
    assert_eq!(form.step.number(), 1);
    assert_eq!(form.template, None);
}

#[test]
fn cannot_advance_with_blank_fields() {
    let mut form = details("TaskMaster", "");
    assert!(!form.next());
    assert_eq!(form.step, WizardStep::AppDetails);

    let mut form = details("   ", "Too many tasks");
    assert!(!form.next());
    assert_eq!(form.step, WizardStep::AppDetails);
}

#[test]
fn advances_through_audience_to_templates() {
    let mut form = details("TaskMaster", "Too many tasks");
    assert!(form.next());
    assert_eq!(form.step, WizardStep::TargetAudience);

    assert!(!form.next());
    form.target_audience = "Busy freelancers".to_owned();
    assert!(form.next());
    assert_eq!(form.step, WizardStep::SelectTemplate);

    assert!(!form.next());
    assert_eq!(form.step, WizardStep::SelectTemplate);
}

#[test]
fn back_never_goes_below_first_step() {
    let mut form = details("A", "B");
    form.back();
    assert_eq!(form.step, WizardStep::AppDetails);
    form.next();
    form.back();
    assert_eq!(form.step, WizardStep::AppDetails);
}

#[test]
fn back_keeps_entered_values() {
    let mut form = details("A", "B");
    form.next();
    form.target_audience = "C".to_owned();
    form.next();
    form.back();
    assert_eq!(form.step, WizardStep::TargetAudience);
    assert_eq!(form.target_audience, "C");
}

#[test]
fn step_statuses_follow_current_step() {
    let mut form = details("A", "B");
    form.next();
    assert_eq!(form.status_of(WizardStep::AppDetails), StepStatus::Completed);
    assert_eq!(form.status_of(WizardStep::TargetAudience), StepStatus::Active);
    assert_eq!(form.status_of(WizardStep::SelectTemplate), StepStatus::Pending);
}

#[test]
fn select_template_highlights_choice() {
    let mut form = details("My App & Co", "B");
    form.select_template("saas");
    assert_eq!(form.template.as_deref(), Some("saas"));
    assert!(form.is_highlighted("saas"));
    assert!(!form.is_highlighted("booking"));
}

#[test]
fn href_for_encodes_current_app_name() {
    let mut form = details("My App & Co", "B");
    assert_eq!(form.href_for("saas"), "/build?name=My%20App%20%26%20Co&template=saas");
    form.app_name = "Tasks".to_owned();
    assert_eq!(form.href_for("booking"), "/build?name=Tasks&template=booking");
}

#[test]
fn build_href_encodes_both_parts() {
    assert_eq!(build_href("Café", "a b"), "/build?name=Caf%C3%A9&template=a%20b");
}

#[test]
fn preselection_only_accepts_wizard_options() {
    assert_eq!(WizardForm::with_preselected(Some("booking")).template.as_deref(), Some("booking"));
    assert_eq!(WizardForm::with_preselected(Some("landing")).template, None);
    assert_eq!(WizardForm::with_preselected(Some("nope")).template, None);
    assert_eq!(WizardForm::with_preselected(None).template, None);
}

#[test]
fn step_titles() {
    let titles: Vec<_> = WizardStep::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["App Details", "Target Audience", "Select Template"]);
}
