use super::*;

#[test]
fn from_query_accepts_both_values() {
    let params = BuildParams::from_query(Some("TaskMaster"), Some("saas")).expect("params");
    assert_eq!(params.name, "TaskMaster");
    assert_eq!(params.template, "saas");
}

#[test]
fn from_query_trims_whitespace() {
    let params = BuildParams::from_query(Some("  Fit Connect "), Some(" booking")).expect("params");
    assert_eq!(params.name, "Fit Connect");
    assert_eq!(params.template, "booking");
}

#[test]
fn from_query_missing_name() {
    assert_eq!(
        BuildParams::from_query(None, Some("saas")),
        Err(BuildError::MissingParameters { missing: vec!["name"] })
    );
}

#[test]
fn from_query_missing_template() {
    assert_eq!(
        BuildParams::from_query(Some("App"), None),
        Err(BuildError::MissingParameters { missing: vec!["template"] })
    );
}

#[test]
fn from_query_blank_values_count_as_missing() {
    assert_eq!(
        BuildParams::from_query(Some("   "), Some("")),
        Err(BuildError::MissingParameters { missing: vec!["name", "template"] })
    );
}

#[test]
fn missing_parameters_message_is_user_facing() {
    let err = BuildError::MissingParameters { missing: vec!["name"] };
    assert_eq!(err.to_string(), "Missing required parameters");
}

#[test]
fn template_display_capitalizes_first_letter() {
    let params = BuildParams::from_query(Some("x"), Some("marketplace")).expect("params");
    assert_eq!(params.template_display(), "Marketplace");
}
