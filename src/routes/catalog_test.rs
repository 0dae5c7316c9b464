use super::*;

#[tokio::test]
async fn list_projects_returns_all_six() {
    let Json(projects) = list_projects().await;
    assert_eq!(projects.len(), 6);
    assert_eq!(projects[0].id, "skillshare");
}

#[tokio::test]
async fn get_project_finds_seeded_id() {
    let Json(project) = get_project(Path("eventify".into())).await.unwrap();
    assert_eq!(project.name, "Eventify");
}

#[tokio::test]
async fn get_project_unknown_is_not_found() {
    let err = get_project(Path("saas-maols000".into())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_templates_includes_landing() {
    let Json(templates) = list_templates().await;
    assert_eq!(templates.len(), 6);
    assert!(templates.iter().any(|t| t.id == "landing"));
}

#[tokio::test]
async fn project_payload_shape() {
    let Json(project) = get_project(Path("petcare".into())).await.unwrap();
    let value = serde_json::to_value(project).unwrap();
    assert_eq!(value["category"], "booking");
    assert_eq!(value["published"], "2025-05-10");
}
