use super::*;

#[test]
fn six_projects_are_seeded() {
    let ids: Vec<_> = projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["skillshare", "analytiq", "petcare", "foodie", "healthbot", "eventify"]);
}

#[test]
fn find_project_by_id() {
    let project = find_project("healthbot").expect("seeded project");
    assert_eq!(project.name, "HealthBot");
    assert_eq!(project.category, Category::Chatbot);
    assert_eq!(project.waitlist_count, 156);
    assert_eq!(project.features.len(), 5);
}

#[test]
fn synthesized_ids_are_not_in_the_catalog() {
    assert!(find_project("saas-maols000").is_none());
    assert!(find_project("").is_none());
}

#[test]
fn prototype_views_are_five_times_waitlist() {
    let project = find_project("skillshare").expect("seeded project");
    assert_eq!(project.prototype_views(), 235);
    assert_eq!(project.href(), "/prototype/skillshare");
}

#[test]
fn project_images_point_at_pexels() {
    for project in projects() {
        assert!(project.image_url.starts_with("https://images.pexels.com/photos/"));
        assert!(project.image_url.ends_with("&dpr=1"));
    }
}

#[test]
fn six_templates_with_landing_last() {
    let ids: Vec<_> = templates().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["marketplace", "saas", "booking", "social", "chatbot", "landing"]);
    assert_eq!(find_template("landing").map(|t| t.category_label), Some("Marketing"));
    assert!(find_template("blog").is_none());
}

#[test]
fn featured_templates_are_first_three() {
    let names: Vec<_> = featured_templates().iter().map(|t| t.short_name).collect();
    assert_eq!(names, vec!["Marketplace", "SaaS Dashboard", "Booking Platform"]);
}

#[test]
fn wizard_offers_five_templates_without_landing() {
    let ids: Vec<_> = wizard_templates().map(|t| t.id).collect();
    assert_eq!(ids, vec!["marketplace", "saas", "booking", "social", "chatbot"]);
}

#[test]
fn key_features_are_first_three() {
    let template = find_template("saas").expect("seeded template");
    assert_eq!(template.key_features(), &["User management", "Analytics dashboard", "Settings panel"]);
    assert_eq!(template.wizard_href(), "/wizard?template=saas");
}

#[test]
fn category_parse_and_labels() {
    assert_eq!(Category::parse("saas"), Some(Category::Saas));
    assert_eq!(Category::parse("SaaS"), None);
    assert_eq!(Category::parse("all"), None);
    assert_eq!(Category::Saas.label(), "SaaS");
    assert_eq!(Category::Saas.badge(), "Saas");
    assert_eq!(Category::Chatbot.label(), "Chatbot");
}

#[test]
fn every_project_category_round_trips_through_slug() {
    for project in projects() {
        assert_eq!(Category::parse(project.category.slug()), Some(project.category));
    }
}

#[test]
fn project_serializes_with_iso_date_and_lowercase_category() {
    let project = find_project("analytiq").expect("seeded project");
    let value = serde_json::to_value(project).expect("serialize");
    assert_eq!(value["published"], "2025-05-12");
    assert_eq!(value["category"], "saas");
    assert_eq!(value["waitlist_count"], 124);
    assert_eq!(value["features"][0], "Data Visualization");
}
