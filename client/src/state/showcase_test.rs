use super::*;
use crate::catalog::projects;

fn ids(filter: ShowcaseFilter) -> Vec<&'static str> {
    filter_projects(projects(), filter).into_iter().map(|p| p.id).collect()
}

#[test]
fn default_filter_is_all() {
    assert_eq!(ShowcaseFilter::default(), ShowcaseFilter::All);
}

#[test]
fn all_returns_every_seeded_project() {
    assert_eq!(ids(ShowcaseFilter::All).len(), 6);
}

#[test]
fn category_filter_is_equality() {
    assert_eq!(ids(ShowcaseFilter::Only(Category::Booking)), vec!["petcare", "eventify"]);
    assert_eq!(ids(ShowcaseFilter::Only(Category::Saas)), vec!["analytiq"]);
}

#[test]
fn zero_matches_then_reset_to_all() {
    let empty: &'static [Project] = &[];
    assert!(filter_projects(empty, ShowcaseFilter::Only(Category::Social)).is_empty());
    assert_eq!(ids(ShowcaseFilter::All).len(), 6);
}

#[test]
fn options_start_with_all_then_categories() {
    let labels: Vec<_> = ShowcaseFilter::options().map(ShowcaseFilter::label).collect();
    assert_eq!(labels, vec!["All Projects", "Marketplace", "SaaS", "Booking", "Social", "Chatbot"]);
}
