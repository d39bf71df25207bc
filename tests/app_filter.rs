mod common;

use common::{app_with_articles, make_article};
use cloud_radar::app::{Category, Provider};

fn sample_articles() -> Vec<cloud_radar::api::Article> {
    vec![
        make_article(
            "AWS Launches New Serverless Computing Service",
            "Amazon Web Services introduces a revolutionary serverless computing platform",
            "AWS News",
            1736380800,
        ),
        make_article(
            "Google Cloud Enhances Security Features",
            "New security features launched for Google Cloud Platform users",
            "Google Cloud Blog",
            1736467200,
        ),
        make_article(
            "Azure DevOps Introduces New Pipeline Features",
            "Microsoft Azure DevOps releases new pipeline capabilities",
            "Azure Updates",
            1736294400,
        ),
        make_article(
            "Kubernetes 1.33 Released",
            "",
            "The New Stack",
            1736208000,
        ),
    ]
}

// --- search predicate ---

#[test]
fn empty_search_matches_all() {
    let app = app_with_articles(sample_articles());
    assert_eq!(app.get_filtered_articles().len(), 4);
}

#[test]
fn search_matches_title_case_insensitive() {
    let mut app = app_with_articles(sample_articles());
    app.input_buffer = "SERVERLESS".to_string();
    app.confirm_search();
    let filtered = app.get_filtered_articles();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "AWS Launches New Serverless Computing Service");
}

#[test]
fn search_matches_description() {
    let mut app = app_with_articles(sample_articles());
    app.input_buffer = "platform users".to_string();
    app.confirm_search();
    let filtered = app.get_filtered_articles();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Google Cloud Enhances Security Features");
}

#[test]
fn search_skips_missing_description() {
    let mut app = app_with_articles(sample_articles());
    app.input_buffer = "1.33".to_string();
    app.confirm_search();
    // Still matches via the title; the None description must not panic.
    assert_eq!(app.get_filtered_articles().len(), 1);
}

#[test]
fn search_no_match_yields_empty() {
    let mut app = app_with_articles(sample_articles());
    app.input_buffer = "quantum blockchain".to_string();
    app.confirm_search();
    assert!(app.get_filtered_articles().is_empty());
}

// --- category multi-select ---

#[test]
fn all_categories_by_default() {
    let app = app_with_articles(sample_articles());
    assert!(app.category_filter.is_all());
    assert_eq!(app.get_filtered_articles().len(), 4);
}

#[test]
fn toggle_while_all_selects_just_that_category() {
    let mut app = app_with_articles(sample_articles());
    app.toggle_category(Category::Security);
    assert!(!app.category_filter.is_all());
    let filtered = app.get_filtered_articles();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Google Cloud Enhances Security Features");
}

#[test]
fn toggle_second_category_widens_selection() {
    let mut app = app_with_articles(sample_articles());
    app.toggle_category(Category::Security);
    app.toggle_category(Category::DevOps);
    let filtered = app.get_filtered_articles();
    assert_eq!(filtered.len(), 2);
}

#[test]
fn select_all_resets_specific_selection() {
    let mut app = app_with_articles(sample_articles());
    app.toggle_category(Category::Security);
    app.toggle_category(Category::DevOps);
    app.select_all_categories();
    assert!(app.category_filter.is_all());
    assert_eq!(app.get_filtered_articles().len(), 4);
}

#[test]
fn deselecting_last_category_resets_to_all() {
    let mut app = app_with_articles(sample_articles());
    app.toggle_category(Category::Security);
    app.toggle_category(Category::Security);
    assert!(app.category_filter.is_all());
    assert_eq!(app.get_filtered_articles().len(), 4);
}

// --- provider single-select ---

#[test]
fn provider_cycle_order() {
    let mut app = app_with_articles(sample_articles());
    assert_eq!(app.provider_filter, None);
    app.cycle_provider();
    assert_eq!(app.provider_filter, Some(Provider::Aws));
    app.cycle_provider();
    assert_eq!(app.provider_filter, Some(Provider::GoogleCloud));
    app.cycle_provider();
    assert_eq!(app.provider_filter, Some(Provider::Azure));
    app.cycle_provider();
    assert_eq!(app.provider_filter, None);
}

#[test]
fn provider_filter_narrows_to_matching_articles() {
    let mut app = app_with_articles(sample_articles());
    app.provider_filter = Some(Provider::GoogleCloud);
    let filtered = app.get_filtered_articles();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Google Cloud Enhances Security Features");
}

// --- combined predicates and ordering ---

#[test]
fn filters_are_conjunctive() {
    let mut app = app_with_articles(sample_articles());
    app.toggle_category(Category::Security);
    app.provider_filter = Some(Provider::Aws);
    // Security article is Google Cloud, AWS article is Cloud Computing.
    assert!(app.get_filtered_articles().is_empty());
}

#[test]
fn filter_preserves_input_order() {
    let app = app_with_articles(sample_articles());
    let titles: Vec<&str> = app
        .get_filtered_articles()
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(titles[0], "AWS Launches New Serverless Computing Service");
    assert_eq!(titles[3], "Kubernetes 1.33 Released");
}

#[test]
fn filtering_is_idempotent() {
    let mut app = app_with_articles(sample_articles());
    app.toggle_category(Category::DevOps);
    app.input_buffer = "pipeline".to_string();
    app.confirm_search();
    let first: Vec<String> = app
        .get_filtered_articles()
        .iter()
        .map(|a| a.title.clone())
        .collect();
    let second: Vec<String> = app
        .get_filtered_articles()
        .iter()
        .map(|a| a.title.clone())
        .collect();
    assert_eq!(first, second);
}

// --- end-to-end scenarios ---

#[test]
fn aws_article_visible_under_default_filters() {
    let app = app_with_articles(vec![make_article(
        "AWS Launches Serverless Service",
        "...",
        "AWS News",
        1736380800,
    )]);
    let filtered = app.get_filtered_articles();
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        cloud_radar::app::provider_for(&filtered[0].title),
        Provider::Aws
    );
    assert_eq!(
        cloud_radar::app::category_for(&filtered[0].title),
        Category::CloudComputing
    );
}

#[test]
fn aws_article_hidden_under_azure_provider_filter() {
    let mut app = app_with_articles(vec![make_article(
        "AWS Launches Serverless Service",
        "...",
        "AWS News",
        1736380800,
    )]);
    app.provider_filter = Some(Provider::Azure);
    assert!(app.get_filtered_articles().is_empty());
}
