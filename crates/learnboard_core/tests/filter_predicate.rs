use learnboard_core::{filter_activities, Activity, ActivityStatus, ActivityType, FilterCriteria};

fn activity(
    id: &str,
    kind: ActivityType,
    status: ActivityStatus,
    title: &str,
    subject: &str,
) -> Activity {
    let mut activity = Activity::new(id, kind, status, title);
    activity.subject = subject.to_string();
    activity.description = format!("{title} for {subject}");
    activity
}

fn sample() -> Vec<Activity> {
    vec![
        activity("1", ActivityType::OnlineClass, ActivityStatus::NotStarted, "Intro to Neural Nets", "AI"),
        activity("2", ActivityType::Quiz, ActivityStatus::Completed, "Quiz 1", "Machine Learning"),
        activity("3", ActivityType::Assignment, ActivityStatus::Overdue, "Regression Lab", "Machine Learning"),
        activity("4", ActivityType::Discussion, ActivityStatus::InProgress, "Serverless Debate", "Cloud Computing"),
        activity("5", ActivityType::Quiz, ActivityStatus::Overdue, "Search Quiz", "AI"),
    ]
}

fn ids(activities: &[&Activity]) -> Vec<String> {
    activities.iter().map(|activity| activity.id.clone()).collect()
}

#[test]
fn empty_criteria_returns_everything_in_order() {
    let activities = sample();
    let filtered = filter_activities(&activities, &FilterCriteria::default());
    assert_eq!(ids(&filtered), ["1", "2", "3", "4", "5"]);
}

#[test]
fn search_is_case_insensitive() {
    let activities = sample();
    let mut criteria = FilterCriteria::new();
    criteria.search_query = "quiz".to_string();

    let filtered = filter_activities(&activities, &criteria);
    assert_eq!(ids(&filtered), ["2", "5"]);

    criteria.search_query = "CLOUD".to_string();
    let filtered = filter_activities(&activities, &criteria);
    assert_eq!(ids(&filtered), ["4"]);
}

#[test]
fn whitespace_only_search_is_ignored() {
    let activities = sample();
    let mut criteria = FilterCriteria::new();
    criteria.search_query = "  \t ".to_string();

    let filtered = filter_activities(&activities, &criteria);
    assert_eq!(filtered.len(), activities.len());
}

#[test]
fn dimensions_are_combined_with_and() {
    let activities = sample();
    let mut criteria = FilterCriteria::new();
    criteria.toggle_type(ActivityType::Quiz);
    criteria.toggle_type(ActivityType::Assignment);
    criteria.toggle_status(ActivityStatus::Overdue);

    let filtered = filter_activities(&activities, &criteria);
    assert_eq!(ids(&filtered), ["3", "5"]);

    criteria.toggle_subject("AI");
    let filtered = filter_activities(&activities, &criteria);
    assert_eq!(ids(&filtered), ["5"]);

    criteria.search_query = "regression".to_string();
    let filtered = filter_activities(&activities, &criteria);
    assert!(filtered.is_empty());
}

#[test]
fn result_is_intersection_of_single_dimension_results() {
    let activities = sample();

    let mut by_subject = FilterCriteria::new();
    by_subject.toggle_subject("Machine Learning");
    let mut by_status = FilterCriteria::new();
    by_status.toggle_status(ActivityStatus::Overdue);
    let mut combined = by_subject.clone();
    combined.toggle_status(ActivityStatus::Overdue);

    let subject_ids = ids(&filter_activities(&activities, &by_subject));
    let status_ids = ids(&filter_activities(&activities, &by_status));
    let expected: Vec<String> = subject_ids
        .into_iter()
        .filter(|id| status_ids.contains(id))
        .collect();

    assert_eq!(ids(&filter_activities(&activities, &combined)), expected);
}

#[test]
fn filtering_is_idempotent_and_leaves_input_untouched() {
    let activities = sample();
    let before = activities.clone();
    let mut criteria = FilterCriteria::new();
    criteria.toggle_status(ActivityStatus::Overdue);

    let first = filter_activities(&activities, &criteria);
    let second = filter_activities(&activities, &criteria);
    assert_eq!(first, second);
    assert_eq!(activities, before);
}

#[test]
fn empty_store_filters_to_empty() {
    let mut criteria = FilterCriteria::new();
    criteria.search_query = "anything".to_string();
    assert!(filter_activities(&[], &criteria).is_empty());
    assert!(filter_activities(&[], &FilterCriteria::default()).is_empty());
}
