//! Report pipeline tests against an in-memory task source

use asana_stats::api::{ApiError, ErrorCode};
use asana_stats::config::CompletedSince;
use asana_stats::core::models::{Band, EPIC_NOT_SET};
use asana_stats::core::ports::TaskFilter;
use asana_stats::error::Error;
use asana_stats::reports::{self, TaskWarning};

use crate::common::fixtures::{TaskBuilder, test_config};
use crate::common::mocks::{InMemorySource, InMemoryUsers, SourceCall};

const SPRINT: &str = "1203953156205290";
const BACKLOG: &str = "1205425343659456";
const SUPPORT_BOARD: &str = "1201157086826331";
const CODE_ORANGE: &str = "1208541407042522";

fn since() -> CompletedSince {
    "2024-05-01".parse().unwrap()
}

fn points_of(report: &asana_stats::output::VelocityReport, name: &str) -> Option<f64> {
    report.users.iter().find(|u| u.name == name).map(|u| u.points)
}

// =============================================================================
// VELOCITY
// =============================================================================

#[test]
fn test_velocity_sums_points_per_user() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![
            TaskBuilder::new("1", "A").completed_by("U1").points(Some("3")).build(),
            TaskBuilder::new("2", "B").completed_by("U1").points(Some("2")).build(),
            TaskBuilder::new("3", "C").completed_by("U2").points(Some("5")).build(),
        ],
    );
    let users = InMemoryUsers::new(&[("U1", "Ada"), ("U2", "Grace")]);

    let report = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    assert!((report.total_points - 10.0).abs() < f64::EPSILON);
    assert_eq!(points_of(&report, "Ada"), Some(5.0));
    assert_eq!(points_of(&report, "Grace"), Some(5.0));
    assert!(report.warnings.is_empty());
    assert_eq!(report.project_id, SPRINT);
}

#[test]
fn test_velocity_users_in_first_seen_order() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![
            TaskBuilder::new("1", "A").completed_by("U2").points(Some("1")).build(),
            TaskBuilder::new("2", "B").completed_by("U1").points(Some("1")).build(),
            TaskBuilder::new("3", "C").completed_by("U2").points(Some("1")).build(),
        ],
    );
    let users = InMemoryUsers::new(&[("U1", "Ada"), ("U2", "Grace")]);

    let report = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    let names: Vec<_> = report.users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Grace", "Ada"]);
}

#[test]
fn test_velocity_falls_back_to_estimated_points() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![
            TaskBuilder::new("1", "A")
                .completed_by("U1")
                .points(None)
                .estimated(Some("8 - large"))
                .build(),
        ],
    );
    let users = InMemoryUsers::new(&[("U1", "Ada")]);

    let report = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    assert_eq!(points_of(&report, "Ada"), Some(8.0));
}

#[test]
fn test_velocity_primary_field_wins_over_fallback() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![
            TaskBuilder::new("1", "A")
                .completed_by("U1")
                .points(Some("2"))
                .estimated(Some("8"))
                .build(),
        ],
    );
    let users = InMemoryUsers::new(&[("U1", "Ada")]);

    let report = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    assert_eq!(points_of(&report, "Ada"), Some(2.0));
}

#[test]
fn test_velocity_missing_points_warns_and_skips() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![
            TaskBuilder::new("1", "Unpointed").completed_by("U1").build(),
            TaskBuilder::new("2", "Pointed").completed_by("U2").points(Some("3")).build(),
        ],
    );
    let users = InMemoryUsers::new(&[("U1", "Ada"), ("U2", "Grace")]);

    let report = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    assert!((report.total_points - 3.0).abs() < f64::EPSILON);
    assert_eq!(points_of(&report, "Ada"), None);
    assert_eq!(
        report.warnings,
        vec![TaskWarning::MissingPoints {
            task: "Unpointed".to_string(),
            permalink_url: "https://app.asana.com/0/0/1".to_string(),
        }]
    );
    // U1 contributed nothing, so is never looked up
    assert_eq!(users.lookups(), vec!["U2"]);
}

#[test]
fn test_velocity_malformed_points_does_not_fall_back() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![
            TaskBuilder::new("1", "Odd")
                .completed_by("U1")
                .points(Some("large"))
                .estimated(Some("5"))
                .build(),
        ],
    );
    let users = InMemoryUsers::new(&[("U1", "Ada")]);

    let report = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    assert!(report.total_points.abs() < f64::EPSILON);
    assert!(report.users.is_empty());
    assert!(matches!(
        &report.warnings[..],
        [TaskWarning::MalformedPoints { raw, .. }] if raw == "large"
    ));
}

#[test]
fn test_velocity_missing_completer_counts_in_total_only() {
    let mut task = TaskBuilder::new("1", "Orphan").points(Some("4")).build();
    task.completed = true;
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![task, TaskBuilder::new("2", "B").completed_by("U1").points(Some("1")).build()],
    );
    let users = InMemoryUsers::new(&[("U1", "Ada")]);

    let report = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    assert!((report.total_points - 5.0).abs() < f64::EPSILON);
    assert_eq!(report.users.len(), 1);
    assert_eq!(
        report.warnings,
        vec![TaskWarning::MissingCompleter {
            task: "Orphan".to_string()
        }]
    );
}

#[test]
fn test_velocity_skips_incomplete_tasks() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![
            TaskBuilder::new("1", "Open").points(Some("13")).build(),
            TaskBuilder::new("2", "Done").completed_by("U1").points(Some("1")).build(),
        ],
    );
    let users = InMemoryUsers::new(&[("U1", "Ada")]);

    let report = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    assert!((report.total_points - 1.0).abs() < f64::EPSILON);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_velocity_total_equals_sum_of_users() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![
            TaskBuilder::new("1", "A").completed_by("U1").points(Some("0.5")).build(),
            TaskBuilder::new("2", "B").completed_by("U2").points(Some("1.5")).build(),
            TaskBuilder::new("3", "C").completed_by("U3").points(Some("3")).build(),
        ],
    );
    let users = InMemoryUsers::new(&[("U1", "A"), ("U2", "B"), ("U3", "C")]);

    let report = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    let sum: f64 = report.users.iter().map(|u| u.points).sum();
    assert!((report.total_points - sum).abs() < 1e-9);
}

#[test]
fn test_velocity_looks_up_each_user_once() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![
            TaskBuilder::new("1", "A").completed_by("U1").points(Some("1")).build(),
            TaskBuilder::new("2", "B").completed_by("U1").points(Some("1")).build(),
            TaskBuilder::new("3", "C").completed_by("U1").points(Some("1")).build(),
        ],
    );
    let users = InMemoryUsers::new(&[("U1", "Ada")]);

    reports::velocity(&source, &users, &test_config(), None, &since()).unwrap();

    assert_eq!(users.lookups(), vec!["U1"]);
}

#[test]
fn test_velocity_requests_completed_since_filter() {
    let source = InMemorySource::new().with_project("P9", vec![]);
    let users = InMemoryUsers::new(&[]);

    let report = reports::velocity(&source, &users, &test_config(), Some("P9"), &since()).unwrap();

    assert_eq!(report.project_id, "P9");
    assert_eq!(report.since, "2024-05-01T00:00:00");
    match &source.calls()[..] {
        [SourceCall::Project { id, filter, fields }] => {
            assert_eq!(id, "P9");
            assert_eq!(filter, &TaskFilter::completed_since("2024-05-01T00:00:00"));
            assert!(fields.iter().any(|f| f == "custom_fields.enum_value.name"));
        },
        calls => panic!("unexpected calls: {calls:?}"),
    }
}

#[test]
fn test_velocity_unknown_user_is_an_error() {
    let source = InMemorySource::new().with_project(
        SPRINT,
        vec![TaskBuilder::new("1", "A").completed_by("GHOST").points(Some("1")).build()],
    );
    let users = InMemoryUsers::new(&[]);

    let err = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap_err();

    assert!(matches!(err, Error::Api(ref e) if e.code == ErrorCode::NotFound));
}

#[test]
fn test_velocity_listing_failure_propagates() {
    let source = InMemorySource::new().with_failing_project(
        SPRINT,
        vec![TaskBuilder::new("1", "A").completed_by("U1").points(Some("1")).build()],
        ApiError::from_status(401, "bad token"),
    );
    let users = InMemoryUsers::new(&[("U1", "Ada")]);

    let err = reports::velocity(&source, &users, &test_config(), None, &since()).unwrap_err();

    assert!(matches!(err, Error::Api(ref e) if e.code == ErrorCode::Unauthorized));
    assert!(users.lookups().is_empty());
}

// =============================================================================
// PROJECT STATS (epics)
// =============================================================================

#[test]
fn test_project_stats_counts_per_epic() {
    let source = InMemorySource::new().with_project(
        BACKLOG,
        vec![
            TaskBuilder::new("1", "A").epic(Some("Billing")).completed(true).build(),
            TaskBuilder::new("2", "B").epic(Some("Billing")).build(),
            TaskBuilder::new("3", "C").epic(Some("Search")).completed(true).build(),
            TaskBuilder::new("4", "D").epic(Some("Search")).completed(true).build(),
            TaskBuilder::new("5", "E").build(),
        ],
    );

    let report = reports::project_stats(&source, &test_config(), None).unwrap();

    assert_eq!(report.project_id, BACKLOG);
    assert_eq!(report.total_tasks, 5);
    let rows: Vec<_> = report
        .epics
        .iter()
        .map(|r| (r.epic.as_str(), r.completed, r.incomplete))
        .collect();
    assert_eq!(
        rows,
        vec![("Search", 2, 0), ("Billing", 1, 1), (EPIC_NOT_SET, 0, 1)]
    );
}

#[test]
fn test_project_stats_counts_sum_to_total() {
    let source = InMemorySource::new().with_project(
        "P1",
        (0..7)
            .map(|i| {
                TaskBuilder::new(&i.to_string(), "T")
                    .epic(if i % 2 == 0 { Some("Even") } else { None })
                    .completed(i % 3 == 0)
                    .build()
            })
            .collect(),
    );

    let report = reports::project_stats(&source, &test_config(), Some("P1")).unwrap();

    let sum: u32 = report.epics.iter().map(|r| r.completed + r.incomplete).sum();
    assert_eq!(sum as usize, report.total_tasks);
    assert_eq!(report.total_tasks, 7);
}

#[test]
fn test_project_stats_empty_project() {
    let source = InMemorySource::new().with_project(BACKLOG, vec![]);

    let report = reports::project_stats(&source, &test_config(), None).unwrap();

    assert_eq!(report.total_tasks, 0);
    assert!(report.epics.is_empty());
}

#[test]
fn test_project_stats_is_repeatable() {
    let source = InMemorySource::new().with_project(
        BACKLOG,
        vec![
            TaskBuilder::new("1", "A").epic(Some("X")).completed(true).build(),
            TaskBuilder::new("2", "B").epic(Some("Y")).build(),
        ],
    );
    let config = test_config();

    let first = reports::project_stats(&source, &config, None).unwrap();
    let second = reports::project_stats(&source, &config, None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_project_stats_unknown_project_fails() {
    let source = InMemorySource::new();

    let err = reports::project_stats(&source, &test_config(), Some("nope")).unwrap_err();

    assert!(matches!(err, Error::Api(ref e) if e.is_not_found_or_permission()));
}

// =============================================================================
// SPECIFIC TASKS
// =============================================================================

#[test]
fn test_specific_tasks_sorted_and_banded() {
    let source = InMemorySource::new()
        .with_task(TaskBuilder::new("1", "New").created("2024-02-01T10:00:00.000Z").build())
        .with_task(TaskBuilder::new("2", "Ancient").created("2022-01-15T10:00:00.000Z").build())
        .with_task(TaskBuilder::new("3", "Older").created("2022-03-01T10:00:00.000Z").build())
        .with_task(
            TaskBuilder::new("4", "Last year")
                .created("2023-11-20T10:00:00.000Z")
                .assignee("Ada")
                .build(),
        );
    let ids: Vec<String> = ["1", "2", "3", "4"].iter().map(ToString::to_string).collect();

    let report = reports::specific_tasks(&source, &test_config(), &ids).unwrap();

    let names: Vec<_> = report.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ancient", "Older", "Last year", "New"]);
    let bands: Vec<_> = report.rows.iter().map(|r| r.band).collect();
    assert_eq!(bands, vec![Band::Oldest, Band::Oldest, Band::Old, Band::ThisYear]);
    assert_eq!(report.bands.oldest, 2);
    assert_eq!(report.bands.old, 1);
    assert_eq!(report.bands.this_year, 1);
    assert_eq!(report.rows[2].assignee, "Ada");
    assert_eq!(report.rows[0].assignee, "unknown");
}

#[test]
fn test_specific_tasks_band_counts_sum_to_rows() {
    let source = InMemorySource::new()
        .with_task(TaskBuilder::new("1", "A").created("2020-01-01T00:00:00.000Z").build())
        .with_task(TaskBuilder::new("2", "B").build());
    let ids = vec!["1".to_string(), "2".to_string()];

    let report = reports::specific_tasks(&source, &test_config(), &ids).unwrap();

    let counted = report.bands.oldest + report.bands.old + report.bands.this_year;
    assert_eq!(counted, report.rows.len());
    // no creation date sorts last
    assert_eq!(report.rows[1].name, "B");
}

#[test]
fn test_specific_tasks_unknown_id_fails() {
    let source = InMemorySource::new().with_task(TaskBuilder::new("1", "A").build());
    let ids = vec!["1".to_string(), "404".to_string()];

    let err = reports::specific_tasks(&source, &test_config(), &ids).unwrap_err();

    assert!(matches!(err, Error::Api(ref e) if e.code == ErrorCode::NotFound));
}

#[test]
fn test_specific_tasks_empty_list() {
    let source = InMemorySource::new();

    let report = reports::specific_tasks(&source, &test_config(), &[]).unwrap();

    assert!(report.rows.is_empty());
    assert!(source.calls().is_empty());
}

#[test]
fn test_read_task_ids_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("list_of_ids.txt");

    let err = reports::read_task_ids(&path).unwrap_err();

    assert!(matches!(err, Error::TaskIdFile { .. }));
}

#[test]
fn test_read_task_ids_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ids.txt");
    std::fs::write(&path, "111\n222\n\n333\n").unwrap();

    let ids = reports::read_task_ids(&path).unwrap();

    assert_eq!(ids, vec!["111", "222", "333"]);
}

// =============================================================================
// LISTINGS AND TAGS
// =============================================================================

#[test]
fn test_code_orange_lists_tagged_tasks() {
    let source = InMemorySource::new().with_tag(
        CODE_ORANGE,
        vec![
            TaskBuilder::new("1", "Fire").assignee("Ada").build(),
            TaskBuilder::new("2", "Smoke")
                .completed_by("U1")
                .completed_at("2024-05-02T09:00:00.000Z")
                .build(),
        ],
    );

    let listing = reports::code_orange(&source, &test_config()).unwrap();

    assert_eq!(listing.rows.len(), 2);
    assert_eq!(listing.rows[0].assignee, "Ada");
    assert_eq!(listing.rows[1].completed_by.as_deref(), Some("U1"));
    assert!(listing.rows[1].completed);
}

#[test]
fn test_support_board_uses_configured_project() {
    let source = InMemorySource::new().with_project(
        SUPPORT_BOARD,
        vec![TaskBuilder::new("1", "Ticket").completed_by("U1").build()],
    );

    let listing = reports::support_board(&source, &test_config(), None, &since()).unwrap();

    assert_eq!(listing.rows.len(), 1);
    assert!(matches!(
        &source.calls()[..],
        [SourceCall::Project { id, filter, .. }]
            if id == SUPPORT_BOARD && filter.completed == Some(true)
    ));
}

#[test]
fn test_support_board_project_override() {
    let source = InMemorySource::new().with_project("OTHER", vec![]);

    let listing = reports::support_board(&source, &test_config(), Some("OTHER"), &since()).unwrap();

    assert!(listing.rows.is_empty());
}

#[test]
fn test_support_tags_counts_each_tag() {
    let config = test_config();
    let tags = &config.settings.tags.support;
    let source = InMemorySource::new()
        .with_tag(
            &tags[0].id,
            vec![TaskBuilder::new("1", "A").build(), TaskBuilder::new("2", "B").build()],
        )
        .with_tag(&tags[1].id, vec![TaskBuilder::new("3", "C").build()]);

    let report = reports::support_tags(&source, &config).unwrap();

    assert_eq!(report.tags.len(), tags.len());
    assert_eq!(report.tags[0].tasks, 2);
    assert_eq!(report.tags[1].tasks, 1);
    assert!(report.tags[2..].iter().all(|t| t.tasks == 0));
    assert_eq!(report.tags[0].name, tags[0].name);
}
