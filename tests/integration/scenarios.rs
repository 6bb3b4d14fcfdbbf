//! Classification scenarios for each kind of tool event

use docwatch::classify::Classifier;
use docwatch::hooks::ToolEvent;
use docwatch::rules::RuleSet;
use serde_json::json;
use std::collections::BTreeSet;
use tempfile::TempDir;

use super::payload;

fn classify(input: &str) -> docwatch::classify::Summary {
    let temp_dir = TempDir::new().unwrap();
    let classifier = Classifier::new(
        RuleSet::builtin(),
        temp_dir.path(),
        temp_dir.path().join("docs"),
    );
    let event = ToolEvent::parse(input).expect("valid event");
    classifier.classify(&event)
}

fn doc_set(summary: &docwatch::classify::Summary) -> BTreeSet<&str> {
    summary.docs_to_update.iter().map(String::as_str).collect()
}

#[test]
fn test_new_api_route() {
    let summary = classify(&payload(
        "Edit",
        json!({
            "file_path": "app/api/users/route.ts",
            "old_string": "",
            "new_string": "export async function POST(request: Request) {\n  return Response.json({})\n}"
        }),
    ));

    assert!(summary.needs_update);
    let docs = doc_set(&summary);
    assert!(docs.contains("api/endpoints.md"));
    assert!(docs.contains("api/README.md"));
    assert!(summary
        .changes_detected
        .contains(&"New API endpoint in app/api/users/route.ts".to_string()));
    assert!(summary
        .recommendations
        .contains(&"Update API documentation with new endpoints and their specifications".to_string()));
}

#[test]
fn test_new_component() {
    let summary = classify(&payload(
        "Write",
        json!({
            "file_path": "components/SignupForm.tsx",
            "content": "export default function SignupForm({ onSubmit }: Props) {\n  return <form />\n}"
        }),
    ));

    let docs = doc_set(&summary);
    assert!(docs.contains("architecture/components.md"));
    assert!(docs.contains("components/forms.md"));
    assert_eq!(summary.changes_detected, vec!["New component: SignupForm"]);
}

#[test]
fn test_schema_change_recorded_once() {
    let summary = classify(&payload(
        "Edit",
        json!({
            "file_path": "convex/migrations/002.ts",
            "new_string": "create table bookings (id int);\nALTER TABLE braiders ADD COLUMN rating int;\nCREATE TABLE slots (id int);"
        }),
    ));

    let docs = doc_set(&summary);
    assert!(docs.contains("architecture/database.md"));
    assert!(docs.contains("convex_backend_guide.md"));
    let schema_records = summary
        .changes_detected
        .iter()
        .filter(|c| *c == "Database schema change detected")
        .count();
    assert_eq!(schema_records, 1);
}

#[test]
fn test_env_vars_in_order() {
    let summary = classify(&payload(
        "Edit",
        json!({
            "file_path": "lib/clients.ts",
            "new_string": "const key = process.env.API_KEY\nconst db = process.env.DB_URL"
        }),
    ));

    assert!(doc_set(&summary).contains("deployment/environment-variables.md"));
    assert_eq!(
        summary.changes_detected,
        vec![
            "New environment variable: API_KEY",
            "New environment variable: DB_URL",
        ]
    );
}

#[test]
fn test_completed_todo_matches_multiple_keywords() {
    let summary = classify(&payload(
        "TodoWrite",
        json!({
            "todos": [
                {"id": "1", "status": "completed", "content": "Add booking API endpoint"},
                {"id": "2", "status": "pending", "content": "Update pricing page"}
            ]
        }),
    ));

    let docs = doc_set(&summary);
    assert!(docs.contains("api/endpoints.md"));
    assert!(docs.contains("features/booking.md"));
    assert!(!docs.contains("features/pricing.md"));
    assert!(summary
        .changes_detected
        .iter()
        .all(|c| c == "Task completed: Add booking API endpoint"));
}

#[test]
fn test_overlapping_path_rules_union() {
    let summary = classify(&payload(
        "Edit",
        json!({ "file_path": "app/booking/BookingCTA.config.tsx" }),
    ));

    let expected: BTreeSet<&str> = [
        "architecture/frontend.md",
        "architecture/components.md",
        "deployment/configuration.md",
        "features/booking.md",
        "user-guides/booking-system.md",
    ]
    .into_iter()
    .collect();
    assert_eq!(doc_set(&summary), expected);
    assert!(summary.changes_detected.is_empty());
}

#[test]
fn test_notebook_edit_has_no_docs() {
    let summary = classify(&payload(
        "NotebookEdit",
        json!({ "notebook_path": "analysis/app/api/metrics.ipynb", "new_source": "process.env.X" }),
    ));

    assert!(!summary.needs_update);
    assert!(summary.tasks.is_none());
    assert_eq!(summary.touched, vec!["analysis/app/api/metrics.ipynb"]);
}

#[test]
fn test_classify_is_idempotent() {
    let input = payload(
        "Edit",
        json!({
            "file_path": "components/PricingCTA.tsx",
            "new_string": "export function PricingCTA() { return process.env.NEXT_PUBLIC_PLAN }"
        }),
    );

    let first = classify(&input);
    let second = classify(&input);
    assert_eq!(doc_set(&first), doc_set(&second));
    assert_eq!(first.changes_detected, second.changes_detected);
}
