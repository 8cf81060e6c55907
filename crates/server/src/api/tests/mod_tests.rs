use super::*;
use shared::{domain::Activity, error::ErrorCode};

fn setup() -> ApiContext {
    ApiContext::new(default_roster())
}

#[tokio::test]
async fn lists_seeded_activities_in_order() {
    let ctx = setup();
    let roster = list_activities(&ctx).await;
    assert_eq!(roster.len(), 9);
    assert_eq!(roster.names().next(), Some("Chess Club"));
    assert_eq!(roster.get("Chess Club").expect("chess").max_participants, 12);
}

#[tokio::test]
async fn signup_appends_participant() {
    let ctx = setup();
    let response = signup(&ctx, "Chess Club", "tester@school.edu")
        .await
        .expect("signup");
    assert_eq!(response.message, "Signed up tester@school.edu for Chess Club");

    let roster = list_activities(&ctx).await;
    let participants = &roster.get("Chess Club").expect("chess").participants;
    assert_eq!(participants.last().map(String::as_str), Some("tester@school.edu"));
}

#[tokio::test]
async fn signup_unknown_activity_is_not_found() {
    let ctx = setup();
    let err = signup(&ctx, "NoSuchClub", "foo@bar")
        .await
        .expect_err("should fail");
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(err.message, "Activity not found");
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let ctx = setup();
    let err = signup(&ctx, "Chess Club", "michael@mergington.edu")
        .await
        .expect_err("should fail");
    assert_eq!(err.code, ErrorCode::Validation);
    assert_eq!(err.message, "Student is already signed up");
}

#[tokio::test]
async fn signup_rejects_full_activity() {
    let ctx = ApiContext::new(
        [("Solo", Activity::new("one seat", "Sundays", 1).with_participants(["a@b.c"]))]
            .into_iter()
            .collect(),
    );
    let err = signup(&ctx, "Solo", "d@e.f").await.expect_err("should fail");
    assert_eq!(err.message, "Activity is full");
    assert_eq!(list_activities(&ctx).await.get("Solo").expect("solo").participants.len(), 1);
}

#[tokio::test]
async fn blank_email_is_rejected() {
    let ctx = setup();
    let err = signup(&ctx, "Chess Club", "  ").await.expect_err("should fail");
    assert_eq!(err.code, ErrorCode::Validation);
}

#[tokio::test]
async fn unregister_removes_participant() {
    let ctx = setup();
    signup(&ctx, "Chess Club", "somebody@school.edu")
        .await
        .expect("signup");

    let response = unregister(&ctx, "Chess Club", "somebody@school.edu")
        .await
        .expect("unregister");
    assert!(response.message.starts_with("Removed"));

    let roster = list_activities(&ctx).await;
    assert!(!roster
        .get("Chess Club")
        .expect("chess")
        .has_participant("somebody@school.edu"));
}

#[tokio::test]
async fn unregister_unknown_activity_is_not_found() {
    let ctx = setup();
    let err = unregister(&ctx, "NoClub", "x@x").await.expect_err("should fail");
    assert_eq!(err.message, "Activity not found");
}

#[tokio::test]
async fn unregister_absent_student_is_not_found() {
    let ctx = setup();
    let err = unregister(&ctx, "Chess Club", "ghost@school.edu")
        .await
        .expect_err("should fail");
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(err.message, "Student not signed up");
}
