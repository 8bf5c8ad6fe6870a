use chrono::{TimeZone, Utc};
use notejar_core::{Note, NoteDraft, NoteValidationError, MIN_TITLE_CHARS};
use uuid::Uuid;

#[test]
fn note_new_sets_identity_and_timestamp() {
    let before = Utc::now();
    let note = Note::new("Groceries", "Milk, eggs, bread");
    let after = Utc::now();

    assert!(!note.id.is_nil());
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "Milk, eggs, bread");
    assert!(note.created_at >= before && note.created_at <= after);
}

#[test]
fn note_new_generates_distinct_ids() {
    let first = Note::new("First note", "body");
    let second = Note::new("First note", "body");

    assert_ne!(first.id, second.id);
}

#[test]
fn note_preserves_submitted_fields_verbatim() {
    let note = Note::new("  Padded title  ", "   ");

    assert_eq!(note.title, "  Padded title  ");
    assert_eq!(note.content, "   ");
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
    let note = Note::with_id(note_id, created_at, "Meeting notes", "Agenda: roadmap");

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note_id.to_string());
    assert_eq!(json["title"], "Meeting notes");
    assert_eq!(json["content"], "Agenda: roadmap");
    assert_eq!(json["created_at"], "2024-03-01T10:00:00Z");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn draft_validate_accepts_minimum_length_title() {
    let draft = NoteDraft::new("12345", "x");
    assert_eq!(draft.title.trim().chars().count(), MIN_TITLE_CHARS);
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn draft_validate_counts_title_after_trimming() {
    let err = NoteDraft::new("  Hi  ", "body").validate().unwrap_err();
    assert_eq!(err, NoteValidationError::TitleTooShort { chars: 2 });
}

#[test]
fn draft_validate_rejects_absent_title_as_zero_chars() {
    let err = NoteDraft::new("", "body").validate().unwrap_err();
    assert_eq!(err, NoteValidationError::TitleTooShort { chars: 0 });
}

#[test]
fn draft_validate_counts_characters_not_bytes() {
    // Five non-ASCII characters are twelve bytes but still a valid title.
    let draft = NoteDraft::new("äöüéñ", "body");
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn draft_validate_rejects_empty_content() {
    let err = NoteDraft::new("Valid title", "").validate().unwrap_err();
    assert_eq!(err, NoteValidationError::ContentEmpty);
}

#[test]
fn draft_validate_accepts_whitespace_only_content() {
    let draft = NoteDraft::new("Valid title", "   \n  ");
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn draft_validate_reports_title_failure_before_content() {
    let err = NoteDraft::new("", "").validate().unwrap_err();
    assert_eq!(err, NoteValidationError::TitleTooShort { chars: 0 });
}

#[test]
fn validation_messages_name_the_violated_rule() {
    let title_err = NoteDraft::new("Hi", "body").validate().unwrap_err();
    assert!(
        title_err.to_string().contains("at least 5 characters"),
        "unexpected message: {title_err}"
    );

    let content_err = NoteDraft::new("Valid title", "").validate().unwrap_err();
    assert_eq!(content_err.to_string(), "content must not be empty");
}
