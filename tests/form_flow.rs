//! End-to-end form scenarios, from raw input values to the normalized
//! payload a page would submit, including the checks pages run around the
//! form itself (password confirmation, CSRF token, route guard).

use std::collections::BTreeMap;
use std::time::Duration;

use atlas_forms::{
    authors_list, guard_path, validate_csrf_token, validate_password_match, Alert, AlertStack,
    FieldKind, FieldMark, FieldRule, FormBinding, FormValidator,
};

fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_registration_form_round_trip() {
    let mut binding = FormBinding::new(
        FormValidator::standard(),
        ["email", "username", "password"],
    );

    // The user tabs through the form, mistyping the email first.
    binding.on_blur("email", "reader@sutra");
    assert_eq!(binding.state("email").mark, FieldMark::Invalid);

    binding.on_focus("email");
    binding.on_blur("email", "  Reader@Example.COM ");
    binding.on_blur("username", "sutra_reader");
    binding.on_blur("password", "Re4der-pass");
    assert!(binding.is_clean());

    let report = binding.on_submit(&values(&[
        ("email", "  Reader@Example.COM "),
        ("username", "sutra_reader"),
        ("password", "Re4der-pass"),
    ]));
    assert!(report.is_valid());

    let payload = report.normalized();
    assert_eq!(
        payload.get("email").map(String::as_str),
        Some("reader@example.com")
    );
    assert_eq!(
        payload.get("username").map(String::as_str),
        Some("sutra_reader")
    );
    assert!(
        !payload.contains_key("password"),
        "The submitted password is always the raw input"
    );

    // The page still confirms the retyped password and the form token.
    assert!(validate_password_match("Re4der-pass", "Re4der-pass").valid);
    assert!(validate_csrf_token("5f4dcc3b5aa765d61d83").is_ok());
}

#[test]
fn test_password_mismatch_raises_banner() {
    let outcome = validate_password_match("Abc12345", "Abc12346");
    assert!(!outcome.valid);

    let mut alerts = AlertStack::new();
    alerts.push(Alert::error(outcome.error.unwrap()));

    let banner = alerts.iter().next().unwrap();
    assert_eq!(banner.message, "Passwords do not match");
    assert_eq!(
        banner.css_classes(),
        "alert alert-danger alert-dismissible fade show"
    );
}

#[test]
fn test_resource_form_with_page_specific_rules() {
    let mut validator = FormValidator::standard();
    validator.register(
        "description",
        FieldRule::of(FieldKind::Description).required(),
    );
    validator.register("status", FieldRule::of(FieldKind::Status));

    let mut binding = FormBinding::new(
        validator,
        ["title", "description", "authors", "url", "status"],
    );

    let report = binding.on_submit(&values(&[
        ("title", "  The Large Sutra on Perfect Wisdom  "),
        ("description", "Conze's translation, with his division notes."),
        ("authors", " Edward Conze , , Lex Hixon "),
        ("url", "sutra-atlas.org/texts/large-sutra"),
        ("status", " In Progress "),
    ]));
    assert!(
        report.is_valid(),
        "Unexpected errors: {:?}",
        report.errors().collect::<Vec<_>>()
    );

    let payload = report.normalized();
    assert_eq!(
        payload.get("title").map(String::as_str),
        Some("The Large Sutra on Perfect Wisdom")
    );
    assert_eq!(
        payload.get("url").map(String::as_str),
        Some("https://sutra-atlas.org/texts/large-sutra")
    );
    assert_eq!(
        payload.get("status").map(String::as_str),
        Some("In Progress")
    );
    assert_eq!(
        authors_list(payload.get("authors").map(String::as_str).unwrap_or("")),
        vec!["Edward Conze", "Lex Hixon"]
    );
    assert_eq!(
        binding.state("url").value.as_deref(),
        Some("https://sutra-atlas.org/texts/large-sutra"),
        "The fixed URL is pushed back into the input"
    );

    // Emptying the description now fails, the page made it required.
    let report = binding.on_submit(&values(&[("title", "A title")]));
    assert!(!report.is_valid());
    assert_eq!(
        binding.state("description").error.as_deref(),
        Some("Description is required")
    );
    assert_eq!(
        binding.state("status").mark,
        FieldMark::Valid,
        "A missing optional status still passes as empty"
    );
}

#[test]
fn test_resource_form_surfaces_field_errors() {
    let long_title = "t".repeat(301);

    let mut validator = FormValidator::new();
    validator.register("title", FieldRule::of(FieldKind::Title));
    validator.register("status", FieldRule::of(FieldKind::Status));
    let mut binding = FormBinding::new(validator, ["title", "status"]);

    let report = binding.on_submit(&values(&[
        ("title", long_title.as_str()),
        ("status", "Done"),
    ]));

    let errors: Vec<(&str, &str)> = report.errors().collect();
    assert_eq!(
        errors,
        vec![
            (
                "status",
                "Invalid status. Valid values: Not Started, In Progress, Paused, Completed"
            ),
            ("title", "Title too long (max 300 characters)"),
        ]
    );
}

#[test]
fn test_unusable_csrf_token_asks_for_refresh() {
    let mut alerts = AlertStack::new();

    let rejection = validate_csrf_token("stub").unwrap_err();
    alerts.push(rejection.alert);

    assert_eq!(
        alerts.iter().next().map(|a| a.message.as_str()),
        Some("Security token missing. Please refresh the page.")
    );
}

#[test]
fn test_detail_page_guard_redirects_on_bad_id() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(guard_path("/collection/17").is_ok());

    let rejection = guard_path("/collection/17abc").unwrap_err();
    let mut alerts = AlertStack::new();
    alerts.push(rejection.alert.clone());

    assert_eq!(rejection.redirect.target, "/collections");
    assert_eq!(rejection.redirect.delay, Duration::from_millis(2000));
    assert_eq!(
        alerts.iter().next().map(|a| a.message.as_str()),
        Some("Invalid collection ID. Redirecting to collections page.")
    );
}
