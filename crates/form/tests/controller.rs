use form::{FormController, FormValues, SubmitEvent, ValidationRule, ValidationSchema};
use pretty_assertions::assert_eq;

fn employee_form() -> FormController {
    FormController::builder()
        .default_value("firstName", "")
        .default_value("lastName", "")
        .default_value("username", "")
        .default_value("email", "")
        .schema(
            ValidationSchema::new()
                .field("firstName", ValidationRule::new().required().min_length(2).max_length(50))
                .field("lastName", ValidationRule::new().required().min_length(2).max_length(50))
                .field("username", ValidationRule::new().required().min_length(3).max_length(20))
                .field("email", ValidationRule::new().email()),
        )
        .build()
}

#[test]
fn required_empty_fields_fail_validation() {
    let mut form = employee_form();
    assert!(!form.validate());
    assert_eq!(form.error("firstName"), Some("First Name is required"));
    assert_eq!(form.error("lastName"), Some("Last Name is required"));
    assert_eq!(form.error("username"), Some("Username is required"));
    assert_eq!(form.error("email"), None);
}

#[test]
fn satisfied_fields_have_no_entry() {
    let mut form = employee_form();
    form.handle_change("firstName", "Ada");
    assert!(!form.validate());
    assert!(!form.errors().contains_key("firstName"));
    assert!(form.errors().contains_key("lastName"));
}

#[test]
fn validate_is_idempotent() {
    let mut form = employee_form();
    form.handle_change("username", "ab");
    let first = form.validate();
    let errors = form.errors().clone();
    let second = form.validate();
    assert_eq!(first, second);
    assert_eq!(&errors, form.errors());
}

#[test]
fn editing_clears_only_that_touched_error() {
    let mut form = employee_form();
    form.handle_blur("firstName");
    form.handle_blur("lastName");
    assert!(!form.validate());

    form.handle_change("firstName", "A");
    assert_eq!(form.error("firstName"), Some(""));
    assert_eq!(form.error("lastName"), Some("Last Name is required"));
    assert_eq!(form.error("username"), Some("Username is required"));
}

#[test]
fn error_keys_are_schema_keys() {
    let mut form = employee_form();
    form.handle_change("nickname", "");
    form.validate();
    assert!(form
        .errors()
        .keys()
        .all(|k| form.schema().contains(k)));
    assert_eq!(form.value("nickname"), Some(""));
}

#[test]
fn reset_restores_defaults_and_clears_state() {
    let mut form = employee_form();
    let defaults = form.default_values().clone();

    form.handle_change("firstName", "Grace");
    form.handle_change("extra", "value");
    form.handle_blur("firstName");
    form.validate();

    form.reset();
    assert_eq!(form.values(), &defaults);
    assert!(form.errors().is_empty());
    assert!(form.touched().is_empty());
}

#[test]
fn defaults_are_copied_at_construction() {
    let mut defaults = FormValues::new();
    defaults.insert("username".into(), "root".into());
    let mut form = FormController::builder()
        .default_values(defaults.clone())
        .build();

    defaults.insert("username".into(), "changed".into());
    form.handle_change("username", "other");
    form.reset();
    assert_eq!(form.value("username"), Some("root"));
}

#[test]
fn username_scenario() {
    let mut form = FormController::builder()
        .default_value("username", "")
        .rule(
            "username",
            ValidationRule::new().required().min_length(3).max_length(20),
        )
        .build();

    assert!(!form.validate());
    assert_eq!(form.error("username"), Some("Username is required"));

    form.handle_change("username", "ab");
    assert!(!form.validate());
    assert_eq!(
        form.error("username"),
        Some("Username must be at least 3 characters")
    );

    form.handle_change("username", "abc");
    assert!(form.validate());
    assert!(form.errors().is_empty());

    form.handle_change("username", "a".repeat(21));
    assert!(!form.validate());
    assert_eq!(
        form.error("username"),
        Some("Username must be no more than 20 characters")
    );
}

#[test]
fn optional_email_scenario() {
    let mut form = FormController::builder()
        .rule("email", ValidationRule::new().email())
        .build();

    form.handle_change("email", "");
    assert!(form.validate());

    form.handle_change("email", "not-an-email");
    assert!(!form.validate());
    assert_eq!(form.error("email"), Some("Invalid email format"));

    form.handle_change("email", "a@b.co");
    assert!(form.validate());
    assert_eq!(form.error("email"), None);
}

#[test]
fn submit_calls_back_only_when_valid() {
    let mut form = employee_form();
    let mut submitted: Vec<FormValues> = Vec::new();

    let mut handler = form.handle_submit(|values: &FormValues| submitted.push(values.clone()));
    let mut event = SubmitEvent::new();
    assert!(!handler.handle(&mut form, &mut event));
    assert!(event.default_prevented());

    form.handle_change("firstName", "Ada");
    form.handle_change("lastName", "Lovelace");
    form.handle_change("username", "ada");
    assert!(handler.handle(&mut form, &mut SubmitEvent::new()));
    drop(handler);

    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].get("username").map(String::as_str), Some("ada"));
    assert_eq!(&submitted[0], form.values());
}

#[test]
fn custom_validator_runs_after_builtin_checks() {
    let mut form = FormController::builder()
        .default_value("password", "")
        .rule(
            "password",
            ValidationRule::new().required().min_length(6).validator(|v| {
                if v.chars().any(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err("Password must contain a digit".into())
                }
            }),
        )
        .build();

    form.handle_change("password", "abc");
    form.validate();
    assert_eq!(
        form.error("password"),
        Some("Password must be at least 6 characters")
    );

    form.handle_change("password", "abcdef");
    form.validate();
    assert_eq!(form.error("password"), Some("Password must contain a digit"));

    form.handle_change("password", "abcde1");
    assert!(form.validate());
}
