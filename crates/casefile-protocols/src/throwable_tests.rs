use super::*;

fn sample_trace() -> Vec<StackFrame> {
    vec![
        StackFrame::new("com.acme.Db", "connect").at("Db.java", 42),
        StackFrame::new("com.acme.CheckoutTest", "pays").at("CheckoutTest.java", 17),
    ]
}

#[test]
fn test_test_failure_display_uses_message() {
    let failure = TestFailure::new("java.lang.RuntimeException", Some("db down"));
    assert_eq!(failure.to_string(), "db down");
    assert_eq!(failure.type_name(), "java.lang.RuntimeException");
    assert_eq!(failure.message(), Some("db down"));
}

#[test]
fn test_test_failure_display_without_message() {
    let failure = TestFailure::new("java.lang.IllegalStateException", None);
    assert_eq!(failure.to_string(), "java.lang.IllegalStateException");
    assert!(failure.message().is_none());
}

#[test]
fn test_set_stack_trace_replaces() {
    let mut failure = TestFailure::new("java.lang.RuntimeException", Some("x"))
        .with_stack_trace(vec![StackFrame::new("Old", "frame")]);
    failure.set_stack_trace(sample_trace());
    assert_eq!(failure.stack_trace(), sample_trace().as_slice());
}

#[test]
fn test_generic_failure_names_original_type() {
    let failure = TestFailure::generic("com.unknown.Type", Some("some text"));
    assert_eq!(failure.type_name(), GENERIC_ERROR_TYPE);
    assert_eq!(failure.to_string(), "com.unknown.Type: some text");
}

#[test]
fn test_generic_failure_without_message() {
    let failure = TestFailure::generic("com.unknown.Type", None);
    assert_eq!(failure.to_string(), "com.unknown.Type");
}

#[test]
fn test_remote_driver_error_reports_underlying_type() {
    let err = RemoteDriverError::new("org.openqa.selenium.NoSuchElementException", Some("#pay"));
    assert_eq!(err.type_name(), REMOTE_DRIVER_ERROR_TYPE);
    assert_eq!(
        err.reported_type(),
        Some("org.openqa.selenium.NoSuchElementException")
    );
    assert!(err.to_string().contains("NoSuchElementException"));
    assert!(err.to_string().contains("#pay"));
}

#[test]
fn test_plain_throwable_has_no_reported_type() {
    let failure = TestFailure::new("java.lang.RuntimeException", None);
    assert!(failure.reported_type().is_none());
}

#[test]
fn test_render_stack_trace() {
    let failure =
        TestFailure::new("java.lang.RuntimeException", Some("db down")).with_stack_trace(sample_trace());
    let rendered = render_stack_trace(&failure);
    assert_eq!(
        rendered,
        "java.lang.RuntimeException: db down\n\
         \tat com.acme.Db.connect(Db.java:42)\n\
         \tat com.acme.CheckoutTest.pays(CheckoutTest.java:17)"
    );
}

#[test]
fn test_render_stack_trace_empty() {
    let failure = TestFailure::new("java.lang.Error", None);
    assert_eq!(render_stack_trace(&failure), "java.lang.Error");
}

#[test]
fn test_throwable_is_object_safe() {
    let boxed: Box<dyn Throwable> = Box::new(TestFailure::new("A", Some("b")));
    assert_eq!(boxed.type_name(), "A");
}
