//! Finding identity and deduplication.

use hosting_core::model::{Finding, FindingSet, Severity};

#[test]
fn equal_findings_ignore_subitems() {
    let plain = Finding::required("missing README");
    let with_subs = Finding::required("missing README")
        .with_subitems(vec![Finding::info("add one at the repository root")]);

    assert_eq!(plain, with_subs);
}

#[test]
fn findings_differ_by_severity() {
    let a = Finding::required("missing README");
    let b = Finding::warning("missing README");
    assert_ne!(a, b);
}

#[test]
fn findings_differ_by_message() {
    let a = Finding::required("missing README");
    let b = Finding::required("missing LICENSE");
    assert_ne!(a, b);
}

#[test]
fn set_keeps_one_instance_regardless_of_insertion_order() {
    let first = Finding::required("invalid repository URL ''");
    let second = Finding::required("invalid repository URL ''")
        .with_subitems(vec![Finding::info("the field is empty")]);

    let mut forward = FindingSet::new();
    assert!(forward.insert(first.clone()));
    assert!(!forward.insert(second.clone()));
    assert_eq!(forward.len(), 1);

    let mut reverse = FindingSet::new();
    assert!(reverse.insert(second));
    assert!(!reverse.insert(first));
    assert_eq!(reverse.len(), 1);
}

#[test]
fn extend_deduplicates_across_batches() {
    let mut set = FindingSet::new();
    set.extend(vec![
        Finding::required("one"),
        Finding::warning("two"),
    ]);
    set.extend(vec![
        Finding::required("one"),
        Finding::info("three"),
    ]);

    assert_eq!(set.len(), 3);
}

#[test]
fn severity_is_ordered_ascending() {
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Required);
}

#[test]
fn severity_rendering_metadata() {
    assert_eq!(Severity::Required.color(), "red");
    assert_eq!(Severity::Warning.color(), "orange");
    assert_eq!(Severity::Info.color(), "black");
    assert_eq!(Severity::Required.label(), "Required");
}
