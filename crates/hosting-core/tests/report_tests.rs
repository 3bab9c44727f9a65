//! Report rendering: ordering, markup, nesting.

use hosting_core::model::{Finding, FindingSet};
use hosting_core::report::{append_report, render};

#[test]
fn renders_most_severe_first() {
    let mut set = FindingSet::new();
    set.insert(Finding::info("informational"));
    set.insert(Finding::warning("be careful"));
    set.insert(Finding::required("must fix"));

    let out = render(&set);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "* {color:red}[Required]{color} must fix");
    assert_eq!(lines[1], "* {color:orange}[Warning]{color} be careful");
    assert_eq!(lines[2], "* {color:black}[Info]{color} informational");
}

#[test]
fn rendering_is_idempotent() {
    let mut set = FindingSet::new();
    set.insert(Finding::required("alpha"));
    set.insert(Finding::required("beta"));
    set.insert(Finding::info("gamma"));

    assert_eq!(render(&set), render(&set));
}

#[test]
fn equal_severity_keeps_insertion_order() {
    let mut set = FindingSet::new();
    set.insert(Finding::required("first"));
    set.insert(Finding::required("second"));

    let out = render(&set);
    let first = out.find("first").unwrap();
    let second = out.find("second").unwrap();
    assert!(first < second);
}

#[test]
fn subitems_render_nested_without_severity_label() {
    let mut set = FindingSet::new();
    set.insert(
        Finding::required("name the repository properly").with_subitems(vec![
            Finding::info("all lowercase"),
            Finding::info("hyphens instead of spaces"),
        ]),
    );

    let out = render(&set);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "* {color:red}[Required]{color} name the repository properly");
    assert_eq!(lines[1], "** all lowercase");
    assert_eq!(lines[2], "** hyphens instead of spaces");
}

#[test]
fn nested_subitems_indent_one_level_per_depth() {
    let mut set = FindingSet::new();
    set.insert(Finding::required("outer").with_subitems(vec![
        Finding::info("middle").with_subitems(vec![Finding::info("inner")]),
    ]));

    let out = render(&set);
    assert!(out.contains("\n** middle\n"));
    assert!(out.contains("\n*** inner\n"));
}

#[test]
fn append_starts_at_caller_depth() {
    let mut set = FindingSet::new();
    set.insert(Finding::info("plain"));

    let mut out = String::new();
    append_report(&set, &mut out, 2);
    assert_eq!(out, "** plain\n");
}
