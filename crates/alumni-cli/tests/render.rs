//! Rendering tests for query outcomes.

use alumni_cli::render::{
    EMPTY_RESULT_WARNING, OutputFormat, render_dashboard, render_options, render_outcome,
};
use alumni_model::{Dataset, FilterCriteria, Record};
use alumni_query::{AlumniQueryEngine, DEFAULT_TOP_N};

fn engine() -> AlumniQueryEngine {
    let records = vec![
        Record::new(1, "A", "X", 10.0).unwrap(),
        Record::new(2, "B", "X", 5.0).unwrap(),
        Record::new(3, "A", "Y", 7.0).unwrap(),
    ];
    AlumniQueryEngine::new(Dataset::new(records))
}

#[test]
fn json_report_for_name_filter() {
    let outcome = engine().run(&FilterCriteria::new().with_names(["A"]));
    let rendered = render_outcome(&outcome, DEFAULT_TOP_N, OutputFormat::Json).unwrap();
    insta::assert_snapshot!(rendered, @r#"
    {
      "participant_count": 2,
      "is_empty": false,
      "by_name": [
        {
          "name": "A",
          "total_points": 17.0
        }
      ],
      "top": [
        {
          "name": "A",
          "total_points": 17.0
        }
      ]
    }
    "#);
}

#[test]
fn json_report_for_empty_result() {
    let outcome = engine().run(&FilterCriteria::new().with_platforms(["Z"]));
    let rendered = render_outcome(&outcome, DEFAULT_TOP_N, OutputFormat::Json).unwrap();
    insta::assert_snapshot!(rendered, @r#"
    {
      "participant_count": 0,
      "is_empty": true,
      "by_name": [],
      "top": []
    }
    "#);
}

#[test]
fn empty_result_renders_warning_instead_of_tables() {
    let outcome = engine().run(&FilterCriteria::new().with_platforms(["Z"]));
    assert_eq!(render_dashboard(&outcome, DEFAULT_TOP_N), EMPTY_RESULT_WARNING);
}

#[test]
fn dashboard_lists_totals_and_ranking() {
    let outcome = engine().run(&FilterCriteria::new());
    let rendered = render_dashboard(&outcome, DEFAULT_TOP_N);

    assert!(rendered.starts_with("Alumni System Dashboard\n"));
    assert!(rendered.contains("Total Participants: 3"));
    assert!(rendered.contains("Points by Alumni"));
    assert!(rendered.contains("Top 5 Alumni by Points"));
    assert!(rendered.contains("17"));
    let top_section = rendered
        .split("Top 5 Alumni by Points")
        .nth(1)
        .expect("top section");
    let a = top_section.find(" A ").expect("A in top section");
    let b = top_section.find(" B ").expect("B in top section");
    assert!(a < b, "higher total must be listed first");
}

#[test]
fn options_list_distinct_values() {
    let rendered = render_options(engine().dataset());
    assert!(rendered.starts_with("3 records, 2 names, 2 platforms\n"));
    assert!(rendered.contains('X'));
    assert!(rendered.contains('Y'));
}
