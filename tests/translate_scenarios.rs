//! End-to-end translation scenarios
//!
//! Each case feeds a small source through `translate` and checks the exact
//! output text, including newlines and indentation.

use acc2omp::{translate, TranslateError};
use rstest::rstest;

#[rstest]
#[case::parallel_loop_num_workers(
    "#pragma acc parallel loop num_workers(4)\n",
    "#pragma omp parallel for num_threads(4)\n"
)]
#[case::parallel_loop_copy(
    "#pragma acc parallel loop copy(a,b)\n",
    "#pragma omp target data map(tofrom: a, b)\n#pragma omp parallel for\n"
)]
#[case::loop_gang(
    "#pragma acc loop gang\n",
    "#pragma omp teams\n#pragma omp for\n"
)]
#[case::loop_reduction(
    "#pragma acc loop reduction(+:sum)\n",
    "#pragma omp for reduction(+:sum)\n"
)]
#[case::scop("#pragma acc scop\n", "#pragma scop\n")]
#[case::endscop("#pragma acc endscop\n", "#pragma endscop\n")]
#[case::parallel_alone("#pragma acc parallel\n", "#pragma omp parallel\n")]
#[case::vector_plain(
    "#pragma acc loop vector\n",
    "#pragma omp for simd\n"
)]
#[case::vector_length(
    "#pragma acc loop vector(8)\n",
    "#pragma omp for simd simdlen(8)\n"
)]
#[case::collapse(
    "#pragma acc loop collapse(3) independent\n",
    "#pragma omp for collapse(3)\n"
)]
#[case::reduction_max(
    "#pragma acc parallel loop reduction(max:m, n)\n",
    "#pragma omp parallel for reduction(max:m, n)\n"
)]
#[case::reduction_logical(
    "#pragma acc loop reduction(&&:ok)\n",
    "#pragma omp for reduction(&&:ok)\n"
)]
#[case::data_region(
    "#pragma acc data copyin(x) copyout(y) create(tmp)\n",
    "#pragma omp target data map(to: x) map(from: y) map(alloc: tmp)\n"
)]
#[case::sub_ranges(
    "#pragma acc parallel copyin(a[0:n], m[i][0:n])\n",
    "#pragma omp target data map(to: a[0:n], m[i][0:n])\n#pragma omp parallel\n"
)]
#[case::map_order_is_fixed(
    "#pragma acc parallel create(t) copyout(o) copyin(i) copy(c)\n",
    "#pragma omp target data map(tofrom: c) map(to: i) map(from: o) map(alloc: t)\n#pragma omp parallel\n"
)]
#[case::continuation(
    "#pragma acc parallel loop \\\n    num_workers(4) \\\n    copy(a)\n",
    "#pragma omp target data map(tofrom: a)\n#pragma omp parallel for num_threads(4)\n"
)]
#[case::continuation_inside_sub_range(
    "#pragma acc data copy(a[0:\\\nn])\n",
    "#pragma omp target data map(tofrom: a[0:n])\n"
)]
#[case::indentation_on_every_line(
    "\t  #pragma acc loop gang collapse(2)\n",
    "\t  #pragma omp teams\n\t  #pragma omp for collapse(2)\n"
)]
#[case::reserved_word_as_name(
    "#pragma acc data copy(data, loop)\n",
    "#pragma omp target data map(tofrom: data, loop)\n"
)]
#[case::spaced_pragma_marker("# pragma acc scop\n", "#pragma scop\n")]
#[case::directive_at_end_of_input(
    "x = 1;\n#pragma acc loop",
    "x = 1;\n#pragma omp for\n"
)]
#[case::foreign_pragma_untouched(
    "#pragma omp barrier\n#pragma once\n",
    "#pragma omp barrier\n#pragma once\n"
)]
#[case::foreign_pragma_with_continuation(
    "#pragma GCC diagnostic \\\n  push\nint x;\n",
    "#pragma GCC diagnostic \\\n  push\nint x;\n"
)]
#[case::pragma_markers_in_comment(
    "// Prefer #pragma once over #pragma pack here\nint x;\n",
    "// Prefer #pragma once over #pragma pack here\nint x;\n"
)]
#[case::pragma_marker_inside_foreign_pragma(
    "#pragma message(\"see #pragma once\")\nint x;\n",
    "#pragma message(\"see #pragma once\")\nint x;\n"
)]
#[case::pragma_marker_in_string(
    "puts(\"#pragma\");\nint x;\n",
    "puts(\"#pragma\");\nint x;\n"
)]
#[case::continuation_with_trailing_blanks(
    "#pragma acc data copy(a[0: \\ \n n])\n",
    "#pragma omp target data map(tofrom: a[0: n])\n"
)]
#[case::crlf_line_endings(
    "int x;\r\n  #pragma acc loop gang\r\nx++;\r\n",
    "int x;\r\n  #pragma omp teams\r\n  #pragma omp for\r\nx++;\r\n"
)]
#[case::last_line_without_newline("int x;\nreturn x;", "int x;\nreturn x;")]
#[case::empty_input("", "")]
fn translates(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(translate(input).unwrap(), expected);
}

#[rstest]
#[case::unknown_clause("#pragma acc parallel async(1)\n", 1)]
#[case::unsupported_construct("int a;\n#pragma acc kernels\n", 2)]
#[case::data_clause_on_loop("#pragma acc loop copy(a)\n", 1)]
#[case::compute_clause_on_data("\n\n#pragma acc data num_workers(2)\n", 3)]
#[case::missing_construct("#pragma acc\n", 1)]
#[case::unbalanced_paren("#pragma acc loop collapse(2\n", 1)]
#[case::empty_data_list("#pragma acc parallel copy()\n", 1)]
#[case::nested_pragma("#pragma acc loop #pragma acc loop\n", 1)]
fn rejects(#[case] input: &str, #[case] line: usize) {
    match translate(input) {
        Err(err @ TranslateError::Syntax { .. }) => assert_eq!(err.line(), line),
        Ok(output) => panic!("expected a syntax error, got output {:?}", output),
    }
}

#[test]
fn failure_discards_the_whole_document() {
    let source = "#pragma acc loop gang\nint a;\n#pragma acc parallel wait\n";
    assert!(translate(source).is_err());
}

#[test]
fn error_reports_column_and_found_token() {
    let err = translate("int a;\n#pragma acc parallel async(1)\n").unwrap_err();
    let TranslateError::Syntax {
        line,
        column,
        found,
        ..
    } = err;
    assert_eq!(line, 2);
    assert_eq!(column, 22);
    assert_eq!(found, "'async'");
}

#[test]
fn duplicate_clauses_keep_both_fragments() {
    assert_eq!(
        translate("#pragma acc loop collapse(2) collapse(3)\n").unwrap(),
        "#pragma omp for collapse(2) collapse(3)\n"
    );
}

#[test]
fn repeated_data_clause_keeps_last_list() {
    assert_eq!(
        translate("#pragma acc data copy(a) copy(b)\n").unwrap(),
        "#pragma omp target data map(tofrom: b)\n"
    );
}
