//! End-to-end tests driving the public API the way a presentation layer
//! would: one submission, then every derived view of it.

use std::sync::Arc;
use truth_tables::{
    Analysis, Classification, Expr, KMapGroup, LogicError, SyntaxError, TruthTable,
};

fn assignment(pairs: &[(&str, bool)]) -> truth_tables::Assignment {
    pairs
        .iter()
        .map(|(name, value)| (Arc::from(*name), *value))
        .collect()
}

#[test]
fn test_conjunction_truth_table() {
    let analysis = Analysis::run("A AND B").unwrap();

    let names: Vec<_> = analysis.variables().iter().map(|v| v.to_string()).collect();
    assert_eq!(names, vec!["A", "B"]);

    // (A=T,B=T)→T and false elsewhere, rows in counter order
    let rows: Vec<_> = analysis
        .table()
        .rows()
        .iter()
        .map(|row| (row.values[0], row.values[1], row.result))
        .collect();
    assert_eq!(
        rows,
        vec![
            (false, false, false),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ]
    );
}

#[test]
fn test_implication_is_contingent() {
    let analysis = Analysis::run("A -> B").unwrap();
    assert_eq!(analysis.classification(), Classification::Contingent);

    // False only when the antecedent holds and the consequent fails
    for row in analysis.table().rows() {
        let expected = !(row.values[0] && !row.values[1]);
        assert_eq!(row.result, expected);
    }
}

#[test]
fn test_excluded_middle_and_its_negation() {
    let analysis = Analysis::run("A OR NOT A").unwrap();
    assert!(analysis.is_tautology());
    assert!(analysis.cnf().is_empty());
    assert_eq!(analysis.cnf().to_string(), "1");

    let analysis = Analysis::run("A AND NOT A").unwrap();
    assert!(analysis.is_contradiction());
    assert!(analysis.dnf().is_empty());
    assert_eq!(analysis.dnf().to_string(), "0");
}

#[test]
fn test_normal_forms_reproduce_the_table() {
    for formula in [
        "A AND B",
        "A OR B",
        "A -> B -> C",
        "(A <-> B) AND NOT C",
        "NOT (A IMPLIES B) OR C AND D",
    ] {
        let analysis = Analysis::run(formula).unwrap();
        let table = analysis.table();
        for (i, row) in table.rows().iter().enumerate() {
            let assignment = table.assignment(i);
            assert_eq!(
                analysis.dnf().evaluate(&assignment).unwrap(),
                row.result,
                "DNF of {} at row {}",
                formula,
                i
            );
            assert_eq!(
                analysis.cnf().evaluate(&assignment).unwrap(),
                row.result,
                "CNF of {} at row {}",
                formula,
                i
            );
        }
    }
}

#[test]
fn test_classification_matches_degenerate_normal_forms() {
    for formula in ["A OR NOT A", "A AND NOT A", "A -> B", "A IFF A OR B"] {
        let analysis = Analysis::run(formula).unwrap();
        let rows = analysis.table().rows().len();
        match analysis.classification() {
            Classification::Tautology => {
                assert!(analysis.cnf().is_empty());
                assert_eq!(analysis.dnf().terms().len(), rows);
            }
            Classification::Contradiction => {
                assert!(analysis.dnf().is_empty());
                assert_eq!(analysis.cnf().terms().len(), rows);
            }
            Classification::Contingent => {
                assert!(!analysis.dnf().is_empty());
                assert!(!analysis.cnf().is_empty());
            }
        }
    }
}

#[test]
fn test_kmap_of_conjunction_groups_one_cell() {
    let analysis = Analysis::run("A AND B").unwrap();
    let kmap = analysis.kmap().unwrap();
    assert_eq!(kmap.row_variable().as_ref(), "A");
    assert_eq!(kmap.col_variable().as_ref(), "B");
    assert_eq!(kmap.groups(), &[KMapGroup::Cell(true, true)]);
}

#[test]
fn test_kmap_of_disjunction_groups_row_and_column() {
    let analysis = Analysis::run("A OR B").unwrap();
    let kmap = analysis.kmap().unwrap();

    // Three true cells, covered by the A=1 row plus the B=1 column; no
    // single rectangle covers all three
    assert_eq!(kmap.groups(), &[KMapGroup::Row(true), KMapGroup::Col(true)]);
    let true_cells = [(false, true), (true, false), (true, true)];
    for (a, b) in true_cells {
        assert!(kmap.cell(a, b));
    }
    assert!(!kmap.cell(false, false));
}

#[test]
fn test_kmap_rejects_other_arities() {
    for formula in ["A", "A AND B AND C"] {
        let analysis = Analysis::run(formula).unwrap();
        assert!(matches!(
            analysis.kmap().unwrap_err(),
            LogicError::UnsupportedArity { .. }
        ));
    }
}

#[test]
fn test_syntax_errors_surface_with_positions() {
    let err = Analysis::run("A AND (B").unwrap_err();
    match err {
        LogicError::Syntax(SyntaxError::UnmatchedParenthesis { position }) => {
            assert_eq!(position, 6)
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = Analysis::run("A B").unwrap_err();
    assert!(matches!(
        err,
        LogicError::Syntax(SyntaxError::TrailingInput { .. })
    ));

    let err = Analysis::run("A $ B").unwrap_err();
    assert!(matches!(
        err,
        LogicError::Syntax(SyntaxError::UnknownCharacter { character: '$', .. })
    ));
}

#[test]
fn test_evaluation_is_referentially_transparent() {
    let expr = Expr::parse("P AND Q OR NOT P").unwrap();
    let base = assignment(&[("P", true), ("Q", false)]);
    let mut extended = base.clone();
    extended.insert(Arc::from("R"), true);
    assert_eq!(
        expr.evaluate(&base).unwrap(),
        expr.evaluate(&extended).unwrap()
    );
}

#[test]
fn test_results_are_plain_values() {
    // Two submissions never share state; re-running yields equal results
    let first = Analysis::run("A IFF B").unwrap();
    let second = Analysis::run("A IFF B").unwrap();
    assert_eq!(first.table(), second.table());
    assert_eq!(first.dnf(), second.dnf());
    assert_eq!(first.kmap().unwrap(), second.kmap().unwrap());
}

#[test]
fn test_table_text_and_csv_renderings() {
    let expr = Expr::parse("A AND B").unwrap();
    let table = TruthTable::generate(&expr).unwrap();

    let text = table.to_string();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap().trim_end(), "A  B  Result");
    assert_eq!(lines.count(), 4);

    assert!(table.to_csv().starts_with("A,B,Result\n"));
}

#[test]
fn test_normal_form_rendering_convention() {
    let err = Analysis::run("A XOR2 B").unwrap_err();
    // XOR is not a connective; "XOR2" is a variable, so the failure is
    // the missing connective between the atoms
    assert!(matches!(
        err,
        LogicError::Syntax(SyntaxError::TrailingInput { .. })
    ));

    let analysis = Analysis::run("NOT A AND B OR A AND NOT B").unwrap();
    assert_eq!(analysis.dnf().to_string(), "(!A & B) | (A & !B)");
    assert_eq!(analysis.cnf().to_string(), "(A | B) & (!A | !B)");
}
