//! Property-based tests for parser round-trip.

use proptest::prelude::*;

use super::ast::*;
use super::pretty::{print_expr, print_program};
use super::{parse_expr, parse_program};
use crate::lexer::Span;

// Strategy for identifiers that are not keywords
fn ident_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-zA-Z0-9_']{0,5}")
        .unwrap()
        .prop_filter("not a keyword", |s| {
            !matches!(s.as_str(), "let" | "in" | "fun" | "true" | "false")
        })
}

// The lexer has no negative literals
fn literal_strategy() -> impl Strategy<Value = Literal> {
    prop_oneof![
        prop::bool::ANY.prop_map(Literal::Bool),
        (0i64..100_000).prop_map(Literal::Int),
    ]
}

fn expr_strategy() -> impl Strategy<Value = Exp> {
    let leaf = prop_oneof![
        ident_strategy().prop_map(Exp::Var),
        literal_strategy().prop_map(Exp::Lit),
    ];
    leaf.prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(f, a)| Exp::app(f, a)),
            (ident_strategy(), inner.clone()).prop_map(|(p, b)| Exp::abs(p, b)),
            (ident_strategy(), inner.clone(), inner).prop_map(|(x, e, b)| Exp::let_in(x, e, b)),
        ]
    })
}

fn stmt_strategy() -> impl Strategy<Value = Stmt> {
    prop_oneof![
        (ident_strategy(), expr_strategy()).prop_map(|(name, value)| Stmt::Let {
            name,
            value,
            span: Span::default(),
        }),
        expr_strategy().prop_map(|expression| Stmt::Expr {
            expression,
            span: Span::default(),
        }),
    ]
}

fn strip_spans(program: Program) -> Vec<Stmt> {
    program
        .statements
        .into_iter()
        .map(|stmt| match stmt {
            Stmt::Let { name, value, .. } => Stmt::Let {
                name,
                value,
                span: Span::default(),
            },
            Stmt::Expr { expression, .. } => Stmt::Expr {
                expression,
                span: Span::default(),
            },
        })
        .collect()
}

proptest! {
    #[test]
    fn expr_round_trip(expr in expr_strategy()) {
        let printed = print_expr(&expr);
        let reparsed = parse_expr(&printed);
        prop_assert!(reparsed.is_ok(), "failed to reparse {:?}", printed);
        prop_assert_eq!(reparsed.unwrap(), expr);
    }

    #[test]
    fn program_round_trip(statements in prop::collection::vec(stmt_strategy(), 0..4)) {
        let program = Program { statements: statements.clone(), span: Span::default() };
        let printed = print_program(&program);
        let reparsed = parse_program(&printed);
        prop_assert!(reparsed.is_ok(), "failed to reparse {:?}", printed);
        prop_assert_eq!(strip_spans(reparsed.unwrap()), statements);
    }
}
