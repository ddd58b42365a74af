//! Canonical text form tests
//!
//! The rendered grammar: `DEF x : INTEGER`, `LET x = <expr>`, blocks as
//! `{\n<stmts joined by \n>\n}\n`, `IF <pred> THEN <block>`, and a program
//! as its statements joined by newlines with no surrounding braces.

use pretty_assertions::assert_eq;
use rangescope_analysis::{Block, BooleanExpression, IntegerExpression, Program, Statement};

fn var(name: &str) -> IntegerExpression {
    IntegerExpression::variable(name)
}

fn num(value: i64) -> IntegerExpression {
    IntegerExpression::constant(value)
}

#[test]
fn definition_renders_with_type_annotation() {
    assert_eq!(Statement::definition("x").to_string(), "DEF x : INTEGER");
}

#[test]
fn assignment_renders_infix_expression() {
    let statement = Statement::assignment("x", IntegerExpression::plus(var("y"), num(1)));
    assert_eq!(statement.to_string(), "LET x = y + 1");
}

#[test]
fn block_renders_braced_lines() {
    let block = Block::new(vec![
        Statement::definition("x"),
        Statement::assignment("x", num(5)),
    ]);
    assert_eq!(block.to_string(), "{\nDEF x : INTEGER\nLET x = 5\n}\n");
}

#[test]
fn if_renders_predicate_and_block() {
    let statement = Statement::if_then(
        BooleanExpression::less_than(var("x"), num(3)),
        Block::new(vec![Statement::assignment("y", num(1))]),
    );
    assert_eq!(statement.to_string(), "IF x < 3 THEN {\nLET y = 1\n}\n");
}

#[test]
fn if_else_renders_both_blocks() {
    let statement = Statement::if_else(
        BooleanExpression::greater_than_or_equals(var("x"), num(0)),
        Block::new(vec![Statement::assignment("y", num(1))]),
        Block::new(vec![Statement::assignment("y", num(2))]),
    );
    assert_eq!(
        statement.to_string(),
        "IF x >= 0 THEN {\nLET y = 1\n}\nELSE {\nLET y = 2\n}\n"
    );
}

#[test]
fn nested_block_renders_inside_outer_block() {
    let outer = Block::new(vec![
        Statement::assignment("a", num(1)),
        Statement::Block(Block::new(vec![Statement::assignment("b", num(2))])),
    ]);
    assert_eq!(
        outer.to_string(),
        "{\nLET a = 1\n{\nLET b = 2\n}\n\n}\n"
    );
}

#[test]
fn program_renders_without_braces() {
    let program = Program::new(vec![
        Statement::definition("x"),
        Statement::assignment("x", num(5)),
    ]);
    assert_eq!(program.to_string(), "DEF x : INTEGER\nLET x = 5");
}

#[test]
fn program_with_conditional_renders_full_tree() {
    let program = Program::new(vec![
        Statement::definition("x"),
        Statement::if_then(
            BooleanExpression::less_than_or_equals(var("x"), num(10)),
            Block::new(vec![Statement::assignment("x", num(1))]),
        ),
    ]);
    assert_eq!(
        program.to_string(),
        "DEF x : INTEGER\nIF x <= 10 THEN {\nLET x = 1\n}\n"
    );
}
