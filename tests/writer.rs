use std::fmt::Write;

use pretty_assertions::assert_eq;
use stencil::{ErrorKind, IndentedWriter, Row, Stencil};

#[test]
fn writer_assembles_rendered_snippets() {
    let mut function = Stencil::new("fn <name>() -> <ty> {");
    function.bind_scalar("name", "answer").unwrap().bind_scalar("ty", "u32").unwrap();

    let mut statements = Stencil::new("<#stmts><stmt>\n</stmts>");
    statements
        .bind_list(
            "stmts",
            vec![
                vec![("stmt", "let x = 40;")].into_iter().collect::<Row>(),
                vec![("stmt", "x + 2")].into_iter().collect::<Row>(),
            ],
        )
        .unwrap();

    let mut writer = IndentedWriter::new();
    writer.add_line(&function.render().unwrap());
    writer.indent();
    for line in statements.render().unwrap().lines() {
        writer.add_line(line);
    }
    writer.unindent().unwrap();
    writer.add_line("}");

    assert_eq!(writer.format(), "fn answer() -> u32 {\n    let x = 40;\n    x + 2\n}\n");
}

#[test]
fn writer_reports_negative_indentation() {
    let mut writer = IndentedWriter::default();
    writer.indent();
    writer.unindent().unwrap();
    let err = writer.unindent().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NegativeIndentation));
}

#[test]
fn writer_with_custom_width() {
    let mut writer = IndentedWriter::with_indent_width(1);
    writer.indent();
    writer.indent();
    write!(writer, "{}", "deep").unwrap();
    assert_eq!(writer.to_string(), "  deep\n");
}
