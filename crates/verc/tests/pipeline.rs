//! Whole-pipeline behavior: translate a unit, print it, check the text.

use pretty_assertions::assert_eq;
use verc::ir::{self, Param, QualifiedName, SourceUnit};
use verc::transform::{TransformConfig, TransformError, Translator};
use verc::{CFilePrinter, Document};

fn unit(decls: Vec<ir::Decl>) -> SourceUnit {
    SourceUnit {
        name: QualifiedName::from_path("test"),
        declarations: decls,
    }
}

fn function(
    name: &str,
    params: Vec<Param>,
    ret: ir::Type,
    body: ir::Stmt,
    exported: bool,
) -> ir::Decl {
    ir::Decl::Function(ir::FunctionDecl {
        name: QualifiedName::from_path(name),
        kind: ir::FunctionKind::Function,
        params,
        ret,
        body,
        exported,
    })
}

fn print_without_preamble(decls: Vec<ir::Decl>) -> String {
    let mut translator = Translator::new(TransformConfig::default());
    let mut document = Document::new();
    translator.translate_unit(&unit(decls), &mut document).unwrap();
    CFilePrinter::new().write_to_string(&document).unwrap()
}

#[test]
fn exported_function_prints_verbatim() {
    let text = print_without_preamble(vec![function(
        "f",
        vec![],
        ir::Type::Int,
        ir::Stmt::block(vec![ir::Stmt::Return {
            operand: Some(ir::Expr::binary(
                ir::BinaryOp::Addition,
                ir::Expr::int_const(1),
                ir::Expr::int_const(2),
            )),
        }]),
        true,
    )]);
    assert_eq!(text, "int f() {\n   return 1 + 2;\n}\n");
}

#[test]
fn overloaded_functions_print_under_distinct_names() {
    let body = |ret: ir::Expr| {
        ir::Stmt::block(vec![ir::Stmt::Return { operand: Some(ret) }])
    };
    let text = print_without_preamble(vec![
        function(
            "g",
            vec![Param::new("x", ir::Type::Int)],
            ir::Type::Int,
            body(ir::Expr::var("x")),
            false,
        ),
        function(
            "g",
            vec![Param::new("x", ir::Type::Bool)],
            ir::Type::Int,
            body(ir::Expr::int_const(0)),
            false,
        ),
    ]);
    assert_eq!(
        text,
        "int g_ii(int x) {\n   return x;\n}\n\nint g_bi(bool x) {\n   return 0;\n}\n"
    );
}

#[test]
fn record_type_and_initialiser_round_trip() {
    let record = ir::Type::record(vec![
        ir::Field::new("x", ir::Type::Int),
        ir::Field::new("y", ir::Type::Bool),
    ]);
    let text = print_without_preamble(vec![
        ir::Decl::TypeAlias(ir::TypeAliasDecl {
            name: QualifiedName::from_path("pair"),
            ty: record.clone(),
        }),
        function(
            "make",
            vec![],
            record,
            ir::Stmt::block(vec![ir::Stmt::Return {
                operand: Some(ir::Expr::RecordInitialiser {
                    fields: vec![
                        ("x".to_string(), ir::Expr::int_const(1)),
                        ("y".to_string(), ir::Expr::bool_const(true)),
                    ],
                }),
            }]),
            true,
        ),
    ]);
    assert_eq!(
        text,
        "typedef struct { int x; bool y; } pair;\n\
         \n\
         struct { int x; bool y; } make() {\n\
         \x20\x20\x20return {.x = 1, .y = true};\n\
         }\n"
    );
}

#[test]
fn lambda_fails_and_leaves_prior_output_intact() {
    let mut translator = Translator::new(TransformConfig::default());
    let mut document = Document::new();
    let err = translator
        .translate_unit(
            &unit(vec![
                function(
                    "ok",
                    vec![],
                    ir::Type::Void,
                    ir::Stmt::block(vec![ir::Stmt::Return { operand: None }]),
                    true,
                ),
                function(
                    "broken",
                    vec![],
                    ir::Type::Int,
                    ir::Stmt::block(vec![ir::Stmt::Return {
                        operand: Some(ir::Expr::Lambda {
                            params: vec![],
                            body: Box::new(ir::Expr::int_const(1)),
                        }),
                    }]),
                    true,
                ),
            ]),
            &mut document,
        )
        .unwrap_err();

    assert!(
        matches!(&err, TransformError::UnsupportedConstruct(name) if name == "lambda expression")
    );
    let text = CFilePrinter::new().write_to_string(&document).unwrap();
    assert_eq!(text, "void ok() {\n}\n");
}

#[test]
fn full_program_with_preamble_and_entry_point() {
    let units = vec![unit(vec![function(
        "app::start",
        vec![],
        ir::Type::Void,
        ir::Stmt::block(vec![ir::Stmt::Assert {
            condition: ir::Expr::bool_const(true),
        }]),
        true,
    )])];
    let document = verc::translate_units(
        &units,
        TransformConfig::default(),
        Some(&QualifiedName::from_path("app::start")),
    )
    .unwrap();
    let text = CFilePrinter::new().write_to_string(&document).unwrap();
    assert_eq!(
        text,
        "#include <stdio.h>\n\
         #include <stdbool.h>\n\
         #include <stdint.h>\n\
         #include <assert.h>\n\
         \n\
         void app_start() {\n\
         \x20\x20\x20assert(true);\n\
         }\n\
         \n\
         int main() {\n\
         \x20\x20\x20app_start();\n\
         \x20\x20\x20return 0;\n\
         }\n"
    );
}

#[test]
fn byte_parameters_and_literals_use_hex_and_fixed_width() {
    let text = print_without_preamble(vec![function(
        "mask",
        vec![Param::new("b", ir::Type::Byte)],
        ir::Type::Byte,
        ir::Stmt::block(vec![ir::Stmt::Return {
            operand: Some(ir::Expr::variadic(
                ir::VariadicOp::BitwiseAnd,
                vec![ir::Expr::var("b"), ir::Expr::byte_const(0x0f)],
            )),
        }]),
        true,
    )]);
    assert_eq!(text, "uint8_t mask(uint8_t b) {\n   return b & 0x0f;\n}\n");
}
