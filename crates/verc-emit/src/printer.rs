use crate::config::PrinterConfig;
use crate::{EmitError, EmitResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use verc_core::{Declaration, Document, Expression, Parameter, Statement, Type, VariableDecl};

/// Prints a completed document as C99 source text.
pub struct CFilePrinter {
    config: PrinterConfig,
}

impl CFilePrinter {
    pub fn new() -> Self {
        Self {
            config: PrinterConfig::default(),
        }
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        Self { config }
    }

    /// Writes the whole document to `out` and flushes it.
    pub fn write<W: Write>(&self, doc: &Document, out: &mut W) -> EmitResult {
        for (i, decl) in doc.declarations().iter().enumerate() {
            if i > 0 && !matches!(decl, Declaration::Include(_)) {
                writeln!(out)?;
            }
            self.write_declaration(out, 0, decl)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn write_to_string(&self, doc: &Document) -> Result<String, EmitError> {
        let mut buffer = Vec::new();
        self.write(doc, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Creates `path`, writes the document, and flushes before the handle is
    /// released. The sink is released on every exit path, including failure.
    pub fn write_file(&self, doc: &Document, path: &Path) -> EmitResult {
        let mut file = File::create(path)?;
        self.write(doc, &mut file)
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn write_declaration<W: Write>(
        &self,
        out: &mut W,
        indent: usize,
        decl: &Declaration,
    ) -> EmitResult {
        match decl {
            Declaration::Include(header) => {
                writeln!(out, "#include <{}>", header)?;
                Ok(())
            }
            Declaration::TypeDef { name, ty } => {
                write!(out, "typedef ")?;
                self.write_type(out, ty)?;
                writeln!(out, " {};", name)?;
                Ok(())
            }
            Declaration::Function {
                name,
                ret,
                params,
                body,
            } => {
                self.write_type(out, ret)?;
                write!(out, " {}(", name)?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(out, ", ")?;
                    }
                    self.write_parameter(out, param)?;
                }
                write!(out, ") ")?;
                self.write_body(out, indent, body)?;
                writeln!(out)?;
                Ok(())
            }
            Declaration::Variable(var) => {
                self.write_variable(out, var)?;
                writeln!(out, ";")?;
                Ok(())
            }
        }
    }

    fn write_parameter<W: Write>(&self, out: &mut W, param: &Parameter) -> EmitResult {
        self.write_type(out, &param.ty)?;
        write!(out, " {}", param.name)?;
        Ok(())
    }

    fn write_variable<W: Write>(&self, out: &mut W, var: &VariableDecl) -> EmitResult {
        if var.ty == Type::Void {
            return Err(EmitError::InvalidNode(format!(
                "void variable declaration `{}`",
                var.name
            )));
        }
        self.write_type(out, &var.ty)?;
        write!(out, " {}", var.name)?;
        if let Some(init) = &var.initialiser {
            write!(out, " = ")?;
            self.write_expression(out, init)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn write_statement<W: Write>(
        &self,
        out: &mut W,
        indent: usize,
        stmt: &Statement,
    ) -> EmitResult {
        match stmt {
            Statement::Block(stmts) => {
                self.tab(out, indent)?;
                self.write_block(out, indent, stmts)?;
                writeln!(out)?;
            }
            Statement::VarDecl(var) => {
                self.tab(out, indent)?;
                self.write_variable(out, var)?;
                writeln!(out, ";")?;
            }
            Statement::Assign { lhs, rhs } => {
                self.tab(out, indent)?;
                self.write_expression(out, lhs)?;
                write!(out, " = ")?;
                self.write_expression(out, rhs)?;
                writeln!(out, ";")?;
            }
            Statement::If {
                condition,
                true_branch,
                false_branch,
            } => {
                self.tab(out, indent)?;
                write!(out, "if(")?;
                self.write_expression(out, condition)?;
                write!(out, ") ")?;
                self.write_body(out, indent, true_branch)?;
                if let Some(false_branch) = false_branch {
                    write!(out, " else ")?;
                    self.write_body(out, indent, false_branch)?;
                }
                writeln!(out)?;
            }
            Statement::While { condition, body } => {
                self.tab(out, indent)?;
                write!(out, "while(")?;
                self.write_expression(out, condition)?;
                write!(out, ") ")?;
                self.write_body(out, indent, body)?;
                writeln!(out)?;
            }
            Statement::DoWhile { body, condition } => {
                self.tab(out, indent)?;
                write!(out, "do ")?;
                self.write_body(out, indent, body)?;
                write!(out, " while(")?;
                self.write_expression(out, condition)?;
                writeln!(out, ");")?;
            }
            Statement::For {
                initialiser,
                condition,
                increment,
                body,
            } => {
                self.tab(out, indent)?;
                write!(out, "for(")?;
                self.write_for_clause(out, initialiser)?;
                write!(out, "; ")?;
                self.write_expression(out, condition)?;
                write!(out, "; ")?;
                self.write_for_clause(out, increment)?;
                write!(out, ") ")?;
                self.write_body(out, indent, body)?;
                writeln!(out)?;
            }
            Statement::Break => {
                self.tab(out, indent)?;
                writeln!(out, "break;")?;
            }
            Statement::Continue => {
                self.tab(out, indent)?;
                writeln!(out, "continue;")?;
            }
            Statement::Return(operand) => {
                self.tab(out, indent)?;
                write!(out, "return")?;
                if let Some(operand) = operand {
                    write!(out, " ")?;
                    self.write_expression(out, operand)?;
                }
                writeln!(out, ";")?;
            }
            Statement::Skip => {
                self.tab(out, indent)?;
                writeln!(out, ";")?;
            }
            Statement::Expr(expr) => {
                self.tab(out, indent)?;
                self.write_expression(out, expr)?;
                writeln!(out, ";")?;
            }
        }
        Ok(())
    }

    /// A `{ ... }` body at the given enclosing indent. No leading indent and no
    /// trailing newline; the caller owns both.
    fn write_block<W: Write>(&self, out: &mut W, indent: usize, stmts: &[Statement]) -> EmitResult {
        writeln!(out, "{{")?;
        for stmt in stmts {
            self.write_statement(out, indent + 1, stmt)?;
        }
        self.tab(out, indent)?;
        write!(out, "}}")?;
        Ok(())
    }

    /// Renders any statement as a braced body; a non-block statement becomes a
    /// single-statement block.
    fn write_body<W: Write>(&self, out: &mut W, indent: usize, stmt: &Statement) -> EmitResult {
        match stmt {
            Statement::Block(stmts) => self.write_block(out, indent, stmts),
            other => self.write_block(out, indent, std::slice::from_ref(other)),
        }
    }

    /// A `for` header clause: a variable declaration or an assignment, inline,
    /// with no terminator.
    fn write_for_clause<W: Write>(&self, out: &mut W, stmt: &Statement) -> EmitResult {
        match stmt {
            Statement::VarDecl(var) => self.write_variable(out, var),
            Statement::Assign { lhs, rhs } => {
                self.write_expression(out, lhs)?;
                write!(out, " = ")?;
                self.write_expression(out, rhs)?;
                Ok(())
            }
            other => Err(EmitError::InvalidNode(format!(
                "for-loop clause {:?}",
                other
            ))),
        }
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn write_expression<W: Write>(&self, out: &mut W, expr: &Expression) -> EmitResult {
        match expr {
            Expression::BoolConst(v) => {
                write!(out, "{}", if *v { "true" } else { "false" })?;
                Ok(())
            }
            Expression::IntConst(v) => {
                write!(out, "{}", v)?;
                Ok(())
            }
            Expression::HexConst(v) => {
                write!(out, "0x{:02x}", v)?;
                Ok(())
            }
            Expression::Var(name) => {
                write!(out, "{}", name)?;
                Ok(())
            }
            Expression::Unary { op, operand } => {
                write!(out, "{}", op.symbol())?;
                self.write_bracketed(out, operand)
            }
            Expression::FieldDeref { operand, field } => {
                self.write_bracketed(out, operand)?;
                write!(out, "->{}", field)?;
                Ok(())
            }
            Expression::Infix { op, lhs, rhs } => {
                self.write_bracketed(out, lhs)?;
                write!(out, " {} ", op.symbol())?;
                self.write_bracketed(out, rhs)
            }
            Expression::ArrayAccess { source, index } => {
                self.write_bracketed(out, source)?;
                write!(out, "[")?;
                self.write_expression(out, index)?;
                write!(out, "]")?;
                Ok(())
            }
            Expression::FieldAccess { source, field } => {
                self.write_bracketed(out, source)?;
                write!(out, ".{}", field)?;
                Ok(())
            }
            Expression::Call { name, arguments } => {
                write!(out, "{}(", name)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(out, ", ")?;
                    }
                    self.write_expression(out, arg)?;
                }
                write!(out, ")")?;
                Ok(())
            }
            Expression::StructInit { fields } => {
                if fields.is_empty() {
                    return Err(EmitError::InvalidNode(
                        "empty designated initialiser".to_string(),
                    ));
                }
                write!(out, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(out, ", ")?;
                    }
                    write!(out, ".{} = ", name)?;
                    self.write_expression(out, value)?;
                }
                write!(out, "}}")?;
                Ok(())
            }
        }
    }

    /// Parenthesises exactly when the nested expression's own flag says so.
    fn write_bracketed<W: Write>(&self, out: &mut W, expr: &Expression) -> EmitResult {
        if expr.requires_parenthesis() {
            write!(out, "(")?;
            self.write_expression(out, expr)?;
            write!(out, ")")?;
            Ok(())
        } else {
            self.write_expression(out, expr)
        }
    }

    // ------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------

    fn write_type<W: Write>(&self, out: &mut W, ty: &Type) -> EmitResult {
        match ty {
            Type::Void => {
                write!(out, "void")?;
                Ok(())
            }
            Type::Bool => {
                write!(out, "bool")?;
                Ok(())
            }
            Type::Int {
                signed,
                width: None,
            } => {
                write!(out, "{}", if *signed { "int" } else { "unsigned int" })?;
                Ok(())
            }
            Type::Int {
                signed,
                width: Some(width),
            } => {
                write!(out, "{}int{}_t", if *signed { "" } else { "u" }, width)?;
                Ok(())
            }
            Type::Pointer(element) => {
                self.write_type(out, element)?;
                write!(out, "*")?;
                Ok(())
            }
            Type::Nominal(name) => {
                write!(out, "{}", name)?;
                Ok(())
            }
            Type::Struct(fields) => {
                write!(out, "struct {{ ")?;
                for field in fields {
                    self.write_type(out, &field.ty)?;
                    write!(out, " {}; ", field.name)?;
                }
                write!(out, "}}")?;
                Ok(())
            }
        }
    }

    fn tab<W: Write>(&self, out: &mut W, indent: usize) -> EmitResult {
        let unit = self.config.indent_style.unit();
        for _ in 0..indent {
            write!(out, "{}", unit)?;
        }
        Ok(())
    }
}

impl Default for CFilePrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use verc_core::{Expression, Field, InfixOp, Statement, UnaryOp};

    fn print_expr(expr: &Expression) -> String {
        let printer = CFilePrinter::new();
        let mut buffer = Vec::new();
        printer.write_expression(&mut buffer, expr).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn print_stmt(stmt: &Statement) -> String {
        let printer = CFilePrinter::new();
        let mut buffer = Vec::new();
        printer.write_statement(&mut buffer, 0, stmt).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn print_type(ty: &Type) -> String {
        let printer = CFilePrinter::new();
        let mut buffer = Vec::new();
        printer.write_type(&mut buffer, ty).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn literals_print_by_kind() {
        assert_eq!(print_expr(&Expression::bool_const(true)), "true");
        assert_eq!(print_expr(&Expression::bool_const(false)), "false");
        assert_eq!(print_expr(&Expression::int(42)), "42");
        assert_eq!(print_expr(&Expression::int(-7)), "-7");
        assert_eq!(print_expr(&Expression::hex(0x0a)), "0x0a");
        assert_eq!(print_expr(&Expression::hex(0x1ff)), "0x1ff");
    }

    #[test]
    fn unbounded_integer_constants_print_in_full() {
        let big = "123456789012345678901234567890"
            .parse::<num_bigint::BigInt>()
            .unwrap();
        assert_eq!(
            print_expr(&Expression::int(big)),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn every_infix_operator_prints_single_spaced() {
        let cases = [
            (InfixOp::Add, "a + b"),
            (InfixOp::Sub, "a - b"),
            (InfixOp::Mul, "a * b"),
            (InfixOp::Div, "a / b"),
            (InfixOp::Rem, "a % b"),
            (InfixOp::Lt, "a < b"),
            (InfixOp::LtEq, "a <= b"),
            (InfixOp::Gt, "a > b"),
            (InfixOp::GtEq, "a >= b"),
            (InfixOp::Eq, "a == b"),
            (InfixOp::NotEq, "a != b"),
            (InfixOp::And, "a && b"),
            (InfixOp::Or, "a || b"),
            (InfixOp::BitAnd, "a & b"),
            (InfixOp::BitOr, "a | b"),
            (InfixOp::Shl, "a << b"),
            (InfixOp::Shr, "a >> b"),
        ];
        for (op, expected) in cases {
            let e = Expression::infix(op, Expression::var("a"), Expression::var("b"));
            assert_eq!(print_expr(&e), expected);
        }
    }

    #[test]
    fn infix_operands_get_parenthesised_but_atoms_do_not() {
        let inner = Expression::infix(InfixOp::Add, Expression::var("a"), Expression::var("b"));
        let outer = Expression::infix(InfixOp::Mul, inner, Expression::int(2));
        assert_eq!(print_expr(&outer), "(a + b) * 2");

        let plain = Expression::infix(InfixOp::Mul, Expression::var("a"), Expression::int(2));
        assert_eq!(print_expr(&plain), "a * 2");
    }

    #[test]
    fn unary_operators_bind_directly() {
        assert_eq!(
            print_expr(&Expression::unary(UnaryOp::Neg, Expression::var("x"))),
            "-x"
        );
        assert_eq!(
            print_expr(&Expression::unary(UnaryOp::Not, Expression::var("x"))),
            "!x"
        );
        assert_eq!(
            print_expr(&Expression::unary(UnaryOp::BitNot, Expression::var("x"))),
            "~x"
        );
        assert_eq!(
            print_expr(&Expression::unary(UnaryOp::Deref, Expression::var("p"))),
            "*p"
        );
    }

    #[test]
    fn unary_over_infix_parenthesises_the_operand() {
        let sum = Expression::infix(InfixOp::Add, Expression::var("a"), Expression::var("b"));
        let e = Expression::unary(UnaryOp::Not, sum);
        assert_eq!(print_expr(&e), "!(a + b)");
    }

    #[test]
    fn postfix_accesses_print_without_parens_on_atoms() {
        let e = Expression::array_access(Expression::var("xs"), Expression::int(3));
        assert_eq!(print_expr(&e), "xs[3]");

        let e = Expression::field_access(Expression::var("r"), "x");
        assert_eq!(print_expr(&e), "r.x");

        let e = Expression::field_deref(Expression::var("p"), "next");
        assert_eq!(print_expr(&e), "p->next");
    }

    #[test]
    fn calls_print_comma_separated() {
        let e = Expression::call(
            "f",
            vec![
                Expression::int(1),
                Expression::var("x"),
                Expression::infix(InfixOp::Add, Expression::var("a"), Expression::var("b")),
            ],
        );
        assert_eq!(print_expr(&e), "f(1, x, a + b)");
    }

    #[test]
    fn designated_initialiser_prints_dot_assignments() {
        let e = Expression::struct_init(vec![
            ("x".to_string(), Expression::int(1)),
            ("y".to_string(), Expression::bool_const(true)),
        ]);
        assert_eq!(print_expr(&e), "{.x = 1, .y = true}");
    }

    #[test]
    fn empty_designated_initialiser_is_invalid() {
        let printer = CFilePrinter::new();
        let mut buffer = Vec::new();
        let err = printer
            .write_expression(&mut buffer, &Expression::struct_init(vec![]))
            .unwrap_err();
        assert!(matches!(err, EmitError::InvalidNode(_)));
    }

    #[test]
    fn type_spellings() {
        assert_eq!(print_type(&Type::Void), "void");
        assert_eq!(print_type(&Type::Bool), "bool");
        assert_eq!(print_type(&Type::int()), "int");
        assert_eq!(print_type(&Type::uint()), "unsigned int");
        assert_eq!(print_type(&Type::fixed(true, 8).unwrap()), "int8_t");
        assert_eq!(print_type(&Type::fixed(false, 8).unwrap()), "uint8_t");
        assert_eq!(print_type(&Type::fixed(true, 64).unwrap()), "int64_t");
        assert_eq!(print_type(&Type::pointer(Type::int())), "int*");
        assert_eq!(print_type(&Type::nominal("pair")), "pair");
        assert_eq!(
            print_type(&Type::structure(vec![
                Field::new(Type::int(), "x"),
                Field::new(Type::Bool, "y"),
            ])),
            "struct { int x; bool y; }"
        );
    }

    #[test]
    fn statements_take_their_terminators() {
        assert_eq!(print_stmt(&Statement::Break), "break;\n");
        assert_eq!(print_stmt(&Statement::Continue), "continue;\n");
        assert_eq!(print_stmt(&Statement::Skip), ";\n");
        assert_eq!(print_stmt(&Statement::Return(None)), "return;\n");
        assert_eq!(
            print_stmt(&Statement::Return(Some(Expression::int(0)))),
            "return 0;\n"
        );
        assert_eq!(
            print_stmt(&Statement::Expr(Expression::call(
                "assert",
                vec![Expression::bool_const(false)]
            ))),
            "assert(false);\n"
        );
    }

    #[test]
    fn if_without_false_branch_omits_else() {
        let stmt = Statement::if_else(
            Expression::var("c"),
            Statement::block(vec![Statement::Return(Some(Expression::int(1)))]),
            None,
        );
        assert_eq!(print_stmt(&stmt), "if(c) {\n   return 1;\n}\n");
    }

    #[test]
    fn if_else_prints_both_branches() {
        let stmt = Statement::if_else(
            Expression::var("c"),
            Statement::block(vec![Statement::Return(Some(Expression::int(1)))]),
            Some(Statement::block(vec![Statement::Return(Some(
                Expression::int(2),
            ))])),
        );
        assert_eq!(
            print_stmt(&stmt),
            "if(c) {\n   return 1;\n} else {\n   return 2;\n}\n"
        );
    }

    #[test]
    fn do_while_carries_its_own_terminator() {
        let stmt = Statement::do_while(
            Statement::block(vec![Statement::Expr(Expression::call("step", vec![]))]),
            Expression::var("again"),
        );
        assert_eq!(print_stmt(&stmt), "do {\n   step();\n} while(again);\n");
    }

    #[test]
    fn nested_blocks_indent_one_unit_per_level() {
        let stmt = Statement::while_loop(
            Expression::var("c"),
            Statement::block(vec![Statement::if_else(
                Expression::var("d"),
                Statement::block(vec![Statement::Break]),
                None,
            )]),
        );
        assert_eq!(
            print_stmt(&stmt),
            "while(c) {\n   if(d) {\n      break;\n   }\n}\n"
        );
    }

    #[test]
    fn for_clause_must_be_declaration_or_assignment() {
        let printer = CFilePrinter::new();
        let mut buffer = Vec::new();
        let stmt = Statement::for_loop(
            Statement::Break,
            Expression::var("c"),
            Statement::assign(
                Expression::var("i"),
                Expression::infix(InfixOp::Add, Expression::var("i"), Expression::int(1)),
            ),
            Statement::block(vec![]),
        );
        let err = printer.write_statement(&mut buffer, 0, &stmt).unwrap_err();
        assert!(matches!(err, EmitError::InvalidNode(_)));
    }

    #[test]
    fn void_variable_declaration_is_invalid() {
        let printer = CFilePrinter::new();
        let mut buffer = Vec::new();
        let stmt = Statement::VarDecl(VariableDecl::new(Type::Void, "x", None));
        let err = printer.write_statement(&mut buffer, 0, &stmt).unwrap_err();
        assert!(matches!(err, EmitError::InvalidNode(_)));
    }
}
