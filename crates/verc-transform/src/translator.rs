use crate::mangle;
use crate::{Result, TransformError};
use indexmap::IndexMap;
use num_bigint::BigInt;
use tracing::debug;
use verc_core::{
    Declaration, Document, Expression, Field, InfixOp, Parameter, Statement, Type, UnaryOp,
    VariableDecl,
};
use verc_ir as ir;
use verc_ir::QualifiedName;

/// Translator behavior fixed at construction; never global state.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// When disabled, non-exported declarations keep their plain normalized
    /// names. Only safe for single-unit programs without overloading.
    pub mangling: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self { mangling: true }
    }
}

/// Lowers source units into a shared target document, one declaration at a time.
///
/// Translation is declaration-granular, not transactional: declarations appended
/// before a failure remain in the document, and a caller wanting all-or-nothing
/// output must snapshot the document itself.
pub struct Translator {
    config: TransformConfig,
    /// Every emitted declaration name, in emission order, mapped back to the
    /// source name it came from. Duplicates are collisions.
    names: IndexMap<String, QualifiedName>,
}

impl Translator {
    pub fn new(config: TransformConfig) -> Self {
        Self {
            config,
            names: IndexMap::new(),
        }
    }

    /// The fixed include preamble every emitted program needs: I/O, booleans,
    /// fixed-width integers and the assertion primitive.
    pub fn install_preamble(&self, document: &mut Document) {
        for header in ["stdio.h", "stdbool.h", "stdint.h", "assert.h"] {
            document.push(Declaration::Include(header.to_string()));
        }
    }

    /// Appends a `main` calling the designated entry function and returning a
    /// zero status. The entry function must be exported, so its plain
    /// normalized name is the link-level name.
    pub fn add_entry_point(&self, document: &mut Document, entry: &QualifiedName) {
        let body = Statement::block(vec![
            Statement::Expr(Expression::call(mangle::normalize(entry), vec![])),
            Statement::Return(Some(Expression::int(BigInt::from(0)))),
        ]);
        document.push(Declaration::function("main", Type::int(), vec![], body));
    }

    pub fn translate_unit(&mut self, unit: &ir::SourceUnit, document: &mut Document) -> Result<()> {
        debug!(unit = %unit.name, "translating unit");
        for decl in &unit.declarations {
            if let Some(decl) = self.translate_decl(decl)? {
                debug!(name = decl.name().unwrap_or_default(), "appending declaration");
                document.push(decl);
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn translate_decl(&mut self, decl: &ir::Decl) -> Result<Option<Declaration>> {
        match decl {
            ir::Decl::Import(_) => Ok(None),
            ir::Decl::Function(decl) => self.translate_function(decl).map(Some),
            ir::Decl::StaticVariable(decl) => {
                let name = self.declare(mangle::normalize(&decl.name), &decl.name)?;
                let ty = self.translate_type(&decl.ty)?;
                let initialiser = self.translate_expr(&decl.initialiser)?;
                Ok(Some(Declaration::Variable(VariableDecl::new(
                    ty,
                    name,
                    Some(initialiser),
                ))))
            }
            ir::Decl::TypeAlias(decl) => {
                let name = self.declare(mangle::normalize(&decl.name), &decl.name)?;
                let ty = self.translate_type(&decl.ty)?;
                Ok(Some(Declaration::TypeDef { name, ty }))
            }
        }
    }

    fn translate_function(&mut self, decl: &ir::FunctionDecl) -> Result<Declaration> {
        let param_types: Vec<ir::Type> = decl.params.iter().map(|p| p.ty.clone()).collect();
        let target = self.callable_name(&decl.name, &param_types, &decl.ret, decl.exported)?;
        let name = self.declare(target, &decl.name)?;
        let mut params = Vec::with_capacity(decl.params.len());
        for param in &decl.params {
            params.push(Parameter::new(
                self.translate_type(&param.ty)?,
                param.name.as_str(),
            ));
        }
        let ret = self.translate_type(&decl.ret)?;
        let body = self.translate_stmt(&decl.body)?;
        Ok(Declaration::Function {
            name,
            ret,
            params,
            body,
        })
    }

    /// The emitted name of a callable: plain for exported declarations (the
    /// external link contract) and for everything when mangling is off,
    /// otherwise the canonical type mangle.
    fn callable_name(
        &self,
        name: &QualifiedName,
        params: &[ir::Type],
        ret: &ir::Type,
        exported: bool,
    ) -> Result<String> {
        if exported || !self.config.mangling {
            Ok(mangle::normalize(name))
        } else {
            mangle::mangle(name, params, ret)
        }
    }

    fn declare(&mut self, target: String, source: &QualifiedName) -> Result<String> {
        if self.names.contains_key(&target) {
            return Err(TransformError::NameCollision(target));
        }
        self.names.insert(target.clone(), source.clone());
        Ok(target)
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn translate_stmt(&mut self, stmt: &ir::Stmt) -> Result<Statement> {
        match stmt {
            // Assert and assume collapse to the same runtime check. The
            // verifier-level distinction is gone by the time we run; both must
            // trap at runtime when the condition fails.
            ir::Stmt::Assert { condition } | ir::Stmt::Assume { condition } => {
                let condition = self.translate_expr(condition)?;
                Ok(Statement::Expr(Expression::call("assert", vec![condition])))
            }
            ir::Stmt::Fail => Ok(Statement::Expr(Expression::call(
                "assert",
                vec![Expression::bool_const(false)],
            ))),
            ir::Stmt::Assign { lvals, rvals } => self.translate_assign(lvals, rvals),
            ir::Stmt::Block { stmts } => {
                let mut out = Vec::with_capacity(stmts.len());
                for stmt in stmts {
                    out.push(self.translate_stmt(stmt)?);
                }
                Ok(Statement::Block(out))
            }
            ir::Stmt::Break => Ok(Statement::Break),
            ir::Stmt::Continue => Ok(Statement::Continue),
            ir::Stmt::Skip => Ok(Statement::Skip),
            ir::Stmt::DoWhile { body, condition } => {
                let body = self.translate_stmt(body)?;
                let condition = self.translate_expr(condition)?;
                Ok(Statement::do_while(body, condition))
            }
            ir::Stmt::For {
                variable,
                lower,
                upper,
                body,
            } => {
                let initialiser = Statement::VarDecl(VariableDecl::new(
                    Type::int(),
                    variable.as_str(),
                    Some(self.translate_expr(lower)?),
                ));
                // FIXME: the upper bound lands in the loop condition, so it is
                // re-evaluated on every iteration instead of being captured
                // once before the loop.
                let condition = Expression::infix(
                    InfixOp::Lt,
                    Expression::var(variable.as_str()),
                    self.translate_expr(upper)?,
                );
                let increment = Statement::assign(
                    Expression::var(variable.as_str()),
                    Expression::infix(
                        InfixOp::Add,
                        Expression::var(variable.as_str()),
                        Expression::int(BigInt::from(1)),
                    ),
                );
                let body = self.translate_stmt(body)?;
                Ok(Statement::for_loop(initialiser, condition, increment, body))
            }
            ir::Stmt::IfElse {
                condition,
                true_branch,
                false_branch,
            } => {
                let condition = self.translate_expr(condition)?;
                let true_branch = self.translate_stmt(true_branch)?;
                let false_branch = match false_branch {
                    Some(stmt) => Some(self.translate_stmt(stmt)?),
                    None => None,
                };
                Ok(Statement::if_else(condition, true_branch, false_branch))
            }
            ir::Stmt::Initialiser {
                variables,
                initialiser,
            } => {
                if variables.len() != 1 {
                    return Err(TransformError::UnsupportedConstruct(
                        "multi-variable initialiser".to_string(),
                    ));
                }
                let variable = &variables[0];
                let ty = self.translate_type(&variable.ty)?;
                let initialiser = match initialiser {
                    Some(expr) => Some(self.translate_expr(expr)?),
                    None => None,
                };
                Ok(Statement::VarDecl(VariableDecl::new(
                    ty,
                    variable.name.as_str(),
                    initialiser,
                )))
            }
            ir::Stmt::Return { operand } => {
                let operand = match operand {
                    Some(expr) => Some(self.translate_expr(expr)?),
                    None => None,
                };
                Ok(Statement::Return(operand))
            }
            ir::Stmt::While { condition, body } => {
                let condition = self.translate_expr(condition)?;
                let body = self.translate_stmt(body)?;
                Ok(Statement::while_loop(condition, body))
            }
            ir::Stmt::Debug { .. } | ir::Stmt::NamedBlock { .. } | ir::Stmt::Switch { .. } => Err(
                TransformError::UnsupportedConstruct(stmt.kind_name().to_string()),
            ),
        }
    }

    /// Simultaneous assignments lower pairwise; the source guarantees the
    /// right-hand sides are safe to evaluate in order. Destructuring forms,
    /// where the arities differ, have no lowering.
    fn translate_assign(&mut self, lvals: &[ir::Expr], rvals: &[ir::Expr]) -> Result<Statement> {
        if lvals.len() != rvals.len() {
            return Err(TransformError::UnsupportedConstruct(
                "destructuring assignment".to_string(),
            ));
        }
        let mut steps = Vec::with_capacity(lvals.len());
        for (lval, rval) in lvals.iter().zip(rvals) {
            let lhs = self.translate_expr(lval)?;
            let rhs = self.translate_expr(rval)?;
            steps.push(Statement::assign(lhs, rhs));
        }
        if steps.len() == 1 {
            Ok(steps.remove(0))
        } else {
            Ok(Statement::Block(steps))
        }
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn translate_expr(&mut self, expr: &ir::Expr) -> Result<Expression> {
        match expr {
            ir::Expr::Constant(value) => Ok(match value {
                ir::Value::Bool(v) => Expression::bool_const(*v),
                ir::Value::Int(v) => Expression::IntConst(v.clone()),
                ir::Value::Byte(v) => Expression::hex(u64::from(*v)),
            }),
            ir::Expr::VariableAccess { name } => Ok(Expression::var(name.as_str())),
            ir::Expr::StaticVariableAccess { name } => Ok(Expression::var(mangle::normalize(name))),
            ir::Expr::ArrayAccess { source, index } => {
                let source = self.translate_expr(source)?;
                let index = self.translate_expr(index)?;
                Ok(Expression::array_access(source, index))
            }
            ir::Expr::RecordAccess { source, field } => {
                let source = self.translate_expr(source)?;
                Ok(Expression::field_access(source, field.as_str()))
            }
            ir::Expr::RecordInitialiser { fields } => {
                let mut out = Vec::with_capacity(fields.len());
                for (name, value) in fields {
                    out.push((name.clone(), self.translate_expr(value)?));
                }
                Ok(Expression::struct_init(out))
            }
            ir::Expr::Dereference { operand } => {
                let operand = self.translate_expr(operand)?;
                Ok(Expression::unary(UnaryOp::Deref, operand))
            }
            ir::Expr::FieldDereference { operand, field } => {
                let operand = self.translate_expr(operand)?;
                Ok(Expression::field_deref(operand, field.as_str()))
            }
            ir::Expr::Invoke { callee, arguments } => {
                let name =
                    self.callable_name(&callee.name, &callee.params, &callee.ret, callee.exported)?;
                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.translate_expr(argument)?);
                }
                Ok(Expression::call(name, args))
            }
            ir::Expr::Unary { op, operand } => {
                let operand = self.translate_expr(operand)?;
                let op = match op {
                    ir::UnaryOp::Negation => UnaryOp::Neg,
                    ir::UnaryOp::LogicalNot => UnaryOp::Not,
                    ir::UnaryOp::BitwiseComplement => UnaryOp::BitNot,
                };
                Ok(Expression::unary(op, operand))
            }
            ir::Expr::Binary { op, lhs, rhs } => self.translate_binary(*op, lhs, rhs),
            ir::Expr::Variadic { op, operands } => self.translate_variadic(*op, operands),
            ir::Expr::ArrayLength { .. }
            | ir::Expr::Cast { .. }
            | ir::Expr::IndirectInvoke { .. }
            | ir::Expr::Is { .. }
            | ir::Expr::Lambda { .. }
            | ir::Expr::New { .. }
            | ir::Expr::Quantifier { .. }
            | ir::Expr::TupleInitialiser { .. } => Err(TransformError::UnsupportedConstruct(
                expr.kind_name().to_string(),
            )),
        }
    }

    fn translate_binary(
        &mut self,
        op: ir::BinaryOp,
        lhs: &ir::Expr,
        rhs: &ir::Expr,
    ) -> Result<Expression> {
        let lhs = self.translate_expr(lhs)?;
        let rhs = self.translate_expr(rhs)?;
        let op = match op {
            ir::BinaryOp::Addition => InfixOp::Add,
            ir::BinaryOp::Subtraction => InfixOp::Sub,
            ir::BinaryOp::Multiplication => InfixOp::Mul,
            ir::BinaryOp::Division => InfixOp::Div,
            ir::BinaryOp::Remainder => InfixOp::Rem,
            ir::BinaryOp::Equal => InfixOp::Eq,
            ir::BinaryOp::NotEqual => InfixOp::NotEq,
            ir::BinaryOp::LessThan => InfixOp::Lt,
            ir::BinaryOp::LessThanOrEqual => InfixOp::LtEq,
            ir::BinaryOp::GreaterThan => InfixOp::Gt,
            ir::BinaryOp::GreaterThanOrEqual => InfixOp::GtEq,
            ir::BinaryOp::ShiftLeft => InfixOp::Shl,
            ir::BinaryOp::ShiftRight => InfixOp::Shr,
            // `a ==> b` is sugar for `!a || b`.
            ir::BinaryOp::Implication => {
                return Ok(Expression::infix(
                    InfixOp::Or,
                    Expression::unary(UnaryOp::Not, lhs),
                    rhs,
                ));
            }
            ir::BinaryOp::Exponent | ir::BinaryOp::Iff => {
                return Err(TransformError::UnsupportedConstruct(
                    op.kind_name().to_string(),
                ));
            }
        };
        Ok(Expression::infix(op, lhs, rhs))
    }

    /// Variadic operators fold strictly left-associatively:
    /// `op(a, b, c)` becomes `op(op(a, b), c)`.
    fn translate_variadic(
        &mut self,
        op: ir::VariadicOp,
        operands: &[ir::Expr],
    ) -> Result<Expression> {
        let target = match op {
            ir::VariadicOp::LogicalAnd => InfixOp::And,
            ir::VariadicOp::LogicalOr => InfixOp::Or,
            ir::VariadicOp::BitwiseAnd => InfixOp::BitAnd,
            ir::VariadicOp::BitwiseOr => InfixOp::BitOr,
            ir::VariadicOp::BitwiseXor => {
                return Err(TransformError::UnsupportedConstruct(
                    op.kind_name().to_string(),
                ));
            }
        };
        let mut operands = operands.iter();
        let first = operands.next().ok_or_else(|| {
            TransformError::UnsupportedConstruct(format!("empty {}", op.kind_name()))
        })?;
        let mut acc = self.translate_expr(first)?;
        for operand in operands {
            let rhs = self.translate_expr(operand)?;
            acc = Expression::infix(target, acc, rhs);
        }
        Ok(acc)
    }

    // ------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------

    fn translate_type(&mut self, ty: &ir::Type) -> Result<Type> {
        match ty {
            ir::Type::Void => Ok(Type::Void),
            ir::Type::Bool => Ok(Type::Bool),
            ir::Type::Byte => Ok(Type::fixed(false, 8)?),
            ir::Type::Int => Ok(Type::int()),
            // Arrays and references both flatten to a pointer to the element;
            // bounds information is deliberately lost at this layer.
            ir::Type::Array(element) | ir::Type::Reference(element) => {
                Ok(Type::pointer(self.translate_type(element)?))
            }
            ir::Type::Record(fields) => {
                let mut out = Vec::with_capacity(fields.len());
                for field in fields {
                    out.push(Field::new(
                        self.translate_type(&field.ty)?,
                        field.name.as_str(),
                    ));
                }
                Ok(Type::Struct(out))
            }
            ir::Type::Nominal(name) => Ok(Type::nominal(mangle::normalize(name))),
            ir::Type::Union(_) | ir::Type::Function { .. } => Err(
                TransformError::UnsupportedConstruct(ty.kind_name().to_string()),
            ),
        }
    }
}
