use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{Error, RuntimeError, Unwind};
use crate::expr::{self, Expr, ExprVisitor};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{self, Stmt, StmtVisitor};
use crate::token::{Token, Type};

type EvalResult = Result<Object, Unwind>;
type ExecResult = Result<(), Unwind>;

/// Walks the AST, evaluating expressions and executing statements for
/// effect. Holds the fixed globals environment and a movable "current
/// environment" pointer, plus the resolver's expression-identity -> hop
/// distance side table.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<Token, usize>,
}

impl Interpreter {
    pub fn new() -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            globals.borrow_mut().define(&native.name.lexeme.clone(), Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
        }
    }

    pub fn interpret(&mut self, statements: &[Stmt]) {
        for statement in statements {
            if let Err(unwind) = self.execute(statement) {
                if let Unwind::Error(error) = unwind {
                    error.throw();
                }
                return;
            }
        }
    }

    /// Records that `name` (a `Variable`/`Assign`/`This`/`Super` use site)
    /// resolves to a local `distance` scopes up. Called by the resolver.
    pub fn resolve(&mut self, name: &Token, distance: usize) {
        self.locals.insert(name.clone(), distance);
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Executes `statements` against a freshly-entered `environment`,
    /// restoring the previous environment on every exit path (normal,
    /// return, break, error) per SPEC_FULL §5.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(());
        for statement in statements {
            if let Err(unwind) = self.execute(statement) {
                result = Err(unwind);
                break;
            }
        }

        self.environment = previous;
        result
    }

    fn lookup_variable(&mut self, name: &Token) -> EvalResult {
        match self.locals.get(name) {
            Some(&distance) => Ok(self.environment.borrow().get_at(distance, name)?),
            None => Ok(self.globals.borrow().get(name)?),
        }
    }

    fn is_equal(left: &Object, right: &Object) -> bool {
        match (left, right) {
            (Object::Literal(Literal::Nil), Object::Literal(Literal::Nil)) => true,
            (Object::Literal(l), Object::Literal(r)) => l == r,
            _ => left == right,
        }
    }

    fn number_operands(operator: &Token, left: &Object, right: &Object) -> Result<(f64, f64), RuntimeError> {
        match (left, right) {
            (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => Ok((*l, *r)),
            _ => Err(RuntimeError {
                token: operator.clone(),
                message: "Operands must be numbers.".to_string(),
            }),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprVisitor<EvalResult> for Interpreter {
    fn visit_literal_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Literal(literal) = expr else { unreachable!() };
        Ok(Object::from(literal.clone()))
    }

    fn visit_grouping_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Grouping(grouping) = expr else { unreachable!() };
        self.evaluate(&grouping.expr)
    }

    fn visit_unary_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Unary(unary) = expr else { unreachable!() };
        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Minus => match right {
                Object::Literal(Literal::Number(n)) => Ok(Object::from(-n)),
                _ => Err(RuntimeError {
                    token: unary.operator.clone(),
                    message: "Operand must be a number.".to_string(),
                }.into()),
            },
            Type::Bang => Ok(Object::from(!right.is_truthy())),
            _ => unreachable!(),
        }
    }

    fn visit_binary_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Binary(binary) = expr else { unreachable!() };
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;
        let operator = &binary.operator;

        match operator.r#type {
            Type::Greater => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Ok(Object::from(l > r))
            }
            Type::GreaterEqual => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Ok(Object::from(l >= r))
            }
            Type::Less => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Ok(Object::from(l < r))
            }
            Type::LessEqual => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Ok(Object::from(l <= r))
            }
            Type::EqualEqual => Ok(Object::from(Self::is_equal(&left, &right))),
            Type::BangEqual => Ok(Object::from(!Self::is_equal(&left, &right))),
            Type::Minus => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Ok(Object::from(l - r))
            }
            Type::Star => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                Ok(Object::from(l * r))
            }
            Type::Slash => {
                let (l, r) = Self::number_operands(operator, &left, &right)?;
                if r == 0.0 {
                    return Err(RuntimeError {
                        token: operator.clone(),
                        message: "Cannot divide by zero.".to_string(),
                    }.into());
                }
                Ok(Object::from(l / r))
            }
            Type::Plus => match (&left, &right) {
                (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => Ok(Object::from(l + r)),
                (Object::Literal(Literal::String(l)), Object::Literal(Literal::String(r))) => {
                    Ok(Object::from(format!("{l}{r}")))
                }
                _ => Err(RuntimeError {
                    token: operator.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                }.into()),
            },
            _ => unreachable!(),
        }
    }

    fn visit_logical_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Logical(logical) = expr else { unreachable!() };
        let left = self.evaluate(&logical.left)?;

        if logical.operator.r#type == Type::Or {
            if left.is_truthy() {
                return Ok(left);
            }
        } else if !left.is_truthy() {
            return Ok(left);
        }

        self.evaluate(&logical.right)
    }

    fn visit_variable_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Variable(variable) = expr else { unreachable!() };
        self.lookup_variable(&variable.name)
    }

    fn visit_assign_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Assign(assign) = expr else { unreachable!() };
        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.name) {
            Some(&distance) => self.environment.borrow_mut().assign_at(distance, &assign.name, value.clone()),
            None => self.globals.borrow_mut().assign(&assign.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Call(call) = expr else { unreachable!() };

        let callee = self.evaluate(&call.callee)?;
        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let arity = match &callee {
            Object::Function(function) => function.arity(),
            Object::NativeFunction(native) => native.arity(),
            Object::Class(class) => class.borrow().arity(),
            _ => {
                return Err(RuntimeError {
                    token: call.paren.clone(),
                    message: "Can only call functions and classes.".to_string(),
                }.into());
            }
        };

        if arguments.len() != arity {
            return Err(RuntimeError {
                token: call.paren.clone(),
                message: format!("Expected {arity} arguments but got {}.", arguments.len()),
            }.into());
        }

        let call_result: Result<Object, RuntimeError> = match &callee {
            Object::Function(function) => function.call(self, arguments),
            Object::NativeFunction(native) => native.call(self, arguments),
            Object::Class(class) => Class::instantiate(class, self, arguments),
            _ => unreachable!(),
        };

        Ok(call_result?)
    }

    fn visit_get_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Get(get) = expr else { unreachable!() };
        let object = self.evaluate(&get.object)?;

        match &object {
            Object::Instance(instance) => Ok(instance.borrow().get(&get.name, &object)?),
            _ => Err(RuntimeError {
                token: get.name.clone(),
                message: "Only instances have properties.".to_string(),
            }.into()),
        }
    }

    fn visit_set_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Set(set) = expr else { unreachable!() };
        let object = self.evaluate(&set.object)?;

        match object {
            Object::Instance(instance) => {
                let value = self.evaluate(&set.value)?;
                instance.borrow_mut().set(&set.name, value.clone());
                Ok(value)
            }
            _ => Err(RuntimeError {
                token: set.name.clone(),
                message: "Only instances have fields.".to_string(),
            }.into()),
        }
    }

    fn visit_this_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::This(this) = expr else { unreachable!() };
        self.lookup_variable(&this.keyword)
    }

    fn visit_super_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Super(super_expr) = expr else { unreachable!() };

        let distance = *self.locals.get(&super_expr.keyword)
            .expect("resolver to have recorded a distance for every 'super' use");

        let superclass = self.environment.borrow().get_at(distance, &super_expr.keyword)?;
        let Object::Class(superclass) = superclass else {
            unreachable!("'super' always resolves to a class")
        };

        let this_token = Token::new(Type::This, "this".to_owned(), None, super_expr.keyword.location);
        let instance = self.environment.borrow().get_at(distance - 1, &this_token)?;

        match superclass.borrow().get_method(&super_expr.method.lexeme) {
            Some(method) => Ok(Object::from(method.bind(instance))),
            None => Err(RuntimeError {
                token: super_expr.method.clone(),
                message: format!("Undefined property '{}'.", super_expr.method.lexeme),
            }.into()),
        }
    }
}

impl StmtVisitor<ExecResult> for Interpreter {
    fn visit_expression_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Expression(data) = stmt else { unreachable!() };
        self.evaluate(&data.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Print(data) = stmt else { unreachable!() };
        let value = self.evaluate(&data.expr)?;
        println!("{value}");
        Ok(())
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Var(data) = stmt else { unreachable!() };
        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::Uninitialized,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Block(data) = stmt else { unreachable!() };
        let environment = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&data.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::If(data) = stmt else { unreachable!() };

        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::While(data) = stmt else { unreachable!() };

        while self.evaluate(&data.condition)?.is_truthy() {
            match self.execute(&data.body) {
                Ok(()) => {}
                Err(Unwind::Break) => break,
                Err(other) => return Err(other),
            }
        }

        Ok(())
    }

    fn visit_break_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Break(_) = stmt else { unreachable!() };
        Err(Unwind::Break)
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Function(data) = stmt else { unreachable!() };

        let function = Function {
            name: data.name.clone(),
            params: data.params.clone(),
            body: data.body.clone(),
            closure: Rc::clone(&self.environment),
            is_initializer: false,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(())
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Return(data) = stmt else { unreachable!() };

        let value = match &data.value {
            Some(expr) => self.evaluate(expr)?,
            None => Object::from(Literal::Nil),
        };

        Err(Unwind::Return(value))
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Class(data) = stmt else { unreachable!() };

        let superclass = match &data.superclass {
            Some(superclass_expr) => {
                let value = self.evaluate(superclass_expr)?;
                match value {
                    Object::Class(class) => Some(class),
                    _ => {
                        let Expr::Variable(variable) = superclass_expr else { unreachable!() };
                        return Err(RuntimeError {
                            token: variable.name.clone(),
                            message: "Superclass must be a class.".to_string(),
                        }.into());
                    }
                }
            }
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::Uninitialized);

        let method_scope = if superclass.is_some() {
            let mut scope = Environment::new(Some(Rc::clone(&self.environment)));
            if let Some(superclass) = &superclass {
                scope.define("super", Object::from(Rc::clone(superclass)));
            }
            Rc::new(RefCell::new(scope))
        } else {
            Rc::clone(&self.environment)
        };

        let mut methods = HashMap::new();
        for method in &data.methods {
            let stmt::FunctionData { name, params, body } = method_function_data(method);

            let function = Function {
                name: name.clone(),
                params: params.clone(),
                body: body.clone(),
                closure: Rc::clone(&method_scope),
                is_initializer: name.lexeme == "init",
            };

            methods.insert(name.lexeme.clone(), function);
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);
        self.environment.borrow_mut().assign(&data.name, Object::from(Rc::new(RefCell::new(class))))?;

        Ok(())
    }
}

fn method_function_data(stmt: &Stmt) -> &stmt::FunctionData {
    match stmt {
        Stmt::Function(data) => data,
        _ => unreachable!("class body only contains function declarations"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::Location;

    fn num(n: f64) -> Expr {
        Expr::Literal(Literal::Number(n))
    }

    fn op(r#type: Type, lexeme: &str) -> Token {
        Token::new(r#type, lexeme.to_owned(), None, Location::new(1, 1))
    }

    #[test]
    fn evaluate_literal() {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.evaluate(&num(12.0)).unwrap(), Object::from(12.0));
    }

    #[test]
    fn evaluate_unary_negation() {
        let mut interpreter = Interpreter::new();
        let expr = Expr::Unary(expr::UnaryData {
            operator: op(Type::Minus, "-"),
            expr: Box::new(num(12.0)),
        });
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from(-12.0));
    }

    #[test]
    fn evaluate_binary_arithmetic() {
        let mut interpreter = Interpreter::new();
        let expr = Expr::Binary(expr::BinaryData {
            left: Box::new(num(6.0)),
            operator: op(Type::Minus, "-"),
            right: Box::new(Expr::Binary(expr::BinaryData {
                left: Box::new(num(12.0)),
                operator: op(Type::Minus, "-"),
                right: Box::new(num(24.0)),
            })),
        });
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from(18.0));
    }

    #[test]
    fn evaluate_grouping() {
        let mut interpreter = Interpreter::new();
        let expr = Expr::Grouping(expr::GroupingData { expr: Box::new(num(12.0)) });
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from(12.0));
    }

    #[test]
    fn string_concatenation() {
        let mut interpreter = Interpreter::new();
        let expr = Expr::Binary(expr::BinaryData {
            left: Box::new(Expr::Literal(Literal::String("Hello".to_string()))),
            operator: op(Type::Plus, "+"),
            right: Box::new(Expr::Literal(Literal::String("World".to_string()))),
        });
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from("HelloWorld"));
    }

    #[test]
    fn adding_string_and_number_is_a_runtime_error() {
        let mut interpreter = Interpreter::new();
        let expr = Expr::Binary(expr::BinaryData {
            left: Box::new(Expr::Literal(Literal::String("Hello".to_string()))),
            operator: op(Type::Plus, "+"),
            right: Box::new(num(12.0)),
        });
        let result = interpreter.evaluate(&expr);
        match result {
            Err(Unwind::Error(error)) => {
                assert_eq!(error.message, "Operands must be two numbers or two strings.");
            }
            other => panic!("expected a runtime error, got {other:?}"),
        }
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        let mut interpreter = Interpreter::new();
        let expr = Expr::Binary(expr::BinaryData {
            left: Box::new(num(1.0)),
            operator: op(Type::Slash, "/"),
            right: Box::new(num(0.0)),
        });
        match interpreter.evaluate(&expr) {
            Err(Unwind::Error(error)) => assert_eq!(error.message, "Cannot divide by zero."),
            other => panic!("expected a runtime error, got {other:?}"),
        }
    }

    #[test]
    fn comparisons() {
        let mut interpreter = Interpreter::new();
        let greater = Expr::Binary(expr::BinaryData {
            left: Box::new(num(12.0)),
            operator: op(Type::Greater, ">"),
            right: Box::new(num(12.0)),
        });
        assert_eq!(interpreter.evaluate(&greater).unwrap(), Object::from(false));

        let greater_equal = Expr::Binary(expr::BinaryData {
            left: Box::new(num(12.0)),
            operator: op(Type::GreaterEqual, ">="),
            right: Box::new(num(12.0)),
        });
        assert_eq!(interpreter.evaluate(&greater_equal).unwrap(), Object::from(true));
    }

    #[test]
    fn equality_across_types_is_false() {
        let mut interpreter = Interpreter::new();
        let expr = Expr::Binary(expr::BinaryData {
            left: Box::new(num(12.0)),
            operator: op(Type::EqualEqual, "=="),
            right: Box::new(Expr::Literal(Literal::String("12".to_string()))),
        });
        assert_eq!(interpreter.evaluate(&expr).unwrap(), Object::from(false));
    }

    #[test]
    fn truthiness() {
        assert!(Object::from(0.0).is_truthy());
        assert!(Object::from("").is_truthy());
        assert!(!Object::Literal(Literal::Nil).is_truthy());
        assert!(!Object::from(false).is_truthy());
    }

    #[test]
    fn stringify_strips_trailing_zero() {
        assert_eq!(Object::from(1.0).to_string(), "1");
        assert_eq!(Object::from(1.5).to_string(), "1.5");
        assert_eq!(Object::Literal(Literal::Nil).to_string(), "nil");
    }
}
