use std::fmt::Debug;
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::{RuntimeError, Unwind};
use crate::interpreter::Interpreter;
use crate::object::{Object, Callable};
use crate::stmt::Stmt;
use crate::token::{Token, Type, Location};
use crate::literal::Literal;

#[derive(Debug, Clone)]
pub struct Function {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
    pub closure: Rc<RefCell<Environment>>,
    pub is_initializer: bool,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Rc::ptr_eq(&self.closure, &other.closure)
    }
}

impl Callable for Function {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));

        self.params.iter().zip(arguments.iter()).for_each(|(param, arg)| {
            environment.define(&param.lexeme, arg.to_owned());
        });

        let environment = Rc::new(RefCell::new(environment));
        let result = interpreter.execute_block(&self.body, environment);

        match result {
            Ok(()) => {
                if self.is_initializer {
                    return self.closure.borrow().get_at(0, &this_token());
                }
                Ok(Object::from(Literal::Nil))
            }
            Err(Unwind::Return(value)) => {
                if self.is_initializer {
                    return self.closure.borrow().get_at(0, &this_token());
                }
                Ok(value)
            }
            Err(Unwind::Break) => unreachable!("break cannot escape a function body"),
            Err(Unwind::Error(error)) => Err(error),
        }
    }

    fn arity(&self) -> usize {
        self.params.len()
    }
}

/// `this` is always defined at distance 0 in a bound method's closure; this
/// synthesizes the lookup token (the slot is keyed by lexeme, not identity).
fn this_token() -> Token {
    Token::new(Type::This, "this".to_owned(), None, Location::new(0, 0))
}

impl Function {
    /// Produces a copy of this function whose closure is a fresh environment,
    /// parented on the original closure, defining `this` as `instance`. Used
    /// when a method is looked up on an instance (SPEC_FULL §4.4).
    pub fn bind(&self, instance: Object) -> Function {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));
        environment.define("this", instance);

        Function {
            name: self.name.clone(),
            params: self.params.clone(),
            body: self.body.clone(),
            closure: Rc::new(RefCell::new(environment)),
            is_initializer: self.is_initializer,
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn {}>", self.name.lexeme)
    }
}

#[derive(Clone)]
pub struct NativeFunction {
    pub name: Token,
    pub arity: usize,
    pub function: fn(&mut Interpreter, Vec<Object>) -> Result<Object, RuntimeError>,
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        (self.function)(interpreter, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl NativeFunction {
    /// The standard library: exactly one global, `clock()` (SPEC_FULL §6).
    pub fn get_globals() -> Vec<NativeFunction> {
        vec![
            NativeFunction {
                name: Token::new(Type::Identifier, "clock".to_owned(), None, Location::new(0, 0)),
                arity: 0,
                function: |_, _| {
                    let now = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .expect("system clock to be after the unix epoch")
                        .as_secs_f64();
                    Ok(Object::from(now))
                },
            },
        ]
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name.lexeme)
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}>", self.name.lexeme)
    }
}
