use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{EvalResult, ExecResult, RuntimeError, Signal};
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GetData, GroupingData, LogicalData,
    NodeId, SetData, SuperData, ThisData, UnaryData, VariableData,
};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::{Token, Type};

/// Walks the resolved AST and evaluates it. Generic over the output sink so
/// tests (and anything else embedding the interpreter) can capture what a
/// program prints without touching the process's real stdout; the REPL and
/// file runner both just plug in `std::io::stdout()`.
pub struct Interpreter<'a> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<NodeId, usize>,
    output: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name;
            globals.borrow_mut().define(name, Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output,
        }
    }

    /// Merges in the variable-depth table produced by resolving a chunk of
    /// source. Extended rather than replaced so the REPL, which resolves and
    /// interprets one line at a time against the same `Interpreter`, doesn't
    /// forget how earlier lines resolved.
    pub fn resolve(&mut self, locals: HashMap<NodeId, usize>) {
        self.locals.extend(locals);
    }

    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {}
                Err(Signal::Error(error)) => return Err(error),
                Err(Signal::Return(_)) => unreachable!("resolver guarantees 'return' only appears inside a function"),
            }
        }

        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Runs `statements` in a fresh child scope, restoring the previous
    /// environment afterwards even if execution errors out partway through.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = mem::replace(&mut self.environment, environment);

        let mut result = Ok(());
        for statement in statements {
            if let Err(signal) = self.execute(statement) {
                result = Err(signal);
                break;
            }
        }

        self.environment = previous;
        result
    }

    fn look_up_variable(&self, id: NodeId, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => self.environment.borrow().get_at(distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    /// Lox truthiness: everything is truthy except `false` and `nil`.
    /// Non-literal objects (functions, classes, instances) have no boolean
    /// representation and are therefore always truthy.
    fn is_truthy(object: &Object) -> bool {
        object.as_bool().unwrap_or(true)
    }

    fn is_equal(left: &Object, right: &Object) -> bool {
        left == right
    }

    fn invoke(&mut self, callable: &dyn Callable, arguments: Vec<Object>, paren: &Token) -> EvalResult {
        if arguments.len() != callable.arity() {
            return Err(Signal::Error(RuntimeError {
                token: paren.clone(),
                message: format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            }));
        }

        callable.call(self, arguments).map_err(Signal::Error)
    }
}

impl<'a> ExprVisitor<EvalResult> for Interpreter<'a> {
    fn visit_literal_expr(&mut self, data: &Literal) -> EvalResult {
        Ok(Object::from(data.clone()))
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) -> EvalResult {
        self.evaluate(&data.expr)
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) -> EvalResult {
        let right = self.evaluate(&data.expr)?;

        match data.operator.r#type {
            Type::Minus => match right {
                Object::Literal(Literal::Number(n)) => Ok(Object::from(-n)),
                _ => Err(Signal::Error(RuntimeError {
                    token: data.operator.clone(),
                    message: "Operand must be a number.".to_string(),
                })),
            },
            Type::Bang => Ok(Object::from(!Self::is_truthy(&right))),
            _ => unreachable!("scanner/parser only ever produce '-' or '!' as a unary operator"),
        }
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) -> EvalResult {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;

        macro_rules! numeric_cmp {
            ($op:tt) => {
                match (&left, &right) {
                    (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => {
                        Ok(Object::from(l $op r))
                    }
                    _ => Err(Signal::Error(RuntimeError {
                        token: data.operator.clone(),
                        message: "Operands must be numbers.".to_string(),
                    })),
                }
            };
        }

        match data.operator.r#type {
            Type::Greater => numeric_cmp!(>),
            Type::GreaterEqual => numeric_cmp!(>=),
            Type::Less => numeric_cmp!(<),
            Type::LessEqual => numeric_cmp!(<=),
            Type::BangEqual => Ok(Object::from(!Self::is_equal(&left, &right))),
            Type::EqualEqual => Ok(Object::from(Self::is_equal(&left, &right))),
            Type::Minus => numeric_cmp!(-),
            Type::Slash => numeric_cmp!(/),
            Type::Star => numeric_cmp!(*),
            Type::Plus => match (&left, &right) {
                (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => {
                    Ok(Object::from(l + r))
                }
                (Object::Literal(Literal::String(l)), Object::Literal(Literal::String(r))) => {
                    Ok(Object::from(format!("{l}{r}")))
                }
                _ => Err(Signal::Error(RuntimeError {
                    token: data.operator.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                })),
            },
            _ => unreachable!("scanner/parser only ever produce a comparison/arithmetic operator here"),
        }
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) -> EvalResult {
        let left = self.evaluate(&data.left)?;

        if data.operator.r#type == Type::Or {
            if Self::is_truthy(&left) {
                return Ok(left);
            }
        } else if !Self::is_truthy(&left) {
            return Ok(left);
        }

        self.evaluate(&data.right)
    }

    fn visit_variable_expr(&mut self, data: &VariableData) -> EvalResult {
        self.look_up_variable(data.id, &data.name).map_err(Signal::Error)
    }

    fn visit_assign_expr(&mut self, data: &AssignData) -> EvalResult {
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.id).copied() {
            Some(distance) => self.environment.borrow_mut().assign_at(distance, &data.name, value.clone()),
            None => self.globals.borrow_mut().assign(&data.name, value.clone()).map_err(Signal::Error)?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, data: &CallData) -> EvalResult {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        match &callee {
            Object::Function(function) => self.invoke(function, arguments, &data.paren),
            Object::NativeFunction(function) => self.invoke(function, arguments, &data.paren),
            Object::Class(class) => {
                let class = Rc::clone(class);
                let class_ref = class.borrow();
                self.invoke(&*class_ref, arguments, &data.paren)
            }
            _ => Err(Signal::Error(RuntimeError {
                token: data.paren.clone(),
                message: "Can only call functions and classes.".to_string(),
            })),
        }
    }

    fn visit_get_expr(&mut self, data: &GetData) -> EvalResult {
        let object = self.evaluate(&data.object)?;

        if let Object::Instance(instance) = &object {
            instance.borrow().get(&data.name, &object).map_err(Signal::Error)
        } else {
            Err(Signal::Error(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have properties.".to_string(),
            }))
        }
    }

    fn visit_set_expr(&mut self, data: &SetData) -> EvalResult {
        let object = self.evaluate(&data.object)?;

        let Object::Instance(instance) = &object else {
            return Err(Signal::Error(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have fields.".to_string(),
            }));
        };

        let value = self.evaluate(&data.value)?;
        instance.borrow_mut().set(&data.name, value.clone());
        Ok(value)
    }

    fn visit_this_expr(&mut self, data: &ThisData) -> EvalResult {
        self.look_up_variable(data.id, &data.keyword).map_err(Signal::Error)
    }

    fn visit_super_expr(&mut self, data: &SuperData) -> EvalResult {
        let distance = *self.locals.get(&data.id).expect("resolver to have resolved 'super'");

        let superclass = self.environment.borrow().get_at(distance, &Token::synthetic("super")).map_err(Signal::Error)?;
        let Object::Class(superclass) = superclass else {
            panic!("resolver bound 'super' to a non-class value");
        };

        // 'this' always lives one scope closer than 'super': the resolver
        // pushes the 'super' scope, then a nested 'this' scope, per method.
        let instance = self
            .environment
            .borrow()
            .get_at(distance - 1, &Token::synthetic("this"))
            .map_err(Signal::Error)?;

        match superclass.borrow().find_method(&data.method.lexeme) {
            Some(method) => Ok(Object::from(method.bind(instance))),
            None => Err(Signal::Error(RuntimeError {
                token: data.method.clone(),
                message: format!("Undefined property '{}'.", data.method.lexeme),
            })),
        }
    }
}

impl<'a> StmtVisitor<ExecResult> for Interpreter<'a> {
    fn visit_expression_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Expression(data) = stmt else { unreachable!() };

        self.evaluate(&data.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Print(data) = stmt else { unreachable!() };

        let value = self.evaluate(&data.expr)?;
        writeln!(self.output, "{value}").expect("writing to the output stream should not fail");
        Ok(())
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Var(data) = stmt else { unreachable!() };

        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
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

        let condition = self.evaluate(&data.condition)?;
        if Self::is_truthy(&condition) {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::While(data) = stmt else { unreachable!() };

        while Self::is_truthy(&self.evaluate(&data.condition)?) {
            self.execute(&data.body)?;
        }

        Ok(())
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Function(declaration) = stmt else { unreachable!() };

        let function = Function::new(Rc::clone(declaration), Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&declaration.name.lexeme, Object::from(function));
        Ok(())
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Return(data) = stmt else { unreachable!() };

        let value = match &data.value {
            Some(expr) => self.evaluate(expr)?,
            None => Object::from(Literal::Nil),
        };

        Err(Signal::Return(value))
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Class(data) = stmt else { unreachable!() };

        let superclass = match &data.superclass {
            Some(variable) => {
                let value = self.look_up_variable(variable.id, &variable.name).map_err(Signal::Error)?;
                let Object::Class(class) = value else {
                    return Err(Signal::Error(RuntimeError {
                        token: variable.name.clone(),
                        message: "Superclass must be a class.".to_string(),
                    }));
                };
                Some(class)
            }
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(Literal::Nil));

        let enclosing_environment = superclass.as_ref().map(|superclass| {
            let environment = Environment::new(Some(Rc::clone(&self.environment)));
            let environment = Rc::new(RefCell::new(environment));
            environment.borrow_mut().define("super", Object::from(Rc::clone(superclass)));
            mem::replace(&mut self.environment, environment)
        });

        let mut methods = HashMap::new();
        for method in &data.methods {
            let is_initializer = method.name.lexeme == "init";
            let function = Function::new(Rc::clone(method), Rc::clone(&self.environment), is_initializer);
            methods.insert(method.name.lexeme.clone(), function);
        }

        if let Some(enclosing_environment) = enclosing_environment {
            self.environment = enclosing_environment;
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);
        self.environment
            .borrow_mut()
            .assign(&data.name, Object::from(Rc::new(RefCell::new(class))))
            .map_err(Signal::Error)?;

        Ok(())
    }
}
