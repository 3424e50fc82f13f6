use super::{Command, Function, Operation, Program, Val, Var};
use crate::error;
use crate::lang::ast::{Expression, Statement};
use crate::lang::{lex, parse, Error, LineNumber};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime events
///
/// Everything a program does to the outside world comes back from
/// [`Runtime::execute`] as one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// No program is running.
    Stopped,
    /// The cycle budget ran out. Call `execute` again to continue.
    Running,
    /// One line of program output, without the line terminator.
    Print(String),
    Device(Command),
    /// About to execute the statement declared with this line number.
    Trace(LineNumber),
    /// The run is over. The next `execute` returns `Stopped`.
    Error(Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Stopped,
    Running,
    Interrupted,
}

/// ## Evaluator state
///
/// Owns one loaded program, its program counter and its variables.
/// The program counter is a position in the program, not a line number.
pub struct Runtime {
    program: Program,
    pc: usize,
    vars: Var,
    rng: StdRng,
    seed: Option<u64>,
    state: State,
    tron: bool,
    trace_pending: bool,
    strict_goto: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            program: Program::default(),
            pc: 0,
            vars: Var::new(),
            rng: StdRng::from_entropy(),
            seed: None,
            state: State::Stopped,
            tron: false,
            trace_pending: false,
            strict_goto: false,
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Lex and parse a whole program, then start it from the top.
    /// On error the previous program is dropped and nothing runs.
    pub fn load(&mut self, source: &str) -> Result<()> {
        self.program = Program::default();
        self.state = State::Stopped;
        let tokens = lex(source)?;
        let program = parse(&tokens)?;
        self.set_program(program);
        Ok(())
    }

    pub fn set_program(&mut self, program: Program) {
        self.program = program;
        self.run();
    }

    /// Restart the loaded program with fresh variables.
    pub fn run(&mut self) {
        self.pc = 0;
        self.vars = Var::new();
        self.rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.trace_pending = true;
        self.state = State::Running;
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn var(&self, name: &str) -> Option<&Val> {
        self.vars.get(name)
    }

    pub fn is_running(&self) -> bool {
        self.state != State::Stopped
    }

    /// Use a fixed seed for `RND` on every subsequent run.
    pub fn seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    pub fn tron(&mut self, on: bool) {
        self.tron = on;
    }

    /// When set, `GOTO` to a missing line is an error instead of
    /// falling through to the next statement.
    pub fn strict_goto(&mut self, on: bool) {
        self.strict_goto = on;
    }

    pub fn interrupt(&mut self) {
        if self.state == State::Running {
            self.state = State::Interrupted;
        }
    }

    fn line_number(&self) -> Option<LineNumber> {
        self.program.get(self.pc).map(|(n, _)| *n)
    }

    /// Run at most `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.state {
            State::Stopped => return Event::Stopped,
            State::Interrupted => {
                self.state = State::Stopped;
                let error = match self.line_number() {
                    Some(n) => error!(Break, n),
                    None => error!(Break),
                };
                return Event::Error(error);
            }
            State::Running => {}
        }
        for _ in 0..cycles {
            let line_number = match self.line_number() {
                Some(n) => n,
                None => {
                    self.state = State::Stopped;
                    return Event::Stopped;
                }
            };
            if self.tron && self.trace_pending {
                self.trace_pending = false;
                return Event::Trace(line_number);
            }
            let step = self.step();
            self.trace_pending = true;
            match step {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.state = State::Stopped;
                    let error = match self.program.get(self.pc) {
                        Some((_, statement)) => error.in_column(statement.column()),
                        None => error,
                    };
                    return Event::Error(error.in_line_number(line_number));
                }
            }
        }
        Event::Running
    }

    /// Execute the statement at `pc` and move `pc` along.
    fn step(&mut self) -> Result<Option<Event>> {
        let statement = match self.program.get(self.pc) {
            Some((_, statement)) => statement,
            None => return Err(error!(InternalError; "PROGRAM COUNTER OUT OF RANGE")),
        };
        let mut eval = Eval {
            vars: &self.vars,
            rng: &mut self.rng,
        };
        let event = match statement {
            Statement::Assign(col, name, expr) => {
                let val = eval.expression(expr)?;
                self.vars
                    .store(name, val)
                    .map_err(|e| e.in_column(col))?;
                None
            }
            // A bare PRINT still ends a line; it is not a no-op.
            Statement::Print(_, None) => Some(Event::Print(String::new())),
            Statement::Print(col, Some(expr)) => match eval.expression(expr)? {
                Val::Nil => return Err(error!(TypeMismatch, ..col; "CANNOT PRINT NIL")),
                val => Some(Event::Print(val.to_string())),
            },
            Statement::Goto(col, target) => match self.program.find(*target) {
                Some(pc) => {
                    self.pc = pc;
                    return Ok(None);
                }
                None if self.strict_goto => {
                    return Err(error!(UndefinedLine, ..col; target.to_string()));
                }
                None => None,
            },
            Statement::Screen(_, mode) => Some(Event::Device(Command::Screen(*mode))),
            Statement::Pset(_, x, y, color) => {
                let x = eval.integer(x)?;
                let y = eval.integer(y)?;
                let color = match color {
                    Some(c) => Some(eval.integer(c)?),
                    None => None,
                };
                Some(Event::Device(Command::Pset(x, y, color)))
            }
            Statement::Color(_, fg, bg, border) => {
                let fg = eval.integer(fg)?;
                let bg = eval.integer(bg)?;
                let border = eval.integer(border)?;
                Some(Event::Device(Command::Color(fg, bg, border)))
            }
        };
        self.pc += 1;
        Ok(event)
    }
}

/// Expression evaluation against a variable table.
struct Eval<'a> {
    vars: &'a Var,
    rng: &'a mut StdRng,
}

impl<'a> Eval<'a> {
    fn expression(&mut self, expr: &Expression) -> Result<Val> {
        self.evaluate(expr).map_err(|e| e.in_column(expr.column()))
    }

    fn integer(&mut self, expr: &Expression) -> Result<i32> {
        let val = self.expression(expr)?;
        i32::try_from(val).map_err(|e| e.in_column(expr.column()))
    }

    fn evaluate(&mut self, expr: &Expression) -> Result<Val> {
        match expr {
            Expression::Integer(_, n) => Ok(Val::Integer(*n)),
            Expression::String(_, s) => Ok(Val::String(s.clone())),
            Expression::Var(_, name) => self.vars.fetch(name),
            Expression::Binary(_, op, lhs, rhs) => {
                let lhs = self.expression(lhs)?;
                let rhs = self.expression(rhs)?;
                Operation::binary(*op, lhs, rhs)
            }
            Expression::Int(_, expr) => Function::int(self.expression(expr)?),
            Expression::Rnd(_, expr) => {
                let bound = self.expression(expr)?;
                Function::rnd(&mut *self.rng, bound)
            }
        }
    }
}
