use crate::lang::ast::Statement;
use crate::lang::LineNumber;

/// ## Parsed program
///
/// Statements stay in the order they appeared in the source. Declared
/// line numbers are neither sorted nor required to be unique.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Program {
    lines: Vec<(LineNumber, Statement)>,
}

impl Program {
    pub fn new(lines: Vec<(LineNumber, Statement)>) -> Program {
        Program { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, pc: usize) -> Option<&(LineNumber, Statement)> {
        self.lines.get(pc)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, (LineNumber, Statement)> {
        self.lines.iter()
    }

    /// Position of the first statement declared as `line_number`.
    /// A linear scan on every jump, in physical order.
    pub fn find(&self, line_number: LineNumber) -> Option<usize> {
        self.lines.iter().position(|(n, _)| *n == line_number)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (line_number, statement) in &self.lines {
            writeln!(f, "{} {}", line_number, statement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goto(n: LineNumber) -> Statement {
        Statement::Goto(0..0, n)
    }

    #[test]
    fn test_find_is_physical_order() {
        let p = Program::new(vec![(30, goto(1)), (10, goto(2)), (20, goto(3))]);
        assert_eq!(p.find(10), Some(1));
        assert_eq!(p.find(30), Some(0));
        assert_eq!(p.find(40), None);
    }

    #[test]
    fn test_find_first_duplicate() {
        let p = Program::new(vec![(10, goto(1)), (20, goto(2)), (10, goto(3))]);
        assert_eq!(p.find(10), Some(0));
    }
}
