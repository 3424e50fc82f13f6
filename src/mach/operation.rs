use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Binary arithmetic. Integer with Integer stays Integer; any Real
/// operand makes the result Real.
pub struct Operation {}

impl Operation {
    pub fn binary(op: char, lhs: Val, rhs: Val) -> Result<Val> {
        match op {
            '+' => Operation::sum(lhs, rhs),
            '*' => Operation::multiply(lhs, rhs),
            _ => Operation::unimplemented(op),
        }
    }

    pub fn unimplemented(op: char) -> Result<Val> {
        Err(error!(UnsupportedOperation; format!("'{}'", op)))
    }

    fn mismatch(lhs: &Val, rhs: &Val) -> Error {
        error!(TypeMismatch; format!("{} AND {}", lhs.type_name(), rhs.type_name()))
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (&lhs, &rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(*r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Real(r)) => Ok(Real(*l as f32 + r)),
            (Real(l), Integer(r)) => Ok(Real(l + *r as f32)),
            (Real(l), Real(r)) => Ok(Real(l + r)),
            _ => Err(Operation::mismatch(&lhs, &rhs)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (&lhs, &rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(*r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Real(r)) => Ok(Real(*l as f32 * r)),
            (Real(l), Integer(r)) => Ok(Real(l * *r as f32)),
            (Real(l), Real(r)) => Ok(Real(l * r)),
            _ => Err(Operation::mismatch(&lhs, &rhs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn code(r: Result<Val>) -> Option<ErrorCode> {
        r.err().map(|e| e.code())
    }

    #[test]
    fn test_promotion() {
        use Val::*;
        assert_eq!(Operation::sum(Integer(2), Integer(3)), Ok(Integer(5)));
        assert_eq!(Operation::sum(Integer(2), Real(0.5)), Ok(Real(2.5)));
        assert_eq!(Operation::multiply(Real(0.5), Integer(4)), Ok(Real(2.0)));
        assert_eq!(Operation::multiply(Integer(6), Integer(7)), Ok(Integer(42)));
    }

    #[test]
    fn test_type_mismatch() {
        use Val::*;
        assert_eq!(
            code(Operation::sum(String("A".into()), Integer(1))),
            Some(ErrorCode::TypeMismatch)
        );
        assert_eq!(
            code(Operation::multiply(Integer(1), Nil)),
            Some(ErrorCode::TypeMismatch)
        );
    }

    #[test]
    fn test_overflow() {
        use Val::*;
        assert_eq!(
            code(Operation::sum(Integer(i32::MAX), Integer(1))),
            Some(ErrorCode::Overflow)
        );
    }

    #[test]
    fn test_unsupported() {
        use Val::*;
        for op in &['-', '/', '='] {
            assert_eq!(
                code(Operation::binary(*op, Integer(4), Integer(2))),
                Some(ErrorCode::UnsupportedOperation)
            );
        }
    }
}
