use super::Val;
use crate::error;
use crate::lang::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

pub struct Function {}

impl Function {
    /// Truncate toward zero. Integers pass through.
    pub fn int(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => Ok(Integer(n)),
            Real(n) => {
                let t = n.trunc();
                if t.is_nan() || t < i32::MIN as f32 || t >= i32::MAX as f32 {
                    Err(error!(Overflow))
                } else {
                    Ok(Integer(t as i32))
                }
            }
            String(_) | Nil => Err(error!(TypeMismatch;
                format!("CANNOT CAST {} TO INTEGER", val.type_name()))),
        }
    }

    /// A Real drawn uniformly from `[0, bound)`.
    pub fn rnd<R: Rng>(rng: &mut R, val: Val) -> Result<Val> {
        match val {
            Val::Integer(bound) if bound > 0 => Ok(Val::Real(rng.gen_range(0.0..bound as f32))),
            Val::Integer(bound) => Err(error!(IllegalFunctionCall;
                format!("RND BOUND {} IS NOT POSITIVE", bound))),
            _ => Err(error!(TypeMismatch;
                format!("RND BOUND MUST BE INTEGER, GOT {}", val.type_name()))),
        }
    }
}
