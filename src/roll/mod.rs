mod ctx;
mod error;
mod evaluator;
mod record;
mod roller;

type RResult<T> = Result<T, EvalError>;

pub type DefaultRoller = rand::rngs::ThreadRng;

pub use ctx::{Binding, BindingError, Context};
pub use error::EvalError;
pub use evaluator::{Evaluator, DEFAULT_MAX_ROLLS};
pub use record::{DiceRoll, Roll};
pub use roller::{FixedRoller, Roller, ScriptedRoller};
