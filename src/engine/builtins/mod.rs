pub mod globals;
pub mod io;
pub mod sequence;

pub use globals::{lookup, names};

use crate::engine::error::BuiltinError;
use crate::engine::object::Object;
use tracing::debug;

// Shared argument-count check; runs before any type inspection.
pub(crate) fn check_arity(name: &str, args: &[Object], want: usize) -> Result<(), BuiltinError> {
    if args.len() != want {
        let arity_error = BuiltinError::WrongArgumentCount {
            got: args.len(),
            want,
        };
        debug!(builtin = %name, error = %arity_error, "Arity error in builtin");
        return Err(arity_error);
    }
    Ok(())
}

pub(crate) fn unsupported(function: &'static str, arg: &Object) -> BuiltinError {
    let type_error = BuiltinError::UnsupportedArgument {
        function,
        found: arg.type_name(),
    };
    debug!(builtin = %function, error = %type_error, "Type error in builtin");
    type_error
}
