use crate::engine::error::BuiltinError;
use crate::engine::object::Object;
use std::io::Write;
use tracing::{instrument, trace, warn};

/// Writes each argument's inspection on its own line. Takes any number of
/// arguments of any type and always returns `null`.
#[instrument(skip(args, out), ret)]
pub fn native_puts(args: Vec<Object>, out: &mut dyn Write) -> Result<Object, BuiltinError> {
    trace!(count = args.len(), "Executing native 'puts' function");
    for arg in &args {
        if let Err(e) = writeln!(out, "{}", arg) {
            warn!(error = %e, "Failed to write 'puts' output");
        }
    }
    Ok(Object::Null)
}
