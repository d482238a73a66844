use std::error::Error;

use crate::error::WalkError;
use crate::utils::Logger;

/// Log a failed walk at error level, with its source chain, and hand the error back.
pub fn report_failure(logger: &dyn Logger, err: WalkError) -> WalkError {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    logger.error(&msg);
    err
}
