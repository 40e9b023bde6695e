mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::error::Error;
use crate::logging;

/// Run CLI mode. Returns the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let flags = match parse(&args).map_err(Error::from) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try 'passgen --help' for usage.");
            return exit_code(&e);
        }
    };

    prompts::set_quiet(flags.quiet);
    logging::init(logging::level(flags.verbose, flags.quiet));

    let mut ctx = Context::new(flags);

    match ctx.run() {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e.to_string());
            exit_code(&e)
        }
    }
}

/// 2 for argument errors, 1 for everything else.
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Args(_) => 2,
        _ => 1,
    }
}
