//! Flag-driven mode: print (or copy) passwords and exit.

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::parse;

pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Stop::Done) => {}
        Err(Stop::Failed(msg)) => {
            prompts::error(&msg);
            std::process::exit(2);
        }
    }
}
