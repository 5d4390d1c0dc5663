mod context;
mod flags;
mod parse;
pub mod prompts;
mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

use crate::error::Result;

pub fn run(args: Vec<String>) -> Result<()> {
    Context::new(&args)?.run()
}
