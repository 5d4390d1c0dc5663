use std::env;

mod cli;
mod error;
mod exits;
mod pass;
mod rand;
mod settings;

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();
    init_logger();

    let args: Vec<String> = env::args().collect();

    if let Err(e) = cli::run(args) {
        exits::fail(&e);
    }
}

/// Log to stderr, `warn` unless RUST_LOG says otherwise.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
