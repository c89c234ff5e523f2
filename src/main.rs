use std::env;

mod cli;
mod exits;
mod logging;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    if args.len() == 1 && cli::quiet::stdout_is_tty() {
        logging::init("off");
        tui::run();
    } else {
        logging::init("warn");
        cli::run(args);
    }
}
