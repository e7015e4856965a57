use std::io;

fn main() {
    drawpoker_cli::logging::init_logging();
    let code = drawpoker_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
