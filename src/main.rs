use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    std::process::exit(wellreport::cli::run_with_args(&args));
}
