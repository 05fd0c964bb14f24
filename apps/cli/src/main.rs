use std::process;

fn main() {
    if let Err(e) = vocab_drill::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
