fn main() {
    if let Err(err) = statewheel::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
