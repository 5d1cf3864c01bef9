fn main() {
    if let Err(err) = greeter::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
