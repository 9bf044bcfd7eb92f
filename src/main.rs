fn main() {
    if let Err(e) = hostsctl::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
