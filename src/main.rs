fn main() {
    if let Err(err) = stemma::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
