fn main() {
    if let Err(err) = freerect::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
