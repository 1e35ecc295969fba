fn main() {
    if let Err(e) = staffdb::app::run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
