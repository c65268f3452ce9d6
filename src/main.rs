fn main() {
    devsum::app::cli::run();
}
