fn main() {
    build_dori::app::cli::run();
}
