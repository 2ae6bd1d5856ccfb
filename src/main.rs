fn main() {
    binder_config::app::cli::run();
}
