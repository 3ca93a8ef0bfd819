fn main() {
    fawkes::app::cli::run();
}
