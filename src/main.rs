fn main() {
    ishlib::run_cli();
}
