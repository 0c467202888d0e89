fn main() {
    std::process::exit(pushbridge::app::startup::startup());
}
