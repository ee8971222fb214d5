fn main() {
    confix::cli::run();
}
