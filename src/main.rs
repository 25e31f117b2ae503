fn main() {
    seahaven::run();
}
