fn main() {
    chownow_express::run();
}
