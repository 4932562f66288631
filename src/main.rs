fn main() {
    ib::term::main()
}
