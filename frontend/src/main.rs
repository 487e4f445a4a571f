fn main() {
    // The wasm-bindgen start hook in the library boots the app when the
    // module is instantiated; the binary itself has nothing to do.
}
