//! Entry point for the WASM application

pub fn main() {
    cloudsnap::mount();
}
