//! Entry point for the WASM application

pub fn main() {
    csv_upload::start();
}
