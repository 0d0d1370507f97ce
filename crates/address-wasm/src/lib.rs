//! WebAssembly bindings for the address codecs.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Bech32 encoding and decoding
//! - Checksummed hex address formatting and validation
//! - Cosmos-style account address derivation

use wasm_bindgen::prelude::*;

pub mod codec;
pub mod state;

pub use codec::Codec;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
