//! Entry point for the WASM application

pub fn main() {
    gwas_standardizer::mount();
}
