//! Bundles the demo stylesheet. The sidebar itself only writes inline styles;
//! these rules style the `[data-status]` panel and the `[data-mask]` backdrop.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

fn bundle(entry: &Path) -> String {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());
    let mut sheet = bundler
        .bundle(entry)
        .unwrap_or_else(|e| panic!("cannot bundle {}: {}", entry.display(), e));

    sheet
        .minify(MinifyOptions::default())
        .unwrap_or_else(|e| panic!("cannot minify {}: {}", entry.display(), e));

    let printer = PrinterOptions {
        minify: true,
        ..Default::default()
    };
    sheet
        .to_css(printer)
        .unwrap_or_else(|e| panic!("cannot print {}: {}", entry.display(), e))
        .code
}

fn main() {
    // layout.css and sidebar.css reach the bundle through @import
    println!("cargo:rerun-if-changed=assets/css/");

    let css = bundle(Path::new(ENTRY));
    fs::create_dir_all(OUT_DIR).expect("assets/dist is not writable");
    fs::write(OUT_FILE, css).expect("cannot write the demo bundle");
}
