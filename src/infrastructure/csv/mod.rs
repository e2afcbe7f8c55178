// ============================================================
// CSV INFRASTRUCTURE
// ============================================================
// Tokenization and file-reading adapters around the csv crate

mod encoding;
mod tokenizer;

pub use encoding::{decode_bytes, read_import_file};
pub use tokenizer::{detect_delimiter, serialize_rows, tokenize};
