//! Input handling module

mod file_reader;

pub use file_reader::FileReader;
