//! Input/output abstractions
//!
//! Commands read and write through these traits so they can be driven by
//! mock implementations in tests.

use std::io::{self, BufRead};

/// Trait for reading line-oriented input
pub trait InputReader {
    /// Read every remaining line of input
    fn read_lines(&mut self) -> Result<Vec<String>, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_lines(&mut self) -> Result<Vec<String>, io::Error> {
        io::stdin().lock().lines().collect()
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
