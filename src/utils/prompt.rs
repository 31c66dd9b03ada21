// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/prompt.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the interactive thread-count prompt used when
// --threads is omitted on a terminal.

use crate::core::types::{validate_thread_count, MAX_THREADS};
use std::io::{BufRead, Write};

/// Ask for a worker count on `output`, read one line from `input`.
///
/// Returns the validation message for anything that is not an integer in
/// 1..=MAX_THREADS; the caller treats that as a startup error.
pub fn prompt_thread_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    detected: usize,
) -> Result<usize, String> {
    let io_err = |e: std::io::Error| format!("Failed to read thread count: {}", e);

    writeln!(output, "=================================================").map_err(io_err)?;
    writeln!(output, "  datecrack - parallel DDMMYYYY brute force").map_err(io_err)?;
    writeln!(output, "=================================================").map_err(io_err)?;
    writeln!(output, "Detected CPU threads: {}", detected).map_err(io_err)?;
    write!(output, "Enter the number of threads to use (1-{}): ", MAX_THREADS).map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(io_err)?;
    let line = line.trim();
    let threads = line
        .parse::<usize>()
        .map_err(|_| format!("Invalid thread count: {:?}", line))?;
    validate_thread_count(threads)?;
    Ok(threads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accepts_valid_count() {
        let mut input = Cursor::new("8\n");
        let mut output = Vec::new();
        assert_eq!(prompt_thread_count(&mut input, &mut output, 16), Ok(8));
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Detected CPU threads: 16"));
        assert!(shown.contains("(1-999)"));
    }

    #[test]
    fn test_rejects_out_of_range_and_garbage() {
        let mut output = Vec::new();
        assert!(prompt_thread_count(&mut Cursor::new("0\n"), &mut output, 4).is_err());
        assert!(prompt_thread_count(&mut Cursor::new("1000\n"), &mut output, 4).is_err());
        assert!(prompt_thread_count(&mut Cursor::new("many\n"), &mut output, 4).is_err());
        assert!(prompt_thread_count(&mut Cursor::new(""), &mut output, 4).is_err());
    }
}
