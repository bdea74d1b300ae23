use std::{
    io,
    io::{BufRead, Write},
    str::FromStr,
};

/// Prompts until a line parses as `T` and satisfies `valid`.
///
/// Every rejected line, including one that isn't UTF-8, prints `Invalid Input` followed by a blank
/// line. Running out of input is the only way out without a value and surfaces as
/// [`io::ErrorKind::UnexpectedEof`].
pub fn enter_next_param<T: FromStr>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    valid: impl Fn(&T) -> bool,
) -> io::Result<T> {
    let mut line = Vec::new();
    loop {
        writeln!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output, "Invalid Input")?;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("Input ended while waiting for: {prompt}"),
            ));
        }

        match std::str::from_utf8(&line).ok().and_then(|s| s.trim().parse().ok()) {
            Some(value) if valid(&value) => return Ok(value),
            _ => writeln!(output, "Invalid Input\n")?,
        }
    }
}
