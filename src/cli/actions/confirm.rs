use std::io::{BufRead, Write};

use anyhow::Result;

/// Ask a yes/no question. Only `y` or `yes` (any case) counts as consent;
/// end of input is treated as no.
pub fn confirm<R: BufRead, W: Write>(prompt: &str, reader: &mut R, writer: &mut W) -> Result<bool> {
    write!(writer, "{} [y/N] ", prompt)?;
    writer.flush()?;

    let mut answer = String::new();
    if reader.read_line(&mut answer)? == 0 {
        writeln!(writer)?;
        return Ok(false);
    }

    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
