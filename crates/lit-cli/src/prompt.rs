//! Line-based prompts on stdin.

use std::io::{BufRead, Write};

use lit_mechanics::validate_name;

/// Ask for a name until a valid one is entered. Returns the trimmed name.
pub fn read_name(input: &mut impl BufRead, out: &mut impl Write) -> Result<String, String> {
    loop {
        let line = read_line(input, out, "Enter your name: ")?
            .ok_or("input closed before a name was entered")?;
        let name = line.trim();
        match validate_name(name) {
            Ok(()) => return Ok(name.to_string()),
            Err(e) => tracing::debug!("rejected name: {e}"),
        }
    }
}

/// Block until the user hits ENTER. Returns false once input is closed.
pub fn wait_for_step(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool, String> {
    Ok(read_line(input, out, "Hit ENTER to step")?.is_some())
}

fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>, String> {
    write!(out, "{prompt}").map_err(|e| format!("write error: {e}"))?;
    out.flush().map_err(|e| format!("write error: {e}"))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("read error: {e}"))?;
    Ok((read > 0).then_some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprompts_until_valid() {
        let mut input = "\n   \nqqqqqqqqqqqqqqqqqqqqq\n  Ada  \n".as_bytes();
        let mut out = Vec::new();
        let name = read_name(&mut input, &mut out).unwrap();
        assert_eq!(name, "Ada");
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Enter your name: ").count(), 4);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = "\n".as_bytes();
        let mut out = Vec::new();
        assert!(read_name(&mut input, &mut out).is_err());
    }

    #[test]
    fn step_reports_closed_input() {
        let mut input = "\n".as_bytes();
        let mut out = Vec::new();
        assert!(wait_for_step(&mut input, &mut out).unwrap());
        assert!(!wait_for_step(&mut input, &mut out).unwrap());
    }
}
