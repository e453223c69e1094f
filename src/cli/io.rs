//! JSON output for one-shot commands
//!
//! - Output: single JSON object per line on stdout
//! - Envelope: {"status":"ok","data":...} or {"status":"error",...}

use std::io::{self, Write};

use serde_json::{json, Value};

use super::errors::CliResult;

/// Builds a success envelope
pub fn ok_envelope(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

/// Builds an error envelope
pub fn error_envelope(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_line(&ok_envelope(data))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_line(&error_envelope(code, message))
}

fn write_line(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelopes() {
        let ok = ok_envelope(json!([1, 2]));
        assert_eq!(ok["status"], "ok");
        assert_eq!(ok["data"], json!([1, 2]));

        let err = error_envelope("QUERY_NOT_FOUND", "Rental 9 not found");
        assert_eq!(err["status"], "error");
        assert_eq!(err["code"], "QUERY_NOT_FOUND");
    }
}
