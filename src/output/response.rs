//! CLI response formatting and output.
//!
//! Provides the JSON envelope, text error printing, and exit code mapping.

use pm::error::Hint;
use pm::{Error, ErrorCode, Result};
use serde::Serialize;

use super::TextOutput;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn write_stdout(payload: &str) -> Result<()> {
    use std::io::{self, Write};

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    let mut payload = response.to_json()?;
    payload.push('\n');
    write_stdout(&payload)
}

pub fn print_json_result(result: Result<serde_json::Value>) {
    let printed = match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    };
    if let Err(err) = printed {
        eprintln!("Error: {}", err);
    }
}

/// Print command text to stdout, or a readable error to stderr.
pub fn print_text_error(err: &Error) {
    eprintln!("Error: {}", err.message);

    let available = err.available();
    if !available.is_empty() && err.code.is_not_found() {
        eprintln!();
        eprintln!("Available:");
        for item in &available {
            eprintln!("  {}", item);
        }
    }

    if !err.hints.is_empty() {
        eprintln!();
        for hint in &err.hints {
            eprintln!("Hint: {}", hint.message);
        }
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn map_cmd_result_to_text<T: TextOutput>(result: Result<(T, i32)>) -> (Result<String>, i32) {
    match result {
        Ok((data, exit_code)) => (Ok(data.to_text()), exit_code),
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

/// Write rendered text to stdout, ignoring a closed pipe.
pub fn print_text(content: &str) {
    if let Err(err) = write_stdout(content) {
        eprintln!("Error: {}", err);
    }
}

fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ValidationMissingArgument
        | ErrorCode::ValidationInvalidArgument
        | ErrorCode::ValidationInvalidJson
        | ErrorCode::ValidationInvalidTemplate => 2,

        ErrorCode::ManualNotFound
        | ErrorCode::PresetNotFound
        | ErrorCode::TemplateNotFound
        | ErrorCode::SectionNotFound
        | ErrorCode::GroupNotFound => 4,

        ErrorCode::EditorFailed => 20,

        ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}
