//! Runners for the parse and format commands

use std::process::ExitCode;

use crate::application::{convert, ConvertRequest, DurationReport};
use crate::domain::error::DurationError;

use super::args::OutputOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the parse command on duration text
pub fn run_parse(text: &str, options: OutputOptions, presenter: &Presenter) -> ExitCode {
    run_conversion(ConvertRequest::Text(text.to_string()), options, presenter)
}

/// Run the format command on a count of seconds
pub fn run_format(seconds: i64, options: OutputOptions, presenter: &Presenter) -> ExitCode {
    run_conversion(ConvertRequest::Seconds(seconds), options, presenter)
}

fn run_conversion(
    request: ConvertRequest,
    options: OutputOptions,
    presenter: &Presenter,
) -> ExitCode {
    let duration = match convert(&request) {
        Ok(d) => d,
        Err(e) => {
            report_invalid(&request, &e, presenter);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    if options.json {
        return match presenter.format_report_json(&DurationReport::from(duration)) {
            Ok(json) => {
                presenter.output(&json);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&format!("Failed to serialize result: {}", e));
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    if options.seconds {
        presenter.output(&duration.as_secs().to_string());
    } else {
        presenter.output(&duration.format(options.style));
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn report_invalid(request: &ConvertRequest, error: &DurationError, presenter: &Presenter) {
    presenter.error(&format!("Invalid duration: {}", error));
    if let (ConvertRequest::Text(text), Some(position)) = (request, error.position()) {
        presenter.error_marker(text, position);
    }
}
