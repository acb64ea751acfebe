//! Operator-facing text prompt facility.
//!
//! Implementations supply two primitives -- [`Console::emit`] to print a line
//! and [`Console::read_response`] to block for one -- and the provided
//! methods build every prompt shape the solvers need on top of them:
//! yes/no questions, predicate-validated strings and lists, closed option
//! sets, and positive integers. Invalid answers re-prompt; after
//! [`MAX_RETRIES`] consecutive invalid answers a prompt gives up with
//! [`SolveError::RetriesExhausted`].
//!
//! The real terminal implementation lives in the CLI crate; tests use the
//! scripted console from `test_utils`.

use crate::error::SolveError;

/// Prompt marker printed before each read.
pub const PROMPT: &str = "> ";

/// Widest line the option-list printer will produce.
pub const MAX_LINE_WIDTH: usize = 80;

/// How many consecutive invalid answers one prompt tolerates.
pub const MAX_RETRIES: u32 = 20;

/// Blocking, synchronous request/response channel to the operator.
pub trait Console {
    /// Print one line of output.
    fn emit(&mut self, message: &str);

    /// Block until the operator supplies one line, returned without its
    /// trailing newline.
    fn read_response(&mut self) -> Result<String, SolveError>;

    /// Ask a yes/no question. Only an exact `y` (any case) is a yes.
    fn yes_no(&mut self, prompt: &str) -> Result<bool, SolveError> {
        self.emit(&format!("{prompt} (y/n)"));
        Ok(self.read_response()?.trim().eq_ignore_ascii_case("y"))
    }

    /// Read one response satisfying `check`, re-prompting on failure.
    /// Case-insensitive reads are lowercased before validation.
    fn string_matching(
        &mut self,
        check: &dyn Fn(&str) -> bool,
        case_sensitive: bool,
    ) -> Result<String, SolveError> {
        if case_sensitive {
            self.emit("(Inputs are case sensitive.)");
        }
        self.checked_response(check, case_sensitive, false)
    }

    /// Read a list of responses, each satisfying `check`. With
    /// `expected_len == 0`, reads until the operator submits an empty line;
    /// otherwise reads exactly `expected_len` entries.
    fn strings_matching(
        &mut self,
        check: &dyn Fn(&str) -> bool,
        case_sensitive: bool,
        expected_len: usize,
    ) -> Result<Vec<String>, SolveError> {
        if case_sensitive {
            self.emit("(Inputs are case sensitive.)");
        }
        let mut responses = Vec::new();
        if expected_len > 0 {
            self.emit("(One per line.)");
            while responses.len() < expected_len {
                responses.push(self.checked_response(check, case_sensitive, false)?);
            }
        } else {
            self.emit("(One per line. End inputs by hitting ENTER without giving input.)");
            loop {
                let answer = self.checked_response(check, case_sensitive, true)?;
                if answer.is_empty() {
                    break;
                }
                responses.push(answer);
            }
        }
        Ok(responses)
    }

    /// Read one response drawn from `options`.
    fn string_from_set(
        &mut self,
        options: &[&str],
        case_sensitive: bool,
        show_options: bool,
    ) -> Result<String, SolveError> {
        if show_options {
            self.emit("Accepted options are:");
            self.emit_option_list(options, case_sensitive);
        }
        let normalized = normalize_options(options, case_sensitive);
        self.string_matching(&|s| normalized.iter().any(|opt| opt == s), case_sensitive)
    }

    /// Read a list of responses drawn from `options`; `expected_len`
    /// semantics as in [`Console::strings_matching`].
    fn strings_from_set(
        &mut self,
        options: &[&str],
        case_sensitive: bool,
        show_options: bool,
        expected_len: usize,
    ) -> Result<Vec<String>, SolveError> {
        if show_options {
            self.emit("Accepted options are:");
            self.emit_option_list(options, case_sensitive);
        }
        let normalized = normalize_options(options, case_sensitive);
        self.strings_matching(
            &|s| normalized.iter().any(|opt| opt == s),
            case_sensitive,
            expected_len,
        )
    }

    /// Read a positive integer (zero excluded).
    fn positive_int(&mut self) -> Result<u32, SolveError> {
        let answer =
            self.string_matching(&|s| s.parse::<u32>().is_ok_and(|n| n > 0), false)?;
        Ok(answer.parse().unwrap_or(0))
    }

    /// Print an option set in readable form: sorted, comma-separated,
    /// wrapped to [`MAX_LINE_WIDTH`], uppercased when case-insensitive.
    fn emit_option_list(&mut self, options: &[&str], case_sensitive: bool) {
        let mut display: Vec<String> = options
            .iter()
            .map(|opt| {
                if case_sensitive {
                    (*opt).to_string()
                } else {
                    opt.to_uppercase()
                }
            })
            .collect();
        display.sort();
        let mut line = String::new();
        for option in &display {
            if !line.is_empty() && line.len() + 2 + option.len() > MAX_LINE_WIDTH {
                self.emit(&line);
                line.clear();
            }
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(option);
        }
        if !line.is_empty() {
            self.emit(&line);
        }
    }

    /// Validation loop shared by the higher-level readers. Not usually
    /// called directly.
    fn checked_response(
        &mut self,
        check: &dyn Fn(&str) -> bool,
        case_sensitive: bool,
        allow_empty: bool,
    ) -> Result<String, SolveError> {
        let mut attempts = 0;
        loop {
            let mut response = self.read_response()?;
            if !case_sensitive {
                response = response.to_lowercase();
            }
            if check(&response) || (allow_empty && response.is_empty()) {
                return Ok(response);
            }
            self.emit(&format!(
                "Answer \"{response}\" is not a valid answer and will be ignored."
            ));
            self.emit("Please try again.");
            attempts += 1;
            if attempts >= MAX_RETRIES {
                return Err(SolveError::RetriesExhausted { attempts });
            }
        }
    }
}

fn normalize_options(options: &[&str], case_sensitive: bool) -> Vec<String> {
    options
        .iter()
        .map(|opt| {
            if case_sensitive {
                (*opt).to_string()
            } else {
                opt.to_lowercase()
            }
        })
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
