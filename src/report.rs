use serde::Serialize;

/// Outcome of a single connectivity probe, printed as one JSON line on stdout.
///
/// Exactly one of `content` and `error` is populated, matching the value of
/// `success`. The report is created right before printing and never stored.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectionReport {
    /// Creates a success report carrying the model's reply text.
    pub fn success(content: impl Into<String>) -> Self {
        ConnectionReport {
            success: true,
            content: Some(content.into()),
            error: None,
        }
    }

    /// Creates a failure report carrying the error's display text.
    pub fn failure(error: impl ToString) -> Self {
        ConnectionReport {
            success: false,
            content: None,
            error: Some(error.to_string()),
        }
    }

    /// Writes the report to stdout as a single JSON line.
    ///
    /// Non-ASCII text is emitted as-is; serde_json does not escape it.
    pub fn print(&self) {
        match serde_json::to_string(self) {
            Ok(line) => println!("{}", line),
            Err(e) => println!(r#"{{"success":false,"error":"{}"}}"#, e),
        }
    }

    /// Process exit status matching this report: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }
}
