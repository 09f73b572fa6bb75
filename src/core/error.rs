use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,

    ValidationMissingArgument,
    ValidationInvalidArgument,
    ValidationInvalidJson,
    ValidationInvalidTemplate,

    ManualNotFound,
    PresetNotFound,
    TemplateNotFound,
    SectionNotFound,
    GroupNotFound,

    EditorFailed,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",

            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",
            ErrorCode::ValidationInvalidTemplate => "validation.invalid_template",

            ErrorCode::ManualNotFound => "manual.not_found",
            ErrorCode::PresetNotFound => "preset.not_found",
            ErrorCode::TemplateNotFound => "template.not_found",
            ErrorCode::SectionNotFound => "section.not_found",
            ErrorCode::GroupNotFound => "group.not_found",

            ErrorCode::EditorFailed => "editor.failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::ManualNotFound
                | ErrorCode::PresetNotFound
                | ErrorCode::TemplateNotFound
                | ErrorCode::SectionNotFound
                | ErrorCode::GroupNotFound
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidTemplateDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundDetails {
    pub id: String,
    pub available: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualNotFoundDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorFailedDetails {
    pub editor: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            to_details(MissingArgumentDetails { args }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
        tried: Option<Vec<String>>,
    ) -> Self {
        let problem = problem.into();
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
            id,
            tried,
        });

        Self::new(ErrorCode::ValidationInvalidArgument, problem, details)
    }

    pub fn validation_invalid_json(err: serde_json::Error, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
        });

        Self::new(
            ErrorCode::ValidationInvalidJson,
            format!("Invalid JSON: {}", err),
            details,
        )
    }

    /// A template definition broke one of the structural rules.
    ///
    /// `field` names the offending field (`sections[2].group`), `index` is the
    /// position of the offending section definition when there is one.
    pub fn validation_invalid_template(
        field: impl Into<String>,
        problem: impl Into<String>,
        index: Option<usize>,
    ) -> Self {
        let problem = problem.into();
        let details = to_details(InvalidTemplateDetails {
            field: field.into(),
            problem: problem.clone(),
            index,
            source: None,
        });

        Self::new(
            ErrorCode::ValidationInvalidTemplate,
            format!("invalid template: {}", problem),
            details,
        )
    }

    pub fn manual_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::ManualNotFound,
            format!("No .pm/ directory found in {}", path),
            to_details(ManualNotFoundDetails { path }),
        )
        .with_hint("Run 'pm init' to create one")
    }

    pub fn preset_not_found(name: impl Into<String>, available: Vec<String>) -> Self {
        let name = name.into();
        let message = format!(
            "unknown preset \"{}\" (available: {})",
            name,
            available.join(", ")
        );
        Self::not_found(ErrorCode::PresetNotFound, message, name, available)
            .with_hint("Run 'pm init --list-templates' to see available presets")
    }

    pub fn template_not_found(identifier: impl Into<String>, available: Vec<String>) -> Self {
        let identifier = identifier.into();
        let message = format!(
            "\"{}\" is not a known preset or valid file path (available presets: {})",
            identifier,
            available.join(", ")
        );
        Self::not_found(ErrorCode::TemplateNotFound, message, identifier, available)
            .with_hint("Run 'pm init --list-templates' to see available presets")
    }

    pub fn section_not_found(name: impl Into<String>, available: Vec<String>) -> Self {
        let name = name.into();
        let message = if available.is_empty() {
            format!("section \"{}\" not found (no sections exist yet)", name)
        } else {
            format!(
                "section \"{}\" not found (available: {})",
                name,
                available.join(", ")
            )
        };
        Self::not_found(ErrorCode::SectionNotFound, message, name, available)
            .with_hint("Run 'pm list' to see available sections")
    }

    pub fn group_not_found(name: impl Into<String>, available: Vec<String>) -> Self {
        let name = name.into();
        let message = if available.is_empty() {
            format!("group \"{}\" not found (no groups exist yet)", name)
        } else {
            format!(
                "group \"{}\" not found (available: {})",
                name,
                available.join(", ")
            )
        };
        Self::not_found(ErrorCode::GroupNotFound, message, name, available)
    }

    fn not_found(
        code: ErrorCode,
        message: String,
        id: String,
        available: Vec<String>,
    ) -> Self {
        Self::new(code, message, to_details(NotFoundDetails { id, available }))
    }

    pub fn editor_failed(
        editor: impl Into<String>,
        path: impl Into<String>,
        exit_code: Option<i32>,
        error: Option<String>,
    ) -> Self {
        let editor = editor.into();
        let message = match (&error, exit_code) {
            (Some(err), _) => format!("Failed to launch editor '{}': {}", editor, err),
            (None, Some(code)) => format!("Editor '{}' exited with status {}", editor, code),
            (None, None) => format!("Editor '{}' was terminated by a signal", editor),
        };

        Self::new(
            ErrorCode::EditorFailed,
            message,
            to_details(EditorFailedDetails {
                editor,
                path: path.into(),
                exit_code,
                error,
            }),
        )
        .with_hint("Set $EDITOR or defaults.editor in ~/.config/pm/config.json")
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let path = path.into();
        let message = format!("Invalid JSON in configuration {}: {}", path, err);
        Self::new(
            ErrorCode::ConfigInvalidJson,
            message,
            to_details(ConfigInvalidJsonDetails {
                path,
                error: err.to_string(),
            }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let error = error.into();
        let message = match &context {
            Some(ctx) => format!("{}: {}", ctx, error),
            None => error.clone(),
        };

        Self::new(
            ErrorCode::InternalIoError,
            message,
            to_details(InternalIoErrorDetails { error, context }),
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            to_details(InternalJsonErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    /// Record where an invalid template came from (file path).
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        if let Value::Object(map) = &mut self.details {
            map.insert("source".to_string(), Value::String(source.into()));
        }
        self
    }

    /// Alternatives listed in a not-found error's details.
    pub fn available(&self) -> Vec<String> {
        self.details
            .get("available")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
