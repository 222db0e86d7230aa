// Per-route relay use cases: presence checks, the remote call, and response mapping.

use serde_json::Value;
use tracing::{error, warn};

use crate::domain::{
    ConfirmationRequest, ConfirmationResult, ErrorKind, GuestDirectory, RemoteError,
    ValidationResult,
};
use crate::use_cases::mapping::{self, RemoteSubmission};
use crate::use_cases::share::ShareLinks;

pub const MIN_SEARCH_NAME_CHARS: usize = 2;
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Confirmación guardada y QR generado";
const SEARCH_NOT_AN_OBJECT: &str = "Respuesta inválida del servidor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ValidateCode,
    CheckConfirmation,
    Search,
    Submit,
}

impl Route {
    // Client-facing message per route and failure kind. Remote detail never leaks through here.
    pub fn message(self, kind: ErrorKind) -> &'static str {
        match (self, kind) {
            (Route::ValidateCode, ErrorKind::Validation) => "No se proporcionó un código.",
            (Route::ValidateCode, ErrorKind::Parse) => "Respuesta inválida del servidor.",
            (Route::ValidateCode, _) => "Error interno al validar el código",

            (Route::CheckConfirmation, ErrorKind::Validation) => "Falta el ID del invitado",
            (Route::CheckConfirmation, ErrorKind::Parse) => "Error parseando respuesta",
            (Route::CheckConfirmation, _) => "Error al verificar confirmación",

            (Route::Search, ErrorKind::Validation) => "Nombre debe tener al menos 2 caracteres",
            (Route::Search, ErrorKind::Parse) => "Error en el formato de respuesta del servidor",
            (Route::Search, ErrorKind::NotFound) => {
                "No se puede conectar con el servicio de invitados"
            }
            (Route::Search, ErrorKind::Timeout) => "Timeout - el servidor tardó demasiado",
            (Route::Search, ErrorKind::Transport) => "Error interno del servidor",

            (Route::Submit, ErrorKind::Validation) => {
                "Faltan datos requeridos: id, name, attendance"
            }
            (Route::Submit, ErrorKind::Parse) => "Error en el formato de respuesta del servidor",
            (Route::Submit, ErrorKind::NotFound) => {
                "No se puede conectar con el servicio de invitados"
            }
            (Route::Submit, ErrorKind::Timeout) => "Timeout - la confirmación tardó demasiado",
            (Route::Submit, ErrorKind::Transport) => "Error interno del servidor",
        }
    }

    pub fn fail(self, kind: ErrorKind) -> RelayError {
        RelayError {
            kind,
            message: self.message(kind),
        }
    }

    fn remote_failure(self, err: RemoteError) -> RelayError {
        error!(route = ?self, kind = %err.kind, detail = %err.detail, "remote call failed");
        self.fail(err.kind)
    }
}

// Classified failure plus the message safe to show the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

// Raw submit fields as the client sent them; all optional until checked.
#[derive(Debug, Clone, Default)]
pub struct SubmitInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub attendance: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Confirmed(ConfirmationResult),
    Rejected(Value),
}

pub async fn validate_code(
    directory: &dyn GuestDirectory,
    code: Option<&str>,
) -> Result<ValidationResult, RelayError> {
    let route = Route::ValidateCode;
    let code = required(code).ok_or_else(|| route.fail(ErrorKind::Validation))?;

    let remote = directory
        .validate_code(code)
        .await
        .map_err(|err| route.remote_failure(err))?;

    mapping::map_validation(&remote).map_err(|kind| {
        warn!("validation response was not a JSON object");
        route.fail(kind)
    })
}

pub async fn check_confirmation(
    directory: &dyn GuestDirectory,
    guest_id: Option<&str>,
) -> Result<Value, RelayError> {
    let route = Route::CheckConfirmation;
    let guest_id = required(guest_id).ok_or_else(|| route.fail(ErrorKind::Validation))?;

    let remote = directory
        .check_confirmation(guest_id)
        .await
        .map_err(|err| route.remote_failure(err))?;

    Ok(mapping::map_confirmation_check(remote))
}

pub async fn search_guests(
    directory: &dyn GuestDirectory,
    name: Option<&str>,
) -> Result<Value, RelayError> {
    let route = Route::Search;
    let name = required(name)
        .filter(|name| name.chars().count() >= MIN_SEARCH_NAME_CHARS)
        .ok_or_else(|| route.fail(ErrorKind::Validation))?;

    let remote = directory
        .search(name)
        .await
        .map_err(|err| route.remote_failure(err))?;

    mapping::map_search(remote).map_err(|kind| {
        warn!("search response was not a JSON object");
        RelayError {
            kind,
            message: SEARCH_NOT_AN_OBJECT,
        }
    })
}

pub async fn submit_confirmation(
    directory: &dyn GuestDirectory,
    links: &ShareLinks,
    input: SubmitInput,
) -> Result<SubmitOutcome, RelayError> {
    let route = Route::Submit;
    let request = confirmation_request(input).ok_or_else(|| route.fail(ErrorKind::Validation))?;

    let remote = directory
        .submit(&request)
        .await
        .map_err(|err| route.remote_failure(err))?;

    match mapping::map_submission(remote).map_err(|kind| route.fail(kind))? {
        RemoteSubmission::Confirmed {
            confirmation_number,
        } => Ok(SubmitOutcome::Confirmed(ConfirmationResult {
            success: true,
            message: SUBMIT_SUCCESS_MESSAGE.to_string(),
            whatsapp_url: links.whatsapp_url(&request.phone, &request.name, &confirmation_number),
            qr_url: links.qr_url(&confirmation_number),
            confirmation_number,
        })),
        RemoteSubmission::Rejected(remote) => {
            warn!(guest_id = %request.id, "remote rejected confirmation");
            Ok(SubmitOutcome::Rejected(remote))
        }
    }
}

// Normalize the submit fields; `None` when a required one is missing.
fn confirmation_request(input: SubmitInput) -> Option<ConfirmationRequest> {
    let id = required(input.id.as_deref())?;
    let name = required(input.name.as_deref())?;
    let attendance = normalize_attendance(required(input.attendance.as_deref())?);
    let phone = input.phone.as_deref().map(str::trim).unwrap_or_default();

    Some(ConfirmationRequest {
        id: id.to_string(),
        name: name.to_string(),
        attendance,
        phone: phone.to_string(),
    })
}

// Any answer is forwarded; the remote owns its meaning.
fn normalize_attendance(attendance: &str) -> String {
    if attendance.eq_ignore_ascii_case("yes") || attendance.eq_ignore_ascii_case("no") {
        attendance.to_ascii_lowercase()
    } else {
        attendance.to_string()
    }
}

fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
