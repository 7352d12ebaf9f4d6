//! Report-profile dialog state, validation, and failure classification.
//!
//! DESIGN
//! ======
//! The dialog component owns one `RwSignal<ReportDialogState>` and drives it
//! only through `reduce`. Validation and error classification are pure so the
//! submit path can be tested without a browser.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use crate::net::error::ApiError;
use crate::net::types::{ExistingReport, NewReport};

/// Maximum characters accepted in the details field.
pub const MAX_DETAILS_LEN: usize = 200;

/// Moderation status that does not count as an active report.
pub const REJECTED_STATUS: &str = "RECHAZADO";

/// Toast text after a successful submission.
pub const SUBMITTED_MESSAGE: &str =
    "Reporte enviado. Su reporte ha sido enviado correctamente y será revisado por nuestro equipo.";

const GENERIC_FAILURE: &str = "No se pudo enviar el reporte";

/// Why the renter is being reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportReason {
    FalseInformation,
    InappropriateBehavior,
    PropertyDamage,
    RuleViolation,
    /// Requires a written justification.
    Other,
}

impl ReportReason {
    pub const ALL: [Self; 5] = [
        Self::FalseInformation,
        Self::InappropriateBehavior,
        Self::PropertyDamage,
        Self::RuleViolation,
        Self::Other,
    ];

    /// `motivo` value sent to the backend.
    pub fn wire(self) -> &'static str {
        match self {
            Self::FalseInformation => "información_falsa",
            Self::InappropriateBehavior => "comportamiento_inapropiado",
            Self::PropertyDamage => "daños_propiedad",
            Self::RuleViolation => "incumplimiento_normas",
            Self::Other => "otro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FalseInformation => "Información falsa en el perfil",
            Self::InappropriateBehavior => "Comportamiento inapropiado",
            Self::PropertyDamage => "Daños a la propiedad",
            Self::RuleViolation => "Incumplimiento de normas",
            Self::Other => "Otro motivo",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.wire() == raw)
    }

    pub fn requires_details(self) -> bool {
        matches!(self, Self::Other)
    }
}

/// Truncate input to `MAX_DETAILS_LEN` characters.
pub fn clamp_details(text: &str) -> String {
    text.chars().take(MAX_DETAILS_LEN).collect()
}

/// True when any prior report is still pending or accepted.
pub fn has_active_report(reports: &[ExistingReport]) -> bool {
    reports.iter().any(|report| report.status != REJECTED_STATUS)
}

/// Client-side refusal to submit; the message is shown as a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReportValidationError {
    #[error("Ya has reportado a este usuario anteriormente")]
    AlreadyReported,
    #[error("Por favor, seleccione un motivo para el reporte")]
    MissingReason,
    #[error("La información adicional no puede exceder los 200 caracteres")]
    DetailsTooLong,
    #[error("Cuando selecciona 'Otro motivo', debe proporcionar información adicional")]
    DetailsRequired,
}

impl ReportValidationError {
    /// Whether the dialog closes after showing the notice.
    pub fn closes_dialog(self) -> bool {
        matches!(self, Self::AlreadyReported)
    }
}

/// Backend rejection of a submitted report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReportFailure {
    #[error("Has alcanzado el límite de reportes por día")]
    DailyLimit,
    #[error("Ya has reportado a este usuario anteriormente")]
    Duplicate,
    #[error("{0}")]
    Other(String),
}

/// Map a submit error onto the dialog's failure kinds.
///
/// The structured `code` wins; otherwise the message text is matched.
pub fn classify_failure(err: &ApiError) -> ReportFailure {
    let Some(body) = err.body() else {
        return ReportFailure::Other(GENERIC_FAILURE.to_owned());
    };
    match body.code.as_deref() {
        Some("daily_limit") => return ReportFailure::DailyLimit,
        Some("duplicate") => return ReportFailure::Duplicate,
        _ => {}
    }
    if body.error.contains("límite de reportes") {
        ReportFailure::DailyLimit
    } else if body.error.contains("reportado a este usuario") {
        ReportFailure::Duplicate
    } else if body.error.is_empty() {
        ReportFailure::Other(GENERIC_FAILURE.to_owned())
    } else {
        ReportFailure::Other(body.error.clone())
    }
}

/// Everything that can change the dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportAction {
    Opened,
    Closed,
    ReasonSelected(Option<ReportReason>),
    DetailsEdited(String),
    /// Result of the prior-report lookup.
    PriorReportsChecked(bool),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(ReportFailure),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportDialogState {
    pub open: bool,
    pub reason: Option<ReportReason>,
    pub details: String,
    pub submitting: bool,
    pub already_reported: bool,
    pub daily_limit_reached: bool,
}

impl ReportDialogState {
    /// Apply `action` and return the next state.
    #[must_use]
    pub fn reduce(mut self, action: ReportAction) -> Self {
        match action {
            ReportAction::Opened => {
                self.open = true;
                self.daily_limit_reached = false;
            }
            ReportAction::Closed => self.open = false,
            ReportAction::ReasonSelected(reason) => self.reason = reason,
            ReportAction::DetailsEdited(text) => self.details = clamp_details(&text),
            ReportAction::PriorReportsChecked(reported) => self.already_reported = reported,
            ReportAction::SubmitStarted => self.submitting = true,
            ReportAction::SubmitSucceeded => {
                self.submitting = false;
                self.reason = None;
                self.details.clear();
                self.open = false;
            }
            ReportAction::SubmitFailed(failure) => {
                self.submitting = false;
                match failure {
                    ReportFailure::DailyLimit => self.daily_limit_reached = true,
                    ReportFailure::Duplicate => self.already_reported = true,
                    ReportFailure::Other(_) => {}
                }
            }
        }
        self
    }

    /// Build the request body, or the first validation failure.
    ///
    /// # Errors
    ///
    /// Checks run in order: already reported, missing reason, details too
    /// long, blank details for `Other`.
    pub fn validate(&self, reported_id: i64) -> Result<NewReport, ReportValidationError> {
        if self.already_reported {
            return Err(ReportValidationError::AlreadyReported);
        }
        let reason = self.reason.ok_or(ReportValidationError::MissingReason)?;
        if self.details.chars().count() > MAX_DETAILS_LEN {
            return Err(ReportValidationError::DetailsTooLong);
        }
        if reason.requires_details() && self.details.trim().is_empty() {
            return Err(ReportValidationError::DetailsRequired);
        }
        Ok(NewReport {
            reported_id,
            reason: reason.wire().to_owned(),
            details: self.details.clone(),
        })
    }

    /// Reason select and details textarea are disabled.
    pub fn inputs_locked(&self) -> bool {
        self.already_reported || self.daily_limit_reached
    }

    pub fn submit_blocked(&self) -> bool {
        self.submitting || self.inputs_locked()
    }

    pub fn description(&self) -> &'static str {
        if self.already_reported {
            "Ya has reportado a este usuario anteriormente. No puedes enviar múltiples reportes al mismo usuario."
        } else if self.daily_limit_reached {
            "Has alcanzado el límite de reportes por día (2 reportes/24 horas)."
        } else {
            "Por favor, indique el motivo por el cual está reportando a este arrendatario. Los reportes son anónimos y serán revisados por nuestro equipo."
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Enviando..."
        } else if self.already_reported {
            "No se permiten múltiples reportes"
        } else if self.daily_limit_reached {
            "Límite de reportes alcanzado"
        } else {
            "Enviar reporte"
        }
    }

    /// `(n/200 caracteres)`.
    pub fn details_counter(&self) -> String {
        format!("({}/{MAX_DETAILS_LEN} caracteres)", self.details.chars().count())
    }
}
