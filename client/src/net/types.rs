//! Wire DTOs for the rental backend REST API.
//!
//! DESIGN
//! ======
//! Field names on the wire are the backend's (Spanish) column names; the Rust
//! side uses English names through serde renames. Timestamps stay strings here
//! and are normalized once by `state::comments` at load time.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Current user as returned by `GET /api/perfil`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Numeric user id; absent when the session could not be resolved.
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub id: Option<i64>,
    /// Role names (e.g. `"HOST"`, `"RENTER"`).
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A renter's rating/comment on one of the host's vehicles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(rename = "id_carro", deserialize_with = "deserialize_i64_from_number")]
    pub vehicle_id: i64,
    #[serde(rename = "id_usuario", deserialize_with = "deserialize_i64_from_number")]
    pub author_id: i64,
    /// Free-text body; the backend sends `null` for rating-only entries.
    #[serde(rename = "comentario", default)]
    pub body: Option<String>,
    /// Star rating, 0–5 in half steps.
    #[serde(rename = "calificacion")]
    pub rating: f64,
    /// Creation timestamp as sent by the backend (ISO 8601).
    #[serde(rename = "fecha_creacion")]
    pub created_at: String,
    /// Last-update timestamp as sent by the backend (ISO 8601).
    #[serde(rename = "fecha_actualizacion")]
    pub updated_at: String,
    #[serde(rename = "usuario")]
    pub author: AuthorRecord,
    /// Vehicle summary; `null` once the vehicle has been deleted.
    #[serde(rename = "carro", default)]
    pub vehicle: Option<VehicleRecord>,
}

/// Embedded author summary on a comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorRecord {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "foto", default)]
    pub photo: Option<String>,
}

/// Embedded vehicle summary on a comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(rename = "marca", default)]
    pub make: String,
    #[serde(rename = "modelo", default)]
    pub model: String,
    #[serde(rename = "anio", deserialize_with = "deserialize_i32_from_number")]
    pub year: i32,
    /// Ordered gallery; the first entry is the card thumbnail.
    #[serde(rename = "imagenes", default)]
    pub images: Vec<VehicleImage>,
    /// Owning host's role-assignment id.
    #[serde(rename = "id_usuario_rol", deserialize_with = "deserialize_i64_from_number")]
    pub host_id: i64,
}

/// Hosted image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleImage {
    /// Image URL.
    pub data: String,
    pub public_id: String,
}

/// A report previously filed by the current user against a renter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingReport {
    /// Moderation status (`"PENDIENTE"`, `"APROBADO"`, `"RECHAZADO"`, ...).
    #[serde(rename = "estado")]
    pub status: String,
}

/// Body of `POST /api/reportes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReport {
    #[serde(rename = "id_reportado")]
    pub reported_id: i64,
    /// Reason wire value (see `state::report::ReportReason`).
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "informacion_adicional")]
    pub details: String,
}

/// Error body returned by the backend on rejected writes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message.
    #[serde(default)]
    pub error: String,
    /// Machine-readable classification, when the backend provides one.
    #[serde(default)]
    pub code: Option<String>,
}

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => i64_from_value(&value).map(Some).map_err(D::Error::custom),
    }
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    i32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for i32")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    i64_from_value(&value).map_err(D::Error::custom)
}

fn i64_from_value(value: &serde_json::Value) -> Result<i64, &'static str> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number")
        }
        serde_json::Value::String(text) => text.trim().parse::<i64>().map_err(|_| "expected numeric string"),
        _ => Err("expected number"),
    }
}
