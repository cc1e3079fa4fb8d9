use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Registrant record as confirmed by the registration server.
///
/// Every field tolerates a missing key, `null` or an unexpected JSON type, so
/// any `participant` object yields a record to show.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Participant {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_text")]
    pub participant_code: String,
    #[serde(deserialize_with = "lenient_text")]
    pub nombre: String,
    #[serde(deserialize_with = "lenient_text")]
    pub apellido_paterno: String,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub apellido_materno: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(deserialize_with = "lenient_text")]
    pub sexo: String,
    #[serde(deserialize_with = "lenient_text")]
    pub categoria: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub pago_realizado: bool,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub ine_path: Option<String>,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub comprobante_pago_path: Option<String>,
}

// Strings are taken as they are, other scalars as their JSON text, null as empty.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_optional_text(deserializer)?.unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

impl Participant {
    /// Given name and paternal surname, plus the maternal surname when present.
    pub fn full_name(&self) -> String {
        let mut parts = vec![self.nombre.as_str(), self.apellido_paterno.as_str()];
        if let Some(materno) = self.apellido_materno.as_deref().filter(|m| !m.is_empty()) {
            parts.push(materno);
        }
        parts.join(" ")
    }
}

/// Everything a successful registration response may carry.
///
/// Built leniently from the parsed body: a top-level field with an unexpected
/// shape is treated as absent instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationReceipt {
    pub message: Option<String>,
    pub participant: Option<Participant>,
    pub access_token: Option<String>,
    pub token_warning: Option<String>,
    pub email_warning: Option<String>,
}

impl RegistrationReceipt {
    pub fn from_body(body: &Value) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);

        let participant = body
            .get("participant")
            .filter(|p| p.is_object())
            .and_then(|p| serde_json::from_value::<Participant>(p.clone()).ok());

        Self {
            message: text("message"),
            participant,
            access_token: text("access_token"),
            token_warning: text("token_warning"),
            email_warning: text("email_warning"),
        }
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.token_warning
            .as_deref()
            .into_iter()
            .chain(self.email_warning.as_deref())
    }
}
