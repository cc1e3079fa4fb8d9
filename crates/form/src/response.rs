use crate::models::RegistrationReceipt;
use crate::{FormError, Result};
use serde_json::Value;
use tracing::info;

pub const GENERIC_SERVER_ERROR: &str = "Ocurrió un error en el servidor";
pub const GENERIC_SUCCESS: &str = "¡Registro exitoso! Revisa tu correo para ver los detalles.";

/// Parses a registration response and returns the receipt on success.
///
/// The body is parsed as JSON whatever the status. A failed status becomes
/// [`FormError::ServerRejected`] carrying the JSON text of the body's `error`
/// field, whatever its value, or [`GENERIC_SERVER_ERROR`] when the key is missing.
pub fn parse_response(ok: bool, body: &str) -> Result<RegistrationReceipt> {
    let parsed: Value = serde_json::from_str(body)?;

    info!("Server response: {}", parsed);

    if !ok {
        return Err(FormError::ServerRejected(server_error_message(&parsed)));
    }

    Ok(RegistrationReceipt::from_body(&parsed))
}

/// Same as [`parse_response`], reduced to the message shown to the user.
pub fn interpret_response(ok: bool, body: &str) -> Result<String> {
    parse_response(ok, body).map(|receipt| success_message(&receipt))
}

pub fn success_message(receipt: &RegistrationReceipt) -> String {
    match &receipt.participant {
        Some(participant) => format!(
            "¡Registro Exitoso!\n\nParticipante: {}\nCódigo de Registro: {}",
            participant.full_name(),
            participant.participant_code
        ),
        None => GENERIC_SUCCESS.to_string(),
    }
}

fn server_error_message(body: &Value) -> String {
    match body.get("error") {
        Some(error) => error.to_string(),
        None => GENERIC_SERVER_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_participant() {
        let body = r#"{"participant":{"nombre":"Ana","apellido_paterno":"Lopez","participant_code":"C123"}}"#;
        assert_eq!(
            interpret_response(true, body).unwrap(),
            "¡Registro Exitoso!\n\nParticipante: Ana Lopez\nCódigo de Registro: C123"
        );
    }

    #[test]
    fn test_success_with_maternal_surname() {
        let body = r#"{"participant":{"nombre":"Ana","apellido_paterno":"Lopez","apellido_materno":"Ruiz","participant_code":"C123"}}"#;
        let message = interpret_response(true, body).unwrap();
        assert!(message.contains("Participante: Ana Lopez Ruiz\n"));
    }

    #[test]
    fn test_success_without_participant_falls_back() {
        let body = r#"{"message":"Participante registrado exitosamente."}"#;
        assert_eq!(interpret_response(true, body).unwrap(), GENERIC_SUCCESS);
    }

    #[test]
    fn test_failure_quotes_string_error() {
        let err = interpret_response(false, r#"{"error":"duplicate email"}"#).unwrap_err();
        assert!(matches!(&err, FormError::ServerRejected(_)));
        assert_eq!(err.to_string(), "\"duplicate email\"");
    }

    #[test]
    fn test_failure_stringifies_error_list() {
        let body = r#"{"error":["Error semántico: el valor de 'sexo' debe ser 'M' o 'F'."]}"#;
        let err = interpret_response(false, body).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"["Error semántico: el valor de 'sexo' debe ser 'M' o 'F'."]"#
        );
    }

    #[test]
    fn test_failure_without_error_field_uses_generic_message() {
        let err = interpret_response(false, "{}").unwrap_err();
        assert_eq!(err.to_string(), GENERIC_SERVER_ERROR);

        let err = interpret_response(false, "[]").unwrap_err();
        assert_eq!(err.to_string(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn test_failure_stringifies_falsy_error_values() {
        for (body, expected) in [
            (r#"{"error":null}"#, "null"),
            (r#"{"error":""}"#, "\"\""),
            (r#"{"error":false}"#, "false"),
            (r#"{"error":0}"#, "0"),
        ] {
            let err = interpret_response(false, body).unwrap_err();
            assert_eq!(err.to_string(), expected, "body: {}", body);
        }
    }

    #[test]
    fn test_success_with_loosely_typed_participant() {
        let body = r#"{"participant":{"nombre":"Ana","apellido_paterno":"Lopez","participant_code":7}}"#;
        assert_eq!(
            interpret_response(true, body).unwrap(),
            "¡Registro Exitoso!\n\nParticipante: Ana Lopez\nCódigo de Registro: 7"
        );

        let body = r#"{"participant":{"nombre":null,"apellido_paterno":"Lopez","apellido_materno":null,"id":"7","participant_code":"C9"}}"#;
        let message = interpret_response(true, body).unwrap();
        assert!(message.starts_with("¡Registro Exitoso!"));
        assert!(message.ends_with("Código de Registro: C9"));
    }

    #[test]
    fn test_body_is_parsed_even_on_failure() {
        let err = interpret_response(false, "<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FormError::MalformedResponse(_)));

        let err = interpret_response(true, "").unwrap_err();
        assert!(matches!(err, FormError::MalformedResponse(_)));
    }
}
