//! Line-oriented text payload understood by the registration server.
//!
//! Each statement is `key: value;` on its own line. Text values are wrapped in
//! double quotes and written verbatim: embedded quotes are not escaped, which
//! matches what the server's lexer accepts today.

use crate::models::{FormField, ParticipantForm};
use std::fmt::Write;

pub fn transform_to_dsl(form: &ParticipantForm) -> String {
    let mut dsl = String::new();

    push_text(&mut dsl, FormField::Nombre, &form.nombre);
    push_text(&mut dsl, FormField::ApellidoPaterno, &form.apellido_paterno);
    push_optional_text(&mut dsl, FormField::ApellidoMaterno, &form.apellido_materno);
    push_text(&mut dsl, FormField::Email, &form.email);
    push_text(&mut dsl, FormField::Sexo, form.sexo.as_str());
    push_text(&mut dsl, FormField::Categoria, form.categoria.as_str());
    push_bool(&mut dsl, FormField::PagoRealizado, form.pago_realizado);
    push_optional_text(&mut dsl, FormField::InePath, &form.ine_path);
    push_optional_text(
        &mut dsl,
        FormField::ComprobantePagoPath,
        &form.comprobante_pago_path,
    );

    dsl
}

// Writing into a String cannot fail.
fn push_text(dsl: &mut String, field: FormField, value: &str) {
    let _ = writeln!(dsl, "{}: \"{}\";", field, value);
}

fn push_optional_text(dsl: &mut String, field: FormField, value: &str) {
    if !value.is_empty() {
        push_text(dsl, field, value);
    }
}

fn push_bool(dsl: &mut String, field: FormField, value: bool) {
    let _ = writeln!(dsl, "{}: {};", field, value);
}
