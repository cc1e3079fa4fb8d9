use crate::{FormError, Result};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Sexo {
    #[default]
    Unset,
    M,
    F,
}

impl Sexo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::M => "M",
            Self::F => "F",
        }
    }

    fn parse_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(Self::Unset),
            "M" => Ok(Self::M),
            "F" => Ok(Self::F),
            _ => Err(FormError::InvalidOption {
                field: FormField::Sexo.as_str(),
                value: s.to_string(),
                expected: "M, F".to_string(),
            }),
        }
    }
}

impl std::str::FromStr for Sexo {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Sexo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Categoria {
    Elite,
    #[default]
    Aficionado,
    Juvenil,
}

impl Categoria {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elite => "Elite",
            Self::Aficionado => "Aficionado",
            Self::Juvenil => "Juvenil",
        }
    }

    pub fn all() -> &'static [Categoria] {
        &[Self::Elite, Self::Aficionado, Self::Juvenil]
    }

    fn parse_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FormError::InvalidOption {
                field: FormField::Categoria.as_str(),
                value: s.to_string(),
                expected: Self::all()
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl std::str::FromStr for Categoria {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Categoria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed set of input names the registration form exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Nombre,
    ApellidoPaterno,
    ApellidoMaterno,
    Email,
    Sexo,
    Categoria,
    PagoRealizado,
    InePath,
    ComprobantePagoPath,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nombre => "nombre",
            Self::ApellidoPaterno => "apellido_paterno",
            Self::ApellidoMaterno => "apellido_materno",
            Self::Email => "email",
            Self::Sexo => "sexo",
            Self::Categoria => "categoria",
            Self::PagoRealizado => "pago_realizado",
            Self::InePath => "ine_path",
            Self::ComprobantePagoPath => "comprobante_pago_path",
        }
    }

    pub fn all() -> &'static [FormField] {
        &[
            Self::Nombre,
            Self::ApellidoPaterno,
            Self::ApellidoMaterno,
            Self::Email,
            Self::Sexo,
            Self::Categoria,
            Self::PagoRealizado,
            Self::InePath,
            Self::ComprobantePagoPath,
        ]
    }
}

impl std::str::FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single change event coming from one input control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChange {
    /// Text inputs and selects report their current value.
    Value(String),
    /// Checkboxes report their checked state.
    Checked(bool),
}

impl InputChange {
    fn kind(&self) -> &'static str {
        match self {
            Self::Value(_) => "value",
            Self::Checked(_) => "checked",
        }
    }
}

/// Applicant data captured by the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ParticipantForm {
    #[validate(length(min = 1, message = "nombre is required"))]
    pub nombre: String,

    #[validate(length(min = 1, message = "apellido_paterno is required"))]
    pub apellido_paterno: String,

    pub apellido_materno: String,

    #[validate(length(min = 1, message = "email is required"))]
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(custom(function = "validate_sexo"))]
    pub sexo: Sexo,

    pub categoria: Categoria,

    pub pago_realizado: bool,

    pub ine_path: String,

    pub comprobante_pago_path: String,
}

impl Default for ParticipantForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            apellido_paterno: String::new(),
            apellido_materno: String::new(),
            email: String::new(),
            sexo: Sexo::Unset,
            categoria: Categoria::Aficionado,
            pago_realizado: true,
            ine_path: String::new(),
            comprobante_pago_path: String::new(),
        }
    }
}

impl ParticipantForm {
    /// Checks the same constraints a browser enforces before letting the form submit.
    pub fn ensure_submittable(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }

    /// Applies one input event to the field it names. Nothing changes when
    /// the event is rejected.
    pub fn apply_change(&mut self, field: FormField, change: InputChange) -> Result<()> {
        let mismatch = |change: &InputChange| FormError::InputKindMismatch {
            field: field.as_str(),
            kind: change.kind(),
        };

        match change {
            InputChange::Checked(checked) => match field {
                FormField::PagoRealizado => self.pago_realizado = checked,
                _ => return Err(mismatch(&InputChange::Checked(checked))),
            },
            InputChange::Value(value) => match field {
                FormField::Nombre => self.nombre = value,
                FormField::ApellidoPaterno => self.apellido_paterno = value,
                FormField::ApellidoMaterno => self.apellido_materno = value,
                FormField::Email => self.email = value,
                FormField::Sexo => self.sexo = value.parse()?,
                FormField::Categoria => self.categoria = value.parse()?,
                FormField::InePath => self.ine_path = value,
                FormField::ComprobantePagoPath => self.comprobante_pago_path = value,
                FormField::PagoRealizado => return Err(mismatch(&InputChange::Value(value))),
            },
        }

        Ok(())
    }
}

fn validate_sexo(sexo: &Sexo) -> std::result::Result<(), validator::ValidationError> {
    match sexo {
        Sexo::M | Sexo::F => Ok(()),
        Sexo::Unset => Err(validator::ValidationError::new("sexo_required")),
    }
}
