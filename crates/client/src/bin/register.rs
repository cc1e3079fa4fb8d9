use anyhow::Context;
use clap::{Parser, Subcommand};
use client::config::DEFAULT_BASE_URL;
use client::{ClientConfig, RegistrationClient, RegistrationForm};
use form::{FormField, InputChange};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "register")]
#[command(about = "Registro de Ciclistas: cyclist registration client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Registration server base URL
    #[arg(long, global = true, env = "REGISTRATION_URL", default_value = DEFAULT_BASE_URL)]
    server: String,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Send the registration and print the server's answer
    Submit {
        #[command(flatten)]
        participant: ParticipantArgs,
    },
    /// Print the payload that would be sent, without sending it
    Preview {
        #[command(flatten)]
        participant: ParticipantArgs,
    },
}

#[derive(clap::Args)]
struct ParticipantArgs {
    #[arg(long)]
    nombre: Option<String>,

    #[arg(long)]
    apellido_paterno: Option<String>,

    #[arg(long)]
    apellido_materno: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// M or F
    #[arg(long)]
    sexo: Option<String>,

    /// Elite, Aficionado or Juvenil
    #[arg(long)]
    categoria: Option<String>,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pago_realizado: bool,

    /// Simulated path of the INE document
    #[arg(long)]
    ine_path: Option<String>,

    /// Simulated path of the payment receipt
    #[arg(long)]
    comprobante_pago_path: Option<String>,
}

impl ParticipantArgs {
    /// Replays the flags as input events, the way typing into the form would.
    fn fill(self, form: &mut RegistrationForm) -> client::Result<()> {
        let values = [
            (FormField::Nombre, self.nombre),
            (FormField::ApellidoPaterno, self.apellido_paterno),
            (FormField::ApellidoMaterno, self.apellido_materno),
            (FormField::Email, self.email),
            (FormField::Sexo, self.sexo),
            (FormField::Categoria, self.categoria),
            (FormField::InePath, self.ine_path),
            (FormField::ComprobantePagoPath, self.comprobante_pago_path),
        ];

        for (field, value) in values {
            if let Some(value) = value {
                form.handle_input_change(field.as_str(), InputChange::Value(value))?;
            }
        }

        form.handle_input_change(
            FormField::PagoRealizado.as_str(),
            InputChange::Checked(self.pago_realizado),
        )
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "register={},client={},form={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Preview { participant } => {
            let mut form = RegistrationForm::new();
            participant.fill(&mut form)?;
            print!("{}", form.transform_to_dsl());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Submit { participant } => {
            let config = ClientConfig::new(cli.server)
                .context("Cannot load registration server configuration")?;

            handle_submit(participant, &config).await
        }
    }
}

async fn handle_submit(
    participant: ParticipantArgs,
    config: &ClientConfig,
) -> anyhow::Result<ExitCode> {
    let mut form = RegistrationForm::new();
    participant.fill(&mut form)?;

    let transport = RegistrationClient::new(config)?;
    let state = form
        .submit(&transport)
        .await
        .context("The form is incomplete")?;

    if let Some(message) = &state.server_message {
        println!("{}", message);
    }

    if let Some(token) = form.receipt().and_then(|r| r.access_token.as_deref()) {
        println!("Token de acceso: {}", token);
    }

    if state.is_error {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_config(args: &[&str]) -> ClientConfig {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        ClientConfig::new(cli.server).unwrap()
    }

    // Environment handling lives in one test so no other test observes the variable.
    #[test]
    fn test_server_url_resolution() {
        unsafe { std::env::remove_var("REGISTRATION_URL") };
        assert_eq!(
            server_config(&["register", "preview"]).register_url(),
            "http://localhost:8080/register"
        );

        unsafe { std::env::set_var("REGISTRATION_URL", "https://registro.example.org/") };
        assert_eq!(
            server_config(&["register", "submit"]).register_url(),
            "https://registro.example.org/register"
        );
        assert_eq!(
            server_config(&["register", "submit", "--server", "http://10.0.0.5:9000"])
                .register_url(),
            "http://10.0.0.5:9000/register"
        );
        unsafe { std::env::remove_var("REGISTRATION_URL") };
    }

    #[test]
    fn test_fields_are_replayed_as_input_events() {
        let cli = Cli::try_parse_from([
            "register",
            "preview",
            "--nombre",
            "Ana",
            "--apellido-paterno",
            "Lopez",
            "--email",
            "a@b.com",
            "--sexo",
            "F",
            "--categoria",
            "Elite",
            "--pago-realizado",
            "false",
        ])
        .unwrap();
        let Commands::Preview { participant } = cli.command else {
            panic!("expected preview");
        };

        let mut form = RegistrationForm::new();
        participant.fill(&mut form).unwrap();

        assert_eq!(
            form.transform_to_dsl(),
            "nombre: \"Ana\";\napellido_paterno: \"Lopez\";\nemail: \"a@b.com\";\n\
             sexo: \"F\";\ncategoria: \"Elite\";\npago_realizado: false;\n"
        );
    }
}
