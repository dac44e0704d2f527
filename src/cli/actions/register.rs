use crate::{
    cli::{actions::report, globals::GlobalArgs},
    client::{ApiClient, ClientError},
    features::auth::{submit_register, AuthClient, RegisterForm},
    session::{guards::redirect_if_authenticated, KeyValueStore},
};
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub form: RegisterForm,
}

/// # Errors
/// Returns an error if the form is invalid or registration fails.
pub async fn handle(args: Args, globals: &GlobalArgs) -> Result<()> {
    let api = globals.api().map_err(report)?;
    let message = register(&args.form, api).await.map_err(report)?;
    println!("{message}");
    Ok(())
}

/// Creates the account, signs in and returns the confirmation line.
///
/// # Errors
/// Returns validation, transport or HTTP errors.
pub async fn register<S: KeyValueStore>(
    form: &RegisterForm,
    api: ApiClient<S>,
) -> Result<String, ClientError> {
    if let Some(notice) = redirect_if_authenticated(api.session()) {
        eprintln!("{notice}");
    }

    let client = AuthClient::new(api);
    submit_register(&client, form).await?;

    Ok(format!(
        "Account created. Signed in as {}.",
        client.api().session().current_display_name()
    ))
}
