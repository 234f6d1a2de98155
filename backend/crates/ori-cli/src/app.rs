//! Construction of the account services from [`Config`] and command dispatch.

use crate::{CliResult, Commands, SessionFile};

use ori_auth::{AuthGateway, IdpCredential, IdentityToolkitProvider, SessionStore, StaticIdpFlow};
use ori_config::{Config, ConfigError};
use ori_core::SignInForm;
use ori_db::{FirestoreDocumentStore, IdTokenSource, ProfileRepository};

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info};
use serde_json::{Value, json};

pub struct App {
    provider: Arc<IdentityToolkitProvider>,
    profiles: ProfileRepository,
    gateway: AuthGateway,
    session_file: Option<SessionFile>,
}

impl App {
    /// Build the provider, store, and gateway.
    ///
    /// `session_path` enables credential persistence; a stored credential is
    /// restored as the initial signed-in state. `federated` is the IdP
    /// credential used by `signin-federated`.
    pub fn build(
        config: &Config,
        session_path: Option<PathBuf>,
        federated: Option<IdpCredential>,
    ) -> CliResult<Self> {
        let api_key = config
            .identity
            .api_key
            .as_deref()
            .ok_or_else(|| ConfigError::missing("identity.api_key", "ORI_IDENTITY_API_KEY"))?;
        let project_id = config
            .store
            .project_id
            .as_deref()
            .ok_or_else(|| ConfigError::missing("store.project_id", "ORI_STORE_PROJECT_ID"))?;

        let session_file = session_path.map(SessionFile::new);
        let restored = match &session_file {
            Some(file) => file.load()?,
            None => None,
        };

        let mut provider = IdentityToolkitProvider::new(
            &config.identity.endpoint,
            api_key,
            config.http.timeout(),
            restored,
        )?
        .with_request_uri(&config.identity.federated_request_uri);
        if let Some(credential) = federated {
            provider = provider.with_federated_flow(Arc::new(StaticIdpFlow::new(credential)));
        }
        let provider = Arc::new(provider);

        let tokens: Arc<dyn IdTokenSource> = provider.clone();
        let store = FirestoreDocumentStore::new(
            &config.store.endpoint,
            project_id,
            &config.store.database,
            config.http.timeout(),
        )?
        .with_token_source(tokens);

        let profiles = ProfileRepository::new(Arc::new(store));
        let gateway = AuthGateway::new(provider.clone(), profiles.clone());

        Ok(Self {
            provider,
            profiles,
            gateway,
            session_file,
        })
    }

    /// Run one command, then persist whatever credential the provider holds.
    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        let outcome = self.dispatch(command).await;
        let persisted = self.persist();

        let value = outcome?;
        persisted?;
        Ok(value)
    }

    async fn dispatch(&self, command: Commands) -> CliResult<Value> {
        command.validate()?;

        match command {
            Commands::Signup(args) => {
                let form = args.to_form();
                let fields = form.to_profile_fields()?;
                let (identity, profile) = self
                    .gateway
                    .sign_up_with_email(form.email.trim(), &form.password, fields)
                    .await?;
                Ok(json!({ "identity": identity, "profile": profile }))
            }
            Commands::Signin { email, password } => {
                let form = SignInForm::new(email, password);
                self.gateway
                    .sign_in_with_email(form.email.trim(), &form.password)
                    .await?;
                self.session().await
            }
            Commands::SigninFederated { .. } => {
                let result = self.gateway.sign_in_with_federated().await?;
                Ok(serde_json::to_value(result)?)
            }
            Commands::Signout => {
                self.gateway.sign_out().await?;
                self.session().await
            }
            Commands::Whoami => self.session().await,
            Commands::ForgotPassword { email } => {
                let message = self.gateway.request_password_reset(email.trim());
                Ok(json!({ "message": message }))
            }
        }
    }

    /// Settled session for the provider's current auth state
    async fn session(&self) -> CliResult<Value> {
        let store = SessionStore::start(self.provider.as_ref(), self.profiles.clone());
        let session = store.settled().await;
        store.unsubscribe();

        debug!("Session settled as {}", session.status());
        Ok(serde_json::to_value(session)?)
    }

    fn persist(&self) -> CliResult<()> {
        let Some(file) = &self.session_file else {
            return Ok(());
        };

        let credential = self.provider.credential();
        if credential.is_none() && file.path().exists() {
            info!("Clearing stored session {}", file.path().display());
        }
        file.save(credential.as_ref())
    }
}
