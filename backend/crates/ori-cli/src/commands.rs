use crate::CliError;

use ori_auth::IdpCredential;
use ori_core::validation::{EMAIL, check_email};
use ori_core::{FieldErrors, SignInForm, SignUpForm};

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new account and create its profile
    Signup(SignUpArgs),

    /// Sign in with email and password
    Signin {
        #[arg(long, default_value_t)]
        email: String,

        #[arg(long, default_value_t)]
        password: String,
    },

    /// Sign in with an identity token issued by the federated provider
    SigninFederated {
        /// ID token obtained from the provider's own sign-in flow
        #[arg(long)]
        id_token: String,
    },

    /// Sign out and forget the stored credential
    Signout,

    /// Print the current session
    Whoami,

    /// Request a password reset
    ForgotPassword {
        #[arg(long, default_value_t)]
        email: String,
    },
}

/// Registration form fields. Empty values are reported by validation, not clap.
#[derive(Args, Debug, Default)]
pub struct SignUpArgs {
    #[arg(long, default_value_t)]
    pub email: String,

    #[arg(long, default_value_t)]
    pub password: String,

    #[arg(long, default_value_t)]
    pub confirm_password: String,

    #[arg(long, default_value_t)]
    pub first_name: String,

    #[arg(long, default_value_t)]
    pub last_name: String,

    #[arg(long, default_value_t)]
    pub company: String,

    #[arg(long, default_value_t)]
    pub role: String,

    /// startup, investor, or advisor
    #[arg(long, default_value_t)]
    pub user_type: String,
}

impl SignUpArgs {
    pub fn to_form(&self) -> SignUpForm {
        let mut form = SignUpForm {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company: self.company.clone(),
            role: self.role.clone(),
            user_type: None,
        };
        form.select_user_type(&self.user_type);
        form
    }
}

impl Commands {
    /// Check form input before anything touches the network.
    #[track_caller]
    pub fn validate(&self) -> Result<(), CliError> {
        let errors = match self {
            Commands::Signup(args) => args.to_form().validate(),
            Commands::Signin { email, password } => {
                SignInForm::new(email.as_str(), password.as_str()).validate()
            }
            Commands::ForgotPassword { email } => {
                let mut errors = FieldErrors::new();
                errors.check(EMAIL, check_email(email));
                errors
            }
            Commands::SigninFederated { .. } | Commands::Signout | Commands::Whoami => {
                FieldErrors::new()
            }
        };

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::invalid_form(errors))
        }
    }

    /// IdP credential for `signin-federated`, `None` for every other command
    pub fn federated_credential(&self, provider_id: &str) -> Option<IdpCredential> {
        match self {
            Commands::SigninFederated { id_token } => {
                Some(IdpCredential::from_id_token(provider_id, id_token.trim()))
            }
            _ => None,
        }
    }
}
