//! Props Security demo application.
//!
//! Assembles a configuration from a representative property set and logs
//! what came out: clients in build order, registered authenticators and
//! encoders.

use tracing::info;
use tracing_subscriber::EnvFilter;

use props_security_core::{Properties, PropertiesConfigFactory};

fn sample_properties() -> Properties {
    Properties::new()
        // password encoders
        .with("encoder.spring.type.0", "bcrypt")
        .with("encoder.spring.bcrypt.length.0", "10")
        .with("encoder.shiro.hashAlgorithmName.0", "SHA-256")
        .with("encoder.shiro.hashIterations.0", "1000")
        .with("encoder.shiro.generatePublicSalt.0", "true")
        // authenticators
        .with("ldap.type.0", "search")
        .with("ldap.url.0", "ldap://localhost:389")
        .with("ldap.baseDn.0", "dc=example,dc=org")
        .with("db.jdbcUrl.0", "jdbc:postgresql://localhost/app")
        .with("db.username.0", "app")
        .with("db.passwordEncoder.0", "springencoder0")
        .with("rest.url.0", "https://auth.example.org/check")
        // clients
        .with("github.id", "github-client-id")
        .with("github.secret", "github-client-secret")
        .with("cas.loginUrl.0", "https://cas.example.org/login")
        .with("oidc.id.0", "oidc-client-id")
        .with("oidc.secret.0", "oidc-client-secret")
        .with("formClient.loginUrl.0", "/login")
        .with("formClient.authenticator.0", "db0")
        .with("directBasicAuth.authenticator.0", "rest0")
        .with("anonymous", "true")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let factory = PropertiesConfigFactory::new(sample_properties())
        .with_callback_url("https://app.example.org/callback");

    match factory.build() {
        Ok(config) => {
            info!("callback url: {:?}", config.callback_url());
            for client in config.clients().iter() {
                info!("client {} ({})", client.name(), client.kind());
            }
            info!(
                "{} authenticators, {} password encoders registered",
                config.authenticators().len(),
                config.encoders().len()
            );
        }
        Err(err) => {
            eprintln!("configuration failed: {}", err);
            std::process::exit(1);
        }
    }
}
