//! Loading configuration from the real process environment.

use anyhow::{Result, ensure};
use config12::{Describe, OverlayError};
use rstest::rstest;
use serial_test::serial;
use test_helpers::env;

#[derive(Clone, Debug, PartialEq, Eq, Describe)]
#[c12(prefix = "C12_IT_")]
struct Server {
    #[c12(env)]
    port: u16,
    #[c12(env)]
    connection_string: String,
    #[c12(env)]
    log_requests: bool,
    site_name: String,
}

fn defaults() -> Server {
    Server {
        port: 3000,
        connection_string: String::new(),
        log_requests: false,
        site_name: "demo".to_owned(),
    }
}

#[rstest]
#[serial]
fn process_environment_overrides_defaults() -> Result<()> {
    let lock = env::lock();
    let _port = lock.set_var("C12_IT_PORT", "8080");
    let _conn = lock.set_var("C12_IT_CONNECTION_STRING", "postgres://db");
    let _log = lock.set_var("C12_IT_LOG_REQUESTS", "true");
    let _site = lock.set_var("SITE_NAME", "ignored");

    let server = config12::from_environment(&defaults())?;
    ensure!(
        server
            == Server {
                port: 8080,
                connection_string: "postgres://db".to_owned(),
                log_requests: true,
                site_name: "demo".to_owned(),
            },
        "{server:?}"
    );
    Ok(())
}

#[rstest]
#[serial]
fn unset_and_blank_variables_keep_defaults() -> Result<()> {
    let lock = env::lock();
    let _port = lock.remove_var("C12_IT_PORT");
    let _conn = lock.set_var("C12_IT_CONNECTION_STRING", "   ");
    let _log = lock.remove_var("C12_IT_LOG_REQUESTS");

    let server = config12::from_environment(&defaults())?;
    ensure!(server == defaults(), "{server:?}");
    Ok(())
}

#[rstest]
#[serial]
fn unparsable_port_is_reported() {
    let lock = env::lock();
    let _port = lock.set_var("C12_IT_PORT", "http");
    let _conn = lock.remove_var("C12_IT_CONNECTION_STRING");
    let _log = lock.remove_var("C12_IT_LOG_REQUESTS");

    let err = config12::from_environment(&defaults());
    assert!(
        matches!(&err, Err(OverlayError::FieldParse(e)) if e.external_key == "C12_IT_PORT"),
        "{err:?}"
    );
}
