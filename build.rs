//! Build script.
//!
//! - copies the linker script into the output directory so that the
//!   linker can find it at link time;
//! - turns `secrets.toml` into `OUT_DIR/secrets.rs`, the read-only
//!   credential table compiled into the firmware.

use serde::Deserialize;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Must match `config::MAX_FIELD_LEN`.
const MAX_FIELD_LEN: usize = 64;

/// Environment variable overriding the secrets file location.
const SECRETS_ENV: &str = "SLIDEKEYS_SECRETS";

#[derive(Deserialize)]
struct SecretFile {
    #[serde(default)]
    secret: Vec<SecretRecord>,
}

#[derive(Deserialize)]
struct SecretRecord {
    site: String,
    username: String,
    password: String,
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to OUT_DIR
    fs::copy("memory.x", out_dir.join("memory.x")).unwrap();

    // Tell cargo to look for linker scripts in OUT_DIR
    println!("cargo:rustc-link-search={}", out_dir.display());

    if env::var_os("CARGO_FEATURE_EMBEDDED").is_some() {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    let secrets_path = env::var(SECRETS_ENV).unwrap_or_else(|_| "secrets.toml".into());
    fs::write(out_dir.join("secrets.rs"), render_secrets(&secrets_path)).unwrap();

    // Rebuild if the linker script or the secrets change
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={secrets_path}");
    println!("cargo:rerun-if-env-changed={SECRETS_ENV}");
}

/// Render the secret table as a Rust slice expression.
///
/// A missing file yields an empty table; the firmware then refuses to
/// start with `NoSecretsConfigured`.
fn render_secrets(path: &str) -> String {
    let records = match fs::read_to_string(path) {
        Ok(text) => {
            let file: SecretFile =
                toml::from_str(&text).unwrap_or_else(|e| panic!("{path}: invalid secrets file: {e}"));
            file.secret
        }
        Err(_) => {
            println!("cargo:warning=no secrets file at {path}, building with an empty secret table");
            Vec::new()
        }
    };

    let mut out = String::from("&[\n");
    for (i, record) in records.iter().enumerate() {
        for (name, value) in [
            ("site", &record.site),
            ("username", &record.username),
            ("password", &record.password),
        ] {
            check_field(path, i, name, value);
        }
        writeln!(
            out,
            "    SecretEntry::new({:?}, {:?}, {:?}),",
            record.site, record.username, record.password
        )
        .unwrap();
    }
    out.push(']');
    out
}

/// Fields are typed through a US keyboard layout: printable ASCII only.
fn check_field(path: &str, index: usize, name: &str, value: &str) {
    if value.len() > MAX_FIELD_LEN {
        panic!("{path}: secret #{index}: {name} longer than {MAX_FIELD_LEN} bytes");
    }
    if let Some(c) = value.chars().find(|c| !(' '..='~').contains(c)) {
        panic!("{path}: secret #{index}: {name} contains untypeable character {c:?}");
    }
}
