use std::{collections::HashMap, env, fs::File, io, io::Read};

use anyhow::Context as _;

/// Optional file with `KEY=value` lines, consulted for variables the process environment lacks.
const ENV_FILE: &str = "variables.env";

#[derive(Debug)]
pub struct Environment {
    pub database_url: Option<String>,
    pub token_secret: String,
}

impl Environment {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE");
        let token_secret = lookup("SECRETA")
            .context("SECRETA must be set to the session token signing secret")?;

        Ok(Self {
            database_url,
            token_secret,
        })
    }
}

fn parse_env_file(reader: impl Read) -> anyhow::Result<HashMap<String, String>> {
    let vars = dotenvy::from_read_iter(reader).collect::<Result<_, _>>()?;

    Ok(vars)
}

fn read_env_file() -> anyhow::Result<HashMap<String, String>> {
    match File::open(ENV_FILE) {
        Ok(file) => parse_env_file(file).with_context(|| format!("failed to read {}", ENV_FILE)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
        Err(err) => Err(err).with_context(|| format!("failed to open {}", ENV_FILE)),
    }
}

/// Variables already present in the process environment take precedence over the file.
fn layered<'a>(
    process: impl Fn(&str) -> Option<String> + 'a,
    file: &'a HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| process(key).or_else(|| file.get(key).cloned())
}

pub fn read_environment() -> anyhow::Result<Environment> {
    let file = read_env_file()?;

    Environment::from_lookup(layered(|key| env::var(key).ok(), &file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_secret_fails_with_a_descriptive_error() {
        let err = Environment::from_lookup(lookup_in(&[("DATABASE", "postgres://db")])).unwrap_err();

        assert!(err.to_string().contains("SECRETA"));
    }

    #[test]
    fn database_is_optional() {
        let env = Environment::from_lookup(lookup_in(&[("SECRETA", "s")])).unwrap();

        assert_eq!(env.token_secret, "s");
        assert_eq!(env.database_url, None);
    }

    #[test]
    fn env_file_does_not_override_process_variables() {
        let file = parse_env_file("SECRETA=from-file\nDATABASE=postgres://file\n".as_bytes()).unwrap();
        let process = lookup_in(&[("SECRETA", "from-process")]);

        let env = Environment::from_lookup(layered(process, &file)).unwrap();

        assert_eq!(env.token_secret, "from-process");
        assert_eq!(env.database_url.as_deref(), Some("postgres://file"));
    }
}
