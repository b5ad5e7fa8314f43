//! Argument expansion
//!
//! Applied to every word after the command name:
//! - `$HOME`, `~` and `~/...` become the configured virtual home
//! - `$NAME` becomes the value of NAME from the session environment
//! - anything else passes through untouched
//!
//! An unset variable is reported and its word is kept literally.

use std::collections::HashMap;

use super::errors::ShellError;

pub const HOME_VAR: &str = "$HOME";
const VAR_SIGIL: char = '$';

/// Result of expanding an argument list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Expanded {
    pub args: Vec<String>,
    pub warnings: Vec<ShellError>,
}

pub fn expand_args(args: &[String], home: &str, env: &HashMap<String, String>) -> Expanded {
    let mut out = Expanded::default();
    for arg in args {
        match expand_word(arg, home, env) {
            Ok(value) => out.args.push(value),
            Err(warning) => {
                out.args.push(arg.clone());
                out.warnings.push(warning);
            }
        }
    }
    out
}

fn expand_word(word: &str, home: &str, env: &HashMap<String, String>) -> Result<String, ShellError> {
    if word == HOME_VAR || word == "~" {
        return Ok(home.to_string());
    }
    if let Some(rest) = word.strip_prefix("~/") {
        return Ok(format!("{}/{}", home.trim_end_matches('/'), rest));
    }

    match word.strip_prefix(VAR_SIGIL) {
        Some(name) if !name.is_empty() => env
            .get(name)
            .cloned()
            .ok_or_else(|| ShellError::UnboundVariable { name: name.to_string() }),
        _ => Ok(word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn env() -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert("PROJECT".to_string(), "/work/p".to_string());
        env.insert("HOME".to_string(), "/host/home".to_string());
        env
    }

    #[test]
    fn test_home_sentinels() {
        let out = expand_args(&args(&["$HOME", "~", "~/docs"]), "/home/user", &env());
        assert_eq!(out.args, args(&["/home/user", "/home/user", "/home/user/docs"]));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_home_at_root() {
        let out = expand_args(&args(&["~/docs"]), "/", &env());
        assert_eq!(out.args, args(&["/docs"]));
    }

    #[test]
    fn test_env_variable() {
        let out = expand_args(&args(&["$PROJECT", "plain", "a$PROJECT"]), "/", &env());
        assert_eq!(out.args, args(&["/work/p", "plain", "a$PROJECT"]));
    }

    #[test]
    fn test_unbound_variable_kept_literally() {
        let out = expand_args(&args(&["$MISSING", "x"]), "/", &env());
        assert_eq!(out.args, args(&["$MISSING", "x"]));
        assert_eq!(
            out.warnings,
            vec![ShellError::UnboundVariable { name: "MISSING".to_string() }]
        );
        assert_eq!(out.warnings[0].to_string(), "environment variable MISSING is not set");
    }

    #[test]
    fn test_lone_sigil() {
        let out = expand_args(&args(&["$"]), "/", &env());
        assert_eq!(out.args, args(&["$"]));
        assert!(out.warnings.is_empty());
    }
}
