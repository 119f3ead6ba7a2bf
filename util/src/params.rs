//! Generic parameters functions
//!
//! Parameter files are TOML files stored in the `params` directory under the software root (see
//! [`crate::host::get_sw_root`]).

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::warn;
use serde::de::DeserializeOwned;
use std::fs::read_to_string;
use std::path::PathBuf;
use thiserror::Error;
use toml::{self, value::{Table, Value}};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error that occurs during loading of a parameter file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot determine the software root directory: {0}")]
    SwRootNotFound(std::io::Error),

    #[error("Cannot load the parmeter file: {0}")]
    FileLoadError(std::io::Error),

    #[error("Cannot read the parameter file: {0}")]
    DeserialiseError(toml::de::Error)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Load a parameter file
///
/// The file path is relative to the "params" directory
pub fn load<P>(param_file_path: &str) -> Result<P, LoadError> 
where
    P: DeserializeOwned
{
    // Get the params dir
    let path = params_path(param_file_path)?;

    // Load the file into a string
    let params_str = match read_to_string(path) {
        Ok(s) => s,
        Err(e) => return Err(LoadError::FileLoadError(e))
    };

    from_str(&params_str)
}

/// Load a parameter file, falling back to defaults for anything which cannot be loaded.
///
/// Failure to load is never an error here. If the file cannot be read or is not valid TOML a
/// warning is logged and `P::default()` is returned. Otherwise each key is checked on its own, see
/// [`from_str_or_default`].
pub fn load_or_default<P>(param_file_path: &str) -> P
where
    P: DeserializeOwned + Default
{
    let params_str = match params_path(param_file_path)
        .and_then(|p| read_to_string(p).map_err(LoadError::FileLoadError))
    {
        Ok(s) => s,
        Err(e) => {
            warn!(
                "Could not load parameters from \"{}\", defaults will be used: {}", 
                param_file_path, 
                e
            );
            return P::default()
        }
    };

    from_str_or_default(&params_str)
}

/// Parse a parameter struct from a TOML string, using the default for every key which is missing
/// or has an invalid value.
///
/// Keys are checked one at a time, so a bad value only loses that key. `P` must fill missing
/// fields from its defaults, for instance with `#[serde(default)]`. Keys which `P` does not know
/// are ignored.
pub fn from_str_or_default<P>(params_str: &str) -> P
where
    P: DeserializeOwned + Default
{
    let table = match params_str.parse::<Value>() {
        Ok(Value::Table(t)) => t,
        Ok(_) => {
            warn!("Parameters are not a TOML table, defaults will be used");
            return P::default()
        },
        Err(e) => {
            warn!("Could not parse parameters, defaults will be used: {}", e);
            return P::default()
        }
    };

    // Keep only the keys which deserialize on their own
    let mut valid = Table::new();
    for (key, value) in table {
        let mut single = Table::new();
        single.insert(key.clone(), value.clone());

        match Value::Table(single).try_into::<P>() {
            Ok(_) => {
                valid.insert(key, value);
            },
            Err(e) => warn!("Invalid parameter \"{}\", the default will be used: {}", key, e)
        }
    }

    match Value::Table(valid).try_into() {
        Ok(p) => p,
        Err(e) => {
            warn!("Parameters conflict with each other, defaults will be used: {}", e);
            P::default()
        }
    }
}

/// Parse a parameter struct from a TOML string.
pub fn from_str<P>(params_str: &str) -> Result<P, LoadError>
where
    P: DeserializeOwned
{
    toml::from_str(params_str).map_err(LoadError::DeserialiseError)
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn params_path(param_file_path: &str) -> Result<PathBuf, LoadError> {
    let mut path = crate::host::get_sw_root()
        .map_err(LoadError::SwRootNotFound)?;
    path.push("params");
    path.push(param_file_path);

    Ok(path)
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestParams {
        #[serde(default = "default_rate")]
        rate_hz: f64,

        #[serde(default)]
        enabled: bool
    }

    impl Default for TestParams {
        fn default() -> Self {
            Self {
                rate_hz: default_rate(),
                enabled: false
            }
        }
    }

    fn default_rate() -> f64 {
        20.0
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let p: TestParams = from_str("enabled = true").unwrap();
        assert_eq!(p, TestParams { rate_hz: 20.0, enabled: true });

        let p: TestParams = from_str("").unwrap();
        assert_eq!(p, TestParams::default());
    }

    #[test]
    fn test_malformed_file() {
        let r: Result<TestParams, _> = from_str("rate_hz = \"fast\"");
        assert!(matches!(r, Err(LoadError::DeserialiseError(_))));
    }

    #[test]
    fn test_bad_key_keeps_good_keys() {
        let p: TestParams = from_str_or_default("rate_hz = 5.0\nenabled = \"yes\"");
        assert_eq!(p, TestParams { rate_hz: 5.0, enabled: false });

        let p: TestParams = from_str_or_default("rate_hz = \"fast\"\nenabled = true");
        assert_eq!(p, TestParams { rate_hz: 20.0, enabled: true });

        // Unknown keys are ignored
        let p: TestParams = from_str_or_default("rate_hz = 5.0\nnot_a_param = 3");
        assert_eq!(p, TestParams { rate_hz: 5.0, enabled: false });
    }

    #[test]
    fn test_invalid_toml_uses_defaults() {
        let p: TestParams = from_str_or_default("rate_hz = = 5.0");
        assert_eq!(p, TestParams::default());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let p: TestParams = load_or_default("this_file_does_not_exist_8f3a.toml");
        assert_eq!(p, TestParams::default());
    }
}
