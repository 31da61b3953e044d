//! Command to invoke an operation by name with JSON arguments.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathContext};
use clap::Args;
use dualpath::{invoke, Operation};
use serde_json::Value;

/// Invoke an operation by name, passing each argument as a JSON value.
///
/// The result is printed as JSON. Arguments are type-checked the way a
/// dynamic caller would see them, so `call resolve '"a"' 42` fails with an
/// invalid-argument error naming `paths[1]`.
#[derive(Args)]
pub struct CallCommand {
    /// Operation name (`isAbsolute`, `is-absolute` and `is_absolute` all work)
    #[arg(value_name = "OPERATION")]
    pub operation: String,

    /// Arguments, each a JSON value such as '"C:\\foo"' or '{"base":"a.txt"}'
    #[arg(value_name = "JSON", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl CallCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let operation: Operation = self.operation.parse()?;
        let args = parse_args(&self.args)?;

        let ctx = PathContext::load(global)?;
        let result = invoke(ctx.engine, ctx.host(), operation, &args)?;
        println!("{result}");
        Ok(())
    }
}

fn parse_args(raw: &[String]) -> Result<Vec<Value>, CliError> {
    raw.iter()
        .enumerate()
        .map(|(i, arg)| {
            serde_json::from_str(arg).map_err(|e| {
                CliError::InvalidArguments(format!("argument {} is not valid JSON: {e}", i + 1))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_args() {
        let raw = vec!["\"a\"".to_string(), "42".to_string(), "{\"ext\":\".x\"}".to_string()];
        assert_eq!(
            parse_args(&raw).unwrap(),
            vec![json!("a"), json!(42), json!({"ext": ".x"})]
        );
    }

    #[test]
    fn test_parse_args_rejects_bare_words() {
        let err = parse_args(&["\"ok\"".to_string(), "foo".to_string()]).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("argument 2"));
    }
}
