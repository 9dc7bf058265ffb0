use ::config::{ConfigError, Map, Source, Value};
use itertools::Itertools;
use std::env;

/// A configuration source reading `<prefix><key>=<value>` arguments.
#[derive(Clone, Debug)]
pub struct CommandLine {
    /// Optional prefix that limits args to those that begin with it.
    ///
    /// Example: the arg -Squiet=true becomes quiet=true with a prefix of -S
    prefix: Option<String>,

    /// Separates key and value. It must occur once in the arg, with a
    /// non-empty string on both sides.
    ///
    /// Example: quiet=true is a valid pair with a separator of '='
    ///          quiet= is not, because there is no value.
    separator: String,

    /// Whether invalid args are skipped or reported as a ConfigError.
    ///
    /// Note: get_remaining_args always returns the invalid args.
    ignore_invalid: bool,

    /// Arguments to read instead of the process arguments.
    args: Option<Vec<String>>,
}

impl CommandLine {
    pub fn with_prefix(s: &str) -> Self {
        CommandLine {
            prefix: Some(s.to_owned()),
            ..CommandLine::default()
        }
    }

    #[must_use]
    pub fn ignore_invalid(mut self, ignore: bool) -> Self {
        self.ignore_invalid = ignore;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_args(mut self, args: &[&str]) -> Self {
        self.args = Some(args.iter().map(|arg| arg.to_string()).collect());
        self
    }

    /// Return String iterator of arguments that are invalid.
    pub fn get_remaining_args(self) -> impl Iterator<Item = String> {
        self.args()
            .into_iter()
            .filter(move |arg| !self.is_valid_arg(arg))
    }

    fn args(&self) -> Vec<String> {
        match self.args {
            Some(ref args) => args.clone(),
            None => env::args().collect(),
        }
    }

    fn get_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or_default()
    }

    fn split_arg<'a>(&'a self, arg: &'a str) -> impl Iterator<Item = String> + 'a {
        arg.splitn(2, self.separator.as_str())
            .map(|s| s.to_owned())
    }

    // An argument is valid if it begins with the optional prefix and the
    // first occurrence of the separator splits the rest into two
    // non-empty strings.
    fn is_valid_arg(&self, arg: &str) -> bool {
        match arg.strip_prefix(self.get_prefix()) {
            Some(rest) => {
                let parts = self.split_arg(rest).collect_vec();
                parts.len() == 2 && parts.iter().all(|part| !part.is_empty())
            }
            None => false,
        }
    }
}

impl Default for CommandLine {
    fn default() -> CommandLine {
        CommandLine {
            prefix: None,
            separator: String::from("="),
            ignore_invalid: false,
            args: None,
        }
    }
}

impl Source for CommandLine {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new((*self).clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let mut m = Map::new();
        let uri = String::from("command-line");

        for arg in self.args() {
            if !self.is_valid_arg(&arg) {
                if !self.ignore_invalid {
                    return Err(ConfigError::Message(format!("Invalid command-line arg: '{}'", arg)));
                }

                continue;
            }

            let rest = &arg[self.get_prefix().len()..];
            if let Some((key, val)) = self.split_arg(rest).next_tuple() {
                m.insert(key.to_lowercase(), Value::new(Some(&uri), val));
            }
        }

        Ok(m)
    }
}
