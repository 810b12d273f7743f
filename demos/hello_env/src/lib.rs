//! Greeting demo for `config12`.
//!
//! [`GreetingConfig`] is overlaid from `HELLO_*` environment variables and
//! rendered into one or more greeting lines.

use config12::Describe;

/// Settings controlling the greeting.
#[derive(Clone, Debug, PartialEq, Eq, Describe)]
#[c12(prefix = "HELLO_")]
pub struct GreetingConfig {
    /// Who to greet.
    #[c12(env)]
    pub recipient: String,
    /// Word placed before the recipient.
    #[c12(env)]
    pub salutation: String,
    /// Number of times the greeting is printed.
    #[c12(env = "REPEAT")]
    pub repeat: u8,
    /// Upper-case the greeting.
    #[c12(env)]
    pub shout: bool,
    /// Correlation id assigned by the caller; never read from the environment.
    #[c12(env = "TRACE_ID", skip)]
    pub trace_id: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            recipient: "World".to_owned(),
            salutation: "Hello".to_owned(),
            repeat: 1,
            shout: false,
            trace_id: String::new(),
        }
    }
}

impl GreetingConfig {
    /// Render the greeting lines.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let greeting = format!("{}, {}!", self.salutation, self.recipient);
        let line = if self.shout {
            greeting.to_uppercase()
        } else {
            greeting
        };
        std::iter::repeat_n(line, usize::from(self.repeat)).collect()
    }
}

#[cfg(test)]
mod tests {
    //! Rendering and overlay behaviour of the demo configuration.

    use anyhow::{Result, ensure};
    use config12::lookup;
    use rstest::rstest;
    use std::collections::HashMap;

    use super::*;

    #[rstest]
    fn default_greeting_is_rendered_once() {
        assert_eq!(GreetingConfig::default().render(), ["Hello, World!"]);
    }

    #[rstest]
    fn environment_overrides_greeting() -> Result<()> {
        let env = HashMap::from([
            ("HELLO_RECIPIENT".to_owned(), "Ferris".to_owned()),
            ("HELLO_REPEAT".to_owned(), "2".to_owned()),
            ("HELLO_SHOUT".to_owned(), "True".to_owned()),
            ("HELLO_TRACE_ID".to_owned(), "abc".to_owned()),
        ]);
        let config = config12::overlay(&GreetingConfig::default(), &env)?;
        ensure!(config.trace_id.is_empty(), "hidden field was overlaid");
        ensure!(
            config.render() == ["HELLO, FERRIS!", "HELLO, FERRIS!"],
            "{:?}",
            config.render()
        );
        Ok(())
    }

    #[rstest]
    fn zero_repeat_renders_nothing() -> Result<()> {
        let env = lookup::from_fn(|key| (key == "HELLO_REPEAT").then(|| "0".to_owned()));
        let config = config12::overlay(&GreetingConfig::default(), env)?;
        ensure!(config.render().is_empty(), "{:?}", config.render());
        Ok(())
    }
}
