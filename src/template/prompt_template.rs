use std::{borrow::Cow, collections::HashMap, collections::HashSet};

use regex::{Captures, Regex};

use crate::template::TemplateError;

pub type TextReplacements<'a> = HashMap<&'a str, Cow<'a, str>>;

/// A text template with `{{variable}}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    variables: HashSet<String>,
    placeholder: Regex,
}

impl PromptTemplate {
    pub fn from_jinja2(content: impl Into<String>) -> Self {
        let template = content.into();

        let placeholder = Regex::new(r"\{\{(\w+)\}\}").expect("Static regex is valid");
        let variables = placeholder
            .captures_iter(&template)
            .map(|cap| cap[1].to_string())
            .collect();

        Self {
            template,
            variables,
            placeholder,
        }
    }

    /// Substitutes every placeholder in one pass. Replacement values are
    /// inserted verbatim, even if they contain `{{...}}` themselves.
    pub fn format(&self, input: &TextReplacements) -> Result<String, TemplateError> {
        self.validate_input(input)?;

        let rendered = self
            .placeholder
            .replace_all(&self.template, |cap: &Captures| {
                input
                    .get(&cap[1])
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            });

        Ok(rendered.into_owned())
    }

    /// Returns a list of required input variable names for the template.
    pub fn variables(&self) -> HashSet<&str> {
        self.variables.iter().map(String::as_str).collect()
    }

    pub fn validate_input(&self, input: &TextReplacements) -> Result<(), TemplateError> {
        let mut missing_variables = self
            .variables()
            .into_iter()
            .filter(|variable| !input.contains_key(variable))
            .collect::<Vec<_>>();

        if !missing_variables.is_empty() {
            missing_variables.sort_unstable();
            return Err(TemplateError::MissingVariable(missing_variables.join(", ")));
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! text_replacements {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut replacements = $crate::template::TextReplacements::new();
        $(replacements.insert($key, ::std::borrow::Cow::from($value));)*
        replacements
    }};
}
