//! Typed file templates with literal placeholder substitution.
//!
//! Substitution is a plain find/replace of marker tokens with answer
//! values, not a general templating language. The marker for a key is the
//! uppercased key (`team_name` becomes `TEAM_NAME`), matching the markers
//! embedded in the payloads under `resources/templates/`.

use std::fmt;

use crate::answers::AnswerSet;
use crate::error::ScaffoldError;

/// A file template: static source text plus the answer keys it consumes.
/// Declaring the keys up front lets a unit test validate every template in
/// the recipe without running it.
#[derive(Clone, Copy)]
pub struct Template {
    source: &'static str,
    placeholders: &'static [&'static str],
}

impl Template {
    pub const fn new(source: &'static str, placeholders: &'static [&'static str]) -> Self {
        Self {
            source,
            placeholders,
        }
    }

    /// A template with no placeholders: rendered verbatim.
    pub const fn plain(source: &'static str) -> Self {
        Self {
            source,
            placeholders: &[],
        }
    }

    pub fn placeholders(&self) -> &'static [&'static str] {
        self.placeholders
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Replace every placeholder token with its answer value. Text that
    /// contains no recognized token comes back unchanged.
    pub fn render(&self, answers: &AnswerSet) -> Result<String, ScaffoldError> {
        let mut text = self.source.to_string();
        for key in self.placeholders {
            let token = key.to_ascii_uppercase();
            let value = answers.value(key)?;
            text = text.replace(&token, value);
        }
        Ok(text)
    }

    /// Every declared placeholder must occur in the source at least once;
    /// a declared-but-absent key means the template and the recipe have
    /// drifted apart.
    pub fn verify(&self) -> Result<(), String> {
        for key in self.placeholders {
            let token = key.to_ascii_uppercase();
            if !self.source.contains(&token) {
                return Err(format!("placeholder {token} does not occur in template"));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("source_len", &self.source.len())
            .field("placeholders", &self.placeholders)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_all_tokens() {
        let template = Template::new(
            "crafted by TEAM_NAME\nTEAM_URL\nTEAM_NAME again\n",
            &["team_name", "team_url"],
        );
        let mut answers = AnswerSet::new();
        answers.record("team_name", "Acme".to_string());
        answers.record("team_url", "http://acme.example".to_string());

        let rendered = template.render(&answers).unwrap();
        assert_eq!(rendered, "crafted by Acme\nhttp://acme.example\nAcme again\n");
    }

    #[test]
    fn test_render_is_identity_without_placeholders() {
        let source = "User-agent: *\nDisallow:\n";
        let template = Template::plain(source);
        let rendered = template.render(&AnswerSet::new()).unwrap();
        assert_eq!(rendered, source);
    }

    #[test]
    fn test_render_missing_answer_fails() {
        let template = Template::new("TEAM_NAME", &["team_name"]);
        let err = template.render(&AnswerSet::new()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Input { .. }));
    }

    #[test]
    fn test_verify_catches_absent_token() {
        let template = Template::new("no tokens here", &["team_name"]);
        assert!(template.verify().is_err());
        assert!(Template::plain("anything").verify().is_ok());
    }
}
