//! Form Validation
//!
//! Field values keyed by input name, with per-field errors and a derived
//! validity flag.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Credentials, PasswordChange, SignUpData};

const NAME_MAX_LEN: usize = 150;
const EMAIL_MAX_LEN: usize = 254;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    Username,
}

impl Pattern {
    fn regex(self) -> &'static Regex {
        static EMAIL: OnceLock<Regex> = OnceLock::new();
        static USERNAME: OnceLock<Regex> = OnceLock::new();
        match self {
            Pattern::Email => EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex")),
            Pattern::Username => USERNAME.get_or_init(|| Regex::new(r"^[\w.@+-]+$").expect("valid username regex")),
        }
    }

    fn message(self) -> &'static str {
        match self {
            Pattern::Email => "Enter a valid email address.",
            Pattern::Username => "Use letters, digits and @/./+/-/_ only.",
        }
    }

    pub fn matches(self, value: &str) -> bool {
        self.regex().is_match(value)
    }
}

/// Constraints for one input
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub max_len: Option<usize>,
    pub pattern: Option<Pattern>,
    /// Another field this one must equal, and the message when it does not
    pub must_match: Option<(&'static str, &'static str)>,
}

impl FieldSpec {
    pub fn required(name: &'static str) -> Self {
        Self { name, required: true, max_len: None, pattern: None, must_match: None }
    }

    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn must_match(mut self, other: &'static str, message: &'static str) -> Self {
        self.must_match = Some((other, message));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: Vec<FieldSpec>,
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
    touched: HashSet<String>,
    valid: bool,
}

impl FormState {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let mut form = Self {
            fields,
            values: HashMap::new(),
            errors: HashMap::new(),
            touched: HashSet::new(),
            valid: false,
        };
        form.recompute();
        form
    }

    /// Record a keystroke and revalidate every field
    pub fn handle_change(&mut self, name: &str, value: String) {
        self.touched.insert(name.to_string());
        self.values.insert(name.to_string(), value);
        self.recompute();
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// First failing constraint of a field the user has edited
    pub fn error(&self, name: &str) -> Option<&str> {
        if !self.touched.contains(name) {
            return None;
        }
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.touched.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        let errors: HashMap<String, String> = self
            .fields
            .iter()
            .filter_map(|spec| self.check(spec).map(|msg| (spec.name.to_string(), msg)))
            .collect();
        self.valid = errors.is_empty();
        self.errors = errors;
    }

    fn check(&self, spec: &FieldSpec) -> Option<String> {
        let value = self.value(spec.name);
        if value.trim().is_empty() {
            return spec.required.then(|| "This field is required.".to_string());
        }
        if let Some(max) = spec.max_len {
            if value.chars().count() > max {
                return Some(format!("Ensure this field has no more than {} characters.", max));
            }
        }
        if let Some(pattern) = spec.pattern {
            if !pattern.matches(value) {
                return Some(pattern.message().to_string());
            }
        }
        if let Some((other, message)) = spec.must_match {
            if value != self.value(other) {
                return Some(message.to_string());
            }
        }
        None
    }
}

pub fn sign_up_form() -> FormState {
    FormState::new(vec![
        FieldSpec::required("first_name").max_len(NAME_MAX_LEN),
        FieldSpec::required("last_name").max_len(NAME_MAX_LEN),
        FieldSpec::required("username").max_len(NAME_MAX_LEN).pattern(Pattern::Username),
        FieldSpec::required("email").max_len(EMAIL_MAX_LEN).pattern(Pattern::Email),
        FieldSpec::required("password"),
    ])
}

pub fn sign_in_form() -> FormState {
    FormState::new(vec![
        FieldSpec::required("email").pattern(Pattern::Email),
        FieldSpec::required("password"),
    ])
}

pub fn change_password_form() -> FormState {
    FormState::new(vec![
        FieldSpec::required("current_password"),
        FieldSpec::required("new_password"),
        FieldSpec::required("repeat_password").must_match("new_password", "Passwords do not match."),
    ])
}

impl SignUpData {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            email: form.value("email").trim().to_string(),
            username: form.value("username").trim().to_string(),
            first_name: form.value("first_name").trim().to_string(),
            last_name: form.value("last_name").trim().to_string(),
            password: form.value("password").to_string(),
        }
    }
}

impl Credentials {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            email: form.value("email").trim().to_string(),
            password: form.value("password").to_string(),
        }
    }
}

impl PasswordChange {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            current_password: form.value("current_password").to_string(),
            new_password: form.value("new_password").to_string(),
        }
    }
}
