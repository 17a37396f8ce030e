//! Validation rules and their failure reasons

use std::fmt;

/// Why a rule failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    Required,
    MinLength,
    MaxLength,
    EmailDomain,
}

impl Reason {
    /// Stable tag used in the reasons map
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "minlength",
            Self::MaxLength => "maxlength",
            Self::EmailDomain => "emailDomain",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A named predicate over a field value.
///
/// Length rules count characters and, like the domain rule, pass on an empty
/// value; emptiness is the business of `Required` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Value must have at least this many characters
    MinLength(usize),
    /// Value must have at most this many characters
    MaxLength(usize),
    EmailDomain,
}

impl Rule {
    pub fn reason(&self) -> Reason {
        match self {
            Self::Required => Reason::Required,
            Self::MinLength(_) => Reason::MinLength,
            Self::MaxLength(_) => Reason::MaxLength,
            Self::EmailDomain => Reason::EmailDomain,
        }
    }

    /// Evaluate the rule against a value
    pub fn check(&self, value: &str) -> Result<(), Reason> {
        let passes = match self {
            Self::Required => !value.is_empty(),
            Self::MinLength(min) => value.is_empty() || value.chars().count() >= *min,
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::EmailDomain => return email_domain_validator(value),
        };

        if passes {
            Ok(())
        } else {
            Err(self.reason())
        }
    }
}

/// Accepts empty values and addresses whose domain, after the last `@`, is
/// `gmail.com` in any letter case.
pub fn email_domain_validator(value: &str) -> Result<(), Reason> {
    if value.is_empty() {
        return Ok(());
    }

    match value.rsplit_once('@') {
        Some((_, domain)) if domain.to_lowercase() == "gmail.com" => Ok(()),
        _ => Err(Reason::EmailDomain),
    }
}

/// A rule together with the message shown when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    pub rule: Rule,
    pub message: &'static str,
}

impl RuleSpec {
    pub const fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email_domain {
        use super::*;

        #[test]
        fn test_empty_value_passes() {
            assert_eq!(email_domain_validator(""), Ok(()));
        }

        #[test]
        fn test_gmail_passes_in_any_case() {
            assert_eq!(email_domain_validator("a@gmail.com"), Ok(()));
            assert_eq!(email_domain_validator("a@GMAIL.COM"), Ok(()));
            assert_eq!(email_domain_validator("a@Gmail.Com"), Ok(()));
        }

        #[test]
        fn test_other_domain_fails() {
            assert_eq!(email_domain_validator("a@yahoo.com"), Err(Reason::EmailDomain));
        }

        #[test]
        fn test_uses_last_at_sign() {
            assert_eq!(email_domain_validator("x@gmail.com@yahoo.com"), Err(Reason::EmailDomain));
            assert_eq!(email_domain_validator("x@yahoo.com@gmail.com"), Ok(()));
        }

        #[test]
        fn test_missing_at_sign_fails() {
            assert_eq!(email_domain_validator("gmail.com"), Err(Reason::EmailDomain));
        }
    }

    mod rules {
        use super::*;

        #[test]
        fn test_required() {
            assert_eq!(Rule::Required.check(""), Err(Reason::Required));
            assert_eq!(Rule::Required.check(" "), Ok(()));
        }

        #[test]
        fn test_min_length_counts_chars_and_skips_empty() {
            assert_eq!(Rule::MinLength(3).check(""), Ok(()));
            assert_eq!(Rule::MinLength(3).check("ab"), Err(Reason::MinLength));
            assert_eq!(Rule::MinLength(3).check("abc"), Ok(()));
            assert_eq!(Rule::MinLength(3).check("éé"), Err(Reason::MinLength));
        }

        #[test]
        fn test_max_length() {
            assert_eq!(Rule::MaxLength(9).check("abcdefghi"), Ok(()));
            assert_eq!(Rule::MaxLength(9).check("abcdefghij"), Err(Reason::MaxLength));
        }

        #[test]
        fn test_reason_tags() {
            assert_eq!(Reason::Required.tag(), "required");
            assert_eq!(Reason::MinLength.tag(), "minlength");
            assert_eq!(Reason::MaxLength.tag(), "maxlength");
            assert_eq!(Reason::EmailDomain.to_string(), "emailDomain");
        }
    }
}
