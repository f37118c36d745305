//! Postal code format patterns such as `NNNN` or `CCNNN`.

use std::fmt;

use regex::Regex;

use crate::core::MasterDataError;

/// One position of a postal code format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostalCodeToken {
    /// `N`: any ASCII digit.
    Digit,
    /// `A`: any ASCII letter.
    Letter,
    /// Fixed character: separators, fixed digits and `C` (the country code
    /// characters, in order).
    Literal(char),
}

/// A postal code layout such as `NNNN`, `NN-NNN` or `CCNNN`, compiled to an
/// anchored regular expression.
#[derive(Debug, Clone)]
pub struct PostalCodeFormat {
    country: String,
    format: String,
    tokens: Vec<PostalCodeToken>,
    regex: Regex,
}

impl PostalCodeFormat {
    /// Parse a format string for the given ISO country code.
    pub fn parse(country: &str, format: &str) -> Result<Self, MasterDataError> {
        if format.is_empty() {
            return Err(MasterDataError::InvalidArgument(format!(
                "empty postal code format for {country}"
            )));
        }
        let iso: Vec<char> = country.chars().collect();
        let mut country_pos = 0;
        let mut tokens = Vec::with_capacity(format.len());
        let mut pattern = String::from("^");

        for c in format.chars() {
            let token = match c {
                'N' => PostalCodeToken::Digit,
                'A' => PostalCodeToken::Letter,
                'C' => {
                    let Some(&iso_char) = iso.get(country_pos) else {
                        return Err(MasterDataError::InvalidArgument(format!(
                            "format '{format}' uses more country characters than '{country}' has"
                        )));
                    };
                    country_pos += 1;
                    PostalCodeToken::Literal(iso_char)
                }
                other => PostalCodeToken::Literal(other),
            };
            match token {
                PostalCodeToken::Digit => pattern.push_str("[0-9]"),
                PostalCodeToken::Letter => pattern.push_str("[A-Z]"),
                PostalCodeToken::Literal(ch) => pattern.push_str(&regex::escape(&ch.to_string())),
            }
            tokens.push(token);
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|e| {
            MasterDataError::InvalidArgument(format!("postal code format '{format}': {e}"))
        })?;
        Ok(Self {
            country: country.to_string(),
            format: format.to_string(),
            tokens,
            regex,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// The format string as declared.
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn tokens(&self) -> &[PostalCodeToken] {
        &self.tokens
    }

    /// Whether an already normalized (trimmed, upper-case) code matches.
    pub fn is_valid(&self, code: &str) -> bool {
        self.regex.is_match(code)
    }

    /// A sample code: digits count up from 1, letters from `A`.
    pub fn example(&self) -> String {
        let mut digit = 0u8;
        let mut letter = 0u8;
        self.tokens
            .iter()
            .map(|token| match *token {
                PostalCodeToken::Digit => {
                    digit = (digit + 1) % 10;
                    char::from(b'0' + digit)
                }
                PostalCodeToken::Letter => {
                    let c = char::from(b'A' + letter);
                    letter = (letter + 1) % 26;
                    c
                }
                PostalCodeToken::Literal(c) => c,
            })
            .collect()
    }
}

impl fmt::Display for PostalCodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only() {
        let f = PostalCodeFormat::parse("AT", "NNNN").unwrap();
        assert!(f.is_valid("1010"));
        assert!(!f.is_valid("101"));
        assert!(!f.is_valid("10100"));
        assert!(!f.is_valid("A010"));
        assert_eq!(f.example(), "1234");
    }

    #[test]
    fn separators_are_literal() {
        let f = PostalCodeFormat::parse("PL", "NN-NNN").unwrap();
        assert!(f.is_valid("00-950"));
        assert!(!f.is_valid("00950"));
        assert!(!f.is_valid("00.950"));
        assert_eq!(f.example(), "12-345");
    }

    #[test]
    fn country_code_characters() {
        let f = PostalCodeFormat::parse("AD", "CCNNN").unwrap();
        assert!(f.is_valid("AD100"));
        assert!(!f.is_valid("AT100"));
        assert_eq!(f.example(), "AD123");
        assert!(PostalCodeFormat::parse("AD", "CCCNN").is_err());
    }

    #[test]
    fn letters() {
        let f = PostalCodeFormat::parse("CA", "ANA NAN").unwrap();
        assert!(f.is_valid("K1A 0B1"));
        assert!(!f.is_valid("K1A0B1"));
        assert_eq!(f.example(), "A1B 2C3");
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        let f = PostalCodeFormat::parse("XX", "N.N").unwrap();
        assert!(f.is_valid("1.2"));
        assert!(!f.is_valid("1x2"));
    }

    #[test]
    fn empty_format_rejected() {
        assert!(PostalCodeFormat::parse("AT", "").is_err());
    }
}
