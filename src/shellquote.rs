//! Splits a command line into words the way a POSIX shell would, without any
//! expansion. Used for user supplied commands such as the clipboard utility.

use std::fmt;

#[derive(Debug, PartialEq)]
pub enum SplitError {
    Empty,
    UnterminatedEscape,
    UnterminatedSingleQuote,
    UnterminatedDoubleQuote,
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Empty => f.write_str("empty command"),
            SplitError::UnterminatedEscape => f.write_str("unterminated escape"),
            SplitError::UnterminatedSingleQuote => f.write_str("unterminated single quote"),
            SplitError::UnterminatedDoubleQuote => f.write_str("unterminated double quote"),
        }
    }
}

impl std::error::Error for SplitError {}

const SPLIT_CHARS: &[char] = &[' ', '\n', '\t'];
const DOUBLE_ESCAPE_CHARS: &[char] = &['$', '`', '"', '\\'];

#[derive(Clone, Copy, PartialEq)]
enum State {
    Blank,
    Word,
    Single,
    Double,
}

pub fn split(line: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut state = State::Blank;
    let mut chars = line.chars();

    while let Some(chr) = chars.next() {
        state = match (state, chr) {
            (State::Blank | State::Word, '\\') => match chars.next() {
                Some('\n') => state,
                Some(escaped) => {
                    word.push(escaped);
                    State::Word
                }
                None => return Err(SplitError::UnterminatedEscape),
            },
            (State::Blank | State::Word, '\'') => State::Single,
            (State::Blank | State::Word, '"') => State::Double,
            (State::Blank, chr) if SPLIT_CHARS.contains(&chr) => State::Blank,
            (State::Word, chr) if SPLIT_CHARS.contains(&chr) => {
                words.push(std::mem::take(&mut word));
                State::Blank
            }
            (State::Blank | State::Word, chr) => {
                word.push(chr);
                State::Word
            }

            (State::Single, '\'') => State::Word,
            (State::Single, chr) => {
                word.push(chr);
                State::Single
            }

            (State::Double, '"') => State::Word,
            (State::Double, '\\') => {
                match chars.next() {
                    Some('\n') => {}
                    Some(escaped) if DOUBLE_ESCAPE_CHARS.contains(&escaped) => word.push(escaped),
                    Some(other) => {
                        word.push('\\');
                        word.push(other);
                    }
                    None => return Err(SplitError::UnterminatedDoubleQuote),
                }
                State::Double
            }
            (State::Double, chr) => {
                word.push(chr);
                State::Double
            }
        };
    }

    match state {
        State::Single => Err(SplitError::UnterminatedSingleQuote),
        State::Double => Err(SplitError::UnterminatedDoubleQuote),
        State::Word => {
            words.push(word);
            Ok(words)
        }
        State::Blank => Ok(words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_TESTS: &[(&str, &[&str])] = &[
        ("pbcopy", &["pbcopy"]),
        ("  pbcopy  ", &["pbcopy"]),
        ("xclip -selection clipboard", &["xclip", "-selection", "clipboard"]),
        ("wl-copy\t--trim-newline", &["wl-copy", "--trim-newline"]),
        ("sh -c 'cat > /tmp/clip'", &["sh", "-c", "cat > /tmp/clip"]),
        (r#"sh -c "cat > \"/tmp/my clip\"""#, &["sh", "-c", r#"cat > "/tmp/my clip""#]),
        (r#""a\b""#, &[r"a\b"]),
        (r"my\ clip", &["my clip"]),
        ("one\\\ntwo", &["onetwo"]),
        ("''", &[""]),
        ("pre'quoted'post", &["prequotedpost"]),
        ("", &[]),
    ];

    const ERROR_TESTS: &[(&str, SplitError)] = &[
        ("pbcopy \\", SplitError::UnterminatedEscape),
        ("sh -c 'cat", SplitError::UnterminatedSingleQuote),
        ("sh -c \"cat", SplitError::UnterminatedDoubleQuote),
        ("sh -c \"cat\\", SplitError::UnterminatedDoubleQuote),
    ];

    #[test]
    fn test_split() {
        for (input, expected) in SUCCESS_TESTS {
            assert_eq!(&split(input).unwrap(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_split_errors() {
        for (input, expected) in ERROR_TESTS {
            assert_eq!(&split(input).unwrap_err(), expected, "input: {input:?}");
        }
    }
}
