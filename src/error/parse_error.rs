#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that cannot begin an expression.
    UnsupportedPrefix {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found a token in operator position that is not an operator.
    UnsupportedOperator {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    UnclosedParenthesis {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing bracket `]` was expected but not found.
    UnclosedBracket {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The function definition syntax was invalid.
    InvalidFunctionDefinition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedPrefix { token, line } => {
                write!(f, "Error on line {line}: Token {token} cannot begin an expression.")
            },

            Self::UnsupportedOperator { token, line } => {
                write!(f, "Error on line {line}: Token {token} is not a supported operator.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::UnclosedParenthesis { line } => {
                write!(f, "Error on line {line}: Expected closing parenthesis ')' but none found.")
            },

            Self::UnclosedBracket { line } => {
                write!(f, "Error on line {line}: Expected closing bracket ']' but none found.")
            },

            Self::InvalidFunctionDefinition { line } => {
                write!(f, "Error on line {line}: Invalid function definition syntax. Example: define f(x) => x * x")
            },

            Self::UnexpectedTrailingTokens { token, line } => {
                write!(f, "Error on line {line}: Extra tokens after expression. Check your input: {token}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
