/// The evaluator module walks a parsed tree and computes its value.
///
/// The evaluator resolves variables against the caller's environment, applies
/// unary and binary operators element-wise with broadcasting, and runs the
/// builtin functions.
///
/// # Responsibilities
/// - Evaluates AST nodes to number arrays.
/// - Broadcasts one-element arrays against longer ones.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a number, an identifier, an operator or a parenthesis,
/// paired with its byte offset. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Distinguishes `$`-prefixed identifiers only by their text.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream by recursive descent and constructs
/// a tree that respects operator precedence and associativity. It never
/// evaluates anything and never checks that variables or functions exist, so
/// it can validate syntax on its own.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates grammar, reporting errors with the offending token.
pub mod parser;
/// The value module defines the evaluator's data types.
///
/// Every value is an array of `f64`; the environment maps names to arrays.
pub mod value;
