#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Treat message types without a parser as an error instead of skipping them
    ///
    /// Env: TMP_PARSER_STRICT_MESSAGE_TYPES
    /// Default: false
    pub strict_message_types: bool,

    /// Reject transaction results whose `code` is non-zero before extracting fields
    ///
    /// Env: TMP_PARSER_REQUIRE_SUCCESS
    /// Default: false
    pub require_success: bool,
}
