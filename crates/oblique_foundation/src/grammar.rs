//! Textual constants of the language.

/// One level of indentation.
pub const INDENT_UNIT: &str = "  ";

/// Starts a comment line.
pub const COMMENT_MARKER: char = '#';

/// Starts a command word such as `/type`.
pub const COMMAND_MARKER: char = '/';

/// Separates the type from the identifier in a reference.
pub const REF_SEPARATOR: char = '/';

/// The root pseudo-type every type object belongs to.
pub const TYPE_TYPE: &str = "type";

/// Content of the `type/type` object.
pub const TYPE_DESCRIPTION: &str = "Type";

/// The type given to anonymous items.
pub const ITEM_TYPE: &str = "item";

/// Content of the `type/item` object.
pub const ITEM_DESCRIPTION: &str = "Item";
