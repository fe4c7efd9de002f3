//! Configuration options for JSON serialization.
//!
//! [`JsonOptions`] controls the layout of the encoded output. It never changes
//! which fields are emitted: omission is decided per field, see
//! [`omitempty`](crate::omitempty).
//!
//! ## Examples
//!
//! ```rust
//! use serde_omitjson::{JsonOptions, to_string_with_options};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! let options = JsonOptions::pretty().with_indent(4);
//! let json = to_string_with_options(&data, options).unwrap();
//! assert_eq!(json, "{\n    \"x\": 1,\n    \"y\": 2\n}");
//! ```

/// Configuration options for JSON serialization.
///
/// # Examples
///
/// ```rust
/// use serde_omitjson::JsonOptions;
///
/// // Default compact options
/// let options = JsonOptions::new();
///
/// // Pretty-printed with 2-space indentation
/// let options = JsonOptions::pretty();
///
/// // Custom configuration
/// let options = JsonOptions::pretty()
///     .with_indent(4)
///     .with_escape_html(true);
/// ```
#[derive(Clone, Debug)]
pub struct JsonOptions {
    pub indent: usize,
    pub pretty: bool,
    pub escape_html: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            indent: 2,
            pretty: false,
            escape_html: false,
        }
    }
}

impl JsonOptions {
    /// Creates default options (compact output, 2-space indent, no HTML escaping).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_omitjson::JsonOptions;
    ///
    /// let options = JsonOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// assert!(!options.escape_html);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        JsonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Escapes `<`, `>`, `&`, U+2028 and U+2029 inside strings.
    ///
    /// Useful when the output is embedded in HTML `<script>` tags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_omitjson::{to_string_with_options, JsonOptions};
    ///
    /// let options = JsonOptions::new().with_escape_html(true);
    /// let json = to_string_with_options("<b>", options).unwrap();
    /// assert_eq!(json, r#""\u003cb\u003e""#);
    /// ```
    #[must_use]
    pub fn with_escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }
}
