//! Configuration types for classdoc.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every section and option falls back to its default when absent.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and parser settings.
//! - [`RenderConfig`] - Override policy, constructor name, category labels and class order.
//! - [`ParserConfig`] - Subclass operation name and source file extensions.
//!
//! # Example
//!
//! ```
//! # use classdoc::config::{AppConfig, ClassOrder};
//! let config = AppConfig::default();
//! assert_eq!(config.render().constructor(), "init");
//! assert_eq!(config.render().class_order(), ClassOrder::Alphabetical);
//! assert_eq!(config.parser().subclass_method(), "subclass");
//! ```

use serde::Deserialize;

use classdoc_parser::ParseConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Parser configuration section.
    #[serde(default)]
    parser: ParserConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `render` - Suppression policy and output layout.
    /// * `parser` - Source recognition settings.
    pub fn new(render: RenderConfig, parser: ParserConfig) -> Self {
        Self { render, parser }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the parser configuration.
    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }
}

/// Order in which classes appear in the contents and the body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassOrder {
    /// Sorted by class name, case-sensitive.
    #[default]
    Alphabetical,
    /// Order in which class names were first declared.
    Declaration,
}

/// Rendering policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render undocumented members that override an ancestor member.
    show_undocumented_overrides: bool,

    /// Member name treated as the constructor.
    constructor: String,

    fields_label: String,

    methods_label: String,

    class_order: ClassOrder,
}

impl RenderConfig {
    /// Returns whether undocumented overrides are rendered.
    pub fn show_undocumented_overrides(&self) -> bool {
        self.show_undocumented_overrides
    }

    /// Returns the constructor member name.
    pub fn constructor(&self) -> &str {
        &self.constructor
    }

    /// Returns the heading used for the field category.
    pub fn fields_label(&self) -> &str {
        &self.fields_label
    }

    /// Returns the heading used for the method category.
    pub fn methods_label(&self) -> &str {
        &self.methods_label
    }

    pub fn class_order(&self) -> ClassOrder {
        self.class_order
    }

    /// Set whether undocumented overrides are rendered.
    pub fn with_show_undocumented_overrides(mut self, show: bool) -> Self {
        self.show_undocumented_overrides = show;
        self
    }

    /// Set the constructor member name.
    pub fn with_constructor(mut self, constructor: impl Into<String>) -> Self {
        self.constructor = constructor.into();
        self
    }

    /// Set the category headings.
    pub fn with_labels(mut self, fields: impl Into<String>, methods: impl Into<String>) -> Self {
        self.fields_label = fields.into();
        self.methods_label = methods.into();
        self
    }

    pub fn with_class_order(mut self, class_order: ClassOrder) -> Self {
        self.class_order = class_order;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_undocumented_overrides: false,
            constructor: "init".to_string(),
            fields_label: "Fields".to_string(),
            methods_label: "Methods".to_string(),
            class_order: ClassOrder::default(),
        }
    }
}

/// Source recognition settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Operation name in `local B = A:<name>(...)`.
    subclass_method: String,

    /// Extensions of the files picked up from input directories, without the dot.
    extensions: Vec<String>,
}

impl ParserConfig {
    /// Creates a new [`ParserConfig`].
    ///
    /// # Arguments
    ///
    /// * `subclass_method` - Operation name that creates a subclass.
    /// * `extensions` - File extensions read from input directories.
    pub fn new(subclass_method: impl Into<String>, extensions: Vec<String>) -> Self {
        Self {
            subclass_method: subclass_method.into(),
            extensions,
        }
    }

    pub fn subclass_method(&self) -> &str {
        &self.subclass_method
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns `true` if `extension` is one of the configured extensions.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }

    /// The narrowed configuration handed to the parser crate.
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.subclass_method.as_str())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new("subclass", vec!["lua".to_string()])
    }
}
