//! Configuration for HTML rendering

use serde::Deserialize;

/// Line numbering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineNumbers {
    #[default]
    None,
    /// Every line numbered with the normal line style
    Normal,
    /// Every line numbered; each nth line gets the fancy line style
    Fancy(usize),
}

/// Element wrapping the highlighted code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderType {
    #[default]
    Pre,
    Div,
    None,
}

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub line_numbers: LineNumbers,

    /// Number shown on the first line
    pub start_line: usize,

    pub header_type: HeaderType,

    /// Style of the wrapping element
    pub overall_style: String,

    /// Style of normal numbered lines
    pub line_style: String,

    /// Style of every nth line in fancy mode
    pub fancy_line_style: String,

    /// Raw HTML placed before the code; `{LANGUAGE}` and `{VERSION}` are
    /// substituted
    pub header_content: Option<String>,

    /// Raw HTML placed after the code, with the same placeholders
    pub footer_content: Option<String>,

    /// Emit `class` attributes instead of inline styles
    pub use_classes: bool,

    pub tab_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: LineNumbers::None,
            start_line: 1,
            header_type: HeaderType::Pre,
            overall_style: "font-family:monospace;".to_string(),
            line_style: "font-weight: normal; vertical-align:top;".to_string(),
            fancy_line_style: "font-weight: bold; vertical-align:top;".to_string(),
            header_content: None,
            footer_content: None,
            use_classes: false,
            tab_width: 8,
        }
    }
}

impl RenderOptions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_numbers(mut self, line_numbers: LineNumbers) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    pub fn with_start_line(mut self, start_line: usize) -> Self {
        self.start_line = start_line;
        self
    }

    pub fn with_header_type(mut self, header_type: HeaderType) -> Self {
        self.header_type = header_type;
        self
    }

    pub fn with_header_content(mut self, content: impl Into<String>) -> Self {
        self.header_content = Some(content.into());
        self
    }

    pub fn with_footer_content(mut self, content: impl Into<String>) -> Self {
        self.footer_content = Some(content.into());
        self
    }

    pub fn with_classes(mut self, use_classes: bool) -> Self {
        self.use_classes = use_classes;
        self
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderOptions::default();
        assert_eq!(config.line_numbers, LineNumbers::None);
        assert_eq!(config.start_line, 1);
        assert_eq!(config.header_type, HeaderType::Pre);
        assert_eq!(config.tab_width, 8);
        assert!(!config.use_classes);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderOptions::new()
            .with_line_numbers(LineNumbers::Fancy(2))
            .with_start_line(10)
            .with_header_type(HeaderType::Div)
            .with_header_content("head")
            .with_footer_content("foot")
            .with_classes(true)
            .with_tab_width(4);

        assert_eq!(config.line_numbers, LineNumbers::Fancy(2));
        assert_eq!(config.start_line, 10);
        assert_eq!(config.header_type, HeaderType::Div);
        assert_eq!(config.header_content.as_deref(), Some("head"));
        assert_eq!(config.footer_content.as_deref(), Some("foot"));
        assert!(config.use_classes);
        assert_eq!(config.tab_width, 4);
    }

    #[test]
    fn test_line_numbers_from_toml() {
        #[derive(Deserialize)]
        struct Probe {
            a: LineNumbers,
            b: LineNumbers,
        }
        let probe: Probe = toml::from_str("a = \"normal\"\nb = { fancy = 3 }").expect("Should parse");
        assert_eq!(probe.a, LineNumbers::Normal);
        assert_eq!(probe.b, LineNumbers::Fancy(3));
    }
}
