//! File filtering logic for the scanner.

/// Extensions a cover image may carry, compared case-insensitively
pub const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Filters file names to determine if they are catalogable cover images
pub struct ImageFilter {
    /// Dotted suffixes to include, lowercase
    extensions: Vec<String>,
    /// Whether to include hidden files
    include_hidden: bool,
}

impl ImageFilter {
    /// Create a new filter accepting `.jpg`, `.jpeg` and `.png`
    pub fn new() -> Self {
        Self {
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            include_hidden: true,
        }
    }

    /// Include hidden files (starting with .)
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Whether a name is hidden and hidden files are excluded
    pub fn is_excluded_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }

    /// Whether the name ends with one of the accepted extensions
    pub fn has_image_extension(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    /// Check if a file name should be included
    pub fn should_include(&self, name: &str) -> bool {
        !self.is_excluded_hidden(name) && self.has_image_extension(name)
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new()
    }
}
