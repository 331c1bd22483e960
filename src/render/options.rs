/// A rendering format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum RenderFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON.
    Json,
}

/// Rendering options.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    format: RenderFormat,
    verbose: bool,
    color: bool,
}

impl RenderOptions {
    /// Creates rendering options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a rendering format.
    pub const fn format(&self) -> RenderFormat {
        self.format
    }

    /// Returns whether unchanged elements and documents are rendered.
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns whether text output is colored.
    pub const fn color(&self) -> bool {
        self.color
    }

    /// Sets a rendering format.
    pub const fn set_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets whether unchanged elements and documents are rendered.
    pub const fn set_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets whether text output is colored.
    pub const fn set_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
