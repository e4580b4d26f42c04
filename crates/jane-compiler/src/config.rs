//! Settings shared by the solver and the type renderer.

use jane_core::WordSize;

/// Names of the runtime's composite type templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Templates {
    pub array: String,
    pub slice: String,
    pub map: String,
    pub tuple: String,
    pub func: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            array: "array".to_owned(),
            slice: "slice".to_owned(),
            map: "map".to_owned(),
            tuple: "std::tuple".to_owned(),
            func: "func".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Resolves `int`, `uint`, `intptr` and `uintptr` during rank comparison
    pub(crate) word_size: WordSize,
    pub(crate) templates: Templates,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word_size(mut self, value: WordSize) -> Self {
        self.word_size = value;
        self
    }

    pub fn templates(mut self, value: Templates) -> Self {
        self.templates = value;
        self
    }

    /// Rename the array template, e.g. to a fully qualified `jane::array`.
    pub fn array_template(mut self, name: impl Into<String>) -> Self {
        self.templates.array = name.into();
        self
    }

    pub fn slice_template(mut self, name: impl Into<String>) -> Self {
        self.templates.slice = name.into();
        self
    }

    pub fn map_template(mut self, name: impl Into<String>) -> Self {
        self.templates.map = name.into();
        self
    }

    pub fn tuple_template(mut self, name: impl Into<String>) -> Self {
        self.templates.tuple = name.into();
        self
    }

    pub fn func_template(mut self, name: impl Into<String>) -> Self {
        self.templates.func = name.into();
        self
    }

    pub fn get_word_size(&self) -> WordSize {
        self.word_size
    }

    pub fn get_templates(&self) -> &Templates {
        &self.templates
    }
}
