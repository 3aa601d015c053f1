use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConverterError;

/// A language the converter knows how to talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    JavaScript,
    Python,
    Java,
    Cpp,
    CSharp,
    Go,
    Rust,
}

impl LanguageTag {
    pub fn all() -> &'static [LanguageTag] {
        &[
            LanguageTag::JavaScript,
            LanguageTag::Python,
            LanguageTag::Java,
            LanguageTag::Cpp,
            LanguageTag::CSharp,
            LanguageTag::Go,
            LanguageTag::Rust,
        ]
    }

    /// Wire identifier, as sent by the client and embedded in prompts.
    pub fn id(&self) -> &'static str {
        match self {
            LanguageTag::JavaScript => "javascript",
            LanguageTag::Python => "python",
            LanguageTag::Java => "java",
            LanguageTag::Cpp => "cpp",
            LanguageTag::CSharp => "csharp",
            LanguageTag::Go => "go",
            LanguageTag::Rust => "rust",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LanguageTag::JavaScript => "JavaScript",
            LanguageTag::Python => "Python",
            LanguageTag::Java => "Java",
            LanguageTag::Cpp => "C++",
            LanguageTag::CSharp => "C#",
            LanguageTag::Go => "Go",
            LanguageTag::Rust => "Rust",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            LanguageTag::JavaScript => "js",
            LanguageTag::Python => "py",
            LanguageTag::Java => "java",
            LanguageTag::Cpp => "cpp",
            LanguageTag::CSharp => "cs",
            LanguageTag::Go => "go",
            LanguageTag::Rust => "rs",
        }
    }

    /// Highlighting mode for the editor widget. Languages without a
    /// dedicated grammar share the default mode.
    pub fn syntax_mode(&self) -> SyntaxMode {
        match self {
            LanguageTag::JavaScript => SyntaxMode::JavaScript,
            LanguageTag::Python => SyntaxMode::Python,
            LanguageTag::Java => SyntaxMode::Java,
            LanguageTag::Cpp => SyntaxMode::Cpp,
            LanguageTag::CSharp | LanguageTag::Go | LanguageTag::Rust => SyntaxMode::DEFAULT,
        }
    }

    /// Filename shown in the editor header, e.g. `python.py`.
    pub fn file_label(&self) -> String {
        format!("{}.{}", self.id(), self.extension())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LanguageTag {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageTag::all()
            .iter()
            .copied()
            .find(|lang| lang.id() == s)
            .ok_or_else(|| ConverterError::Validation(format!("Unsupported language: {}", s)))
    }
}

/// Syntax highlighting grammar understood by the editor widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxMode {
    JavaScript,
    Python,
    Java,
    Cpp,
}

impl SyntaxMode {
    pub const DEFAULT: SyntaxMode = SyntaxMode::JavaScript;

    pub fn label(&self) -> &'static str {
        match self {
            SyntaxMode::JavaScript => "JavaScript",
            SyntaxMode::Python => "Python",
            SyntaxMode::Java => "Java",
            SyntaxMode::Cpp => "C++",
        }
    }
}

impl Default for SyntaxMode {
    fn default() -> Self {
        SyntaxMode::DEFAULT
    }
}
