/// How a list-valued field is written as a single block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `A, B, C`
    Comma,
    /// One entry per line.
    Newline,
    /// Paragraphs separated by an empty line.
    BlankLine,
}

impl Delimiter {
    fn joiner(self) -> &'static str {
        match self {
            Delimiter::Comma => ", ",
            Delimiter::Newline => "\n",
            Delimiter::BlankLine => "\n\n",
        }
    }
}

/// A named text-to-list convention used by the admin forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListField {
    pub name: &'static str,
    pub delimiter: Delimiter,
}

pub const TAGS: ListField = ListField {
    name: "tags",
    delimiter: Delimiter::Comma,
};

pub const FEATURES: ListField = ListField {
    name: "features",
    delimiter: Delimiter::Newline,
};

pub const GALLERY: ListField = ListField {
    name: "gallery",
    delimiter: Delimiter::Newline,
};

pub const ABOUT_PARAGRAPHS: ListField = ListField {
    name: "about.description",
    delimiter: Delimiter::BlankLine,
};

pub const CURRENTLY_LEARNING: ListField = ListField {
    name: "currentlyLearning",
    delimiter: Delimiter::Comma,
};

impl ListField {
    /// Splits form text into entries. Entries are trimmed and empty ones
    /// dropped; order is preserved.
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = text.replace("\r\n", "\n");

        let parts: Vec<&str> = match self.delimiter {
            Delimiter::Comma => text.split(',').collect(),
            Delimiter::Newline => text.split('\n').collect(),
            Delimiter::BlankLine => text.split("\n\n").collect(),
        };

        parts
            .into_iter()
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Inverse of [`split`](Self::split), used to prefill a form.
    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> String {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(self.delimiter.joiner())
    }
}
