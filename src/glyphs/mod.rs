//! Glyph Catalog
//!
//! A static lookup of Unicode characters for box drawing, shading, shapes,
//! dots, arrows and Braille patterns, addressed as category -> name.
//!
//! Braille is keyed by integer instead of name: index `i` in `1..=255`
//! maps to U+2800 + `i`. Index 0 (the blank pattern) is not part of the
//! catalog.

mod table;

/// A glyph category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Main,
    PipeAscii,
    PipeExtended,
    PipeBlocks,
    PipeExtras,
    Dots,
    Arrows,
    Braille,
}

impl Category {
    /// Every category, in catalog order
    pub const ALL: [Category; 8] = [
        Category::Main,
        Category::PipeAscii,
        Category::PipeExtended,
        Category::PipeBlocks,
        Category::PipeExtras,
        Category::Dots,
        Category::Arrows,
        Category::Braille,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Main => "MAIN",
            Category::PipeAscii => "PIPE_ASCII",
            Category::PipeExtended => "PIPE_EXTENDED",
            Category::PipeBlocks => "PIPE_BLOCKS",
            Category::PipeExtras => "PIPE_EXTRAS",
            Category::Dots => "DOTS",
            Category::Arrows => "ARROWS",
            Category::Braille => "BRAILLE",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The named entries of this category; empty for Braille
    fn named(self) -> &'static [(&'static str, char)] {
        match self {
            Category::Main => table::MAIN,
            Category::PipeAscii => table::PIPE_ASCII,
            Category::PipeExtended => table::PIPE_EXTENDED,
            Category::PipeBlocks => table::PIPE_BLOCKS,
            Category::PipeExtras => table::PIPE_EXTRAS,
            Category::Dots => table::DOTS,
            Category::Arrows => table::ARROWS,
            Category::Braille => &[],
        }
    }
}

/// First code point of the Unicode Braille Patterns block
pub const BRAILLE_BASE: u32 = 0x2800;

/// Look up a named glyph
pub fn glyph(category: Category, name: &str) -> Option<char> {
    category
        .named()
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, c)| c)
}

/// The Braille pattern for `index`; `None` for 0
pub fn braille(index: u8) -> Option<char> {
    if index == 0 {
        return None;
    }
    char::from_u32(BRAILLE_BASE + u32::from(index))
}

/// String-keyed lookup, e.g. `lookup("MAIN", "BLOCK")` or `lookup("BRAILLE", "5")`
pub fn lookup(category: &str, key: &str) -> Option<char> {
    match Category::from_name(category)? {
        Category::Braille => key.parse::<u8>().ok().and_then(braille),
        named => glyph(named, key),
    }
}

/// All entries of a category in catalog order, Braille keys as decimal
pub fn entries(category: Category) -> Vec<(String, char)> {
    match category {
        Category::Braille => (1..=u8::MAX)
            .filter_map(|i| braille(i).map(|c| (i.to_string(), c)))
            .collect(),
        named => named
            .named()
            .iter()
            .map(|&(n, c)| (n.to_string(), c))
            .collect(),
    }
}
