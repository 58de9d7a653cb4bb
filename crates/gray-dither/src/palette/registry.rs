//! Id-addressed registry of named palettes.
//!
//! The registry is the only way the application selects a palette. It is
//! built once (built-ins plus any configured additions) and then shared
//! read-only.

use std::collections::BTreeMap;
use std::sync::Arc;

use rgb::RGB8;

use super::error::PaletteError;
use super::palette::Palette;

/// Id of the palette used when none is requested.
pub const DEFAULT_PALETTE_ID: u32 = 1;

/// A palette with its registry id and display name.
#[derive(Debug, Clone)]
pub struct NamedPalette {
    /// Selection id (as given on the command line)
    pub id: u32,
    /// Short human-readable name
    pub name: String,
    /// The palette itself, shared with every frame task
    pub palette: Arc<Palette>,
}

/// Immutable lookup table from palette id to [`NamedPalette`].
///
/// # Example
///
/// ```
/// use gray_dither::{PaletteRegistry, DEFAULT_PALETTE_ID};
///
/// let registry = PaletteRegistry::builtin();
/// let default = registry.resolve(None).unwrap();
/// assert_eq!(default.id, DEFAULT_PALETTE_ID);
/// assert_eq!(default.name, "mono");
///
/// let gameboy = registry.resolve(Some(3)).unwrap();
/// assert_eq!(gameboy.palette.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    entries: BTreeMap<u32, NamedPalette>,
    default_id: u32,
}

const fn rgb(r: u8, g: u8, b: u8) -> RGB8 {
    RGB8 { r, g, b }
}

const BUILTIN: &[(u32, &str, &[RGB8])] = &[
    (1, "mono", &[rgb(0, 0, 0), rgb(255, 255, 255)]),
    (
        2,
        "greys",
        &[
            rgb(51, 51, 51),
            rgb(102, 102, 102),
            rgb(153, 153, 153),
            rgb(204, 204, 204),
        ],
    ),
    (
        3,
        "gameboy",
        &[
            rgb(8, 24, 32),
            rgb(52, 104, 86),
            rgb(136, 192, 112),
            rgb(224, 248, 208),
        ],
    ),
    (4, "retro", &[rgb(40, 40, 40), rgb(51, 255, 51)]),
    (
        5,
        "aqua",
        &[
            rgb(0, 128, 191),
            rgb(0, 172, 223),
            rgb(85, 208, 255),
            rgb(124, 232, 255),
        ],
    ),
    (
        6,
        "warm",
        &[
            rgb(100, 69, 54),
            rgb(178, 103, 94),
            rgb(196, 163, 129),
            rgb(238, 241, 189),
        ],
    ),
];

impl PaletteRegistry {
    /// An empty registry whose default is [`DEFAULT_PALETTE_ID`].
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            default_id: DEFAULT_PALETTE_ID,
        }
    }

    /// Registry holding the six built-in palettes.
    ///
    /// | id | name    | colors |
    /// |----|---------|--------|
    /// | 1  | mono    | 2      |
    /// | 2  | greys   | 4      |
    /// | 3  | gameboy | 4      |
    /// | 4  | retro   | 2      |
    /// | 5  | aqua    | 4      |
    /// | 6  | warm    | 4      |
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for &(id, name, colors) in BUILTIN {
            // Built-in tables are well-formed; a failure here is a bug in BUILTIN.
            let palette = Palette::new(colors).unwrap_or_else(|e| {
                panic!("built-in palette {name} is invalid: {e}");
            });
            registry.entries.insert(
                id,
                NamedPalette {
                    id,
                    name: name.to_string(),
                    palette: Arc::new(palette),
                },
            );
        }
        registry
    }

    /// Add a palette under a new id.
    ///
    /// # Errors
    ///
    /// [`PaletteError::DuplicateId`] if `id` is taken.
    pub fn register(
        &mut self,
        id: u32,
        name: impl Into<String>,
        palette: Palette,
    ) -> Result<(), PaletteError> {
        if self.entries.contains_key(&id) {
            return Err(PaletteError::DuplicateId(id));
        }
        self.entries.insert(
            id,
            NamedPalette {
                id,
                name: name.into(),
                palette: Arc::new(palette),
            },
        );
        Ok(())
    }

    /// Change which id [`resolve(None)`](Self::resolve) returns.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownId`] if nothing is registered under `id`.
    pub fn set_default(&mut self, id: u32) -> Result<(), PaletteError> {
        if !self.entries.contains_key(&id) {
            return Err(PaletteError::UnknownId(id));
        }
        self.default_id = id;
        Ok(())
    }

    /// Id used when no palette is requested.
    #[inline]
    pub fn default_id(&self) -> u32 {
        self.default_id
    }

    /// Look up a palette by id.
    pub fn get(&self, id: u32) -> Option<&NamedPalette> {
        self.entries.get(&id)
    }

    /// Look up a palette by name (case-insensitive).
    pub fn by_name(&self, name: &str) -> Option<&NamedPalette> {
        self.entries
            .values()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Resolve a requested id, falling back to the default when `None`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownId`] if the requested (or default) id is not
    /// registered.
    pub fn resolve(&self, requested: Option<u32>) -> Result<&NamedPalette, PaletteError> {
        let id = requested.unwrap_or(self.default_id);
        self.get(id).ok_or(PaletteError::UnknownId(id))
    }

    /// Iterate over all entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedPalette> {
        self.entries.values()
    }

    /// Number of registered palettes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no palettes are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
