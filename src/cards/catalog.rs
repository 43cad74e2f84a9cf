//! Image catalog: which pictures a round is dealt from.
//!
//! Loading pictures from disk belongs to the host. The core only sees
//! opaque `ImageId`s grouped by `Category`, supplied through the
//! `AssetProvider` trait. `ImageCatalog` is the in-memory provider.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a card face (usually an asset path).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(pub String);

impl ImageId {
    /// Create a new image ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Picture themes the player chooses from on the start menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Animals,
    Cars,
    Foods,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 3] = [Category::Animals, Category::Cars, Category::Foods];

    /// Category for a start-menu index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Animals => "Animals",
            Category::Cars => "Cars",
            Category::Foods => "Foods",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Supplies card faces for a category.
///
/// Implementations return images in a stable order; the session deals the
/// first `pairs_per_round` of them.
pub trait AssetProvider {
    fn images(&self, category: Category) -> Vec<ImageId>;
}

/// In-memory asset provider.
///
/// ```
/// use memory_match::cards::{AssetProvider, Category, ImageCatalog};
///
/// let catalog = ImageCatalog::new()
///     .with_images(Category::Cars, ["cars/a.jpg", "cars/b.jpg"]);
///
/// assert_eq!(catalog.images(Category::Cars).len(), 2);
/// assert!(catalog.images(Category::Foods).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ImageCatalog {
    images: FxHashMap<Category, Vec<ImageId>>,
}

impl ImageCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append images to a category (builder pattern).
    #[must_use]
    pub fn with_images<I, S>(mut self, category: Category, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(category, images);
        self
    }

    /// Append images to a category.
    pub fn register<I, S>(&mut self, category: Category, images: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images
            .entry(category)
            .or_default()
            .extend(images.into_iter().map(ImageId::new));
    }

    /// Catalog with `count` placeholder images per category, named the
    /// way the bundled assets are laid out (`Assets/<Category>/<n>.jpg`).
    #[must_use]
    pub fn placeholder(count: usize) -> Self {
        let mut catalog = Self::new();
        for category in Category::ALL {
            catalog.register(
                category,
                (0..count).map(|n| format!("Assets/{}/{}.jpg", category, n)),
            );
        }
        catalog
    }

    /// Number of images registered for a category.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.images.get(&category).map_or(0, Vec::len)
    }

    /// Check if the catalog holds no images at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.values().all(Vec::is_empty)
    }
}

impl AssetProvider for ImageCatalog {
    fn images(&self, category: Category) -> Vec<ImageId> {
        self.images.get(&category).cloned().unwrap_or_default()
    }
}
