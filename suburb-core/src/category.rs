//! The five fixed amenity categories and a container holding one value per
//! category.
//!
//! The enum offers compile-time safety for category lookups, while
//! [`PerCategory`] replaces free-form maps so that a missing or unknown
//! category can never slip through.
//!
//! # Examples
//! ```
//! use suburb_core::{Category, PerCategory};
//!
//! assert_eq!(Category::Transport.as_str(), "transport");
//!
//! let counts = PerCategory::from_fn(|category| match category {
//!     Category::Recreation => 3_u32,
//!     _ => 0,
//! });
//! assert_eq!(counts.get(Category::Recreation), 3);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Broad grouping of a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Parks, beaches, sports grounds and nightlife.
    Recreation,
    /// Libraries, community centres and other shared spaces.
    Community,
    /// Stations, stops and other public transport.
    Transport,
    /// Schools, colleges and universities.
    Education,
    /// Shops, healthcare and essential services.
    Utility,
}

impl Category {
    /// Every category in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Recreation,
        Self::Community,
        Self::Transport,
        Self::Education,
        Self::Utility,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use suburb_core::Category;
    ///
    /// assert_eq!(Category::Education.as_str(), "education");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recreation => "recreation",
            Self::Community => "community",
            Self::Transport => "transport",
            Self::Education => "education",
            Self::Utility => "utility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recreation" => Ok(Self::Recreation),
            "community" => Ok(Self::Community),
            "transport" => Ok(Self::Transport),
            "education" => Ok(Self::Education),
            "utility" => Ok(Self::Utility),
            _ => Err(UnknownCategory(s.to_owned())),
        }
    }
}

/// One value for each [`Category`].
///
/// When deserialised, absent categories take `T::default()` and unknown keys
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        default,
        deny_unknown_fields,
        bound(deserialize = "T: serde::Deserialize<'de> + Default")
    )
)]
pub struct PerCategory<T> {
    /// Value for [`Category::Recreation`].
    pub recreation: T,
    /// Value for [`Category::Community`].
    pub community: T,
    /// Value for [`Category::Transport`].
    pub transport: T,
    /// Value for [`Category::Education`].
    pub education: T,
    /// Value for [`Category::Utility`].
    pub utility: T,
}

impl<T> PerCategory<T> {
    /// Build a container by evaluating `f` once per category, in
    /// [`Category::ALL`] order.
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            recreation: f(Category::Recreation),
            community: f(Category::Community),
            transport: f(Category::Transport),
            education: f(Category::Education),
            utility: f(Category::Utility),
        }
    }

    /// Borrow the value stored for `category`.
    #[must_use]
    pub const fn get_ref(&self, category: Category) -> &T {
        match category {
            Category::Recreation => &self.recreation,
            Category::Community => &self.community,
            Category::Transport => &self.transport,
            Category::Education => &self.education,
            Category::Utility => &self.utility,
        }
    }

    /// Mutably borrow the value stored for `category`.
    pub const fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Recreation => &mut self.recreation,
            Category::Community => &mut self.community,
            Category::Transport => &mut self.transport,
            Category::Education => &mut self.education,
            Category::Utility => &mut self.utility,
        }
    }

    /// Apply `f` to every value, producing a new container.
    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerCategory<U> {
        PerCategory::from_fn(|category| f(self.get_ref(category)))
    }
}

impl<T: Copy> PerCategory<T> {
    /// Return the value stored for `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> T {
        *self.get_ref(category)
    }

    /// Iterate over `(category, value)` pairs in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, T)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}
