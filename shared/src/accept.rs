use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Image formats the drop-zone lets through.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum ImageKind {
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    #[strum(serialize = "image/png")]
    Png,
}

impl ImageKind {
    pub fn mime(self) -> &'static str {
        self.into()
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ImageKind::Jpeg => &[".jpg", ".jpeg"],
            ImageKind::Png => &[".png"],
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim();
        Self::iter().find(|kind| kind.mime().eq_ignore_ascii_case(mime))
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::iter().find(|kind| kind.extensions().iter().any(|ext| name.ends_with(ext)))
    }

    /// A file passes when either its reported type or its extension matches.
    pub fn detect(mime: &str, name: &str) -> Option<Self> {
        Self::from_mime(mime).or_else(|| Self::from_file_name(name))
    }
}

/// Value for the `accept` attribute of the hidden file input.
pub fn accept_attribute() -> String {
    ImageKind::iter()
        .flat_map(|kind| std::iter::once(kind.mime()).chain(kind.extensions().iter().copied()))
        .collect::<Vec<_>>()
        .join(",")
}
