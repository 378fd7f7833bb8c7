use serde::{Deserialize, Serialize};

use folio_catalog::CatalogRecord;

/// A photographer, addressed by their unique display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photographer {
    /// Display name of the photographer; the natural key
    pub display_name: String,
    /// First name of the photographer
    pub first_name: String,
    /// Last name of the photographer
    pub last_name: String,
    /// Photographic interests, e.g. ["street", "portrait"]
    pub interests: Vec<String>,
}

/// Listing projection of a photographer.
#[derive(Debug, Clone, Serialize)]
pub struct PhotographerDigest {
    pub display_name: String,
    pub link: String,
}

impl CatalogRecord for Photographer {
    type Digest = PhotographerDigest;
    const RESOURCE: &'static str = "photographers";
    const KEY_FIELD: &'static str = "display_name";
    const KEY_MAX_LEN: usize = 16;

    fn key(&self) -> &str {
        &self.display_name
    }

    fn digest(&self) -> PhotographerDigest {
        PhotographerDigest {
            display_name: self.display_name.clone(),
            link: self.location(),
        }
    }
}
