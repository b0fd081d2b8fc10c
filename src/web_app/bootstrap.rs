// web_app/bootstrap.rs - Hand the server's catalog and config to the browser
//
// Queries run in the browser after hydration, so the browser needs the
// same catalog and settings the server rendered with. The server writes
// them into the page shell as a JSON script element; the hydrate entry
// point reads it back and installs both globals before mounting.

use serde::{Deserialize, Serialize};

use crate::web_app::catalog::{self, Catalog};
use crate::web_app::config::{self, StorefrontConfig};
use crate::web_app::error::CatalogError;
use crate::web_app::model::CatalogItem;

/// Id of the `<script type="application/json">` element in the shell
pub const BOOTSTRAP_ELEMENT_ID: &str = "storefront-bootstrap";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientBootstrap {
    pub config: StorefrontConfig,
    pub catalog: Vec<CatalogItem>,
}

impl ClientBootstrap {
    /// Snapshot of whatever the server has installed
    pub fn current() -> Self {
        Self {
            config: config::get().clone(),
            catalog: catalog::get().items().to_vec(),
        }
    }

    /// JSON safe to place inside a script element
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the catalog, then install both globals
    pub fn install(self) -> Result<(), CatalogError> {
        let catalog = Catalog::new(self.catalog)?;
        config::init(self.config);
        catalog::init(catalog);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Fixture, SearchCatalogTable};

    #[test]
    fn test_script_json_cannot_close_the_element() {
        let mut items = SearchCatalogTable::rows();
        items[0].name = "Headphones</script><script>alert(1)".to_string();
        let bootstrap = ClientBootstrap {
            config: StorefrontConfig::default(),
            catalog: items,
        };

        let json = bootstrap.to_script_json().unwrap();
        assert!(!json.contains("</script>"));

        let parsed = ClientBootstrap::from_json(&json).unwrap();
        assert_eq!(parsed, bootstrap);
    }

    #[test]
    fn test_invalid_catalog_is_not_installed() {
        let mut items = SearchCatalogTable::rows();
        items[1].id = items[0].id.clone();
        let bootstrap = ClientBootstrap {
            config: StorefrontConfig::default(),
            catalog: items,
        };
        assert!(matches!(
            bootstrap.install(),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            ClientBootstrap::from_json("{\"config\":"),
            Err(CatalogError::Json(_))
        ));
    }
}
