//! Resource registration and dispatch.

use crate::config::Service;
use crate::types::{
    McpError, McpResult, ReadResourceResult, ResourceDefinition, ResourceTemplateDefinition,
};

use super::datasets;

pub struct ResourceRegistry;

impl ResourceRegistry {
    pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
        datasets::list_templates()
    }

    pub fn list_resources(service: Service) -> Vec<ResourceDefinition> {
        datasets::list_resources(service)
    }

    pub fn read(uri: &str, service: Service) -> McpResult<ReadResourceResult> {
        if uri == datasets::INDEX_URI {
            return datasets::read_index(service);
        }

        let rest = uri
            .strip_prefix(datasets::SCHEME)
            .ok_or_else(|| McpError::ResourceNotFound(uri.to_string()))?;

        match rest.split_once('/') {
            Some((key, link)) if !key.is_empty() && !link.contains('/') => {
                datasets::read_link(uri, key, link, service)
            }
            _ => Err(McpError::InvalidParams(format!(
                "Dataset URI must be dataportal://{{dataset}}/{{link}}, got {uri}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_resource_reads() {
        for resource in ResourceRegistry::list_resources(Service::All) {
            let read = ResourceRegistry::read(&resource.uri, Service::All).unwrap();
            assert_eq!(read.contents.len(), 1, "{}", resource.uri);
        }
    }

    #[test]
    fn test_link_resolves_to_url() {
        let read = ResourceRegistry::read("dataportal://typkod/dataportal", Service::All).unwrap();
        assert_eq!(
            read.contents[0].text.as_deref(),
            Some("https://www.dataportal.se/datasets/6_67905")
        );
    }

    #[test]
    fn test_unmounted_and_unknown_links() {
        assert!(matches!(
            ResourceRegistry::read("dataportal://typkod/api", Service::Riksdagen),
            Err(McpError::ResourceNotFound(_))
        ));
        assert!(matches!(
            ResourceRegistry::read("dataportal://dokumentlista/swagger", Service::All),
            Err(McpError::ResourceNotFound(_))
        ));
        assert!(matches!(
            ResourceRegistry::read("https://data.riksdagen.se/dokumentlista/", Service::All),
            Err(McpError::ResourceNotFound(_))
        ));
        assert!(matches!(
            ResourceRegistry::read("dataportal://typkod", Service::All),
            Err(McpError::InvalidParams(_))
        ));
    }
}
