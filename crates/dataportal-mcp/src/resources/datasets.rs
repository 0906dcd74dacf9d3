//! Dataset link resources.
//!
//! `dataportal://{dataset}/{link}` where `link` is `api`, `swagger` or
//! `dataportal`, plus `dataportal://datasets` as a JSON index.

use serde_json::json;

use dataportal::sources::{Dataset, Provider, DATASETS};

use crate::config::{Service, ToolGroup};
use crate::types::{
    McpError, McpResult, ReadResourceResult, ResourceContent, ResourceDefinition,
    ResourceTemplateDefinition,
};

pub const SCHEME: &str = "dataportal://";
pub const INDEX_URI: &str = "dataportal://datasets";

const LINKS: [&str; 3] = ["api", "swagger", "dataportal"];

fn group_of(dataset: &Dataset) -> ToolGroup {
    match dataset.provider {
        Provider::Riksdagen => ToolGroup::Riksdagen,
        Provider::Skatteverket => ToolGroup::Fastigheter,
    }
}

/// Datasets whose tool group is mounted.
pub fn mounted(service: Service) -> impl Iterator<Item = &'static Dataset> {
    DATASETS
        .iter()
        .filter(move |d| service.includes(group_of(d)))
}

fn link_url(dataset: &Dataset, link: &str) -> Option<&'static str> {
    match link {
        "api" => Some(dataset.api_url),
        "swagger" => dataset.swagger_url,
        "dataportal" => Some(dataset.dataportal_url),
        _ => None,
    }
}

fn link_title(dataset: &Dataset, link: &str) -> String {
    match link {
        "api" => format!("{} API base url", dataset.title),
        "swagger" => format!("{} Swagger documentation", dataset.title),
        _ => format!("{} Dataportal documentation", dataset.title),
    }
}

fn link_description(link: &str) -> &'static str {
    match link {
        "api" => "Base URL of the upstream API",
        "swagger" => "Swagger documentation of the upstream API",
        _ => "Direct link to Sveriges Dataportal where this resource is listed",
    }
}

pub fn list_resources(service: Service) -> Vec<ResourceDefinition> {
    let mut resources = vec![ResourceDefinition {
        uri: INDEX_URI.to_string(),
        name: "datasets".to_string(),
        title: Some("Available datasets".to_string()),
        description: Some("Every mounted dataset with its documentation links".to_string()),
        mime_type: Some("application/json".to_string()),
    }];

    for dataset in mounted(service) {
        for link in LINKS {
            if link_url(dataset, link).is_none() {
                continue;
            }
            resources.push(ResourceDefinition {
                uri: format!("{SCHEME}{}/{link}", dataset.key),
                name: format!("{}_{link}", dataset.key),
                title: Some(link_title(dataset, link)),
                description: Some(link_description(link).to_string()),
                mime_type: Some("text/plain".to_string()),
            });
        }
    }
    resources
}

pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
    vec![ResourceTemplateDefinition {
        uri_template: "dataportal://{dataset}/{link}".to_string(),
        name: "Dataset link".to_string(),
        description: Some(
            "Documentation link of a dataset; link is one of api, swagger, dataportal".to_string(),
        ),
        mime_type: Some("text/plain".to_string()),
    }]
}

pub fn read_index(service: Service) -> McpResult<ReadResourceResult> {
    let datasets: Vec<_> = mounted(service)
        .map(|d| {
            json!({
                "key": d.key,
                "title": d.title,
                "api_url": d.api_url,
                "swagger_url": d.swagger_url,
                "dataportal_url": d.dataportal_url,
            })
        })
        .collect();

    Ok(ReadResourceResult {
        contents: vec![ResourceContent {
            uri: INDEX_URI.to_string(),
            mime_type: Some("application/json".to_string()),
            text: Some(serde_json::to_string_pretty(&datasets)?),
        }],
    })
}

pub fn read_link(uri: &str, key: &str, link: &str, service: Service) -> McpResult<ReadResourceResult> {
    let url = mounted(service)
        .find(|d| d.key == key)
        .and_then(|d| link_url(d, link))
        .ok_or_else(|| McpError::ResourceNotFound(uri.to_string()))?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContent {
            uri: uri.to_string(),
            mime_type: Some("text/plain".to_string()),
            text: Some(url.to_string()),
        }],
    })
}
