//! Tool registration and dispatch.

use serde_json::Value;

use dataportal::Diagnostics;

use crate::config::{Service, ToolGroup};
use crate::context::ToolContext;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{
    riksdagen_fetch_document, riksdagen_kalender_fetch, riksdagen_kalender_list,
    riksdagen_ledamot_list, riksdagen_list_documents, skatteverket_get_typkod,
    skatteverket_list_fastighetsskatt, skatteverket_list_typkoder,
    skatteverket_search_fastighetsskatt, skatteverket_typkod_description,
};

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools(service: Service) -> Vec<ToolDefinition> {
        let mut tools = Vec::new();
        if service.includes(ToolGroup::Riksdagen) {
            tools.extend([
                riksdagen_list_documents::definition(),
                riksdagen_fetch_document::definition(),
                riksdagen_ledamot_list::definition(),
                riksdagen_kalender_list::definition(),
                riksdagen_kalender_fetch::definition(),
            ]);
        }
        if service.includes(ToolGroup::Fastigheter) {
            tools.extend([
                skatteverket_get_typkod::definition(),
                skatteverket_typkod_description::definition(),
                skatteverket_list_typkoder::definition(),
                skatteverket_search_fastighetsskatt::definition(),
                skatteverket_list_fastighetsskatt::definition(),
            ]);
        }
        tools
    }

    /// Group a tool belongs to, judged by its name prefix.
    pub fn group_of(name: &str) -> Option<ToolGroup> {
        if name.starts_with("riksdagen_") {
            Some(ToolGroup::Riksdagen)
        } else if name.starts_with("skatteverket_") {
            Some(ToolGroup::Fastigheter)
        } else {
            None
        }
    }

    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        ctx: &ToolContext,
        log: &dyn Diagnostics,
    ) -> McpResult<ToolCallResult> {
        let mounted = Self::group_of(name).is_some_and(|group| ctx.service.includes(group));
        if !mounted {
            return Err(McpError::ToolNotFound(name.to_string()));
        }

        let args = match arguments {
            None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
            Some(args) => args,
        };

        match name {
            "riksdagen_list_documents" => riksdagen_list_documents::execute(args, ctx, log).await,
            "riksdagen_fetch_document" => riksdagen_fetch_document::execute(args, ctx, log).await,
            "riksdagen_ledamot_list" => riksdagen_ledamot_list::execute(args, ctx, log).await,
            "riksdagen_kalender_list" => riksdagen_kalender_list::execute(args, ctx, log).await,
            "riksdagen_kalender_fetch" => riksdagen_kalender_fetch::execute(args, ctx, log).await,
            "skatteverket_get_taxeringsenhet_typkod" => {
                skatteverket_get_typkod::execute(args, ctx, log).await
            }
            "skatteverket_get_taxeringsenhet_typkod_description" => {
                skatteverket_typkod_description::execute(args, ctx, log).await
            }
            "skatteverket_list_taxeringsenhet_typkoder" => {
                skatteverket_list_typkoder::execute(args, ctx, log).await
            }
            "skatteverket_search_fastighetsskatt_avgift" => {
                skatteverket_search_fastighetsskatt::execute(args, ctx, log).await
            }
            "skatteverket_list_fastighetsskatt_avgift" => {
                skatteverket_list_fastighetsskatt::execute(args, ctx, log).await
            }
            _ => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_filters_tools() {
        assert_eq!(ToolRegistry::list_tools(Service::All).len(), 10);

        let riksdagen = ToolRegistry::list_tools(Service::Riksdagen);
        assert_eq!(riksdagen.len(), 5);
        assert!(riksdagen.iter().all(|t| t.name.starts_with("riksdagen_")));

        let fastigheter = ToolRegistry::list_tools(Service::Fastigheter);
        assert!(fastigheter.iter().all(|t| t.name.starts_with("skatteverket_")));
    }

    #[test]
    fn test_every_listed_tool_has_a_group_and_object_schema() {
        for tool in ToolRegistry::list_tools(Service::All) {
            assert!(ToolRegistry::group_of(&tool.name).is_some(), "{}", tool.name);
            assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
        }
    }
}
