//! Qualified tool names
//!
//! Remote tools are exposed to the model as `mcp_<server>_<tool>`, with every
//! character outside `[A-Za-z0-9_-]` replaced by `_` in both parts.

pub const QUALIFIED_PREFIX: &str = "mcp_";

/// Replace every character outside `[A-Za-z0-9_-]` with `_`
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// The name a remote tool is offered to the model under
pub fn qualify(provider_id: &str, tool_name: &str) -> String {
    format!("{}{}_{}", QUALIFIED_PREFIX, sanitize(provider_id), sanitize(tool_name))
}

/// Description shown to the model, tagged with the owning server
pub fn describe(provider_id: &str, tool_name: &str, description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => format!("[{}] {}", provider_id, text),
        _ => format!("[{}] MCP tool: {}", provider_id, tool_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("add_numbers"), "add_numbers");
        assert_eq!(sanitize("my-server"), "my-server");
        assert_eq!(sanitize("fs.read file"), "fs_read_file");
        assert_eq!(sanitize("héllo/wörld"), "h_llo_w_rld");
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("simple", "greet"), "mcp_simple_greet");
        assert_eq!(qualify("my server", "tools/list.all"), "mcp_my_server_tools_list_all");
    }

    #[test]
    fn test_qualify_is_deterministic() {
        assert_eq!(qualify("a.b", "c"), qualify("a.b", "c"));
    }

    #[test]
    fn test_distinct_raw_names_can_collide() {
        // "a.b" and "a_b" sanitize to the same server id
        assert_eq!(qualify("a.b", "x"), qualify("a_b", "x"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("simple", "greet", Some("Says hi")), "[simple] Says hi");
        assert_eq!(describe("simple", "greet", None), "[simple] MCP tool: greet");
        assert_eq!(describe("simple", "greet", Some("")), "[simple] MCP tool: greet");
    }
}
