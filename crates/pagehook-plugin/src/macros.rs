//! Convenience macros for plugin development.

/// Builds a [`PluginInfo`](crate::registry::PluginInfo).
///
/// The plugin starts enabled with priority 100 unless a priority is given.
///
/// # Example
/// ```rust,ignore
/// let info = plugin_info!(
///     id: "opengraph",
///     name: "OpenGraph",
///     version: "0.1.0",
///     description: "Adds og:* meta tags",
///     author: "pagehook"
/// );
/// ```
#[macro_export]
macro_rules! plugin_info {
    (
        id: $id:expr,
        name: $name:expr,
        version: $version:expr,
        description: $desc:expr,
        author: $author:expr
    ) => {
        $crate::plugin_info!(
            id: $id,
            name: $name,
            version: $version,
            description: $desc,
            author: $author,
            priority: 100
        )
    };
    (
        id: $id:expr,
        name: $name:expr,
        version: $version:expr,
        description: $desc:expr,
        author: $author:expr,
        priority: $priority:expr
    ) => {
        $crate::prelude::PluginInfo {
            id: $id.to_string(),
            name: $name.to_string(),
            version: $version.to_string(),
            description: $desc.to_string(),
            author: $author.to_string(),
            hooks: Vec::new(),
            enabled: true,
            priority: $priority,
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_plugin_info_defaults() {
        let info = plugin_info!(
            id: "x",
            name: "X",
            version: "1.0.0",
            description: "d",
            author: "a"
        );
        assert!(info.enabled);
        assert_eq!(info.priority, 100);
        assert!(info.hooks.is_empty());
    }
}
