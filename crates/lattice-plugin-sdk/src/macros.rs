//! Convenience macros for plugin development.

/// Macro for creating a plugin info struct.
///
/// # Example
/// ```rust,ignore
/// let info = plugin_info!(
///     id: "my-plugin",
///     name: "My Plugin",
///     version: "1.0.0",
///     description: "Does things",
///     author: "Dev"
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
        $crate::prelude::PluginInfo {
            id: $id.to_string(),
            name: $name.to_string(),
            version: $version.to_string(),
            description: $desc.to_string(),
            author: $author.to_string(),
            order: 0,
        }
    };
    (
        id: $id:expr,
        name: $name:expr,
        version: $version:expr,
        description: $desc:expr,
        author: $author:expr,
        order: $order:expr
    ) => {
        $crate::prelude::PluginInfo {
            id: $id.to_string(),
            name: $name.to_string(),
            version: $version.to_string(),
            description: $desc.to_string(),
            author: $author.to_string(),
            order: $order,
        }
    };
}

/// Macro for quickly building a `HookContext`.
///
/// # Example
/// ```rust,ignore
/// let ctx = hook_data!("register-route", {
///     "path" => json!("/files"),
///     "exact" => json!(true),
/// });
/// ```
#[macro_export]
macro_rules! hook_data {
    ($hook:expr) => {
        $crate::prelude::HookContext::new($hook)
    };
    ($hook:expr, { $($key:expr => $value:expr),* $(,)? }) => {{
        let mut ctx = $crate::prelude::HookContext::new($hook);
        $(
            ctx.data.insert($key.to_string(), $value);
        )*
        ctx
    }};
}
