//! Default TOML settings template with inline documentation comments.

pub(crate) fn default_config_toml() -> String {
    r##"# mh configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[store]
# path = "/path/to/store.json"   # default: <config dir>/mh/store.json

[walker]
# skip_foreign_namespaces = true # skip SVG / MathML subtrees

[badge]
# clear_after_ms = 5000          # 500-60000

[minimap]
# width = 15                     # 4-64
# min_height = 100               # 10-1000

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
    .to_string()
}
