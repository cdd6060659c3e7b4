//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Tessera Configuration
# Only override what you want to change -- missing fields use defaults.

[split]
# default_ratio = 0.5    # share kept by the pane being split, 0.0-1.0 exclusive
# min_ratio = 0.1        # resize floor for either side, 0.0-0.5 exclusive

[layout]
# gap = 0                # pixels between panes, 0-64
# outer_padding = 0      # pixels around the tiling area, 0-128

[clipboard]
# read = "ask"           # allow, ask, deny (program-initiated reads)
# write = "allow"        # allow, ask, deny (program-initiated writes)
# paste_protection = true

[window]
# confirm_close_surface = true
# default_title = "tessera"
"##
}
