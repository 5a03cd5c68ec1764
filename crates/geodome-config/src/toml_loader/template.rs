//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Geodome Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

# Fixes the face skew and camera start phase for reproducible runs.
# seed = 42

[shape]
# detail = 4             # 0-7, faces = 20 * 4^detail
# radius = 3.0           # > 0
# max_shift = 1.5        # >= 0, outward shift drawn from [0, max_shift)
# face_scale = 0.9       # (0, 1], 1.0 keeps faces full size

[falloff]
# near = 2.5             # full light color at or below this distance
# far = 2.7              # default_color at or beyond this distance
# default_color = "#000000"

[camera]
# y_speed = 0.0829380460  # 2*pi*0.0132 rad/s
# x_speed = 0.0188495559  # 2*pi*0.003 rad/s
# distance = 2.0
# fov_degrees = 65.0
# near_plane = 0.1
# far_plane = 1000.0
# start_phase_max = 100.0
# start_phase = 0.0      # fixed start phase instead of a random one

[window]
# title = "Geodesic Dome"
# width = 1280
# height = 800
# clear_color = "#000000"

[logging]
# level = "info"         # trace, debug, info, warn, error

# Light rig. Declaring any [[lights]] replaces the whole default rig.
[[lights]]
color = "#d72638"
position = [0.5, 0.2, -0.4]

[[lights]]
color = "#00ff00"
position = [-0.5, 0.0, -0.4]

[[lights]]
color = "#ff2ecc"
position = [0.0, -0.5, 0.0]

[[lights]]
color = "#016fb9"
position = [0.0, 0.4, 0.5]
"##
    .to_string()
}
