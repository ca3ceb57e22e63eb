/// Host-side tuning for the browser widget: canvas sizing, DOM hooks and GPU
/// buffer layout. Pose and scene constants live in `pose_core::constants`.

// Canvas
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0; // cap backing store density on high-dpi screens
pub const DEFAULT_CANVAS_ID: &str = "app-canvas"; // auto-mounted on start when present
pub const DEFAULT_IMAGE_ATTR: &str = "data-source-image"; // optional subject image url on the canvas
// keeps touch and pen drags from turning into page pans, which would cancel the pointer
pub const CANVAS_STYLE: [(&str, &str); 2] = [("touch-action", "none"), ("user-select", "none")];

// Overlay
pub const OVERLAY_ID_SUFFIX: &str = "-prompt"; // overlay element id is `<canvas id><suffix>`
pub const OVERLAY_STYLE: &str = "font: 12px ui-monospace, monospace; color: #d1d5db; \
     background: rgba(17, 24, 39, 0.85); padding: 4px 8px; border-radius: 4px; \
     margin-top: 4px; user-select: none;";

// GPU
pub const OBJECT_UNIFORM_STRIDE: u64 = 256; // dynamic-offset alignment for per-object uniforms
pub const MAX_SURFACE_DIM: u32 = 8192;
pub const MAX_TEXTURE_DIM: u32 = 2048; // larger source images are scaled down before upload

// Pointer
pub const PRIMARY_BUTTON: i16 = 0;
pub const CURSOR_IDLE: &str = "default";
pub const CURSOR_HOVER: &str = "grab";
pub const CURSOR_DRAGGING: &str = "grabbing";

// Diagnostics
pub const FPS_LOG_INTERVAL_SECS: f32 = 5.0;
