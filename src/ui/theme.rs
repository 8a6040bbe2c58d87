use fltk::{app, enums::Color};

// Dark theme color palette
pub const BG_DARK: u32 = 0x1e1e2e; // main background / sphere canvas
pub const BG_PANEL: u32 = 0x2a2a3a; // sidebar background
pub const BG_WIDGET: u32 = 0x363646; // widget/input background
pub const TEXT_PRIMARY: u32 = 0xcdd6f4;
pub const TEXT_SECONDARY: u32 = 0xa6adc8;
pub const TEXT_DISABLED: u32 = 0x6c7086;
pub const ACCENT_BLUE: u32 = 0x89b4fa; // primary accent, state vector
pub const ACCENT_GREEN: u32 = 0xa6e3a1; // angle-mode accents
pub const ACCENT_YELLOW: u32 = 0xf9e2af; // amplitude-mode accents
pub const ACCENT_MAUVE: u32 = 0xcba6f7; // section headers
pub const SEPARATOR: u32 = 0x585b70;

// Sphere drawing colors
pub const WIRE_FRONT: u32 = 0x6c7086; // near-hemisphere wireframe
pub const WIRE_BACK: u32 = 0x3b3b4f; // far hemisphere, dimmed
pub const AXIS: u32 = 0x9399b2;
pub const VECTOR: u32 = ACCENT_BLUE;
pub const ANNOTATION: u32 = ACCENT_YELLOW;

pub fn apply_dark_theme() {
    set_rgb(BG_PANEL, app::set_background_color);
    set_rgb(BG_WIDGET, app::set_background2_color);
    set_rgb(TEXT_PRIMARY, app::set_foreground_color);
    set_rgb(ACCENT_BLUE, app::set_selection_color);
    set_rgb(TEXT_DISABLED, app::set_inactive_color);

    app::set_scheme(app::Scheme::Gtk);
}

fn set_rgb(hex: u32, setter: fn(u8, u8, u8)) {
    setter(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    );
}

pub fn color(hex: u32) -> Color {
    Color::from_hex(hex)
}

pub fn section_header_color() -> Color {
    Color::from_hex(ACCENT_MAUVE)
}
