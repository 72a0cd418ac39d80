/// Fixed dimensions, colours and output layout for the generated assets

pub mod icon {
    /// Edge length of the square app icon
    pub const SIZE: u32 = 512;

    /// Corner radius of the rounded-square background
    pub const CORNER_RADIUS: u32 = 100;

    /// Maximum alpha of the darkening gradient at the bottom edge
    pub const GRADIENT_MAX_ALPHA: u32 = 30;

    pub const BACKGROUND: [u8; 4] = [76, 175, 80, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 245];
    pub const WHITE_SOLID: [u8; 4] = [255, 255, 255, 255];
    pub const WHEEL_HUB: [u8; 4] = [56, 132, 58, 255];
    pub const GREEN_DARK: [u8; 4] = [46, 125, 50, 255];
    pub const GRAY_LINE: [u8; 4] = [180, 180, 180, 200];
}

pub mod feature_graphic {
    pub const WIDTH: u32 = 1024;
    pub const HEIGHT: u32 = 500;

    /// Radius of the outermost glow ring; alpha fades to zero there
    pub const GLOW_RADIUS: u32 = 300;
    pub const GLOW_MAX_ALPHA: f32 = 25.0;

    /// Icon edge length after resampling, and its gap from the right edge
    pub const ICON_SIZE: u32 = 280;
    pub const ICON_RIGHT_MARGIN: u32 = 100;
    pub const SHADOW_OFFSET: i32 = 6;
    pub const SHADOW_RADIUS: u32 = 55;
    pub const SHADOW: [u8; 4] = [0, 0, 0, 40];

    pub const TITLE_SIZE: f32 = 62.0;
    pub const SUBTITLE_SIZE: f32 = 30.0;
    pub const TAGLINE_SIZE: f32 = 24.0;

    pub const TITLE: &str = "Family";
    pub const TITLE_SECOND_LINE: &str = "Shopping List";
    pub const SUBTITLE: &str = "Shop together. Stay organized.";
    pub const TAGLINE: &str = "Real-time sync  |  Budget tracking  |  Family groups";

    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const DIVIDER: [u8; 4] = [255, 255, 255, 180];
    pub const SUBTITLE_INK: [u8; 4] = [255, 255, 255, 220];
    pub const TAGLINE_INK: [u8; 4] = [255, 255, 255, 160];
}

pub mod mipmap {
    /// Android launcher densities and their square edge length in pixels
    pub const DENSITIES: [(&str, u32); 5] = [
        ("mipmap-mdpi", 48),
        ("mipmap-hdpi", 72),
        ("mipmap-xhdpi", 96),
        ("mipmap-xxhdpi", 144),
        ("mipmap-xxxhdpi", 192),
    ];

    pub const LAUNCHER: &str = "ic_launcher.png";
    pub const LAUNCHER_ROUND: &str = "ic_launcher_round.png";
}

pub mod paths {
    pub const CONFIG_FILE: &str = "asset-gen.yaml";
    pub const ICON: &str = "assets/app-icon-512.png";
    pub const FEATURE_GRAPHIC: &str = "assets/feature-graphic.png";
    pub const ANDROID_RES: &str = "android/app/src/main/res";
}
